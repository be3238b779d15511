use nalgebra::Scalar;
use thiserror::Error as ThisError;

/// The Unicode minus sign. Data exported from spreadsheets or typeset
/// documents often carries this character instead of the ASCII hyphen, so
/// the parser accepts both.
const UNICODE_MINUS: char = '\u{2212}';

/// A single observation, i.e. a point `(x, y)` that a curve is fitted
/// through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<ScalarType>
where
    ScalarType: Scalar,
{
    /// the location (independent variable) of the observation
    pub x: ScalarType,
    /// the observed value at that location
    pub y: ScalarType,
}

/// The right hand side of a sample line before evaluation. Besides plain
/// numbers, the text format allows the ordinate to be written as one of a
/// small set of trigonometric functions applied to a numeric argument,
/// e.g. `cos(0.25)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YExpr {
    /// a plain numeric literal
    Literal(f64),
    /// the cosine of the argument
    Cos(f64),
    /// the sine of the argument
    Sin(f64),
    /// the tangent of the argument
    Tan(f64),
}

impl YExpr {
    /// Parses the ordinate expression of a sample line. The line number is
    /// only used for error reporting.
    pub fn parse(token: &str, line: usize) -> Result<Self, SampleParseError> {
        let token = token.trim();
        let Some(open) = token.find('(') else {
            return parse_number(token, line).map(YExpr::Literal);
        };
        let name = token[..open].trim();
        let argument = token[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| SampleParseError::MalformedExpression {
                token: token.to_string(),
                line,
            })?;
        let argument = parse_number(argument, line)?;
        match name {
            "cos" => Ok(YExpr::Cos(argument)),
            "sin" => Ok(YExpr::Sin(argument)),
            "tan" => Ok(YExpr::Tan(argument)),
            _ => Err(SampleParseError::UnknownFunction {
                name: name.to_string(),
                line,
            }),
        }
    }

    /// Evaluates the expression to the ordinate value it describes.
    pub fn evaluate(&self) -> f64 {
        match *self {
            YExpr::Literal(value) => value,
            YExpr::Cos(argument) => argument.cos(),
            YExpr::Sin(argument) => argument.sin(),
            YExpr::Tan(argument) => argument.tan(),
        }
    }
}

impl std::str::FromStr for YExpr {
    type Err = SampleParseError;

    /// Parses a standalone ordinate expression. A bare expression has no
    /// surrounding input, so errors report line 1.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::parse(token, 1)
    }
}

/// Errors that can occur when parsing sample data from text.
///
/// All variants carry the one based line number of the offending line in
/// the input, so the error message points the user at the problem.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SampleParseError {
    /// A nonempty line did not contain the comma that separates the
    /// abscissa from the ordinate.
    #[error("Line {}: missing ',' between the x and y value.", line)]
    MissingSeparator {
        /// the one based line number
        line: usize,
    },

    /// A token that should have been a floating point number could not be
    /// parsed as one.
    #[error("Line {}: cannot parse '{}' as a number.", line, token)]
    InvalidNumber {
        /// the offending token
        token: String,
        /// the one based line number
        line: usize,
    },

    /// A function expression used a function name other than the supported
    /// cos, sin and tan.
    #[error("Line {}: unknown function '{}', expected one of cos, sin, tan.", line, name)]
    UnknownFunction {
        /// the function name that was found
        name: String,
        /// the one based line number
        line: usize,
    },

    /// A token looked like a function expression but was not of the form
    /// `name(argument)`, e.g. because the closing parenthesis is missing.
    #[error("Line {}: malformed function expression '{}'.", line, token)]
    MalformedExpression {
        /// the offending token
        token: String,
        /// the one based line number
        line: usize,
    },
}

/// Parses a whole block of text into samples, one sample per line. Lines
/// that are empty or contain only whitespace are skipped, but they still
/// count for the line numbers reported in errors. Parsing stops at the
/// first offending line.
pub fn parse_samples(text: &str) -> Result<Vec<Sample<f64>>, SampleParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_sample_line(line, idx + 1))
        .collect()
}

/// Parses a single line of the form `<x>, <y>`, where `x` is a number and
/// `y` is a [`YExpr`]. Whitespace around the tokens is ignored and the
/// Unicode minus sign (U+2212) is accepted wherever a minus sign can
/// appear. The line number is only used for error reporting.
pub fn parse_sample_line(line: &str, line_number: usize) -> Result<Sample<f64>, SampleParseError> {
    let (x_token, y_token) = line
        .split_once(',')
        .ok_or(SampleParseError::MissingSeparator { line: line_number })?;
    let x = parse_number(x_token, line_number)?;
    let y = YExpr::parse(y_token, line_number)?.evaluate();
    Ok(Sample { x, y })
}

fn parse_number(token: &str, line: usize) -> Result<f64, SampleParseError> {
    let token = token.trim();
    token
        .replace(UNICODE_MINUS, "-")
        .parse()
        .map_err(|_| SampleParseError::InvalidNumber {
            token: token.to_string(),
            line,
        })
}
