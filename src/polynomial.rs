use nalgebra::{DVector, Scalar};
use num_traits::Float;
use std::fmt;

/// A dense polynomial in one variable, stored as the vector of its
/// coefficients from the highest power down to the constant term. This is
/// the same convention in which the coefficients come out of a polynomial
/// fit, so the solution vector of the fit can be used directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<ScalarType>
where
    ScalarType: Scalar,
{
    coefficients: DVector<ScalarType>,
}

impl<ScalarType> Polynomial<ScalarType>
where
    ScalarType: Scalar + Float,
{
    /// Creates a polynomial from its coefficients, given from the highest
    /// power down to the constant term. Coefficients are stored as given,
    /// leading zeros are not stripped.
    pub fn new(coefficients: DVector<ScalarType>) -> Self {
        Self { coefficients }
    }

    /// The degree of the polynomial, which is one less than the number of
    /// stored coefficients. A polynomial without coefficients has degree
    /// zero as well, so check [`Polynomial::coefficients`] if that
    /// distinction matters.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// The stored coefficients from the highest power down to the constant
    /// term.
    pub fn coefficients(&self) -> &DVector<ScalarType> {
        &self.coefficients
    }

    /// Evaluates the polynomial at the given location using Horner's
    /// scheme. A polynomial without coefficients evaluates to zero
    /// everywhere.
    pub fn eval(&self, x: ScalarType) -> ScalarType {
        self.coefficients
            .iter()
            .fold(ScalarType::zero(), |acc, &coefficient| acc * x + coefficient)
    }
}

impl<ScalarType> From<Vec<ScalarType>> for Polynomial<ScalarType>
where
    ScalarType: Scalar + Float,
{
    fn from(coefficients: Vec<ScalarType>) -> Self {
        Self::new(DVector::from_vec(coefficients))
    }
}

impl<ScalarType> fmt::Display for Polynomial<ScalarType>
where
    ScalarType: Scalar + Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0");
        }
        let degree = self.degree();
        for (idx, &coefficient) in self.coefficients.iter().enumerate() {
            // the leading coefficient keeps its sign, all others append
            // as " + c" or " - c" with the magnitude
            let magnitude = if idx == 0 {
                coefficient
            } else if coefficient.is_sign_negative() {
                write!(f, " - ")?;
                coefficient.abs()
            } else {
                write!(f, " + ")?;
                coefficient
            };
            match degree - idx {
                0 => write!(f, "{}", magnitude)?,
                1 => write!(f, "{}*x", magnitude)?,
                power => write!(f, "{}*x^{}", magnitude, power)?,
            }
        }
        Ok(())
    }
}
