//! Fitting polynomials through sample points.
//!
//! For `n` samples with pairwise distinct locations there is exactly one
//! polynomial of degree `n - 1` that passes through all of them. Its
//! coefficients are the solution of the linear system `V * c = y`, where
//! the rows of `V` are the powers `[x^(n-1), ..., x^2, x, 1]` of the sample
//! locations and `y` are the sample values. This module assembles that
//! system from samples and solves it with the elimination solver of this
//! crate.
//!
//! The workflow follows the usual builder pattern: collect samples with a
//! [`PolyFitBuilder`], turn them into a checked [`PolyFitProblem`], then
//! call [`PolyFitProblem::fit`] to obtain the [`PolyFit`] result. The
//! [`fit_polynomial`] convenience function performs all of those steps in
//! one call.

use crate::polynomial::Polynomial;
use crate::sample::Sample;
use crate::solver;
use crate::solver::SolveError;
use nalgebra::{DMatrix, DVector, Scalar};
use num_traits::Float;

mod error;
pub use error::{FitBuilderError, FitError};


/// A builder that collects the samples for a polynomial fitting problem.
///
/// # Usage
/// Add samples with [`PolyFitBuilder::sample`] or in bulk with
/// [`PolyFitBuilder::samples`], then call [`PolyFitBuilder::build`], which
/// validates the samples and assembles the linear system.
#[derive(Debug, Clone)]
pub struct PolyFitBuilder<ScalarType>
where
    ScalarType: Scalar + Float,
{
    samples: Vec<Sample<ScalarType>>,
}

impl<ScalarType> PolyFitBuilder<ScalarType>
where
    ScalarType: Scalar + Float,
{
    /// Creates a builder without any samples.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Adds a single sample `(x, y)`.
    pub fn sample(mut self, x: ScalarType, y: ScalarType) -> Self {
        self.samples.push(Sample { x, y });
        self
    }

    /// Adds all samples of the given collection in order.
    pub fn samples<Samples>(mut self, samples: Samples) -> Self
    where
        Samples: IntoIterator<Item = Sample<ScalarType>>,
    {
        self.samples.extend(samples);
        self
    }

    /// Validates the collected samples and assembles the fitting problem.
    ///
    /// # Returns
    /// The checked problem, or an error when no samples were given or two
    /// samples share the same location.
    pub fn build(self) -> Result<PolyFitProblem<ScalarType>, FitBuilderError> {
        if self.samples.is_empty() {
            return Err(FitBuilderError::NoSamples);
        }
        // quadratic in the number of samples, which is fine for the small
        // systems this crate is made for
        for (first, earlier) in self.samples.iter().enumerate() {
            for (offset, later) in self.samples[first + 1..].iter().enumerate() {
                if earlier.x == later.x {
                    return Err(FitBuilderError::DuplicateAbscissa {
                        first,
                        second: first + 1 + offset,
                    });
                }
            }
        }

        let dim = self.samples.len();
        let matrix = DMatrix::from_fn(dim, dim, |row, col| {
            self.samples[row].x.powi((dim - 1 - col) as i32)
        });
        let rhs = DVector::from_iterator(dim, self.samples.iter().map(|sample| sample.y));
        Ok(PolyFitProblem {
            matrix,
            rhs,
            samples: self.samples,
        })
    }
}

impl<ScalarType> Default for PolyFitBuilder<ScalarType>
where
    ScalarType: Scalar + Float,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A validated polynomial fitting problem, i.e. the linear system whose
/// solution is the coefficient vector of the interpolating polynomial.
#[derive(Debug, Clone)]
pub struct PolyFitProblem<ScalarType>
where
    ScalarType: Scalar + Float,
{
    matrix: DMatrix<ScalarType>,
    rhs: DVector<ScalarType>,
    samples: Vec<Sample<ScalarType>>,
}

impl<ScalarType> PolyFitProblem<ScalarType>
where
    ScalarType: Scalar + Float,
{
    /// The coefficient matrix of the fitting problem. Row `i` contains the
    /// decreasing powers of the location of sample `i`.
    pub fn matrix(&self) -> &DMatrix<ScalarType> {
        &self.matrix
    }

    /// The right hand side of the fitting problem, i.e. the sample values.
    pub fn rhs(&self) -> &DVector<ScalarType> {
        &self.rhs
    }

    /// The samples this problem was built from.
    pub fn samples(&self) -> &[Sample<ScalarType>] {
        &self.samples
    }

    /// Solves the fitting problem for the polynomial coefficients.
    ///
    /// Distinct sample locations guarantee a unique solution in exact
    /// arithmetic, but locations that are too close to each other can
    /// still produce a matrix that is singular in floating point, which is
    /// reported as a [`SolveError`].
    pub fn fit(self) -> Result<PolyFit<ScalarType>, SolveError> {
        let PolyFitProblem {
            matrix,
            rhs,
            samples,
        } = self;
        let coefficients = solver::solve(matrix, rhs)?;
        Ok(PolyFit {
            polynomial: Polynomial::new(coefficients),
            samples,
        })
    }
}

/// The result of fitting a polynomial through samples.
#[derive(Debug, Clone)]
pub struct PolyFit<ScalarType>
where
    ScalarType: Scalar + Float,
{
    polynomial: Polynomial<ScalarType>,
    samples: Vec<Sample<ScalarType>>,
}

impl<ScalarType> PolyFit<ScalarType>
where
    ScalarType: Scalar + Float,
{
    /// The fitted polynomial.
    pub fn polynomial(&self) -> &Polynomial<ScalarType> {
        &self.polynomial
    }

    /// The samples the polynomial was fitted through.
    pub fn samples(&self) -> &[Sample<ScalarType>] {
        &self.samples
    }

    /// The largest absolute deviation of the polynomial from the sample
    /// values. Since the polynomial interpolates the samples exactly, this
    /// only measures the rounding error of the elimination and should be
    /// close to machine precision for well conditioned problems.
    pub fn max_residual(&self) -> ScalarType {
        self.samples
            .iter()
            .map(|sample| (self.polynomial.eval(sample.x) - sample.y).abs())
            .fold(ScalarType::zero(), ScalarType::max)
    }
}

/// Fits the interpolating polynomial through the given samples in one
/// call. This is shorthand for collecting the samples in a
/// [`PolyFitBuilder`], building the problem and solving it.
pub fn fit_polynomial<ScalarType, Samples>(
    samples: Samples,
) -> Result<PolyFit<ScalarType>, FitError>
where
    ScalarType: Scalar + Float,
    Samples: IntoIterator<Item = Sample<ScalarType>>,
{
    let fit = PolyFitBuilder::new().samples(samples).build()?.fit()?;
    Ok(fit)
}
