use crate::solver::SolveError;
use thiserror::Error as ThisError;

/// Errors that can occur when assembling a polynomial fitting problem from
/// samples.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum FitBuilderError {
    /// No samples were given. At least one sample is needed to determine
    /// a polynomial.
    #[error("At least one sample is required to build a fitting problem.")]
    NoSamples,

    /// Two samples share the same location. The interpolation matrix
    /// contains two identical rows in that case and the coefficients are
    /// not uniquely determined.
    #[error(
        "Samples {} and {} share the same x value. Sample locations must be pairwise distinct.",
        first,
        second
    )]
    DuplicateAbscissa {
        /// the index of the earlier sample of the offending pair
        first: usize,
        /// the index of the later sample of the offending pair
        second: usize,
    },
}

/// Any error of the complete fitting pipeline, from assembling the problem
/// to solving the linear system for the coefficients.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum FitError {
    /// The fitting problem could not be assembled from the samples.
    #[error(transparent)]
    Build(#[from] FitBuilderError),
    /// The linear system for the coefficients could not be solved.
    #[error(transparent)]
    Solve(#[from] SolveError),
}
