use thiserror::Error as ThisError;

/// Errors that can occur when solving a dense linear system.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SolveError {
    /// The coefficient matrix is not square. Only square systems with a
    /// unique solution candidate are handled by this solver.
    #[error(
        "Coefficient matrix must be square, but it has {} rows and {} columns.",
        nrows,
        ncols
    )]
    NonSquareMatrix {
        /// the number of rows of the given matrix
        nrows: usize,
        /// the number of columns of the given matrix
        ncols: usize,
    },

    /// The number of elements of the right hand side does not match the
    /// dimension of the coefficient matrix.
    #[error(
        "Right hand side has {} elements, but the matrix dimension is {}.",
        rhs_len,
        dim
    )]
    DimensionMismatch {
        /// the dimension of the square coefficient matrix
        dim: usize,
        /// the number of elements of the given right hand side
        rhs_len: usize,
    },

    /// Even the best remaining pivot candidate in this column was exactly
    /// zero, so the matrix is singular (up to floating point accuracy) and
    /// the system has no unique solution.
    #[error("Matrix is singular: no nonzero pivot in column {}.", column)]
    SingularMatrix {
        /// the index of the column in which elimination failed
        column: usize,
    },
}
