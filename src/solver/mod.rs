//! Dense linear solver based on Gaussian elimination with partial pivoting.
//!
//! The solver reduces the coefficient matrix to upper triangular form with
//! a unit diagonal and then obtains the solution by back substitution. Before
//! each elimination step the row with the largest absolute value in the
//! current column is swapped up to serve as the pivot row, which keeps the
//! multipliers bounded by one in magnitude and makes the elimination
//! numerically backward stable for all practical purposes, see e.g.
//! (Higham2002).

use nalgebra::{DMatrix, DVector, Scalar};
use num_traits::Float;

mod error;
pub use error::SolveError;

#[cfg(test)]
mod test;

/// Solves the linear system `A * x = b` for `x`, where `A` is a square
/// matrix of dimension `n` and `b` is a vector with `n` elements.
///
/// This is the owned variant of [`solve_in_place`]. It takes the coefficient
/// matrix and right hand side by value, which makes call sites read nicely
/// when the operands are not needed afterwards.
///
/// # Arguments
/// * `matrix`: the square coefficient matrix `A`
/// * `rhs`: the right hand side `b`
///
/// # Returns
/// The solution vector `x` on success. See [`SolveError`] for the failure
/// cases.
///
/// # Example
/// ```rust
/// use nalgebra::{DMatrix, DVector};
/// use gepp::solver::solve;
///
/// let a: DMatrix<f64> = DMatrix::from_row_slice(2, 2, &[2., 1., 1., 3.]);
/// let b = DVector::from_vec(vec![1., 2.]);
/// let x = solve(a, b).unwrap();
/// assert!((2. * x[0] + x[1] - 1.).abs() < 1e-12);
/// assert!((x[0] + 3. * x[1] - 2.).abs() < 1e-12);
/// ```
pub fn solve<ScalarType>(
    mut matrix: DMatrix<ScalarType>,
    mut rhs: DVector<ScalarType>,
) -> Result<DVector<ScalarType>, SolveError>
where
    ScalarType: Scalar + Float,
{
    solve_in_place(&mut matrix, &mut rhs)
}

/// Solves the linear system `A * x = b` for `x` like [`solve`], but reuses
/// the storage of the operands instead of copying them.
///
/// On success the matrix is left in upper triangular form with a unit
/// diagonal and the right hand side contains the result of the forward
/// elimination. Neither operand is modified when the dimensions do not
/// match, so shape errors leave the system intact. When elimination runs
/// into a zero pivot the operands are left partially eliminated.
///
/// # Arguments
/// * `matrix`: the square coefficient matrix `A`, overwritten during
///   elimination
/// * `rhs`: the right hand side `b`, overwritten during elimination
///
/// # Returns
/// The solution vector `x`, or an error when the matrix is not square, the
/// right hand side length does not match, or the matrix turns out singular.
/// A zero dimensional system is reported as solved by the empty vector.
pub fn solve_in_place<ScalarType>(
    matrix: &mut DMatrix<ScalarType>,
    rhs: &mut DVector<ScalarType>,
) -> Result<DVector<ScalarType>, SolveError>
where
    ScalarType: Scalar + Float,
{
    let dim = matrix.nrows();
    if matrix.ncols() != dim {
        return Err(SolveError::NonSquareMatrix {
            nrows: dim,
            ncols: matrix.ncols(),
        });
    }
    if rhs.len() != dim {
        return Err(SolveError::DimensionMismatch {
            dim,
            rhs_len: rhs.len(),
        });
    }

    for col in 0..dim {
        // partial pivoting: bring the row with the largest absolute value
        // in this column to the diagonal
        let mut pivot_row = col;
        let mut pivot_magnitude = matrix[(col, col)].abs();
        for row in col + 1..dim {
            let magnitude = matrix[(row, col)].abs();
            if magnitude > pivot_magnitude {
                pivot_row = row;
                pivot_magnitude = magnitude;
            }
        }
        if pivot_row != col {
            matrix.swap_rows(col, pivot_row);
            rhs.swap_rows(col, pivot_row);
        }

        let pivot = matrix[(col, col)];
        if pivot == ScalarType::zero() {
            return Err(SolveError::SingularMatrix { column: col });
        }

        // normalize the pivot row to a unit diagonal, columns left of the
        // pivot are already zero
        for idx in col..dim {
            let element = matrix[(col, idx)];
            matrix[(col, idx)] = element / pivot;
        }
        let scaled = rhs[col] / pivot;
        rhs[col] = scaled;

        // eliminate the column from all rows below the pivot row
        for row in col + 1..dim {
            let factor = matrix[(row, col)];
            if factor == ScalarType::zero() {
                continue;
            }
            for idx in col..dim {
                let above = matrix[(col, idx)];
                let element = matrix[(row, idx)];
                matrix[(row, idx)] = element - factor * above;
            }
            let element = rhs[row];
            rhs[row] = element - factor * scaled;
        }
    }

    // back substitution, without divisions since the diagonal is one
    let mut solution = DVector::from_element(dim, ScalarType::zero());
    for row in (0..dim).rev() {
        let mut value = rhs[row];
        for col in row + 1..dim {
            value = value - matrix[(row, col)] * solution[col];
        }
        solution[row] = value;
    }
    Ok(solution)
}
