use super::*;
use approx::assert_relative_eq;
use assert_matches::assert_matches;

#[test]
fn solve_produces_the_expected_solution_for_a_hand_checked_system() {
    // solution is x = (1, -2, 3)
    let a = DMatrix::from_row_slice(3, 3, &[2., 1., 1., 1., 3., 2., 1., 0., 0.]);
    let b = DVector::from_vec(vec![3., 1., 1.]);
    let x = solve(a, b).expect("system must be solvable");
    let expected = DVector::from_vec(vec![1., -2., 3.]);
    assert_relative_eq!(x, expected, epsilon = 1e-12);
}

#[test]
fn solve_handles_a_one_dimensional_system() {
    let a = DMatrix::from_row_slice(1, 1, &[4.]);
    let b = DVector::from_vec(vec![8.]);
    let x = solve(a, b).expect("system must be solvable");
    assert_relative_eq!(x[0], 2., epsilon = 1e-15);
}

#[test]
fn solve_swaps_rows_when_the_diagonal_element_is_zero() {
    // without pivoting the first elimination step would divide by zero
    let a = DMatrix::from_row_slice(2, 2, &[0., 2., 1., 1.]);
    let b = DVector::from_vec(vec![2., 3.]);
    let x = solve(a, b).expect("system must be solvable");
    let expected = DVector::from_vec(vec![2., 1.]);
    assert_relative_eq!(x, expected, epsilon = 1e-12);
}

#[test]
fn solve_picks_the_largest_pivot_even_when_the_diagonal_is_nonzero() {
    // row two dominates column one, so it becomes the first pivot row
    let a = DMatrix::from_row_slice(3, 3, &[1e-13, 1., 1., 10., 1., 0., 1., 1., 1.]);
    let b = DVector::from_vec(vec![2., 11., 3.]);
    let x = solve(a.clone(), b.clone()).expect("system must be solvable");
    assert_relative_eq!(&a * &x, b, epsilon = 1e-9);
}

#[test]
fn solve_reports_a_singular_matrix_with_the_failing_column() {
    // the second row is twice the first, the matrix has rank one
    let a = DMatrix::from_row_slice(2, 2, &[1., 2., 2., 4.]);
    let b = DVector::from_vec(vec![1., 2.]);
    let error = solve(a, b).expect_err("singular system must not be solvable");
    assert_matches!(error, SolveError::SingularMatrix { column: 1 });
}

#[test]
fn solve_reports_a_singular_matrix_when_a_whole_column_is_zero() {
    let a = DMatrix::from_row_slice(2, 2, &[0., 1., 0., 2.]);
    let b = DVector::from_vec(vec![1., 2.]);
    let error = solve(a, b).expect_err("singular system must not be solvable");
    assert_matches!(error, SolveError::SingularMatrix { column: 0 });
}

#[test]
fn solve_rejects_a_nonsquare_matrix() {
    let a = DMatrix::from_row_slice(2, 3, &[1., 2., 3., 4., 5., 6.]);
    let b = DVector::from_vec(vec![1., 2.]);
    let error = solve(a, b).expect_err("nonsquare systems must be rejected");
    assert_eq!(
        error,
        SolveError::NonSquareMatrix { nrows: 2, ncols: 3 }
    );
}

#[test]
fn solve_rejects_a_right_hand_side_of_mismatched_length() {
    let a = DMatrix::from_row_slice(2, 2, &[1., 2., 3., 4.]);
    let b = DVector::from_vec(vec![1., 2., 3.]);
    let error = solve(a, b).expect_err("mismatched right hand sides must be rejected");
    assert_eq!(error, SolveError::DimensionMismatch { dim: 2, rhs_len: 3 });
}

#[test]
fn shape_errors_leave_the_operands_untouched() {
    let a = DMatrix::from_row_slice(2, 3, &[1., 2., 3., 4., 5., 6.]);
    let b = DVector::from_vec(vec![1., 2.]);
    let mut a_mut = a.clone();
    let mut b_mut = b.clone();
    assert!(solve_in_place(&mut a_mut, &mut b_mut).is_err());
    assert_eq!(a_mut, a);
    assert_eq!(b_mut, b);

    let a = DMatrix::from_row_slice(2, 2, &[1., 2., 3., 4.]);
    let b = DVector::from_vec(vec![1., 2., 3.]);
    let mut a_mut = a.clone();
    let mut b_mut = b.clone();
    assert!(solve_in_place(&mut a_mut, &mut b_mut).is_err());
    assert_eq!(a_mut, a);
    assert_eq!(b_mut, b);
}

#[test]
fn identity_systems_return_the_right_hand_side_bit_for_bit() {
    for dim in 1..=10 {
        let a = DMatrix::<f64>::identity(dim, dim);
        let b = DVector::from_fn(dim, |idx, _| idx as f64 + 0.5);
        let x = solve(a, b.clone()).expect("identity systems must be solvable");
        assert_eq!(x, b);
    }
}

#[test]
fn the_empty_system_is_solved_by_the_empty_vector() {
    let a = DMatrix::<f64>::zeros(0, 0);
    let b = DVector::<f64>::zeros(0);
    let x = solve(a, b).expect("the empty system is trivially solvable");
    assert!(x.is_empty());
}

#[test]
fn solve_in_place_leaves_a_unit_upper_triangular_matrix_behind() {
    let mut a = DMatrix::from_row_slice(3, 3, &[2., 1., 1., 4., 3., 3., 8., 7., 9.]);
    let mut b = DVector::from_vec(vec![1., 2., 3.]);
    solve_in_place(&mut a, &mut b).expect("system must be solvable");
    for row in 0..3 {
        assert_eq!(a[(row, row)], 1.);
        for col in 0..row {
            assert_eq!(a[(row, col)], 0.);
        }
    }
}
