use approx::assert_relative_eq;
use assert_matches::assert_matches;
use gepp::prelude::*;
use gepp::solver::SolveError;
use nalgebra::DMatrix;
use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use shared_test_code::cosine_fit_system;
use shared_test_code::cosine_samples;
use shared_test_code::linspace;
use shared_test_code::permute_system;
use shared_test_code::random_diagonally_dominant_system;

/// the text of the sample file that ships with the crate, with the
/// ordinates written as cosine expressions and Unicode minus signs
const COSINE_SAMPLE_FILE: &str = include_str!("../../data/cosine.txt");

#[test]
fn solution_of_the_cosine_system_agrees_with_the_lu_solver_of_nalgebra() {
    let (matrix, rhs) = cosine_fit_system();
    let mine = solve(matrix.clone(), rhs.clone()).expect("system must be solvable");
    let reference = matrix
        .lu()
        .solve(&rhs)
        .expect("the reference decomposition must succeed");
    assert_relative_eq!(mine, reference, epsilon = 1e-12);
}

#[test]
fn solutions_of_random_systems_agree_with_the_lu_solver_of_nalgebra() {
    for dim in 2..=10 {
        let (matrix, rhs) = random_diagonally_dominant_system(dim, 17 * dim as u64 + 1);
        let mine = solve(matrix.clone(), rhs.clone()).expect("system must be solvable");
        let reference = matrix
            .lu()
            .solve(&rhs)
            .expect("the reference decomposition must succeed");
        assert_relative_eq!(mine, reference, epsilon = 1e-12);
    }
}

#[test]
fn solutions_of_random_systems_satisfy_the_equations_they_came_from() {
    for dim in 2..=10 {
        let (matrix, rhs) = random_diagonally_dominant_system(dim, 1000 + dim as u64);
        let solution = solve(matrix.clone(), rhs.clone()).expect("system must be solvable");
        let residual = (&matrix * &solution - &rhs).amax();
        assert!(
            residual < 1e-9,
            "residual {} too large for dimension {}",
            residual,
            dim
        );
    }
}

#[test]
fn reordering_the_equations_does_not_change_the_solution() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for dim in [3usize, 5, 8] {
        let (matrix, rhs) = random_diagonally_dominant_system(dim, dim as u64);
        let baseline = solve(matrix.clone(), rhs.clone()).expect("system must be solvable");

        let mut permutation: Vec<usize> = (0..dim).collect();
        permutation.shuffle(&mut rng);
        let (permuted_matrix, permuted_rhs) = permute_system(&matrix, &rhs, &permutation);
        let permuted_solution =
            solve(permuted_matrix, permuted_rhs).expect("permuted system must be solvable");
        assert_relative_eq!(permuted_solution, baseline, epsilon = 1e-12);
    }
}

#[test]
fn identity_systems_return_their_right_hand_side_unchanged() {
    for dim in 1..=10 {
        let matrix = DMatrix::<f64>::identity(dim, dim);
        let rhs = DVector::from_fn(dim, |idx, _| 1.25 * idx as f64 - 3.);
        let solution = solve(matrix, rhs.clone()).expect("identity systems must be solvable");
        assert_eq!(solution, rhs);
    }
}

#[test]
fn an_exactly_singular_system_is_reported_as_singular() {
    let matrix = DMatrix::from_row_slice(2, 2, &[1., 2., 2., 4.]);
    let rhs = DVector::from_vec(vec![1., 2.]);
    let error = solve(matrix, rhs).expect_err("rank deficient systems must be rejected");
    assert_matches!(error, SolveError::SingularMatrix { .. });
}

#[test]
fn the_cubic_fit_stays_close_to_the_cosine_over_the_sampled_interval() {
    let fit = fit_polynomial(cosine_samples()).expect("the cosine samples must fit");
    // the samples are reproduced up to rounding error
    assert!(fit.max_residual() < 1e-12);
    // between the samples the deviation is the cubic interpolation error,
    // which is tiny on an interval this small
    for &x in linspace(-0.1, 0.1, 500).iter() {
        assert!(
            (fit.polynomial().eval(x) - x.cos()).abs() < 1e-4,
            "interpolation error too large at x = {}",
            x
        );
    }
}

#[test]
fn the_shipped_sample_file_parses_and_fits_like_the_programmatic_samples() {
    let samples = parse_samples(COSINE_SAMPLE_FILE).expect("the shipped sample file must parse");
    assert_eq!(samples, cosine_samples());

    let fit = fit_polynomial(samples).expect("the shipped samples must fit");
    let (matrix, rhs) = cosine_fit_system();
    let reference = solve(matrix, rhs).expect("the cosine system must be solvable");
    assert_eq!(fit.polynomial().coefficients(), &reference);
}
