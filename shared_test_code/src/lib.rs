#![warn(missing_docs)]
//! a helper crate which carries common code used by the benchtests and the
//! integration tests.
use gepp::prelude::*;
use nalgebra::{DMatrix, DVector, Scalar};
use num_traits::Float;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// create holding `count` the elements from range [first,last] with linear spacing. (equivalent to matlabs linspace)
pub fn linspace<ScalarType: Float + Scalar>(
    first: ScalarType,
    last: ScalarType,
    count: usize,
) -> DVector<ScalarType> {
    if count < 2 {
        return DVector::from(vec![first; count]);
    }
    let n_minus_one = ScalarType::from(count - 1).expect("Could not convert usize to Float");
    let lin: Vec<ScalarType> = (0..count)
        .map(|n| {
            first
                + (last - first) / (n_minus_one)
                    * ScalarType::from(n).expect("Could not convert usize to Float")
        })
        .collect();
    DVector::from(lin)
}

/// the four cosine samples that the cubic fit examples of the gepp crate
/// are built around: x in {-0.1, -0.02, 0.02, 0.1} and y = cos(x)
pub fn cosine_samples() -> Vec<Sample<f64>> {
    [-0.1, -0.02, 0.02, 0.1]
        .iter()
        .map(|&x| Sample { x, y: x.cos() })
        .collect()
}

/// the 4x4 linear system of the cubic fit through the cosine samples,
/// with the decreasing powers of the sample locations as matrix rows
pub fn cosine_fit_system() -> (DMatrix<f64>, DVector<f64>) {
    let problem = PolyFitBuilder::new()
        .samples(cosine_samples())
        .build()
        .expect("the cosine samples form a valid fitting problem");
    (problem.matrix().clone(), problem.rhs().clone())
}

/// a reproducible random system of the given dimension whose matrix is
/// strictly diagonally dominant. Such matrices are always invertible and
/// well conditioned, so the systems are safe to use in accuracy tests.
pub fn random_diagonally_dominant_system(dim: usize, seed: u64) -> (DMatrix<f64>, DVector<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = DMatrix::from_fn(dim, dim, |_, _| rng.gen_range(-1.0..1.0));
    for idx in 0..dim {
        matrix[(idx, idx)] += dim as f64;
    }
    let rhs = DVector::from_fn(dim, |_, _| rng.gen_range(-1.0..1.0));
    (matrix, rhs)
}

/// applies the same row permutation to a matrix and a right hand side,
/// so the permuted system describes the identical set of equations
pub fn permute_system(
    matrix: &DMatrix<f64>,
    rhs: &DVector<f64>,
    permutation: &[usize],
) -> (DMatrix<f64>, DVector<f64>) {
    assert_eq!(
        permutation.len(),
        matrix.nrows(),
        "permutation length must match the number of rows"
    );
    let permuted_matrix = DMatrix::from_fn(matrix.nrows(), matrix.ncols(), |row, col| {
        matrix[(permutation[row], col)]
    });
    let permuted_rhs = DVector::from_fn(rhs.len(), |row, _| rhs[permutation[row]]);
    (permuted_matrix, permuted_rhs)
}
