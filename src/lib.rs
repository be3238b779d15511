#![warn(missing_docs)]
//!
//! # Introduction
//!
//! This crate solves dense linear systems `$A\,x = b$` with Gaussian
//! elimination and partial pivoting, and uses that solver to fit
//! interpolating polynomials through data points. Both the matrix `$A$`
//! and the right hand side `$b$` are given as dynamically sized nalgebra
//! types, so the solver works for any dimension, although it is written
//! with the small systems in mind that come out of curve fitting problems.
//!
//! The elimination reduces the matrix to upper triangular form with a unit
//! diagonal. Before each elimination step the remaining row with the
//! largest absolute value in the current column is swapped up to become
//! the pivot row. This bounds the multipliers by one in magnitude, which
//! is what makes plain Gaussian elimination practical for floating point
//! arithmetic in the first place, see (Higham2002) chapter 9. When even
//! the best pivot candidate is exactly zero the matrix is singular and the
//! solver reports an error instead of guessing.
//!
//! # Usage and Workflow
//!
//! For plain linear systems there is nothing to set up and
//! [`solve`](crate::solver::solve) (or its storage reusing sibling
//! [`solve_in_place`](crate::solver::solve_in_place)) is all that is
//! needed.
//!
//! For polynomial fitting the workflow follows the builder pattern:
//!
//! 1. Collect the samples, either programmatically or by parsing a text
//!    file with [`parse_samples`](crate::sample::parse_samples).
//! 2. Add them to a [`PolyFitBuilder`](crate::fit::PolyFitBuilder) and
//!    call `build`, which validates the samples and assembles the linear
//!    system for the coefficients.
//! 3. Call [`fit`](crate::fit::PolyFitProblem::fit) on the problem, which
//!    runs the elimination and hands back the fitted
//!    [`Polynomial`](crate::polynomial::Polynomial).
//!
//! # Example
//! ```rust
//! use gepp::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // fit a cubic through four points sampled from the cosine
//! let locations: [f64; 4] = [-0.1, -0.02, 0.02, 0.1];
//! let fit = PolyFitBuilder::new()
//!     .samples(locations.iter().map(|&x| Sample { x, y: x.cos() }))
//!     .build()?
//!     .fit()?;
//!
//! // four samples with distinct locations determine the cubic exactly,
//! // so the residual at the samples is rounding error only
//! assert!(fit.max_residual() < 1e-12);
//! println!("p(x) = {}", fit.polynomial());
//! # Ok(())
//! # }
//! ```
//!
//! # References and Further Reading
//! (Higham2002) Higham, N. Accuracy and Stability of Numerical Algorithms. *SIAM*, 2nd edition (2002). DOI: [10.1137/1.9780898718027](https://doi.org/10.1137/1.9780898718027)
//!
//! (Golub2013) Golub, G., Van Loan, C. Matrix Computations. *Johns Hopkins University Press*, 4th edition (2013), chapter 3.

/// polynomial fitting problems built on top of the elimination solver
pub mod fit;
/// dense polynomials and their evaluation
pub mod polynomial;
/// commonly useful imports
pub mod prelude;
/// samples and parsing them from plain text
pub mod sample;
/// the dense linear solver
pub mod solver;
