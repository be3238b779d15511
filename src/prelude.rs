pub use crate::fit::fit_polynomial;
pub use crate::fit::PolyFit;
pub use crate::fit::PolyFitBuilder;
pub use crate::fit::PolyFitProblem;
pub use crate::polynomial::Polynomial;
pub use crate::sample::parse_samples;
pub use crate::sample::Sample;
pub use crate::solver::solve;
pub use crate::solver::solve_in_place;
