//! Cube-attack engine against the 6-round nonce-misused ASCON permutation.
//!
//! The numeric half measures cube sums of the reduced permutation; the
//! symbolic half computes, in closed form over GF(2), the coefficient of a
//! chosen high-degree monomial in a chosen output bit after six S-box
//! rounds. Matching the two yields linear systems in the secret capacity
//! bits, which an external algebraic solver closes.

pub mod algebra;
pub mod config;
pub mod constants;
pub mod cube;
pub mod cube_sum;
pub mod extraction;
pub mod io;
pub mod permutation;
pub mod phases;
pub mod propagation;
pub mod solver;
pub mod trails;

// The working vocabulary of the crate.
pub use algebra::coefficient::CompactCoeff;
pub use algebra::coor::Coor;
pub use algebra::monom::{Monom, Monomial};
pub use algebra::poly_map::{CompactMap, PolyMap};
pub use algebra::state::SymbolicState;
pub use config::AttackConfig;
pub use cube::Cube;
pub use cube_sum::cube_sum;
pub use permutation::{permute, State};
pub use phases::RecoveryContext;
pub use solver::{ShellSolver, Solver};
