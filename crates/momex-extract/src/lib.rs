//! Solution extraction from completed moment matrices.
//!
//! Given a moment matrix and moment values consistent with a finite atomic
//! measure, this crate recovers the atoms (the solutions of the underlying
//! polynomial system):
//!
//! - **Lasserre**: row reduction of the row space, multiplication matrices
//!   over a monomial basis, and a random Schur triangularization
//! - **Lasserre (repeated)**: the same with fresh random draws each pass,
//!   keeping the last
//! - **Dreesen (prototype)**: per-variable shift pencils on the column
//!   space; values are unmatched across variables
//! - **Dreesen**: one stacked pencil with shared eigenvectors, so values are
//!   matched across variables
//!
//! Every entry point takes the random source explicitly; a seeded generator
//! makes the result reproducible.
//!
//! # Example
//!
//! ```
//! use momex_extract::{extract_solutions_dreesen, ExtractionConfig};
//! use momex_moments::MomentMatrix;
//! use momex_poly::{MonomialOrder, Variable};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Atoms at x = 1 and x = 2 with equal weight
//! let mm = MomentMatrix::new(1, 2, MonomialOrder::Grevlex).unwrap();
//! let ys = [1.0, 1.5, 2.5, 4.5, 8.5];
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let sols = extract_solutions_dreesen(&mm, &ys, &ExtractionConfig::dreesen(), &mut rng).unwrap();
//! assert_eq!(sols.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod basis;
pub mod config;
pub mod diagonalize;
pub mod dreesen;
pub mod error;
pub mod lasserre;
pub mod operators;
pub mod reader;
pub mod solutions;

pub use basis::{select_basis, BasisSelection, RankEstimate};
pub use config::ExtractionConfig;
pub use dreesen::{extract_solutions_dreesen, extract_solutions_dreesen_proto};
pub use error::ExtractError;
pub use lasserre::{extract_solutions_lasserre, extract_solutions_lasserre_average};
pub use operators::{lasserre_operators, monomial_index, shift_selections, ShiftSelection};
pub use solutions::Solutions;

use momex_moments::MomentSource;
use momex_poly::Monomial;

/// The variable type of a moment source.
pub type VarOf<S> = <<S as MomentSource>::Mono as Monomial>::Var;

#[cfg(test)]
mod proptests;
