//! # momex
//!
//! Solution extraction from numerically completed moment matrices.
//!
//! When a moment relaxation of a polynomial system is tight, the completed
//! moment matrix is the moment matrix of a finite atomic measure whose atoms
//! are the solutions. `momex` recovers those atoms.
//!
//! ## Crates
//!
//! - [`poly`]: packed monomials and monomial orders
//! - [`linalg`]: row reduction, sorted SVD, Schur forms and matrix pencils
//! - [`moments`]: moment matrices indexed by monomials
//! - [`extract`]: the Lasserre and Dreesen extractors
//!
//! ## Quick Start
//!
//! ```rust
//! use momex::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mm = MomentMatrix::new(2, 2, MonomialOrder::Grevlex).unwrap();
//! let ys = mm.moments_of_atoms(&[(0.5, vec![1.0, 2.0]), (0.5, vec![2.0, -1.0])]);
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let sols = extract_solutions_lasserre(&mm, &ys, &ExtractionConfig::default(), &mut rng).unwrap();
//! assert_eq!(sols.len(), 2);
//! for point in sols.points() {
//!     assert_eq!(point.len(), 2);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use momex_extract as extract;
pub use momex_linalg as linalg;
pub use momex_moments as moments;
pub use momex_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use momex_extract::{
        extract_solutions_dreesen, extract_solutions_dreesen_proto, extract_solutions_lasserre,
        extract_solutions_lasserre_average, ExtractError, ExtractionConfig, Solutions,
    };
    pub use momex_linalg::{LinalgError, ReductionConfig};
    pub use momex_moments::{MomentError, MomentMatrix, MomentSource};
    pub use momex_poly::{Monomial, MonomialOrder, PackedMonomial, Variable};
}
