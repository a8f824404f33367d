//! # momex-poly
//!
//! Monomials and monomial orderings for moment matrices.
//!
//! This crate provides:
//! - [`PackedMonomial`]: fixed-width exponent vectors with cached degree
//! - [`Variable`]: problem variables by position
//! - [`Monomial`]: the capability interface used by the extractors
//! - [`MonomialOrder`] and [`monomials_up_to_degree`] for building supports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

pub mod monomial;
pub mod ordering;

pub use monomial::{Monomial, PackedMonomial, Variable, MAX_VARS};
pub use ordering::{monomials_up_to_degree, MonomialOrder};

#[cfg(test)]
mod proptests;
