//! # intpoly-poly
//!
//! Sparse univariate polynomial arithmetic over fixed-width integers.
//!
//! This crate provides:
//! - `Term`, an immutable coefficient/exponent pair
//! - `TermList`, a descending, zero-free, duplicate-free term sequence
//! - `SparsePoly`, with merge-based addition, subtraction, multiplication,
//!   evaluation, degree and equality
//!
//! ## Representation
//!
//! Only non-zero terms are stored, leading term first. The zero polynomial
//! is the empty list; its degree is -1 and it evaluates to -1 at every
//! point. Arithmetic never re-sorts: each algorithm appends terms in order
//! and drops zero coefficients as it goes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod error;
pub mod sparse;
pub mod term;
pub mod terms;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use sparse::{SparsePoly, NO_DEGREE};
pub use term::Term;
pub use terms::TermList;
