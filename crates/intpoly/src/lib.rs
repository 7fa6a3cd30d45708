//! # intpoly
//!
//! Sparse single-variable polynomials with fixed-width integer coefficients.
//!
//! ## Features
//!
//! - **Sparse Storage**: only non-zero terms, leading term first
//! - **Merge Arithmetic**: addition, subtraction and multiplication that keep
//!   the term list normalized without re-sorting
//! - **Selectable Width**: coefficients are any signed primitive integer,
//!   `i64` by default, with wraparound on overflow
//!
//! ## Quick Start
//!
//! ```rust
//! use intpoly::prelude::*;
//!
//! let p1 = SparsePoly::<i64>::from_terms([(2, 3), (9, 0)]).unwrap();
//! let p2 = SparsePoly::from_terms([(-2, 3), (1, 0)]).unwrap();
//!
//! let sum = p1.add(&p2);
//! assert_eq!(sum.to_string(), "10");
//! assert_eq!(sum.degree(), 0);
//!
//! let x = SparsePoly::<i64>::x();
//! assert_eq!(x.mul(&x).to_string(), "1x^2");
//! assert_eq!(SparsePoly::<i64>::monomial(8, 1).evaluate(3), 24);
//! ```
//!
//! ## Zero polynomial
//!
//! The zero polynomial has an empty term list, degree -1, formats as `"0"`
//! and evaluates to -1 at every point.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use intpoly_poly as poly;
pub use intpoly_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use intpoly_poly::{PolyError, SparsePoly, Term, TermList, NO_DEGREE};
    pub use intpoly_rings::Coefficient;
}
