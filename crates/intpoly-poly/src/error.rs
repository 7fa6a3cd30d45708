//! Errors raised when building a polynomial from caller-supplied terms.

use thiserror::Error;

/// A term list that breaks the normalization invariants.
///
/// Arithmetic on already-built polynomials never fails; only construction
/// from raw terms is checked.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A stored term has coefficient zero.
    #[error("term {index} has a zero coefficient")]
    ZeroCoefficient {
        /// Position of the offending term.
        index: usize,
    },

    /// Exponents are not strictly decreasing.
    #[error("term {index} has exponent {exponent}, expected less than {previous}")]
    NotDescending {
        /// Position of the offending term.
        index: usize,
        /// Exponent of the term before it.
        previous: u32,
        /// Exponent of the offending term.
        exponent: u32,
    },
}
