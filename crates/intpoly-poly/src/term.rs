//! Single-variable terms (monomials with a coefficient).
//!
//! A term is the pair `(coefficient, exponent)` standing for `c·x^e`.
//! Terms are plain `Copy` values and never change once built.

use std::fmt;

use intpoly_rings::Coefficient;

/// The term `coeff · x^exp`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Term<C: Coefficient = i64> {
    coeff: C,
    exp: u32,
}

impl<C: Coefficient> Term<C> {
    /// Creates the term `coeff · x^exp`.
    #[must_use]
    pub const fn new(coeff: C, exp: u32) -> Self {
        Self { coeff, exp }
    }

    /// Creates the constant term `coeff · x^0`.
    #[must_use]
    pub const fn constant(coeff: C) -> Self {
        Self::new(coeff, 0)
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> C {
        self.coeff
    }

    /// Returns the exponent.
    #[must_use]
    pub const fn exponent(&self) -> u32 {
        self.exp
    }

    /// Returns true if the coefficient is zero.
    ///
    /// Null terms are never stored in a polynomial.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.coeff.is_null()
    }

    /// Returns true if both terms have the same exponent and can be merged.
    #[must_use]
    pub const fn is_compatible(&self, other: &Self) -> bool {
        self.exp == other.exp
    }

    /// Multiplies two terms (multiplies coefficients, adds exponents).
    ///
    /// # Panics
    ///
    /// Panics if the exponent sum does not fit in a `u32`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let exp = self
            .exp
            .checked_add(other.exp)
            .unwrap_or_else(|| panic!("exponent overflow: x^{} * x^{}", self.exp, other.exp));
        Self::new(self.coeff.mul_wrapping(&other.coeff), exp)
    }

    /// Returns the term with its coefficient negated.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeff.neg_wrapping(), self.exp)
    }

    /// Evaluates the term at `value`.
    #[must_use]
    pub fn eval(&self, value: C) -> C {
        self.coeff.mul_wrapping(&value.pow_wrapping(self.exp))
    }
}

impl<C: Coefficient> From<(C, u32)> for Term<C> {
    fn from((coeff, exp): (C, u32)) -> Self {
        Self::new(coeff, exp)
    }
}

/// Renders `c` for constants and `cx^e` otherwise, e.g. `-9` or `2x^3`.
impl<C: Coefficient> fmt::Display for Term<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exp > 0 {
            write!(f, "{}x^{}", self.coeff, self.exp)
        } else {
            write!(f, "{}", self.coeff)
        }
    }
}
