//! Coefficient ring traits.
//!
//! Polynomial coefficients live in a fixed-width signed integer type.
//! Every arithmetic operation wraps around on overflow, so the coefficient
//! type behaves as the ring of integers modulo `2^BITS` and all ring laws
//! hold exactly.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{PrimInt, Signed, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};

/// A fixed-width signed integer usable as a polynomial coefficient.
///
/// # Laws
///
/// - `add`, `sub`, `mul` and `neg` wrap around at the type's bit width
/// - `zero()` is the additive identity and `one()` the multiplicative one
/// - `pow_wrapping` agrees with repeated wrapping multiplication
///
/// Implemented for every primitive signed integer through a blanket impl.
pub trait Coefficient:
    PrimInt
    + Signed
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + Hash
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Wrapping sum.
    #[must_use]
    fn add_wrapping(&self, other: &Self) -> Self {
        WrappingAdd::wrapping_add(self, other)
    }

    /// Wrapping difference.
    #[must_use]
    fn sub_wrapping(&self, other: &Self) -> Self {
        WrappingSub::wrapping_sub(self, other)
    }

    /// Wrapping product.
    #[must_use]
    fn mul_wrapping(&self, other: &Self) -> Self {
        WrappingMul::wrapping_mul(self, other)
    }

    /// Wrapping negation. `MIN` negates to itself.
    #[must_use]
    fn neg_wrapping(&self) -> Self {
        WrappingNeg::wrapping_neg(self)
    }

    /// Computes `self^exp` with wrapping multiplication.
    ///
    /// `x^0` is one for every `x`, including zero.
    #[must_use]
    fn pow_wrapping(&self, exp: u32) -> Self {
        if exp == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = *self;
        let mut exp = exp;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_wrapping(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_wrapping(&base);
            }
        }

        result
    }

    /// Returns true if this is the additive identity.
    #[must_use]
    fn is_null(&self) -> bool {
        self.is_zero()
    }

    /// Returns the additive inverse of one.
    #[must_use]
    fn minus_one() -> Self {
        Self::one().neg_wrapping()
    }
}

impl<T> Coefficient for T where
    T: PrimInt
        + Signed
        + WrappingAdd
        + WrappingSub
        + WrappingMul
        + WrappingNeg
        + Hash
        + Debug
        + Display
        + Send
        + Sync
        + 'static
{
}
