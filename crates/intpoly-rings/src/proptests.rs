//! Property-based tests for wrapping coefficient arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Coefficient;

    proptest! {
        // Ring axioms under wraparound

        #[test]
        fn coeff_add_commutative(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(a.add_wrapping(&b), b.add_wrapping(&a));
        }

        #[test]
        fn coeff_mul_associative(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
            prop_assert_eq!(
                a.mul_wrapping(&b).mul_wrapping(&c),
                a.mul_wrapping(&b.mul_wrapping(&c))
            );
        }

        #[test]
        fn coeff_distributive(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul_wrapping(&b.add_wrapping(&c));
            let right = a.mul_wrapping(&b).add_wrapping(&a.mul_wrapping(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn coeff_additive_inverse(a in any::<i64>()) {
            prop_assert_eq!(a.add_wrapping(&a.neg_wrapping()), 0);
        }

        // Exponentiation

        #[test]
        fn pow_matches_std_i64(a in any::<i64>(), e in 0u32..200) {
            prop_assert_eq!(Coefficient::pow_wrapping(&a, e), a.wrapping_pow(e));
        }

        #[test]
        fn pow_matches_std_i32(a in any::<i32>(), e in 0u32..200) {
            prop_assert_eq!(Coefficient::pow_wrapping(&a, e), a.wrapping_pow(e));
        }

        #[test]
        fn pow_adds_exponents(a in -50i64..50, m in 0u32..20, n in 0u32..20) {
            // a^(m+n) = a^m * a^n
            let left = Coefficient::pow_wrapping(&a, m + n);
            let right = Coefficient::pow_wrapping(&a, m).mul_wrapping(&Coefficient::pow_wrapping(&a, n));
            prop_assert_eq!(left, right);
        }
    }
}
