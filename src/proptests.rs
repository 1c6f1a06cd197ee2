//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{BigInt, BigRat};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        }

        #[test]
        fn integer_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let c = BigInt::new(c);
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a.clone() * (b.clone() * c.clone())
            );
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let c = BigInt::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = BigInt::new(a);
            let neg_a = -a.clone();
            prop_assert!((a + neg_a).is_zero());
        }

        #[test]
        fn integer_subtract_is_add_of_negation(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!(a.clone() - b.clone(), a + (-b));
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let g = a.gcd(&b);

            let rem_a = a.clone() % g.clone();
            let rem_b = b.clone() % g.clone();
            prop_assert!(rem_a.is_zero());
            prop_assert!(rem_b.is_zero());
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Canonicalization laws

        #[test]
        fn canonical_form_is_reduced(num in small_int(), den in non_zero_int()) {
            let r = BigRat::from_i64(num, den).unwrap();
            prop_assert!(!r.denom().is_negative());
            prop_assert!(r.numer().gcd(r.denom()).is_one());
        }

        #[test]
        fn negated_denominator_negates_value(num in small_int(), den in non_zero_int()) {
            let flipped = BigRat::from_i64(num, -den).unwrap();
            let negated = -BigRat::from_i64(num, den).unwrap();
            prop_assert_eq!(flipped, negated);
        }

        #[test]
        fn zero_is_unique(den in non_zero_int()) {
            let pos = BigRat::from_i64(0, den).unwrap();
            let neg = BigRat::from_i64(0, -den).unwrap();
            prop_assert_eq!(pos.clone(), neg);
            prop_assert_eq!(pos, BigRat::zero());
        }

        #[test]
        fn scaling_preserves_equality(
            num in small_int(),
            den in non_zero_int(),
            scale in non_zero_int()
        ) {
            let r = BigRat::from_i64(num, den).unwrap();
            let scaled = BigRat::new(
                BigInt::new(num) * BigInt::new(scale),
                BigInt::new(den) * BigInt::new(scale),
            ).unwrap();
            prop_assert_eq!(r, scaled);
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = BigRat::from_i64(num_a, den_a).unwrap();
            let b = BigRat::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_mul_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = BigRat::from_i64(num_a, den_a).unwrap();
            let b = BigRat::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn rational_sub_is_add_of_negation(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = BigRat::from_i64(num_a, den_a).unwrap();
            let b = BigRat::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!(a.clone() - b.clone(), a + (-b));
        }

        #[test]
        fn negation_distributes_over_mul(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = BigRat::from_i64(num_a, den_a).unwrap();
            let b = BigRat::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!((-&a) * b.clone(), -(a * b));
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            let a = BigRat::from_i64(num, den).unwrap();
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        // Power laws

        #[test]
        fn pow_zero_exponent_is_one(num in small_int(), den in non_zero_int()) {
            let base = BigRat::from_i64(num, den).unwrap();
            let zero = BigRat::from(0i64);
            prop_assert_eq!(base.pow(&zero).unwrap(), BigRat::one());
        }

        #[test]
        fn pow_inverse_cancels(
            num in non_zero_int(),
            den in non_zero_int(),
            exp in 1i64..8i64
        ) {
            let base = BigRat::from_i64(num, den).unwrap();
            let e = BigRat::from(exp);
            let product = base.pow(&e).unwrap() * base.pow(&(-e)).unwrap();
            prop_assert!(product.is_one());
        }

        #[test]
        fn pow_matches_repeated_multiplication(
            num in non_zero_int(),
            den in non_zero_int(),
            exp in 0u8..6u8
        ) {
            let base = BigRat::from_i64(num, den).unwrap();
            let mut expected = BigRat::one();
            for _ in 0..exp {
                expected = expected * base.clone();
            }
            let e = BigRat::from(i64::from(exp));
            prop_assert_eq!(base.pow(&e).unwrap(), expected);
        }
    }
}
