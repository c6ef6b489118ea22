#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! ## Composition Laws
//! - **Associativity**: `compose2(f, compose2(g, h)) == compose2(compose2(f, g), h)`
//! - **Left Identity**: `compose2(identity, f) == f`
//! - **Right Identity**: `compose2(f, identity) == f`
//! - **Nesting**: `composeN(f1, ..., fN)(x) == fN(...(f1(x)))` for N in 2..=9
//!
//! ## Flip Laws
//! - **Double Flip Identity**: `flip(flip(f)) == f`

use funk::compose;
use funk::compose::{
    compose2, compose3, compose4, compose5, compose6, compose7, compose8, compose9, flip, identity,
};
use proptest::prelude::*;

fn stage(offset: i64) -> impl Fn(i64) -> i64 + Clone {
    move |value: i64| value.wrapping_mul(3).wrapping_add(offset)
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Left Identity Law: compose2(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i64>()) {
        let function = stage(7);
        prop_assert_eq!(compose2(identity, function.clone())(x), function(x));
    }

    /// Right Identity Law: compose2(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i64>()) {
        let function = stage(7);
        prop_assert_eq!(compose2(function.clone(), identity)(x), function(x));
    }

    /// Associativity Law
    #[test]
    fn prop_compose_associativity(x in any::<i64>()) {
        let (f, g, h) = (stage(1), stage(2), stage(3));

        let left_associative = compose2(f.clone(), compose2(g.clone(), h.clone()));
        let right_associative = compose2(compose2(f, g), h);

        prop_assert_eq!(left_associative(x), right_associative(x));
    }

    /// compose! agrees with nested compose2
    #[test]
    fn prop_compose_macro_matches_nesting(x in any::<i64>()) {
        let (f, g, h) = (stage(1), stage(2), stage(3));
        prop_assert_eq!(compose!(f.clone(), g.clone(), h.clone())(x), h(g(f(x))));
    }
}

// =============================================================================
// Nesting Law, every arity
// =============================================================================

proptest! {
    #[test]
    fn prop_compose2_nests(x in any::<i64>()) {
        let (f1, f2) = (stage(1), stage(2));
        prop_assert_eq!(compose2(f1.clone(), f2.clone())(x), f2(f1(x)));
    }

    #[test]
    fn prop_compose3_nests(x in any::<i64>()) {
        let (f1, f2, f3) = (stage(1), stage(2), stage(3));
        prop_assert_eq!(compose3(f1.clone(), f2.clone(), f3.clone())(x), f3(f2(f1(x))));
    }

    #[test]
    fn prop_compose4_nests(x in any::<i64>()) {
        let (f1, f2, f3, f4) = (stage(1), stage(2), stage(3), stage(4));
        prop_assert_eq!(
            compose4(f1.clone(), f2.clone(), f3.clone(), f4.clone())(x),
            f4(f3(f2(f1(x))))
        );
    }

    #[test]
    fn prop_compose5_nests(x in any::<i64>()) {
        let f = stage;
        prop_assert_eq!(
            compose5(f(1), f(2), f(3), f(4), f(5))(x),
            f(5)(f(4)(f(3)(f(2)(f(1)(x)))))
        );
    }

    #[test]
    fn prop_compose6_nests(x in any::<i64>()) {
        let f = stage;
        prop_assert_eq!(
            compose6(f(1), f(2), f(3), f(4), f(5), f(6))(x),
            f(6)(f(5)(f(4)(f(3)(f(2)(f(1)(x))))))
        );
    }

    #[test]
    fn prop_compose7_nests(x in any::<i64>()) {
        let f = stage;
        prop_assert_eq!(
            compose7(f(1), f(2), f(3), f(4), f(5), f(6), f(7))(x),
            f(7)(f(6)(f(5)(f(4)(f(3)(f(2)(f(1)(x)))))))
        );
    }

    #[test]
    fn prop_compose8_nests(x in any::<i64>()) {
        let f = stage;
        prop_assert_eq!(
            compose8(f(1), f(2), f(3), f(4), f(5), f(6), f(7), f(8))(x),
            f(8)(f(7)(f(6)(f(5)(f(4)(f(3)(f(2)(f(1)(x))))))))
        );
    }

    #[test]
    fn prop_compose9_nests(x in any::<i64>()) {
        let f = stage;
        prop_assert_eq!(
            compose9(f(1), f(2), f(3), f(4), f(5), f(6), f(7), f(8), f(9))(x),
            f(9)(f(8)(f(7)(f(6)(f(5)(f(4)(f(3)(f(2)(f(1)(x)))))))))
        );
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    /// Double Flip Identity Law: flip(flip(f))(a, b) == f(a, b)
    #[test]
    fn prop_flip_double_identity(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |left: i32, right: i32| left.wrapping_sub(right);
        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
    }
}
