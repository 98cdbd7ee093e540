//! Property-based tests for the `Maybe` algebra laws.
//!
//! - **Functor identity**: `value.map(|x| x) == value`
//! - **Functor composition**: `value.map(f).map(g) == value.map(|x| g(f(x)))`
//! - **Monad left identity**: `Maybe::some(a).bind(f) == f(a)`
//! - **Monad right identity**: `value.bind(Maybe::some) == value`
//! - **Monad associativity**:
//!   `value.bind(f).bind(g) == value.bind(|x| f(x).bind(g))`
//!
//! Random inputs are generated with proptest to exercise the laws across a
//! wide range of values.

#![cfg(feature = "maybe")]

use proptest::prelude::*;
use sumrail::maybe::Maybe;

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from_nullable)
}

proptest! {
    /// Functor identity: mapping the identity function changes nothing.
    #[test]
    fn prop_map_identity_law(value in any_maybe()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    /// Functor composition: mapping composed functions equals composing maps.
    #[test]
    fn prop_map_composition_law(value in any_maybe()) {
        let add = |n: i32| n.wrapping_add(1);
        let double = |n: i32| n.wrapping_mul(2);

        let left = value.map(add).map(double);
        let right = value.map(|x| double(add(x)));

        prop_assert_eq!(left, right);
    }

    /// Monad left identity: lifting then binding equals applying directly.
    #[test]
    fn prop_bind_left_identity_law(seed in any::<i32>()) {
        let wrap_doubled = |n: i32| Maybe::some(n.wrapping_mul(2));
        prop_assert_eq!(Maybe::some(seed).bind(wrap_doubled), wrap_doubled(seed));
    }

    /// Monad right identity: binding the constructor returns the original.
    #[test]
    fn prop_bind_right_identity_law(value in any_maybe()) {
        prop_assert_eq!(value.bind(Maybe::some), value);
    }

    /// Monad associativity: binds can be reassociated.
    #[test]
    fn prop_bind_associativity_law(value in any_maybe()) {
        let keep_even = |n: i32| if n % 2 == 0 { Maybe::some(n) } else { Maybe::none() };
        let shrink = |n: i32| Maybe::some(n.wrapping_div(2));

        let left = value.bind(keep_even).bind(shrink);
        let right = value.bind(|x| keep_even(x).bind(shrink));

        prop_assert_eq!(left, right);
    }

    /// Bind on None never invokes the binder, whatever the binder is.
    #[test]
    fn prop_bind_skips_binder_on_none(salt in any::<i32>()) {
        let mut invocations = 0;
        let result = Maybe::<i32>::none().bind(|n| {
            invocations += 1;
            Maybe::some(n.wrapping_add(salt))
        });
        prop_assert_eq!(result, Maybe::none());
        prop_assert_eq!(invocations, 0);
    }

    /// The null-collapsing lift agrees with the host Option everywhere.
    #[test]
    fn prop_from_nullable_is_lossless(value in any::<Option<i32>>()) {
        let lifted = Maybe::from_nullable(value);
        prop_assert_eq!(Option::<i32>::from(lifted), value);
    }
}
