//! Property-based tests for the increment law.
//!
//! After n calls through either dispatch strategy the state is v0 + n·d and
//! output i is v0 + (i+1)·d.

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::{expected_outputs, run_dynamic, run_static};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn dynamic_follows_increment_law(d in -1_000i32..1_000, v0 in -100_000i32..100_000, n in 0usize..500) {
        let (value, outputs, count) = run_dynamic(d, v0, n);

        prop_assert_eq!(value, v0 + n as i32 * d);
        prop_assert_eq!(count, n);
        prop_assert_eq!(outputs, expected_outputs(d, v0, n));
    }

    #[test]
    fn static_follows_increment_law(d in -1_000i32..1_000, v0 in -100_000i32..100_000, n in 0usize..500) {
        let (value, outputs, count) = run_static(d, v0, n);

        prop_assert_eq!(value, v0 + n as i32 * d);
        prop_assert_eq!(count, n);
        prop_assert_eq!(outputs, expected_outputs(d, v0, n));
    }

    #[test]
    fn variants_agree(d in any::<i16>(), v0 in any::<i16>(), n in 0usize..200) {
        let (d, v0) = (i32::from(d), i32::from(v0));

        prop_assert_eq!(run_dynamic(d, v0, n), run_static(d, v0, n));
    }
}
