// ディスパッチ方式間の挙動一致を確認する統合テスト

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::{expected_outputs, run_dynamic, run_static, RecordingSink};
use functor_dispatch::{
    functor::{DynAssign, StaticAssign},
    make_dyn_functor, make_static_functor, CountingSink, DynFunctor, Increment, StaticFunctor,
};

#[test]
fn test_reference_scenario() {
    for run in [run_dynamic(1, -1, 10), run_static(1, -1, 10)] {
        let (value, outputs, count) = run;

        assert_eq!(outputs, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(value, 9);
        assert_eq!(count, 10);
    }
}

#[test]
fn test_increment_five_from_zero() {
    for run in [run_dynamic(5, 0, 3), run_static(5, 0, 3)] {
        assert_eq!(run, (15, vec![5, 10, 15], 3));
    }
}

#[test]
fn test_zero_invocations() {
    assert_eq!(run_dynamic(4, 42, 0), (42, Vec::new(), 0));
    assert_eq!(run_static(4, 42, 0), (42, Vec::new(), 0));
}

#[test]
fn test_variants_bit_identical() {
    let cases = [(1, -1, 1_000), (-3, 100, 257), (0, 7, 50), (12, i32::MIN, 64)];

    for (increment, initial, calls) in cases {
        let dynamic = run_dynamic(increment, initial, calls);
        let fixed = run_static(increment, initial, calls);

        assert_eq!(dynamic, fixed);
        assert_eq!(dynamic.1, expected_outputs(increment, initial, calls));
    }
}

#[test]
fn test_custom_sink_through_both_variants() {
    let add = Increment::new(2);

    let mut dynamic_sink = RecordingSink::default();
    let dynamic = make_dyn_functor(&add, &dynamic_sink);
    let mut dynamic_value = 0;
    for _ in 0..3 {
        dynamic.call(&mut dynamic_value, &mut dynamic_sink);
    }

    let mut static_sink = RecordingSink::default();
    let fixed = make_static_functor(&add);
    let mut static_value = 0;
    for _ in 0..3 {
        fixed.call(&mut static_value, &mut static_sink);
    }

    assert_eq!(dynamic_sink.entries, vec![(0, 2), (1, 4), (2, 6)]);
    assert_eq!(dynamic_sink.entries, static_sink.entries);
}

#[test]
fn test_helper_matches_manual_construction() {
    let add = Increment::new(7);

    let manual_dyn: DynAssign<'_, Increment<i32>, CountingSink> = DynAssign::new(&add);
    let helper_dyn = make_dyn_functor(&add, &CountingSink::new());
    let manual_static: StaticAssign<'_, Increment<i32>> = StaticAssign::new(&add);
    let helper_static = make_static_functor(&add);

    let mut values = [0; 4];
    let mut sinks = [CountingSink::new(); 4];
    for _ in 0..5 {
        manual_dyn.call(&mut values[0], &mut sinks[0]);
        helper_dyn.call(&mut values[1], &mut sinks[1]);
        manual_static.call(&mut values[2], &mut sinks[2]);
        helper_static.call(&mut values[3], &mut sinks[3]);
    }

    assert!(values.iter().all(|&v| v == 35));
    assert!(sinks.iter().all(|s| s.len() == 5));
}
