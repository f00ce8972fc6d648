// ベンチマークドライバの統合テスト

use functor_dispatch::{
    benchmarks::BenchmarkDriver,
    core::{config_for_preset, AllocationPolicy, BenchmarkConfig, DispatchVariant, SmokePreset},
    reporting::NoOpReporter,
};

#[test]
fn test_smoke_preset_comparison() {
    let driver = BenchmarkDriver::new(
        BenchmarkConfig::from_preset::<SmokePreset>(),
        NoOpReporter::new(),
    )
    .unwrap();

    let comparison = driver.compare();

    assert!(comparison.outputs_identical);
    assert!(comparison.outcomes_agree());
    for outcome in [&comparison.dynamic_dispatch, &comparison.static_dispatch] {
        assert_eq!(outcome.total_calls, 100 * 100);
        assert_eq!(outcome.final_value, 99);
        assert_eq!(outcome.last_output_len, 100);
        assert!(outcome.is_complete());
    }
}

#[test]
fn test_each_iteration_is_independent() {
    // 反復ごとに状態が初期値へ戻るので、反復数を変えても最終状態は同じ
    let one = BenchmarkDriver::new(BenchmarkConfig::new(1, 40), NoOpReporter::new()).unwrap();
    let many = BenchmarkDriver::new(BenchmarkConfig::new(25, 40), NoOpReporter::new()).unwrap();

    for variant in DispatchVariant::ALL {
        assert_eq!(one.run(variant).final_value, many.run(variant).final_value);
        assert_eq!(many.run(variant).total_calls, 25 * 40);
    }
}

#[test]
fn test_leaking_dynamic_functors() {
    let config = config_for_preset("smoke")
        .unwrap()
        .with_allocation(AllocationPolicy::Leak)
        .with_increment(-2)
        .with_initial_value(10);
    let driver = BenchmarkDriver::new(config, NoOpReporter::new()).unwrap();

    let outcome = driver.run_dynamic();

    assert_eq!(outcome.allocation, AllocationPolicy::Leak);
    assert_eq!(outcome.final_value, 10 - 2 * 100);
    assert!(outcome.is_complete());
}

#[test]
fn test_zero_calls_per_iteration() {
    let driver = BenchmarkDriver::new(
        BenchmarkConfig::new(10, 0).with_initial_value(3),
        NoOpReporter::new(),
    )
    .unwrap();

    for variant in DispatchVariant::ALL {
        let outcome = driver.run(variant);

        assert_eq!(outcome.total_calls, 0);
        assert_eq!(outcome.final_value, 3);
        assert_eq!(outcome.last_output_len, 0);
        assert_eq!(outcome.ns_per_call(), 0.0);
    }
}

#[test]
fn test_comparison_json_round_trip() {
    let driver = BenchmarkDriver::new(BenchmarkConfig::new(2, 5), NoOpReporter::new()).unwrap();
    let json = driver.compare().to_json().unwrap();

    let parsed: functor_dispatch::DispatchComparison = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.config, BenchmarkConfig::new(2, 5));
    assert_eq!(parsed.dynamic_dispatch.variant, DispatchVariant::Dynamic);
    assert_eq!(parsed.static_dispatch.variant, DispatchVariant::Static);
}
