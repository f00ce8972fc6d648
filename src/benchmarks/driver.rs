//! ベンチマークドライバ
//!
//! 外側ループで演算・出力先・ファンクタを毎回作り直し、内側ループで呼び出しを繰り返す。
//! 反復間で共有するものは何もない。

use super::comparison::DispatchComparison;
use crate::core::{
    AllocationPolicy, BenchResult, BenchmarkConfig, BenchmarkOutcome, BenchmarkReporter,
    DispatchVariant,
};
use crate::functor::{invoke_dynamic, invoke_static, make_dyn_functor, make_static_functor};
use crate::operation::Increment;
use std::hint::black_box;
use std::time::Instant;

/// 計測なしで1反復だけ実行した結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRun {
    pub final_value: i32,
    pub outputs: Vec<i32>,
    pub count: usize,
}

/// ディスパッチ方式ごとの計測を行うドライバ
pub struct BenchmarkDriver<R> {
    config: BenchmarkConfig,
    reporter: R,
}

impl<R: BenchmarkReporter> BenchmarkDriver<R> {
    /// 設定を検証してドライバを作成
    pub fn new(config: BenchmarkConfig, reporter: R) -> BenchResult<Self> {
        config.validate()?;
        Ok(Self { config, reporter })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 指定した方式で計測
    pub fn run(&self, variant: DispatchVariant) -> BenchmarkOutcome {
        match variant {
            DispatchVariant::Dynamic => self.run_dynamic(),
            DispatchVariant::Static => self.run_static(),
        }
    }

    /// vtable 経由のファンクタで計測
    pub fn run_dynamic(&self) -> BenchmarkOutcome {
        let increment = self.config.increment();
        let calls = self.config.calls_per_iteration();
        let allocation = self.config.allocation();

        self.measure(DispatchVariant::Dynamic, allocation, |value, out| {
            let add = Increment::new(increment);
            let functor = make_dyn_functor(&add, &*out);
            match allocation {
                AllocationPolicy::Release => invoke_dynamic(&*functor, value, out, calls),
                AllocationPolicy::Leak => invoke_dynamic(Box::leak(functor), value, out, calls),
            }
        })
    }

    /// 単相化されたファンクタで計測
    ///
    /// ファンクタはスタック上にあるため、確保方針は常に `Release` として記録する。
    pub fn run_static(&self) -> BenchmarkOutcome {
        let increment = self.config.increment();
        let calls = self.config.calls_per_iteration();

        self.measure(DispatchVariant::Static, AllocationPolicy::Release, |value, out| {
            let add = Increment::new(increment);
            let functor = make_static_functor(&add);
            invoke_static(&functor, value, out, calls)
        })
    }

    /// 両方式を計測し、出力の一致も確認する
    pub fn compare(&self) -> DispatchComparison {
        let dynamic_dispatch = self.run_dynamic();
        let static_dispatch = self.run_static();
        let outputs_identical =
            self.sample(DispatchVariant::Dynamic) == self.sample(DispatchVariant::Static);

        DispatchComparison::new(
            self.config.clone(),
            dynamic_dispatch,
            static_dispatch,
            outputs_identical,
        )
    }

    /// 計測せずに1反復分を実行し、出力列をそのまま返す
    pub fn sample(&self, variant: DispatchVariant) -> SampleRun {
        let add = Increment::new(self.config.increment());
        let calls = self.config.calls_per_iteration();
        let mut final_value = self.config.initial_value();
        let mut outputs = Vec::new();

        let count = match variant {
            DispatchVariant::Dynamic => {
                let functor = make_dyn_functor(&add, &outputs);
                invoke_dynamic(&*functor, &mut final_value, &mut outputs, calls)
            }
            DispatchVariant::Static => {
                let functor = make_static_functor(&add);
                invoke_static(&functor, &mut final_value, &mut outputs, calls)
            }
        };

        SampleRun {
            final_value,
            outputs,
            count,
        }
    }

    fn measure<F>(
        &self,
        variant: DispatchVariant,
        allocation: AllocationPolicy,
        mut run_iteration: F,
    ) -> BenchmarkOutcome
    where
        F: FnMut(&mut i32, &mut Vec<i32>) -> usize,
    {
        let iterations = self.config.iterations();
        let interval = self.config.progress_interval();
        let mut total_calls = 0usize;
        let mut final_value = self.config.initial_value();
        let mut last_output_len = 0;

        self.reporter.report_started(variant, &self.config);
        let start = Instant::now();

        for k in 0..iterations {
            let mut value = self.config.initial_value();
            let mut out = Vec::new();

            total_calls += black_box(run_iteration(&mut value, &mut out));

            final_value = value;
            last_output_len = black_box(&out).len();

            let completed = k + 1;
            if completed % interval == 0 {
                self.reporter.report_progress(variant, completed, iterations);
            }
        }

        let outcome = BenchmarkOutcome {
            variant,
            allocation,
            iterations,
            calls_per_iteration: self.config.calls_per_iteration(),
            total_calls,
            final_value,
            last_output_len,
            elapsed: start.elapsed(),
        };
        self.reporter.report_completed(&outcome);
        outcome
    }
}
