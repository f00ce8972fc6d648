// ベンチマーク設定の定義と検証

use super::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 外側ループの各反復で確保したファンクタの扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationPolicy {
    /// 反復の終わりに解放する
    #[default]
    Release,
    /// `Box::leak` で解放せずに残す（アロケータへの負荷も測定に含める）
    Leak,
}

impl AllocationPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Leak => "leak",
        }
    }
}

impl fmt::Display for AllocationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ベンチマークの実行設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    iterations: usize,
    calls_per_iteration: usize,
    increment: i32,
    initial_value: i32,
    allocation: AllocationPolicy,
    progress_interval: usize,
}

impl BenchmarkConfig {
    pub const DEFAULT_ITERATIONS: usize = 10_000;
    pub const DEFAULT_INCREMENT: i32 = 1;
    pub const DEFAULT_INITIAL_VALUE: i32 = -1;
    pub const DEFAULT_PROGRESS_INTERVAL: usize = 1_000;

    pub fn new(iterations: usize, calls_per_iteration: usize) -> Self {
        Self {
            iterations,
            calls_per_iteration,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_calls_per_iteration(mut self, calls: usize) -> Self {
        self.calls_per_iteration = calls;
        self
    }

    pub fn with_increment(mut self, increment: i32) -> Self {
        self.increment = increment;
        self
    }

    pub fn with_initial_value(mut self, initial_value: i32) -> Self {
        self.initial_value = initial_value;
        self
    }

    pub fn with_allocation(mut self, allocation: AllocationPolicy) -> Self {
        self.allocation = allocation;
        self
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn calls_per_iteration(&self) -> usize {
        self.calls_per_iteration
    }

    pub fn increment(&self) -> i32 {
        self.increment
    }

    pub fn initial_value(&self) -> i32 {
        self.initial_value
    }

    pub fn allocation(&self) -> AllocationPolicy {
        self.allocation
    }

    pub fn progress_interval(&self) -> usize {
        self.progress_interval
    }

    /// 1反復を終えた時点の状態値（`i32` に収まらなければ `None`）
    pub fn expected_final_value(&self) -> Option<i32> {
        let calls = i64::try_from(self.calls_per_iteration).ok()?;
        let total = calls.checked_mul(i64::from(self.increment))?;
        let value = i64::from(self.initial_value).checked_add(total)?;
        i32::try_from(value).ok()
    }

    /// 全反復を通した呼び出し総数
    pub fn expected_total_calls(&self) -> Option<usize> {
        self.iterations.checked_mul(self.calls_per_iteration)
    }

    /// 設定値を検証する
    pub fn validate(&self) -> ValidationResult<()> {
        if self.progress_interval == 0 {
            return Err(ValidationError::new(
                "progress_interval",
                "1以上である必要があります",
            ));
        }

        if self.expected_final_value().is_none() {
            return Err(ValidationError::new(
                "increment",
                format!(
                    "{} + {} * {} が i32 の範囲を超えます",
                    self.initial_value, self.calls_per_iteration, self.increment
                ),
            ));
        }

        if self.expected_total_calls().is_none() {
            return Err(ValidationError::new(
                "iterations",
                "呼び出し総数が usize の範囲を超えます",
            ));
        }

        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
            calls_per_iteration: Self::DEFAULT_ITERATIONS,
            increment: Self::DEFAULT_INCREMENT,
            initial_value: Self::DEFAULT_INITIAL_VALUE,
            allocation: AllocationPolicy::Release,
            progress_interval: Self::DEFAULT_PROGRESS_INTERVAL,
        }
    }
}
