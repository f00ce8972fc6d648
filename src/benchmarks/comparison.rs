//! 動的ディスパッチと静的ディスパッチの比較レポート

use crate::core::{BenchResult, BenchmarkConfig, BenchmarkOutcome, DispatchVariant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 両方式の計測結果をまとめたもの
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchComparison {
    pub timestamp: DateTime<Utc>,
    pub config: BenchmarkConfig,
    pub dynamic_dispatch: BenchmarkOutcome,
    pub static_dispatch: BenchmarkOutcome,
    /// 1反復分の出力列が両方式でビット単位に一致したか
    pub outputs_identical: bool,
}

impl DispatchComparison {
    pub fn new(
        config: BenchmarkConfig,
        dynamic_dispatch: BenchmarkOutcome,
        static_dispatch: BenchmarkOutcome,
        outputs_identical: bool,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            config,
            dynamic_dispatch,
            static_dispatch,
            outputs_identical,
        }
    }

    /// 呼び出し数・最終状態・出力長が両方式で一致しているか
    pub fn outcomes_agree(&self) -> bool {
        let (d, s) = (&self.dynamic_dispatch, &self.static_dispatch);
        d.total_calls == s.total_calls
            && d.final_value == s.final_value
            && d.last_output_len == s.last_output_len
    }

    /// 動的ディスパッチの所要時間 / 静的ディスパッチの所要時間
    pub fn slowdown(&self) -> Option<f64> {
        let static_nanos = self.static_dispatch.elapsed.as_nanos();
        if static_nanos == 0 {
            return None;
        }
        Some(self.dynamic_dispatch.elapsed.as_nanos() as f64 / static_nanos as f64)
    }

    /// 速かった方式（同時間なら `None`）
    pub fn faster(&self) -> Option<DispatchVariant> {
        use std::cmp::Ordering;

        match self
            .dynamic_dispatch
            .elapsed
            .cmp(&self.static_dispatch.elapsed)
        {
            Ordering::Less => Some(DispatchVariant::Dynamic),
            Ordering::Greater => Some(DispatchVariant::Static),
            Ordering::Equal => None,
        }
    }

    /// JSON 形式のレポート
    pub fn to_json(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 結果サマリーの表示
    pub fn print_summary(&self) {
        println!("📊 ディスパッチ方式比較サマリー");
        println!("{}", "=".repeat(60));
        println!("   🔴 Dynamic: {}", self.dynamic_dispatch);
        println!("   🟢 Static:  {}", self.static_dispatch);

        match (self.faster(), self.slowdown()) {
            (Some(variant), Some(ratio)) => {
                println!("   🏆 Faster: {variant} (dynamic/static = {ratio:.2}x)")
            }
            (Some(variant), None) => println!("   🏆 Faster: {variant}"),
            (None, _) => println!("   🤝 同じ所要時間でした"),
        }

        if self.outputs_identical && self.outcomes_agree() {
            println!("✅ 両方式の出力は一致しています。");
        } else {
            println!("⚠️  両方式の出力が一致しません。");
        }
    }
}
