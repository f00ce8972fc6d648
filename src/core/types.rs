// ベンチマーク結果のデータ型定義

use super::config::AllocationPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 測定対象のディスパッチ方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchVariant {
    /// vtable 経由の呼び出し
    Dynamic,
    /// 単相化された呼び出し
    Static,
}

impl DispatchVariant {
    pub const ALL: [DispatchVariant; 2] = [DispatchVariant::Dynamic, DispatchVariant::Static];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dynamic => "dynamic",
            Self::Static => "static",
        }
    }
}

impl fmt::Display for DispatchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1回のベンチマーク実行の結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkOutcome {
    pub variant: DispatchVariant,
    pub allocation: AllocationPolicy,
    /// 外側ループの回数（構築したファンクタの数）
    pub iterations: usize,
    /// 1ファンクタあたりの呼び出し回数
    pub calls_per_iteration: usize,
    /// 全呼び出しの戻り値の合計
    pub total_calls: usize,
    /// 最後の反復終了時の状態値
    pub final_value: i32,
    /// 最後の反復で出力先に積まれた要素数
    pub last_output_len: usize,
    pub elapsed: Duration,
}

impl BenchmarkOutcome {
    /// 期待される呼び出し総数
    pub fn expected_calls(&self) -> usize {
        self.iterations.saturating_mul(self.calls_per_iteration)
    }

    /// 全ての呼び出しが1を返したかどうか
    pub fn is_complete(&self) -> bool {
        self.total_calls == self.expected_calls()
    }

    /// 1呼び出しあたりの平均時間（ナノ秒）
    pub fn ns_per_call(&self) -> f64 {
        if self.total_calls == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.total_calls as f64
    }
}

impl fmt::Display for BenchmarkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} calls in {:?} ({:.3} ns/call)",
            self.variant,
            self.allocation,
            self.total_calls,
            self.elapsed,
            self.ns_per_call()
        )
    }
}
