//! コンパイル時プリセット
//!
//! 型レベルでベンチマーク規模を表現し、`BenchmarkConfig::from_preset` で実体化する。

use super::config::BenchmarkConfig;
use super::error::{BenchError, BenchResult};

/// 型レベルのベンチマーク規模
pub trait BenchmarkPreset {
    /// プリセット名（CLI で指定する名前）
    const NAME: &'static str;

    const DESCRIPTION: &'static str;

    /// 外側ループの回数
    const ITERATIONS: usize;

    /// 1ファンクタあたりの呼び出し回数
    const CALLS_PER_ITERATION: usize;
}

/// 元の計測と同じ 10,000 × 10,000 の規模
pub struct ReferencePreset;

impl BenchmarkPreset for ReferencePreset {
    const NAME: &'static str = "reference";
    const DESCRIPTION: &'static str = "基準計測（10,000 × 10,000 呼び出し）";
    const ITERATIONS: usize = 10_000;
    const CALLS_PER_ITERATION: usize = 10_000;
}

/// 動作確認用の小規模設定
pub struct SmokePreset;

impl BenchmarkPreset for SmokePreset {
    const NAME: &'static str = "smoke";
    const DESCRIPTION: &'static str = "動作確認用の軽量設定（100 × 100 呼び出し）";
    const ITERATIONS: usize = 100;
    const CALLS_PER_ITERATION: usize = 100;
}

impl BenchmarkConfig {
    /// プリセットから設定を作成
    pub fn from_preset<P: BenchmarkPreset>() -> Self {
        BenchmarkConfig::new(P::ITERATIONS, P::CALLS_PER_ITERATION)
            .with_progress_interval((P::ITERATIONS / 10).max(1))
    }
}

/// 既知のプリセット名の一覧
pub const PRESET_NAMES: [&str; 2] = [ReferencePreset::NAME, SmokePreset::NAME];

/// 名前からプリセットを解決する
pub fn config_for_preset(name: &str) -> BenchResult<BenchmarkConfig> {
    if name == ReferencePreset::NAME {
        Ok(BenchmarkConfig::from_preset::<ReferencePreset>())
    } else if name == SmokePreset::NAME {
        Ok(BenchmarkConfig::from_preset::<SmokePreset>())
    } else {
        Err(BenchError::configuration(format!(
            "不明なプリセット: {name}（利用可能: {}）",
            PRESET_NAMES.join(", ")
        )))
    }
}
