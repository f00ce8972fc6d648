// コアレイヤー - 設定、結果型、エラー、報告トレイト
// 他のレイヤーから参照される基本的な定義を提供

pub mod config;
pub mod error;
pub mod presets;
pub mod traits;
pub mod types;

pub use config::{AllocationPolicy, BenchmarkConfig};
pub use error::{BenchError, BenchResult, ValidationError, ValidationResult};
pub use presets::{config_for_preset, BenchmarkPreset, ReferencePreset, SmokePreset};
pub use traits::BenchmarkReporter;
pub use types::{BenchmarkOutcome, DispatchVariant};
