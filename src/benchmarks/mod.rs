//! ディスパッチ方式のベンチマークモジュール
//!
//! 動的ディスパッチと静的ディスパッチの計測ドライバと比較レポートを提供

pub mod comparison;
pub mod driver;

pub use comparison::DispatchComparison;
pub use driver::{BenchmarkDriver, SampleRun};
