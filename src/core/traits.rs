// ベンチマーク進捗報告の抽象化

use super::config::BenchmarkConfig;
use super::types::{BenchmarkOutcome, DispatchVariant};
use mockall::automock;

/// 進捗報告の抽象化トレイト
///
/// ドライバはこのトレイトについてジェネリックなので、`NoOpReporter` を渡せば
/// 報告の呼び出しはコンパイル時に消える。
#[automock]
pub trait BenchmarkReporter {
    /// 計測開始時の報告
    fn report_started(&self, variant: DispatchVariant, config: &BenchmarkConfig);

    /// 外側ループの進捗報告
    fn report_progress(&self, variant: DispatchVariant, completed: usize, total: usize);

    /// 計測完了時の報告
    fn report_completed(&self, outcome: &BenchmarkOutcome);
}

// BenchmarkReporter for Box<dyn BenchmarkReporter>
impl BenchmarkReporter for Box<dyn BenchmarkReporter> {
    fn report_started(&self, variant: DispatchVariant, config: &BenchmarkConfig) {
        self.as_ref().report_started(variant, config)
    }

    fn report_progress(&self, variant: DispatchVariant, completed: usize, total: usize) {
        self.as_ref().report_progress(variant, completed, total)
    }

    fn report_completed(&self, outcome: &BenchmarkOutcome) {
        self.as_ref().report_completed(outcome)
    }
}
