use crate::core::{BenchmarkConfig, BenchmarkOutcome, BenchmarkReporter, DispatchVariant};

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 完了時の1行だけを出力する
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl BenchmarkReporter for ConsoleReporter {
    fn report_started(&self, variant: DispatchVariant, config: &BenchmarkConfig) {
        if !self.quiet {
            println!(
                "🚀 Starting {variant} dispatch: {} functors × {} calls (increment {}, initial {}, {})",
                config.iterations(),
                config.calls_per_iteration(),
                config.increment(),
                config.initial_value(),
                config.allocation()
            );
        }
    }

    fn report_progress(&self, variant: DispatchVariant, completed: usize, total: usize) {
        if !self.quiet && total > 0 {
            let percentage = (completed as f64 / total as f64) * 100.0;
            println!("📊 [{variant}] Progress: {completed}/{total} ({percentage:.1}%)");
        }
    }

    fn report_completed(&self, outcome: &BenchmarkOutcome) {
        println!("✅ {outcome}");
        if !outcome.is_complete() {
            eprintln!(
                "⚠️  [{}] expected {} calls, counted {}",
                outcome.variant,
                outcome.expected_calls(),
                outcome.total_calls
            );
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkReporter for NoOpReporter {
    #[inline]
    fn report_started(&self, _variant: DispatchVariant, _config: &BenchmarkConfig) {}

    #[inline]
    fn report_progress(&self, _variant: DispatchVariant, _completed: usize, _total: usize) {}

    #[inline]
    fn report_completed(&self, _outcome: &BenchmarkOutcome) {}
}
