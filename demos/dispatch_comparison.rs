//! 静的ディスパッチ vs 動的ディスパッチのパフォーマンス比較実行例
//!
//! 使用方法:
//! ```
//! cargo run --release --example dispatch_comparison
//! ```

use functor_dispatch::{
    benchmarks::BenchmarkDriver,
    core::{BenchmarkConfig, SmokePreset},
    reporting::ConsoleReporter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 ファンクタ呼び出し - ディスパッチ方式比較");
    println!("静的ディスパッチ vs 動的ディスパッチの性能測定を開始します...\n");

    let config = BenchmarkConfig::from_preset::<SmokePreset>();
    let driver = BenchmarkDriver::new(config, ConsoleReporter::quiet())?;

    let comparison = driver.compare();
    println!();
    comparison.print_summary();

    println!("\n{}", comparison.to_json()?);
    Ok(())
}
