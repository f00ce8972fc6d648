// 動的ディスパッチだけを基準規模で計測する（引数なし）

use anyhow::Result;
use functor_dispatch::{
    benchmarks::BenchmarkDriver,
    core::{BenchmarkConfig, ReferencePreset},
    reporting::ConsoleReporter,
};

fn main() -> Result<()> {
    let config = BenchmarkConfig::from_preset::<ReferencePreset>();
    let driver = BenchmarkDriver::new(config, ConsoleReporter::quiet())?;
    driver.run_dynamic();
    Ok(())
}
