use crate::benchmarks::BenchmarkDriver;
use crate::cli::args::{Cli, Commands, RunOptions};
use crate::core::{
    config_for_preset, AllocationPolicy, BenchResult, BenchmarkConfig, BenchmarkReporter,
    DispatchVariant,
};
use crate::reporting::{ConsoleReporter, NoOpReporter};
use anyhow::Result;

impl RunOptions {
    /// プリセットを土台にして、個別指定された値で上書きした設定を作る
    pub fn to_config(&self) -> BenchResult<BenchmarkConfig> {
        let mut config = match &self.preset {
            Some(name) => config_for_preset(name)?,
            None => BenchmarkConfig::default(),
        };

        if let Some(iterations) = self.iterations {
            config = config.with_iterations(iterations);
        }
        if let Some(calls) = self.calls {
            config = config.with_calls_per_iteration(calls);
        }
        if let Some(increment) = self.increment {
            config = config.with_increment(increment);
        }
        if let Some(initial) = self.initial {
            config = config.with_initial_value(initial);
        }
        if let Some(interval) = self.progress_interval {
            config = config.with_progress_interval(interval);
        }
        if self.leak {
            config = config.with_allocation(AllocationPolicy::Leak);
        }

        config.validate()?;
        Ok(config)
    }

    /// 出力モードに応じた報告実装を選ぶ
    pub fn reporter(&self) -> Box<dyn BenchmarkReporter> {
        if self.json {
            // JSON 出力を汚さない
            Box::new(NoOpReporter::new())
        } else if self.quiet {
            Box::new(ConsoleReporter::quiet())
        } else {
            Box::new(ConsoleReporter::new())
        }
    }
}

/// コマンドライン全体を実行
pub fn execute(cli: &Cli) -> Result<()> {
    let options = &cli.options;
    let config = options.to_config()?;
    let driver = BenchmarkDriver::new(config, options.reporter())?;

    match cli.command.unwrap_or(Commands::Compare) {
        Commands::Dynamic => execute_single(&driver, DispatchVariant::Dynamic, options.json),
        Commands::Static => execute_single(&driver, DispatchVariant::Static, options.json),
        Commands::Compare => {
            let comparison = driver.compare();
            if options.json {
                println!("{}", comparison.to_json()?);
            } else {
                println!();
                comparison.print_summary();
            }
            Ok(())
        }
    }
}

fn execute_single<R: BenchmarkReporter>(
    driver: &BenchmarkDriver<R>,
    variant: DispatchVariant,
    json: bool,
) -> Result<()> {
    let outcome = driver.run(variant);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }
    if !outcome.is_complete() {
        anyhow::bail!(
            "{variant}: expected {} calls, counted {}",
            outcome.expected_calls(),
            outcome.total_calls
        );
    }
    Ok(())
}
