use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "functor_dispatch")]
#[command(about = "Measures the per-call cost of dynamic versus static dispatch")]
#[command(version)]
pub struct Cli {
    /// Which dispatch strategy to measure (defaults to comparing both)
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub options: RunOptions,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Invoke the operation through a boxed trait object
    Dynamic,
    /// Invoke the operation through a monomorphized generic call
    Static,
    /// Measure both strategies and compare them
    Compare,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunOptions {
    /// Configuration preset (reference, smoke)
    #[arg(short = 'p', long, global = true)]
    pub preset: Option<String>,

    /// Number of functors constructed (outer loop)
    #[arg(short = 'n', long, global = true)]
    pub iterations: Option<usize>,

    /// Number of calls per functor (inner loop)
    #[arg(short = 'c', long, global = true)]
    pub calls: Option<usize>,

    /// Amount added by each call
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub increment: Option<i32>,

    /// Initial state value for every functor
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub initial: Option<i32>,

    /// Leak each boxed functor instead of releasing it per iteration
    #[arg(long, global = true)]
    pub leak: bool,

    /// Report progress every N functors
    #[arg(long, global = true)]
    pub progress_interval: Option<usize>,

    /// Only print the final result lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the result as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,
}
