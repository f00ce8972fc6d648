//! 演算を包むファンクタを、動的ディスパッチ（トレイトオブジェクト）と
//! 静的ディスパッチ（単相化）で呼び出したときのコストを比較するハーネス。

pub mod benchmarks;
pub mod cli;
pub mod core;
pub mod functor;
pub mod operation;
pub mod reporting;

pub use benchmarks::{BenchmarkDriver, DispatchComparison};
pub use functor::{make_dyn_functor, make_static_functor, DynFunctor, StaticFunctor};
pub use operation::{CountingSink, Increment, Operator, Sink};
