// 進捗報告の具象実装

pub mod implementations;

pub use implementations::{ConsoleReporter, NoOpReporter};
