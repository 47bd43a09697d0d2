//! レベル付きステータスメッセージ出力の抽象化
//!
//! - [`StatusReporter`]: error / stdout / print / verbose / verbose2 と進捗カウンター生成
//! - [`NoOpStatusReporter`]: 全て破棄する実装
//! - [`TestStatusReporter`]: テストログへタグ付きで転送する実装
//! - [`TerminalStatusReporter`], [`TracingStatusReporter`]: 実出力向けの実装
//!
//! ```
//! use status_reporter::{report_print, RecordingLog, TestStatusReporter};
//!
//! let log = RecordingLog::new();
//! let reporter = TestStatusReporter::new(&log);
//! report_print!(reporter, "hello {}", "world");
//! assert_eq!(log.lines(), vec!["print: hello world"]);
//! ```

pub mod cli;
pub mod core;
pub mod factories;
pub mod services;

pub use crate::core::{
    Counter, Level, MockTestLog, ReporterError, ReporterResult, StatusReporter, TestLog,
    Verbosity,
};
pub use crate::services::{
    HarnessLog, NoOpStatusReporter, RecordingLog, TerminalStatusReporter, TestStatusReporter,
    TracingStatusReporter,
};

/// エラー出力
#[macro_export]
macro_rules! report_error {
    ($reporter:expr, $($arg:tt)+) => {
        $crate::StatusReporter::error(&$reporter, ::std::format_args!($($arg)+))
    };
}

/// 標準出力
#[macro_export]
macro_rules! report_stdout {
    ($reporter:expr, $($arg:tt)+) => {
        $crate::StatusReporter::stdout(&$reporter, ::std::format_args!($($arg)+))
    };
}

/// quiet 指定時以外は標準出力
#[macro_export]
macro_rules! report_print {
    ($reporter:expr, $($arg:tt)+) => {
        $crate::StatusReporter::print(&$reporter, ::std::format_args!($($arg)+))
    };
}

/// 冗長度1以上で標準出力
#[macro_export]
macro_rules! report_verbose {
    ($reporter:expr, $($arg:tt)+) => {
        $crate::StatusReporter::verbose(&$reporter, ::std::format_args!($($arg)+))
    };
}

/// 冗長度2以上で標準出力
#[macro_export]
macro_rules! report_verbose2 {
    ($reporter:expr, $($arg:tt)+) => {
        $crate::StatusReporter::verbose2(&$reporter, ::std::format_args!($($arg)+))
    };
}
