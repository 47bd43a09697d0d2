// tracing ファサードへ転送するステータス出力実装

use crate::core::{Counter, Level, StatusReporter, Verbosity};
use std::fmt;

/// ステータスメッセージを tracing イベントとして出力する実装
///
/// | メソッド          | イベントレベル |
/// |-------------------|----------------|
/// | `error`           | ERROR          |
/// | `stdout`, `print` | INFO           |
/// | `verbose`         | DEBUG          |
/// | `verbose2`        | TRACE          |
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingStatusReporter {
    verbosity: Verbosity,
}

impl TracingStatusReporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.verbosity.permits(level) {
            return;
        }

        let tag = level.tag();
        match level {
            Level::Error => tracing::error!(target: "status_reporter", tag, "{}", args),
            Level::Stdout | Level::Print => {
                tracing::info!(target: "status_reporter", tag, "{}", args)
            }
            Level::Verbose => tracing::debug!(target: "status_reporter", tag, "{}", args),
            Level::Verbose2 => tracing::trace!(target: "status_reporter", tag, "{}", args),
        }
    }
}

impl StatusReporter for TracingStatusReporter {
    fn new_counter(&self, _description: &str) -> Option<Counter> {
        None
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, args);
    }

    fn stdout(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Stdout, args);
    }

    fn print(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Print, args);
    }

    fn verbose(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Verbose, args);
    }

    fn verbose2(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Verbose2, args);
    }
}
