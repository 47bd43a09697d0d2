// ステータス出力の具象実装

use crate::core::{Counter, Level, StatusReporter, Verbosity};
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// 何もしないステータス出力実装（ライブラリ・テスト用）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpStatusReporter;

impl NoOpStatusReporter {
    pub fn new() -> Self {
        Self
    }
}

impl StatusReporter for NoOpStatusReporter {
    fn new_counter(&self, _description: &str) -> Option<Counter> {
        None
    }

    fn error(&self, _args: fmt::Arguments<'_>) {
        // 何もしない
    }

    fn stdout(&self, _args: fmt::Arguments<'_>) {
        // 何もしない
    }

    fn print(&self, _args: fmt::Arguments<'_>) {
        // 何もしない
    }

    fn verbose(&self, _args: fmt::Arguments<'_>) {
        // 何もしない
    }

    fn verbose2(&self, _args: fmt::Arguments<'_>) {
        // 何もしない
    }
}

/// エラー出力と標準出力の2ストリームに書き出す実装
///
/// 書き込み失敗は握りつぶす。
#[derive(Debug)]
pub struct TerminalStatusReporter<E = io::Stderr, O = io::Stdout> {
    err: Mutex<E>,
    out: Mutex<O>,
    verbosity: Verbosity,
}

impl TerminalStatusReporter {
    /// stderr / stdout に出力するレポーターを作成
    pub fn new(verbosity: Verbosity) -> Self {
        Self::with_writers(io::stderr(), io::stdout(), verbosity)
    }
}

impl<E, O> TerminalStatusReporter<E, O>
where
    E: Write + Send,
    O: Write + Send,
{
    pub fn with_writers(err: E, out: O, verbosity: Verbosity) -> Self {
        Self {
            err: Mutex::new(err),
            out: Mutex::new(out),
            verbosity,
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// ライターを取り出す（主にテストでの出力確認用）
    pub fn into_writers(self) -> (E, O) {
        let err = self.err.into_inner().unwrap_or_else(|e| e.into_inner());
        let out = self.out.into_inner().unwrap_or_else(|e| e.into_inner());
        (err, out)
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.verbosity.permits(level) {
            return;
        }

        let result = if level.is_error_stream() {
            write_line(&self.err, args)
        } else {
            write_line(&self.out, args)
        };

        if let Err(error) = result {
            tracing::trace!(tag = level.tag(), %error, "status message dropped");
        }
    }
}

fn write_line<W: Write>(writer: &Mutex<W>, args: fmt::Arguments<'_>) -> io::Result<()> {
    // Display 実装が失敗した場合もそこまでの内容を1行として出す
    let mut line = String::new();
    let _ = fmt::Write::write_fmt(&mut line, args);
    line.push('\n');

    // 他スレッドのパニックで出力を止めない
    let mut guard = writer.lock().unwrap_or_else(|e| e.into_inner());
    if let Err(error) = guard.write_all(line.as_bytes()) {
        // 途中まで書けた行を閉じ、次のメッセージが続けて出力されないようにする
        let _ = guard.write_all(b"\n");
        return Err(error);
    }
    guard.flush()
}

impl<E, O> StatusReporter for TerminalStatusReporter<E, O>
where
    E: Write + Send,
    O: Write + Send,
{
    fn new_counter(&self, description: &str) -> Option<Counter> {
        if self.verbosity.is_quiet() {
            return None;
        }
        Some(Counter::new(description))
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
