// テスト用のステータス出力実装
//
// 全レベルのメッセージをタグ付きでテストログへ転送する。

use crate::core::{Counter, Level, StatusReporter, TestLog};
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// テストログに転送するステータス出力実装
///
/// 各メッセージは `"<tag>: <message>"` の1行として記録される。
/// レベルによる抑制は行わない。
pub struct TestStatusReporter<'t, L: TestLog + ?Sized> {
    log: &'t L,
}

impl<'t, L: TestLog + ?Sized> TestStatusReporter<'t, L> {
    pub fn new(log: &'t L) -> Self {
        Self { log }
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log.log(&format!("{}: {}", level.tag(), args));
    }
}

impl<L: TestLog + ?Sized> Clone for TestStatusReporter<'_, L> {
    fn clone(&self) -> Self {
        Self { log: self.log }
    }
}

impl<L: TestLog + ?Sized> StatusReporter for TestStatusReporter<'_, L> {
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

/// メモリ上に行を記録するテストログ
#[derive(Debug, Default)]
pub struct RecordingLog {
    lines: Mutex<Vec<String>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済みの行のコピー
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TestLog for RecordingLog {
    fn log(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

/// テストハーネスの出力キャプチャに書き出すテストログ
///
/// libtest はテストごとに `println!` の出力を捕捉し、失敗時のみ表示する。
#[derive(Debug, Default, Clone, Copy)]
pub struct HarnessLog;

impl HarnessLog {
    pub fn new() -> Self {
        Self
    }
}

impl TestLog for HarnessLog {
    fn log(&self, line: &str) {
        println!("{line}");
    }
}
