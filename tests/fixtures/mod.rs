// 統合テスト用のヘルパー

use status_reporter::{Level, StatusReporter};
use std::fmt;

/// 指定レベルのメソッドを呼び出す
pub fn emit<R: StatusReporter + ?Sized>(reporter: &R, level: Level, args: fmt::Arguments<'_>) {
    match level {
        Level::Error => reporter.error(args),
        Level::Stdout => reporter.stdout(args),
        Level::Print => reporter.print(args),
        Level::Verbose => reporter.verbose(args),
        Level::Verbose2 => reporter.verbose2(args),
    }
}

/// 全レベルに同じメッセージを出力する
pub fn emit_every_level<R: StatusReporter + ?Sized>(reporter: &R, message: &str) {
    for level in Level::ALL {
        emit(reporter, level, format_args!("{message}"));
    }
}

/// テスト用の任意メッセージ
pub fn sample_messages() -> Vec<String> {
    vec![
        String::new(),
        "hello world".to_string(),
        "100% done".to_string(),
        "{} braces stay literal".to_string(),
        "複数バイト文字".to_string(),
        "line\nbreak".to_string(),
    ]
}
