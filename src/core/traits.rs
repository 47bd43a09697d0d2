// ステータス出力のトレイト定義

use super::types::Counter;
use mockall::automock;
use std::fmt;
use std::sync::Arc;

/// レベル付きステータスメッセージの出力を抽象化するトレイト
///
/// 全メソッドは複数スレッドから同時に呼び出してよい。出力は
/// ベストエフォートであり、呼び出し側にエラーやパニックを返さない。
/// quiet/verbose 等の状態は実装側が保持する。
///
/// 通常は [`report_print!`](crate::report_print) などのマクロ経由で呼び出す。
pub trait StatusReporter: Send + Sync {
    /// 進捗カウンターを作成する。進捗表示をサポートしない場合は `None`
    fn new_counter(&self, description: &str) -> Option<Counter>;

    /// エラー出力
    fn error(&self, args: fmt::Arguments<'_>);

    /// 標準出力
    fn stdout(&self, args: fmt::Arguments<'_>);

    /// quiet 指定時以外は標準出力
    fn print(&self, args: fmt::Arguments<'_>);

    /// 冗長度1以上で標準出力
    fn verbose(&self, args: fmt::Arguments<'_>);

    /// 冗長度2以上で標準出力
    fn verbose2(&self, args: fmt::Arguments<'_>);
}

macro_rules! forward_status_reporter {
    ($($ty:ty),*) => {$(
        impl<R: StatusReporter + ?Sized> StatusReporter for $ty {
            fn new_counter(&self, description: &str) -> Option<Counter> {
                (**self).new_counter(description)
            }

            fn error(&self, args: fmt::Arguments<'_>) {
                (**self).error(args)
            }

            fn stdout(&self, args: fmt::Arguments<'_>) {
                (**self).stdout(args)
            }

            fn print(&self, args: fmt::Arguments<'_>) {
                (**self).print(args)
            }

            fn verbose(&self, args: fmt::Arguments<'_>) {
                (**self).verbose(args)
            }

            fn verbose2(&self, args: fmt::Arguments<'_>) {
                (**self).verbose2(args)
            }
        }
    )*};
}

// Box<dyn StatusReporter> / Arc<dyn StatusReporter> / &R
forward_status_reporter!(&R, Box<R>, Arc<R>);

/// テストハーネスのログ機能
///
/// 整形済みの1行を受け取って記録する。
#[automock]
pub trait TestLog: Send + Sync {
    fn log(&self, line: &str);
}
