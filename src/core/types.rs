// ステータス出力の基本型定義
// メッセージレベル、冗長度設定、進捗カウンター

use super::error::{ReporterError, ReporterResult};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// メッセージの出力レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// エラー出力（常に出力）
    Error,
    /// 標準出力（常に出力）
    Stdout,
    /// quiet指定時以外は標準出力
    Print,
    /// 冗長度1以上で標準出力
    Verbose,
    /// 冗長度2以上で標準出力
    Verbose2,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Error,
        Level::Stdout,
        Level::Print,
        Level::Verbose,
        Level::Verbose2,
    ];

    /// テストログ等で使うレベルのタグ文字列
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Stdout => "stdout",
            Self::Print => "print",
            Self::Verbose => "verbose",
            Self::Verbose2 => "verbose2",
        }
    }

    /// エラーストリームに出力するレベルかどうか
    pub const fn is_error_stream(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// quiet/verbose 設定
///
/// 出力レベルごとのルーティング規則は [`Verbosity::permits`] に集約している。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Verbosity {
    #[serde(default)]
    quiet: bool,
    #[serde(default, rename = "verbose")]
    level: u8,
}

impl Verbosity {
    /// 設定を検証して作成
    ///
    /// quiet と verbose の同時指定はエラーになる。
    pub fn new(quiet: bool, level: u8) -> ReporterResult<Self> {
        Self { quiet, level }.validated()
    }

    pub const fn quiet() -> Self {
        Self {
            quiet: true,
            level: 0,
        }
    }

    pub const fn verbose(level: u8) -> Self {
        Self {
            quiet: false,
            level,
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn validated(self) -> ReporterResult<Self> {
        if self.quiet && self.level > 0 {
            return Err(ReporterError::configuration(
                "quiet と verbose は同時に指定できません",
            ));
        }
        Ok(self)
    }

    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub const fn level(&self) -> u8 {
        self.level
    }

    /// 指定レベルのメッセージを出力すべきかどうか
    pub const fn permits(&self, level: Level) -> bool {
        match level {
            Level::Error | Level::Stdout => true,
            Level::Print => !self.quiet,
            Level::Verbose => self.level >= 1,
            Level::Verbose2 => self.level >= 2,
        }
    }
}

/// 進捗カウンターのハンドル
///
/// 表示処理は持たず、説明文と現在値だけを保持する。
#[derive(Debug)]
pub struct Counter {
    description: String,
    value: AtomicU64,
}

impl Counter {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            value: AtomicU64::new(0),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn add(&self, n: u64) {
        self.value.fetch_add(n, Ordering::Relaxed);
    }

    pub fn increment(&self) {
        self.add(1);
    }

    pub fn value(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
