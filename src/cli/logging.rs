// tracing-subscriber の初期化
// RUST_LOG が無い場合は -v の回数から status_reporter ターゲットのレベルを決める

use crate::core::Verbosity;
use tracing_subscriber::EnvFilter;

/// 冗長度に応じたデフォルトのフィルター
///
/// | 冗長度 | status_reporter |
/// |--------|-----------------|
/// | 0      | info            |
/// | 1      | debug           |
/// | 2 以上 | trace           |
pub fn default_log_filter(verbosity: Verbosity) -> EnvFilter {
    let level = match verbosity.level() {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::new(format!("info,status_reporter={level}"))
}

/// グローバルな subscriber を stderr 出力で初期化する
pub fn init_logging(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_filter(verbosity));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
