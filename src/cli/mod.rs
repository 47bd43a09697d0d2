// CLI層 - コマンドライン引数の定義とロギング初期化
// quiet/verbose フラグをステータス出力設定へ変換する

pub mod args;
pub mod logging;

// 公開API
pub use args::*;
pub use logging::{default_log_filter, init_logging};
