// コアレイヤー - ステータス出力のトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

// 公開API
pub use error::{ReporterError, ReporterResult};
pub use traits::{MockTestLog, StatusReporter, TestLog};
pub use types::{Counter, Level, Verbosity};
