// ステータス出力機能
// NoOp / ターミナル / テストログ / tracing の各実装

pub mod implementations;
pub mod testing;
pub mod tracing_reporter;

// 公開API
pub use implementations::{NoOpStatusReporter, TerminalStatusReporter};
pub use testing::{HarnessLog, RecordingLog, TestStatusReporter};
pub use tracing_reporter::TracingStatusReporter;
