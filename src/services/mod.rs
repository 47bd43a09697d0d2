// サービス層 - ステータス出力の具象実装

pub mod monitoring;

// 公開API
pub use monitoring::{
    HarnessLog, NoOpStatusReporter, RecordingLog, TerminalStatusReporter, TestStatusReporter,
    TracingStatusReporter,
};
