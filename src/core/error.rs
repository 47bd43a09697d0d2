// Reporter configuration errors
// ステータス出力そのものは失敗しない。エラーは構築・設定時のみ発生する。

use thiserror::Error;

/// レポーター構築時のエラー型
#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("未サポートのStatusReporter実装: {implementation}. 利用可能: {available}")]
    UnsupportedImplementation {
        implementation: String,
        available: String,
    },

    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("パラメータエラー: {implementation} - {source}")]
    InvalidParameters {
        implementation: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ReporterError {
    /// 未サポート実装エラーの作成
    pub fn unsupported(implementation: impl Into<String>, available: &[&str]) -> Self {
        Self::UnsupportedImplementation {
            implementation: implementation.into(),
            available: available.join(", "),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// パラメータエラーの作成
    pub fn invalid_parameters(implementation: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidParameters {
            implementation: implementation.into(),
            source,
        }
    }
}

pub type ReporterResult<T> = std::result::Result<T, ReporterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unsupported_display() {
        let error = ReporterError::unsupported("fancy", &["noop", "terminal"]);
        let message = error.to_string();

        assert!(message.contains("未サポートのStatusReporter実装"));
        assert!(message.contains("fancy"));
        assert!(message.contains("noop, terminal"));
    }

    #[test]
    fn test_configuration_display() {
        let error = ReporterError::configuration("quiet と verbose は同時に指定できません");
        assert!(error.to_string().starts_with("設定エラー"));
    }

    #[test]
    fn test_invalid_parameters_source_chain() {
        let source = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let error = ReporterError::invalid_parameters("terminal", source);

        assert!(error.to_string().contains("terminal"));
        assert!(error.source().is_some());
    }
}
