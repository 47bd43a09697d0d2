//! StatusReporterFactory - ステータス出力の Factory Pattern 実装

use super::{ComponentConfig, ComponentFactory};
use crate::core::{ReporterError, StatusReporter, Verbosity};
use crate::services::{NoOpStatusReporter, TerminalStatusReporter, TracingStatusReporter};
use anyhow::Result;

const IMPLEMENTATIONS: [&str; 3] = ["terminal", "tracing", "noop"];

pub struct StatusReporterFactory;

impl StatusReporterFactory {
    pub fn new() -> Self {
        Self
    }

    /// パラメータから quiet/verbose 設定を読み取る
    fn verbosity(config: &ComponentConfig) -> Result<Verbosity> {
        if config.parameters.is_null() {
            return Ok(Verbosity::default());
        }

        let verbosity: Verbosity = serde_json::from_value(config.parameters.clone())
            .map_err(|e| ReporterError::invalid_parameters(&config.implementation, e))?;
        Ok(verbosity.validated()?)
    }
}

impl Default for StatusReporterFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentFactory<Box<dyn StatusReporter>> for StatusReporterFactory {
    fn create(&self, config: &ComponentConfig) -> Result<Box<dyn StatusReporter>> {
        let reporter: Box<dyn StatusReporter> = match config.implementation.as_str() {
            "terminal" => Box::new(TerminalStatusReporter::new(Self::verbosity(config)?)),
            "tracing" => Box::new(TracingStatusReporter::new(Self::verbosity(config)?)),
            "noop" => {
                // 出力はしないがパラメータは検証する
                Self::verbosity(config)?;
                Box::new(NoOpStatusReporter::new())
            }
            other => return Err(ReporterError::unsupported(other, &IMPLEMENTATIONS).into()),
        };

        tracing::debug!(implementation = %config.implementation, "status reporter created");
        Ok(reporter)
    }

    fn available_implementations(&self) -> Vec<String> {
        IMPLEMENTATIONS.iter().map(|name| name.to_string()).collect()
    }

    fn get_description(&self, implementation: &str) -> Option<String> {
        match implementation {
            "terminal" => Some("stderr/stdout へのステータス出力".to_string()),
            "tracing" => Some("tracing イベントとしてのステータス出力".to_string()),
            "noop" => Some("何もしないステータス出力 (ライブラリ・テスト用)".to_string()),
            _ => None,
        }
    }
}
