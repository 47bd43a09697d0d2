//! ファクトリーモジュール - 設定駆動でのレポーター生成
//!
//! 実装名とJSONパラメータから `Box<dyn StatusReporter>` を組み立てる。

pub mod status_reporter_factory;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use status_reporter_factory::StatusReporterFactory;

/// 各コンポーネントの設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub implementation: String,
    #[serde(default)]
    pub parameters: serde_json::Value,
}

impl ComponentConfig {
    pub fn new(implementation: &str, parameters: serde_json::Value) -> Self {
        Self {
            implementation: implementation.to_string(),
            parameters,
        }
    }
}

/// 実装名からコンポーネントを生成するファクトリー
pub trait ComponentFactory<T> {
    fn create(&self, config: &ComponentConfig) -> Result<T>;

    fn available_implementations(&self) -> Vec<String>;

    fn get_description(&self, implementation: &str) -> Option<String>;
}
