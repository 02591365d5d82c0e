//! Run-level configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// How per-unit output is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputPolicy {
    /// One file per visible compilation unit, pathed from its qualified name.
    ClassesAsFiles,
    /// All visible units concatenated into one application bundle.
    SingleBundle,
}

/// Configuration for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSettings {
    pub output_policy: OutputPolicy,
    pub base_path: PathBuf,
    /// Bundle artifact name; unused under [`OutputPolicy::ClassesAsFiles`].
    #[serde(default)]
    pub app_name: String,
    /// Units whose qualified name starts with any of these prefixes are the
    /// toolchain's own support code and never re-emitted as user code.
    #[serde(default = "default_excluded_prefixes")]
    pub excluded_namespace_prefixes: Vec<String>,
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_excluded_prefixes() -> Vec<String> {
    vec!["as3".into(), "guice".into()]
}

fn default_extension() -> String {
    "js".into()
}

impl TargetSettings {
    pub fn new(output_policy: OutputPolicy, base_path: impl Into<PathBuf>) -> Self {
        Self {
            output_policy,
            base_path: base_path.into(),
            app_name: String::new(),
            excluded_namespace_prefixes: default_excluded_prefixes(),
            extension: default_extension(),
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse settings file {}", path.display()))
    }
}
