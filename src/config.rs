//! Generation settings. Built once (config file + CLI flags) and passed by
//! reference everywhere; nothing reads process-wide state.
use std::path::Path;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenConfig {
    /// prefix prepended to every generated type name
    pub namespace: String,
    /// read the `extends` key of a schema as its superclass
    pub enable_extends: bool,
    /// emit `struct` instead of `class`
    pub use_struct: bool,
    /// follow `$ref` files on disk to find their underlying type
    pub deep_types: bool,
    pub inherits: Vec<String>,
    pub protocols: Vec<String>,
    /// `None` means no header block is generated
    pub header: Option<HeaderConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub project: Option<String>,
    pub author: Option<String>,
    pub company: Option<String>,
}

impl GenConfig {
    /// Load a JSON config file. Errors carry the JSON path of the bad field.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&source)
            .map_err(|error| anyhow::anyhow!("invalid config file {}: {error}", path.display()))
    }

    /// Parse config JSON, reporting the JSON path of the offending field.
    pub fn from_json_str(source: &str) -> Result<Self, String> {
        let de = &mut serde_json::Deserializer::from_str(source);
        serde_path_to_error::deserialize::<_, GenConfig>(de).map_err(|err| {
            let path = err.path().to_string();
            format!("at JSON path {path} → {}", err.into_inner())
        })
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
