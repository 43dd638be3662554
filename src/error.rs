//! Error taxonomy for resolution, model building and file loading.
//!
//! Nothing in here is fatal to a batch: every variant ends up either as a
//! sentinel type on one property or as a skipped file in the report.
use std::path::PathBuf;
use serde_json::Value;

/// Why a schema node could not be turned into a [`crate::ir::TypeDescriptor`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Node shape we do not handle (non-object node, unknown `type`, type unions, ...).
    #[error("unsupported schema node ({reason}): {raw}")]
    Unsupported { reason: String, raw: Value },
    /// Deep-resolution hit a file that is already being resolved.
    #[error("$ref cycle: {}", display_chain(.chain))]
    RefCycle { chain: Vec<PathBuf> },
    #[error("failed to read referenced schema {}: {source}", .path.display())]
    RefRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse referenced schema {}: {message}", .path.display())]
    RefParse { path: PathBuf, message: String },
}

impl ResolveError {
    pub fn unsupported(reason: impl Into<String>, raw: &Value) -> Self {
        ResolveError::Unsupported { reason: reason.into(), raw: raw.clone() }
    }
}

fn display_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// A file that does not bear a model. Reported, never thrown.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("is not of type object (found {found})")]
    NotAnObject { found: String },
    #[error("missing properties")]
    MissingProperties,
    #[error(transparent)]
    Load(#[from] LoadError),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
