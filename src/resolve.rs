//! Schema node → [`TypeDescriptor`].
//!
//! Resolution is by name: a `$ref` becomes the namespaced, capitalized stem
//! of its path. With `deep_types` on, the referenced file is read and resolved
//! too, so a ref to a schema that is just an `integer` collapses to `Int`.
//! Deep resolution keeps the chain of files being resolved and reports a
//! [`ResolveError::RefCycle`] instead of recursing forever. Referenced files
//! are re-read every time they are referenced.
use std::path::{Path, PathBuf};
use serde_json::Value;

use crate::config::GenConfig;
use crate::error::ResolveError;
use crate::ir::TypeDescriptor;
use crate::schema::{json_kind, NodeShape};

/// Uppercase the first character, leave the rest alone.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `namespace + Capitalized(name)`.
pub fn model_type_name(config: &GenConfig, name: &str) -> String {
    format!("{}{}", config.namespace, capitalize(name))
}

/// Base name of a `$ref` path with its last extension stripped.
fn ref_stem(reference: &str) -> Option<&str> {
    Path::new(reference)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
}

pub struct TypeResolver<'a> {
    config: &'a GenConfig,
    /// directory `$ref` paths are relative to (deep mode only)
    base_dir: Option<&'a Path>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(config: &'a GenConfig) -> Self {
        Self { config, base_dir: None }
    }

    pub fn with_base_dir(mut self, dir: &'a Path) -> Self {
        self.base_dir = Some(dir);
        self
    }

    pub fn resolve(&self, node: &Value) -> Result<TypeDescriptor, ResolveError> {
        let mut chain = Vec::new();
        self.resolve_in(node, self.base_dir, &mut chain)
    }

    fn resolve_in(
        &self,
        node: &Value,
        dir: Option<&Path>,
        chain: &mut Vec<PathBuf>,
    ) -> Result<TypeDescriptor, ResolveError> {
        match NodeShape::of(node) {
            NodeShape::Reference(reference) => self.resolve_reference(node, reference, dir, chain),
            NodeShape::Object => Ok(TypeDescriptor::object_marker()),
            NodeShape::Array { items } => {
                let item = match items {
                    None => None,
                    Some(items) => match self.resolve_in(items, dir, chain) {
                        Ok(item) => Some(item),
                        Err(error @ ResolveError::RefCycle { .. }) => return Err(error),
                        Err(error) => {
                            tracing::debug!("array items unresolved, using AnyObject: {error}");
                            None
                        }
                    },
                };
                Ok(TypeDescriptor::array_of(item))
            }
            NodeShape::Primitive(primitive) => Ok(TypeDescriptor::primitive(primitive.type_name())),
            NodeShape::UnknownType(keyword) => {
                tracing::debug!("type not handled: {keyword}");
                Err(ResolveError::unsupported(format!("type `{keyword}` not handled"), node))
            }
            NodeShape::NonStringType(ty) => {
                tracing::debug!("typeof not handled: {}", json_kind(ty));
                Err(ResolveError::unsupported(
                    format!("`type` given as {}, expected a string", json_kind(ty)),
                    node,
                ))
            }
            NodeShape::Untyped => Err(ResolveError::unsupported("no `type` or `$ref`", node)),
            NodeShape::BadReference(_) => Err(ResolveError::unsupported("`$ref` is not a string", node)),
            NodeShape::NotAnObject(_) => {
                Err(ResolveError::unsupported(format!("node is {}, not an object", json_kind(node)), node))
            }
        }
    }

    fn resolve_reference(
        &self,
        node: &Value,
        reference: &str,
        dir: Option<&Path>,
        chain: &mut Vec<PathBuf>,
    ) -> Result<TypeDescriptor, ResolveError> {
        let Some(stem) = ref_stem(reference) else {
            return Err(ResolveError::unsupported("`$ref` has no file name", node));
        };
        let by_name = TypeDescriptor::reference(model_type_name(self.config, stem));
        if !self.config.deep_types {
            return Ok(by_name);
        }

        let path = dir.map(|d| d.join(reference)).unwrap_or_else(|| PathBuf::from(reference));
        let path = std::fs::canonicalize(&path).unwrap_or(path);
        if chain.contains(&path) {
            let mut cycle = chain.clone();
            cycle.push(path);
            return Err(ResolveError::RefCycle { chain: cycle });
        }

        let target = match load_referenced(&path) {
            Ok(target) => target,
            Err(error) => {
                tracing::warn!("{error}; falling back to reference by name");
                return Ok(by_name);
            }
        };
        tracing::debug!("deep-resolving {}", path.display());

        let next_dir = path.parent().map(Path::to_path_buf);
        chain.push(path);
        let resolved = self.resolve_in(&target, next_dir.as_deref(), chain);
        chain.pop();

        let resolved = resolved?;
        if resolved.is_object_marker() {
            Ok(by_name)
        } else {
            Ok(resolved)
        }
    }
}

fn load_referenced(path: &Path) -> Result<Value, ResolveError> {
    let source = std::fs::read_to_string(path)
        .map_err(|source| ResolveError::RefRead { path: path.to_path_buf(), source })?;
    serde_json::from_str(&source)
        .map_err(|error| ResolveError::RefParse { path: path.to_path_buf(), message: error.to_string() })
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
