//! File discovery, loading and per-file processing.
//!
//! Each file is independent: a bad file ends up as a `Skipped`/`Failed`
//! outcome in the [`BatchReport`] and the rest of the batch carries on.
use std::path::{Path, PathBuf};
use rayon::prelude::*;
use serde_json::Value;

use crate::config::GenConfig;
use crate::error::{LoadError, SkipReason};
use crate::ir::ModelDescriptor;
use crate::model::ModelBuilder;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// A parsed schema file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// file stem; the model is named after it
    pub name: String,
    pub content: Value,
}

/// What to do with each built model.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// write `<dir>/<ModelName>.swift`
    SwiftDir(PathBuf),
    /// keep the descriptors in the report
    Models,
}

#[derive(Debug)]
pub enum Outcome {
    Written(PathBuf),
    Built(Box<ModelDescriptor>),
    Skipped(SkipReason),
    Failed(anyhow::Error),
}

#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Per-file outcomes, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Written(_) | Outcome::Built(_)))
    }
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }
    pub fn models(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.files.iter().filter_map(|f| match &f.outcome {
            Outcome::Built(model) => Some(model.as_ref()),
            _ => None,
        })
    }
    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl SourceFile {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let source = std::fs::read_to_string(path)
            .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
        let content = serde_json::from_str::<Value>(&source)
            .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { path: path.to_path_buf(), name, content })
    }

    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Expand inputs into the list of `.json` files to process.
///
/// Inputs may be files, directories (their direct `.json` entries) or glob
/// patterns. Files given explicitly are kept whatever their extension.
pub fn collect_sources<I>(inputs: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = Vec::new();
    for path in resolve_file_path_patterns(inputs)? {
        if path.is_dir() {
            let mut entries = std::fs::read_dir(&path)?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<Result<Vec<_>, _>>()?;
            entries.sort();
            out.extend(entries.into_iter().filter(|p| !p.is_dir() && is_json(p)));
        } else {
            out.push(path);
        }
    }
    Ok(out)
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

fn resolve_file_path_patterns<I>(patterns: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

/// Load, build and emit every file. Files run in parallel; the report keeps
/// input order.
pub fn run_batch(paths: &[PathBuf], config: &GenConfig, target: &OutputTarget) -> BatchReport {
    if let OutputTarget::SwiftDir(dir) = target {
        if let Err(error) = std::fs::create_dir_all(dir) {
            tracing::warn!("failed to create output dir {}: {error}", dir.display());
        }
    }
    let files = paths
        .par_iter()
        .map(|path| FileOutcome { path: path.clone(), outcome: process_file(path, config, target) })
        .collect();
    BatchReport { files }
}

fn process_file(path: &Path, config: &GenConfig, target: &OutputTarget) -> Outcome {
    let model = match load_and_build(path, config) {
        Ok(model) => model,
        Err(reason) => {
            tracing::warn!("{} {reason} SKIPPED", path.display());
            return Outcome::Skipped(reason);
        }
    };
    tracing::info!("{}: built {}", path.display(), model.model_name);
    match target {
        OutputTarget::Models => Outcome::Built(Box::new(model)),
        OutputTarget::SwiftDir(dir) => match write_swift(dir, &model) {
            Ok(dest) => Outcome::Written(dest),
            Err(error) => Outcome::Failed(error),
        },
    }
}

fn load_and_build(path: &Path, config: &GenConfig) -> Result<ModelDescriptor, SkipReason> {
    let file = SourceFile::load(path)?;
    ModelBuilder::new(config)
        .with_schema_dir(file.dir())
        .build(&file.name, &file.content)
}

fn write_swift(dir: &Path, model: &ModelDescriptor) -> anyhow::Result<PathBuf> {
    use anyhow::Context;
    let dest = dir.join(format!("{}.swift", model.model_name));
    let src = crate::codegen::render_swift(model);
    std::fs::write(&dest, src).with_context(|| format!("failed to write {}", dest.display()))?;
    Ok(dest)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
