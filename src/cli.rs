//! CLI: JSON schema files → (swift | model)
use std::path::PathBuf;
use anyhow::Context;
use clap::{Parser, Subcommand, Args};
use colored::Colorize;

use crate::batch::{self, BatchReport, Outcome, OutputTarget};
use crate::config::{GenConfig, HeaderConfig};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate Swift model classes/structs from JSON schema files
#[derive(Parser, Debug)]
#[command(name = "json-swift-model", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// generate one .swift file per model
    Swift(SwiftOut),
    /// print the resolved model descriptors as JSON
    Model(ModelOut),
}

#[derive(Args, Debug, Clone)]
struct GenSettings {
    /// Source files or dirs. May be literal paths or quoted glob patterns
    #[arg(long, short = 's', num_args = 1.., required = true)]
    source: Vec<String>,

    /// JSON config file; flags below are applied on top
    #[arg(long)]
    config: Option<PathBuf>,

    /// use `struct` (default is `class`)
    #[arg(long)]
    use_struct: bool,

    /// enable parsing of `extends` key in json schema
    #[arg(long)]
    enable_extends: bool,

    /// read `$ref` file paths for `type` searching
    #[arg(long)]
    deep_types: bool,

    /// specify inheritances
    #[arg(long, num_args = 1..)]
    inherits: Vec<String>,

    /// specify protocols
    #[arg(long, num_args = 1..)]
    protocols: Vec<String>,

    /// add header
    #[arg(long)]
    has_header: bool,

    /// project name for header
    #[arg(short, long)]
    project: Option<String>,

    /// author name for header
    #[arg(short, long)]
    author: Option<String>,

    /// company name for header
    #[arg(short, long)]
    company: Option<String>,

    /// namespace prefix
    #[arg(short, long)]
    namespace: Option<String>,

    /// verbosity level (eg. -vv = Level 2)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::Parser, Debug)]
struct SwiftOut {
    #[command(flatten)]
    settings: GenSettings,

    /// output dir
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,
}

#[derive(clap::Parser, Debug)]
struct ModelOut {
    #[command(flatten)]
    settings: GenSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl GenSettings {
    /// Config file (if any) with the command-line flags layered on top.
    fn gen_config(&self) -> anyhow::Result<GenConfig> {
        let mut config = match &self.config {
            Some(path) => GenConfig::from_file(path)?,
            None => GenConfig::default(),
        };
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
        config.use_struct |= self.use_struct;
        config.enable_extends |= self.enable_extends;
        config.deep_types |= self.deep_types;
        if !self.inherits.is_empty() {
            config.inherits = self.inherits.clone();
        }
        if !self.protocols.is_empty() {
            config.protocols = self.protocols.clone();
        }
        let header_flags = self.project.is_some() || self.author.is_some() || self.company.is_some();
        if self.has_header || header_flags {
            let header = config.header.get_or_insert_with(HeaderConfig::default);
            if self.project.is_some() { header.project = self.project.clone(); }
            if self.author.is_some() { header.author = self.author.clone(); }
            if self.company.is_some() { header.company = self.company.clone(); }
        }
        Ok(config)
    }

    fn run(&self, target: &OutputTarget) -> anyhow::Result<BatchReport> {
        let config = self.gen_config()?;
        tracing::debug!("{config:#?}");
        let paths = batch::collect_sources(&self.source)
            .context("failed to resolve source paths")?;
        if paths.is_empty() {
            tracing::warn!("no .json files found in {:?}", self.source);
        }
        Ok(batch::run_batch(&paths, &config, target))
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> u8 {
        match &self.cmd {
            Command::Swift(target) => target.settings.verbose,
            Command::Model(target) => target.settings.verbose,
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Swift(target) => {
                let report = target.settings.run(&OutputTarget::SwiftDir(target.output_dir.clone()))?;
                print_report(&report);
            }
            Command::Model(target) => {
                let report = target.settings.run(&OutputTarget::Models)?;
                let models = report.models().collect::<Vec<_>>();
                let json_src = serde_json::to_string_pretty(&models)?;
                if let Some(out) = target.out.as_ref() {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(out, &json_src)
                        .with_context(|| format!("failed to write {}", out.display()))?;
                } else {
                    println!("{json_src}");
                }
                print_summary(&report);
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn print_report(report: &BatchReport) {
    for file in &report.files {
        match &file.outcome {
            Outcome::Written(dest) => println!("{} {}", dest.display(), "success".green()),
            Outcome::Failed(error) => eprintln!("{} {error:#}", "failed".red()),
            Outcome::Built(_) | Outcome::Skipped(_) => {}
        }
    }
    print_summary(report);
}

fn print_summary(report: &BatchReport) {
    let skipped = report.skipped();
    let failed = report.failed();
    if skipped == 0 && failed == 0 {
        return;
    }
    eprintln!(
        "{} generated, {} skipped, {} failed",
        report.written(),
        skipped.to_string().yellow(),
        failed.to_string().red(),
    );
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
