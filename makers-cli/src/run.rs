//! One invocation, from arguments to written documents

use crate::error::CliError;
use chrono::{DateTime, FixedOffset, Local};
use makers_babel::{prepare_output_dir, publish, render, RenderOptions};
use makers_config::{Loader, MakersConfig, Overrides, LOCAL_CONFIG_FILE};
use makers_parser::MakefileLoader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings given on the command line. `None` defers to the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub makefile: Option<PathBuf>,
    pub outdir: Option<PathBuf>,
    pub split: Option<bool>,
    pub merge: Option<bool>,
    pub config: Option<PathBuf>,
}

pub fn run(invocation: &Invocation) -> Result<(), CliError> {
    let config = resolve_config(invocation, Path::new(LOCAL_CONFIG_FILE))?;
    execute(&config, Local::now().fixed_offset())?;
    Ok(())
}

/// Layer defaults, the local file, `--config` and the flags, in that order.
pub fn resolve_config(
    invocation: &Invocation,
    local_file: &Path,
) -> Result<MakersConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(local_file);
    if let Some(path) = &invocation.config {
        loader = loader.with_file(path);
    }
    let overrides = Overrides {
        makefile: invocation.makefile.clone(),
        outdir: invocation.outdir.clone(),
        merge: invocation.merge,
        split: invocation.split,
    };
    let config = loader.with_overrides(&overrides)?.build()?;
    debug!(?config, "resolved configuration");
    Ok(config)
}

/// Scan the configured Makefile and write its documentation.
///
/// Returns the written paths in write order. Nothing is touched on disk when
/// neither merged nor split output is requested.
pub fn execute(
    config: &MakersConfig,
    generated_at: DateTime<FixedOffset>,
) -> Result<Vec<PathBuf>, CliError> {
    let output = &config.output;
    if !output.has_output() {
        return Err(CliError::NothingRequested);
    }

    let loader = MakefileLoader::from_path(&config.input.makefile)?;
    prepare_output_dir(&output.dir)?;

    println!(
        "Processing {} and outputting to {}",
        config.input.makefile.display(),
        output.dir.display()
    );

    let makefile = loader.load();
    info!(targets = makefile.len(), "scanned {}", makefile.source);

    let options = RenderOptions::new(generated_at)
        .merged(output.merge)
        .split(output.split)
        .with_extension(output.extension.clone())
        .with_index_name(output.merged_name.clone());
    let documents = render(&makefile.source, &makefile.targets, &options)?;
    Ok(publish(&documents, &output.dir)?)
}
