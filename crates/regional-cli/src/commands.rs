use std::path::PathBuf;

use anyhow::{Context, Result};
use regional_core::{RegionalSalesPipeline, RunReport, layout};
use regional_ingest::discover_sources;
use regional_model::{LoadDescriptor, OutputFormat, PipelineConfig};
use tracing::{debug, info_span};

use crate::cli::{RunArgs, SourcesArgs};
use crate::summary::print_sources;

pub fn run_pipeline(args: &RunArgs) -> Result<RunReport> {
    let span = info_span!("run", base_dir = %args.base_dir.display());
    let _guard = span.enter();
    let config = resolve_config(args)?;
    debug!(
        sources = config.sources().len(),
        output = %config.load().output_path.display(),
        format = %config.load().format,
        "resolved configuration"
    );
    RegionalSalesPipeline::new(config)
        .with_preview_rows(args.preview)
        .run_with_report()
        .context("pipeline run failed")
}

pub fn run_sources(args: &SourcesArgs) -> Result<()> {
    let raw = args.base_dir.join(layout::RAW_DIR);
    let sources =
        discover_sources(&raw).with_context(|| format!("discover sources in {}", raw.display()))?;
    print_sources(&sources);
    Ok(())
}

/// Config file, then explicit sources, then the default layout; `--output`
/// and `--format` override whichever was chosen.
fn resolve_config(args: &RunArgs) -> Result<PipelineConfig> {
    let base = if let Some(path) = &args.config {
        PipelineConfig::from_toml_file(path)
            .with_context(|| format!("load config {}", path.display()))?
    } else if !args.sources.is_empty() {
        let format = args
            .format
            .clone()
            .unwrap_or_else(|| layout::DEFAULT_FORMAT.tag().to_string());
        let output = default_output_path(args, &format);
        PipelineConfig::new(args.sources.clone(), LoadDescriptor::new(output, format))
            .context("build configuration from --source")?
    } else {
        layout::default_config(&args.base_dir, args.format.as_deref())
            .context("prepare default layout")?
    };

    if args.output.is_none() && args.format.is_none() {
        return Ok(base);
    }
    let load = LoadDescriptor::new(
        args.output
            .clone()
            .unwrap_or_else(|| base.load().output_path.clone()),
        args.format
            .clone()
            .unwrap_or_else(|| base.load().format.clone()),
    );
    Ok(PipelineConfig::new(base.sources().to_vec(), load)?)
}

fn default_output_path(args: &RunArgs, format: &str) -> PathBuf {
    let extension = OutputFormat::parse(format).map_or(format.to_ascii_lowercase(), |f| {
        f.extension().to_string()
    });
    args.base_dir
        .join(layout::PROCESSED_DIR)
        .join(format!("{}.{extension}", layout::OUTPUT_STEM))
}
