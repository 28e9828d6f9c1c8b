//! The regional sales pipeline.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use polars::prelude::DataFrame;
use regional_ingest::CsvExtractor;
use regional_model::{Extractor, OutputFormat, PipelineConfig, Transformer};
use regional_output::loader_for;
use regional_transform::{Step, canonical_steps, compose};
use tracing::{info, info_span};

use crate::error::Result;

/// Rows kept in [`RunReport::preview`] unless configured otherwise.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// A runnable extract-transform-load job.
pub trait Pipeline {
    /// Transform steps applied between extraction and loading, in order.
    fn steps(&self) -> Vec<Step>;

    /// Runs the job once. No retries, no rollback.
    fn run(&self) -> Result<()>;
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub sources: usize,
    pub extracted_rows: usize,
    pub output_rows: usize,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub elapsed: Duration,
    /// First rows of the written table.
    pub preview: DataFrame,
}

/// CSV sources in, one monthly aggregate file out.
#[derive(Debug, Clone)]
pub struct RegionalSalesPipeline {
    config: PipelineConfig,
    preview_rows: usize,
}

impl RegionalSalesPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }

    /// Number of output rows captured in the run report.
    #[must_use]
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn output_path(&self) -> &Path {
        &self.config.load().output_path
    }

    /// Runs the pipeline and reports row counts and a preview of the output.
    ///
    /// The output format is resolved before any source is read, so an
    /// unsupported format fails without touching the file system.
    pub fn run_with_report(&self) -> Result<RunReport> {
        let span = info_span!("pipeline", sources = self.config.sources().len());
        let _guard = span.enter();
        let started = Instant::now();

        let format = self.config.load().output_format()?;
        let loader = loader_for(format, self.output_path());
        let extractor = CsvExtractor::new(self.config.sources().to_vec());
        let transformer = compose(self.steps());

        let raw = extractor.extract()?;
        let extracted_rows = raw.height();
        info!(rows = extracted_rows, "extracted rows");

        let output = transformer.transform(raw)?;
        let output_rows = output.height();
        info!(rows = output_rows, "transformed rows");

        let preview = output.head(Some(self.preview_rows));
        loader.load(output)?;
        info!(path = %self.output_path().display(), %format, "loaded output");

        Ok(RunReport {
            sources: self.config.sources().len(),
            extracted_rows,
            output_rows,
            output_path: self.output_path().to_path_buf(),
            format,
            elapsed: started.elapsed(),
            preview,
        })
    }
}

impl Pipeline for RegionalSalesPipeline {
    fn steps(&self) -> Vec<Step> {
        canonical_steps()
    }

    fn run(&self) -> Result<()> {
        self.run_with_report().map(|_| ())
    }
}
