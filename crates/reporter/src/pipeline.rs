use crate::assembler::ReportAssembler;
use crate::density::DensityReport;
use crate::error::ReportError;
use charts::DocumentId;
use configuration::{Config, RunConfig};
use exporter::{DocumentMerger, JsonExporter, JsonPageStore};
use std::path::Path;

/// Name of the document that collects the first page of every chart.
pub const COMBINED_DOCUMENT_NAME: &str = "charts_combined";

/// What a run left in the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Every exported chart, in generation order.
    pub documents: Vec<DocumentId>,
    /// The combined document, for runs that compose one.
    pub combined: Option<DocumentId>,
}

/// Runs the full benchmark report: both sweeps, then the combined document.
///
/// The dataset is read and validated before the output directory is touched,
/// so a bad input leaves nothing behind. Any later failure aborts the run;
/// documents exported before it remain on disk.
pub fn run_report(config: &Config, run: &RunConfig, show_progress: bool) -> Result<RunSummary, ReportError> {
    let records = dataset::read_benchmark_records(&run.input_path)?;
    prepare_output_directory(&run.output_directory)?;

    let exporter = JsonExporter::new(&run.output_directory, config.chart.clone());
    let documents = ReportAssembler::new(exporter)
        .with_progress(show_progress)
        .run(&records)?;

    let merger = DocumentMerger::new(JsonPageStore::new(&run.output_directory));
    let combined = merger.merge(&documents, COMBINED_DOCUMENT_NAME)?;

    tracing::info!(
        documents = documents.len(),
        combined = %combined,
        "Report complete."
    );
    Ok(RunSummary {
        documents,
        combined: Some(combined),
    })
}

/// Runs the density report. It has no combined document.
pub fn run_density_report(config: &Config, run: &RunConfig) -> Result<RunSummary, ReportError> {
    let records = dataset::read_density_records(&run.input_path)?;
    prepare_output_directory(&run.output_directory)?;

    let exporter = JsonExporter::new(&run.output_directory, config.chart.clone());
    let documents = DensityReport::new(exporter).run(&records)?;

    Ok(RunSummary {
        documents,
        combined: None,
    })
}

fn prepare_output_directory(path: &Path) -> Result<(), ReportError> {
    std::fs::create_dir_all(path).map_err(|source| ReportError::OutputDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Output directory ready.");
    Ok(())
}
