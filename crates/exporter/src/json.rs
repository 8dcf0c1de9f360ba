use crate::DOCUMENT_EXTENSION;
use crate::error::ExportError;
use crate::merger::PageStore;
use crate::paged::{Page, PagedDocument};
use charts::{ChartError, ChartExporter, DocumentId, ReportDocument};
use configuration::ChartStyle;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes every chart as a single-page JSON document in one directory.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_directory: PathBuf,
    style: ChartStyle,
}

impl JsonExporter {
    pub fn new(output_directory: impl Into<PathBuf>, style: ChartStyle) -> Self {
        Self {
            output_directory: output_directory.into(),
            style,
        }
    }

    fn path_for(&self, output_id: &str) -> PathBuf {
        document_path(&self.output_directory, output_id)
    }
}

impl ChartExporter for JsonExporter {
    fn export(&self, document: &ReportDocument) -> Result<DocumentId, ChartError> {
        let path = self.path_for(&document.output_id);
        let paged = PagedDocument {
            pages: vec![Page {
                style: self.style.clone(),
                chart: document.clone(),
            }],
        };
        persist(&path, &paged)?;

        tracing::debug!(path = %path.display(), series = document.series.len(), "Chart exported.");
        Ok(id_for(&path))
    }
}

/// Reads and writes paged JSON documents in one directory.
#[derive(Debug, Clone)]
pub struct JsonPageStore {
    output_directory: PathBuf,
}

impl JsonPageStore {
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    /// Loads a whole document by identifier.
    pub fn load(&self, id: &DocumentId) -> Result<PagedDocument, ExportError> {
        let path = Path::new(id.as_str());
        let file = File::open(path).map_err(|e| ExportError::io(path, e))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

impl PageStore for JsonPageStore {
    type Page = Page;

    fn first_page(&self, id: &DocumentId) -> Result<Page, ExportError> {
        self.load(id)?
            .pages
            .into_iter()
            .next()
            .ok_or_else(|| ExportError::NoPages(id.clone()))
    }

    fn write_document(&self, name: &str, pages: Vec<Page>) -> Result<DocumentId, ExportError> {
        let path = document_path(&self.output_directory, name);
        persist(&path, &PagedDocument { pages })?;
        Ok(id_for(&path))
    }
}

fn document_path(directory: &Path, stem: &str) -> PathBuf {
    directory.join(format!("{}.{}", stem, DOCUMENT_EXTENSION))
}

fn id_for(path: &Path) -> DocumentId {
    DocumentId::new(path.to_string_lossy().into_owned())
}

/// The file handle is closed when this returns, on success and on error alike.
fn persist(path: &Path, document: &PagedDocument) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush().map_err(|e| ExportError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use charts::{ChartSeries, Marker};

    fn chart(output_id: &str) -> ReportDocument {
        ReportDocument {
            title: "Average Execution time vs. States number (k=2)".to_string(),
            x_axis_label: "States".to_string(),
            y_axis_label: "Time (ns)".to_string(),
            series: vec![ChartSeries {
                label: "Hopcroft".to_string(),
                marker: Marker::Circle,
                points: vec![(10.0, 150.0), (20.0, 310.0)],
            }],
            output_id: output_id.to_string(),
        }
    }

    #[test]
    fn exported_chart_reads_back_as_single_page() {
        let dir = tempfile::TempDir::new().unwrap();
        let exporter = JsonExporter::new(dir.path(), ChartStyle::default());

        let id = exporter.export(&chart("time_vs_states_k2")).unwrap();
        assert!(id.as_str().ends_with("time_vs_states_k2.json"));
        assert!(dir.path().join("time_vs_states_k2.json").is_file());

        let store = JsonPageStore::new(dir.path());
        let document = store.load(&id).unwrap();
        assert_eq!(document.pages.len(), 1);
        assert_eq!(document.pages[0].chart, chart("time_vs_states_k2"));
        assert_eq!(document.pages[0].style, ChartStyle::default());
    }

    #[test]
    fn export_into_missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let exporter = JsonExporter::new(dir.path().join("missing"), ChartStyle::default());
        assert!(matches!(
            exporter.export(&chart("x")),
            Err(ChartError::Export { .. })
        ));
    }

    #[test]
    fn first_page_of_empty_document_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonPageStore::new(dir.path());
        let id = store.write_document("empty", Vec::new()).unwrap();

        assert!(matches!(store.first_page(&id), Err(ExportError::NoPages(_))));
    }

    #[test]
    fn unreadable_document_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonPageStore::new(dir.path());
        let id = DocumentId::new(path.to_string_lossy().into_owned());
        assert!(matches!(store.first_page(&id), Err(ExportError::Json(_))));
        assert!(matches!(
            store.first_page(&DocumentId::new("/nonexistent/doc.json")),
            Err(ExportError::Io { .. })
        ));
    }
}
