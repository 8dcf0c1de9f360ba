use crate::error::ExportError;
use charts::DocumentId;

/// Page-level access to persisted documents.
pub trait PageStore {
    type Page;

    /// Extracts page one of the document `id`.
    fn first_page(&self, id: &DocumentId) -> Result<Self::Page, ExportError>;

    /// Persists `pages`, in order, as a new document named `name`.
    fn write_document(&self, name: &str, pages: Vec<Self::Page>) -> Result<DocumentId, ExportError>;
}

/// The order in which documents are composed: ascending by the literal
/// identifier string, whatever order they were generated in.
pub fn merge_order(ids: &[DocumentId]) -> Vec<DocumentId> {
    let mut sorted = ids.to_vec();
    sorted.sort();
    sorted
}

/// Concatenates the first page of many documents into one.
pub struct DocumentMerger<S: PageStore> {
    store: S,
}

impl<S: PageStore> DocumentMerger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes a document named `name` holding page one of every document in
    /// `ids`, in `merge_order`. Additional pages of a source document are not
    /// carried over.
    pub fn merge(&self, ids: &[DocumentId], name: &str) -> Result<DocumentId, ExportError> {
        if ids.is_empty() {
            return Err(ExportError::NothingToMerge);
        }

        let pages = merge_order(ids)
            .iter()
            .map(|id| self.store.first_page(id))
            .collect::<Result<Vec<_>, _>>()?;

        let combined = self.store.write_document(name, pages)?;
        tracing::info!(id = %combined, documents = ids.len(), "Combined document written.");
        Ok(combined)
    }
}
