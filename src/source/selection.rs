use super::catalog::Catalog;
use super::entry::SourceId;

/// The currently selected source. Always a member of the catalog it was
/// created from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    current: SourceId,
}

impl Selection {
    /// Start on the first source of the catalog, or `None` for an empty catalog.
    pub fn new(catalog: &Catalog) -> Option<Self> {
        catalog.first().map(|item| Self {
            current: item.id.clone(),
        })
    }

    pub fn current(&self) -> &SourceId {
        &self.current
    }

    /// Select `id` if the catalog contains it.
    ///
    /// Unknown ids leave the selection untouched; the return value tells
    /// whether the selection was accepted.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> bool {
        match catalog.get(id) {
            Some(item) => {
                self.current = item.id.clone();
                true
            }
            None => {
                tracing::debug!(id, "ignoring selection of unknown source");
                false
            }
        }
    }
}
