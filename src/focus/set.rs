use super::store::FocusStore;
use crate::source::{Catalog, SourceId, SourceItem};
use anyhow::Result;

/// Add `id` to the focused sources, or remove it if already focused.
///
/// Membership is not checked against any catalog. Applying it twice
/// restores the original list.
pub fn toggle_focus(store: &mut dyn FocusStore, id: &SourceId) -> Result<()> {
    let mut ids = store.read().to_vec();

    if ids.contains(id) {
        ids.retain(|focused| focused != id);
        tracing::info!(%id, "unfocused source");
    } else {
        ids.push(id.clone());
        tracing::info!(%id, "focused source");
    }

    store.write(ids)
}

pub fn is_focused(store: &dyn FocusStore, id: &str) -> bool {
    store.read().iter().any(|focused| focused == id)
}

/// Focused sources resolved against `catalog`, in focus order.
///
/// Ids the catalog does not know are skipped.
pub fn focused_items<'a>(store: &dyn FocusStore, catalog: &'a Catalog) -> Vec<&'a SourceItem> {
    store
        .read()
        .iter()
        .filter_map(|id| catalog.get(id.as_str()))
        .collect()
}
