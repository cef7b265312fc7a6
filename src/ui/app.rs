use crate::focus::{self, FocusStore};
use crate::source::{self, Catalog, Selection, SourceId, SourceItem};
use anyhow::{bail, Result};

/// Which list the arrow keys drive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    /// The search palette is open
    Palette,
    /// The main view listing focused sources
    Focused,
}

pub struct App {
    catalog: Catalog,
    focus: Box<dyn FocusStore>,
    selection: Selection,
    pub view: View,
    pub search_query: String,
    /// Ranked palette rows for `search_query`
    pub results: Vec<SourceItem>,
    /// Highlighted row in `results`
    pub highlighted: usize,
    /// Highlighted row in the focused list
    pub focused_index: usize,
    pub show_help: bool,
    pub should_quit: bool,
    /// Last error worth showing in the footer
    pub status: Option<String>,
}

impl App {
    pub fn new(catalog: Catalog, focus: Box<dyn FocusStore>) -> Result<Self> {
        let Some(selection) = Selection::new(&catalog) else {
            bail!("Catalog contains no selectable sources");
        };
        let results = catalog.items().to_vec();

        Ok(Self {
            catalog,
            focus,
            selection,
            view: View::Focused,
            search_query: String::new(),
            results,
            highlighted: 0,
            focused_index: 0,
            show_help: false,
            should_quit: false,
            status: None,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Read-only view of the focus store; changes go through `on_item_focus_toggled`.
    pub fn focus(&self) -> &dyn FocusStore {
        self.focus.as_ref()
    }

    pub fn palette_open(&self) -> bool {
        self.view == View::Palette
    }

    /// Open the palette with an empty query, highlighting the current selection.
    pub fn open_palette(&mut self) {
        self.view = View::Palette;
        self.search_query.clear();
        self.refresh_results();
        let current = self.selection.current();
        self.highlighted = self
            .results
            .iter()
            .position(|item| &item.id == current)
            .unwrap_or(0);
    }

    pub fn close_palette(&mut self) {
        self.view = View::Focused;
        let current = self.selection.current();
        let position = self
            .focused_items()
            .iter()
            .position(|item| &item.id == current);
        if let Some(index) = position {
            self.focused_index = index;
        }
        self.clamp_focused_index();
    }

    pub fn toggle_palette(&mut self) {
        if self.palette_open() {
            self.close_palette();
        } else {
            self.open_palette();
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Re-run the search and highlight (and select) the top result.
    pub fn on_search_text_changed(&mut self, text: &str) {
        if self.search_query != text {
            self.search_query = text.to_string();
        }
        self.refresh_results();
        self.highlighted = 0;
        self.activate_highlighted();
    }

    fn refresh_results(&mut self) {
        self.results = source::search(&self.search_query, &self.catalog)
            .into_iter()
            .cloned()
            .collect();
    }

    pub fn search_push_char(&mut self, c: char) {
        let mut text = self.search_query.clone();
        text.push(c);
        self.on_search_text_changed(&text);
    }

    pub fn search_pop_char(&mut self) {
        let mut text = self.search_query.clone();
        text.pop();
        self.on_search_text_changed(&text);
    }

    /// Select `id`; unknown ids are ignored.
    pub fn on_item_activated(&mut self, id: &str) -> bool {
        self.selection.select(&self.catalog, id)
    }

    /// Toggle focus of `id`. A failed save is reported in the footer.
    pub fn on_item_focus_toggled(&mut self, id: &SourceId) {
        match focus::toggle_focus(self.focus.as_mut(), id) {
            Ok(()) => self.status = None,
            Err(e) => {
                tracing::warn!(%id, error = %e, "failed to save focus change");
                self.status = Some(format!("Could not save focus: {e}"));
            }
        }
        self.clamp_focused_index();
    }

    pub fn is_focused(&self, id: &str) -> bool {
        focus::is_focused(self.focus.as_ref(), id)
    }

    pub fn focused_count(&self) -> usize {
        self.focus.read().len()
    }

    pub fn focused_items(&self) -> Vec<&SourceItem> {
        focus::focused_items(self.focus.as_ref(), &self.catalog)
    }

    pub fn selected_item(&self) -> Option<&SourceItem> {
        self.catalog.get(self.selection.current().as_str())
    }

    pub fn highlighted_item(&self) -> Option<&SourceItem> {
        self.results.get(self.highlighted)
    }

    /// Toggle focus of the highlighted palette row.
    pub fn toggle_highlighted_focus(&mut self) {
        if let Some(id) = self.highlighted_item().map(|item| item.id.clone()) {
            self.on_item_focus_toggled(&id);
        }
    }

    /// Toggle focus of the selected source.
    pub fn toggle_selected_focus(&mut self) {
        let id = self.selection.current().clone();
        self.on_item_focus_toggled(&id);
    }

    pub fn next(&mut self) {
        match self.view {
            View::Palette => {
                let count = self.results.len();
                if count > 0 {
                    self.highlighted = (self.highlighted + 1) % count;
                    self.activate_highlighted();
                }
            }
            View::Focused => {
                let count = self.focused_items().len();
                if count > 0 {
                    self.focused_index = (self.focused_index + 1) % count;
                    self.activate_focused();
                }
            }
        }
    }

    pub fn previous(&mut self) {
        match self.view {
            View::Palette => {
                let count = self.results.len();
                if count > 0 {
                    self.highlighted = if self.highlighted > 0 {
                        self.highlighted - 1
                    } else {
                        count - 1
                    };
                    self.activate_highlighted();
                }
            }
            View::Focused => {
                let count = self.focused_items().len();
                if count > 0 {
                    self.focused_index = if self.focused_index > 0 {
                        self.focused_index - 1
                    } else {
                        count - 1
                    };
                    self.activate_focused();
                }
            }
        }
    }

    fn activate_highlighted(&mut self) {
        if let Some(id) = self.highlighted_item().map(|item| item.id.clone()) {
            self.on_item_activated(id.as_str());
        }
    }

    fn activate_focused(&mut self) {
        let id = self
            .focused_items()
            .get(self.focused_index)
            .map(|item| item.id.clone());
        if let Some(id) = id {
            self.on_item_activated(id.as_str());
        }
    }

    fn clamp_focused_index(&mut self) {
        let count = self.focused_items().len();
        self.focused_index = self.focused_index.min(count.saturating_sub(1));
    }
}
