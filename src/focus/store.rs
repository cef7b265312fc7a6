//! # Focus Storage
//!
//! Backends holding the list of focused (favorited) source ids.
//!
//! ## Storage Location
//!
//! [`FileFocusStore`] keeps its data in an XDG-compliant location:
//! - Linux: `~/.local/share/newsdeck/focus.json`
//! - macOS: `~/Library/Application Support/newsdeck/focus.json`
//! - Windows: `%APPDATA%\newsdeck\focus.json`
//!
//! ```json
//! {
//!   "sources": ["zhihu", "hackernews"],
//!   "updated_at": "2025-02-05T10:30:00Z"
//! }
//! ```

use crate::source::SourceId;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Shared focus state. Read and written only as a whole list.
pub trait FocusStore {
    /// Focused ids, in the order they were focused.
    fn read(&self) -> &[SourceId];

    /// Replace the focused ids.
    fn write(&mut self, ids: Vec<SourceId>) -> Result<()>;
}

/// Focus store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryFocusStore {
    ids: Vec<SourceId>,
}

impl MemoryFocusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: Vec<SourceId>) -> Self {
        Self {
            ids: dedup_ids(ids),
        }
    }
}

impl FocusStore for MemoryFocusStore {
    fn read(&self) -> &[SourceId] {
        &self.ids
    }

    fn write(&mut self, ids: Vec<SourceId>) -> Result<()> {
        self.ids = dedup_ids(ids);
        Ok(())
    }
}

/// On-disk representation of the focus list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusFile {
    pub sources: Vec<SourceId>,
    pub updated_at: DateTime<Utc>,
}

/// Focus store persisted as JSON, saved on every write.
#[derive(Debug)]
pub struct FileFocusStore {
    path: PathBuf,
    ids: Vec<SourceId>,
}

impl FileFocusStore {
    /// Open the store at the default data location.
    pub fn new() -> Result<Self> {
        Self::open(default_focus_path()?)
    }

    /// Open the store at `path`, loading existing data if available.
    ///
    /// A corrupted file is treated as an empty focus list.
    pub fn open(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create focus storage directory: {}", parent.display())
            })?;
        }

        let ids = if path.exists() {
            match load_focus(&path) {
                Ok(file) => dedup_ids(file.sources),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "discarding unreadable focus file");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        tracing::debug!(path = %path.display(), focused = ids.len(), "opened focus store");
        Ok(Self { path, ids })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let file = FocusFile {
            sources: self.ids.clone(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&file).context("Failed to serialize focus data")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write focus file: {}", self.path.display()))?;

        Ok(())
    }
}

impl FocusStore for FileFocusStore {
    fn read(&self) -> &[SourceId] {
        &self.ids
    }

    fn write(&mut self, ids: Vec<SourceId>) -> Result<()> {
        // Keep the session consistent even when the save fails
        self.ids = dedup_ids(ids);
        self.save()
    }
}

/// Get the XDG-compliant location of the focus file
pub fn default_focus_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", "newsdeck")
        .context("Failed to determine application data directory")?;

    Ok(proj_dirs.data_dir().join("focus.json"))
}

fn load_focus(path: &Path) -> Result<FocusFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read focus file: {}", path.display()))?;

    let file: FocusFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse focus file: {}", path.display()))?;

    Ok(file)
}

/// Drop repeated ids, keeping the first occurrence.
fn dedup_ids(ids: Vec<SourceId>) -> Vec<SourceId> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
