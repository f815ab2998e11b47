//! The in-memory document behind the text area.
//!
//! A document is the full text plus file identity: where it lives on disk
//! (if anywhere), what to show in the title bar, and whether it has
//! unsaved changes. It is the engine-facing [`TextSink`] adapter.

use std::path::{Path, PathBuf};

use hayat_history::TextSink;

use crate::CoreResult;

/// A single file or untitled buffer being edited.
#[derive(Debug, Clone)]
pub struct TextDocument {
    text: String,
    path: Option<PathBuf>,
    name: String,
    modified: bool,
}

impl TextDocument {
    /// Creates a new empty untitled document.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            path: None,
            name: "Untitled".to_string(),
            modified: false,
        }
    }

    /// Opens a document from a file.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        tracing::info!(path = %path.display(), chars = text.chars().count(), "document loaded");

        Ok(Self {
            text,
            name: Self::display_name(path),
            path: Some(path.to_path_buf()),
            modified: false,
        })
    }

    fn display_name(path: &Path) -> String {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Unknown")
            .to_string()
    }

    /// Returns the full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the file path, if the document has one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the display name for the title bar.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the document has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Records a successful save to `path`, clearing the modified flag.
    pub fn mark_saved(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.name = Self::display_name(path);
        self.path = Some(path.to_path_buf());
        self.modified = false;
    }
}

impl TextSink for TextDocument {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.modified = true;
        }
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}
