//! The editor session facade.
//!
//! ## Design
//!
//! `Editor` owns one document and one history engine and is the only
//! surface the UI talks to. The UI reports edits (`apply_edit`), offers
//! debounce tokens back when its timer fires (`typing_stopped`) and issues
//! commands (`undo`, `redo`, save). The contract that every `set_text`
//! produces exactly one change notification is honored here: undo/redo
//! deliver the replayed change themselves, and the engine swallows it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use hayat_history::{DebounceToken, HistoryEngine, TextSink};

use crate::config::Config;
use crate::document::TextDocument;
use crate::{CoreError, CoreResult};

/// A single-document editing session.
pub struct Editor {
    document: TextDocument,
    engine: HistoryEngine,
    config: Config,
}

impl Editor {
    /// Creates a session with an empty untitled document.
    pub fn new(config: Config) -> Self {
        let engine = HistoryEngine::new(
            config.editor.undo_limit,
            config.editor.debounce_delay(),
        );
        Self {
            document: TextDocument::new(),
            engine,
            config,
        }
    }

    /// Replaces the session's document with one loaded from `path`.
    ///
    /// History belongs to the old document and is dropped with it.
    pub fn open(&mut self, path: impl AsRef<Path>) -> CoreResult<()> {
        self.document = TextDocument::from_file(path)?;
        self.engine.clear();
        Ok(())
    }

    /// Returns the current document.
    pub fn document(&self) -> &TextDocument {
        &self.document
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The quiet period the UI should sleep before `typing_stopped`.
    pub fn debounce_delay(&self) -> Duration {
        self.engine.delay()
    }

    /// Applies one user edit: the document takes the new text and the
    /// resulting change notification goes to the engine.
    ///
    /// Returns the debounce token the UI's timer should carry, or `None`
    /// if the notification was suppressed as undo/redo replay.
    pub fn apply_edit(&mut self, text: &str) -> Option<DebounceToken> {
        self.document.set_text(text);
        self.engine.notify_changed()
    }

    /// The debounce timer fired: typing has paused.
    ///
    /// Returns whether a snapshot was committed (stale tokens and no-op
    /// edits commit nothing).
    pub fn typing_stopped(&mut self, token: DebounceToken) -> bool {
        self.engine.typing_stopped(token, &self.document)
    }

    /// Reverts to the previous committed snapshot.
    ///
    /// Returns false (and changes nothing) on empty history.
    pub fn undo(&mut self) -> bool {
        if !self.engine.undo(&mut self.document) {
            return false;
        }
        self.deliver_replay_notification();
        true
    }

    /// Re-applies the most recently undone snapshot.
    pub fn redo(&mut self) -> bool {
        if !self.engine.redo(&mut self.document) {
            return false;
        }
        self.deliver_replay_notification();
        true
    }

    /// Forwards the change notification for a replayed `set_text`. The
    /// engine suppresses it, keeping the one-notification-per-change
    /// contract intact without arming a debounce cycle.
    fn deliver_replay_notification(&mut self) {
        let token = self.engine.notify_changed();
        debug_assert!(token.is_none(), "replay change must not arm the debounce");
    }

    /// Returns true if there is a snapshot to undo.
    pub fn can_undo(&self) -> bool {
        self.engine.can_undo()
    }

    /// Returns true if there is a snapshot to redo.
    pub fn can_redo(&self) -> bool {
        self.engine.can_redo()
    }

    /// Prepares a save of the current text to the document's own path.
    ///
    /// Fails with [`CoreError::NoPath`] for untitled documents; the UI
    /// resolves that by running its save-as dialog instead.
    pub fn save_request(&self) -> CoreResult<(PathBuf, String)> {
        let path = self.document.path().ok_or(CoreError::NoPath)?;
        Ok((path.to_path_buf(), self.document.text().to_string()))
    }

    /// Records a completed save, clearing the modified flag.
    pub fn mark_saved(&mut self, path: impl AsRef<Path>) {
        self.document.mark_saved(path);
    }
}

/// Writes `text` to `path`, returning the path on success.
///
/// The async result replaces dialog-callback style completion: callers get
/// an explicit `Result` to surface to the user.
pub async fn write_document(path: PathBuf, text: String) -> CoreResult<PathBuf> {
    tokio::fs::write(&path, text).await?;
    tracing::info!(path = %path.display(), "document saved");
    Ok(path)
}
