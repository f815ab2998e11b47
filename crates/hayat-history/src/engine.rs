//! The debounced snapshot undo/redo engine.
//!
//! ## Design Decisions
//!
//! 1. **Full-text snapshots**: every committed history point is the whole
//!    document text. No deltas, no diffing; memory is bounded by the two
//!    stack capacities instead.
//! 2. **Debounced capture**: edits never touch the stacks directly. They
//!    re-arm the debounce, and only when the quiet period completes is the
//!    current text considered for capture.
//! 3. **Linear history**: a genuinely new committed snapshot invalidates
//!    the entire redo branch, same as the buffer-level history.
//!
//! The engine owns no document. It reads and rewrites text through the
//! [`TextSink`] adapter so that the UI widget, an in-memory document or a
//! test double all work the same way.

use std::time::Duration;

use crate::debounce::{Debounce, DebounceToken};
use crate::stack::BoundedStack;

/// The editable text surface the engine acts on.
///
/// The host is responsible for forwarding exactly one
/// [`HistoryEngine::notify_changed`] call per discrete change to the sink,
/// including changes the engine itself makes during undo/redo replay.
pub trait TextSink {
    /// Returns the full current text.
    fn text(&self) -> String;

    /// Replaces the full text.
    fn set_text(&mut self, text: &str);
}

impl TextSink for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Dual-stack undo/redo history driven by debounced change notifications.
///
/// State machine per keystroke burst: idle → typing (debounce armed) →
/// committed (quiet period elapsed, snapshot possibly captured) → idle.
/// Undo and redo on empty stacks are silent no-ops; nothing in here
/// surfaces an error.
#[derive(Debug)]
pub struct HistoryEngine {
    undo: BoundedStack<String>,
    redo: BoundedStack<String>,
    debounce: Debounce,
    /// Set while the change caused by an undo/redo replay has not yet been
    /// reported back; that one notification must not arm a new cycle.
    suppress_next: bool,
}

impl HistoryEngine {
    /// Creates an engine with the given stack capacity and quiet period.
    pub fn new(capacity: usize, delay: Duration) -> Self {
        Self {
            undo: BoundedStack::new(capacity),
            redo: BoundedStack::new(capacity),
            debounce: Debounce::new(delay),
            suppress_next: false,
        }
    }

    /// The quiet period the host should wait before offering a token back.
    pub fn delay(&self) -> Duration {
        self.debounce.delay()
    }

    /// Reports one discrete document change.
    ///
    /// Re-arms the debounce and returns the token the host's timer should
    /// carry. Returns `None` for the change notification caused by the
    /// engine's own undo/redo replay — programmatic replacement never
    /// schedules a capture. The stacks are untouched either way.
    pub fn notify_changed(&mut self) -> Option<DebounceToken> {
        if self.suppress_next {
            self.suppress_next = false;
            tracing::trace!("change from replay suppressed");
            return None;
        }
        Some(self.debounce.trigger())
    }

    /// The debounce-timer callback: typing has paused.
    ///
    /// Stale tokens (superseded or cancelled cycles) are rejected. For a
    /// live token, the current text is captured iff it is non-empty and
    /// differs from the undo top; capture pushes the snapshot and clears
    /// the redo stack. Returns whether a snapshot was committed.
    pub fn typing_stopped<D: TextSink>(&mut self, token: DebounceToken, doc: &D) -> bool {
        if !self.debounce.accept(token) {
            return false;
        }

        let text = doc.text();
        if text.is_empty() {
            return false;
        }
        if self.undo.peek().map(String::as_str) == Some(text.as_str()) {
            // No-op edit burst; nothing new to remember.
            return false;
        }

        tracing::debug!(chars = text.chars().count(), "snapshot committed");
        self.undo.push(text);
        self.redo.clear();
        true
    }

    /// Reverts the document to the previous committed snapshot.
    ///
    /// The undo top is the state being undone: it moves to the redo stack,
    /// and the snapshot beneath it (or the empty string if none remains)
    /// becomes the visible text. Returns false on empty history.
    pub fn undo<D: TextSink>(&mut self, doc: &mut D) -> bool {
        let Some(current) = self.undo.pop() else {
            return false;
        };

        // Abandon any in-flight typing burst; committing it now would
        // interleave a fresh snapshot with the replay.
        self.debounce.cancel();

        let restored = self.undo.peek().cloned().unwrap_or_default();
        self.apply(doc, &restored);
        self.redo.push(current);
        tracing::debug!(
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "undo"
        );
        true
    }

    /// Re-applies the most recently undone snapshot.
    ///
    /// The redo top becomes the visible text and moves back to the undo
    /// stack. Returns false on empty redo history.
    pub fn redo<D: TextSink>(&mut self, doc: &mut D) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };

        self.debounce.cancel();
        self.apply(doc, &next);
        self.undo.push(next);
        tracing::debug!(
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "redo"
        );
        true
    }

    /// Rewrites the document and flags the resulting change notification
    /// for suppression.
    fn apply<D: TextSink>(&mut self, doc: &mut D, text: &str) {
        self.suppress_next = true;
        doc.set_text(text);
    }

    /// Returns true if there is a snapshot to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns true if there is a snapshot to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of snapshots on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of snapshots on the redo stack.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drops all history and any pending debounce cycle.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
        self.debounce.cancel();
        self.suppress_next = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    fn engine() -> HistoryEngine {
        HistoryEngine::new(50, DELAY)
    }

    /// Types `text` into the document and runs a full debounce cycle.
    fn commit(engine: &mut HistoryEngine, doc: &mut String, text: &str) -> bool {
        doc.set_text(text);
        let token = engine.notify_changed().expect("change should arm debounce");
        engine.typing_stopped(token, doc)
    }

    #[test]
    fn test_commit_captures_snapshot() {
        let mut engine = engine();
        let mut doc = String::new();

        assert!(commit(&mut engine, &mut doc, "hello"));
        assert_eq!(engine.undo_depth(), 1);
        assert_eq!(engine.redo_depth(), 0);
    }

    #[test]
    fn test_debounce_coalesces_rapid_edits() {
        let mut engine = engine();
        let mut doc = String::new();

        // Three keystrokes inside one quiet period: only the last token is
        // live, so at most one snapshot results, from the final text.
        doc.set_text("h");
        let t1 = engine.notify_changed().unwrap();
        doc.set_text("he");
        let t2 = engine.notify_changed().unwrap();
        doc.set_text("hey");
        let t3 = engine.notify_changed().unwrap();

        assert!(!engine.typing_stopped(t1, &doc));
        assert!(!engine.typing_stopped(t2, &doc));
        assert!(engine.typing_stopped(t3, &doc));
        assert_eq!(engine.undo_depth(), 1);
    }

    #[test]
    fn test_empty_text_not_captured() {
        let mut engine = engine();
        let mut doc = String::new();

        doc.set_text("");
        let token = engine.notify_changed().unwrap();
        assert!(!engine.typing_stopped(token, &doc));
        assert_eq!(engine.undo_depth(), 0);
    }

    #[test]
    fn test_noop_edit_suppressed() {
        let mut engine = engine();
        let mut doc = String::new();

        assert!(commit(&mut engine, &mut doc, "same"));
        commit(&mut engine, &mut doc, "other");
        engine.undo(&mut doc);
        let _ = engine.notify_changed(); // replay notification
        assert_eq!(engine.redo_depth(), 1);

        // Text equals the undo top again; no capture, redo untouched.
        assert!(!commit(&mut engine, &mut doc, "same"));
        assert_eq!(engine.undo_depth(), 1);
        assert_eq!(engine.redo_depth(), 1);
    }

    #[test]
    fn test_new_snapshot_clears_redo() {
        let mut engine = engine();
        let mut doc = String::new();

        commit(&mut engine, &mut doc, "a");
        commit(&mut engine, &mut doc, "b");
        engine.undo(&mut doc);
        let _ = engine.notify_changed(); // replay notification
        assert_eq!(engine.redo_depth(), 1);

        assert!(commit(&mut engine, &mut doc, "c"));
        assert_eq!(engine.redo_depth(), 0);
    }

    #[test]
    fn test_undo_reveals_older_snapshot() {
        let mut engine = engine();
        let mut doc = String::new();

        commit(&mut engine, &mut doc, "a");
        commit(&mut engine, &mut doc, "b");

        assert!(engine.undo(&mut doc));
        assert_eq!(doc, "a");
        assert_eq!(engine.undo_depth(), 1);
        assert_eq!(engine.redo_depth(), 1);
    }

    #[test]
    fn test_undo_bottom_reveals_empty_document() {
        let mut engine = engine();
        let mut doc = String::new();

        commit(&mut engine, &mut doc, "only");
        assert!(engine.undo(&mut doc));
        assert_eq!(doc, "");
        assert_eq!(engine.undo_depth(), 0);
        assert_eq!(engine.redo_depth(), 1);
    }

    #[test]
    fn test_redo_restores_snapshot() {
        let mut engine = engine();
        let mut doc = String::new();

        commit(&mut engine, &mut doc, "a");
        commit(&mut engine, &mut doc, "b");
        engine.undo(&mut doc);

        assert!(engine.redo(&mut doc));
        assert_eq!(doc, "b");
        assert_eq!(engine.undo_depth(), 2);
        assert_eq!(engine.redo_depth(), 0);
    }

    #[test]
    fn test_undo_redo_symmetry() {
        let mut engine = engine();
        let mut doc = String::new();

        commit(&mut engine, &mut doc, "t1");
        commit(&mut engine, &mut doc, "t2");

        assert!(engine.undo(&mut doc));
        assert!(engine.undo(&mut doc));
        assert_eq!(doc, "");

        assert!(engine.redo(&mut doc));
        assert!(engine.redo(&mut doc));
        assert_eq!(doc, "t2");
        assert_eq!(engine.undo_depth(), 2);
        assert_eq!(engine.redo_depth(), 0);
    }

    #[test]
    fn test_empty_history_is_noop() {
        let mut engine = engine();
        let mut doc = String::from("text");

        assert!(!engine.undo(&mut doc));
        assert!(!engine.redo(&mut doc));
        assert_eq!(doc, "text");
        assert_eq!(engine.undo_depth(), 0);
        assert_eq!(engine.redo_depth(), 0);
    }

    #[test]
    fn test_replay_change_does_not_rearm() {
        let mut engine = engine();
        let mut doc = String::new();

        commit(&mut engine, &mut doc, "a");
        commit(&mut engine, &mut doc, "b");
        engine.undo(&mut doc);

        // The change event raised by the replayed set_text is swallowed;
        // the next genuine edit arms normally again.
        assert!(engine.notify_changed().is_none());
        assert!(engine.notify_changed().is_some());
    }

    #[test]
    fn test_undo_cancels_pending_burst() {
        let mut engine = engine();
        let mut doc = String::new();

        commit(&mut engine, &mut doc, "a");

        // A burst is in flight when the user hits undo.
        doc.set_text("ab");
        let token = engine.notify_changed().unwrap();
        engine.undo(&mut doc);
        let _ = engine.notify_changed(); // replay notification

        assert!(!engine.typing_stopped(token, &doc));
        assert_eq!(engine.undo_depth(), 0);
    }

    #[test]
    fn test_capacity_evicts_oldest_snapshot() {
        let mut engine = HistoryEngine::new(2, DELAY);
        let mut doc = String::new();

        commit(&mut engine, &mut doc, "a");
        commit(&mut engine, &mut doc, "b");
        commit(&mut engine, &mut doc, "c");
        assert_eq!(engine.undo_depth(), 2);

        // "a" was evicted: undoing past "b" bottoms out at empty.
        engine.undo(&mut doc);
        assert_eq!(doc, "b");
        engine.undo(&mut doc);
        assert_eq!(doc, "");
        assert!(!engine.undo(&mut doc));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut engine = engine();
        let mut doc = String::new();

        commit(&mut engine, &mut doc, "a");
        doc.set_text("ab");
        let token = engine.notify_changed().unwrap();
        engine.clear();

        assert!(!engine.can_undo());
        assert!(!engine.can_redo());
        assert!(!engine.typing_stopped(token, &doc));
    }
}
