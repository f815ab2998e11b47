use iced::widget::text_editor;
use std::path::PathBuf;

use hayat_history::DebounceToken;

#[derive(Debug, Clone)]
pub enum Message {
    // Editor
    EditorAction(text_editor::Action),

    // Debounce timer completion; stale tokens are ignored
    TypingStopped(DebounceToken),

    // Edit operations
    Undo,
    Redo,

    // File operations
    Save,
    SaveAs,

    // Async results
    FileSaved(Result<PathBuf, String>),
}
