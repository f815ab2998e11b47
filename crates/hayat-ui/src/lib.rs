//! # Hayat UI
//!
//! The desktop window: a header with Save/Undo/Redo buttons, the text
//! area, and a status line.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`app::App`] — the editor session plus widget state
//! - **Message**: events, including debounce-timer completions
//! - **Update**: `(state, message) -> new state` plus async tasks
//! - **View**: pure function from state to widgets
//!
//! Everything history-related is delegated to the session in
//! `hayat-core`; this crate only turns widget events into session calls
//! and sleeps out debounce delays as `iced::Task`s.

pub mod app;
pub mod theme;

pub use app::{run, App, Flags};
