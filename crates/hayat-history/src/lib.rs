//! # Hayat History
//!
//! The undo/redo core of the editor: a capacity-bounded snapshot stack,
//! a restartable debounce state machine, and the engine that combines the
//! two into "commit a snapshot once typing pauses" behavior.
//!
//! ## Architecture Overview
//!
//! ```text
//! edit ──► HistoryEngine::notify_changed ──► Debounce (re-armed)
//!                                               │ quiet period elapses
//!                                               ▼
//!          HistoryEngine::typing_stopped ──► undo stack (redo cleared)
//!
//! undo() / redo() ──► move one snapshot between the two stacks
//!                     and rewrite the document through `TextSink`
//! ```
//!
//! The crate is deliberately free of GUI and clock dependencies: the host
//! event loop owns real time and hands debounce tokens back when its timer
//! fires, so everything here is testable as plain synchronous code.

pub mod debounce;
pub mod engine;
pub mod stack;

pub use debounce::{Debounce, DebounceToken};
pub use engine::{HistoryEngine, TextSink};
pub use stack::BoundedStack;
