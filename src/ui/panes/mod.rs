//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code display with highlighting and current line indicator
//! - [`stack`]: Call stack mirrored from enter/exit events
//! - [`output`]: Status messages reported by each executed line
//! - [`status`]: Status bar with keybindings and execution state
//!
//! Each pane module exports a primary `render_*` function plus the scroll
//! state it keeps between frames.

pub mod output;
pub mod source;
pub mod stack;
pub mod status;

// Re-export render functions for convenience
pub use output::render_output_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use stack::{render_stack_pane, StackScrollState};
pub use status::{render_status_bar, StatusRenderData};
