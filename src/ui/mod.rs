//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, auto-play
//! - **[`panes`]**: stateless render functions for each visible pane (source, call
//!   stack, output, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The UI is the clock: every step key press or auto-play tick calls
//! [`Program::step`] once. The call stack pane is drawn from the
//! [`EventLog`] mirror, never from the program's own stack.
//!
//! [`Program::step`]: crate::interpreter::program::Program::step
//! [`EventLog`]: crate::events::EventLog

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
