//! # Introduction
//!
//! callviz parses programs written in a tiny method language and executes them
//! one line at a time, showing every call and return on a visual call stack.
//! The TUI is built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Delimiter check → Method catalog → Program::step → Events → TUI
//! ```
//!
//! 1. [`parser`]: validates delimiter balance and collects `def` blocks.
//! 2. [`interpreter`]: [`interpreter::program::Program`] drives execution, one
//!    [`interpreter::method::Method`] line per step.
//! 3. [`collections`]: [`collections::RingDeque`], a growable circular deque, and
//!    [`collections::CallStack`], its front-only specialization.
//! 4. [`events`]: the sink interface the interpreter reports to, and
//!    [`events::EventLog`], which records it.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Language
//!
//! ```text
//! def main() {
//!     print "hello"     // output line
//!     greet()           // call
//! }
//! def greet() { print "hi from greet" }
//! ```
//!
//! There are no expressions, variables or control flow beyond call and return.

pub mod collections;
pub mod events;
pub mod interpreter;
pub mod parser;
pub mod ui;
