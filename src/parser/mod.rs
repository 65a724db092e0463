//! Program source parser
//!
//! This module turns program text into method definitions:
//! - [`delimiters`]: balance check for `()`, `[]` and `{}`
//! - [`patterns`]: header, print and call line recognizers
//! - [`parse`]: [`Parser`](parse::Parser), collecting `def` blocks
//! - [`ast`]: [`MethodDef`](ast::MethodDef)
//!
//! # Source format
//!
//! ```text
//! def main() {
//!     print "starting"
//!     helper()          // call
//! }
//! def helper() { print "in helper" }
//! ```
//!
//! Lines are not tokenized. A body line is only ever classified by the
//! interpreter as a print, a call, both, or neither.

pub mod ast;
pub mod delimiters;
pub mod parse;
pub mod patterns;
