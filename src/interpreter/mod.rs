//! Method interpreter
//!
//! This module provides the execution model:
//! - [`method`]: [`Method`](method::Method), a named line list with a program counter
//! - [`program`]: [`Program`](program::Program), the catalog and stepping driver
//! - [`errors`]: syntax, step and load errors
//! - [`constants`]: size metric and default limits
//!
//! # Execution Model
//!
//! Execution is cooperative. [`Program::step`](program::Program::step) is the
//! clock: each call runs at most one line, or pushes/pops one frame, and all of
//! its effects reach the sink before it returns. There is no background work,
//! so a caller can stop stepping at any point and the state stays consistent.

pub mod constants;
pub mod errors;
pub mod method;
pub mod program;
