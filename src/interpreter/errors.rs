//! Error types for the method interpreter
//!
//! - [`SyntaxError`]: delimiter validation failed, no program was built
//! - [`StepError`]: a method was stepped after it finished
//! - [`LoadError`]: reading a program file failed
//!
//! Syntax and load errors abort construction. Step errors are reported by the
//! driving [`Program`](super::program::Program) and never stop the simulation.

use thiserror::Error;

/// Unbalanced delimiters in program source. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unmatched closed delimiter: {delimiter} at line {line}")]
    UnmatchedClose { delimiter: char, line: usize },

    #[error("delimiters not paired: {open} and {close} at line {line}")]
    Mismatched {
        open: char,
        close: char,
        line: usize,
    },

    #[error("delimiter not closed: {delimiter} opened at line {line}")]
    Unclosed { delimiter: char, line: usize },
}

impl SyntaxError {
    pub fn line(&self) -> usize {
        match self {
            SyntaxError::UnmatchedClose { line, .. } => *line,
            SyntaxError::Mismatched { line, .. } => *line,
            SyntaxError::Unclosed { line, .. } => *line,
        }
    }
}

/// Anomaly during a single instruction step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("{method} should have exited by now")]
    AlreadyFinished { method: String },
}

/// Failure loading a program from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read program file: {0}")]
    Io(#[from] std::io::Error),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}
