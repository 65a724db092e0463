//! Method activations
//!
//! A [`Method`] is a named list of source lines plus a program counter
//! (`ticks`). The copies held by a program's [`Catalog`] are templates and are
//! never stepped; every call gets its own copy from [`Catalog::resolve`], so
//! recursive and repeated calls never share a program counter.
//!
//! # Stepping
//!
//! [`Method::step`] executes exactly one line:
//!
//! 1. `print "text"` lines report `"<name> output : text"`, all other lines
//!    report `"<name> : <trimmed line>"`
//! 2. independently, a `name(...)` line is resolved against the owning
//!    program's catalog and the fresh copy is handed back to the caller, who
//!    pushes it if a call stack is attached
//!
//! Unknown call targets are not errors; the step simply returns no call.

use super::constants::{METHOD_BASE_SIZE, METHOD_LINE_SIZE};
use super::errors::StepError;
use super::program::Catalog;
use crate::events::SimulationSink;
use crate::parser::patterns::{call_target, print_text};
use std::rc::Weak;

/// A method template or running activation
#[derive(Debug)]
pub struct Method {
    name: String,
    lines: Vec<String>,
    size: usize,
    ticks: usize,
    /// 1-based source line of `lines[0]`
    origin: usize,
    program: Weak<Catalog>,
}

impl Method {
    pub(crate) fn new(name: impl Into<String>, origin: usize, program: Weak<Catalog>) -> Self {
        Method {
            name: name.into(),
            lines: Vec::new(),
            size: METHOD_BASE_SIZE,
            ticks: 0,
            origin,
            program,
        }
    }

    /// A method that belongs to no program. Its calls never resolve.
    pub fn detached<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut method = Method::new(name, 1, Weak::new());
        for line in lines {
            method.add_line(line);
        }
        method
    }

    pub(crate) fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.size += METHOD_LINE_SIZE;
    }

    /// Independent copy with its program counter reset
    pub fn fresh_copy(&self) -> Method {
        Method {
            name: self.name.clone(),
            lines: self.lines.clone(),
            size: self.size,
            ticks: 0,
            origin: self.origin,
            program: self.program.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Virtual size in bytes: a fixed base plus a constant per line
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines executed so far
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn is_finished(&self) -> bool {
        self.ticks >= self.lines.len()
    }

    /// Source line number of the next line to execute
    pub fn current_line(&self) -> Option<usize> {
        if self.is_finished() {
            None
        } else {
            Some(self.origin + self.ticks)
        }
    }

    /// Execute the next line, reporting it to `sink`.
    ///
    /// Returns the method invoked by the line, if it is a call to a method the
    /// owning program defines.
    pub fn step(&mut self, sink: &mut dyn SimulationSink) -> Result<Option<Method>, StepError> {
        let Some(line) = self.lines.get(self.ticks) else {
            return Err(StepError::AlreadyFinished {
                method: self.name.clone(),
            });
        };

        match print_text(line) {
            Some(text) => sink.status_message(&format!("{} output : {}", self.name, text)),
            None => sink.status_message(&format!("{} : {}", self.name, line.trim())),
        }

        let call = call_target(line).and_then(|target| self.resolve(target));
        self.ticks += 1;
        Ok(call)
    }

    fn resolve(&self, name: &str) -> Option<Method> {
        self.program.upgrade()?.resolve(name)
    }
}
