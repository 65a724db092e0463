//! Programs and the stepping driver
//!
//! A [`Program`] owns the [`Catalog`] of method templates parsed from its
//! source and, optionally, the [`CallStack`] those methods run on. Nothing
//! happens until the caller invokes [`Program::step`]; each call performs one
//! bounded unit of work and returns.
//!
//! # Execution modes
//!
//! Whether a call stack exists is decided at construction by passing a
//! [`StackFactory`] (or not).
//!
//! **Stack-driven.** The first step pushes a copy of the entry method (the
//! first definition). Every step then looks at the top frame:
//!
//! - stack empty: the program is finished
//! - top frame finished: pop it, nothing else happens this step
//! - otherwise: execute one line of the top frame, pushing the callee if the
//!   line was a call
//!
//! **Standalone.** Steps drive a single copy of the entry method directly.
//! Calls are recognized but go nowhere. Once the method has run its last
//! line the next step marks the program finished.

use super::errors::{LoadError, StepError, SyntaxError};
use super::method::Method;
use crate::collections::{CallStack, Deque, DequeError};
use crate::events::SharedSink;
use crate::parser::ast::MethodDef;
use crate::parser::parse::Parser;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

/// Builds the call stack a program runs on
pub type StackFactory = fn(SharedSink) -> CallStack;

/// Method templates of one program, in definition order
#[derive(Debug)]
pub struct Catalog {
    methods: Vec<Method>,
    /// Name -> position of its first definition
    index: FxHashMap<String, usize>,
}

impl Catalog {
    fn build(defs: Vec<MethodDef>) -> Rc<Catalog> {
        Rc::new_cyclic(|owner| {
            let mut methods = Vec::with_capacity(defs.len());
            let mut index = FxHashMap::default();

            for def in defs {
                let mut method = Method::new(def.name, def.origin, owner.clone());
                for line in def.lines {
                    method.add_line(line);
                }
                index
                    .entry(method.name().to_string())
                    .or_insert(methods.len());
                methods.push(method);
            }

            Catalog { methods, index }
        })
    }

    /// A fresh, independently steppable copy of the named method
    pub fn resolve(&self, name: &str) -> Option<Method> {
        let &position = self.index.get(name)?;
        self.methods.get(position).map(Method::fresh_copy)
    }

    /// A fresh copy of the entry method
    pub fn entry(&self) -> Option<Method> {
        self.methods.first().map(Method::fresh_copy)
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}

/// Lifecycle of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramState {
    Unstarted,
    Running,
    Finished,
}

/// A parsed program and its execution state
pub struct Program {
    name: String,
    catalog: Rc<Catalog>,
    call_stack: Option<CallStack>,
    /// The running entry method in standalone mode
    standalone: Option<Method>,
    sink: SharedSink,
    started: bool,
    finished: bool,
    steps: usize,
}

impl Program {
    /// Parse `source` into a program.
    ///
    /// Fails without building anything if the source has unbalanced
    /// delimiters. With `stack` set to `None` the program runs standalone.
    pub fn new(
        name: impl Into<String>,
        source: &str,
        sink: SharedSink,
        stack: Option<StackFactory>,
    ) -> Result<Self, SyntaxError> {
        let defs = Parser::new(source)?.parse_program();
        let catalog = Catalog::build(defs);
        let call_stack = stack.map(|make| make(Rc::clone(&sink)));
        let standalone = match call_stack {
            Some(_) => None,
            None => catalog.entry(),
        };

        Ok(Program {
            name: name.into(),
            catalog,
            call_stack,
            standalone,
            sink,
            started: false,
            finished: false,
            steps: 0,
        })
    }

    /// Load a program from a file. The program is named after the file.
    pub fn from_file(
        path: &Path,
        sink: SharedSink,
        stack: Option<StackFactory>,
    ) -> Result<Self, LoadError> {
        let source = fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Program::new(name, &source, sink, stack)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Method templates in definition order; the first is the entry point
    pub fn methods(&self) -> &[Method] {
        self.catalog.methods()
    }

    /// Fresh copy of the named method, if the program defines it
    pub fn resolve(&self, name: &str) -> Option<Method> {
        self.catalog.resolve(name)
    }

    pub fn has_call_stack(&self) -> bool {
        self.call_stack.is_some()
    }

    pub fn call_stack(&self) -> Option<&CallStack> {
        self.call_stack.as_ref()
    }

    /// The method whose line will run next: the top frame, or the standalone entry
    pub fn current_method(&self) -> Option<&Method> {
        match &self.call_stack {
            Some(stack) => stack.peek_front().ok(),
            None => self.standalone.as_ref(),
        }
    }

    pub fn state(&self) -> ProgramState {
        if self.finished {
            ProgramState::Finished
        } else if self.started {
            ProgramState::Running
        } else {
            ProgramState::Unstarted
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of steps that did work, including the one that finished the program
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advance the program by one step. Does nothing once finished.
    pub fn step(&mut self) {
        if self.finished {
            return;
        }
        self.steps += 1;

        if self.call_stack.is_some() {
            self.step_stack();
        } else {
            self.step_standalone();
        }
        self.started = true;
    }

    /// Step until finished or until `max_steps` steps have run. Returns the steps taken.
    pub fn run(&mut self, max_steps: usize) -> usize {
        let mut taken = 0;
        while !self.finished && taken < max_steps {
            self.step();
            taken += 1;
        }
        taken
    }

    fn step_standalone(&mut self) {
        let Some(method) = self.standalone.as_mut() else {
            self.finished = true;
            return;
        };
        if method.is_finished() {
            self.finished = true;
            return;
        }

        let outcome = {
            let mut sink = self.sink.borrow_mut();
            method.step(&mut *sink)
        };
        if let Err(err) = outcome {
            report_step_error(&err);
        }
    }

    fn step_stack(&mut self) {
        let Some(stack) = self.call_stack.as_mut() else {
            return;
        };

        if !self.started {
            if let Some(entry) = self.catalog.entry() {
                if let Err(err) = stack.add_front(entry) {
                    report_stack_error(&err);
                }
            }
        }

        let top = match stack.peek_front_mut() {
            Ok(top) => top,
            Err(_) => {
                self.finished = true;
                return;
            }
        };

        if top.is_finished() {
            if let Err(err) = stack.remove_front() {
                report_stack_error(&err);
            }
            return;
        }

        let outcome = {
            let mut sink = self.sink.borrow_mut();
            top.step(&mut *sink)
        };
        match outcome {
            Ok(Some(callee)) => {
                if let Err(err) = stack.add_front(callee) {
                    report_stack_error(&err);
                }
            }
            Ok(None) => {}
            Err(err) => report_step_error(&err),
        }
    }
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("name", &self.name)
            .field("catalog", &self.catalog)
            .field("call_stack", &self.call_stack)
            .field("state", &self.state())
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

fn report_step_error(err: &StepError) {
    eprintln!("Warning: {}", err);
}

fn report_stack_error(err: &DequeError) {
    eprintln!("Warning: call stack: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, EventLog};
    use std::cell::RefCell;

    fn build(source: &str, stack: Option<StackFactory>) -> (Program, Rc<RefCell<EventLog>>) {
        let log = EventLog::shared(100);
        let program = Program::new("test", source, log.clone(), stack).unwrap();
        (program, log)
    }

    #[test]
    fn test_state_transitions() {
        let (mut program, _log) = build("def a() { x }", Some(CallStack::new));
        assert_eq!(program.state(), ProgramState::Unstarted);
        program.step();
        assert_eq!(program.state(), ProgramState::Running);
        program.run(10);
        assert_eq!(program.state(), ProgramState::Finished);
    }

    #[test]
    fn test_first_step_pushes_and_executes_entry() {
        let (mut program, log) = build("def a() { x }", Some(CallStack::new));
        program.step();
        let events: Vec<Event> = log.borrow().events().cloned().collect();
        assert_eq!(
            events,
            vec![
                Event::MethodEntered {
                    name: "a".to_string(),
                    size: 20
                },
                Event::Status("a : x".to_string()),
            ]
        );
    }

    #[test]
    fn test_pop_consumes_a_step() {
        let (mut program, log) = build("def a() { x }", Some(CallStack::new));
        program.step();
        program.step();
        assert_eq!(log.borrow().depth(), 0);
        assert!(!program.is_finished());
        assert_eq!(log.borrow().status_messages().len(), 1);
        program.step();
        assert!(program.is_finished());
        assert_eq!(program.steps(), 3);
    }

    #[test]
    fn test_finished_program_ignores_steps() {
        let (mut program, log) = build("def a() { x }", None);
        program.run(100);
        let events = log.borrow().total_events();
        let steps = program.steps();
        program.step();
        program.step();
        assert_eq!(log.borrow().total_events(), events);
        assert_eq!(program.steps(), steps);
    }

    #[test]
    fn test_empty_program_finishes_immediately() {
        let (mut program, log) = build("nothing to see\n", Some(CallStack::new));
        assert!(program.methods().is_empty());
        program.step();
        assert!(program.is_finished());
        assert_eq!(log.borrow().total_events(), 0);

        let (mut program, _log) = build("", None);
        program.step();
        assert!(program.is_finished());
    }

    #[test]
    fn test_resolve_returns_independent_copies() {
        let (program, _log) = build("def a() {\n  one\n  two\n}", None);
        let mut first = program.resolve("a").unwrap();
        let second = program.resolve("a").unwrap();
        let mut log = EventLog::default();
        first.step(&mut log).unwrap();
        assert_eq!(first.ticks(), 1);
        assert_eq!(second.ticks(), 0);
        assert_eq!(program.methods()[0].ticks(), 0);
        assert!(program.resolve("missing").is_none());
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let (program, _log) = build("def a() { first }\ndef a() { second }", None);
        assert_eq!(program.methods().len(), 2);
        assert_eq!(program.resolve("a").unwrap().lines(), ["first"]);
    }

    #[test]
    fn test_current_method_tracks_top_frame() {
        let (mut program, _log) =
            build("def a() {\n  b()\n}\ndef b() { x }", Some(CallStack::new));
        assert!(program.current_method().is_none());
        program.step();
        assert_eq!(program.current_method().unwrap().name(), "b");
        assert_eq!(program.current_method().unwrap().current_line(), Some(4));
    }

    #[test]
    fn test_syntax_error_aborts_construction() {
        let log = EventLog::shared(10);
        let result = Program::new("bad", "def a() { (", log, Some(CallStack::new));
        assert!(matches!(
            result,
            Err(SyntaxError::Unclosed { delimiter: '(', line: 1 })
        ));
    }
}
