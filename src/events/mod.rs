//! Visualization events
//!
//! The interpreter never draws anything itself. Every observable effect is
//! reported through a [`SimulationSink`]:
//!
//! - `method_entered` / `method_exited` when the [`CallStack`] pushes or pops
//! - `status_message` for every executed line
//!
//! [`EventLog`] is the sink used by the TUI, the headless runner and the tests.
//! It mirrors the call stack from the enter/exit events alone and keeps a
//! bounded history of everything it has seen.
//!
//! [`CallStack`]: crate::collections::CallStack

use crate::collections::{Deque, RingDeque};
use crate::interpreter::constants::DEFAULT_HISTORY_LIMIT;
use crate::interpreter::method::Method;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Receiver of interpreter events
pub trait SimulationSink {
    fn method_entered(&mut self, method: &Method);

    fn method_exited(&mut self, method: &Method);

    fn status_message(&mut self, text: &str);
}

/// Sink handle shared between a [`Program`](crate::interpreter::program::Program)
/// and its call stack
pub type SharedSink = Rc<RefCell<dyn SimulationSink>>;

/// A single recorded event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MethodEntered { name: String, size: usize },
    MethodExited { name: String },
    Status(String),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::MethodEntered { name, size } => write!(f, "-> {} ({} bytes)", name, size),
            Event::MethodExited { name } => write!(f, "<- {}", name),
            Event::Status(text) => write!(f, "{}", text),
        }
    }
}

/// One frame of the mirrored call stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub name: String,
    pub size: usize,
}

/// Recording sink
#[derive(Debug)]
pub struct EventLog {
    history: RingDeque<Event>,
    history_limit: usize,
    /// Bottom of the stack first
    frames: Vec<FrameView>,
    total_events: usize,
}

impl EventLog {
    /// Create a log that keeps at most `history_limit` events (minimum 1)
    pub fn new(history_limit: usize) -> Self {
        EventLog {
            history: RingDeque::new(),
            history_limit: history_limit.max(1),
            frames: Vec::new(),
            total_events: 0,
        }
    }

    /// Create a log already wrapped for sharing with a program
    pub fn shared(history_limit: usize) -> Rc<RefCell<EventLog>> {
        Rc::new(RefCell::new(EventLog::new(history_limit)))
    }

    fn record(&mut self, event: Event) {
        // history_limit >= 1, so the deque is non-empty here
        if self.history.len() >= self.history_limit {
            self.history.remove_front().ok();
        }
        self.history.push_back(event);
        self.total_events += 1;
    }

    /// Retained events, oldest first
    pub fn events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.history.iter()
    }

    /// Retained status messages, oldest first
    pub fn status_messages(&self) -> Vec<&str> {
        self.history
            .iter()
            .filter_map(|event| match event {
                Event::Status(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The most recent status message, if still retained
    pub fn last_status(&self) -> Option<&str> {
        self.status_messages().pop()
    }

    pub fn frames(&self) -> &[FrameView] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Number of events received, including ones dropped from history
    pub fn total_events(&self) -> usize {
        self.total_events
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl SimulationSink for EventLog {
    fn method_entered(&mut self, method: &Method) {
        self.frames.push(FrameView {
            name: method.name().to_string(),
            size: method.size(),
        });
        self.record(Event::MethodEntered {
            name: method.name().to_string(),
            size: method.size(),
        });
    }

    fn method_exited(&mut self, method: &Method) {
        self.frames.pop();
        self.record(Event::MethodExited {
            name: method.name().to_string(),
        });
    }

    fn status_message(&mut self, text: &str) {
        self.record(Event::Status(text.to_string()));
    }
}
