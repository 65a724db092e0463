//! The interpreter's call stack
//!
//! A [`RingDeque`] of [`Method`] activations used strictly as a stack: the
//! front is the top. Pushes and pops are reported to the shared
//! [`SimulationSink`] after the stack itself has changed. Back-side
//! operations always fail with [`DequeError::Unsupported`].

use super::{Deque, DequeError, RingDeque};
use crate::events::SharedSink;
use crate::interpreter::method::Method;

/// Front-only deque of method activations
pub struct CallStack {
    frames: RingDeque<Method>,
    sink: SharedSink,
}

impl CallStack {
    pub fn new(sink: SharedSink) -> Self {
        CallStack {
            frames: RingDeque::new(),
            sink,
        }
    }

    /// Number of active frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Iterate from the top frame down
    pub fn frames(&self) -> impl Iterator<Item = &Method> + '_ {
        self.frames.iter()
    }
}

impl std::fmt::Debug for CallStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallStack")
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl Deque<Method> for CallStack {
    fn add_front(&mut self, method: Method) -> Result<(), DequeError> {
        self.frames.add_front(method)?;
        let top = self.frames.peek_front()?;
        self.sink.borrow_mut().method_entered(top);
        Ok(())
    }

    fn remove_front(&mut self) -> Result<Method, DequeError> {
        let method = self.frames.remove_front()?;
        self.sink.borrow_mut().method_exited(&method);
        Ok(method)
    }

    fn add_back(&mut self, _method: Method) -> Result<(), DequeError> {
        Err(DequeError::Unsupported {
            operation: "add_back",
        })
    }

    fn remove_back(&mut self) -> Result<Method, DequeError> {
        Err(DequeError::Unsupported {
            operation: "remove_back",
        })
    }

    fn peek_front(&self) -> Result<&Method, DequeError> {
        self.frames.peek_front()
    }

    fn peek_front_mut(&mut self) -> Result<&mut Method, DequeError> {
        self.frames.peek_front_mut()
    }

    fn peek_back(&self) -> Result<&Method, DequeError> {
        Err(DequeError::Unsupported {
            operation: "peek_back",
        })
    }

    fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    fn is_full(&self) -> bool {
        self.frames.is_full()
    }

    /// Pop every frame, reporting each exit
    fn clear(&mut self) {
        while self.remove_front().is_ok() {}
    }
}
