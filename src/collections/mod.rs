//! Container types used by the interpreter
//!
//! - [`ring`]: [`RingDeque`], a double-ended queue over a growable circular buffer
//! - [`call_stack`]: [`CallStack`], a front-only deque of methods that reports
//!   every push and pop to a [`SimulationSink`](crate::events::SimulationSink)
//!
//! Both implement the [`Deque`] trait. Peeks and removals on an empty container
//! return [`DequeError::Empty`]; the call stack rejects every back-side operation
//! with [`DequeError::Unsupported`].

pub mod call_stack;
pub mod ring;

pub use call_stack::CallStack;
pub use ring::RingDeque;

use thiserror::Error;

/// Errors raised by [`Deque`] operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// Peek or remove on a container holding no elements
    #[error("cannot {operation} on an empty deque")]
    Empty { operation: &'static str },

    /// Operation the container does not permit at all
    #[error("{operation} is not supported on a call stack")]
    Unsupported { operation: &'static str },
}

/// Double-ended queue contract
pub trait Deque<T> {
    /// Add an item to the front
    fn add_front(&mut self, item: T) -> Result<(), DequeError>;

    /// Remove and return the front item
    fn remove_front(&mut self) -> Result<T, DequeError>;

    /// Add an item to the back
    fn add_back(&mut self, item: T) -> Result<(), DequeError>;

    /// Remove and return the back item
    fn remove_back(&mut self) -> Result<T, DequeError>;

    /// Borrow the front item without removing it
    fn peek_front(&self) -> Result<&T, DequeError>;

    /// Mutably borrow the front item without removing it
    fn peek_front_mut(&mut self) -> Result<&mut T, DequeError>;

    /// Borrow the back item without removing it
    fn peek_back(&self) -> Result<&T, DequeError>;

    fn is_empty(&self) -> bool;

    fn is_full(&self) -> bool;

    /// Remove every item. Capacity is kept.
    fn clear(&mut self);
}
