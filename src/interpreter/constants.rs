// Constants for the method interpreter

/// Size of a method with an empty body, in virtual bytes
pub const METHOD_BASE_SIZE: usize = 16;

/// Size added to a method for every body line
pub const METHOD_LINE_SIZE: usize = 4;

/// Initial slot count of a [`RingDeque`](crate::collections::RingDeque)
pub const DEFAULT_DEQUE_CAPACITY: usize = 10;

/// Events retained by a default [`EventLog`](crate::events::EventLog)
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Step cap used when running a program to completion
pub const DEFAULT_MAX_STEPS: usize = 10_000;
