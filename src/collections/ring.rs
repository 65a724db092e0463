//! Circular-buffer deque
//!
//! [`RingDeque`] stores its elements in a fixed-size slot array addressed
//! modulo the capacity. `front_index` and `back_index` point at the current
//! front and back elements. One slot is always left unused so that the two
//! boundary states can be told apart from the indices alone:
//!
//! ```text
//! empty:  front == (back + 1) % capacity
//! full:   front == (back + 2) % capacity
//! ```
//!
//! An insert into a full deque first doubles the capacity, copying the
//! `capacity - 1` live elements (everything except the unused slot) to the
//! start of the new buffer in front-to-back order.

use super::{Deque, DequeError};
use crate::interpreter::constants::DEFAULT_DEQUE_CAPACITY;
use std::fmt;

/// Double-ended queue over a growable circular buffer
#[derive(Debug, Clone)]
pub struct RingDeque<T> {
    slots: Vec<Option<T>>,
    front_index: usize,
    back_index: usize,
}

impl<T> RingDeque<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_DEQUE_CAPACITY)
    }

    /// Create a deque with the given number of slots.
    ///
    /// One slot is reserved, so a capacity of `n` holds `n - 1` elements
    /// before the first resize. Capacities below 2 are raised to 2.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        RingDeque {
            slots,
            front_index: 0,
            back_index: capacity - 1,
        }
    }

    /// Number of slots in the backing buffer
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        let capacity = self.capacity();
        (self.back_index + 1 + capacity - self.front_index) % capacity
    }

    pub fn front_index(&self) -> usize {
        self.front_index
    }

    pub fn back_index(&self) -> usize {
        self.back_index
    }

    /// Iterate from front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.len()).filter_map(move |offset| {
            self.slots[(self.front_index + offset) % capacity].as_ref()
        })
    }

    /// Insert at the front, growing first if full. Never fails.
    pub fn push_front(&mut self, item: T) {
        self.ensure_capacity();
        self.front_index = self.step_backward(self.front_index);
        self.slots[self.front_index] = Some(item);
    }

    /// Insert at the back, growing first if full. Never fails.
    pub fn push_back(&mut self, item: T) {
        self.ensure_capacity();
        self.back_index = self.step_forward(self.back_index);
        self.slots[self.back_index] = Some(item);
    }

    fn step_forward(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    fn step_backward(&self, index: usize) -> usize {
        let capacity = self.capacity();
        (index + capacity - 1) % capacity
    }

    /// Double the capacity if the next insert would overwrite a live slot
    fn ensure_capacity(&mut self) {
        if !self.is_full() {
            return;
        }

        let old_capacity = self.capacity();
        let mut grown = Vec::with_capacity(old_capacity * 2);

        // The unused slot sits after the back element, so only
        // old_capacity - 1 slots hold data.
        let mut index = self.front_index;
        for _ in 0..old_capacity - 1 {
            grown.push(self.slots[index].take());
            index = (index + 1) % old_capacity;
        }
        grown.resize_with(old_capacity * 2, || None);

        self.slots = grown;
        self.front_index = 0;
        self.back_index = old_capacity - 2;
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> for RingDeque<T> {
    fn add_front(&mut self, item: T) -> Result<(), DequeError> {
        self.push_front(item);
        Ok(())
    }

    fn remove_front(&mut self) -> Result<T, DequeError> {
        const OPERATION: &str = "remove_front";
        if self.is_empty() {
            return Err(DequeError::Empty { operation: OPERATION });
        }
        let item = self.slots[self.front_index]
            .take()
            .ok_or(DequeError::Empty { operation: OPERATION })?;
        self.front_index = self.step_forward(self.front_index);
        Ok(item)
    }

    fn add_back(&mut self, item: T) -> Result<(), DequeError> {
        self.push_back(item);
        Ok(())
    }

    fn remove_back(&mut self) -> Result<T, DequeError> {
        const OPERATION: &str = "remove_back";
        if self.is_empty() {
            return Err(DequeError::Empty { operation: OPERATION });
        }
        let item = self.slots[self.back_index]
            .take()
            .ok_or(DequeError::Empty { operation: OPERATION })?;
        self.back_index = self.step_backward(self.back_index);
        Ok(item)
    }

    fn peek_front(&self) -> Result<&T, DequeError> {
        const OPERATION: &str = "peek_front";
        if self.is_empty() {
            return Err(DequeError::Empty { operation: OPERATION });
        }
        self.slots[self.front_index]
            .as_ref()
            .ok_or(DequeError::Empty { operation: OPERATION })
    }

    fn peek_front_mut(&mut self) -> Result<&mut T, DequeError> {
        const OPERATION: &str = "peek_front";
        if self.is_empty() {
            return Err(DequeError::Empty { operation: OPERATION });
        }
        self.slots[self.front_index]
            .as_mut()
            .ok_or(DequeError::Empty { operation: OPERATION })
    }

    fn peek_back(&self) -> Result<&T, DequeError> {
        const OPERATION: &str = "peek_back";
        if self.is_empty() {
            return Err(DequeError::Empty { operation: OPERATION });
        }
        self.slots[self.back_index]
            .as_ref()
            .ok_or(DequeError::Empty { operation: OPERATION })
    }

    fn is_empty(&self) -> bool {
        self.front_index == (self.back_index + 1) % self.capacity()
    }

    fn is_full(&self) -> bool {
        self.front_index == (self.back_index + 2) % self.capacity()
    }

    fn clear(&mut self) {
        self.front_index = 0;
        self.back_index = self.capacity() - 1;
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

impl<T: fmt::Display> fmt::Display for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "front_index: {}, back_index: {}, ",
            self.front_index, self.back_index
        )?;
        if self.is_empty() {
            return write!(f, "empty");
        }
        write!(f, "elements: ")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_deque_is_empty() {
        let deque: RingDeque<i32> = RingDeque::new();
        assert!(deque.is_empty());
        assert!(!deque.is_full());
        assert_eq!(deque.len(), 0);
        assert_eq!(deque.capacity(), DEFAULT_DEQUE_CAPACITY);
    }

    #[test]
    fn test_full_before_growth() {
        let mut deque = RingDeque::with_capacity(4);
        for i in 0..3 {
            deque.add_back(i).unwrap();
        }
        assert!(deque.is_full());
        assert_eq!(deque.capacity(), 4);

        // The next insert grows first, then stores the item
        deque.add_back(3).unwrap();
        assert_eq!(deque.capacity(), 8);
        assert_eq!(deque.front_index(), 0);
        assert_eq!(deque.back_index(), 3);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_growth_from_wrapped_layout() {
        let mut deque = RingDeque::with_capacity(4);
        deque.add_back(1).unwrap();
        deque.add_front(0).unwrap();
        deque.add_back(2).unwrap();
        // front index wrapped to the end of the buffer
        assert_eq!(deque.front_index(), 3);
        assert!(deque.is_full());

        deque.add_front(-1).unwrap();
        assert_eq!(deque.capacity(), 8);
        assert_eq!(
            deque.iter().copied().collect::<Vec<_>>(),
            vec![-1, 0, 1, 2]
        );
    }

    #[test]
    fn test_tiny_capacity_is_raised() {
        let mut deque = RingDeque::with_capacity(0);
        assert_eq!(deque.capacity(), 2);
        deque.add_front('a').unwrap();
        deque.add_front('b').unwrap();
        assert_eq!(deque.remove_back(), Ok('a'));
        assert_eq!(deque.remove_back(), Ok('b'));
    }

    #[test]
    fn test_empty_errors_name_operation() {
        let mut deque: RingDeque<u8> = RingDeque::new();
        assert_eq!(
            deque.peek_front(),
            Err(DequeError::Empty {
                operation: "peek_front"
            })
        );
        assert_eq!(
            deque.remove_back().unwrap_err().to_string(),
            "cannot remove_back on an empty deque"
        );
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut deque = RingDeque::with_capacity(2);
        for i in 0..5 {
            deque.add_front(i).unwrap();
        }
        let capacity = deque.capacity();
        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.capacity(), capacity);
        deque.clear();
        assert!(deque.is_empty());
    }

    #[test]
    fn test_display() {
        let mut deque = RingDeque::with_capacity(4);
        assert_eq!(
            deque.to_string(),
            "front_index: 0, back_index: 3, empty"
        );
        deque.add_back(7).unwrap();
        deque.add_front(6).unwrap();
        assert_eq!(
            deque.to_string(),
            "front_index: 3, back_index: 0, elements: 6, 7"
        );
    }

    #[test]
    fn test_push_helpers_grow_like_trait_inserts() {
        let mut deque = RingDeque::with_capacity(2);
        deque.push_back(1);
        deque.push_front(0);
        deque.push_back(2);
        assert_eq!(deque.capacity(), 4);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(deque.peek_back(), Ok(&2));
    }
}
