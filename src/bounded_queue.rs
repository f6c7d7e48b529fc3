use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection raised by a [`BoundedQueue`] operation.
///
/// Each variant carries the fixed tag of the operation that produced it
/// (`"BoundedQueue.constructor"`, `"BoundedQueue.enQueue"` or
/// `"BoundedQueue.deQueue"`), so callers can match on both kind and origin.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundedQueueError {
    /// Construction was attempted with a capacity of zero.
    #[error("{0}")]
    InvalidArgument(&'static str),
    /// An absent value was passed to enqueue.
    #[error("{0}")]
    NullValue(&'static str),
    /// Enqueue on a full queue, or dequeue on an empty one.
    #[error("{0}")]
    InvalidState(&'static str),
}

impl BoundedQueueError {
    /// Returns the tag of the operation that failed.
    pub fn tag(&self) -> &'static str {
        match self {
            BoundedQueueError::InvalidArgument(tag)
            | BoundedQueueError::NullValue(tag)
            | BoundedQueueError::InvalidState(tag) => tag,
        }
    }
}

/// A fixed-capacity FIFO queue that rejects overflow instead of evicting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawBoundedQueue<T>")]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

/// Unvalidated wire shape of a [`BoundedQueue`]; deserialization goes
/// through [`TryFrom`] so decoded queues satisfy the same invariants as
/// constructed ones.
#[derive(Deserialize)]
struct RawBoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> TryFrom<RawBoundedQueue<T>> for BoundedQueue<T> {
    type Error = BoundedQueueError;

    fn try_from(raw: RawBoundedQueue<T>) -> Result<Self, Self::Error> {
        if raw.capacity == 0 || raw.items.len() > raw.capacity {
            return Err(BoundedQueueError::InvalidArgument(
                "BoundedQueue.constructor",
            ));
        }
        Ok(BoundedQueue {
            items: raw.items,
            capacity: raw.capacity,
        })
    }
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    /// Returns Err if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, BoundedQueueError> {
        if capacity == 0 {
            return Err(BoundedQueueError::InvalidArgument(
                "BoundedQueue.constructor",
            ));
        }
        Ok(BoundedQueue {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Appends a value to the back of the queue.
    /// Returns Err on an absent value or a full queue; the absence check
    /// comes first, so `None` on a full queue still reports `NullValue`.
    pub fn enqueue(&mut self, value: Option<T>) -> Result<(), BoundedQueueError> {
        let value = value.ok_or(BoundedQueueError::NullValue("BoundedQueue.enQueue"))?;
        if self.items.len() == self.capacity {
            return Err(BoundedQueueError::InvalidState("BoundedQueue.enQueue"));
        }
        self.items.push_back(value);
        Ok(())
    }

    /// Removes and returns the front element.
    /// Returns Err if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, BoundedQueueError> {
        self.items
            .pop_front()
            .ok_or(BoundedQueueError::InvalidState("BoundedQueue.deQueue"))
    }

    /// Returns true if the queue is at capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Returns true if the queue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the fixed capacity of the queue.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: fmt::Display> fmt::Display for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
