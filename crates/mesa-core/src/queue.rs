//! # Order Queue
//!
//! A strict first-in-first-out queue of pending orders.
//!
//! No priority, cancellation, or reordering semantics: orders leave the
//! queue in exactly the sequence they entered it, and draining an empty
//! queue is a normal `None`, not an error.
//!
//! Single-threaded by design. A caller that needs concurrent producers and
//! consumers wraps the manager in a mutex; nothing here shares state.

use std::collections::VecDeque;

use crate::order::Order;

/// FIFO queue of pending orders.
///
/// ## Invariants
/// - Dequeue order equals enqueue order (strict FIFO)
/// - `len()` equals enqueues minus dequeues at all times
#[derive(Debug, Default)]
pub struct OrderManager {
    orders: VecDeque<Order>,
}

impl OrderManager {
    /// Creates an empty queue.
    pub fn new() -> Self {
        OrderManager {
            orders: VecDeque::new(),
        }
    }

    /// Appends an order to the tail of the queue. Always succeeds.
    pub fn enqueue(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    /// Removes and returns the oldest order, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    /// Current number of queued orders.
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
