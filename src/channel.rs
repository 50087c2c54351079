//! Portable bounded update queue for `no_std` environments.
//!
//! Carries pixel updates from transport callbacks to the render tick.
//! Built on `critical-section` and `heapless::Deque`, so it is safe to
//! push from interrupt context.
//!
//! Overflow is lossy toward the oldest entry: pixel updates are absolute
//! writes, so when the queue is full the stalest update is evicted to
//! admit the newest.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// A bounded, thread-safe queue with newest-wins overflow.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Get a receiver handle for this queue.
    ///
    /// Typically only one receiver drains the queue.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Push a value, evicting the oldest entry if the queue is full.
    ///
    /// Returns the evicted value, if any.
    pub fn send(&self, value: T) -> Option<T> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let evicted = if queue.is_full() {
                queue.pop_front()
            } else {
                None
            };
            // Cannot fail: a slot was just freed if the queue was full.
            let _ = queue.push_back(value);
            evicted
        })
    }

    /// Pop the oldest value, or `None` if the queue is empty.
    pub fn receive(&self) -> Option<T> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Channel`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Push a value, evicting the oldest entry if the queue is full.
    ///
    /// Returns the evicted value, if any.
    pub fn send(&self, value: T) -> Option<T> {
        self.channel.send(value)
    }
}

/// A receiver handle for a [`Channel`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// Pop the oldest value, or `None` if the queue is empty.
    pub fn receive(&self) -> Option<T> {
        self.channel.receive()
    }
}
