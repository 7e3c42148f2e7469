//! Growable ring buffer with doubling growth and hysteresis shrink.
//!
//! The buffer length is always `MIN * 2^k`. It doubles when an enqueue finds
//! every slot occupied and halves once a dequeue leaves it at most a quarter
//! full. Shrinking lands at half occupancy, so a queue hovering around one
//! size never thrashes between two allocations.
//!
//! A slot holds `Some` exactly when it lies in the occupied region, the
//! circular span of `count` slots starting at `head`.

use std::fmt;

use super::iter::{IntoIter, Iter};
use crate::error::EmptyQueue;
use crate::trace::{debug, trace};

/// Default floor for the buffer length.
pub const MIN_CAPACITY: usize = 8;

struct CapacityCheck<const MIN: usize>;

impl<const MIN: usize> CapacityCheck<MIN> {
    /// Compile-time assertion that the minimum capacity is non-zero.
    const OK: () = assert!(MIN > 0, "Minimum queue capacity must be greater than 0");
}

/// Allocates `capacity` empty slots.
fn allocate<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

/// Unbounded FIFO queue over a growable ring buffer.
///
/// `MIN` is the smallest buffer length the queue ever holds; it must be
/// greater than zero. The queue performs no synchronization: every mutation
/// takes `&mut self`, so sharing it between threads needs an outer lock.
///
/// # Example
///
/// ```
/// use ringq::RingQueue;
///
/// let mut queue = RingQueue::new();
/// queue.enqueue("first");
/// queue.enqueue("second");
///
/// assert_eq!(queue.peek(), Ok(&"first"));
/// assert_eq!(queue.dequeue(), Ok("first"));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone)]
pub struct RingQueue<T, const MIN: usize = MIN_CAPACITY> {
    buffer: Box<[Option<T>]>,
    /// Index of the oldest element; meaningless while `count == 0`.
    head: usize,
    /// Index of the next slot `enqueue` writes to.
    tail: usize,
    count: usize,
}

impl<T> RingQueue<T> {
    /// Creates an empty queue with the default minimum capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_min_capacity()
    }
}

impl<T, const MIN: usize> RingQueue<T, MIN> {
    /// Creates an empty queue whose buffer never shrinks below `MIN` slots.
    ///
    /// # Panics
    ///
    /// Fails to compile if `MIN == 0`.
    ///
    /// ```
    /// use ringq::RingQueue;
    ///
    /// let queue = RingQueue::<u64, 4>::with_min_capacity();
    /// assert_eq!(queue.capacity(), 4);
    /// ```
    #[must_use]
    pub fn with_min_capacity() -> Self {
        let () = CapacityCheck::<MIN>::OK;

        Self {
            buffer: allocate(MIN),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Number of queued elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current buffer length in slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// The floor below which the buffer never shrinks.
    #[inline]
    #[must_use]
    pub const fn min_capacity(&self) -> usize {
        MIN
    }

    /// Advances a slot index by one, wrapping to 0 at the buffer length.
    ///
    /// Equivalent to `(index + 1) % capacity` without the division.
    #[inline]
    fn bump(&self, index: usize) -> usize {
        let next = index + 1;
        if next == self.buffer.len() { 0 } else { next }
    }

    /// Maps a logical position (0 = oldest) to a slot index.
    ///
    /// `offset` must be below `count`, which keeps `head + offset` under twice
    /// the buffer length.
    #[inline]
    fn slot(&self, offset: usize) -> usize {
        let index = self.head + offset;
        let capacity = self.buffer.len();
        if index >= capacity { index - capacity } else { index }
    }

    /// Appends an element at the tail, doubling the buffer first if it is full.
    pub fn enqueue(&mut self, element: T) {
        if self.count == self.buffer.len() {
            self.resize(self.count * 2);
        }

        self.buffer[self.tail] = Some(element);
        self.tail = self.bump(self.tail);
        self.count += 1;
    }

    /// Returns the oldest element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueue`] if there is nothing queued.
    #[inline]
    pub fn peek(&self) -> Result<&T, EmptyQueue> {
        // Slots outside the occupied region are always None, including the
        // head slot of an empty queue.
        self.buffer[self.head].as_ref().ok_or(EmptyQueue)
    }

    /// Mutable access to the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueue`] if there is nothing queued.
    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyQueue> {
        self.buffer[self.head].as_mut().ok_or(EmptyQueue)
    }

    /// Removes and returns the oldest element.
    ///
    /// Shrinks the buffer to `max(len * 2, MIN)` once it is at most a quarter
    /// full and still above `MIN`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueue`] if there is nothing queued; the queue is left
    /// untouched.
    pub fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        let element = self.buffer[self.head].take().ok_or(EmptyQueue)?;
        self.head = self.bump(self.head);
        self.count -= 1;

        let capacity = self.buffer.len();
        if capacity > MIN && self.count * 4 <= capacity {
            // An odd floor can put count * 2 below MIN.
            self.resize((self.count * 2).max(MIN));
        }

        Ok(element)
    }

    /// Returns the element `index` positions behind the head.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        self.buffer[self.slot(index)].as_ref()
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.count {
            return None;
        }
        let slot = self.slot(index);
        self.buffer[slot].as_mut()
    }

    /// Drops every element and returns the buffer to `MIN` slots.
    pub fn clear(&mut self) {
        debug!(len = self.count, capacity = self.buffer.len(), "clearing ring queue");
        self.buffer = allocate(MIN);
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Iterates from the oldest element to the newest.
    pub fn iter(&self) -> Iter<'_, T, MIN> {
        Iter::new(self)
    }

    /// Moves the occupied region, in logical order, to the start of a fresh
    /// buffer of exactly `capacity` slots.
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity > self.count, "resize target must leave a free slot");
        debug_assert!(capacity >= MIN, "resize target below minimum capacity");

        trace!(
            from = self.buffer.len(),
            to = capacity,
            len = self.count,
            "resizing ring queue"
        );

        let mut resized = allocate(capacity);

        // Logical order is head..end followed by 0..tail when the region
        // wraps; taking `count` slots covers the contiguous case too.
        let (wrapped, from_head) = self.buffer.split_at_mut(self.head);
        let occupied = from_head
            .iter_mut()
            .chain(wrapped.iter_mut())
            .take(self.count);
        for (dst, src) in resized.iter_mut().zip(occupied) {
            *dst = src.take();
        }

        self.buffer = resized;
        self.head = 0;
        self.tail = self.count;
    }
}

impl<T, const MIN: usize> Default for RingQueue<T, MIN> {
    fn default() -> Self {
        Self::with_min_capacity()
    }
}

impl<T: fmt::Debug, const MIN: usize> fmt::Debug for RingQueue<T, MIN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Queues compare by contents in FIFO order; buffer layout is ignored.
impl<T: PartialEq, const MIN: usize> PartialEq for RingQueue<T, MIN> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const MIN: usize> Eq for RingQueue<T, MIN> {}

impl<T, const MIN: usize> Extend<T> for RingQueue<T, MIN> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<T, const MIN: usize> FromIterator<T> for RingQueue<T, MIN> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::with_min_capacity();
        queue.extend(iter);
        queue
    }
}

impl<T, const MIN: usize> IntoIterator for RingQueue<T, MIN> {
    type Item = T;
    type IntoIter = IntoIter<T, MIN>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, const MIN: usize> IntoIterator for &'a RingQueue<T, MIN> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, MIN>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
