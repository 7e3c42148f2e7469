//! Iterators over a [`RingQueue`], oldest element first.

use std::iter::FusedIterator;

use super::ring::RingQueue;

/// Borrowing iterator returned by [`RingQueue::iter`].
pub struct Iter<'a, T, const MIN: usize> {
    queue: &'a RingQueue<T, MIN>,
    /// Next logical position to yield from the front.
    front: usize,
    /// One past the next logical position to yield from the back.
    back: usize,
}

impl<'a, T, const MIN: usize> Iter<'a, T, MIN> {
    pub(super) fn new(queue: &'a RingQueue<T, MIN>) -> Self {
        Self {
            queue,
            front: 0,
            back: queue.len(),
        }
    }
}

impl<'a, T, const MIN: usize> Iterator for Iter<'a, T, MIN> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let element = self.queue.get(self.front);
        self.front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, const MIN: usize> DoubleEndedIterator for Iter<'_, T, MIN> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.queue.get(self.back)
    }
}

impl<T, const MIN: usize> ExactSizeIterator for Iter<'_, T, MIN> {}

impl<T, const MIN: usize> FusedIterator for Iter<'_, T, MIN> {}

// Manual Clone: derive would require T: Clone.
impl<T, const MIN: usize> Clone for Iter<'_, T, MIN> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            front: self.front,
            back: self.back,
        }
    }
}

/// Owning iterator that dequeues until the queue is empty.
///
/// The buffer shrinks as elements leave, exactly as repeated
/// [`RingQueue::dequeue`] calls would.
pub struct IntoIter<T, const MIN: usize> {
    queue: RingQueue<T, MIN>,
}

impl<T, const MIN: usize> IntoIter<T, MIN> {
    pub(super) const fn new(queue: RingQueue<T, MIN>) -> Self {
        Self { queue }
    }
}

impl<T, const MIN: usize> Iterator for IntoIter<T, MIN> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len();
        (remaining, Some(remaining))
    }
}

impl<T, const MIN: usize> ExactSizeIterator for IntoIter<T, MIN> {}

impl<T, const MIN: usize> FusedIterator for IntoIter<T, MIN> {}
