use thiserror::Error;

/// Returned by [`RingQueue::peek`](crate::RingQueue::peek) and
/// [`RingQueue::dequeue`](crate::RingQueue::dequeue) when there is no head
/// element.
///
/// This is a caller bug rather than a runtime condition: check
/// [`RingQueue::is_empty`](crate::RingQueue::is_empty) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue is empty")]
pub struct EmptyQueue;
