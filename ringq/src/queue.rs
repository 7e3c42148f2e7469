//! Growable ring-buffer queue primitives.
//!
//! [`RingQueue`] is a plain single-owner FIFO. It is the storage an unbounded
//! channel keeps behind its lock; it does no synchronization of its own.

mod iter;
mod ring;

pub use iter::{IntoIter, Iter};
pub use ring::{MIN_CAPACITY, RingQueue};
