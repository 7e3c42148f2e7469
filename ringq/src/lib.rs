//! Unbounded FIFO queue over a growable ring buffer.
//!
//! ```
//! use ringq::RingQueue;
//!
//! let mut queue = RingQueue::new();
//! for i in 1..=9 {
//!     queue.enqueue(i);
//! }
//! assert_eq!(queue.capacity(), 16);
//!
//! while let Ok(value) = queue.dequeue() {
//!     println!("{value}");
//! }
//! assert!(queue.is_empty());
//! ```

pub mod queue;

mod error;
mod trace;

#[doc(inline)]
pub use error::EmptyQueue;

#[doc(inline)]
pub use queue::{MIN_CAPACITY, RingQueue};

pub use trace::init_tracing;
