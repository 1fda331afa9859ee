//! Fixed-capacity bounded FIFO queue over a preallocated circular buffer.
//!
//! ```
//! use boundq::{QueueError, RingBuffer};
//!
//! let mut q = RingBuffer::new(2)?;
//! q.enqueue(1)?;
//! q.enqueue(2)?;
//! assert_eq!(q.enqueue(3), Err(QueueError::CapacityExceeded { capacity: 2 }));
//! assert_eq!(q.dequeue()?, 1);
//! # Ok::<(), QueueError>(())
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod ring_buffer;
pub mod scenarios;

pub use error::{QueueError, Result};
pub use ring_buffer::RingBuffer;
