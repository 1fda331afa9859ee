use thiserror::Error;

/// Failures reported by [`RingBuffer`](crate::RingBuffer).
///
/// Every variant is recoverable: a failed call leaves the buffer exactly as
/// it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("queue is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("queue is empty")]
    QueueEmpty,
    #[error("queue capacity must be at least 1")]
    ZeroCapacity,
}

pub type Result<T> = std::result::Result<T, QueueError>;
