use std::fmt;

use crate::error::{QueueError, Result};

/// Fixed-capacity FIFO queue over a preallocated circular buffer.
///
/// All storage is allocated in [`RingBuffer::new`]; enqueue and dequeue only
/// move cursors. A dequeued slot keeps its old value until a later enqueue
/// cycles back to it.
///
/// Not synchronized. Wrap it in a lock if it has to be shared.
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    /// Next slot to write.
    write: usize,
    /// Next slot to read (oldest live element).
    read: usize,
    len: usize,
}

impl<T: Clone> RingBuffer<T> {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        let slots = std::iter::repeat_with(|| None).take(capacity).collect();
        log::trace!("ring buffer allocated with {} slots", capacity);
        Ok(Self { slots, write: 0, read: 0, len: 0 })
    }

    /// Append `value` at the back. Returns the stored value on success.
    ///
    /// When the buffer is full the value is dropped and nothing changes.
    pub fn enqueue(&mut self, value: T) -> Result<T> {
        if self.is_full() {
            log::debug!("enqueue rejected: {} of {} slots used", self.len, self.capacity());
            return Err(QueueError::CapacityExceeded { capacity: self.capacity() });
        }
        self.slots[self.write] = Some(value.clone());
        self.len += 1;
        self.write = self.wrap(self.write as isize + 1);
        Ok(value)
    }

    /// Remove and return the oldest element.
    pub fn dequeue(&mut self) -> Result<T> {
        let value = match self.oldest() {
            Ok(v) => v.clone(),
            Err(e) => {
                log::debug!("dequeue rejected: queue is empty");
                return Err(e);
            }
        };
        self.read = self.wrap(self.read as isize + 1);
        self.len -= 1;
        Ok(value)
    }

    /// The oldest element, i.e. the one the next [`dequeue`](Self::dequeue)
    /// returns. Fails with [`QueueError::QueueEmpty`] instead of exposing a
    /// stale slot.
    pub fn peek(&self) -> Result<&T> {
        self.oldest()
    }

    /// Alias of [`peek`](Self::peek).
    pub fn front(&self) -> Result<&T> {
        self.oldest()
    }

    /// The most recently enqueued element.
    pub fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(QueueError::QueueEmpty);
        }
        let idx = self.wrap(self.write as isize - 1);
        self.slots[idx].as_ref().ok_or(QueueError::QueueEmpty)
    }
}

impl<T> RingBuffer<T> {
    pub fn capacity(&self) -> usize { self.slots.len() }
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }
    pub fn is_full(&self) -> bool { self.len == self.slots.len() }

    /// Iterate live elements from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| {
            self.slots[self.wrap(self.read as isize + i as isize)].as_ref()
        })
    }

    fn oldest(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(QueueError::QueueEmpty);
        }
        self.slots[self.read].as_ref().ok_or(QueueError::QueueEmpty)
    }

    /// Reduce a raw cursor position into `[0, capacity)`. `n` may be
    /// negative (one step below zero) or equal to the capacity.
    fn wrap(&self, n: isize) -> usize {
        n.rem_euclid(self.slots.len() as isize) as usize
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(cap: usize, values: &[i32]) -> RingBuffer<i32> {
        let mut rb = RingBuffer::new(cap).unwrap();
        for &v in values {
            rb.enqueue(v).unwrap();
        }
        rb
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(RingBuffer::<i32>::new(0).unwrap_err(), QueueError::ZeroCapacity);
    }

    #[test]
    fn enqueue_returns_stored_value() {
        let mut rb = RingBuffer::new(2).unwrap();
        assert_eq!(rb.enqueue("a".to_string()).unwrap(), "a");
        assert_eq!(rb.len(), 1);
    }

    #[test]
    fn full_buffer_rejects_without_mutation() {
        let mut rb = filled(3, &[1, 2, 3]);
        assert!(rb.is_full());
        assert_eq!(rb.enqueue(4), Err(QueueError::CapacityExceeded { capacity: 3 }));
        assert_eq!(rb.len(), 3);
        assert_eq!(rb.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(*rb.back().unwrap(), 3);
    }

    #[test]
    fn dequeue_on_empty_fails() {
        let mut rb: RingBuffer<i32> = RingBuffer::new(1).unwrap();
        assert_eq!(rb.dequeue(), Err(QueueError::QueueEmpty));
        assert!(rb.is_empty());
    }

    #[test]
    fn front_is_oldest_back_is_newest() {
        let rb = filled(10, &[1, 2, 3]);
        assert_eq!(*rb.front().unwrap(), 1);
        assert_eq!(rb.peek(), rb.front());
        assert_eq!(*rb.back().unwrap(), 3);
    }

    #[test]
    fn reads_on_drained_buffer_fail_instead_of_returning_stale_slots() {
        let mut rb = filled(2, &[7, 8]);
        rb.dequeue().unwrap();
        rb.dequeue().unwrap();
        assert_eq!(rb.peek(), Err(QueueError::QueueEmpty));
        assert_eq!(rb.back(), Err(QueueError::QueueEmpty));
    }

    #[test]
    fn back_wraps_below_zero() {
        // write cursor returns to 0 once the buffer is full
        let rb = filled(3, &[1, 2, 3]);
        assert_eq!(rb.write, 0);
        assert_eq!(*rb.back().unwrap(), 3);
    }

    #[test]
    fn dequeue_leaves_slot_until_overwritten() {
        let mut rb = filled(2, &[5]);
        assert_eq!(rb.dequeue().unwrap(), 5);
        assert_eq!(rb.slots[0], Some(5));
        rb.enqueue(6).unwrap();
        rb.enqueue(7).unwrap();
        assert_eq!(rb.slots[0], Some(7));
    }

    #[test]
    fn cursors_wrap_across_many_cycles() {
        let mut rb = RingBuffer::new(3).unwrap();
        for round in 0..10 {
            rb.enqueue(round).unwrap();
            rb.enqueue(round + 100).unwrap();
            assert_eq!(rb.dequeue().unwrap(), round);
            assert_eq!(rb.dequeue().unwrap(), round + 100);
            assert!(rb.read < 3 && rb.write < 3);
        }
        assert_eq!(rb.capacity(), 3);
    }

    #[test]
    fn iter_follows_fifo_order_after_wrap() {
        let mut rb = filled(3, &[1, 2, 3]);
        rb.dequeue().unwrap();
        rb.enqueue(4).unwrap();
        assert_eq!(rb.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn debug_hides_stale_slots() {
        let mut rb = filled(3, &[1, 2]);
        rb.dequeue().unwrap();
        assert_eq!(format!("{:?}", rb), "RingBuffer { capacity: 3, len: 1, items: [2] }");
    }
}
