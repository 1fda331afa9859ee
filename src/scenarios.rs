use serde::Serialize;

use crate::error::{QueueError, Result};
use crate::ring_buffer::RingBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Passed => "PASS",
            Verdict::Failed => "FAIL",
        }
    }

    fn from_bool(ok: bool) -> Self {
        if ok { Verdict::Passed } else { Verdict::Failed }
    }
}

/// Result of one self-check against a fresh queue.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub id:      u8,
    pub name:    &'static str,
    pub verdict: Verdict,
    /// What was observed, including the error text when a call was rejected.
    pub detail:  String,
}

impl Outcome {
    fn new(id: u8, name: &'static str, ok: bool, detail: String) -> Self {
        Self { id, name, verdict: Verdict::from_bool(ok), detail }
    }

    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

/// Run every check against queues of `capacity` slots, in order.
///
/// An `Err` means the queue misbehaved outside what a check expects
/// (e.g. an enqueue below capacity was rejected).
pub fn run_all(capacity: usize) -> Result<Vec<Outcome>> {
    Ok(vec![
        capacity_bound(capacity)?,
        drain_bound(capacity)?,
        fresh_dequeue(capacity)?,
        front_is_oldest(capacity)?,
        back_is_newest(capacity)?,
        wrap_around(capacity)?,
    ])
}

fn fill(rb: &mut RingBuffer<i64>, values: impl IntoIterator<Item = i64>) -> Result<()> {
    for v in values {
        rb.enqueue(v)?;
    }
    Ok(())
}

fn capacity_bound(capacity: usize) -> Result<Outcome> {
    let mut rb = RingBuffer::new(capacity)?;
    fill(&mut rb, 0..capacity as i64)?;
    let before: Vec<i64> = rb.iter().copied().collect();

    let (ok, detail) = match rb.enqueue(capacity as i64 + 1) {
        Err(e @ QueueError::CapacityExceeded { .. }) => {
            let unchanged = rb.iter().copied().eq(before.iter().copied());
            (unchanged, format!("enqueue on a full queue fails: {}", e))
        }
        Err(e) => (false, format!("enqueue on a full queue failed with the wrong error: {}", e)),
        Ok(_)  => (false, "enqueue succeeded when queue was full".to_string()),
    };
    Ok(Outcome::new(1, "capacity bound", ok, detail))
}

fn drain_bound(capacity: usize) -> Result<Outcome> {
    let mut rb = RingBuffer::new(capacity)?;
    fill(&mut rb, 0..capacity as i64)?;
    for _ in 0..capacity {
        rb.dequeue()?;
    }

    let (ok, detail) = match rb.dequeue() {
        Err(e @ QueueError::QueueEmpty) => (true, format!("dequeue on a drained queue fails: {}", e)),
        Err(e) => (false, format!("dequeue on a drained queue failed with the wrong error: {}", e)),
        Ok(v)  => (false, format!("dequeue succeeded on a drained queue and returned {}", v)),
    };
    Ok(Outcome::new(2, "empty-drain bound", ok, detail))
}

fn fresh_dequeue(capacity: usize) -> Result<Outcome> {
    let mut rb: RingBuffer<i64> = RingBuffer::new(capacity)?;
    let (ok, detail) = match rb.dequeue() {
        Err(e @ QueueError::QueueEmpty) => (true, format!("dequeue on a new queue fails: {}", e)),
        Err(e) => (false, format!("dequeue on a new queue failed with the wrong error: {}", e)),
        Ok(v)  => (false, format!("dequeue on a new queue returned {}", v)),
    };
    Ok(Outcome::new(3, "fresh-empty dequeue", ok, detail))
}

/// Enqueue 1, 2, 3 (or as many as fit) into a fresh queue.
fn one_two_three(capacity: usize) -> Result<(RingBuffer<i64>, Vec<i64>)> {
    let mut rb = RingBuffer::new(capacity)?;
    let values: Vec<i64> = (1..=3).take(capacity).collect();
    fill(&mut rb, values.iter().copied())?;
    Ok((rb, values))
}

fn front_is_oldest(capacity: usize) -> Result<Outcome> {
    let (rb, values) = one_two_three(capacity)?;
    let oldest = values[0];
    let front = *rb.front()?;
    let peek = *rb.peek()?;
    let ok = front == oldest && peek == front;
    let detail = format!("front = {}, peek = {}, oldest enqueued = {}", front, peek, oldest);
    Ok(Outcome::new(4, "front returns oldest", ok, detail))
}

fn back_is_newest(capacity: usize) -> Result<Outcome> {
    let (rb, values) = one_two_three(capacity)?;
    let newest = values[values.len() - 1];
    let back = *rb.back()?;
    let detail = format!("back = {}, newest enqueued = {}", back, newest);
    Ok(Outcome::new(5, "back returns newest", back == newest, detail))
}

fn wrap_around(capacity: usize) -> Result<Outcome> {
    let mut rb = RingBuffer::new(capacity)?;
    let n = capacity as i64;
    fill(&mut rb, 0..n)?;
    for _ in 0..capacity {
        rb.dequeue()?;
    }
    fill(&mut rb, n..2 * n)?;
    let mut second = Vec::with_capacity(capacity);
    for _ in 0..capacity {
        second.push(rb.dequeue()?);
    }
    let ok = second.iter().copied().eq(n..2 * n) && rb.capacity() == capacity;
    let detail = format!("second batch dequeued {} value(s) in order: {}", second.len(), ok);
    Ok(Outcome::new(6, "wrap-around reuse", ok, detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_checks_pass_for_assorted_capacities() {
        for cap in [1, 2, 3, 10, 64] {
            let outcomes = run_all(cap).unwrap();
            assert_eq!(outcomes.len(), 6);
            for o in &outcomes {
                assert!(o.passed(), "capacity {}: check {} failed: {}", cap, o.name, o.detail);
            }
        }
    }

    #[test]
    fn outcomes_are_numbered_in_order() {
        let ids: Vec<u8> = run_all(4).unwrap().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn details_carry_error_text() {
        let outcomes = run_all(2).unwrap();
        assert!(outcomes[0].detail.contains("queue is full (capacity 2)"));
        assert!(outcomes[1].detail.contains("queue is empty"));
    }

    #[test]
    fn zero_capacity_is_an_error() {
        assert!(matches!(run_all(0), Err(QueueError::ZeroCapacity)));
    }
}
