//! Write buffer for helpful / not helpful votes on reviews.
//!
//! Votes accumulate per review and leave in batches, either when the batch
//! is full, when the flush delay since the first pending vote has passed, or
//! when the buffer is dropped.

use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::Instant;

use crate::types::domain::ThumbsDelta;
use crate::types::{ReviewId, ReviewsConfig};

/// Pending votes keyed by review.
pub type VoteBatch = BTreeMap<ReviewId, ThumbsDelta>;

/// Receiver of flushed batches.
///
/// Delivery is fire-and-forget: implementations must not block and have no
/// way to report failure back to the buffer.
pub trait VoteSink: Send + Sync {
    fn deliver(&self, batch: VoteBatch);
}

/// What `record_vote` did to the pending entry of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded,
    /// Same direction voted twice; the pending vote was withdrawn.
    Cancelled,
    /// Opposite direction; the pending vote was overwritten.
    Replaced,
}

pub struct ThumbsBuffer<S: VoteSink> {
    pending: VoteBatch,
    max_batch: usize,
    flush_delay: Duration,
    deadline: Option<Instant>,
    sink: S,
}

impl<S: VoteSink> ThumbsBuffer<S> {
    pub fn new(sink: S, config: &ReviewsConfig) -> Self {
        Self {
            pending: BTreeMap::new(),
            max_batch: config.max_thumbs.max(1),
            flush_delay: config.thumbs_flush_delay(),
            deadline: None,
            sink,
        }
    }

    pub fn record_vote(&mut self, review: ReviewId, delta: ThumbsDelta) -> VoteOutcome {
        let outcome = match self.pending.get(&review) {
            Some(&pending) if pending == delta => {
                self.pending.remove(&review);
                VoteOutcome::Cancelled
            }
            Some(_) => {
                self.pending.insert(review, delta);
                VoteOutcome::Replaced
            }
            None => {
                self.pending.insert(review, delta);
                VoteOutcome::Recorded
            }
        };

        if self.pending.is_empty() {
            self.deadline = None;
        } else if self.deadline.is_none() {
            self.deadline = Some(Instant::now() + self.flush_delay);
        }

        if self.pending.len() >= self.max_batch {
            self.flush();
        }

        outcome
    }

    pub fn pending_vote(&self, review: &ReviewId) -> Option<ThumbsDelta> {
        self.pending.get(review).copied()
    }

    pub fn pending(&self) -> &VoteBatch {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Hands every pending vote to the sink and empties the buffer.
    /// No-op when nothing is pending.
    pub fn flush(&mut self) {
        self.deadline = None;
        if self.pending.is_empty() {
            return;
        }

        let batch = std::mem::take(&mut self.pending);
        tracing::debug!("flushing {} thumbs votes", batch.len());
        self.sink.deliver(batch);
    }

    /// Flushes if the flush delay since the first pending vote has passed.
    /// Returns whether a batch was delivered.
    pub fn poll_flush(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline && !self.pending.is_empty() => {
                self.flush();
                true
            }
            _ => false,
        }
    }

    /// Drops pending votes without delivering them.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.deadline = None;
    }
}

impl<S: VoteSink> Drop for ThumbsBuffer<S> {
    fn drop(&mut self) {
        self.flush();
    }
}
