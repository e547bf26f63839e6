use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrQueueError {
    /// `dequeue` or `peek` was called while `size() == 0`.
    #[error("priority queue is empty")]
    EmptyQueue,
}
