#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A single-item request found nothing at `offset`.
    #[error("no item available at offset {offset}")]
    NotAvailable { offset: usize },
    /// A batch request could only be partially satisfied.
    #[error("requested {requested} items, but only {available} available")]
    InsufficientItems { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
