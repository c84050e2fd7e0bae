use crate::circus::Order;

/// Errors raised by the podium and manager APIs.
///
/// `Empty`, `Full` and `Index` signal misuse of a [`crate::Podium`] by its
/// caller. The manager never triggers them: inapplicable orders are silent
/// no-ops there.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("podium is empty")]
    Empty,
    #[error("podium is full")]
    Full,
    #[error("index {index} outside podium of capacity {capacity}")]
    Index { index: usize, capacity: usize },
    #[error("order {order:?} rejected: {reason}")]
    Rejected { order: Order, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}
