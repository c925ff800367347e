/// Errors returned by [`Redwood`](crate::Redwood) operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError<T> {
    /// A structural precondition was violated, e.g. rotating two nodes that are not parent and
    /// child.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The value is already stored in the tree. The rejected value is handed back.
    #[error("the tree already contains that value")]
    DuplicateValue(T),
}

impl<T> TreeError<T> {
    /// Recovers the value rejected by an insertion, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            TreeError::DuplicateValue(value) => Some(value),
            TreeError::InvalidArgument(_) => None,
        }
    }
}
