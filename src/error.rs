//! Error types for indexed list operations.

use thiserror::Error;

/// Errors returned by the index-addressed operations of a [`List`].
///
/// Lookups by value never fail: [`List::find`] reports a missing value by
/// returning [`List::size`], and [`List::remove`] returns `None`.
///
/// [`List`]: crate::List
/// [`List::find`]: crate::List::find
/// [`List::size`]: crate::List::size
/// [`List::remove`]: crate::List::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The index does not address a valid position for the operation.
    #[error("index {index} is out of range, expected an index below {bound}")]
    OutOfRange {
        /// The rejected index
        index: usize,
        /// The exclusive upper bound for the index: the length of the list
        /// for `remove_at` and `get`, one past it for `add`
        bound: usize,
    },
}

impl ListError {
    /// Returns `true` if this is an [`ListError::OutOfRange`] error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ListError::OutOfRange { .. })
    }
}
