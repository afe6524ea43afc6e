//! Error type for [`StepHashTable`](crate::StepHashTable) operations.

use std::{error::Error, fmt};

/// Errors raised by table operations.
///
/// Every error is local to the operation that raised it; the table remains
/// internally consistent afterwards and can keep serving requests, except
/// that a table reporting [`TableError::CapacityExhausted`] can no longer
/// grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The key is not present in the table.
    KeyNotFound,
    /// One full probe walk found no free slot for the insert.
    ///
    /// Eager resizing at two-thirds load keeps this out of normal operation;
    /// it can still surface once the largest configured capacity has filled
    /// completely.
    TableFull,
    /// The size table holds no larger capacity to grow into.
    ///
    /// Fatal for growth: the table keeps its current contents and stays
    /// readable, but cannot accept enough further inserts to cross the load
    /// threshold again.
    CapacityExhausted,
    /// Keys must contain at least one character to be hashed.
    EmptyKey,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyNotFound => write!(f, "key not found"),
            Self::TableFull => write!(f, "hash table is full"),
            Self::CapacityExhausted => write!(f, "maximum table size reached"),
            Self::EmptyKey => write!(f, "key must not be empty"),
        }
    }
}

impl Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(TableError::KeyNotFound.to_string(), "key not found");
        assert_eq!(TableError::TableFull.to_string(), "hash table is full");
        assert_eq!(TableError::CapacityExhausted.to_string(), "maximum table size reached");
        assert_eq!(TableError::EmptyKey.to_string(), "key must not be empty");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: Error>(_: &E) {}
        assert_error(&TableError::KeyNotFound);
    }
}
