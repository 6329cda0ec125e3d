//! Errors reported by trie operations.
//!
//! Absent keys are an ordinary outcome for almost every operation and are
//! signalled with `Option`/`bool`. Only the bounds-checked accessors
//! ([`Trie::at`](crate::Trie::at) and [`Trie::at_mut`](crate::Trie::at_mut))
//! report them as an error.

use thiserror::Error;

/// Errors that can occur in trie operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key has no value in the trie, either because its path does not
    /// exist or because it ends at an intermediate node.
    #[error("key not found in trie")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::OutOfRange.to_string(), "key not found in trie");
    }
}
