use thiserror::Error;

/// Errors raised while building hashing inputs. Hashing itself is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("key must be {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
