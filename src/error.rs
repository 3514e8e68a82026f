use crate::digest::Digest;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure the store can surface. Nothing is retried, nothing is
/// swallowed; callers decide what to do.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested identifier has no corresponding file in the database.
    #[error("object not found in database: {0:x}")]
    ObjectNotFound(Digest),

    /// Decoding a stored object failed: bad header, length mismatch,
    /// truncated tree entry, or invalid UTF-8 where text is required.
    #[error("malformed object: {0}")]
    MalformedObject(String),

    /// The compressed stream could not be inflated.
    #[error("corrupt object stream")]
    CorruptStream(#[source] std::io::Error),

    /// The caller supplied something unusable: a bad identifier, an empty
    /// commit message, an unsupported mode.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying filesystem operation failed.
    #[error("io failure")]
    Io(#[from] std::io::Error),
}
