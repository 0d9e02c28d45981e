/// Errors from object parsing and hashing.
///
/// Every variant is a precondition violation: the input body does not have
/// the shape this crate was told to expect. None of these are retryable.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ObjectError {
    /// The parent body has no `committer ` line to anchor the split
    /// between header region and field/message region.
    #[error("parent commit body has no 'committer ' anchor line")]
    MissingCommitterAnchor,

    /// The child body has no `parent <40-hex>` field to rewrite.
    #[error("child commit body has no 'parent <sha1>' field")]
    MissingPredecessorField,

    /// A hash string was not valid hex of the expected width.
    #[error("invalid object id: {0}")]
    InvalidHex(String),

    /// A hash string decoded to the wrong number of bytes.
    #[error("invalid object id length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Result alias for object operations.
pub type ObjectResult<T> = Result<T, ObjectError>;
