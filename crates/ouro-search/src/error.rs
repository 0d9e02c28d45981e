use ouro_object::ObjectError;

/// Errors from search configuration and execution.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    /// The requested prefix length cannot index a `u64` candidate space.
    #[error("prefix length {requested} out of range (1..={max})")]
    PrefixLengthOutOfRange { requested: usize, max: usize },

    /// Zero workers were requested.
    #[error("parallelism must be at least 1")]
    ZeroParallelism,

    /// The generation width does not divide evenly across the workers.
    #[error("generation width {width} is not divisible by parallelism {parallelism}")]
    UnevenPartition { width: u64, parallelism: usize },

    /// Every candidate in the generation was tried without a match and no
    /// extra header is available to expand the space.
    #[error(
        "candidate space exhausted after {attempted} attempts; \
         an extra header is needed to expand the search"
    )]
    SpaceExhausted { attempted: u64 },

    /// Generations advanced past the end of the 64-bit candidate space.
    #[error("candidate space overflowed 64 bits after generation {generations}")]
    CandidateSpaceOverflow { generations: u64 },

    /// A commit body failed a structural precondition.
    #[error(transparent)]
    Object(#[from] ObjectError),
}

/// Result alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
