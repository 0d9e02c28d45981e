use ouro_object::ObjectError;

/// Errors from git subprocess collaborators.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    /// git exited non-zero; `output` is its stderr/stdout, verbatim.
    #[error("'git {command}' failed: {output}")]
    CommandFailed { command: String, output: String },

    /// The git binary could not be spawned or piped to.
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),

    /// `git hash-object` printed something that is not an object id.
    #[error("unexpected git output: {0}")]
    Object(#[from] ObjectError),
}

/// Result alias for git operations.
pub type GitResult<T> = Result<T, GitError>;
