//! Repository collaborators for ouro, backed by the `git` CLI.
//!
//! The search engine treats the repository as three opaque services: fetch
//! the raw body of a commit, store a new commit object, and move the
//! repository's current position. This crate implements all three by
//! shelling out to `git`, mirroring what a user would type:
//!
//! - fetch: `git show --pretty=raw <rev>` plus [`decode_show_raw`]
//! - store: `git hash-object -t commit --stdin -w`
//! - move:  `git reset --hard <rev>`
//!
//! Failures carry git's own diagnostics verbatim; nothing here retries.

pub mod error;
pub mod repo;
pub mod show;

pub use error::{GitError, GitResult};
pub use repo::GitRepo;
pub use show::decode_show_raw;
