//! Parallel brute-force search for a self-referential commit pair.
//!
//! Given the bodies of a parent and a child commit, the search looks for a
//! candidate integer whose derived hex prefix, substituted into the parent
//! message, produces a parent hash which -- once written into the child's
//! predecessor field -- makes the child hash *start with that same prefix*.
//! A fixed point over SHA-1 content addressing, found by trying candidates.
//!
//! # Architecture
//!
//! - [`CommitEvaluator`] tests one candidate: render parent, hash, rewrite
//!   child, hash, compare prefix. Pure and deterministic.
//! - [`search_range`] runs an evaluator over a contiguous candidate range,
//!   bailing out early once a sibling worker has raised the stop flag.
//! - [`Coordinator`] partitions a generation of `16^L` candidates across a
//!   fixed pool of workers, collects the first match, and expands into the
//!   next generation when the space is exhausted (only possible when an
//!   extra header gives the hash fresh input per generation).
//!
//! The [`Evaluate`] trait is the seam for testing the worker/coordinator
//! protocol with stub evaluators.

pub mod coordinator;
pub mod error;
pub mod evaluator;
pub mod worker;

pub use coordinator::{Coordinator, Generation, SearchConfig};
pub use error::{SearchError, SearchResult};
pub use evaluator::{hex_prefix, CommitEvaluator, Evaluate, Match};
pub use worker::search_range;
