//! Git commit object model for ouro.
//!
//! This crate implements the content-addressing and text-manipulation
//! primitives the search engine iterates over millions of times per second:
//!
//! - [`ObjectId`] -- a 20-byte SHA-1 content address with hex conversions
//! - [`ObjectHasher`] -- framed hashing over `"<kind> <len>\0" + body`
//! - [`ParentTemplate`] -- splits a parent commit body at the `committer `
//!   anchor and renders candidate bodies with the `${CHILD_SHA1}`
//!   placeholder substituted (and an optional extra header spliced in)
//! - [`rewrite_predecessor`] / [`ChildTemplate`] -- rewrite the `parent `
//!   field of a child commit body, leaving every other byte untouched
//!
//! Commit bodies are treated as opaque byte buffers with two fixed textual
//! anchors located by substring search. Merge commits (more than one
//! `parent ` field) are out of scope: only the first field is rewritten.

pub mod error;
pub mod hash;
pub mod id;
pub mod template;

pub use error::{ObjectError, ObjectResult};
pub use hash::{ObjectHasher, ObjectKind};
pub use id::ObjectId;
pub use template::{
    rewrite_predecessor, ChildTemplate, ParentTemplate, CHILD_SHA1_PLACEHOLDER,
};
