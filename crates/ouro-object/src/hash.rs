use sha1::{Digest, Sha1};

use crate::id::ObjectId;

/// Kinds of git objects this crate can hash.
///
/// Only commits are manipulated by the search engine; the kind shows up as
/// the framing keyword in front of every hashed body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Commit,
}

impl ObjectKind {
    /// The framing keyword for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commit => "commit",
        }
    }
}

/// Kind-tagged SHA-1 hasher emulating git's content addressing.
///
/// Hashes the byte sequence `"<kind> <len>\0" + body`, where `<len>` is the
/// decimal byte length of the body. This is the hot path of the search: the
/// SHA-1 state lives on the stack and the only per-call allocation is the
/// short decimal length string.
pub struct ObjectHasher {
    kind: ObjectKind,
}

impl ObjectHasher {
    /// Hasher for commit objects.
    pub const COMMIT: Self = Self {
        kind: ObjectKind::Commit,
    };

    /// Create a hasher for the given object kind.
    pub const fn new(kind: ObjectKind) -> Self {
        Self { kind }
    }

    /// Hash a complete body.
    pub fn hash(&self, body: &[u8]) -> ObjectId {
        self.hash_parts(&[body])
    }

    /// Hash a body supplied as consecutive parts.
    ///
    /// The parts are framed and digested as if they had been concatenated,
    /// so callers that already hold a body in pieces (header region, spliced
    /// extra line, message region) can hash it without joining the buffers.
    pub fn hash_parts(&self, parts: &[&[u8]]) -> ObjectId {
        let len: usize = parts.iter().map(|p| p.len()).sum();
        let mut hasher = Sha1::new();
        hasher.update(self.kind.as_str().as_bytes());
        hasher.update(b" ");
        hasher.update(len.to_string().as_bytes());
        hasher.update(b"\0");
        for part in parts {
            hasher.update(part);
        }
        ObjectId::from_digest(hasher.finalize().into())
    }
}
