use bytes::Bytes;

use crate::error::{ObjectError, ObjectResult};
use crate::id::{ObjectId, HEX_LEN};

/// Placeholder token replaced by the candidate hash prefix.
pub const CHILD_SHA1_PLACEHOLDER: &[u8] = b"${CHILD_SHA1}";

const COMMITTER_ANCHOR: &[u8] = b"committer ";
const PARENT_FIELD: &[u8] = b"parent ";

/// First offset of `needle` within `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Replace every occurrence of `needle` in `haystack` with `replacement`.
fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(idx) = find(rest, needle) {
        out.extend_from_slice(&rest[..idx]);
        out.extend_from_slice(replacement);
        rest = &rest[idx + needle.len()..];
    }
    out.extend_from_slice(rest);
    out
}

/// A parent commit body split once at its `committer ` anchor.
///
/// Everything before the anchor is the header region, copied verbatim into
/// every candidate. Everything from the anchor onward is the field/message
/// region, where `${CHILD_SHA1}` substitution happens. Splitting up front
/// keeps the per-candidate work down to one substitution pass.
///
/// The split is a plain substring scan, not a structured parse: the
/// accepted input shape is narrow and fixed by git's commit format, which
/// this crate does not own.
#[derive(Clone, Debug)]
pub struct ParentTemplate {
    header: Bytes,
    message: Bytes,
}

impl ParentTemplate {
    /// Split `body` at the first `committer ` occurrence.
    ///
    /// A body without the anchor is malformed input, not a retryable
    /// condition.
    pub fn parse(body: &Bytes) -> ObjectResult<Self> {
        let idx = find(body, COMMITTER_ANCHOR).ok_or(ObjectError::MissingCommitterAnchor)?;
        Ok(Self {
            header: body.slice(..idx),
            message: body.slice(idx..),
        })
    }

    /// The header region, byte-for-byte.
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    /// The field/message region with every placeholder replaced by `prefix`.
    ///
    /// Callers that only need the candidate's hash can frame this piece
    /// together with [`header`](Self::header) and the extra line instead of
    /// joining them into one buffer first.
    pub fn render_message(&self, prefix: &str) -> Vec<u8> {
        replace_all(&self.message, CHILD_SHA1_PLACEHOLDER, prefix.as_bytes())
    }

    /// Render a complete candidate body.
    ///
    /// `extra_line` (already formatted as `"<name> <hex>\n"`) is spliced
    /// between the header region and the field/message region; every
    /// placeholder occurrence in the field/message region is replaced with
    /// `prefix`.
    pub fn render(&self, prefix: &str, extra_line: Option<&str>) -> Vec<u8> {
        let message = self.render_message(prefix);
        let extra = extra_line.map_or(&b""[..], str::as_bytes);
        let mut body = Vec::with_capacity(self.header.len() + extra.len() + message.len());
        body.extend_from_slice(&self.header);
        body.extend_from_slice(extra);
        body.extend_from_slice(&message);
        body
    }
}

/// A child commit body split around its predecessor hash.
///
/// `before` ends just after `"parent "`; `after` starts at the newline that
/// terminates the hash. Rewriting is then a three-way concatenation, with
/// every byte outside the 40-character hash field untouched.
#[derive(Clone, Debug)]
pub struct ChildTemplate {
    before: Bytes,
    after: Bytes,
}

impl ChildTemplate {
    /// Locate the first `parent <40-hex>` field in `body`.
    ///
    /// Merge commits carry several `parent ` fields; only the first one is
    /// found and later rewritten (multi-parent semantics are out of scope).
    pub fn parse(body: &Bytes) -> ObjectResult<Self> {
        let mut from = 0;
        while let Some(idx) = find(&body[from..], PARENT_FIELD) {
            let hash_start = from + idx + PARENT_FIELD.len();
            let hash_end = hash_start + HEX_LEN;
            let field = body.get(hash_start..hash_end);
            let terminated = body.get(hash_end) == Some(&b'\n');
            if terminated && field.is_some_and(|f| f.iter().all(u8::is_ascii_hexdigit)) {
                return Ok(Self {
                    before: body.slice(..hash_start),
                    after: body.slice(hash_end..),
                });
            }
            from = hash_start;
        }
        Err(ObjectError::MissingPredecessorField)
    }

    /// The bytes up to and including `"parent "`.
    pub fn before(&self) -> &[u8] {
        &self.before
    }

    /// The bytes from the newline terminating the hash onward.
    pub fn after(&self) -> &[u8] {
        &self.after
    }

    /// Produce a body with the predecessor field set to `parent_hex`.
    pub fn rewrite(&self, parent_hex: &str) -> Vec<u8> {
        let mut body = Vec::with_capacity(self.before.len() + HEX_LEN + self.after.len());
        body.extend_from_slice(&self.before);
        body.extend_from_slice(parent_hex.as_bytes());
        body.extend_from_slice(&self.after);
        body
    }
}

/// Rewrite the first predecessor field of `body` to reference `parent`.
pub fn rewrite_predecessor(body: &Bytes, parent: &ObjectId) -> ObjectResult<Vec<u8>> {
    Ok(ChildTemplate::parse(body)?.rewrite(&parent.to_hex()))
}
