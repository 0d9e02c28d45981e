use bytes::Bytes;

use ouro_object::{ChildTemplate, ObjectHasher, ObjectId, ObjectResult, ParentTemplate};

/// A successful candidate: both finalized bodies and their hashes.
///
/// The child body's predecessor field holds `parent_id`, and `child_id`
/// starts with the hex prefix that was substituted into the parent message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub parent_body: Vec<u8>,
    pub child_body: Vec<u8>,
    pub parent_id: ObjectId,
    pub child_id: ObjectId,
}

/// One candidate test.
///
/// The worker and coordinator only depend on this seam, so the search
/// protocol can be exercised with stub evaluators that match (or count)
/// on demand.
pub trait Evaluate {
    /// Test a single candidate integer; `Some` on a match.
    fn evaluate(&mut self, candidate: u64) -> Option<Match>;
}

/// The candidate's derived hex prefix: `candidate mod 16^len`, formatted
/// as exactly `len` zero-padded hex digits.
///
/// The prefix space wraps, so distinct candidates can share a prefix; with
/// an extra header enabled the full candidate still feeds the hash, which
/// is what makes later generations produce different outcomes.
pub fn hex_prefix(candidate: u64, len: usize) -> String {
    debug_assert!((1..=15).contains(&len));
    let mask = (1u64 << (4 * len)) - 1;
    format!("{:0len$x}", candidate & mask)
}

/// Evaluates candidates against real commit bodies.
///
/// Holds the pre-split parent and child templates so the per-candidate
/// work is one substitution pass and two framed SHA-1 digests over the
/// pieces; full bodies are only joined for the match that ends the
/// search. Each worker owns its own evaluator; the templates share the
/// original bodies as cheap reference-counted slices.
#[derive(Clone, Debug)]
pub struct CommitEvaluator {
    parent: ParentTemplate,
    child: ChildTemplate,
    prefix_len: usize,
    extra_header: Option<String>,
}

impl CommitEvaluator {
    /// Pre-split both bodies.
    ///
    /// Fails before any hashing if either structural anchor is missing.
    pub fn new(
        parent_body: &Bytes,
        child_body: &Bytes,
        prefix_len: usize,
        extra_header: Option<String>,
    ) -> ObjectResult<Self> {
        Ok(Self {
            parent: ParentTemplate::parse(parent_body)?,
            child: ChildTemplate::parse(child_body)?,
            prefix_len,
            extra_header,
        })
    }
}

impl Evaluate for CommitEvaluator {
    fn evaluate(&mut self, candidate: u64) -> Option<Match> {
        let prefix = hex_prefix(candidate, self.prefix_len);
        let extra_line = self
            .extra_header
            .as_deref()
            .map(|name| format!("{name} {candidate:x}\n"));
        let extra = extra_line.as_deref().unwrap_or("");
        let message = self.parent.render_message(&prefix);
        let parent_id = ObjectHasher::COMMIT.hash_parts(&[
            self.parent.header(),
            extra.as_bytes(),
            message.as_slice(),
        ]);
        let parent_hex = parent_id.to_hex();
        let child_id = ObjectHasher::COMMIT.hash_parts(&[
            self.child.before(),
            parent_hex.as_bytes(),
            self.child.after(),
        ]);
        if child_id.matches_hex_prefix(&prefix) {
            Some(Match {
                parent_body: self.parent.render(&prefix, extra_line.as_deref()),
                child_body: self.child.rewrite(&parent_hex),
                parent_id,
                child_id,
            })
        } else {
            None
        }
    }
}
