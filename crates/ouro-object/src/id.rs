use std::fmt;

use crate::error::ObjectError;

/// Number of bytes in a SHA-1 digest.
pub const DIGEST_LEN: usize = 20;

/// Number of hex characters in a full object id.
pub const HEX_LEN: usize = 2 * DIGEST_LEN;

/// Content-addressed identifier for a git object.
///
/// An `ObjectId` is the SHA-1 hash of an object's framed content. Identical
/// content always produces the same `ObjectId`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; DIGEST_LEN]);

impl ObjectId {
    /// Create an `ObjectId` from a pre-computed digest.
    pub const fn from_digest(digest: [u8; DIGEST_LEN]) -> Self {
        Self(digest)
    }

    /// The raw 20-byte digest.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Hex-encoded string representation (40 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a 40-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, ObjectError> {
        let bytes = hex::decode(s.trim()).map_err(|e| ObjectError::InvalidHex(e.to_string()))?;
        if bytes.len() != DIGEST_LEN {
            return Err(ObjectError::InvalidLength {
                expected: DIGEST_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Returns `true` if this id's hex form starts with `prefix`.
    ///
    /// Compares nibble by nibble without allocating, so the hot path can
    /// check a candidate prefix against a fresh digest cheaply. A prefix
    /// longer than 40 characters never matches; non-hex characters in the
    /// prefix never match.
    pub fn matches_hex_prefix(&self, prefix: &str) -> bool {
        if prefix.len() > HEX_LEN {
            return false;
        }
        prefix.bytes().enumerate().all(|(i, ch)| {
            let nibble = if i % 2 == 0 {
                self.0[i / 2] >> 4
            } else {
                self.0[i / 2] & 0x0f
            };
            match char::from(ch).to_digit(16) {
                Some(d) => d == u32::from(nibble),
                None => false,
            }
        })
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.short_hex())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; DIGEST_LEN]> for ObjectId {
    fn from(digest: [u8; DIGEST_LEN]) -> Self {
        Self(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let id = ObjectId::from_digest([0xab; DIGEST_LEN]);
        let hex = id.to_hex();
        assert_eq!(hex.len(), HEX_LEN);
        let parsed = ObjectId::from_hex(&hex).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn from_hex_trims_whitespace() {
        // `git hash-object` prints the id with a trailing newline.
        let id = ObjectId::from_digest([0x42; DIGEST_LEN]);
        let parsed = ObjectId::from_hex(&format!("{}\n", id.to_hex())).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(matches!(
            ObjectId::from_hex("zzzz"),
            Err(ObjectError::InvalidHex(_))
        ));
        assert_eq!(
            ObjectId::from_hex("abcd"),
            Err(ObjectError::InvalidLength {
                expected: DIGEST_LEN,
                actual: 2,
            })
        );
    }

    #[test]
    fn short_hex_is_8_chars() {
        let id = ObjectId::from_digest([0x01; DIGEST_LEN]);
        assert_eq!(id.short_hex().len(), 8);
    }

    #[test]
    fn display_is_full_hex() {
        let id = ObjectId::from_digest([0x0f; DIGEST_LEN]);
        assert_eq!(format!("{id}"), id.to_hex());
    }

    #[test]
    fn matches_hex_prefix_odd_and_even_lengths() {
        let mut digest = [0u8; DIGEST_LEN];
        digest[0] = 0xab;
        digest[1] = 0xcd;
        let id = ObjectId::from_digest(digest);
        assert!(id.matches_hex_prefix(""));
        assert!(id.matches_hex_prefix("a"));
        assert!(id.matches_hex_prefix("ab"));
        assert!(id.matches_hex_prefix("abc"));
        assert!(id.matches_hex_prefix("abcd"));
        assert!(!id.matches_hex_prefix("abce"));
        assert!(!id.matches_hex_prefix("b"));
    }

    #[test]
    fn matches_hex_prefix_agrees_with_string_compare() {
        let id = ObjectId::from_digest([0x3c; DIGEST_LEN]);
        let hex = id.to_hex();
        for len in 0..=HEX_LEN {
            assert!(id.matches_hex_prefix(&hex[..len]));
        }
        assert!(!id.matches_hex_prefix(&format!("{hex}0")));
    }
}
