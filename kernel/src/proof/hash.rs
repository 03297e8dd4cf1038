//! Canonical content hashing with domain separation.
//!
//! Algorithm: SHA-256 over `domain || data`. Result format: `"sha256:<hex>"`.
//! Every artifact digest in the workspace routes through [`canonical_hash`].

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Invariant: the inner string contains exactly one `:` with non-empty
/// substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

// Domain separation prefixes. Each is null-terminated.

/// Domain prefix for puzzle text digests.
pub const DOMAIN_PUZZLE: &[u8] = b"WRIGGLE::PUZZLE::V1\0";

/// Domain prefix for solution file digests.
pub const DOMAIN_SOLUTION: &[u8] = b"WRIGGLE::SOLUTION::V1\0";

/// Domain prefix for search report digests.
pub const DOMAIN_REPORT: &[u8] = b"WRIGGLE::REPORT::V1\0";

/// Compute the canonical hash of `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    let full = format!("sha256:{hex_digest}");
    ContentHash { colon: 6, full }
}
