//! Canonical digests.
//!
//! A canonical digest is the sha256 of a document's canonical form, so raw
//! noise (blank lines, trailing whitespace, header-field order) never
//! changes the digest. The snapshot index and the CLI JSON output use it to
//! identify document content cheaply.

use sha2::{Digest, Sha256};

use crate::canonical::canonicalize;

/// Hash raw bytes, lowercase hex.
pub fn hash_bytes_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Canonicalize a document and hash the canonical form, lowercase hex.
pub fn canonical_digest_hex(text: &str) -> String {
    hash_bytes_hex(canonicalize(text).as_bytes())
}
