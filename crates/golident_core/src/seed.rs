//! Seed derivation.
//!
//! The SHA-256 digest of the UTF-8 seed string, read as a big-endian 256-bit
//! unsigned integer, is the seed. The digest bytes are already that integer's
//! big-endian encoding, so they seed the generator directly.
//!
//! ## Pinned generator
//!
//! [`SeededRng`] is `ChaCha8Rng` (8 rounds, stream 0) keyed with the 32 seed
//! bytes. Reproducibility across releases depends on this choice and on the
//! draw order: every board cell first (row-major, one `next_u32` each), then
//! every gradient channel (one `next_u64` each).

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use std::fmt;

/// The generator every downstream draw comes from.
pub type SeededRng = ChaCha8Rng;

/// 256-bit seed, stored big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed([u8; 32]);

impl Seed {
    pub fn derive(seed_string: &str) -> Self {
        let digest: [u8; 32] = Sha256::digest(seed_string.as_bytes()).into();
        Self(digest)
    }

    /// Parses a 64-character hex digest.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        let bytes = hex::decode(hex_str.trim()).ok()?;
        let digest: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(digest))
    }

    /// Big-endian bytes of the seed integer.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex digest.
    #[must_use]
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }

    /// A fresh generator positioned at the first draw.
    pub fn rng(&self) -> SeededRng {
        ChaCha8Rng::from_seed(self.0)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Derives the seed and its generator for `seed_string`. Any string is valid.
pub fn derive(seed_string: &str) -> (Seed, SeededRng) {
    let seed = Seed::derive(seed_string);
    let rng = seed.rng();
    (seed, rng)
}
