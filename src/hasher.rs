use crate::alphabet::Alphabet;
use clap::ValueEnum;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;

/// Digest algorithms a target can be expressed in.
///
/// The cryptographic ones render as lowercase hex. `Poly37` is the positional
/// polynomial digest (`h = 7`, then `h = h * 37 + position` per character,
/// positions taken from the search alphabet) and renders in decimal.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha1,
    Md5,
    Poly37,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::Sha1 => write!(f, "sha1"),
            HashAlgorithm::Md5 => write!(f, "md5"),
            HashAlgorithm::Poly37 => write!(f, "poly37"),
        }
    }
}

/// Computes candidate digests for one search run.
pub struct Hasher {
    algorithm: HashAlgorithm,
    alphabet: Alphabet,
}

impl Hasher {
    pub fn new(algorithm: HashAlgorithm, alphabet: &Alphabet) -> Self {
        Self {
            algorithm,
            alphabet: alphabet.clone(),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Digest of an input string, rendered the way targets are written on the
    /// command line. Total over any input.
    pub fn digest(&self, input: &str) -> String {
        match self.algorithm {
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(input.as_bytes())),
            HashAlgorithm::Sha1 => hex::encode(Sha1::digest(input.as_bytes())),
            HashAlgorithm::Md5 => hex::encode(Md5::digest(input.as_bytes())),
            HashAlgorithm::Poly37 => self.poly37(input),
        }
    }

    /// Characters outside the alphabet have no position and contribute
    /// nothing. Wraps rather than overflows on long inputs.
    fn poly37(&self, input: &str) -> String {
        let mut h: u64 = 7;
        for c in input.chars() {
            if let Some(pos) = self.alphabet.position(c) {
                h = h.wrapping_mul(37).wrapping_add(pos as u64);
            }
        }
        h.to_string()
    }
}
