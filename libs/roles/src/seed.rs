//! Seeds, the source material every key pair is derived from.

use slk_crypto::{base58, Text, TextFmt};
use std::{fmt, str::FromStr};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of entropy bytes in a seed.
pub const SEED_LENGTH: usize = 16;

/// Signature scheme a seed derives keys for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// ECDSA over secp256k1. Used for validator and door keys.
    Secp256k1,
    /// EdDSA over curve25519. Used for federator accounts.
    Ed25519,
}

impl Algorithm {
    /// base58 version prefix of seeds for this algorithm.
    fn seed_prefix(self) -> &'static [u8] {
        match self {
            Self::Secp256k1 => base58::FAMILY_SEED,
            Self::Ed25519 => base58::ED25519_SEED,
        }
    }
}

/// 16 bytes of entropy, tagged with the algorithm they are meant for.
/// Equal seeds always derive equal key pairs.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    #[zeroize(skip)]
    algorithm: Algorithm,
    entropy: [u8; SEED_LENGTH],
}

impl Seed {
    /// Wraps raw entropy.
    pub fn new(algorithm: Algorithm, entropy: [u8; SEED_LENGTH]) -> Self {
        Self { algorithm, entropy }
    }

    /// Algorithm of the keys derived from this seed.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Raw entropy of the seed.
    pub fn entropy(&self) -> &[u8; SEED_LENGTH] {
        &self.entropy
    }
}

impl TextFmt for Seed {
    fn encode(&self) -> String {
        base58::encode(self.algorithm.seed_prefix(), &self.entropy)
    }

    /// Accepts both `sEd...` ed25519 seeds and `s...` secp256k1 family seeds.
    fn decode(text: Text) -> anyhow::Result<Self> {
        let text = text.as_str();
        for algorithm in [Algorithm::Ed25519, Algorithm::Secp256k1] {
            let Ok(raw) = base58::decode(text, algorithm.seed_prefix()) else {
                continue;
            };
            let entropy: [u8; SEED_LENGTH] = raw.as_slice().try_into().map_err(|_| {
                anyhow::anyhow!("seed has {} bytes of entropy, expected {SEED_LENGTH}", raw.len())
            })?;
            return Ok(Self::new(algorithm, entropy));
        }
        anyhow::bail!("{text:?} is neither an ed25519 nor a secp256k1 seed")
    }
}

impl FromStr for Seed {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Text::new(s).decode()
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "<{:?} seed>", self.algorithm)
    }
}
