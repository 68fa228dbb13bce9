//! Key pairs derived from seeds, independent of the identity they back.

use crate::seed::{Algorithm, Seed};
use slk_crypto::{ed25519, hash, secp256k1, ByteFmt};

/// Every derived account uses the first account index of its seed.
pub(crate) const ACCOUNT_INDEX: u32 = 0;

/// What a derived key pair is used for. It decides how far the
/// secp256k1 derivation goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Validator node key: the secp256k1 root key pair.
    Validator,
    /// Ledger account key: the key pair at account index 0.
    Account,
}

/// A secret key of either supported algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SecretKey {
    /// secp256k1 secret key.
    Secp256k1(secp256k1::SecretKey),
    /// ed25519 secret key.
    Ed25519(ed25519::SecretKey),
}

impl SecretKey {
    /// Derives the secret key `seed` yields for `role`.
    /// Validator keys can only be derived from secp256k1 seeds.
    pub fn derive(seed: &Seed, role: Role) -> anyhow::Result<Self> {
        let entropy = seed.entropy();
        Ok(match (seed.algorithm(), role) {
            (Algorithm::Secp256k1, Role::Validator) => {
                Self::Secp256k1(secp256k1::SecretKey::derive_root(entropy)?)
            }
            (Algorithm::Secp256k1, Role::Account) => Self::Secp256k1(
                secp256k1::SecretKey::derive_root(entropy)?.derive_account(ACCOUNT_INDEX)?,
            ),
            (Algorithm::Ed25519, Role::Account) => {
                Self::Ed25519(ed25519::SecretKey::derive(entropy))
            }
            (Algorithm::Ed25519, Role::Validator) => {
                anyhow::bail!("validator keys cannot be derived from an ed25519 seed")
            }
        })
    }

    /// Public key corresponding to this secret key.
    pub fn public(&self) -> PublicKey {
        match self {
            Self::Secp256k1(sk) => PublicKey::Secp256k1(sk.public()),
            Self::Ed25519(sk) => PublicKey::Ed25519(sk.public()),
        }
    }
}

/// A public key of either supported algorithm. Both encode to 33 bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PublicKey {
    /// Compressed secp256k1 point.
    Secp256k1(secp256k1::PublicKey),
    /// `0xED`-prefixed ed25519 key.
    Ed25519(ed25519::PublicKey),
}

impl PublicKey {
    /// Algorithm of this key.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Secp256k1(_) => Algorithm::Secp256k1,
            Self::Ed25519(_) => Algorithm::Ed25519,
        }
    }

    /// 20-byte account id hash of this key.
    pub(crate) fn account_hash(&self) -> [u8; 20] {
        hash::account_hash(&ByteFmt::encode(self))
    }
}

impl ByteFmt for PublicKey {
    /// The leading `0xED` byte tells ed25519 keys apart from SEC1 points.
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(match bytes.first() {
            Some(&ed25519::KEY_PREFIX) => Self::Ed25519(ByteFmt::decode(bytes)?),
            _ => Self::Secp256k1(ByteFmt::decode(bytes)?),
        })
    }

    fn encode(&self) -> Vec<u8> {
        match self {
            Self::Secp256k1(pk) => pk.encode(),
            Self::Ed25519(pk) => pk.encode(),
        }
    }
}
