//! secp256k1 keys derived from a seed the way the XRP Ledger derives them.
//!
//! A root key is derived from the seed entropy. Validators use the root key
//! directly, while accounts add an account-index specific scalar on top of it.

use crate::{hash, ByteFmt};
use anyhow::Context as _;
use k256::elliptic_curve::sec1::ToEncodedPoint as _;
use std::hash::Hash;

mod testonly;

#[cfg(test)]
mod tests;

/// Length of a compressed SEC1 public key.
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Secp256k1 secret key. Zeroized on drop by `k256`.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(k256::SecretKey);

impl SecretKey {
    /// Derives the root key from seed entropy. This is the key pair a
    /// validator uses.
    pub fn derive_root(entropy: &[u8]) -> anyhow::Result<Self> {
        derive_scalar(&[entropy]).map(Self)
    }

    /// Derives the account key at `account_index` from this root key.
    pub fn derive_account(&self, account_index: u32) -> anyhow::Result<Self> {
        let root_public = ByteFmt::encode(&self.public());
        let intermediate = derive_scalar(&[&root_public, &account_index.to_be_bytes()])?;
        let sum = *self.0.to_nonzero_scalar() + *intermediate.to_nonzero_scalar();
        let key = k256::SecretKey::from_bytes(&sum.to_bytes()).context("derived scalar is zero")?;
        Ok(Self(key))
    }

    /// Gets the corresponding [`PublicKey`] for this [`SecretKey`]
    pub fn public(&self) -> PublicKey {
        PublicKey(self.0.public_key())
    }
}

/// Hashes `parts || seq` with SHA-512-half for increasing `seq`, until the
/// result is a valid non-zero scalar below the curve order.
fn derive_scalar(parts: &[&[u8]]) -> anyhow::Result<k256::SecretKey> {
    for seq in 0..=u32::MAX {
        let seq = seq.to_be_bytes();
        let mut input = parts.to_vec();
        input.push(&seq);
        let candidate = hash::sha512_half(&input);
        if let Ok(key) = k256::SecretKey::from_bytes(&candidate.into()) {
            return Ok(key);
        }
    }
    anyhow::bail!("no valid secp256k1 scalar for the given input")
}

impl ByteFmt for SecretKey {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        let sk = k256::SecretKey::from_slice(bytes)?;
        Ok(Self(sk))
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey({:?})", self.public())
    }
}

/// Secp256k1 public key, encoded as a compressed SEC1 point.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(k256::PublicKey);

impl ByteFmt for PublicKey {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        anyhow::ensure!(
            bytes.len() == PUBLIC_KEY_LENGTH,
            "unexpected public key length: {}",
            bytes.len()
        );
        let pk = k256::PublicKey::from_sec1_bytes(bytes)?;
        Ok(Self(pk))
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_encoded_point(true).as_bytes().to_vec()
    }
}

impl Hash for PublicKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write(&self.encode())
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", hex::encode_upper(self.encode()))
    }
}
