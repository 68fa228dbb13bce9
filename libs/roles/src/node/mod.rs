//! Validator node identities.
//! Public key identifies a single validator in the network.
//! Each node must have a different key.

use crate::{
    keys::SecretKey,
    seed::{Algorithm, Seed},
};
use slk_crypto::{base58, secp256k1, ByteFmt, Text, TextFmt};
use std::fmt;

#[cfg(test)]
mod tests;

/// A validator's node key: a secp256k1 root key pair together with the
/// seed it was derived from. rippled configs take the seed as the
/// `validation_seed`.
#[derive(Clone, PartialEq, Eq)]
pub struct NodeKey {
    seed: Seed,
    secret: secp256k1::SecretKey,
}

impl NodeKey {
    /// Node key of `seed`, given the secret key already derived from it.
    pub(crate) fn from_derived(seed: Seed, secret: SecretKey) -> anyhow::Result<Self> {
        anyhow::ensure!(
            seed.algorithm() == Algorithm::Secp256k1,
            "node keys require a secp256k1 seed, got {:?}",
            seed.algorithm()
        );
        let SecretKey::Secp256k1(secret) = secret else {
            anyhow::bail!("node keys require a secp256k1 secret key");
        };
        Ok(Self { seed, secret })
    }

    /// Seed this key was derived from.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Get the public key corresponding to this node key.
    pub fn public(&self) -> PublicKey {
        PublicKey(self.secret.public())
    }
}

impl fmt::Debug for NodeKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "<secret for {}>", TextFmt::encode(&self.public()))
    }
}

/// A validator's public key, text encoded with the node public key prefix (`n...`).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(pub(crate) secp256k1::PublicKey);

impl ByteFmt for PublicKey {
    fn encode(&self) -> Vec<u8> {
        ByteFmt::encode(&self.0)
    }
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        ByteFmt::decode(bytes).map(Self)
    }
}

impl TextFmt for PublicKey {
    fn encode(&self) -> String {
        base58::encode(base58::NODE_PUBLIC, &ByteFmt::encode(self))
    }
    fn decode(text: Text) -> anyhow::Result<Self> {
        text.decode_base58(base58::NODE_PUBLIC)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&TextFmt::encode(self))
    }
}
