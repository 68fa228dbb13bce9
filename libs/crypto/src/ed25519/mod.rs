//! ed25519 keys derived from a seed the way the XRP Ledger derives them.
//! This is just an adapter of ed25519_dalek: the secret key is the
//! SHA-512-half of the seed entropy, and public keys carry a `0xED` marker
//! byte so that they have the same length as compressed secp256k1 keys.

use crate::{hash, ByteFmt};
use anyhow::Context as _;
use ed25519_dalek as ed;

pub mod testonly;


/// Marker byte prepended to ed25519 keys in their ledger encoding.
pub const KEY_PREFIX: u8 = 0xED;

/// ed25519 secret key.
#[derive(Clone)]
pub struct SecretKey(ed::SigningKey);

impl SecretKey {
    /// Derives the secret key from seed entropy.
    pub fn derive(entropy: &[u8]) -> Self {
        Self(ed::SigningKey::from_bytes(&hash::sha512_half(&[entropy])))
    }

    /// Computes a public key for this secret key.
    pub fn public(&self) -> PublicKey {
        PublicKey(self.0.verifying_key())
    }
}

impl ByteFmt for SecretKey {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        let bytes: &ed::SecretKey = bytes.try_into()?;
        Ok(Self(ed::SigningKey::from_bytes(bytes)))
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bytes() == other.0.to_bytes()
    }
}

impl Eq for SecretKey {}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey({:?})", self.public())
    }
}

/// ed25519 public key. Byte encoding is `0xED || key`.
#[derive(Clone)]
pub struct PublicKey(ed::VerifyingKey);

impl ByteFmt for PublicKey {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        let Some((&KEY_PREFIX, key)) = bytes.split_first() else {
            anyhow::bail!("missing 0xED key prefix");
        };
        let key: &[u8; ed::PUBLIC_KEY_LENGTH] = key.try_into()?;
        ed::VerifyingKey::from_bytes(key)
            .context("invalid key material")
            .map(Self)
    }

    fn encode(&self) -> Vec<u8> {
        let mut bz = Vec::with_capacity(ed::PUBLIC_KEY_LENGTH + 1);
        bz.push(KEY_PREFIX);
        bz.extend_from_slice(self.0.as_bytes());
        bz
    }
}

impl std::hash::Hash for PublicKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write(self.0.as_bytes());
    }
}

// clippy: if Hash is implemented manually,
// then PartialEq should be implemented manually.
impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for PublicKey {}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", hex::encode_upper(self.encode()))
    }
}
