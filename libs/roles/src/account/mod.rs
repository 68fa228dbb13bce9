//! Ledger account identities: account ids, account public keys and wallets.

use crate::{
    keys::{self, SecretKey},
    seed::{Algorithm, Seed},
};
use slk_crypto::{base58, ByteFmt, Text, TextFmt};
use std::fmt;


/// 20-byte account id. Its text form is the classic address (`r...`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 20]);

impl AccountId {
    /// Account id owned by the given public key.
    pub fn from_public(public: &keys::PublicKey) -> Self {
        Self(public.account_hash())
    }
}

impl ByteFmt for AccountId {
    fn encode(&self) -> Vec<u8> {
        self.0.to_vec()
    }
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(Self(bytes.try_into()?))
    }
}

impl TextFmt for AccountId {
    fn encode(&self) -> String {
        base58::encode(base58::ACCOUNT_ID, &self.0)
    }
    fn decode(text: Text) -> anyhow::Result<Self> {
        text.decode_base58(base58::ACCOUNT_ID)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&TextFmt::encode(self))
    }
}

/// An account's public key, text encoded with the account public key prefix (`a...`).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(pub(crate) keys::PublicKey);

impl PublicKey {
    /// Algorithm of the key.
    pub fn algorithm(&self) -> Algorithm {
        self.0.algorithm()
    }
}

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
        base58::encode(base58::ACCOUNT_PUBLIC_KEY, &ByteFmt::encode(self))
    }
    fn decode(text: Text) -> anyhow::Result<Self> {
        text.decode_base58(base58::ACCOUNT_PUBLIC_KEY)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&TextFmt::encode(self))
    }
}

/// A full ledger account: the seed, the key pair at account index 0, and the
/// address the key pair owns.
#[derive(Clone, PartialEq, Eq)]
pub struct Wallet {
    seed: Seed,
    secret: SecretKey,
    address: AccountId,
}

impl Wallet {
    /// Wallet of `seed`, given the account secret key already derived from it.
    /// The algorithm is the one the seed is tagged with, so the same seed always
    /// yields the same address.
    pub(crate) fn from_derived(seed: Seed, secret: SecretKey) -> anyhow::Result<Self> {
        anyhow::ensure!(
            secret.public().algorithm() == seed.algorithm(),
            "{:?} seed paired with a {:?} key",
            seed.algorithm(),
            secret.public().algorithm()
        );
        let address = AccountId::from_public(&secret.public());
        Ok(Self {
            seed,
            secret,
            address,
        })
    }

    /// Seed of the wallet.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Algorithm of the wallet's keys.
    pub fn algorithm(&self) -> Algorithm {
        self.seed.algorithm()
    }

    /// Public key of the wallet.
    pub fn public(&self) -> PublicKey {
        PublicKey(self.secret.public())
    }

    /// Classic address of the wallet.
    pub fn classic_address(&self) -> AccountId {
        self.address
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Wallet")
            .field("algorithm", &self.algorithm())
            .field("public", &self.public())
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
