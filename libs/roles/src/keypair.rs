use crate::{account::Wallet, node::NodeKey};
use slk_crypto::TextFmt;
use std::fmt;

/// One cryptographic identity, in the text form config files take.
///
/// `account_id` is set only for account identities (federators and door
/// accounts). Validator identities are not account-bearing.
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Keypair {
    /// Node public key (`n...`) or account public key (`a...`).
    pub public_key: String,
    /// Seed the identity is derived from.
    pub secret_key: String,
    /// Classic address (`r...`) of account identities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl Keypair {
    /// Identity record of a validator.
    pub fn validator(key: &NodeKey) -> Self {
        Self {
            public_key: TextFmt::encode(&key.public()),
            secret_key: TextFmt::encode(key.seed()),
            account_id: None,
        }
    }

    /// Identity record of an account.
    pub fn account(wallet: &Wallet) -> Self {
        Self {
            public_key: TextFmt::encode(&wallet.public()),
            secret_key: TextFmt::encode(wallet.seed()),
            account_id: Some(TextFmt::encode(&wallet.classic_address())),
        }
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Keypair")
            .field("public_key", &self.public_key)
            .field("account_id", &self.account_id)
            .finish_non_exhaustive()
    }
}
