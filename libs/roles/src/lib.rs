//! This crate provides the identities of the nodes and accounts in a test topology.
//!
//! The roles are:
//! - `Node`: a validator that participates in ledger consensus. It is identified by a
//!           secp256k1 node key, and has no account on the ledger.
//! - `Account`: a ledger account, used by federators (ed25519) and by the door
//!              account on the mainchain (secp256k1 unless pinned by a seed).
//!
//! Every identity is derived from a [`Seed`]. Fresh seeds come from a [`KeyBackend`],
//! which is the only place where entropy is consumed.

mod backend;
mod keypair;
mod keys;
mod seed;

pub mod account;
pub mod node;
pub mod testonly;

pub use backend::{KeyBackend, OsBackend, Provisioner};
pub use keypair::Keypair;
pub use keys::{PublicKey, Role, SecretKey};
pub use seed::{Algorithm, Seed, SEED_LENGTH};
