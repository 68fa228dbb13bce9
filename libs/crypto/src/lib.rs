//! Collection of cryptographic primitives used by the sidechain launch kit.

pub use fmt::*;

pub mod base58;
pub mod ed25519;
mod fmt;
pub mod hash;
pub mod secp256k1;
