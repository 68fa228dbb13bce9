//! Hash functions used by XRP Ledger key derivation.
use ripemd::Ripemd160;
use sha2::{Digest as _, Sha256, Sha512};

/// First half (32 bytes) of a SHA-512 digest over the concatenated parts.
pub fn sha512_half(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut half = [0u8; 32];
    half.copy_from_slice(&digest[..32]);
    half
}

/// RIPEMD-160 of SHA-256, which maps a 33-byte public key to a 20-byte account id.
pub fn account_hash(public_key: &[u8]) -> [u8; 20] {
    let inner = Sha256::digest(public_key);
    Ripemd160::digest(inner).into()
}
