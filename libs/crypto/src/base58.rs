//! Base58-check codec using the ripple alphabet.
//!
//! Every encoded value is `version || payload || checksum`, where the checksum
//! is the first 4 bytes of a double SHA-256 over `version || payload`. The
//! version prefix determines the leading character of the text form.


/// Version prefix of a classic account address (`r...`).
pub const ACCOUNT_ID: &[u8] = &[0x00];
/// Version prefix of a secp256k1 family seed (`s...`).
pub const FAMILY_SEED: &[u8] = &[0x21];
/// Version prefix of an ed25519 seed (`sEd...`).
pub const ED25519_SEED: &[u8] = &[0x01, 0xE1, 0x4B];
/// Version prefix of a node (validator) public key (`n...`).
pub const NODE_PUBLIC: &[u8] = &[0x1C];
/// Version prefix of an account public key (`a...`).
pub const ACCOUNT_PUBLIC_KEY: &[u8] = &[0x23];

/// Encodes `payload` under the given version prefix.
pub fn encode(version: &[u8], payload: &[u8]) -> String {
    let mut raw = Vec::with_capacity(version.len() + payload.len());
    raw.extend_from_slice(version);
    raw.extend_from_slice(payload);
    bs58::encode(raw)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check()
        .into_string()
}

/// Decodes a base58-check string and strips the expected version prefix.
/// Fails if the checksum does not match or the prefix differs.
pub fn decode(text: &str, version: &[u8]) -> anyhow::Result<Vec<u8>> {
    let raw = bs58::decode(text)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check(None)
        .into_vec()?;
    let Some(payload) = raw.strip_prefix(version) else {
        anyhow::bail!(
            "unexpected version prefix: expected {}, got {}",
            hex::encode(version),
            hex::encode(&raw[..version.len().min(raw.len())])
        );
    };
    Ok(payload.to_vec())
}
