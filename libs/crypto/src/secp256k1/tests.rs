use crate::{base58, hash, secp256k1::*, ByteFmt};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt::Debug;

fn make_rng() -> StdRng {
    StdRng::seed_from_u64(29483920)
}

fn prop_byte_format<T>()
where
    T: ByteFmt + Eq + Debug,
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    let rng = &mut make_rng();
    for _ in 0..10 {
        let v0 = rng.gen::<T>();
        let bz0 = v0.encode();
        let v1 = T::decode(&bz0).unwrap();
        assert_eq!(v0, v1);
        assert_eq!(bz0, v1.encode());
    }
}

#[test]
fn prop_public_key_format() {
    prop_byte_format::<PublicKey>();
}

#[test]
fn prop_secret_key_format() {
    prop_byte_format::<SecretKey>();
}

#[test]
fn test_public_key_is_compressed() {
    let rng = &mut make_rng();
    for _ in 0..10 {
        let bz = rng.gen::<PublicKey>().encode();
        assert_eq!(bz.len(), PUBLIC_KEY_LENGTH);
        assert!(bz[0] == 0x02 || bz[0] == 0x03);
    }
}

#[test]
fn test_root_derivation_is_deterministic() {
    let rng = &mut make_rng();
    let entropy: [u8; 16] = rng.gen();
    let a = SecretKey::derive_root(&entropy).unwrap();
    let b = SecretKey::derive_root(&entropy).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.derive_account(0).unwrap(),
        b.derive_account(0).unwrap()
    );
}

#[test]
fn test_account_key_differs_from_root() {
    let rng = &mut make_rng();
    let root = SecretKey::derive_root(&rng.gen::<[u8; 16]>()).unwrap();
    let account = root.derive_account(0).unwrap();
    assert_ne!(root.public(), account.public());
    assert_ne!(account, root.derive_account(1).unwrap());
}

/// The genesis account of every XRP Ledger network is derived from the
/// seed of the passphrase "masterpassphrase".
#[test]
fn test_genesis_account() {
    let entropy = base58::decode("snoPBrXtMeMyMHUVTgbuqAfg1SUTb", base58::FAMILY_SEED).unwrap();
    let account = SecretKey::derive_root(&entropy)
        .unwrap()
        .derive_account(0)
        .unwrap();
    let public = account.public().encode();
    assert_eq!(
        hex::encode_upper(&public),
        "0330E7FC9D56BB25D6893BA3F317AE5BCF33B3291BD63DB32654A313222F7FD020"
    );
    assert_eq!(
        base58::encode(base58::ACCOUNT_ID, &hash::account_hash(&public)),
        "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"
    );
}

#[test]
fn test_decode_rejects_uncompressed_length() {
    let rng = &mut make_rng();
    let mut bz = rng.gen::<PublicKey>().encode();
    bz.push(0);
    PublicKey::decode(&bz).unwrap_err();
}
