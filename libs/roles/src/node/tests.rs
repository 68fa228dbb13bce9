use super::*;
use crate::testonly::{self, SeededBackend};
use crate::KeyBackend as _;
use slk_crypto::Text;

#[test]
fn test_node_key_is_root_key() {
    let seed: Seed = "snoPBrXtMeMyMHUVTgbuqAfg1SUTb".parse().unwrap();
    let node = testonly::node_key(seed.clone()).unwrap();
    let root = secp256k1::SecretKey::derive_root(seed.entropy()).unwrap();
    assert_eq!(node.public().0, root.public());
    // The account key of the same seed is a different key.
    assert_ne!(node.public().0, root.derive_account(0).unwrap().public());
}

#[test]
fn test_node_key_rejects_ed25519_seed() {
    let seed: Seed = "sEdSKaCy2JT7JaM7v95H9SxkhP9wS2r".parse().unwrap();
    testonly::node_key(seed).unwrap_err();
}

#[test]
fn test_public_key_text_format() {
    let backend = SeededBackend::new(17);
    for _ in 0..10 {
        let node = testonly::node_key(backend.generate_seed(Algorithm::Secp256k1)).unwrap();
        let text = TextFmt::encode(&node.public());
        assert!(text.starts_with('n'), "{text}");
        let decoded: PublicKey = Text::new(&text).decode().unwrap();
        assert_eq!(decoded, node.public());
    }
}

#[test]
fn test_public_key_text_rejects_account_encoding() {
    let backend = SeededBackend::new(18);
    let node = testonly::node_key(backend.generate_seed(Algorithm::Secp256k1)).unwrap();
    let account_encoded =
        base58::encode(base58::ACCOUNT_PUBLIC_KEY, &ByteFmt::encode(&node.public()));
    Text::new(&account_encoded).decode::<PublicKey>().unwrap_err();
}

#[test]
fn test_debug_hides_secret() {
    let seed: Seed = "snoPBrXtMeMyMHUVTgbuqAfg1SUTb".parse().unwrap();
    let node = testonly::node_key(seed).unwrap();
    let debug = format!("{node:?}");
    assert!(!debug.contains("snoPBrXtMeMyMHUVTgbuqAfg1SUTb"));
    assert!(debug.starts_with("<secret for n"));
}

#[test]
fn test_node_key_rejects_ed25519_secret() {
    let seed: Seed = "snoPBrXtMeMyMHUVTgbuqAfg1SUTb".parse().unwrap();
    let ed25519_seed: Seed = "sEdSKaCy2JT7JaM7v95H9SxkhP9wS2r".parse().unwrap();
    let secret = SecretKey::derive(&ed25519_seed, crate::Role::Account).unwrap();
    NodeKey::from_derived(seed, secret).unwrap_err();
}
