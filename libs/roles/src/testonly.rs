//! Deterministic identity generation, intended for use in testing.

use crate::{
    account::Wallet, node::NodeKey, Algorithm, KeyBackend, Role, SecretKey, Seed, SEED_LENGTH,
};
use rand::{
    distributions::{Distribution, Standard},
    rngs::StdRng,
    Rng, SeedableRng,
};
use std::sync::Mutex;

/// Generates a random Seed of a random algorithm. This is meant for testing purposes.
impl Distribution<Seed> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Seed {
        let algorithm = if rng.gen() {
            Algorithm::Secp256k1
        } else {
            Algorithm::Ed25519
        };
        Seed::new(algorithm, rng.gen::<[u8; SEED_LENGTH]>())
    }
}

/// Backend returning a reproducible stream of seeds: two backends created
/// with the same value hand out the same seeds in the same order.
#[derive(Debug)]
pub struct SeededBackend(Mutex<StdRng>);

impl SeededBackend {
    /// Backend seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl KeyBackend for SeededBackend {
    fn generate_seed(&self, algorithm: Algorithm) -> Seed {
        // A poisoned lock only means another test thread panicked mid-draw;
        // the generator state is still usable.
        let mut rng = self.0.lock().unwrap_or_else(|err| err.into_inner());
        Seed::new(algorithm, rng.gen())
    }
}

/// Backend that hands out the same entropy on every draw.
#[derive(Debug, Clone, Copy)]
pub struct FixedBackend(pub [u8; SEED_LENGTH]);

impl KeyBackend for FixedBackend {
    fn generate_seed(&self, algorithm: Algorithm) -> Seed {
        Seed::new(algorithm, self.0)
    }
}

/// Node key of `seed`, derived without going through a backend.
pub fn node_key(seed: Seed) -> anyhow::Result<NodeKey> {
    let secret = SecretKey::derive(&seed, Role::Validator)?;
    NodeKey::from_derived(seed, secret)
}

/// Wallet of `seed`, derived without going through a backend.
pub fn wallet(seed: Seed) -> anyhow::Result<Wallet> {
    let secret = SecretKey::derive(&seed, Role::Account)?;
    Wallet::from_derived(seed, secret)
}
