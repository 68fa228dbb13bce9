//! Entropy backend and the keypair provisioner built on top of it.

use crate::{
    account::Wallet,
    keys::{PublicKey, Role, SecretKey},
    node::NodeKey,
    seed::{Algorithm, Seed, SEED_LENGTH},
    Keypair,
};
use anyhow::Context as _;
use rand::RngCore as _;


/// Source of fresh seeds, and of the derivation turning a seed into a key pair.
/// The [`Provisioner`] derives every identity through it, so a fake backend
/// makes provisioning reproducible.
///
/// Implementations must be safe to share between threads, so that callers
/// may generate identities for different nodes in parallel.
pub trait KeyBackend: Send + Sync {
    /// Draws a fresh seed for `algorithm`.
    fn generate_seed(&self, algorithm: Algorithm) -> Seed;

    /// Derives the key pair `seed` yields for `role`.
    fn derive_keypair(&self, seed: &Seed, role: Role) -> anyhow::Result<(PublicKey, SecretKey)> {
        let secret = SecretKey::derive(seed, role)?;
        Ok((secret.public(), secret))
    }

    /// Creates a full ledger account from a fresh seed.
    fn create_account(&self, algorithm: Algorithm) -> anyhow::Result<Wallet> {
        let seed = self.generate_seed(algorithm);
        let secret = derive_secret(self, &seed, Role::Account)?;
        Wallet::from_derived(seed, secret)
    }
}

/// Derives through `backend` and checks that the returned halves belong together.
fn derive_secret<B: KeyBackend + ?Sized>(
    backend: &B,
    seed: &Seed,
    role: Role,
) -> anyhow::Result<SecretKey> {
    let (public, secret) = backend
        .derive_keypair(seed, role)
        .context("derive_keypair()")?;
    anyhow::ensure!(
        secret.public() == public,
        "derive_keypair() returned a public key of another secret key"
    );
    Ok(secret)
}

/// Backend drawing entropy from the operating system. Use in prod.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsBackend;

impl KeyBackend for OsBackend {
    fn generate_seed(&self, algorithm: Algorithm) -> Seed {
        let mut entropy = [0u8; SEED_LENGTH];
        rand::rngs::OsRng.fill_bytes(&mut entropy);
        Seed::new(algorithm, entropy)
    }
}

/// Produces the identities of a topology: validator node keys and
/// federator / door accounts.
#[derive(Clone, Copy)]
pub struct Provisioner<'a> {
    backend: &'a dyn KeyBackend,
}

impl<'a> Provisioner<'a> {
    /// Provisioner drawing seeds from `backend`.
    pub fn new(backend: &'a dyn KeyBackend) -> Self {
        Self { backend }
    }

    /// Fresh validator identity: a secp256k1 root key pair. The public key is
    /// node-encoded and no account id is set.
    pub fn validator_keypair(&self) -> anyhow::Result<Keypair> {
        let seed = self.backend.generate_seed(Algorithm::Secp256k1);
        let secret = derive_secret(self.backend, &seed, Role::Validator)?;
        let key = NodeKey::from_derived(seed, secret).context("NodeKey::from_derived()")?;
        Ok(Keypair::validator(&key))
    }

    /// Fresh federator identity: an ed25519 ledger account.
    pub fn federator_keypair(&self) -> anyhow::Result<Keypair> {
        let wallet = self
            .backend
            .create_account(Algorithm::Ed25519)
            .context("create_account()")?;
        Ok(Keypair::account(&wallet))
    }

    /// `n` validator identities, in node order.
    pub fn validator_keypairs(&self, n: usize) -> anyhow::Result<Vec<Keypair>> {
        (0..n).map(|_| self.validator_keypair()).collect()
    }

    /// `n` federator identities, in federator order.
    pub fn federator_keypairs(&self, n: usize) -> anyhow::Result<Vec<Keypair>> {
        (0..n).map(|_| self.federator_keypair()).collect()
    }

    /// Door account on the mainchain. A pinned seed is derived through the
    /// backend and always yields the same account. Without one, a fresh
    /// secp256k1 account is created.
    pub fn door_account(&self, seed: Option<&Seed>) -> anyhow::Result<Wallet> {
        match seed {
            Some(seed) => {
                tracing::debug!(
                    algorithm = ?seed.algorithm(),
                    "Deriving door account from a pinned seed."
                );
                let secret = derive_secret(self.backend, seed, Role::Account)?;
                Wallet::from_derived(seed.clone(), secret)
            }
            None => self.backend.create_account(Algorithm::Secp256k1),
        }
    }
}

impl std::fmt::Debug for Provisioner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provisioner").finish_non_exhaustive()
    }
}
