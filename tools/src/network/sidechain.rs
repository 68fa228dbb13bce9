use super::{NetworkError, StandaloneNetwork};
use crate::{
    config::{MAX_FEDERATORS, MIN_FEDERATORS},
    ports::PortAllocator,
};
use slk_crypto::read_optional_text;
use slk_roles::{account::Wallet, KeyBackend, Keypair, Provisioner, Seed};

/// Shape of a sidechain network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidechainLayout {
    /// Number of federators, in `[MIN_FEDERATORS, MAX_FEDERATORS]`.
    pub num_federators: usize,
    /// Config index of the first node.
    pub start_cfg_index: usize,
    /// Number of nodes. Defaults to one node per federator; more nodes
    /// add validators that do not federate.
    pub num_nodes: Option<usize>,
    /// Seed pinning the mainchain door account.
    pub main_door_seed: Option<String>,
}

/// A standalone network whose nodes are federated with the mainchain.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SidechainNetwork {
    /// The validators of the sidechain.
    #[serde(flatten)]
    pub standalone: StandaloneNetwork,
    /// Number of federators.
    pub num_federators: usize,
    /// Federator identities (ed25519 accounts), in federator order. They are
    /// independent of the validator identities; only their position relates
    /// a federator to a node.
    pub federator_keypairs: Vec<Keypair>,
    /// Door account on the mainchain.
    #[serde(serialize_with = "serialize_wallet")]
    pub main_account: Wallet,
}

impl SidechainNetwork {
    /// Builds the standalone base, then the federator identities, then resolves
    /// the door account. Every input is validated before any key is generated.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(num_federators = layout.num_federators)
    )]
    pub fn new(
        backend: &dyn KeyBackend,
        allocator: &PortAllocator,
        layout: &SidechainLayout,
    ) -> Result<Self, NetworkError> {
        let num_federators = layout.num_federators;
        if !(MIN_FEDERATORS..=MAX_FEDERATORS).contains(&num_federators) {
            return Err(NetworkError::FederatorCount(num_federators));
        }
        let num_nodes = layout.num_nodes.unwrap_or(num_federators);
        if num_nodes < num_federators {
            return Err(NetworkError::TooFewNodes {
                num_nodes,
                num_federators,
            });
        }
        let door_seed: Option<Seed> =
            read_optional_text(&layout.main_door_seed).map_err(NetworkError::InvalidSeed)?;

        let standalone =
            StandaloneNetwork::new(backend, allocator, num_nodes, layout.start_cfg_index)?;
        let provisioner = Provisioner::new(backend);
        let federator_keypairs = provisioner
            .federator_keypairs(num_federators)
            .map_err(NetworkError::Keys)?;
        let main_account = provisioner
            .door_account(door_seed.as_ref())
            .map_err(NetworkError::Keys)?;
        tracing::debug!(
            pinned = door_seed.is_some(),
            door = ?main_account.classic_address(),
            "Generated {num_federators} federators."
        );

        Ok(Self {
            standalone,
            num_federators,
            federator_keypairs,
            main_account,
        })
    }

    /// Door account in the same record form as the other identities.
    pub fn main_account_keypair(&self) -> Keypair {
        Keypair::account(&self.main_account)
    }
}

fn serialize_wallet<S: serde::Serializer>(wallet: &Wallet, s: S) -> Result<S::Ok, S::Error> {
    serde::Serialize::serialize(&Keypair::account(wallet), s)
}
