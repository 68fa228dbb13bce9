//! The full topology of one provisioning run: a mainchain, a sidechain
//! federated with it, and the parameters the run was started with.

use crate::{
    config::RunParams,
    network::{
        ExternalNetwork, Network, NetworkError, SidechainLayout, SidechainNetwork,
        StandaloneNetwork,
    },
    ports::PortAllocator,
};
use slk_roles::KeyBackend;

/// A mainchain that is already running. Only its public WebSocket endpoint is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalMainchain {
    /// Host of the mainchain node.
    pub url: String,
    /// Public WebSocket port of the mainchain node.
    pub ws_port: u16,
}

/// Knobs of a plan that are not part of [`RunParams`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanOptions {
    /// Connect to this mainchain instead of generating a standalone one.
    pub external_mainchain: Option<ExternalMainchain>,
    /// Number of sidechain nodes. Defaults to one per federator.
    pub sidechain_nodes: Option<usize>,
    /// Seed pinning the mainchain door account.
    pub main_door_seed: Option<String>,
}

/// Everything the config writer needs to produce the files of a run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LaunchPlan {
    /// Parameters the plan was built from.
    pub params: RunParams,
    /// The mainchain: a single generated node, or an external network.
    pub mainchain: Network,
    /// The sidechain. Its config indices start right after the mainchain's.
    pub sidechain: Network,
}

impl LaunchPlan {
    /// Builds the mainchain, then the sidechain on the following config indices,
    /// so that no two nodes of the run share a port.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(num_federators = params.num_federators)
    )]
    pub fn new(
        backend: &dyn KeyBackend,
        allocator: &PortAllocator,
        params: RunParams,
        options: PlanOptions,
    ) -> Result<Self, NetworkError> {
        let (mainchain, next_cfg_index): (Network, usize) = match options.external_mainchain {
            Some(ExternalMainchain { url, ws_port }) => {
                // External nodes do not take a config index.
                (ExternalNetwork::new(url, ws_port).into(), 0)
            }
            None => (StandaloneNetwork::new(backend, allocator, 1, 0)?.into(), 1),
        };
        let sidechain = SidechainNetwork::new(
            backend,
            allocator,
            &SidechainLayout {
                num_federators: params.num_federators,
                start_cfg_index: next_cfg_index,
                num_nodes: options.sidechain_nodes,
                main_door_seed: options.main_door_seed,
            },
        )?;
        tracing::info!(
            mainchain = mainchain.url(),
            sidechain_nodes = sidechain.standalone.base.num_nodes,
            door = ?sidechain.main_account.classic_address(),
            "Launch plan ready."
        );
        Ok(Self {
            params,
            mainchain,
            sidechain: sidechain.into(),
        })
    }

    /// Both networks of the run, mainchain first.
    pub fn networks(&self) -> [&Network; 2] {
        [&self.mainchain, &self.sidechain]
    }
}
