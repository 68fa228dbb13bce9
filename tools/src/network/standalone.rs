use super::{NetworkBase, NetworkError, LOCALHOST};
use crate::ports::{PortAllocator, Ports};
use slk_roles::{KeyBackend, Keypair, Provisioner};

/// Validators generated for this run, one identity per node.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StandaloneNetwork {
    /// Shared fields.
    #[serde(flatten)]
    pub base: NetworkBase,
    /// Validator identities, in node order.
    /// `validator_keypairs.len() == base.num_nodes`.
    pub validator_keypairs: Vec<Keypair>,
}

impl StandaloneNetwork {
    /// Allocates the config indices `start_cfg_index..start_cfg_index + num_nodes`
    /// and generates a validator identity for every node.
    #[tracing::instrument(level = "debug", skip(backend, allocator))]
    pub fn new(
        backend: &dyn KeyBackend,
        allocator: &PortAllocator,
        num_nodes: usize,
        start_cfg_index: usize,
    ) -> Result<Self, NetworkError> {
        if num_nodes == 0 {
            return Err(NetworkError::NoNodes);
        }
        let ports = (0..num_nodes)
            .map(|i| allocator.allocate(start_cfg_index.saturating_add(i)))
            .collect::<Result<Vec<_>, _>>()?;
        let validator_keypairs = Provisioner::new(backend)
            .validator_keypairs(num_nodes)
            .map_err(NetworkError::Keys)?;
        tracing::debug!(
            first_port = ?ports.first().and_then(|p| p.peer_port),
            "Generated {num_nodes} validators."
        );
        Ok(Self {
            base: NetworkBase {
                url: LOCALHOST.to_owned(),
                num_nodes,
                ports,
            },
            validator_keypairs,
        })
    }
}

/// A single-node network that runs outside of this run. Only its public
/// WebSocket endpoint is known, and no identities are generated for it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExternalNetwork {
    /// Shared fields. `base.num_nodes` is always 1.
    #[serde(flatten)]
    pub base: NetworkBase,
}

impl ExternalNetwork {
    /// Network reachable at `url` on WebSocket port `ws_port`.
    pub fn new(url: impl Into<String>, ws_port: u16) -> Self {
        Self {
            base: NetworkBase {
                url: url.into(),
                num_nodes: 1,
                ports: vec![Ports::ws_only(ws_port)],
            },
        }
    }
}
