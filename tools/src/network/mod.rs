//! Network topologies of a test run.
//!
//! Three shapes exist: a [`StandaloneNetwork`] of generated validators, an
//! [`ExternalNetwork`] that is already running somewhere else, and a
//! [`SidechainNetwork`] that adds federators and a mainchain door account on
//! top of a standalone network. [`Network`] holds any of them.

use crate::ports::{PortRangeExhausted, Ports};
use slk_roles::Keypair;

mod sidechain;
mod standalone;
#[cfg(test)]
mod tests;

pub use sidechain::{SidechainLayout, SidechainNetwork};
pub use standalone::{ExternalNetwork, StandaloneNetwork};

/// Host of every generated network.
pub const LOCALHOST: &str = "127.0.0.1";

/// Errors detected while constructing a network. Nothing is returned on
/// error, so a partially constructed network is never observable.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// A network needs at least one node.
    #[error("a network needs at least one node")]
    NoNodes,
    /// Federator count outside of `[MIN_FEDERATORS, MAX_FEDERATORS]`.
    #[error("invalid number of federators: expected a value in [1, 8] (inclusive), received {0}")]
    FederatorCount(usize),
    /// The node count override leaves some federators without a node.
    #[error(
        "sidechain has {num_nodes} nodes but {num_federators} federators: \
         every federator needs its own node"
    )]
    TooFewNodes {
        /// Requested number of nodes.
        num_nodes: usize,
        /// Requested number of federators.
        num_federators: usize,
    },
    /// The node indices ran past the last port.
    #[error(transparent)]
    Ports(#[from] PortRangeExhausted),
    /// The main door seed does not parse.
    #[error("invalid main door seed")]
    InvalidSeed(#[source] anyhow::Error),
    /// Deriving a key pair failed.
    #[error("key generation failed")]
    Keys(#[source] anyhow::Error),
}

/// Fields shared by all network shapes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NetworkBase {
    /// Host the nodes are reachable at.
    pub url: String,
    /// Number of nodes, at least 1.
    pub num_nodes: usize,
    /// Ports of every node, in node order. `ports.len() == num_nodes`.
    pub ports: Vec<Ports>,
}

/// Any network shape.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Network {
    /// Generated validators.
    Standalone(StandaloneNetwork),
    /// A network managed outside of this run.
    External(ExternalNetwork),
    /// Generated validators plus federators and a door account.
    Sidechain(SidechainNetwork),
}

impl Network {
    /// Shared fields.
    pub fn base(&self) -> &NetworkBase {
        match self {
            Self::Standalone(n) => &n.base,
            Self::External(n) => &n.base,
            Self::Sidechain(n) => &n.standalone.base,
        }
    }

    /// Host the nodes are reachable at.
    pub fn url(&self) -> &str {
        &self.base().url
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.base().num_nodes
    }

    /// Ports of every node, in node order.
    pub fn ports(&self) -> &[Ports] {
        &self.base().ports
    }

    /// Validator identities, in node order. `None` for external networks,
    /// whose identities are managed elsewhere.
    pub fn validator_keypairs(&self) -> Option<&[Keypair]> {
        match self {
            Self::Standalone(n) => Some(&n.validator_keypairs),
            Self::External(_) => None,
            Self::Sidechain(n) => Some(&n.standalone.validator_keypairs),
        }
    }

    /// The sidechain view of this network, if it is one.
    pub fn as_sidechain(&self) -> Option<&SidechainNetwork> {
        match self {
            Self::Sidechain(n) => Some(n),
            _ => None,
        }
    }
}

impl From<StandaloneNetwork> for Network {
    fn from(n: StandaloneNetwork) -> Self {
        Self::Standalone(n)
    }
}

impl From<ExternalNetwork> for Network {
    fn from(n: ExternalNetwork) -> Self {
        Self::External(n)
    }
}

impl From<SidechainNetwork> for Network {
    fn from(n: SidechainNetwork) -> Self {
        Self::Sidechain(n)
    }
}
