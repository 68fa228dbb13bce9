//! Provisioning of sidechain test topologies: run parameters, port
//! allocation, network descriptions and the launch plan tying them together.
pub mod config;
pub mod network;
pub mod plan;
pub mod ports;

pub use config::{RunArgs, RunParams, RunParamsError};
pub use network::{Network, NetworkError};
pub use plan::{ExternalMainchain, LaunchPlan, PlanOptions};
pub use ports::{PortAllocator, PortRangeExhausted, Ports};
