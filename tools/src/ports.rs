//! Port allocation. Every config index owns a contiguous block of
//! [`PORTS_PER_NODE`] ports, so nodes of one run never share a port.

/// Number of ports reserved for every node.
pub const PORTS_PER_NODE: u16 = 4;
/// First port of the block of config index 0, unless configured otherwise.
pub const DEFAULT_BASE_PORT: u16 = 5005;

/// Ports a single node listens on. Generated ports set every field;
/// an external network only knows its public WebSocket port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Ports {
    /// Peer protocol port.
    pub peer_port: Option<u16>,
    /// Admin JSON-RPC (HTTP) port.
    pub http_admin_port: Option<u16>,
    /// Public WebSocket port.
    pub ws_public_port: Option<u16>,
    /// Admin WebSocket port.
    pub ws_admin_port: Option<u16>,
}

impl Ports {
    /// Ports of a node reachable only through its public WebSocket.
    pub fn ws_only(ws_port: u16) -> Self {
        Self {
            ws_public_port: Some(ws_port),
            ..Self::default()
        }
    }

    /// All ports that are set, in field order.
    pub fn assigned(&self) -> impl Iterator<Item = u16> {
        [
            self.peer_port,
            self.http_admin_port,
            self.ws_public_port,
            self.ws_admin_port,
        ]
        .into_iter()
        .flatten()
    }
}

/// Returned when a config index would need ports above 65535.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("port range exhausted: config index {index} needs ports above 65535 (base port {base})")]
pub struct PortRangeExhausted {
    /// Config index that did not fit.
    pub index: usize,
    /// Base port of the allocator.
    pub base: u16,
}

/// Computes the port block of a config index: `base + index * PORTS_PER_NODE`,
/// with the peer, HTTP admin, public WebSocket and admin WebSocket ports at
/// offsets 0 to 3 of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortAllocator {
    base: u16,
}

impl Default for PortAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PORT)
    }
}

impl PortAllocator {
    /// Allocator whose config index 0 starts at `base`.
    pub fn new(base: u16) -> Self {
        Self { base }
    }

    /// Ports of config index `index`.
    pub fn allocate(&self, index: usize) -> Result<Ports, PortRangeExhausted> {
        let err = PortRangeExhausted {
            index,
            base: self.base,
        };
        let block = index
            .checked_mul(PORTS_PER_NODE.into())
            .and_then(|offset| offset.checked_add(self.base.into()))
            .filter(|block| *block <= usize::from(u16::MAX - (PORTS_PER_NODE - 1)))
            .ok_or(err)?;
        let block = u16::try_from(block).map_err(|_| err)?;
        Ok(Ports {
            peer_port: Some(block),
            http_admin_port: Some(block + 1),
            ws_public_port: Some(block + 2),
            ws_admin_port: Some(block + 3),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    #[test]
    fn test_block_layout() {
        let ports = PortAllocator::new(6000).allocate(2).unwrap();
        assert_eq!(
            ports,
            Ports {
                peer_port: Some(6008),
                http_admin_port: Some(6009),
                ws_public_port: Some(6010),
                ws_admin_port: Some(6011),
            }
        );
    }

    #[test]
    fn test_distinct_across_indices() {
        let allocator = PortAllocator::default();
        let mut seen = HashSet::new();
        for index in 0..1000 {
            let ports = allocator.allocate(index).unwrap();
            assert_eq!(ports.assigned().count(), PORTS_PER_NODE as usize);
            for port in ports.assigned() {
                assert!(seen.insert(port), "port {port} of index {index} already used");
            }
        }
    }

    #[test]
    fn test_allocation_is_pure() {
        let allocator = PortAllocator::new(7000);
        assert_eq!(allocator.allocate(5).unwrap(), allocator.allocate(5).unwrap());
    }

    #[test]
    fn test_last_block_fits() {
        // 65532..=65535 is the last full block when the base is a multiple of 4.
        let allocator = PortAllocator::new(0);
        let last = (usize::from(u16::MAX) + 1) / usize::from(PORTS_PER_NODE) - 1;
        let ports = allocator.allocate(last).unwrap();
        assert_eq!(ports.ws_admin_port, Some(u16::MAX));
        assert_matches!(
            allocator.allocate(last + 1),
            Err(PortRangeExhausted { index, base: 0 }) if index == last + 1
        );
    }

    #[test]
    fn test_huge_index_does_not_overflow() {
        assert_matches!(PortAllocator::default().allocate(usize::MAX), Err(_));
    }

    #[test]
    fn test_ws_only() {
        let ports = Ports::ws_only(6006);
        assert_eq!(ports.assigned().collect::<Vec<_>>(), vec![6006]);
        assert_eq!(ports.peer_port, None);
        assert_eq!(ports.http_admin_port, None);
        assert_eq!(ports.ws_admin_port, None);
    }
}
