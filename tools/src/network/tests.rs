use super::*;
use crate::ports::PortAllocator;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use slk_crypto::TextFmt as _;
use slk_roles::{testonly::SeededBackend, OsBackend};
use std::collections::HashSet;
use test_casing::test_casing;

fn all_ports(network: &Network) -> Vec<u16> {
    network.ports().iter().flat_map(|p| p.assigned()).collect()
}

#[test]
fn test_standalone_shape() {
    for num_nodes in 1..=5 {
        let network =
            StandaloneNetwork::new(&OsBackend, &PortAllocator::default(), num_nodes, 0).unwrap();
        assert_eq!(network.base.num_nodes, num_nodes);
        assert_eq!(network.base.ports.len(), num_nodes);
        assert_eq!(network.validator_keypairs.len(), num_nodes);
        assert_eq!(network.base.url, LOCALHOST);
        for keypair in &network.validator_keypairs {
            assert!(keypair.public_key.starts_with('n'));
            assert_eq!(keypair.account_id, None);
        }
    }
}

#[test]
fn test_standalone_rejects_empty() {
    assert_matches!(
        StandaloneNetwork::new(&OsBackend, &PortAllocator::default(), 0, 0),
        Err(NetworkError::NoNodes)
    );
}

#[test]
fn test_standalone_uses_consecutive_cfg_indices() {
    let allocator = PortAllocator::new(6000);
    let network = StandaloneNetwork::new(&OsBackend, &allocator, 3, 2).unwrap();
    for (i, ports) in network.base.ports.iter().enumerate() {
        assert_eq!(*ports, allocator.allocate(2 + i).unwrap());
    }
}

#[test]
fn test_standalone_port_exhaustion() {
    let allocator = PortAllocator::new(65530);
    assert_matches!(
        StandaloneNetwork::new(&OsBackend, &allocator, 3, 0),
        Err(NetworkError::Ports(_))
    );
}

#[test]
fn test_external_network() {
    let network: Network = ExternalNetwork::new("203.0.113.5", 6006).into();
    assert_eq!(network.url(), "203.0.113.5");
    assert_eq!(network.num_nodes(), 1);
    assert_eq!(network.ports(), &[Ports::ws_only(6006)]);
    assert_eq!(network.ports()[0].ws_public_port, Some(6006));
    assert_eq!(network.ports()[0].peer_port, None);
    assert_eq!(network.ports()[0].http_admin_port, None);
    assert_eq!(network.ports()[0].ws_admin_port, None);
    assert!(network.validator_keypairs().is_none());
    assert!(network.as_sidechain().is_none());
}

#[test_casing(8, [1, 2, 3, 4, 5, 6, 7, 8])]
fn test_sidechain_default_num_nodes(num_federators: usize) {
    let layout = SidechainLayout {
        num_federators,
        ..SidechainLayout::default()
    };
    let network = SidechainNetwork::new(&OsBackend, &PortAllocator::default(), &layout).unwrap();
    assert_eq!(network.num_federators, num_federators);
    assert_eq!(network.federator_keypairs.len(), num_federators);
    assert_eq!(network.standalone.base.num_nodes, num_federators);
    assert_eq!(network.standalone.validator_keypairs.len(), num_federators);
    assert_eq!(network.standalone.base.ports.len(), num_federators);
}

#[test]
fn test_sidechain_three_federators() {
    let layout = SidechainLayout {
        num_federators: 3,
        start_cfg_index: 0,
        ..SidechainLayout::default()
    };
    let network: Network = SidechainNetwork::new(&OsBackend, &PortAllocator::default(), &layout)
        .unwrap()
        .into();
    assert_eq!(network.num_nodes(), 3);

    let ports = all_ports(&network);
    assert_eq!(ports.len(), 12);
    assert_eq!(ports.iter().collect::<HashSet<_>>().len(), 12);

    assert_eq!(network.validator_keypairs().unwrap().len(), 3);
    let sidechain = network.as_sidechain().unwrap();
    assert_eq!(sidechain.federator_keypairs.len(), 3);
    for keypair in &sidechain.federator_keypairs {
        assert!(keypair.public_key.starts_with('a'));
        assert!(keypair.secret_key.starts_with("sEd"));
        assert!(keypair.account_id.is_some());
    }
    let door = sidechain.main_account_keypair();
    assert!(door.account_id.unwrap().starts_with('r'));
}

#[test]
fn test_sidechain_extra_nodes() {
    let layout = SidechainLayout {
        num_federators: 2,
        num_nodes: Some(5),
        ..SidechainLayout::default()
    };
    let network = SidechainNetwork::new(&OsBackend, &PortAllocator::default(), &layout).unwrap();
    assert_eq!(network.standalone.base.num_nodes, 5);
    assert_eq!(network.standalone.validator_keypairs.len(), 5);
    assert_eq!(network.federator_keypairs.len(), 2);
}

#[test]
fn test_sidechain_too_few_nodes() {
    let layout = SidechainLayout {
        num_federators: 4,
        num_nodes: Some(3),
        ..SidechainLayout::default()
    };
    assert_matches!(
        SidechainNetwork::new(&OsBackend, &PortAllocator::default(), &layout),
        Err(NetworkError::TooFewNodes {
            num_nodes: 3,
            num_federators: 4
        })
    );
}

#[test_casing(2, [0, 9])]
fn test_sidechain_federator_count_out_of_range(num_federators: usize) {
    let layout = SidechainLayout {
        num_federators,
        num_nodes: Some(10),
        ..SidechainLayout::default()
    };
    let err = SidechainNetwork::new(&OsBackend, &PortAllocator::default(), &layout).unwrap_err();
    assert_matches!(err, NetworkError::FederatorCount(n) if n == num_federators);
    assert!(err.to_string().contains("[1, 8]"));
}

#[test]
fn test_sidechain_pinned_door_seed() {
    let layout = SidechainLayout {
        num_federators: 2,
        main_door_seed: Some("snoPBrXtMeMyMHUVTgbuqAfg1SUTb".to_owned()),
        ..SidechainLayout::default()
    };
    let a = SidechainNetwork::new(&OsBackend, &PortAllocator::default(), &layout).unwrap();
    let b = SidechainNetwork::new(&OsBackend, &PortAllocator::default(), &layout).unwrap();
    assert_eq!(
        a.main_account.classic_address(),
        b.main_account.classic_address()
    );
    assert_eq!(
        a.main_account.classic_address().encode(),
        "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"
    );
    // Everything that is not pinned is still fresh.
    assert_ne!(a.federator_keypairs, b.federator_keypairs);
}

#[test]
fn test_sidechain_fresh_door_account() {
    let layout = SidechainLayout {
        num_federators: 1,
        ..SidechainLayout::default()
    };
    let a = SidechainNetwork::new(&OsBackend, &PortAllocator::default(), &layout).unwrap();
    let b = SidechainNetwork::new(&OsBackend, &PortAllocator::default(), &layout).unwrap();
    assert_ne!(
        a.main_account.classic_address(),
        b.main_account.classic_address()
    );
}

#[test]
fn test_sidechain_invalid_door_seed() {
    let layout = SidechainLayout {
        num_federators: 1,
        main_door_seed: Some("not-a-seed".to_owned()),
        ..SidechainLayout::default()
    };
    assert_matches!(
        SidechainNetwork::new(&OsBackend, &PortAllocator::default(), &layout),
        Err(NetworkError::InvalidSeed(_))
    );
}

#[test]
fn test_sidechain_is_reproducible_with_seeded_backend() {
    let layout = SidechainLayout {
        num_federators: 3,
        num_nodes: Some(4),
        start_cfg_index: 1,
        main_door_seed: None,
    };
    let a = SidechainNetwork::new(&SeededBackend::new(7), &PortAllocator::default(), &layout)
        .unwrap();
    let b = SidechainNetwork::new(&SeededBackend::new(7), &PortAllocator::default(), &layout)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_validator_and_federator_encodings_differ() {
    let layout = SidechainLayout {
        num_federators: 8,
        ..SidechainLayout::default()
    };
    let network = SidechainNetwork::new(&OsBackend, &PortAllocator::default(), &layout).unwrap();
    let validators: HashSet<_> = network
        .standalone
        .validator_keypairs
        .iter()
        .map(|k| k.public_key.clone())
        .collect();
    for federator in &network.federator_keypairs {
        assert!(!validators.contains(&federator.public_key));
    }
}

#[test]
fn test_serialized_shape() {
    let layout = SidechainLayout {
        num_federators: 1,
        ..SidechainLayout::default()
    };
    let network: Network =
        SidechainNetwork::new(&SeededBackend::new(1), &PortAllocator::new(6000), &layout)
            .unwrap()
            .into();
    let json = serde_json::to_value(&network).unwrap();
    assert_eq!(json["kind"], "sidechain");
    assert_eq!(json["url"], LOCALHOST);
    assert_eq!(json["num_nodes"], 1);
    assert_eq!(json["num_federators"], 1);
    assert_eq!(json["ports"][0]["peer_port"], 6000);
    assert_eq!(json["ports"][0]["ws_admin_port"], 6003);
    assert!(json["validator_keypairs"][0].get("account_id").is_none());
    assert!(json["federator_keypairs"][0]["account_id"].is_string());
    assert!(json["main_account"]["account_id"].is_string());
}
