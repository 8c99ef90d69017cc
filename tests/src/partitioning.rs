#![cfg(test)]
use subnetr_core::{AddressSpace, NetworkSummary, SubnetError, flsm, vlsm};

/// Full walk of the calculator flow: parse the user's string, partition
/// and describe every resulting subnet the way the CLI does.
#[test]
fn parse_partition_describe_flow() {
    let network: AddressSpace = "192.168.10.77/24".parse().expect("valid network input");
    assert_eq!(
        network.to_string(),
        "192.168.10.0/24",
        "host bits must be masked off, not rejected"
    );

    let subnets = vlsm::partition(&network, &[100, 50, 20]).expect("requirements fit a /24");
    assert_eq!(subnets.len(), 3, "one subnet per requirement");

    for subnet in &subnets {
        let summary = NetworkSummary::describe(subnet);
        assert!(summary.is_private, "RFC1918 child of an RFC1918 parent");
        assert!(
            summary.first_usable.is_some() && summary.last_usable.is_some(),
            "every allocated subnet has a usable range"
        );
        assert!(network.contains(summary.network_address));
        assert!(network.contains(summary.broadcast));
    }
}

#[test]
fn subdivision_blocks_are_contiguous_and_cover_parent() {
    let parent: AddressSpace = "10.20.0.0/16".parse().unwrap();
    let blocks: Vec<AddressSpace> = parent.subdivide(20).unwrap().collect();

    assert_eq!(blocks.len(), 16, "4 extra prefix bits yield 16 blocks");

    let mut total: u128 = 0;
    for pair in blocks.windows(2) {
        let end = pair[0].broadcast_address();
        let next = pair[1].network_address();
        let (std::net::IpAddr::V4(end), std::net::IpAddr::V4(next)) = (end, next) else {
            panic!("v4 subdivision produced non-v4 blocks");
        };
        assert_eq!(
            u32::from(end) + 1,
            u32::from(next),
            "blocks must be adjacent with no gap"
        );
    }
    for block in &blocks {
        assert_eq!(block.prefix_len(), 20);
        total += block.num_addresses();
    }
    assert_eq!(total, parent.num_addresses(), "union must equal the parent");
}

#[test]
fn flsm_returns_all_equal_blocks() {
    let network: AddressSpace = "172.16.0.0/22".parse().unwrap();

    let exact = flsm::partition(&network, 8).unwrap();
    assert_eq!(exact.len(), 8);

    let rounded = flsm::partition(&network, 6).unwrap();
    assert_eq!(rounded.len(), 8, "6 subnets round up to the next power of two");

    let sizes: Vec<u128> = rounded.iter().map(|s| s.num_addresses()).collect();
    assert!(sizes.windows(2).all(|w| w[0] == w[1]), "FLSM blocks are equal-sized");
}

#[test]
fn vlsm_worked_example_from_the_classroom() {
    // 10.0.0.0/24 with 60 and 10 hosts: a /26 then a /28, back to back
    let network: AddressSpace = "10.0.0.0/24".parse().unwrap();
    let subnets = vlsm::partition(&network, &[60, 10]).unwrap();

    assert_eq!(subnets[0].to_string(), "10.0.0.0/26");
    assert_eq!(subnets[0].usable_host_count(), 62);
    assert_eq!(subnets[1].to_string(), "10.0.0.64/28");
    assert_eq!(subnets[1].usable_host_count(), 14);
}

#[test]
fn vlsm_is_all_or_nothing() {
    let network: AddressSpace = "10.0.0.0/30".parse().unwrap();
    let result = vlsm::partition(&network, &[10]);
    assert!(
        matches!(result, Err(SubnetError::CapacityExceeded(_))),
        "a /30 cannot hold 10 hosts: {result:?}"
    );
}

#[test]
fn parent_is_shareable_across_partition_calls() {
    // AddressSpace is immutable: two partitionings of the same parent
    // must not see each other.
    let network: AddressSpace = "10.0.0.0/24".parse().unwrap();

    let first = vlsm::partition(&network, &[60]).unwrap();
    let second = flsm::partition(&network, 4).unwrap();
    let third = vlsm::partition(&network, &[60]).unwrap();

    assert_eq!(first, third, "partitioning must not mutate the parent");
    assert_eq!(second[0].network_address(), network.network_address());
}

#[test]
fn v6_flow_mirrors_v4() {
    let network: AddressSpace = "2001:db8:abcd::/48".parse().unwrap();
    let summary = NetworkSummary::describe(&network);

    assert_eq!(summary.netmask.to_string(), "ffff:ffff:ffff::");
    assert!(!summary.is_private);
    // the uniform "-2" convention applies to v6 as well
    assert_eq!(summary.usable_hosts, (1u128 << 80) - 2);

    let subnets = flsm::partition(&network, 4).unwrap();
    assert_eq!(subnets.len(), 4);
    assert_eq!(subnets[3].to_string(), "2001:db8:abcd:c000::/50");
}
