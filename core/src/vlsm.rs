//! Variable-length subnetting (VLSM): allocate subnets sized to exact
//! host requirements, packed contiguously from the bottom of the parent.
//!
//! Allocation is a single left-to-right pass over the requirements in
//! descending order, threading one cursor (the next free, aligned
//! block) through the loop. Largest-first ordering is what keeps every
//! allocation on a correctly-aligned boundary; packing small blocks
//! first can fragment the space so a later large block no longer fits.

use std::cmp::Reverse;

use tracing::trace;

use crate::error::SubnetError;
use crate::space::{ceil_log2, AddressSpace};

/// Allocates one subnet per entry of `requirements` (usable host
/// counts), returned in allocation order: descending requirement size,
/// ties keeping their first-seen order.
///
/// All-or-nothing: if any requirement cannot be placed inside
/// `network`, the whole call fails and nothing is returned.
pub fn partition(
    network: &AddressSpace,
    requirements: &[u128],
) -> Result<Vec<AddressSpace>, SubnetError> {
    if let Some(&bad) = requirements.iter().find(|&&h| h < 1) {
        return Err(SubnetError::InvalidHostCount(bad));
    }

    let mut sorted = requirements.to_vec();
    // stable sort: equal requirements stay in input order
    sorted.sort_by_key(|&hosts| Reverse(hosts));

    let max = network.max_prefix_len();
    let mut cursor = Some(*network);
    let mut subnets = Vec::with_capacity(sorted.len());

    for &hosts in &sorted {
        let cursor_net = cursor.ok_or_else(|| {
            SubnetError::CapacityExceeded(format!(
                "no address space left in {network} for a {hosts}-host subnet"
            ))
        })?;

        // +2: the network and broadcast addresses ride along with every block.
        let host_bits = hosts
            .checked_add(2)
            .map(ceil_log2)
            .filter(|&bits| bits <= u32::from(max))
            .ok_or_else(|| {
                SubnetError::CapacityExceeded(format!(
                    "a {hosts}-host subnet does not fit any {:?} network",
                    network.family()
                ))
            })?;
        let child_prefix = max - host_bits as u8;

        if child_prefix < cursor_net.prefix_len() {
            return Err(SubnetError::CapacityExceeded(format!(
                "{hosts} hosts need a /{child_prefix}, but only a /{} remains of {network}",
                cursor_net.prefix_len()
            )));
        }

        let allocated = if child_prefix == cursor_net.prefix_len() {
            // exact fit: the cursor block itself is the subnet
            cursor_net
        } else {
            cursor_net
                .subdivide(child_prefix)?
                .next()
                .ok_or_else(|| {
                    SubnetError::CapacityExceeded(format!(
                        "subdividing {cursor_net} to /{child_prefix} produced no blocks"
                    ))
                })?
        };
        trace!("allocated {allocated} for {hosts} hosts");

        // Advance to the block right above the allocation, at the
        // allocation's own prefix; the next (smaller or equal)
        // requirement subdivides from there. A cursor that walks out of
        // the parent only matters if something still needs placing.
        cursor = allocated
            .next_block()
            .filter(|next| network.contains(next.network_address()));

        subnets.push(allocated);
    }

    Ok(subnets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> AddressSpace {
        s.parse().unwrap()
    }

    #[test]
    fn test_worked_example_60_and_10() {
        let subnets = partition(&net("10.0.0.0/24"), &[60, 10]).unwrap();
        assert_eq!(subnets.len(), 2);
        assert_eq!(subnets[0].to_string(), "10.0.0.0/26");
        assert_eq!(subnets[0].num_addresses(), 64);
        assert_eq!(subnets[1].to_string(), "10.0.0.64/28");
        assert_eq!(subnets[1].num_addresses(), 16);
    }

    #[test]
    fn test_descending_allocation_order() {
        let subnets = partition(&net("172.16.0.0/16"), &[50, 10, 200]).unwrap();
        // processed largest first: 200, 50, 10
        assert_eq!(subnets[0].usable_host_count(), 254);
        assert_eq!(subnets[1].usable_host_count(), 62);
        assert_eq!(subnets[2].usable_host_count(), 14);
        assert_eq!(subnets[0].to_string(), "172.16.0.0/24");
        assert_eq!(subnets[1].to_string(), "172.16.1.0/26");
        assert_eq!(subnets[2].to_string(), "172.16.1.64/28");
    }

    #[test]
    fn test_ties_keep_input_order_and_pack_adjacent() {
        let subnets = partition(&net("10.0.0.0/24"), &[20, 20, 20]).unwrap();
        assert_eq!(subnets[0].to_string(), "10.0.0.0/27");
        assert_eq!(subnets[1].to_string(), "10.0.0.32/27");
        assert_eq!(subnets[2].to_string(), "10.0.0.64/27");
    }

    #[test]
    fn test_every_subnet_satisfies_its_requirement() {
        let requirements = [100, 60, 25, 10, 2];
        let parent = net("192.168.0.0/24");
        let subnets = partition(&parent, &requirements).unwrap();

        assert_eq!(subnets.len(), requirements.len());
        for (subnet, &hosts) in subnets.iter().zip(&requirements) {
            assert!(
                subnet.usable_host_count() >= hosts,
                "{subnet} cannot hold {hosts} hosts"
            );
            assert!(parent.contains(subnet.network_address()));
            assert!(parent.contains(subnet.broadcast_address()));
        }

        // pairwise disjoint
        for (i, a) in subnets.iter().enumerate() {
            for b in subnets.iter().skip(i + 1) {
                assert!(
                    !a.contains(b.network_address()) && !b.contains(a.network_address()),
                    "{a} overlaps {b}"
                );
            }
        }
    }

    #[test]
    fn test_exact_fit_consumes_whole_parent() {
        let subnets = partition(&net("10.0.0.0/24"), &[254]).unwrap();
        assert_eq!(subnets, vec![net("10.0.0.0/24")]);
    }

    #[test]
    fn test_requirement_too_large_for_parent() {
        let err = partition(&net("10.0.0.0/30"), &[10]).unwrap_err();
        assert!(matches!(err, SubnetError::CapacityExceeded(_)));
    }

    #[test]
    fn test_requirements_exceed_parent_in_aggregate() {
        // three /25-sized requirements cannot fit a /24
        let err = partition(&net("10.0.0.0/24"), &[100, 100, 100]).unwrap_err();
        assert!(matches!(err, SubnetError::CapacityExceeded(_)));
    }

    #[test]
    fn test_failure_returns_no_partial_result() {
        // first two fit, third does not; the call must fail as a whole
        let result = partition(&net("10.0.0.0/25"), &[50, 50, 50]);
        assert!(matches!(result, Err(SubnetError::CapacityExceeded(_))));
    }

    #[test]
    fn test_zero_host_requirement_is_invalid() {
        assert_eq!(
            partition(&net("10.0.0.0/24"), &[10, 0, 5]),
            Err(SubnetError::InvalidHostCount(0))
        );
    }

    #[test]
    fn test_v6_allocation() {
        let subnets = partition(&net("2001:db8::/32"), &[1000, 100]).unwrap();
        // 1002 -> 10 host bits, 102 -> 7 host bits
        assert_eq!(subnets[0].to_string(), "2001:db8::/118");
        assert_eq!(subnets[1].to_string(), "2001:db8::400/121");
    }
}
