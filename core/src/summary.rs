//! Read-only report view of a network: the fields the console and file
//! renderers print, derived once so both stay in lockstep.

use std::net::IpAddr;

use crate::space::AddressSpace;

/// Derived display attributes of one [`AddressSpace`]. Plain data; no
/// state of its own and no failure modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub network_address: IpAddr,
    pub netmask: IpAddr,
    pub prefix_len: u8,
    pub is_private: bool,
    pub is_link_local: bool,
    pub usable_hosts: u128,
    /// `None` when the network is too small to have one (a /32 or /128).
    pub first_usable: Option<IpAddr>,
    /// `None` when the network is too small to have one.
    pub last_usable: Option<IpAddr>,
    /// Highest address; the broadcast address on IPv4.
    pub broadcast: IpAddr,
}

impl NetworkSummary {
    pub fn describe(network: &AddressSpace) -> Self {
        Self {
            network_address: network.network_address(),
            netmask: network.netmask(),
            prefix_len: network.prefix_len(),
            is_private: network.is_private(),
            is_link_local: network.is_link_local(),
            usable_hosts: network.usable_host_count(),
            first_usable: network.first_usable().ok(),
            last_usable: network.last_usable().ok(),
            broadcast: network.broadcast_address(),
        }
    }
}
