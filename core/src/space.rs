//! # Address Space Model
//!
//! Defines [`AddressSpace`], one contiguous IP network of either family,
//! and the bit-level arithmetic the partitioners are built on.
//!
//! The base address is kept as a `u128` regardless of family (IPv4 uses
//! the low 32 bits), so offset and boundary arithmetic is uniform and
//! never needs to widen mid-computation.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::SubnetError;

/// RFC1918 private blocks, as (base, prefix) over the low 32 bits.
const V4_PRIVATE: [(u128, u8); 3] = [
    (0x0A00_0000, 8),  // 10.0.0.0/8
    (0xAC10_0000, 12), // 172.16.0.0/12
    (0xC0A8_0000, 16), // 192.168.0.0/16
];

/// fc00::/7, the RFC4193 unique-local block.
const V6_PRIVATE: (u128, u8) = (0xfc00_0000_0000_0000_0000_0000_0000_0000, 7);

/// 169.254.0.0/16 (RFC3927).
const V4_LINK_LOCAL: (u128, u8) = (0xA9FE_0000, 16);

/// fe80::/10 (RFC4291).
const V6_LINK_LOCAL: (u128, u8) = (0xfe80_0000_0000_0000_0000_0000_0000_0000, 10);

/// IP address family of an [`AddressSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Bit width of an address: 32 for IPv4, 128 for IPv6.
    pub fn max_prefix_len(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }
}

/// One contiguous IP network: family, base address and prefix length.
///
/// Invariants, enforced at every construction site:
/// * the base address has no host bits set,
/// * `prefix <= family.max_prefix_len()`.
///
/// Values are immutable; partitioning produces new `AddressSpace`s and
/// never touches the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressSpace {
    family: Family,
    base: u128,
    prefix: u8,
}

impl AddressSpace {
    /// Builds a network from an address and prefix length.
    ///
    /// The host portion is masked off rather than rejected, matching the
    /// non-strict interpretation: `10.0.0.77/24` yields `10.0.0.0/24`.
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Self, SubnetError> {
        let family = match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        };
        if prefix > family.max_prefix_len() {
            return Err(SubnetError::InvalidAddress {
                input: format!("{addr}/{prefix}"),
                reason: format!(
                    "prefix /{prefix} exceeds /{} for this family",
                    family.max_prefix_len()
                ),
            });
        }
        let bits = match addr {
            IpAddr::V4(v4) => u128::from(u32::from(v4)),
            IpAddr::V6(v6) => u128::from(v6),
        };
        let space = Self {
            family,
            base: 0,
            prefix,
        };
        Ok(Self {
            base: bits & space.netmask_bits(),
            ..space
        })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    /// Bit width of the family: 32 for IPv4, 128 for IPv6.
    pub fn max_prefix_len(&self) -> u8 {
        self.family.max_prefix_len()
    }

    /// All-ones over the host bits, e.g. `0x0000_00ff` for an IPv4 /24.
    fn host_mask(&self) -> u128 {
        let host_bits = self.max_prefix_len() - self.prefix;
        if host_bits >= 128 {
            u128::MAX
        } else {
            (1u128 << host_bits) - 1
        }
    }

    /// Netmask over the family's bit width.
    fn netmask_bits(&self) -> u128 {
        let width_mask = if self.max_prefix_len() >= 128 {
            u128::MAX
        } else {
            (1u128 << self.max_prefix_len()) - 1
        };
        width_mask & !self.host_mask()
    }

    fn addr_from_bits(&self, bits: u128) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(bits as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(bits)),
        }
    }

    /// The network (lowest) address.
    pub fn network_address(&self) -> IpAddr {
        self.addr_from_bits(self.base)
    }

    /// The netmask in address form: dotted-quad for v4, colon-hex for v6.
    pub fn netmask(&self) -> IpAddr {
        self.addr_from_bits(self.netmask_bits())
    }

    /// The highest address of the network. For IPv4 this is the
    /// broadcast address; for IPv6 it is simply the last address, kept
    /// under the same name for report symmetry.
    pub fn broadcast_address(&self) -> IpAddr {
        self.addr_from_bits(self.base | self.host_mask())
    }

    /// Total number of addresses, `2^(max_prefix_len - prefix)`.
    ///
    /// Saturates at `u128::MAX` for `::/0`, whose true count (2^128)
    /// does not fit a u128. Every other network is exact.
    pub fn num_addresses(&self) -> u128 {
        let host_bits = self.max_prefix_len() - self.prefix;
        if host_bits >= 128 {
            u128::MAX
        } else {
            1u128 << host_bits
        }
    }

    /// Usable host addresses: `num_addresses - 2`, reserving the network
    /// and broadcast addresses. Applied to IPv6 as well even though v6
    /// has no broadcast convention; the calculator deliberately keeps
    /// the uniform `-2` of its subnetting-education lineage rather than
    /// special-casing the family. Saturates to 0 for /31 and /32.
    pub fn usable_host_count(&self) -> u128 {
        self.num_addresses().saturating_sub(2)
    }

    /// The address `n` steps above the network address.
    pub fn address_at(&self, n: u128) -> Result<IpAddr, SubnetError> {
        if n >= self.num_addresses() {
            return Err(SubnetError::OutOfRange {
                offset: n,
                size: self.num_addresses(),
            });
        }
        Ok(self.addr_from_bits(self.base + n))
    }

    /// First usable host address (offset 1). Errors on a /32 (or v6
    /// /128), which has no address beyond the network address itself.
    pub fn first_usable(&self) -> Result<IpAddr, SubnetError> {
        self.address_at(1)
    }

    /// Last usable host address (offset `num_addresses - 2`). Errors on
    /// single-address networks.
    pub fn last_usable(&self) -> Result<IpAddr, SubnetError> {
        let size = self.num_addresses();
        let offset = size
            .checked_sub(2)
            .ok_or(SubnetError::OutOfRange { offset: size, size })?;
        self.address_at(offset)
    }

    /// Whether `addr` falls inside this network's range.
    pub fn contains(&self, addr: IpAddr) -> bool {
        let bits = match (self.family, addr) {
            (Family::V4, IpAddr::V4(v4)) => u128::from(u32::from(v4)),
            (Family::V6, IpAddr::V6(v6)) => u128::from(v6),
            _ => return false,
        };
        self.contains_bits(bits)
    }

    pub(crate) fn contains_bits(&self, bits: u128) -> bool {
        bits >= self.base && bits <= (self.base | self.host_mask())
    }

    /// Whether this whole network sits inside the (base, prefix) block.
    fn within(&self, block: (u128, u8)) -> bool {
        let (block_base, block_prefix) = block;
        if self.prefix < block_prefix {
            return false;
        }
        let probe = Self {
            family: self.family,
            base: block_base,
            prefix: block_prefix,
        };
        probe.contains_bits(self.base)
    }

    /// RFC1918 (v4) / RFC4193 unique-local (v6) membership.
    pub fn is_private(&self) -> bool {
        match self.family {
            Family::V4 => V4_PRIVATE.iter().any(|&block| self.within(block)),
            Family::V6 => self.within(V6_PRIVATE),
        }
    }

    /// RFC3927 169.254.0.0/16 (v4) / RFC4291 fe80::/10 (v6) membership.
    pub fn is_link_local(&self) -> bool {
        match self.family {
            Family::V4 => self.within(V4_LINK_LOCAL),
            Family::V6 => self.within(V6_LINK_LOCAL),
        }
    }

    /// Splits this network into `2^(new_prefix - prefix)` equal children
    /// at `new_prefix`, yielded in ascending address order.
    ///
    /// The split is lazy so that callers needing only the first child
    /// (VLSM) never materialize a huge v6 subdivision.
    pub fn subdivide(&self, new_prefix: u8) -> Result<Subdivision, SubnetError> {
        let max = self.max_prefix_len();
        if new_prefix <= self.prefix || new_prefix > max {
            return Err(SubnetError::InvalidPrefix {
                requested: new_prefix,
                min: self.prefix + 1,
                max,
            });
        }
        let child = Self {
            family: self.family,
            base: self.base,
            prefix: new_prefix,
        };
        // Base of the highest child: clear the child's host bits out of
        // this network's full host mask.
        let last = self.base | (self.host_mask() & !child.host_mask());
        Ok(Subdivision {
            family: self.family,
            prefix: new_prefix,
            step: child.host_mask().saturating_add(1),
            next: self.base,
            last,
            done: false,
        })
    }

    /// The adjacent block of the same size immediately above this one,
    /// or `None` at the top of the address space.
    pub(crate) fn next_block(&self) -> Option<Self> {
        let top = self.base | self.host_mask();
        let next_base = top.checked_add(1)?;
        if self.family == Family::V4 && next_base > u128::from(u32::MAX) {
            return None;
        }
        Some(Self {
            family: self.family,
            base: next_base,
            prefix: self.prefix,
        })
    }
}

impl fmt::Display for AddressSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network_address(), self.prefix)
    }
}

impl FromStr for AddressSpace {
    type Err = SubnetError;

    /// Parses `address/prefix` notation for either family, e.g.
    /// `192.168.1.0/24` or `2001:db8::/32`. A bare address is accepted
    /// as a host network at the family's full prefix length. Host bits
    /// below the prefix are masked off, not rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = |reason: String| SubnetError::InvalidAddress {
            input: trimmed.to_string(),
            reason,
        };

        let (addr_str, prefix_str) = match trimmed.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (trimmed, None),
        };

        let addr: IpAddr = addr_str
            .parse()
            .map_err(|e| invalid(format!("bad address '{addr_str}': {e}")))?;

        let max = match addr {
            IpAddr::V4(_) => Family::V4.max_prefix_len(),
            IpAddr::V6(_) => Family::V6.max_prefix_len(),
        };
        let prefix = match prefix_str {
            Some(p) => p
                .parse::<u8>()
                .ok()
                .filter(|&p| p <= max)
                .ok_or_else(|| invalid(format!("bad prefix '{p}': expected 0..={max}")))?,
            None => max,
        };

        Self::new(addr, prefix)
    }
}

/// Lazy, ascending iterator over the children of a subdivision.
#[derive(Debug, Clone)]
pub struct Subdivision {
    family: Family,
    prefix: u8,
    step: u128,
    next: u128,
    last: u128,
    done: bool,
}

impl Iterator for Subdivision {
    type Item = AddressSpace;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = AddressSpace {
            family: self.family,
            base: self.next,
            prefix: self.prefix,
        };
        if self.next == self.last {
            // End tracked by comparison, not count: a full ::/0 -> /128
            // split has 2^128 children, which no counter can hold.
            self.done = true;
        } else {
            self.next += self.step;
        }
        Some(current)
    }
}

/// `ceil(log2(n))` for `n >= 1`, without floating point.
pub(crate) fn ceil_log2(n: u128) -> u32 {
    if n <= 1 {
        0
    } else {
        128 - (n - 1).leading_zeros()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
