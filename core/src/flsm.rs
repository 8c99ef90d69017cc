//! Fixed-length subnetting (FLSM): divide a network into N equal blocks.

use crate::error::SubnetError;
use crate::space::{ceil_log2, AddressSpace};

/// Splits `network` into the smallest power-of-two number of equal
/// subnets that is at least `count`, in ascending address order.
///
/// All resulting blocks are returned, so a count that is not a power of
/// two over-allocates (3 requested subnets yield 4). That is the FLSM
/// convention of equal-sized blocks, not an accident.
pub fn partition(network: &AddressSpace, count: u128) -> Result<Vec<AddressSpace>, SubnetError> {
    if count < 1 {
        return Err(SubnetError::InvalidCount(count));
    }

    let prefix_delta = ceil_log2(count);
    if prefix_delta == 0 {
        return Ok(vec![*network]);
    }

    let new_prefix = u32::from(network.prefix_len()) + prefix_delta;
    if new_prefix > u32::from(network.max_prefix_len()) {
        return Err(SubnetError::CapacityExceeded(format!(
            "{count} subnets need {prefix_delta} extra prefix bits, but {network} only has {}",
            network.max_prefix_len() - network.prefix_len()
        )));
    }

    Ok(network.subdivide(new_prefix as u8)?.collect())
}
