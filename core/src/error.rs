use thiserror::Error;

/// Failures raised by the calculator core.
///
/// The core never catches its own errors; callers decide whether a
/// variant is recoverable (re-prompt the user) or fatal (abort the
/// operation).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubnetError {
    /// The input could not be parsed as `address/prefix` in either family.
    #[error("invalid network '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    /// Subdivision requested at a prefix outside `(current, max]`.
    #[error("invalid prefix /{requested}: must be in /{min}..=/{max}")]
    InvalidPrefix { requested: u8, min: u8, max: u8 },

    /// FLSM subnet count below 1.
    #[error("subnet count must be at least 1, got {0}")]
    InvalidCount(u128),

    /// VLSM host requirement below 1.
    #[error("host requirement must be at least 1, got {0}")]
    InvalidHostCount(u128),

    /// The requested partitioning does not fit the parent network.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// Address offset beyond the network's address count.
    #[error("offset {offset} out of range for a network of {size} addresses")]
    OutOfRange { offset: u128, size: u128 },
}
