//! Calculation core of subnetr: IP network arithmetic and subnet
//! partitioning for IPv4 and IPv6.
//!
//! Everything in this crate is a pure, synchronous computation over
//! immutable values. Console and file concerns live in the CLI crate.

pub mod error;
pub mod flsm;
pub mod space;
pub mod summary;
pub mod vlsm;

pub use error::SubnetError;
pub use space::{AddressSpace, Family};
pub use summary::NetworkSummary;
