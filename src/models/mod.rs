//! Domain models for range expansion and membership checks.
//!
//! - [`Ipv4Cidr`] - IPv4 network in CIDR notation
//! - [`RangeSpec`] - one parsed line of a range file
//! - [`AddressSet`] - the deduplicated, sorted address list

mod address_set;
mod ipv4;
mod range_spec;

// Re-export public types
pub use address_set::AddressSet;
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, netmask_to_prefix, Ipv4Cidr, MAX_LENGTH};
pub use range_spec::RangeSpec;
