//! IPv4 CIDR block arithmetic.
//!
//! Provides [`Ipv4Cidr`] for representing a network in `addr/prefix` notation,
//! along with the mask helpers used to enumerate its usable hosts.

use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cdn_ip_checker::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Convert a dotted mask to a prefix length.
///
/// Tried as a netmask first (`255.255.255.0` is /24), then as a hostmask
/// (`0.0.0.255` is /24). `0.0.0.0` is therefore /0.
pub fn netmask_to_prefix(netmask: Ipv4Addr) -> Result<u8, Box<dyn Error>> {
    let bits = u32::from(netmask);
    let len = bits.leading_ones() as u8;
    if get_cidr_mask(len)? == bits {
        return Ok(len);
    }
    let len = (!bits).leading_ones() as u8;
    if get_cidr_mask(len)? == !bits {
        return Ok(len);
    }
    Err(format!("Invalid netmask {netmask}").into())
}

/// IPv4 network in CIDR notation.
///
/// Host bits in `addr` are kept as given; [`Ipv4Cidr::lo`] and [`Ipv4Cidr::hi`]
/// mask them away.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Cidr {
    /// The IPv4 address as written, host bits included.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Ipv4Cidr {
    /// Create a new [`Ipv4Cidr`] from a CIDR string (e.g. "10.0.0.0/24").
    ///
    /// The prefix may also be a dotted netmask ("10.0.0.0/255.255.255.0").
    pub fn new(addr_cidr: &str) -> Result<Ipv4Cidr, Box<dyn Error>> {
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err("Invalid address/mask".into());
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        let mask = parse_prefix(parts[1])?;
        Ok(Ipv4Cidr { addr, mask })
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        // mask <= MAX_LENGTH is guaranteed by the constructor
        cut_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// Number of addresses yielded by [`Ipv4Cidr::hosts`].
    pub fn num_hosts(&self) -> u64 {
        let total = 1u64 << (MAX_LENGTH - self.mask.min(MAX_LENGTH));
        if self.mask >= MAX_LENGTH - 1 {
            total
        } else {
            total - 2
        }
    }

    /// Iterate the usable host addresses of the block.
    ///
    /// Network and broadcast addresses are skipped, except for /31 and /32
    /// which have no such pair and yield every address they hold.
    pub fn hosts(&self) -> impl Iterator<Item = Ipv4Addr> {
        let lo = u32::from(self.lo());
        let hi = u32::from(self.hi());
        let (first, last) = if self.mask >= MAX_LENGTH - 1 {
            (lo, hi)
        } else {
            (lo + 1, hi - 1)
        };
        (first..=last).map(Ipv4Addr::from)
    }
}

fn parse_prefix(prefix: &str) -> Result<u8, Box<dyn Error>> {
    if prefix.contains('.') {
        let netmask = Ipv4Addr::from_str(prefix).map_err(|_| format!("Invalid netmask {prefix}"))?;
        return netmask_to_prefix(netmask);
    }
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid prefix length {prefix}").into());
    }
    let mask: u8 = prefix
        .parse()
        .map_err(|_| format!("Invalid prefix length {prefix}"))?;
    if mask > MAX_LENGTH {
        return Err("Network length is too long".into());
    }
    Ok(mask)
}

impl FromStr for Ipv4Cidr {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Cidr::new(s)
    }
}
