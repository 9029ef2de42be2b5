//! One line of a range input file.

use super::Ipv4Cidr;
use crate::error::CheckerError;
use std::net::Ipv4Addr;

/// A parsed network specification from a range file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSpec {
    /// Bare address, stored as written without validation.
    Single(String),
    /// Inclusive `start-end` address range.
    Range { start: Ipv4Addr, end: Ipv4Addr },
    /// CIDR block, expanded to its usable hosts.
    Cidr(Ipv4Cidr),
}

impl RangeSpec {
    /// Parse one raw input line.
    ///
    /// Returns `Ok(None)` for lines that are skipped: blank lines and
    /// anything holding a `:` (IPv6).
    pub fn parse_line(raw: &str) -> Result<Option<RangeSpec>, CheckerError> {
        let line = raw.trim();
        if line.is_empty() || line.contains(':') {
            return Ok(None);
        }
        let malformed = |reason: String| CheckerError::MalformedRangeLine {
            line: line.to_string(),
            reason,
        };

        if line.contains('-') {
            let parts: Vec<&str> = line.split('-').collect();
            if parts.len() != 2 {
                return Err(malformed(format!(
                    "expected 2 addresses, found {}",
                    parts.len()
                )));
            }
            let start = parse_addr(parts[0]).map_err(malformed)?;
            let end = parse_addr(parts[1]).map_err(malformed)?;
            Ok(Some(RangeSpec::Range { start, end }))
        } else if line.contains('/') {
            let cidr = line
                .parse::<Ipv4Cidr>()
                .map_err(|e| malformed(e.to_string()))?;
            Ok(Some(RangeSpec::Cidr(cidr)))
        } else {
            Ok(Some(RangeSpec::Single(line.to_string())))
        }
    }

    /// Number of addresses [`RangeSpec::addresses`] will yield.
    pub fn len(&self) -> u64 {
        match self {
            RangeSpec::Single(_) => 1,
            RangeSpec::Range { start, end } => {
                let (start, end) = (u32::from(*start) as u64, u32::from(*end) as u64);
                if start > end {
                    0
                } else {
                    end - start + 1
                }
            }
            RangeSpec::Cidr(cidr) => cidr.num_hosts(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Canonical string form of every address this spec covers.
    ///
    /// A reversed range (`start > end`) yields nothing.
    pub fn addresses(&self) -> Box<dyn Iterator<Item = String> + '_> {
        match self {
            RangeSpec::Single(addr) => Box::new(std::iter::once(addr.clone())),
            RangeSpec::Range { start, end } => Box::new(
                (u32::from(*start)..=u32::from(*end)).map(|n| Ipv4Addr::from(n).to_string()),
            ),
            RangeSpec::Cidr(cidr) => Box::new(cidr.hosts().map(|ip| ip.to_string())),
        }
    }
}

fn parse_addr(token: &str) -> Result<Ipv4Addr, String> {
    token
        .parse::<Ipv4Addr>()
        .map_err(|_| format!("Invalid address {token:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(spec: &RangeSpec) -> Vec<String> {
        spec.addresses().collect()
    }

    #[test]
    fn test_skip_blank_and_ipv6() {
        assert_eq!(RangeSpec::parse_line("").unwrap(), None);
        assert_eq!(RangeSpec::parse_line("   \t").unwrap(), None);
        assert_eq!(RangeSpec::parse_line("2400:cb00::/32").unwrap(), None);
        // a colon wins over the range and cidr checks
        assert_eq!(RangeSpec::parse_line("abc-def:1").unwrap(), None);
    }

    #[test]
    fn test_range() {
        let spec = RangeSpec::parse_line(" 10.0.0.1-10.0.0.3\n").unwrap().unwrap();
        assert_eq!(collect(&spec), vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        assert_eq!(spec.len(), 3);
    }

    #[test]
    fn test_range_across_octets() {
        let spec = RangeSpec::parse_line("10.0.0.254-10.0.1.1").unwrap().unwrap();
        assert_eq!(
            collect(&spec),
            vec!["10.0.0.254", "10.0.0.255", "10.0.1.0", "10.0.1.1"]
        );
    }

    #[test]
    fn test_range_count_matches_bounds() {
        let spec = RangeSpec::parse_line("172.16.0.10-172.16.3.9").unwrap().unwrap();
        let start = u32::from(Ipv4Addr::new(172, 16, 0, 10));
        let end = u32::from(Ipv4Addr::new(172, 16, 3, 9));
        let addrs = collect(&spec);
        assert_eq!(addrs.len() as u32, end - start + 1);
        let mut dedup = addrs.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), addrs.len(), "range must not repeat addresses");
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let spec = RangeSpec::parse_line("10.0.0.9-10.0.0.1").unwrap().unwrap();
        assert!(spec.is_empty());
        assert!(collect(&spec).is_empty());
    }

    #[test]
    fn test_malformed_range() {
        for line in ["abc-def", "10.0.0.1-", "10.0.0.1-10.0.0.2-10.0.0.3", "10.0.0.1 - 10.0.0.3"] {
            match RangeSpec::parse_line(line) {
                Err(CheckerError::MalformedRangeLine { line: l, .. }) => assert_eq!(l, line),
                other => panic!("expected malformed for {line:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_cidr() {
        let spec = RangeSpec::parse_line("192.168.1.0/30").unwrap().unwrap();
        assert_eq!(collect(&spec), vec!["192.168.1.1", "192.168.1.2"]);
    }

    #[test]
    fn test_cidr_non_strict() {
        let spec = RangeSpec::parse_line("192.168.1.2/30").unwrap().unwrap();
        assert_eq!(collect(&spec), vec!["192.168.1.1", "192.168.1.2"]);
    }

    #[test]
    fn test_cidr_hostmask() {
        let spec = RangeSpec::parse_line("10.0.0.0/0.0.0.3").unwrap().unwrap();
        assert_eq!(collect(&spec), vec!["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn test_malformed_cidr() {
        assert!(RangeSpec::parse_line("192.168.1.0/33").is_err());
        assert!(RangeSpec::parse_line("not/an/ip").is_err());
        assert!(RangeSpec::parse_line("192.168.1.300/24").is_err());
    }

    #[test]
    fn test_single_is_not_validated() {
        let spec = RangeSpec::parse_line("  01.2.3.4 ").unwrap().unwrap();
        assert_eq!(spec, RangeSpec::Single("01.2.3.4".to_string()));
        let spec = RangeSpec::parse_line("cdn.example").unwrap().unwrap();
        assert_eq!(collect(&spec), vec!["cdn.example"]);
    }
}
