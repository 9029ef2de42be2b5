//! Deduplicated set of textual IPv4 addresses.

use std::collections::BTreeSet;

/// Set of address strings, kept in lexicographic order.
///
/// Membership is by exact string: `01.2.3.4` and `1.2.3.4` are different
/// members.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressSet {
    addrs: BTreeSet<String>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from the persisted one-address-per-line form.
    /// Empty lines are dropped.
    pub fn from_lines(text: &str) -> Self {
        text.lines()
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Returns true when the address was not present before.
    pub fn insert(&mut self, addr: impl Into<String>) -> bool {
        self.addrs.insert(addr.into())
    }

    pub fn contains(&self, addr: &str) -> bool {
        self.addrs.contains(addr)
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.addrs.iter().map(String::as_str)
    }

    /// Sorted, newline-terminated text, one address per line.
    pub fn to_persisted_string(&self) -> String {
        let mut out = self.addrs.iter().cloned().collect::<Vec<String>>().join("\n");
        out.push('\n');
        out
    }
}

impl FromIterator<String> for AddressSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        AddressSet {
            addrs: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for AddressSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.addrs.extend(iter);
    }
}
