//! Membership checks against the persisted address list.

use crate::error::CheckerError;
use crate::models::AddressSet;
use crate::store::read_address_list;
use std::path::Path;

/// Membership result for one candidate address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub address: String,
    pub member: bool,
}

/// Exact string match; no normalisation of the candidate.
pub fn is_member(address: &str, set: &AddressSet) -> bool {
    set.contains(address)
}

/// Check each candidate independently, keeping input order.
pub fn check_all<I, S>(addresses: I, set: &AddressSet) -> Vec<Membership>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    addresses
        .into_iter()
        .map(|a| {
            let address = a.into();
            let member = is_member(&address, set);
            log::debug!("check {address} -> {member}");
            Membership { address, member }
        })
        .collect()
}

/// Read candidate addresses, one per line, trimmed, blank lines skipped.
pub fn read_batch_file(path: &Path) -> Result<Vec<String>, CheckerError> {
    let text = std::fs::read_to_string(path).map_err(|e| CheckerError::from_input_io(path, e))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Check a single address against the list at `store`.
pub fn check_ip(address: &str, store: &Path) -> Result<Membership, CheckerError> {
    let set = read_address_list(store)?;
    Ok(Membership {
        address: address.to_string(),
        member: is_member(address, &set),
    })
}

/// Check every address in `file` against the list at `store`.
///
/// The batch file is read before the list, so a missing batch file is
/// reported first.
pub fn check_file(file: &Path, store: &Path) -> Result<Vec<Membership>, CheckerError> {
    let candidates = read_batch_file(file)?;
    log::info!("Checking {} addresses from {}", candidates.len(), file.display());
    let set = read_address_list(store)?;
    Ok(check_all(candidates, &set))
}
