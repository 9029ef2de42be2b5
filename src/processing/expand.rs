//! Expansion of range files into the persisted address list.

use crate::error::CheckerError;
use crate::models::{AddressSet, RangeSpec};
use crate::store::{read_address_list_or_default, write_address_list};
use std::path::Path;

/// Result of one expansion run.
#[derive(Debug)]
pub struct ExpandOutcome {
    /// The merged set, as written to the address list.
    pub set: AddressSet,
    /// Addresses that were not in the set before this run.
    pub added: usize,
    /// Range or CIDR lines that failed to parse, in input order.
    pub malformed: Vec<CheckerError>,
}

/// Expand every line into `set`.
///
/// Malformed range and CIDR lines are logged and returned; they never stop
/// the run. Returns the number of addresses newly inserted.
pub fn expand_lines<I, S>(lines: I, set: &mut AddressSet) -> (usize, Vec<CheckerError>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut added = 0;
    let mut malformed = Vec::new();

    for (n, raw) in lines.into_iter().enumerate() {
        let spec = match RangeSpec::parse_line(raw.as_ref()) {
            Ok(Some(spec)) => spec,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("line {}: {}", n + 1, e);
                malformed.push(e);
                continue;
            }
        };
        match &spec {
            RangeSpec::Range { start, end } if start > end => {
                log::warn!("line {}: reversed range {start}-{end} expands to nothing", n + 1);
            }
            RangeSpec::Single(addr) if addr.parse::<std::net::Ipv4Addr>().is_err() => {
                log::debug!("line {}: literal {addr:?} is not a dotted-quad, kept as is", n + 1);
            }
            _ => log::trace!("line {}: {:?} -> {} addresses", n + 1, spec, spec.len()),
        }
        for addr in spec.addresses() {
            if set.insert(addr) {
                added += 1;
            }
        }
    }

    (added, malformed)
}

/// Expand `input` and merge it into the address list at `store`.
///
/// The existing list (if any) is loaded first, the merged set is written back
/// in full. Fails only when the input or the list cannot be read or written.
pub fn expand_ranges(input: &Path, store: &Path) -> Result<ExpandOutcome, CheckerError> {
    log::info!("#Start expand_ranges({})", input.display());
    let text =
        std::fs::read_to_string(input).map_err(|e| CheckerError::from_input_io(input, e))?;

    let mut set = read_address_list_or_default(store)?;
    let before = set.len();
    let (added, malformed) = expand_lines(text.lines(), &mut set);
    log::info!(
        "Expanded {}: {} before, {} added, {} malformed lines",
        input.display(),
        before,
        added,
        malformed.len()
    );

    write_address_list(store, &set)?;
    Ok(ExpandOutcome {
        set,
        added,
        malformed,
    })
}
