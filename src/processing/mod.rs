//! Expansion and membership logic.
//!
//! - [`expand`] - turn range files into the persisted address list
//! - [`check`] - single and batch membership checks

mod check;
mod expand;

// Re-export public functions
pub use check::{check_all, check_file, check_ip, is_member, read_batch_file, Membership};
pub use expand::{expand_lines, expand_ranges, ExpandOutcome};
