//! Output formatting for expansion and check results.

mod terminal;

pub use terminal::{
    format_fatal, format_malformed, format_membership, format_no_check, format_summary,
};
