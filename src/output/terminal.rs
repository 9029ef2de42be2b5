//! Console report lines.
//!
//! Each helper returns the finished line; callers decide where to print it.

use crate::error::CheckerError;
use crate::processing::Membership;
use colored::Colorize;
use std::path::Path;

/// `[✔]`/`[✘]` line for one checked address.
pub fn format_membership(m: &Membership) -> String {
    if m.member {
        format!("[✔] IP {} belongs to a CDN.", m.address)
            .green()
            .to_string()
    } else {
        format!("[✘] IP {} is NOT in the CDN list.", m.address)
            .red()
            .to_string()
    }
}

pub fn format_summary(count: usize, store: &Path) -> String {
    format!(
        "[+] Extracted {count} unique IPs and saved to {}",
        store.display()
    )
}

/// Warning for a skipped range or CIDR line.
pub fn format_malformed(err: &CheckerError) -> String {
    let text = match err {
        CheckerError::MalformedRangeLine { line, .. } => format!("[!] Error processing: {line}"),
        other => format!("[!] {other}"),
    };
    text.yellow().to_string()
}

pub fn format_fatal(err: &CheckerError) -> String {
    format!("[!] {err}").red().to_string()
}

pub fn format_no_check() -> String {
    "[!] Please provide an IP (-i/--ip) or file (-f) to check.".to_string()
}
