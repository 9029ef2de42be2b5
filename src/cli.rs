//! Command line arguments and the range-file prompt.

use crate::error::CheckerError;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const RANGE_FILE_PROMPT: &str = "Enter the path to your CDN-Range file: ";

/// Expand CDN IP ranges and check addresses against them.
#[derive(Debug, Parser)]
#[command(name = "cdn-ip-checker", version)]
#[command(about = "CDN IP Checker", long_about = None)]
pub struct Cli {
    /// Check a single IP.
    #[arg(short, long, env = "CDN_CHECK_IP")]
    pub ip: Option<String>,

    /// Check multiple IPs from a file, one per line.
    #[arg(short, long, env = "CDN_CHECK_FILE", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// CDN range file to expand. Prompted for when not given.
    #[arg(short, long, env = "CDN_RANGE_FILE", value_name = "FILE")]
    pub ranges: Option<PathBuf>,

    /// Expanded address list, read and rewritten on every run.
    #[arg(
        short,
        long,
        env = "CDN_IP_LIST",
        value_name = "FILE",
        default_value = "all_ips.txt"
    )]
    pub output: PathBuf,

    /// log4rs configuration file.
    #[arg(
        long,
        env = "CDN_LOG_CONFIG",
        value_name = "FILE",
        default_value = "log4rs.yml"
    )]
    pub log_config: PathBuf,
}

/// Ask for the range file path and read one line from `input`.
pub fn prompt_range_file<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
) -> Result<PathBuf, CheckerError> {
    let io_err = |source: std::io::Error| CheckerError::Io {
        path: PathBuf::from("<stdin>"),
        source,
    };
    write!(out, "{RANGE_FILE_PROMPT}").map_err(io_err)?;
    out.flush().map_err(io_err)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(io_err)?;
    Ok(PathBuf::from(line.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["cdn-ip-checker", "-i", "10.0.0.2", "-r", "ranges.txt"])
            .expect("parse");
        assert_eq!(cli.ip.as_deref(), Some("10.0.0.2"));
        assert_eq!(cli.ranges, Some(PathBuf::from("ranges.txt")));
        assert_eq!(cli.output, PathBuf::from("all_ips.txt"));
    }

    #[test]
    fn test_prompt_trims_answer() {
        let mut shown = Vec::new();
        let path = prompt_range_file("  cdn_ranges.txt \n".as_bytes(), &mut shown).unwrap();
        assert_eq!(path, PathBuf::from("cdn_ranges.txt"));
        assert_eq!(String::from_utf8(shown).unwrap(), RANGE_FILE_PROMPT);
    }

    #[test]
    fn test_prompt_eof_gives_empty_path() {
        let path = prompt_range_file("".as_bytes(), Vec::new()).unwrap();
        assert_eq!(path, PathBuf::new());
    }
}
