//! Resolved runtime configuration.

use crate::cli::{prompt_range_file, Cli};
use crate::error::CheckerError;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// What to check once expansion has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckRequest {
    Ip(String),
    File(PathBuf),
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub range_file: PathBuf,
    pub address_list: PathBuf,
    pub check: CheckRequest,
}

impl Config {
    /// Build the config, prompting on `input`/`out` when no range file was
    /// given. `--ip` wins over `--file`; empty values count as not given.
    pub fn from_cli<R: BufRead, W: Write>(
        cli: Cli,
        input: R,
        out: W,
    ) -> Result<Config, CheckerError> {
        let range_file = match cli.ranges {
            Some(path) => path,
            None => prompt_range_file(input, out)?,
        };
        let ip = cli.ip.filter(|ip| !ip.is_empty());
        let file = cli.file.filter(|file| !file.as_os_str().is_empty());
        let check = match (ip, file) {
            (Some(ip), _) => CheckRequest::Ip(ip),
            (None, Some(file)) => CheckRequest::File(file),
            (None, None) => CheckRequest::Nothing,
        };
        Ok(Config {
            range_file,
            address_list: cli.output,
            check,
        })
    }
}
