pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod store;

pub use config::{CheckRequest, Config};
pub use error::CheckerError;

use output::{format_malformed, format_membership, format_no_check, format_summary};
use processing::{check_file, check_ip, expand_ranges};

/// Expand the range file into the address list, then run the requested check.
///
/// Report lines are printed to stdout. Only fatal errors are returned;
/// malformed range lines are printed as warnings and skipped.
pub fn run(config: &Config) -> Result<(), CheckerError> {
    let outcome = expand_ranges(&config.range_file, &config.address_list)?;
    for err in &outcome.malformed {
        println!("{}", format_malformed(err));
    }
    println!("{}", format_summary(outcome.set.len(), &config.address_list));

    match &config.check {
        CheckRequest::Ip(ip) => {
            let membership = check_ip(ip, &config.address_list)?;
            println!("{}", format_membership(&membership));
        }
        CheckRequest::File(file) => {
            for membership in check_file(file, &config.address_list)? {
                println!("{}", format_membership(&membership));
            }
        }
        CheckRequest::Nothing => println!("{}", format_no_check()),
    }
    Ok(())
}
