//! Logger setup.
//!
//! Uses the log4rs file config when present, otherwise a stderr console
//! logger at `warn`.

use log::{Level, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Initialise the global logger. Must be called once, early in `main`.
pub fn init_logging(config_file: &Path) -> Result<(), Box<dyn Error>> {
    match log4rs::init_file(config_file, Default::default()) {
        Ok(()) => {
            log::debug!("log4rs initialised from {}", config_file.display());
            Ok(())
        }
        Err(e) => {
            init_fallback()?;
            log::log!(
                fallback_notice_level(config_file),
                "Using stderr logging, could not load {}: {e}",
                config_file.display()
            );
            Ok(())
        }
    }
}

/// A missing config file is normal for an installed binary; only a file that
/// exists but fails to load is worth a warning.
fn fallback_notice_level(config_file: &Path) -> Level {
    if config_file.exists() {
        Level::Warn
    } else {
        Level::Info
    }
}

fn init_fallback() -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
