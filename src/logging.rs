//! log4rs initialisation.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

/// Initialise logging from a log4rs YAML file, or fall back to `info` on stderr
/// when the file does not exist.
pub fn init_logging(config_file: &Path) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config_file.display()))?;
        log::debug!("log4rs initialised from {}", config_file.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    log::debug!("log4rs config {} not found, using stderr", config_file.display());
    Ok(())
}
