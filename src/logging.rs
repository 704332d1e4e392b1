//! Log setup
//!
//! The screen belongs to the calculator while it runs, so records never go to
//! stderr. When `RPNC_LOG_FILE` is set they are appended to that file; otherwise
//! no logger is installed and the `log` macros are no-ops.

use crate::config::Config;
use std::fs::OpenOptions;
use std::io;

/// Install the file logger described by `config`.
///
/// Returns `false` when logging is not configured.
pub fn init(config: &Config) -> io::Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    log::info!("logging to {}", path.display());
    Ok(true)
}
