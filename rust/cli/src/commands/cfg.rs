//! Configuration command handler.
//!
//! Prints the resolved configuration, each key with the source it came
//! from (default, file or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "human_first": {
//!     "value": true,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;

    let display = serde_json::json!({
        "human_first": {
            "value": config.human_first,
            "source": sources.human_first,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "opening": {
            "value": config.opening,
            "source": sources.opening,
        },
        "games": {
            "value": config.games,
            "source": sources.games,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
