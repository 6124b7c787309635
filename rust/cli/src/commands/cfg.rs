//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of every value
//! (default, file or env) as pretty JSON:
//!
//! ```json
//! {
//!   "seats": {
//!     "value": 6,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seats": {
            "value": config.seats,
            "source": sources.seats,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind,
            "source": sources.big_blind,
        },
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        for key in ["HOLDEM_CONFIG", "HOLDEM_SEED", "HOLDEM_SEATS", "HOLDEM_AI"] {
            unsafe { std::env::remove_var(key) };
        }
        let mut out = Vec::new();
        let mut err = Vec::new();

        handle_cfg_command(&mut out, &mut err).unwrap();

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        for key in ["seats", "small_blind", "big_blind", "starting_stack", "seed", "ai"] {
            assert_eq!(json[key]["source"], "default", "{}", key);
        }
        assert_eq!(json["seed"]["value"], serde_json::Value::Null);
        assert!(output.contains("\n  "), "output should be pretty-printed");
        assert!(err.is_empty());
    }

    #[test]
    #[serial]
    fn test_cfg_reports_invalid_env() {
        unsafe { std::env::set_var("HOLDEM_BIG_BLIND", "5") };
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        unsafe { std::env::remove_var("HOLDEM_BIG_BLIND") };

        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(String::from_utf8(err).unwrap().contains("Invalid configuration"));
        assert!(out.is_empty());
    }
}
