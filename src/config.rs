//! Defaults for the command-line front end, read from the environment (and `.env`).

use std::env;

use snick::DEFAULT_WRAP_WIDTH;

pub const WRAP_WIDTH_VAR: &str = "SNICK_WRAP_WIDTH";
pub const BOXCHAR_VAR: &str = "SNICK_BOXCHAR";
pub const PRETTY_INDENT_VAR: &str = "SNICK_PRETTY_INDENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub wrap_width: usize,
    pub boxchar: String,
    pub pretty_indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            boxchar: "*".to_string(),
            pretty_indent: 2,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    InvalidNumber {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("SNICK_BOXCHAR must be a single character, got {0:?}")]
    InvalidBoxchar(String),
}

/// Load configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|key| env::var(key).ok())
}

/// Build configuration from any key lookup; unset keys fall back to defaults.
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Config::default();

    let wrap_width = match lookup(WRAP_WIDTH_VAR) {
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(width) if width > 0 => width,
            _ => {
                return Err(ConfigError::InvalidNumber {
                    var: WRAP_WIDTH_VAR,
                    expected: "a positive integer",
                    value: raw,
                });
            }
        },
        None => defaults.wrap_width,
    };

    let pretty_indent = match lookup(PRETTY_INDENT_VAR) {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidNumber {
                var: PRETTY_INDENT_VAR,
                expected: "a non-negative integer",
                value: raw.clone(),
            })?,
        None => defaults.pretty_indent,
    };

    let boxchar = match lookup(BOXCHAR_VAR) {
        Some(raw) if raw.chars().count() == 1 => raw,
        Some(raw) => return Err(ConfigError::InvalidBoxchar(raw)),
        None => defaults.boxchar,
    };

    log::debug!(
        "config: wrap_width={} boxchar={:?} pretty_indent={}",
        wrap_width,
        boxchar,
        pretty_indent
    );
    Ok(Config {
        wrap_width,
        boxchar,
        pretty_indent,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(from_lookup(lookup(&[])), Ok(Config::default()));
    }

    #[test]
    fn reads_all_values() {
        let config = from_lookup(lookup(&[
            (WRAP_WIDTH_VAR, " 40 "),
            (BOXCHAR_VAR, "#"),
            (PRETTY_INDENT_VAR, "4"),
        ]))
        .expect("valid config");
        assert_eq!(
            config,
            Config {
                wrap_width: 40,
                boxchar: "#".to_string(),
                pretty_indent: 4,
            }
        );
    }

    #[test]
    fn zero_wrap_width_is_rejected() {
        let err = from_lookup(lookup(&[(WRAP_WIDTH_VAR, "0")])).expect_err("zero width");
        assert!(err.to_string().contains(WRAP_WIDTH_VAR));
    }

    #[test]
    fn non_numeric_indent_is_rejected() {
        let err = from_lookup(lookup(&[(PRETTY_INDENT_VAR, "two")])).expect_err("bad indent");
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                var: PRETTY_INDENT_VAR,
                ..
            }
        ));
    }

    #[test]
    fn multi_char_boxchar_is_rejected() {
        assert_eq!(
            from_lookup(lookup(&[(BOXCHAR_VAR, "==")])),
            Err(ConfigError::InvalidBoxchar("==".to_string()))
        );
    }
}
