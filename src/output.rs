//! Where user-facing text goes.
//!
//! Translations are written to stdout so they can be piped. Status lines and
//! warnings go to stderr; `--quiet` silences status lines but never warnings.

use std::ffi::OsStr;
use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub quiet: bool,
    pub no_color: bool,
}

impl OutputConfig {
    /// Combines the CLI flags with the `NO_COLOR` convention
    /// (<https://no-color.org/>).
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self::with_no_color_env(quiet, no_color, std::env::var_os("NO_COLOR").as_deref())
    }

    fn with_no_color_env(quiet: bool, no_color: bool, env: Option<&OsStr>) -> Self {
        // An empty NO_COLOR leaves colors on.
        let env_disables = env.is_some_and(|value| !value.is_empty());
        Self {
            quiet,
            no_color: no_color || env_disables,
        }
    }
}

/// Sets the process-wide output configuration. Later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(|| OutputConfig::from_flags(false, false))
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a highlighted warning to stderr, even in quiet mode.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("{}", $crate::ui::Style::warning(format!($($arg)*)));
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_pass_through_without_env() {
        let config = OutputConfig::with_no_color_env(true, false, None);
        assert_eq!(
            config,
            OutputConfig {
                quiet: true,
                no_color: false
            }
        );
    }

    #[test]
    fn test_no_color_env_disables_colors() {
        let config = OutputConfig::with_no_color_env(false, false, Some(OsStr::new("1")));
        assert!(config.no_color);
    }

    #[test]
    fn test_empty_no_color_env_is_ignored() {
        let config = OutputConfig::with_no_color_env(false, false, Some(OsStr::new("")));
        assert!(!config.no_color);
    }

    #[test]
    fn test_no_color_flag_wins_over_env() {
        let config = OutputConfig::with_no_color_env(false, true, None);
        assert!(config.no_color);
    }
}
