// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Logging configuration types and parsing.
//!
//! # Spec String Format
//!
//! The `TOOLBELT_LOG` environment variable uses a semicolon-separated format:
//!
//! ```text
//! stdout=Info;toolbelt_validation=Debug;toolbelt_core::string=Trace;is_colored
//! ```
//!
//! ## Supported Keys
//!
//! | Key            | Type      | Description                                      |
//! |----------------|-----------|--------------------------------------------------|
//! | `stdout`       | Log level | Maximum level for stdout output.                 |
//! | `is_colored`   | Boolean   | Enable ANSI colors (default: true).              |
//! | `print_config` | Boolean   | Print config to stdout at startup.               |
//! | `use_tracing`  | Boolean   | Enable tracing subscriber for external libs.     |
//! | `<target>`     | Log level | Level for a crate or module path (prefix match). |
//!
//! ## Log Levels
//!
//! All log levels are case-insensitive, `Warning` is accepted for `Warn`.
//!
//! - `Off`
//! - `Error`
//! - `Warn`
//! - `Info`
//! - `Debug`
//! - `Trace`
//!
//! ## Boolean Values
//!
//! - Bare flag: `is_colored` → true
//! - Explicit: `is_colored=true`, `is_colored=false`, `is_colored=0`, `is_colored=no`

use std::env;

use ahash::AHashMap;
use log::LevelFilter;
use ustr::Ustr;

use super::parse_level_filter_str;

/// The environment variable holding the logging spec string.
pub const LOG_ENV_VAR: &str = "TOOLBELT_LOG";

/// Configuration for the toolbelt logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Maximum log level for stdout output.
    pub stdout_level: LevelFilter,
    /// Per-target log level overrides (crate or module path prefix match).
    pub module_level: AHashMap<Ustr, LevelFilter>,
    /// Use ANSI color codes in output.
    pub is_colored: bool,
    /// Print configuration to stdout at startup.
    pub print_config: bool,
    /// Initialize the tracing subscriber for external Rust crate logs.
    pub use_tracing: bool,
}

impl Default for LoggerConfig {
    /// Creates a new default [`LoggerConfig`] instance.
    fn default() -> Self {
        Self {
            stdout_level: LevelFilter::Info,
            module_level: AHashMap::new(),
            is_colored: true,
            print_config: false,
            use_tracing: false,
        }
    }
}

impl LoggerConfig {
    /// Creates a new [`LoggerConfig`] instance.
    #[must_use]
    pub fn new(
        stdout_level: LevelFilter,
        module_level: AHashMap<Ustr, LevelFilter>,
        is_colored: bool,
        print_config: bool,
        use_tracing: bool,
    ) -> Self {
        Self {
            stdout_level,
            module_level,
            is_colored,
            print_config,
            use_tracing,
        }
    }

    /// Parses a configuration from a spec string.
    ///
    /// # Format
    ///
    /// Semicolon-separated key-value pairs or bare flags:
    /// ```text
    /// stdout=Info;toolbelt_validation=Debug;is_colored
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the spec string contains invalid syntax or log levels.
    pub fn from_spec(spec: &str) -> anyhow::Result<Self> {
        let mut config = Self::default();

        for kv in spec.split(';') {
            let kv = kv.trim();
            if kv.is_empty() {
                continue;
            }

            let Some((k, v)) = kv.split_once('=') else {
                match kv.to_lowercase().as_str() {
                    "is_colored" => config.is_colored = true,
                    "print_config" => config.print_config = true,
                    "use_tracing" => config.use_tracing = true,
                    _ => anyhow::bail!("Invalid spec pair: {kv}"),
                }
                continue;
            };

            let k = k.trim();
            let v = v.trim();

            if k.is_empty() {
                anyhow::bail!("Invalid spec pair: {kv}");
            }

            match k.to_lowercase().as_str() {
                "is_colored" => config.is_colored = parse_bool_value(v),
                "print_config" => config.print_config = parse_bool_value(v),
                "use_tracing" => config.use_tracing = parse_bool_value(v),
                "stdout" => config.stdout_level = parse_level_filter_str(v)?,
                _ => {
                    let lvl = parse_level_filter_str(v)?;
                    config.module_level.insert(Ustr::from(k), lvl);
                }
            }
        }

        Ok(config)
    }

    /// Parses configuration from the `TOOLBELT_LOG` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or contains invalid syntax.
    pub fn from_env() -> anyhow::Result<Self> {
        let spec = env::var(LOG_ENV_VAR)?;
        Self::from_spec(&spec)
    }

    /// Returns the level filter applying to `target`.
    ///
    /// The longest matching target override wins; a key matches the target itself and
    /// any module path below it. Falls back to `stdout_level`.
    #[must_use]
    pub fn level_for(&self, target: &str) -> LevelFilter {
        self.module_level
            .iter()
            .filter(|(key, _)| target_matches(target, key.as_str()))
            .max_by_key(|(key, _)| key.len())
            .map_or(self.stdout_level, |(_, level)| *level)
    }

    /// Returns the most verbose level any target may log at.
    #[must_use]
    pub fn max_level(&self) -> LevelFilter {
        self.module_level
            .values()
            .copied()
            .fold(self.stdout_level, Ord::max)
    }
}

fn target_matches(target: &str, key: &str) -> bool {
    target
        .strip_prefix(key)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

/// Parses a boolean value from a string.
///
/// Returns `true` unless the value is explicitly "false", "0", or "no" (case-insensitive).
fn parse_bool_value(v: &str) -> bool {
    !matches!(v.to_lowercase().as_str(), "false" | "0" | "no")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.stdout_level, LevelFilter::Info);
        assert!(config.module_level.is_empty());
        assert!(config.is_colored);
        assert!(!config.print_config);
        assert!(!config.use_tracing);
    }

    #[rstest]
    fn test_from_spec_stdout() {
        let config = LoggerConfig::from_spec("stdout=Debug").unwrap();
        assert_eq!(config.stdout_level, LevelFilter::Debug);
    }

    #[rstest]
    fn test_from_spec_case_insensitive() {
        let config = LoggerConfig::from_spec("STDOUT=warning").unwrap();
        assert_eq!(config.stdout_level, LevelFilter::Warn);
    }

    #[rstest]
    fn test_from_spec_empty_string() {
        let config = LoggerConfig::from_spec("").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[rstest]
    fn test_from_spec_with_whitespace_and_trailing_semicolon() {
        let config = LoggerConfig::from_spec("  stdout = Error ; ").unwrap();
        assert_eq!(config.stdout_level, LevelFilter::Error);
    }

    #[rstest]
    #[case("is_colored", true)]
    #[case("is_colored=true", true)]
    #[case("is_colored=false", false)]
    #[case("is_colored=0", false)]
    #[case("IS_COLORED=NO", false)]
    fn test_from_spec_is_colored(#[case] spec: &str, #[case] expected: bool) {
        let config = LoggerConfig::from_spec(spec).unwrap();
        assert_eq!(config.is_colored, expected);
    }

    #[rstest]
    fn test_from_spec_flags() {
        let config = LoggerConfig::from_spec("print_config;use_tracing").unwrap();
        assert!(config.print_config);
        assert!(config.use_tracing);
    }

    #[rstest]
    fn test_from_spec_full_example() {
        let config = LoggerConfig::from_spec(
            "stdout=Info;toolbelt_validation=Debug;toolbelt_core::string=Trace;is_colored=false",
        )
        .unwrap();

        assert_eq!(config.stdout_level, LevelFilter::Info);
        assert!(!config.is_colored);
        assert_eq!(
            config.module_level[&Ustr::from("toolbelt_validation")],
            LevelFilter::Debug
        );
        assert_eq!(
            config.module_level[&Ustr::from("toolbelt_core::string")],
            LevelFilter::Trace
        );
    }

    #[rstest]
    #[case("stdout=Loud")]
    #[case("unknown_flag")]
    #[case("=Debug")]
    #[case("toolbelt_core=")]
    fn test_from_spec_invalid(#[case] spec: &str) {
        assert!(LoggerConfig::from_spec(spec).is_err());
    }

    #[rstest]
    #[case("toolbelt_validation", LevelFilter::Debug)]
    #[case("toolbelt_validation::mask", LevelFilter::Debug)]
    #[case("toolbelt_core", LevelFilter::Info)]
    #[case("toolbelt_core::string", LevelFilter::Trace)]
    #[case("toolbelt_core::string::inner", LevelFilter::Trace)]
    #[case("toolbelt_core::stringy", LevelFilter::Info)]
    #[case("toolbelt_validation_extra", LevelFilter::Info)]
    fn test_level_for(#[case] target: &str, #[case] expected: LevelFilter) {
        let config = LoggerConfig::from_spec(
            "stdout=Info;toolbelt_validation=Debug;toolbelt_core::string=Trace",
        )
        .unwrap();
        assert_eq!(config.level_for(target), expected);
    }

    #[rstest]
    fn test_longest_prefix_wins() {
        let config =
            LoggerConfig::from_spec("toolbelt_core=Error;toolbelt_core::string=Debug").unwrap();
        assert_eq!(config.level_for("toolbelt_core::string"), LevelFilter::Debug);
        assert_eq!(config.level_for("toolbelt_core::value"), LevelFilter::Error);
    }

    #[rstest]
    fn test_max_level() {
        let config = LoggerConfig::from_spec("stdout=Warn;toolbelt_core=Trace").unwrap();
        assert_eq!(config.max_level(), LevelFilter::Trace);
        assert_eq!(LoggerConfig::default().max_level(), LevelFilter::Info);
    }
}
