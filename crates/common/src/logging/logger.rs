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

//! The `log` backend writing formatted lines to stdout/stderr.

use std::{
    io::Write,
    sync::atomic::Ordering,
};

use chrono::{DateTime, SecondsFormat, Utc};
use log::{Level, Log, set_boxed_logger, set_max_level};

pub use super::config::LoggerConfig;
use super::LOGGING_INITIALIZED;

/// A single log event captured from a [`log::Record`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    /// The time the event was logged.
    pub timestamp: DateTime<Utc>,
    /// The log level of the event.
    pub level: Level,
    /// The target (usually the module path) of the event.
    pub target: String,
    /// The rendered message.
    pub message: String,
}

impl LogLine {
    /// Returns the plain log line, newline terminated.
    #[must_use]
    pub fn get_string(&self) -> String {
        format!(
            "{} [{}] {}: {}\n",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            self.level,
            self.target,
            self.message,
        )
    }

    /// Returns the log line with ANSI color codes, newline terminated.
    #[must_use]
    pub fn get_colored(&self) -> String {
        format!(
            "\x1b[1m{}\x1b[0m {}[{}] {}: {}\x1b[0m\n",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            level_ansi(self.level),
            self.level,
            self.target,
            self.message,
        )
    }
}

const fn level_ansi(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[1;31m",
        Level::Warn => "\x1b[1;33m",
        Level::Info => "\x1b[0m",
        Level::Debug | Level::Trace => "\x1b[36m",
    }
}

/// A logger writing to stdout, and to stderr for errors.
#[derive(Debug)]
pub struct Logger {
    /// Configuration for the logger.
    pub config: LoggerConfig,
}

impl Logger {
    /// Creates a new [`Logger`] instance.
    #[must_use]
    pub const fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// Installs a [`Logger`] as the global `log` implementation.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger has already been set.
    pub fn init_with_config(config: LoggerConfig) -> anyhow::Result<()> {
        if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
            anyhow::bail!("Logging already initialized");
        }

        let max_level = config.max_level();
        let print_config = config.print_config;

        if print_config {
            println!("Logger config: {config:#?}");
        }

        set_boxed_logger(Box::new(Self::new(config)))
            .map_err(|e| anyhow::anyhow!("Failed to set logger: {e}"))?;
        set_max_level(max_level);

        if print_config {
            println!("Logger set as `log` implementation with max level {max_level}");
        }

        LOGGING_INITIALIZED.store(true, Ordering::SeqCst);

        Ok(())
    }

    fn render(&self, line: &LogLine) -> String {
        if self.config.is_colored {
            line.get_colored()
        } else {
            line.get_string()
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.config.level_for(metadata.target())
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        let rendered = self.render(&line);

        let result = if line.level == Level::Error {
            std::io::stderr().lock().write_all(rendered.as_bytes())
        } else {
            std::io::stdout().lock().write_all(rendered.as_bytes())
        };

        if let Err(e) = result {
            eprintln!("Error writing log line: {e}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use log::{LevelFilter, Metadata};
    use rstest::rstest;

    use super::*;

    fn line(level: Level) -> LogLine {
        LogLine {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap(),
            level,
            target: "toolbelt_validation::mask".to_string(),
            message: "Skipped phone masking".to_string(),
        }
    }

    #[rstest]
    fn test_log_line_plain() {
        assert_eq!(
            line(Level::Debug).get_string(),
            "2024-03-09T07:05:03.000000000Z [DEBUG] toolbelt_validation::mask: Skipped phone masking\n"
        );
    }

    #[rstest]
    fn test_log_line_colored() {
        let plain = line(Level::Error).get_string();
        let colored = line(Level::Error).get_colored();

        assert!(!plain.contains("\x1b["));
        assert!(colored.contains("\x1b[1;31m[ERROR]"));
        assert!(colored.ends_with("\x1b[0m\n"));
    }

    #[rstest]
    fn test_render_respects_is_colored() {
        let config = LoggerConfig {
            is_colored: false,
            ..Default::default()
        };
        let logger = Logger::new(config);
        assert!(!logger.render(&line(Level::Warn)).contains("\x1b["));
    }

    #[rstest]
    #[case(Level::Info, "toolbelt_core", true)]
    #[case(Level::Debug, "toolbelt_core", false)]
    #[case(Level::Debug, "toolbelt_validation::mask", true)]
    #[case(Level::Trace, "toolbelt_validation::mask", false)]
    #[case(Level::Error, "other_crate", false)]
    fn test_enabled(#[case] level: Level, #[case] target: &str, #[case] expected: bool) {
        let mut config = LoggerConfig::from_spec("stdout=Info;toolbelt_validation=Debug").unwrap();
        config
            .module_level
            .insert("other_crate".into(), LevelFilter::Off);
        let logger = Logger::new(config);

        let metadata = Metadata::builder().level(level).target(target).build();
        assert_eq!(logger.enabled(&metadata), expected);
    }
}
