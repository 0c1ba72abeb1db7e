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

//! The logging framework for toolbelt.
//!
//! Library crates log through the [`log`] facade only. Binaries (or the Python
//! extension module) install the backend once with [`init_logging`], or lazily with
//! [`ensure_logging_initialized`] which reads the `TOOLBELT_LOG` environment variable.
//!
//! Log messages never contain raw values passed to masking or validation helpers,
//! only their lengths.

pub mod config;
pub mod logger;

#[cfg(feature = "tracing-bridge")]
pub mod bridge;

use std::{
    str::FromStr,
    sync::{
        OnceLock,
        atomic::{AtomicBool, Ordering},
    },
};

use log::LevelFilter;

use self::logger::{Logger, LoggerConfig};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);
static LAZY_INIT: OnceLock<bool> = OnceLock::new();

/// Returns whether the logger is installed.
pub fn logging_is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::Relaxed)
}

/// Ensures logging is initialized on first use.
///
/// If `TOOLBELT_LOG` is set and valid, initializes the logger with that config.
/// Otherwise, initializes with INFO level to stdout.
///
/// Returns `true` if logging is available (either already initialized or
/// successfully lazy-initialized), `false` otherwise.
pub fn ensure_logging_initialized() -> bool {
    if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
        return true;
    }

    *LAZY_INIT.get_or_init(|| {
        let config = LoggerConfig::from_env().unwrap_or_default();
        init_logging(config).is_ok()
    }) || LOGGING_INITIALIZED.load(Ordering::SeqCst)
}

/// Initialize logging.
///
/// Should only be called once during an application's run, ideally at the beginning.
///
/// # Errors
///
/// Returns an error if the logging subsystem fails to initialize, including when a
/// global logger is already installed.
pub fn init_logging(config: LoggerConfig) -> anyhow::Result<()> {
    let use_tracing = config.use_tracing;
    Logger::init_with_config(config)?;

    if use_tracing {
        #[cfg(feature = "tracing-bridge")]
        bridge::init_tracing()?;

        #[cfg(not(feature = "tracing-bridge"))]
        log::warn!("`use_tracing` requested but the `tracing-bridge` feature is not enabled");
    }

    Ok(())
}

/// Parses a string into a [`LevelFilter`].
///
/// # Errors
///
/// Returns an error if the provided string is not a valid `LevelFilter`.
pub fn parse_level_filter_str(s: &str) -> anyhow::Result<LevelFilter> {
    let mut log_level_str = s.trim().to_uppercase();
    if log_level_str == "WARNING" {
        log_level_str = "WARN".to_string();
    }
    LevelFilter::from_str(&log_level_str)
        .map_err(|_| anyhow::anyhow!("Invalid log level string: '{s}'"))
}
