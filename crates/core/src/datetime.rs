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

//! Date/time formatting and timestamp helpers.
//!
//! Date-times are naive values interpreted as UTC. Format strings use the
//! `strftime` syntax from [`chrono::format::strftime`] and are validated before
//! use, so an invalid specifier returns an error instead of panicking.

use anyhow::Context;
use chrono::{
    NaiveDate, NaiveDateTime, NaiveTime, Utc,
    format::{Item, StrftimeItems},
};
use strum::{AsRefStr, Display, EnumString};

use crate::correctness::check_nonempty_string;

/// Default date-time format (`YYYY-MM-DD HH:mm:ss`).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default date format (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const ISO_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The unit of a UNIX timestamp.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum TimestampUnit {
    /// Milliseconds since the UNIX epoch.
    #[default]
    Milliseconds,
    /// Whole seconds since the UNIX epoch (floored).
    Seconds,
}

fn parse_format_items(format: &str) -> anyhow::Result<Vec<Item<'_>>> {
    check_nonempty_string(format, "format")?;
    StrftimeItems::new(format)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid format string '{format}': {e}"))
}

/// Formats `date` with the `strftime` style `format`.
///
/// # Errors
///
/// Returns an error if `format` is empty or contains an invalid specifier.
pub fn format_datetime(date: NaiveDateTime, format: &str) -> anyhow::Result<String> {
    let items = parse_format_items(format)?;
    Ok(date.format_with_items(items.iter()).to_string())
}

/// Formats a date-time, defaulting to the current UTC time and [`DATE_TIME_FORMAT`].
///
/// # Errors
///
/// Returns an error if `format` is empty or contains an invalid specifier.
pub fn format_to_datetime(
    date: Option<NaiveDateTime>,
    format: Option<&str>,
) -> anyhow::Result<String> {
    let date = date.unwrap_or_else(|| Utc::now().naive_utc());
    format_datetime(date, format.unwrap_or(DATE_TIME_FORMAT))
}

/// Formats a date, defaulting to the current UTC time and [`DATE_FORMAT`].
///
/// # Errors
///
/// Returns an error if `format` is empty or contains an invalid specifier.
pub fn format_to_date(date: Option<NaiveDateTime>, format: Option<&str>) -> anyhow::Result<String> {
    let date = date.unwrap_or_else(|| Utc::now().naive_utc());
    format_datetime(date, format.unwrap_or(DATE_FORMAT))
}

/// Parses a date-time from `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`.
///
/// A bare date resolves to midnight.
///
/// # Errors
///
/// Returns an error if `s` matches none of the accepted layouts.
pub fn parse_datetime(s: &str) -> anyhow::Result<NaiveDateTime> {
    let s = s.trim();

    for format in [DATE_TIME_FORMAT, ISO_DATE_TIME_FORMAT] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .with_context(|| format!("Failed to parse date-time from '{s}'"))
}

/// Returns the UNIX timestamp of `time` (UTC), or of the current time when `None`.
///
/// [`TimestampUnit::Seconds`] floors the millisecond timestamp.
///
/// # Errors
///
/// Returns an error if `time` cannot be parsed by [`parse_datetime`].
pub fn get_timestamp(time: Option<&str>, unit: TimestampUnit) -> anyhow::Result<i64> {
    let dt = match time {
        Some(s) => parse_datetime(s)?,
        None => Utc::now().naive_utc(),
    };
    let millis = dt.and_utc().timestamp_millis();

    Ok(match unit {
        TimestampUnit::Milliseconds => millis,
        TimestampUnit::Seconds => millis.div_euclid(1_000),
    })
}
