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

//! Password-strength scoring.
//!
//! A heuristic score in `[0, 5]` built from five criteria. It is not an entropy
//! or cryptographic estimate.
//!
//! | Criterion   | Rule                                                    |
//! |-------------|---------------------------------------------------------|
//! | `length`    | At least 6 characters. Failing it scores 0 outright.    |
//! | `uppercase` | Contains `A-Z`.                                         |
//! | `lowercase` | Contains `a-z`.                                         |
//! | `digit`     | Contains `0-9`.                                         |
//! | `special`   | Contains one of [`SPECIAL_CHARACTERS`].                 |

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};
use toolbelt_core::{
    TextInput,
    correctness::{FAILED, check_in_range_inclusive_u8},
};

/// Minimum password length, in characters, for a non-zero score.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Characters satisfying the special-character criterion.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A password-strength score in `[0, 5]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// The minimum score.
    pub const MIN: Self = Self(0);
    /// The maximum score.
    pub const MAX: Self = Self(5);

    /// Creates a new [`StrengthScore`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 5.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    /// Creates a new [`StrengthScore`] instance with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is greater than 5.
    pub fn new_checked(value: u8) -> anyhow::Result<Self> {
        check_in_range_inclusive_u8(value, Self::MIN.0, Self::MAX.0, "value")?;
        Ok(Self(value))
    }

    /// Returns the raw score.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the coarse strength level of this score.
    #[must_use]
    pub const fn strength(&self) -> PasswordStrength {
        match self.0 {
            0 => PasswordStrength::Invalid,
            1 | 2 => PasswordStrength::Weak,
            3 => PasswordStrength::Medium,
            4 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }
}

impl TryFrom<u8> for StrengthScore {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new_checked(value)
    }
}

impl From<StrengthScore> for u8 {
    fn from(score: StrengthScore) -> Self {
        score.0
    }
}

impl PartialEq<u8> for StrengthScore {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

impl Display for StrengthScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A coarse password-strength level derived from a [`StrengthScore`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PasswordStrength {
    /// Shorter than the minimum length (score 0).
    Invalid,
    /// Score 1 or 2.
    Weak,
    /// Score 3.
    Medium,
    /// Score 4.
    Strong,
    /// Score 5.
    VeryStrong,
}

/// The per-criterion outcome of a password evaluation.
///
/// When `length` fails no other criterion is evaluated and all are `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PasswordReport {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
    pub score: StrengthScore,
}

impl PasswordReport {
    /// Returns the coarse strength level of the score.
    #[must_use]
    pub const fn strength(&self) -> PasswordStrength {
        self.score.strength()
    }
}

/// Evaluates `password` against the five criteria.
#[must_use]
pub fn evaluate_password<T: Into<TextInput>>(password: T) -> PasswordReport {
    let input = password.into();
    if input.char_len() < MIN_PASSWORD_LEN {
        return PasswordReport::default();
    }

    let text = input.to_text();

    let uppercase = text.chars().any(|c| c.is_ascii_uppercase());
    let lowercase = text.chars().any(|c| c.is_ascii_lowercase());
    let digit = text.chars().any(|c| c.is_ascii_digit());
    let special = text.chars().any(|c| SPECIAL_CHARACTERS.contains(c));

    let passed = [uppercase, lowercase, digit, special]
        .iter()
        .filter(|passed| **passed)
        .count() as u8;

    PasswordReport {
        length: true,
        uppercase,
        lowercase,
        digit,
        special,
        score: StrengthScore(1 + passed),
    }
}

/// Returns the strength score of `password` in `[0, 5]`.
///
/// # Examples
///
/// ```
/// use toolbelt_validation::check_password_strength;
///
/// assert_eq!(check_password_strength("12345").value(), 0);
/// assert_eq!(check_password_strength("123456").value(), 2);
/// assert_eq!(check_password_strength("123@456qwe=ABC").value(), 5);
/// ```
#[must_use]
pub fn check_password_strength<T: Into<TextInput>>(password: T) -> StrengthScore {
    let score = evaluate_password(password).score;
    log::trace!("Password scored {score}");
    score
}
