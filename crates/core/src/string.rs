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

//! Sensitive-data masking.
//!
//! The masking engine keeps a visible prefix and suffix of a value's text form and
//! replaces every character in between with [`MASK_CHAR`]. Lengths are counted in
//! Unicode scalar values, so multibyte characters are never split.

use serde::{Deserialize, Serialize};

use crate::{
    correctness::check_usize_sum_no_overflow, input::TextInput, serialization::Serializable,
};

/// The placeholder written in place of each masked character.
pub const MASK_CHAR: char = '*';

/// Default count of leading characters left visible.
pub const DEFAULT_FRONT_LEN: usize = 3;

/// Default count of trailing characters left visible.
pub const DEFAULT_END_LEN: usize = 4;

/// An error returned by the masking engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    /// The input has no character left to mask once both visible segments are taken.
    #[error(
        "Input is too short to mask with the given lengths: length {len}, front_len {front_len}, end_len {end_len}"
    )]
    InputTooShort {
        /// Length of the input text in characters.
        len: usize,
        /// Requested visible leading characters.
        front_len: usize,
        /// Requested visible trailing characters.
        end_len: usize,
    },
}

/// A predicate deciding whether a text has an expected shape (phone number, ID card...).
pub trait FormatValidator {
    /// Returns whether `text` is valid for this format.
    fn is_valid(&self, text: &str) -> bool;
}

impl<F> FormatValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, text: &str) -> bool {
        self(text)
    }
}

/// Configuration of the visible segments of a masked value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Count of leading characters left visible.
    pub front_len: usize,
    /// Count of trailing characters left visible.
    pub end_len: usize,
}

impl Default for MaskConfig {
    /// Creates a new default [`MaskConfig`] instance (3 leading, 4 trailing).
    fn default() -> Self {
        Self {
            front_len: DEFAULT_FRONT_LEN,
            end_len: DEFAULT_END_LEN,
        }
    }
}

impl Serializable for MaskConfig {}

impl MaskConfig {
    /// Creates a new [`MaskConfig`] instance.
    #[must_use]
    pub const fn new(front_len: usize, end_len: usize) -> Self {
        Self { front_len, end_len }
    }

    /// Creates a new [`MaskConfig`] instance with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if `front_len + end_len` overflows, as no input could then be masked.
    pub fn new_checked(front_len: usize, end_len: usize) -> anyhow::Result<Self> {
        check_usize_sum_no_overflow(front_len, end_len, "front_len + end_len")?;
        Ok(Self::new(front_len, end_len))
    }

    /// Returns the total count of visible characters, or `None` on overflow.
    #[must_use]
    pub const fn visible_len(&self) -> Option<usize> {
        self.front_len.checked_add(self.end_len)
    }

    /// Masks `value` with this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::InputTooShort`] if the input is not longer than the visible segments.
    pub fn mask<T: Into<TextInput>>(&self, value: T) -> Result<String, MaskError> {
        mask_sensitive_info(value, self.front_len, self.end_len)
    }
}

/// Masks the middle of `value`, keeping `front_len` leading and `end_len` trailing characters.
///
/// The result always has the same character count as the input text.
///
/// # Errors
///
/// Returns [`MaskError::InputTooShort`] if the text is not longer than `front_len + end_len`.
///
/// # Examples
///
/// ```
/// use toolbelt_core::string::mask_sensitive_info;
///
/// assert_eq!(mask_sensitive_info("13722164537", 3, 4).unwrap(), "137****4537");
/// assert!(mask_sensitive_info("12345", 3, 2).is_err());
/// ```
pub fn mask_sensitive_info<T: Into<TextInput>>(
    value: T,
    front_len: usize,
    end_len: usize,
) -> Result<String, MaskError> {
    let input = value.into();
    let text = input.to_text();

    // Work with Unicode scalars to avoid panicking on multibyte characters.
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    let too_short = MaskError::InputTooShort {
        len,
        front_len,
        end_len,
    };
    match front_len.checked_add(end_len) {
        Some(visible) if len > visible => {}
        _ => return Err(too_short),
    }

    let masked_len = len - front_len - end_len;
    let mut result = String::with_capacity(text.len() + masked_len);
    result.extend(&chars[..front_len]);
    result.extend(std::iter::repeat_n(MASK_CHAR, masked_len));
    result.extend(&chars[len - end_len..]);

    Ok(result)
}

/// Masks `value` with the default lengths (3 leading, 4 trailing).
///
/// # Errors
///
/// Returns [`MaskError::InputTooShort`] if the text has 7 characters or fewer.
pub fn mask_sensitive_info_default<T: Into<TextInput>>(value: T) -> Result<String, MaskError> {
    MaskConfig::default().mask(value)
}

/// Masks `value` only if `validator` accepts its text form.
///
/// Returns `None` when the validator rejects the input, or when the accepted input is
/// too short for `config`. Rejection is not an error.
#[must_use]
pub fn mask_if_valid<T, V>(value: T, validator: &V, config: MaskConfig) -> Option<String>
where
    T: Into<TextInput>,
    V: FormatValidator + ?Sized,
{
    let input = value.into();
    let text = input.to_text();

    if !validator.is_valid(&text) {
        log::trace!(
            "Skipped masking, validator rejected input of length {}",
            input.char_len()
        );
        return None;
    }

    match config.mask(text.as_ref()) {
        Ok(masked) => Some(masked),
        Err(e) => {
            log::debug!("Skipped masking: {e}");
            None
        }
    }
}
