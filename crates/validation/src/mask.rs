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

//! Masking restricted to values of an expected shape.
//!
//! Unlike [`toolbelt_core::string::mask_sensitive_info`], a value of the wrong shape is
//! not an error here: the functions simply return `None`.

use toolbelt_core::{
    TextInput,
    string::{FormatValidator, MaskConfig, mask_if_valid},
};

use crate::validate::{IdCardValidator, PhoneValidator};

/// Masking applied to the 11-digit national part of a phone number (`137****4537`).
pub const PHONE_MASK: MaskConfig = MaskConfig::new(3, 4);

/// Masking applied to ID card numbers (`123***********1234`).
pub const ID_CARD_MASK: MaskConfig = MaskConfig::new(3, 4);

const COUNTRY_CODE_PREFIXES: [&str; 2] = ["+86", "0086"];

const NATIONAL_NUMBER_LEN: usize = 11;

fn split_country_code(phone: &str) -> (&str, &str) {
    for prefix in COUNTRY_CODE_PREFIXES {
        if let Some(national) = phone.strip_prefix(prefix)
            && national.len() == NATIONAL_NUMBER_LEN
        {
            return (prefix, national);
        }
    }
    ("", phone)
}

/// Masks the middle four digits of a mobile phone number.
///
/// Returns `None` if `value` is not a phone number (see [`crate::validate::is_phone`]).
/// A `+86` or `0086` country code is kept in front of the masked national number.
///
/// # Examples
///
/// ```
/// use toolbelt_validation::mask_phone;
///
/// assert_eq!(mask_phone("13722164537").as_deref(), Some("137****4537"));
/// assert_eq!(mask_phone("+8613722164537").as_deref(), Some("+86137****4537"));
/// assert_eq!(mask_phone("12345"), None);
/// ```
#[must_use]
pub fn mask_phone<T: Into<TextInput>>(value: T) -> Option<String> {
    let input = value.into();
    let text = input.to_text();

    if !PhoneValidator.is_valid(&text) {
        log::debug!(
            "Skipped phone masking, input of length {} is not a phone number",
            input.char_len()
        );
        return None;
    }

    let (prefix, national) = split_country_code(&text);
    match PHONE_MASK.mask(national) {
        Ok(masked) => Some(format!("{prefix}{masked}")),
        Err(e) => {
            log::debug!("Skipped phone masking: {e}");
            None
        }
    }
}

/// Masks an ID card number, keeping the first 3 and last 4 characters.
///
/// Returns `None` if `value` is not an ID card number (see [`crate::validate::is_id_card`]).
#[must_use]
pub fn mask_id_card<T: Into<TextInput>>(value: T) -> Option<String> {
    mask_if_valid(value, &IdCardValidator, ID_CARD_MASK)
}
