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

//! Format validators.
//!
//! Every validator is a total predicate: malformed input yields `false`, never an error.
//! Only ASCII digits count as digits.

use std::sync::LazyLock;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::NaiveDate;
use regex::Regex;
use toolbelt_core::{TextInput, string::FormatValidator};

/// Mainland mobile number: `1`, a second digit in `3-9`, nine more digits, optionally
/// prefixed by the `+86` or `0086` country code.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:\+|00)86)?1[3-9][0-9]{9}$").expect("phone pattern is a valid regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(?:(?:[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*)|(?:".+"))"#,
        r"@(?:(?:\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(?:(?:[a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$",
    ))
    .expect("email pattern is a valid regex")
});

/// 1st generation (15 digits) and 2nd generation (18 characters) ID card numbers,
/// including birth date validation with leap years.
static ID_CARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[0-9]{6}(?:",
        // 2nd generation: YYYYMMDD + 3 digit sequence
        r"(?:(?:(?:(?:19|20)[0-9]{2})(?:0[13-9]|1[012])(?:0[1-9]|[12][0-9]|30))",
        r"|(?:(?:19|20)[0-9]{2}(?:0[13578]|1[02])31)",
        r"|(?:(?:19|20)[0-9]{2}02(?:0[1-9]|1[0-9]|2[0-8]))",
        r"|(?:(?:(?:19|20)(?:[13579][26]|[2468][048]|0[48])|2000)0229))[0-9]{3}",
        // 1st generation: YYMMDD + 2 digit sequence
        r"|(?:(?:[0-9]{2}(?:0[13-9]|1[012])(?:0[1-9]|[12][0-9]|30))",
        r"|(?:[0-9]{2}(?:0[13578]|1[02])31)",
        r"|(?:[0-9]{2}02(?:0[1-9]|1[0-9]|2[0-8]))",
        r"|(?:(?:[13579][26]|[2468][048]|0[048])0229))[0-9]{2}",
        r")(?:[0-9]|X|x)$",
    ))
    .expect("ID card pattern is a valid regex")
});

static NUM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:\.[0-9]{1,2})?$").expect("number pattern is a valid regex")
});

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("date pattern is a valid regex")
});

/// Characters accepted as the special character of [`is_password_strict`].
pub const STRICT_SPECIAL_CHARACTERS: &str = "!@#$%^&*?";

/// Minimum length of a password accepted by the policy checks.
pub const MIN_POLICY_PASSWORD_LEN: usize = 6;

/// Returns whether `value` is a mainland mobile phone number.
///
/// # Examples
///
/// ```
/// use toolbelt_validation::is_phone;
///
/// assert!(is_phone("13722164537"));
/// assert!(is_phone("+8613722164537"));
/// assert!(is_phone(13722164537_u64));
/// assert!(!is_phone("12722164537"));
/// ```
#[must_use]
pub fn is_phone<T: Into<TextInput>>(value: T) -> bool {
    PHONE_RE.is_match(&value.into().to_text())
}

/// Returns whether `value` is an email address.
///
/// The local part is either a dot-separated run of non-special characters or a quoted
/// string; the domain is either a bracketed IPv4 address or dotted labels ending in a
/// TLD of two or more letters.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Returns whether `value` is a 15-digit or 18-character ID card number.
#[must_use]
pub fn is_id_card<T: Into<TextInput>>(value: T) -> bool {
    ID_CARD_RE.is_match(&value.into().to_text())
}

/// Returns whether `value` is a non-negative decimal number with at most two fraction digits.
#[must_use]
pub fn is_num<T: Into<TextInput>>(value: T) -> bool {
    NUM_RE.is_match(&value.into().to_text())
}

/// Returns whether `value` is a `YYYY-MM-DD` calendar date between years 0001 and 9999.
///
/// February 29th is only accepted in leap years.
#[must_use]
pub fn is_date(value: &str) -> bool {
    let Some(caps) = DATE_RE.captures(value) else {
        return false;
    };

    let (Ok(year), Ok(month), Ok(day)) = (
        caps[1].parse::<i32>(),
        caps[2].parse::<u32>(),
        caps[3].parse::<u32>(),
    ) else {
        return false;
    };

    year >= 1 && NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Returns whether `value` is canonical standard base64 (padded, no whitespace).
///
/// Blank input is rejected.
#[must_use]
pub fn is_base64(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }

    match STANDARD.decode(value) {
        Ok(bytes) => STANDARD.encode(bytes) == value,
        Err(_) => false,
    }
}

/// Returns whether `value` meets the medium password policy.
///
/// At least 6 characters, drawn from at least 3 of the 4 classes: uppercase, lowercase,
/// digit and other (any character that is not an ASCII letter or digit).
#[must_use]
pub fn is_password_medium(value: &str) -> bool {
    if value.chars().count() < MIN_POLICY_PASSWORD_LEN {
        return false;
    }

    let classes = [
        value.chars().any(|c| c.is_ascii_uppercase()),
        value.chars().any(|c| c.is_ascii_lowercase()),
        value.chars().any(|c| c.is_ascii_digit()),
        value.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];

    classes.iter().filter(|present| **present).count() >= 3
}

/// Returns whether `value` meets the strict password policy.
///
/// No whitespace, at least 6 characters, and at least one digit, one uppercase letter,
/// one lowercase letter and one of [`STRICT_SPECIAL_CHARACTERS`].
#[must_use]
pub fn is_password_strict(value: &str) -> bool {
    value.chars().count() >= MIN_POLICY_PASSWORD_LEN
        && !value.chars().any(char::is_whitespace)
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| STRICT_SPECIAL_CHARACTERS.contains(c))
}

/// Accepts mainland mobile phone numbers, see [`is_phone`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhoneValidator;

impl FormatValidator for PhoneValidator {
    fn is_valid(&self, text: &str) -> bool {
        is_phone(text)
    }
}

/// Accepts email addresses, see [`is_email`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmailValidator;

impl FormatValidator for EmailValidator {
    fn is_valid(&self, text: &str) -> bool {
        is_email(text)
    }
}

/// Accepts ID card numbers, see [`is_id_card`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdCardValidator;

impl FormatValidator for IdCardValidator {
    fn is_valid(&self, text: &str) -> bool {
        is_id_card(text)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("13722164537", true)]
    #[case("19912345678", true)]
    #[case("+8613722164537", true)]
    #[case("008613722164537", true)]
    #[case("8613722164537", false)]
    #[case("12722164537", false)]
    #[case("1372216453", false)]
    #[case("137221645370", false)]
    #[case("1372216453a", false)]
    #[case(" 13722164537", false)]
    #[case("１３７２２１６４５３７", false)]
    #[case("", false)]
    fn test_is_phone(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_phone(value), expected);
    }

    #[rstest]
    fn test_is_phone_numeric_input() {
        assert!(is_phone(13_722_164_537_u64));
        assert!(!is_phone(12_345_i32));
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last@sub.example.org", true)]
    #[case("\"quoted name\"@example.com", true)]
    #[case("user@[192.168.0.1]", true)]
    #[case("user@example", false)]
    #[case("user@example.c", false)]
    #[case("user.@example.com", false)]
    #[case("us er@example.com", false)]
    #[case("user@@example.com", false)]
    #[case("@example.com", false)]
    #[case("", false)]
    fn test_is_email(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_email(value), expected);
    }

    #[rstest]
    #[case("123456199001011234", true)]
    #[case("11010520000229123X", true)]
    #[case("11010519960229123x", true)]
    #[case("11010520010229123X", false)]
    #[case("110105199013011234", false)]
    #[case("110105199004311234", false)]
    #[case("110105180001011234", false)]
    #[case("123456900101123", true)]
    #[case("123456960229123", true)]
    #[case("123456970229123", false)]
    #[case("12345619900101123", false)]
    #[case("", false)]
    fn test_is_id_card(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_id_card(value), expected);
    }

    #[rstest]
    #[case("0", true)]
    #[case("12", true)]
    #[case("12.3", true)]
    #[case("12.34", true)]
    #[case("12.345", false)]
    #[case("12.", false)]
    #[case(".5", false)]
    #[case("-1", false)]
    #[case("1e3", false)]
    fn test_is_num(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_num(value), expected);
    }

    #[rstest]
    fn test_is_num_numeric_input() {
        assert!(is_num(12.5_f64));
        assert!(is_num(42_u32));
        assert!(!is_num(-1_i32));
        assert!(!is_num(0.125_f64));
    }

    #[rstest]
    #[case("2000-02-29", true)]
    #[case("2021-02-29", false)]
    #[case("2024-02-29", true)]
    #[case("1900-02-29", false)]
    #[case("1600-02-29", true)]
    #[case("2021-04-31", false)]
    #[case("2021-12-31", true)]
    #[case("2021-13-01", false)]
    #[case("0000-01-01", false)]
    #[case("0001-01-01", true)]
    #[case("2021-1-01", false)]
    #[case("2021-01-01 ", false)]
    #[case("2021-01-01x", false)]
    fn test_is_date(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_date(value), expected);
    }

    #[rstest]
    #[case("aGVsbG8=", true)]
    #[case("aGVsbG8gd29ybGQ=", true)]
    #[case("YQ==", true)]
    #[case("aGVsbG8", false)]
    #[case("aGVsbG8=\n", false)]
    #[case("not base64!", false)]
    #[case("", false)]
    #[case("   ", false)]
    fn test_is_base64(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_base64(value), expected);
    }

    #[rstest]
    #[case("Abc123", true)]
    #[case("abc12!", true)]
    #[case("ABC!@#1", true)]
    #[case("abcdef", false)]
    #[case("abcDEF", false)]
    #[case("abc123", false)]
    #[case("123!@#", false)]
    #[case("Ab1!", false)]
    fn test_is_password_medium(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_password_medium(value), expected);
    }

    #[rstest]
    #[case("Abc12!", true)]
    #[case("Strong1?", true)]
    #[case("Abc123", false)]
    #[case("abc12!", false)]
    #[case("ABC12!", false)]
    #[case("Abc 12!", false)]
    #[case("Ab1!", false)]
    #[case("Abc12_", false)]
    fn test_is_password_strict(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_password_strict(value), expected);
    }

    #[rstest]
    fn test_validators_delegate() {
        assert!(PhoneValidator.is_valid("13722164537"));
        assert!(!PhoneValidator.is_valid("user@example.com"));
        assert!(EmailValidator.is_valid("user@example.com"));
        assert!(IdCardValidator.is_valid("123456199001011234"));
        assert!(!IdCardValidator.is_valid("13722164537"));
    }
}
