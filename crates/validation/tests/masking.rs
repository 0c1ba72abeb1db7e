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

//! End-to-end checks across the masking engine, validators and the strength scorer.

use rstest::rstest;
use toolbelt_core::{MaskConfig, MaskError, TextInput, mask_if_valid, mask_sensitive_info};
use toolbelt_validation::{
    PhoneValidator, StrengthScore, check_password_strength, evaluate_password, is_phone,
    mask_phone,
};

#[rstest]
#[case("13722164537", 3, 4, "137****4537")]
#[case("123456199001011234", 3, 4, "123***********1234")]
#[case("123456199001011234", 4, 4, "1234**********1234")]
fn test_mask_examples(
    #[case] input: &str,
    #[case] front_len: usize,
    #[case] end_len: usize,
    #[case] expected: &str,
) {
    assert_eq!(mask_sensitive_info(input, front_len, end_len).unwrap(), expected);
}

#[rstest]
fn test_mask_too_short_is_an_error_but_shape_mismatch_is_none() {
    assert!(matches!(
        mask_sensitive_info("12345", 3, 2),
        Err(MaskError::InputTooShort { len: 5, .. })
    ));
    assert_eq!(mask_phone("12345"), None);
}

#[rstest]
fn test_phone_mask_agrees_with_general_engine() {
    for phone in ["13722164537", "15800001111", "19912345678"] {
        assert!(is_phone(phone));
        assert_eq!(
            mask_phone(phone),
            Some(mask_sensitive_info(phone, 3, 4).unwrap())
        );
        assert_eq!(
            mask_if_valid(phone, &PhoneValidator, MaskConfig::default()),
            mask_phone(phone)
        );
    }
}

#[rstest]
#[case(TextInput::from("Abcde1!"), 5)]
#[case(TextInput::from(""), 0)]
#[case(TextInput::from(123_456_789_u64), 2)]
#[case(TextInput::from(-12_345_i64), 2)]
fn test_score_accepts_tagged_input(#[case] input: TextInput, #[case] expected: u8) {
    assert_eq!(check_password_strength(&input), expected);
}

#[rstest]
fn test_score_always_in_range() {
    let samples = [
        "", "a", "aaaaaa", "AAAAAA", "000000", "((((((", "aA0(bB", "密码1234Ab!", " \t\n\r  ",
    ];

    for sample in samples {
        let report = evaluate_password(sample);
        assert!(report.score >= StrengthScore::MIN && report.score <= StrengthScore::MAX);
        assert_eq!(check_password_strength(sample), report.score);
    }
}
