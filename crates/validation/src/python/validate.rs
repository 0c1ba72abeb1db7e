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

#![allow(clippy::doc_markdown, reason = "Python docstrings")]
#![allow(
    clippy::needless_pass_by_value,
    reason = "Python FFI requires owned types"
)]

use pyo3::prelude::*;
use pyo3_stub_gen::derive::gen_stub_pyfunction;
use toolbelt_core::python::input::PyTextInput;

use crate::{
    mask::{mask_id_card, mask_phone},
    strength::check_password_strength,
    validate::{
        is_base64, is_date, is_email, is_id_card, is_num, is_password_medium, is_password_strict,
        is_phone,
    },
};

/// Returns the heuristic strength score of a password.
///
/// Parameters
/// ----------
/// password : str | int | float
///     The password to score. Numbers are scored by their decimal text form.
///
/// Returns
/// -------
/// int
///     The score in the range [0, 5].
///
/// Examples
/// --------
/// >>> check_password_strength("Abcde1!")
/// 5
/// >>> check_password_strength(123456)
/// 2
///
#[gen_stub_pyfunction(module = "toolbelt.validation")]
#[pyfunction(name = "check_password_strength")]
pub fn py_check_password_strength(password: PyTextInput) -> u8 {
    check_password_strength(password).value()
}

/// Masks the middle four digits of a mobile phone number.
///
/// Parameters
/// ----------
/// value : str | int | float
///     The phone number, optionally prefixed with `+86` or `0086`.
///
/// Returns
/// -------
/// str or None
///     None if the value is not a phone number.
///
/// Examples
/// --------
/// >>> mask_phone(13722164537)
/// '137****4537'
///
#[gen_stub_pyfunction(module = "toolbelt.validation")]
#[pyfunction(name = "mask_phone")]
pub fn py_mask_phone(value: PyTextInput) -> Option<String> {
    mask_phone(value)
}

/// Masks an ID card number, keeping the first 3 and last 4 characters.
///
/// Parameters
/// ----------
/// value : str | int | float
///     The ID card number.
///
/// Returns
/// -------
/// str or None
///     None if the value is not an ID card number.
///
#[gen_stub_pyfunction(module = "toolbelt.validation")]
#[pyfunction(name = "mask_id_card")]
pub fn py_mask_id_card(value: PyTextInput) -> Option<String> {
    mask_id_card(value)
}

/// Returns whether the value is a mainland mobile phone number.
///
/// Parameters
/// ----------
/// value : str | int | float
///
/// Returns
/// -------
/// bool
///
#[gen_stub_pyfunction(module = "toolbelt.validation")]
#[pyfunction(name = "is_phone")]
pub fn py_is_phone(value: PyTextInput) -> bool {
    is_phone(value)
}

/// Returns whether the value is an email address.
///
/// Parameters
/// ----------
/// value : str
///
/// Returns
/// -------
/// bool
///
#[gen_stub_pyfunction(module = "toolbelt.validation")]
#[pyfunction(name = "is_email")]
pub fn py_is_email(value: String) -> bool {
    is_email(&value)
}

/// Returns whether the value is a 15-digit or 18-character ID card number.
///
/// Parameters
/// ----------
/// value : str | int | float
///
/// Returns
/// -------
/// bool
///
#[gen_stub_pyfunction(module = "toolbelt.validation")]
#[pyfunction(name = "is_id_card")]
pub fn py_is_id_card(value: PyTextInput) -> bool {
    is_id_card(value)
}

/// Returns whether the value is a non-negative number with at most two fraction digits.
///
/// Parameters
/// ----------
/// value : str | int | float
///
/// Returns
/// -------
/// bool
///
/// Examples
/// --------
/// >>> is_num("12.34")
/// True
/// >>> is_num(-1)
/// False
///
#[gen_stub_pyfunction(module = "toolbelt.validation")]
#[pyfunction(name = "is_num")]
pub fn py_is_num(value: PyTextInput) -> bool {
    is_num(value)
}

/// Returns whether the value is a `YYYY-MM-DD` calendar date.
///
/// Parameters
/// ----------
/// value : str
///
/// Returns
/// -------
/// bool
///
/// Examples
/// --------
/// >>> is_date("2000-02-29")
/// True
/// >>> is_date("2021-02-29")
/// False
///
#[gen_stub_pyfunction(module = "toolbelt.validation")]
#[pyfunction(name = "is_date")]
pub fn py_is_date(value: String) -> bool {
    is_date(&value)
}

/// Returns whether the value is canonical standard base64.
///
/// Parameters
/// ----------
/// value : str
///
/// Returns
/// -------
/// bool
///
#[gen_stub_pyfunction(module = "toolbelt.validation")]
#[pyfunction(name = "is_base64")]
pub fn py_is_base64(value: String) -> bool {
    is_base64(&value)
}

/// Returns whether the password meets the medium policy.
///
/// At least 6 characters from at least 3 of: uppercase, lowercase, digit, other.
///
/// Parameters
/// ----------
/// value : str
///
/// Returns
/// -------
/// bool
///
#[gen_stub_pyfunction(module = "toolbelt.validation")]
#[pyfunction(name = "is_password_medium")]
pub fn py_is_password_medium(value: String) -> bool {
    is_password_medium(&value)
}

/// Returns whether the password meets the strict policy.
///
/// At least 6 characters without whitespace, with a digit, an uppercase letter,
/// a lowercase letter and one of `!@#$%^&*?`.
///
/// Parameters
/// ----------
/// value : str
///
/// Returns
/// -------
/// bool
///
#[gen_stub_pyfunction(module = "toolbelt.validation")]
#[pyfunction(name = "is_password_strict")]
pub fn py_is_password_strict(value: String) -> bool {
    is_password_strict(&value)
}
