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

//! Python bindings from [PyO3](https://pyo3.rs).

pub mod validate;

use pyo3::prelude::*;

/// Loaded as `toolbelt_pyo3.validation`.
///
/// # Errors
///
/// Returns a `PyErr` if registering any module components fails.
#[rustfmt::skip]
#[pymodule]
pub fn validation(_: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(validate::py_check_password_strength, m)?)?;
    m.add_function(wrap_pyfunction!(validate::py_mask_phone, m)?)?;
    m.add_function(wrap_pyfunction!(validate::py_mask_id_card, m)?)?;
    m.add_function(wrap_pyfunction!(validate::py_is_phone, m)?)?;
    m.add_function(wrap_pyfunction!(validate::py_is_email, m)?)?;
    m.add_function(wrap_pyfunction!(validate::py_is_id_card, m)?)?;
    m.add_function(wrap_pyfunction!(validate::py_is_num, m)?)?;
    m.add_function(wrap_pyfunction!(validate::py_is_date, m)?)?;
    m.add_function(wrap_pyfunction!(validate::py_is_base64, m)?)?;
    m.add_function(wrap_pyfunction!(validate::py_is_password_medium, m)?)?;
    m.add_function(wrap_pyfunction!(validate::py_is_password_strict, m)?)?;
    Ok(())
}
