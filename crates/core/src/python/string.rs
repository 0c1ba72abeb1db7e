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

use pyo3::{exceptions::PyValueError, prelude::*};
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use super::input::PyTextInput;
use crate::string::{DEFAULT_END_LEN, DEFAULT_FRONT_LEN, mask_sensitive_info};

/// Masks the middle of a value, keeping leading and trailing characters visible.
///
/// Parameters
/// ----------
/// value : str | int | float
///     The value to mask. Numbers are masked by their decimal text form.
/// front_len : int, default 3
///     The count of leading characters left visible.
/// end_len : int, default 4
///     The count of trailing characters left visible.
///
/// Returns
/// -------
/// str
///
/// Raises
/// ------
/// ValueError
///     If the value is not longer than `front_len + end_len`.
///
/// Examples
/// --------
/// >>> mask_sensitive_info("13722164537")
/// '137****4537'
/// >>> mask_sensitive_info(123456199001011234, 4, 4)
/// '1234**********1234'
///
#[gen_stub_pyfunction(module = "toolbelt.core")]
#[pyfunction(name = "mask_sensitive_info")]
#[pyo3(signature = (value, front_len=DEFAULT_FRONT_LEN, end_len=DEFAULT_END_LEN))]
pub fn py_mask_sensitive_info(
    value: PyTextInput,
    front_len: usize,
    end_len: usize,
) -> PyResult<String> {
    mask_sensitive_info(value, front_len, end_len).map_err(|e| PyValueError::new_err(e.to_string()))
}
