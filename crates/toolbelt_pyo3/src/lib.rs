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

//! Python extension module exposing the toolbelt helpers.

use pyo3::{prelude::*, wrap_pymodule};
use toolbelt_common::logging::ensure_logging_initialized;

/// Loaded as `toolbelt_pyo3`, with `core` and `validation` submodules.
///
/// Installs the logger from `TOOLBELT_LOG` on import.
#[pymodule]
fn _toolbelt_pyo3(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ensure_logging_initialized();

    m.add_wrapped(wrap_pymodule!(toolbelt_core::python::core))?;
    m.add_wrapped(wrap_pymodule!(toolbelt_validation::python::validation))?;

    Ok(())
}
