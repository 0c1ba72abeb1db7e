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

use pyo3::prelude::*;
use pyo3_stub_gen::{PyStubType, TypeInfo};

use crate::input::TextInput;

/// A Python `str | int | float` argument.
///
/// Variants are tried in order, so integers that fit an `i64` extract as [`PyTextInput::Int`]
/// and only larger non-negative integers fall through to [`PyTextInput::UInt`].
#[derive(Clone, Debug, PartialEq, FromPyObject)]
pub enum PyTextInput {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl From<PyTextInput> for TextInput {
    fn from(value: PyTextInput) -> Self {
        match value {
            PyTextInput::Text(s) => Self::Text(s),
            PyTextInput::Int(v) => Self::Int(v),
            PyTextInput::UInt(v) => Self::UInt(v),
            PyTextInput::Float(v) => Self::Float(v),
        }
    }
}

impl PyStubType for PyTextInput {
    fn type_output() -> TypeInfo {
        String::type_output() | i64::type_output() | f64::type_output()
    }
}

#[cfg(test)]
mod tests {
    use pyo3::types::PyList;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_extract_python_values() {
        Python::initialize();
        Python::attach(|py| {
            let text = "13722164537".into_pyobject(py).unwrap().into_any();
            let int = 13_722_164_537_i64.into_pyobject(py).unwrap().into_any();
            let big = u64::MAX.into_pyobject(py).unwrap().into_any();
            let float = 0.5_f64.into_pyobject(py).unwrap().into_any();

            assert_eq!(
                text.extract::<PyTextInput>().unwrap(),
                PyTextInput::Text("13722164537".to_string())
            );
            assert_eq!(
                int.extract::<PyTextInput>().unwrap(),
                PyTextInput::Int(13_722_164_537)
            );
            assert_eq!(
                big.extract::<PyTextInput>().unwrap(),
                PyTextInput::UInt(u64::MAX)
            );
            assert_eq!(
                float.extract::<PyTextInput>().unwrap(),
                PyTextInput::Float(0.5)
            );
        });
    }

    #[rstest]
    fn test_extract_rejects_other_types() {
        Python::initialize();
        Python::attach(|py| {
            let list = PyList::empty(py).into_any();
            assert!(list.extract::<PyTextInput>().is_err());
        });
    }

    #[rstest]
    fn test_into_text_input() {
        assert_eq!(
            TextInput::from(PyTextInput::Int(13_722_164_537)).to_text(),
            "13722164537"
        );
        assert_eq!(TextInput::from(PyTextInput::Float(0.5)).to_text(), "0.5");
    }
}
