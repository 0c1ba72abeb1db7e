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

//! Text-convertible inputs accepted at the API boundary.
//!
//! Helpers in this workspace accept a closed set of input representations rather
//! than arbitrary values. Every variant has a single, locale-independent text form:
//!
//! | Variant | Text form                                       |
//! |---------|-------------------------------------------------|
//! | `Text`  | The string as-is.                               |
//! | `Int`   | Decimal digits with a leading `-` if negative.  |
//! | `UInt`  | Decimal digits.                                 |
//! | `Float` | Shortest round-trip decimal, no exponent, no grouping (`NaN`, `inf`, `-inf` for non-finite values). |

use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

/// A value with a deterministic text representation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    /// A text value used verbatim.
    Text(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
}

impl TextInput {
    /// Returns the text representation of the input.
    ///
    /// Borrows for [`TextInput::Text`], allocates for numeric variants.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::Int(v) => Cow::Owned(v.to_string()),
            Self::UInt(v) => Cow::Owned(v.to_string()),
            Self::Float(v) => Cow::Owned(v.to_string()),
        }
    }

    /// Returns the length of the text representation in Unicode scalar values.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.to_text().chars().count()
    }
}

impl Display for TextInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TextInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for TextInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<&TextInput> for TextInput {
    fn from(value: &TextInput) -> Self {
        value.clone()
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TextInput {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TextInput {
                fn from(value: $t) -> Self {
                    Self::UInt(u64::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for TextInput {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<f32> for TextInput {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for TextInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
