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

//! Helpers for coercing and comparing plain values.

use serde::{Deserialize, Serialize};

/// Either a single item or a sequence of items.
///
/// Deserializes from either a bare value or an array, which suits configuration
/// fields accepting `"a"` as well as `["a", "b"]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A sequence of items.
    Many(Vec<T>),
    /// A single item.
    One(T),
}

impl<T> OneOrMany<T> {
    /// Converts into a vector, wrapping a single item.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items)
    }
}

impl<T, const N: usize> From<[T; N]> for OneOrMany<T> {
    fn from(items: [T; N]) -> Self {
        Self::Many(items.into())
    }
}

/// Returns `item` as a vector: sequences unchanged, single items wrapped.
///
/// A single item must be wrapped in [`OneOrMany::One`], since a bare `T` cannot be told
/// apart from a sequence at the type level.
///
/// # Examples
///
/// ```
/// use toolbelt_core::value::{OneOrMany, to_array};
///
/// assert_eq!(to_array(OneOrMany::One("hello,world")), vec!["hello,world"]);
/// assert_eq!(to_array(vec![1, 2]), vec![1, 2]);
/// assert_eq!(to_array([3, 4, 5]), vec![3, 4, 5]);
/// ```
#[must_use]
pub fn to_array<T>(item: impl Into<OneOrMany<T>>) -> Vec<T> {
    item.into().into_vec()
}

/// Returns whether two values have the same JSON representation.
///
/// Object keys are compared regardless of order. Returns `false` if either value
/// fails to serialize.
#[must_use]
pub fn is_same_value<A, B>(new_value: &A, old_value: &B) -> bool
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    match (serde_json::to_value(new_value), serde_json::to_value(old_value)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_to_array_single_item() {
        assert_eq!(to_array(OneOrMany::One("hello,world")), vec!["hello,world"]);
    }

    #[rstest]
    fn test_to_array_vec_unchanged() {
        assert_eq!(to_array(vec![1, 2]), vec![1, 2]);
        assert_eq!(to_array([3, 4, 5]), vec![3, 4, 5]);
        assert!(to_array(Vec::<u8>::new()).is_empty());
    }

    #[rstest]
    #[case(r#""a""#, vec!["a"])]
    #[case(r#"["a", "b"]"#, vec!["a", "b"])]
    #[case("[]", vec![])]
    fn test_one_or_many_deserialize(#[case] json: &str, #[case] expected: Vec<&str>) {
        let parsed: OneOrMany<String> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_vec(), expected);
    }

    #[rstest]
    fn test_is_same_value() {
        assert!(is_same_value(&vec![1, 2], &[1, 2]));
        assert!(!is_same_value(&vec![1, 2], &vec![2, 1]));
        assert!(is_same_value("abc", &"abc".to_string()));
        assert!(!is_same_value(&1, &"1"));
        assert!(is_same_value(&Option::<u8>::None, &()));
    }

    #[rstest]
    fn test_is_same_value_ignores_key_order() {
        let a = HashMap::from([("x", 1), ("y", 2)]);
        let b = HashMap::from([("y", 2), ("x", 1)]);
        assert!(is_same_value(&a, &b));
    }

    #[rstest]
    fn test_is_same_value_serialization_failure() {
        // Non-string map keys cannot be represented in JSON.
        let a = HashMap::from([((1, 2), 3)]);
        assert!(!is_same_value(&a, &a));
    }
}
