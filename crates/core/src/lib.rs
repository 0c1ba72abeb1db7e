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

//! Core helpers for the toolbelt utility library.
//!
//! The crate provides:
//!
//! - A closed set of text-convertible inputs ([`TextInput`]).
//! - The sensitive-data masking engine ([`string::mask_sensitive_info`]).
//! - Date/time formatting and timestamp helpers.
//! - Small value helpers such as [`value::to_array`].
//! - Correctness checks and a JSON [`serialization::Serializable`] trait.
//!
//! # Feature flags
//!
//! - `python`: Enables Python bindings from [PyO3](https://pyo3.rs).
//! - `extension-module`: Builds as a Python extension module (used with `python`).

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod correctness;
pub mod datetime;
pub mod input;
pub mod serialization;
pub mod string;
pub mod value;

#[cfg(feature = "python")]
pub mod python;

// Re-exports
pub use crate::{
    input::TextInput,
    string::{FormatValidator, MASK_CHAR, MaskConfig, MaskError, mask_if_valid, mask_sensitive_info},
};
