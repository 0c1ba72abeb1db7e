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

//! Format validators, password-strength scoring and shape-aware masking.
//!
//! - [`validate`]: phone, email, ID card, date, number, base64 and password policy checks.
//! - [`strength`]: the 1 + 4 criteria password-strength score.
//! - [`mask`]: masking that only applies to values of an expected shape.
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

pub mod mask;
pub mod strength;
pub mod validate;

#[cfg(feature = "python")]
pub mod python;

// Re-exports
pub use crate::{
    mask::{mask_id_card, mask_phone},
    strength::{
        PasswordReport, PasswordStrength, StrengthScore, check_password_strength,
        evaluate_password,
    },
    validate::{EmailValidator, IdCardValidator, PhoneValidator, is_email, is_id_card, is_phone},
};
