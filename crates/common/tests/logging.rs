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

//! Installs the global logger and drives library calls through it.

use rstest::rstest;
use toolbelt_common::logging::{ensure_logging_initialized, logging_is_initialized};
use toolbelt_core::mask_sensitive_info;
use toolbelt_validation::{check_password_strength, mask_phone};

#[rstest]
fn test_library_calls_with_logger_installed() {
    assert!(ensure_logging_initialized());
    assert!(logging_is_initialized());
    // Idempotent once installed
    assert!(ensure_logging_initialized());

    assert_eq!(mask_phone("not a phone"), None);
    assert_eq!(mask_phone("13722164537").as_deref(), Some("137****4537"));
    assert!(mask_sensitive_info("12345", 3, 2).is_err());
    assert_eq!(check_password_strength("Strong1!"), 5);

    log::logger().flush();
}
