// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for device attributes.
//!
//! This module provides type-safe representations of the values a device
//! carries. Each type ensures values are within their valid ranges at
//! construction time, so a device can never hold an out-of-domain attribute.
//!
//! # Types
//!
//! - [`ConsumptionRate`] - Smart plug consumption rate (0-150)
//! - [`Channel`] - Television channel number (1-734)
//! - [`WashMode`] - Washing machine programme (`Daily wash`, `Quick wash`, `Eco`)
//! - [`OptionValue`] - An untyped integer or text value awaiting routing
//! - [`Attribute`] / [`ValueKind`] - Which attribute a value targets and what it expects

mod channel;
mod consumption_rate;
mod option_value;
mod wash_mode;

pub use channel::Channel;
pub use consumption_rate::ConsumptionRate;
pub use option_value::{Attribute, OptionValue, ValueKind};
pub use wash_mode::WashMode;
