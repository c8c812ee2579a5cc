// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Consumption rate type for smart plugs.
//!
//! This module provides a type-safe representation of a plug's consumption
//! rate, ensuring values are always within the valid range of 0-150.

use std::fmt;

use crate::error::ValueError;

use super::Attribute;

/// Power draw of a smart plug (0-150).
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::ConsumptionRate;
///
/// let rate = ConsumptionRate::new(45).unwrap();
/// assert_eq!(rate.value(), 45);
///
/// assert_eq!(ConsumptionRate::MIN.value(), 0);
/// assert_eq!(ConsumptionRate::MAX.value(), 150);
///
/// // Invalid values return error
/// assert!(ConsumptionRate::new(151).is_err());
/// assert!(ConsumptionRate::new(-10).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct ConsumptionRate(u8);

impl ConsumptionRate {
    /// Minimum consumption rate.
    pub const MIN: Self = Self(0);

    /// Maximum consumption rate.
    pub const MAX: Self = Self(150);

    /// Creates a new consumption rate.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside 0-150.
    pub fn new(value: i64) -> Result<Self, ValueError> {
        match u8::try_from(value) {
            Ok(rate) if rate <= Self::MAX.0 => Ok(Self(rate)),
            _ => Err(ValueError::OutOfRange {
                attribute: Attribute::ConsumptionRate,
                min: i64::from(Self::MIN.0),
                max: i64::from(Self::MAX.0),
                actual: value,
            }),
        }
    }

    /// Returns the consumption rate value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for ConsumptionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ConsumptionRate {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConsumptionRate> for u8 {
    fn from(rate: ConsumptionRate) -> Self {
        rate.0
    }
}
