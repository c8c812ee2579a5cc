// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart plug device.

use std::fmt;

use crate::error::ValueError;
use crate::types::ConsumptionRate;

use super::{Switchable, state_word};

/// A switchable plug with a bounded consumption rate.
///
/// # Examples
///
/// ```
/// use smarthome_lib::device::{Plug, Switchable};
///
/// let mut plug = Plug::new(45).unwrap();
/// plug.toggle();
/// assert!(plug.switched_on());
/// assert_eq!(plug.describe(), "Smart plug is on with a consumption rate of 45");
///
/// assert!(plug.set_consumption_rate(200).is_err());
/// assert_eq!(plug.consumption_rate().value(), 45);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Plug {
    switched_on: bool,
    consumption_rate: ConsumptionRate,
}

impl Plug {
    /// Creates a switched off plug with the given consumption rate.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the rate is outside 0-150.
    pub fn new(consumption_rate: i64) -> Result<Self, ValueError> {
        Ok(Self {
            switched_on: false,
            consumption_rate: ConsumptionRate::new(consumption_rate)?,
        })
    }

    /// Returns the consumption rate.
    #[must_use]
    pub const fn consumption_rate(&self) -> ConsumptionRate {
        self.consumption_rate
    }

    /// Sets the consumption rate.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the rate is outside 0-150. The
    /// current rate is kept.
    pub fn set_consumption_rate(&mut self, value: i64) -> Result<(), ValueError> {
        self.consumption_rate = ConsumptionRate::new(value)?;
        Ok(())
    }
}

impl Switchable for Plug {
    fn switched_on(&self) -> bool {
        self.switched_on
    }

    fn set_switched_on(&mut self, on: bool) {
        self.switched_on = on;
    }
}

impl fmt::Display for Plug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Smart plug is {} with a consumption rate of {}",
            state_word(self.switched_on),
            self.consumption_rate
        )
    }
}
