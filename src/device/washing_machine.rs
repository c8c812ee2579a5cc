// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart washing machine device.

use std::fmt;

use crate::error::ValueError;
use crate::types::WashMode;

use super::{Switchable, state_word};

/// A switchable washing machine with a selected wash mode.
///
/// New machines start in `Daily wash` mode.
///
/// # Examples
///
/// ```
/// use smarthome_lib::device::WashingMachine;
/// use smarthome_lib::types::WashMode;
///
/// let mut machine = WashingMachine::new();
/// assert_eq!(machine.wash_mode(), WashMode::DailyWash);
///
/// machine.set_wash_mode("ECO").unwrap();
/// assert_eq!(machine.wash_mode().as_str(), "Eco");
///
/// assert!(machine.set_wash_mode("Wash and Dry").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct WashingMachine {
    switched_on: bool,
    wash_mode: WashMode,
}

impl WashingMachine {
    /// Creates a switched off machine in `Daily wash` mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a switched off machine in the given mode.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidWashMode` if the mode is not recognised.
    pub fn with_wash_mode(mode: &str) -> Result<Self, ValueError> {
        Ok(Self {
            switched_on: false,
            wash_mode: mode.parse()?,
        })
    }

    /// Returns the current wash mode.
    #[must_use]
    pub const fn wash_mode(&self) -> WashMode {
        self.wash_mode
    }

    /// Selects a wash mode, matching the input case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidWashMode` if the mode is not recognised.
    /// The current mode is kept.
    pub fn set_wash_mode(&mut self, mode: &str) -> Result<(), ValueError> {
        self.wash_mode = mode.parse()?;
        Ok(())
    }
}

impl Switchable for WashingMachine {
    fn switched_on(&self) -> bool {
        self.switched_on
    }

    fn set_switched_on(&mut self, on: bool) {
        self.switched_on = on;
    }
}

impl fmt::Display for WashingMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Smart washing machine is {} with wash mode: {}",
            state_word(self.switched_on),
            self.wash_mode
        )
    }
}
