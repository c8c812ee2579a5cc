// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device model.
//!
//! Every device carries an on/off state plus exactly one validated attribute
//! that depends on its kind:
//!
//! | Kind             | Attribute          | Domain                              |
//! |------------------|--------------------|-------------------------------------|
//! | [`Plug`]           | consumption rate   | 0-150                               |
//! | [`Television`]     | channel number     | 1-734                               |
//! | [`WashingMachine`] | wash mode          | `Daily wash`, `Quick wash`, `Eco`   |
//!
//! The shared on/off behaviour is the [`Switchable`] trait. The closed
//! [`Device`] enum is what a home stores; it routes untyped option values to
//! the right attribute with a single `match`.
//!
//! ```
//! use smarthome_lib::device::{Device, Switchable};
//!
//! let mut device = Device::from_input("Plug", "45").unwrap();
//! device.update_option(75).unwrap();
//! device.toggle();
//! assert_eq!(device.describe(), "Smart plug is on with a consumption rate of 75");
//!
//! // A plug wants an integer
//! assert!(device.update_option("Eco").is_err());
//! ```

mod kind;
mod plug;
mod television;
mod washing_machine;

use std::fmt;

use crate::error::{Error, Result};
use crate::types::{Attribute, OptionValue};

pub use kind::DeviceKind;
pub use plug::Plug;
pub use television::Television;
pub use washing_machine::WashingMachine;

/// The capability set shared by every device: an on/off switch and a
/// human readable description.
pub trait Switchable: fmt::Display {
    /// Returns `true` if the device is switched on.
    fn switched_on(&self) -> bool;

    /// Switches the device on or off.
    fn set_switched_on(&mut self, on: bool);

    /// Flips the on/off state.
    fn toggle(&mut self) {
        let on = !self.switched_on();
        self.set_switched_on(on);
    }

    /// Describes the kind, on/off state and attribute value of the device.
    fn describe(&self) -> String {
        self.to_string()
    }
}

pub(crate) const fn state_word(switched_on: bool) -> &'static str {
    if switched_on { "on" } else { "off" }
}

/// Any device a home can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum Device {
    /// A smart plug.
    Plug(Plug),
    /// A smart television.
    Television(Television),
    /// A smart washing machine.
    WashingMachine(WashingMachine),
}

impl Device {
    /// Creates a switched off device of the given kind with its default
    /// attribute value.
    #[must_use]
    pub fn new(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Plug => Self::Plug(Plug::default()),
            DeviceKind::Television => Self::Television(Television::new()),
            DeviceKind::WashingMachine => Self::WashingMachine(WashingMachine::new()),
        }
    }

    /// Builds a device from a kind tag and raw user input.
    ///
    /// The raw text is first converted to an integer; a failed conversion is
    /// only an error for kinds that need a number. Wash modes are lower-cased
    /// before validation.
    ///
    /// # Errors
    ///
    /// - `Error::Value(ValueError::UnknownKind)` if the tag is not a device kind
    /// - `Error::TypeMismatch` if the kind needs an integer and `raw` is not one
    /// - `Error::Value` if the value is outside the attribute's domain
    pub fn from_input(kind_tag: &str, raw: &str) -> Result<Self> {
        let kind: DeviceKind = kind_tag.parse()?;
        let number = raw.trim().parse::<i64>().ok();

        let device = match kind {
            DeviceKind::Plug => {
                let rate = number.ok_or_else(|| type_mismatch(Attribute::ConsumptionRate))?;
                Self::Plug(Plug::new(rate)?)
            }
            DeviceKind::Television => {
                let channel = number.ok_or_else(|| type_mismatch(Attribute::Channel))?;
                Self::Television(Television::with_channel(channel)?)
            }
            DeviceKind::WashingMachine => {
                Self::WashingMachine(WashingMachine::with_wash_mode(&raw.to_lowercase())?)
            }
        };
        Ok(device)
    }

    /// Returns the kind of this device.
    #[must_use]
    pub const fn kind(&self) -> DeviceKind {
        match self {
            Self::Plug(_) => DeviceKind::Plug,
            Self::Television(_) => DeviceKind::Television,
            Self::WashingMachine(_) => DeviceKind::WashingMachine,
        }
    }

    /// Returns the attribute this device owns.
    #[must_use]
    pub const fn attribute(&self) -> Attribute {
        self.kind().attribute()
    }

    /// Returns the current value of the device's attribute.
    #[must_use]
    pub fn attribute_value(&self) -> OptionValue {
        match self {
            Self::Plug(plug) => OptionValue::from(plug.consumption_rate().value()),
            Self::Television(tv) => OptionValue::from(tv.channel().value()),
            Self::WashingMachine(machine) => OptionValue::from(machine.wash_mode().as_str()),
        }
    }

    /// Routes a value to the device's attribute.
    ///
    /// Plugs and televisions take integers, washing machines take text.
    ///
    /// # Errors
    ///
    /// - `Error::TypeMismatch` if the value has the wrong kind
    /// - `Error::Value` if the value is outside the attribute's domain
    ///
    /// The device is unchanged on error.
    pub fn update_option(&mut self, value: impl Into<OptionValue>) -> Result<()> {
        match (self, value.into()) {
            (Self::Plug(plug), OptionValue::Integer(rate)) => plug.set_consumption_rate(rate)?,
            (Self::Television(tv), OptionValue::Integer(channel)) => tv.set_channel(channel)?,
            (Self::WashingMachine(machine), OptionValue::Text(mode)) => {
                machine.set_wash_mode(&mode)?;
            }
            (device, _) => return Err(type_mismatch(device.attribute())),
        }
        Ok(())
    }
}

fn type_mismatch(attribute: Attribute) -> Error {
    Error::TypeMismatch {
        attribute,
        expected: attribute.expects(),
    }
}

impl Switchable for Device {
    fn switched_on(&self) -> bool {
        match self {
            Self::Plug(plug) => plug.switched_on(),
            Self::Television(tv) => tv.switched_on(),
            Self::WashingMachine(machine) => machine.switched_on(),
        }
    }

    fn set_switched_on(&mut self, on: bool) {
        match self {
            Self::Plug(plug) => plug.set_switched_on(on),
            Self::Television(tv) => tv.set_switched_on(on),
            Self::WashingMachine(machine) => machine.set_switched_on(on),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plug(plug) => fmt::Display::fmt(plug, f),
            Self::Television(tv) => fmt::Display::fmt(tv, f),
            Self::WashingMachine(machine) => fmt::Display::fmt(machine, f),
        }
    }
}

impl From<Plug> for Device {
    fn from(plug: Plug) -> Self {
        Self::Plug(plug)
    }
}

impl From<Television> for Device {
    fn from(tv: Television) -> Self {
        Self::Television(tv)
    }
}

impl From<WashingMachine> for Device {
    fn from(machine: WashingMachine) -> Self {
        Self::WashingMachine(machine)
    }
}
