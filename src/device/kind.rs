// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device kind tags.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::types::Attribute;

/// Identifies a device variant.
///
/// The tag returned by [`as_str`](Self::as_str) is what user interfaces offer
/// for selection and what the persisted format stores.
///
/// # Examples
///
/// ```
/// use smarthome_lib::device::DeviceKind;
///
/// assert_eq!("Television".parse::<DeviceKind>().unwrap(), DeviceKind::Television);
/// // Tags written by earlier releases are still understood
/// assert_eq!("SmartTV".parse::<DeviceKind>().unwrap(), DeviceKind::Television);
/// assert_eq!(DeviceKind::WashingMachine.as_str(), "WashingMachine");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DeviceKind {
    /// Smart plug.
    Plug,
    /// Smart television.
    Television,
    /// Smart washing machine.
    WashingMachine,
}

impl DeviceKind {
    /// Every device kind, in selection order.
    pub const ALL: [Self; 3] = [Self::Plug, Self::Television, Self::WashingMachine];

    /// Returns the kind tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plug => "Plug",
            Self::Television => "Television",
            Self::WashingMachine => "WashingMachine",
        }
    }

    /// Returns the human readable device name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Plug => "Smart plug",
            Self::Television => "Smart TV",
            Self::WashingMachine => "Smart washing machine",
        }
    }

    /// Returns the attribute a device of this kind owns.
    #[must_use]
    pub const fn attribute(&self) -> Attribute {
        match self {
            Self::Plug => Attribute::ConsumptionRate,
            Self::Television => Attribute::Channel,
            Self::WashingMachine => Attribute::WashMode,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Plug" | "SmartPlug" => Ok(Self::Plug),
            "Television" | "SmartTV" => Ok(Self::Television),
            "WashingMachine" | "SmartWashingMachine" => Ok(Self::WashingMachine),
            _ => Err(ValueError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip() {
        for kind in DeviceKind::ALL {
            assert_eq!(kind.as_str().parse::<DeviceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_accepts_legacy_tags() {
        assert_eq!("SmartPlug".parse::<DeviceKind>().unwrap(), DeviceKind::Plug);
        assert_eq!(
            "SmartWashingMachine".parse::<DeviceKind>().unwrap(),
            DeviceKind::WashingMachine
        );
    }

    #[test]
    fn kind_tags_are_case_sensitive() {
        assert_eq!(
            "plug".parse::<DeviceKind>(),
            Err(ValueError::UnknownKind("plug".to_string()))
        );
    }

    #[test]
    fn kind_attributes() {
        assert_eq!(DeviceKind::Plug.attribute(), Attribute::ConsumptionRate);
        assert_eq!(DeviceKind::Television.attribute(), Attribute::Channel);
        assert_eq!(DeviceKind::WashingMachine.attribute(), Attribute::WashMode);
    }
}
