// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wash mode type for washing machines.
//!
//! Input is matched case-insensitively; the stored and displayed form is
//! always the canonical spelling.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Washing programme of a washing machine.
///
/// | Variant     | Canonical text |
/// |-------------|----------------|
/// | `DailyWash` | `Daily wash`   |
/// | `QuickWash` | `Quick wash`   |
/// | `Eco`       | `Eco`          |
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::WashMode;
///
/// assert_eq!("eco".parse::<WashMode>().unwrap(), WashMode::Eco);
/// assert_eq!("QUICK WASH".parse::<WashMode>().unwrap().as_str(), "Quick wash");
/// assert!("Eco Wash".parse::<WashMode>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum WashMode {
    /// Standard programme.
    #[default]
    DailyWash,
    /// Short programme.
    QuickWash,
    /// Energy saving programme.
    Eco,
}

impl WashMode {
    /// Every wash mode, in display order.
    pub const ALL: [Self; 3] = [Self::DailyWash, Self::QuickWash, Self::Eco];

    /// Returns the canonical text of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DailyWash => "Daily wash",
            Self::QuickWash => "Quick wash",
            Self::Eco => "Eco",
        }
    }

    /// Returns the accepted modes as a quoted, comma separated list.
    #[must_use]
    pub fn accepted_values() -> String {
        Self::ALL
            .iter()
            .map(|mode| format!("'{}'", mode.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for WashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WashMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::InvalidWashMode(s.to_string()))
    }
}

impl TryFrom<String> for WashMode {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WashMode> for &'static str {
    fn from(mode: WashMode) -> Self {
        mode.as_str()
    }
}
