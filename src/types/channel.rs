// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel type for televisions.

use std::fmt;

use crate::error::ValueError;

use super::Attribute;

/// Television channel number (1-734).
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::Channel;
///
/// let channel = Channel::new(5).unwrap();
/// assert_eq!(channel.value(), 5);
///
/// // Channel 1 is the default
/// assert_eq!(Channel::default(), Channel::MIN);
///
/// assert!(Channel::new(0).is_err());
/// assert!(Channel::new(800).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i64", into = "u16")]
pub struct Channel(u16);

impl Channel {
    /// Lowest channel number.
    pub const MIN: Self = Self(1);

    /// Highest channel number.
    pub const MAX: Self = Self(734);

    /// Creates a new channel number.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside 1-734.
    pub fn new(value: i64) -> Result<Self, ValueError> {
        match u16::try_from(value) {
            Ok(channel) if (Self::MIN.0..=Self::MAX.0).contains(&channel) => Ok(Self(channel)),
            _ => Err(ValueError::OutOfRange {
                attribute: Attribute::Channel,
                min: i64::from(Self::MIN.0),
                max: i64::from(Self::MAX.0),
                actual: value,
            }),
        }
    }

    /// Returns the channel number.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Channel {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Channel> for u16 {
    fn from(channel: Channel) -> Self {
        channel.0
    }
}
