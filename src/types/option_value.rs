// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Untyped option values and the attributes they are routed to.
//!
//! A home accepts a device index plus an [`OptionValue`] and routes the value
//! to the single mutable [`Attribute`] of whatever device sits at that index.

use std::fmt;

/// The kind of value an attribute accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A whole number.
    Integer,
    /// Free text.
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("an integer"),
            Self::Text => f.write_str("a string"),
        }
    }
}

/// The secondary attribute owned by each device kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Smart plug consumption rate.
    ConsumptionRate,
    /// Television channel number.
    Channel,
    /// Washing machine wash mode.
    WashMode,
}

impl Attribute {
    /// Returns the kind of value this attribute accepts.
    #[must_use]
    pub const fn expects(&self) -> ValueKind {
        match self {
            Self::ConsumptionRate | Self::Channel => ValueKind::Integer,
            Self::WashMode => ValueKind::Text,
        }
    }

    /// Returns the human readable attribute name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ConsumptionRate => "consumption rate",
            Self::Channel => "channel number",
            Self::WashMode => "wash mode",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value destined for a device attribute, before its kind is checked.
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::{OptionValue, ValueKind};
///
/// assert_eq!(OptionValue::from(75).kind(), ValueKind::Integer);
/// assert_eq!(OptionValue::from("Eco").kind(), ValueKind::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// An integer value.
    Integer(i64),
    /// A text value.
    Text(String),
}

impl OptionValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Text(_) => ValueKind::Text,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u16> for OptionValue {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u8> for OptionValue {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
