// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart television device.

use std::fmt;

use crate::error::ValueError;
use crate::types::Channel;

use super::{Switchable, state_word};

/// A switchable television tuned to a channel.
///
/// New televisions start on channel 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Television {
    switched_on: bool,
    channel: Channel,
}

impl Television {
    /// Creates a switched off television on channel 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a switched off television on the given channel.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the channel is outside 1-734.
    pub fn with_channel(channel: i64) -> Result<Self, ValueError> {
        Ok(Self {
            switched_on: false,
            channel: Channel::new(channel)?,
        })
    }

    /// Returns the current channel.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Changes the channel.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the channel is outside 1-734. The
    /// current channel is kept.
    pub fn set_channel(&mut self, value: i64) -> Result<(), ValueError> {
        self.channel = Channel::new(value)?;
        Ok(())
    }
}

impl Switchable for Television {
    fn switched_on(&self) -> bool {
        self.switched_on
    }

    fn set_switched_on(&mut self, on: bool) {
        self.switched_on = on;
    }
}

impl fmt::Display for Television {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Smart TV is {}, channel number {}",
            state_word(self.switched_on),
            self.channel
        )
    }
}
