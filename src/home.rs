// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capacity-bounded device container.
//!
//! A [`Home`] owns an ordered list of devices. Insertion order is display
//! order and all indices are 0-based. The capacity is checked when a device
//! is added; lowering it afterwards never evicts devices.

use std::fmt;
use std::slice;

use crate::device::{Device, Switchable};
use crate::error::{Error, Result};
use crate::types::OptionValue;

/// An ordered collection of devices with a maximum size.
///
/// # Examples
///
/// ```
/// use smarthome_lib::Home;
/// use smarthome_lib::device::{Plug, Television};
///
/// let mut home = Home::new(2);
/// home.add(Plug::new(45)?)?;
/// home.add(Television::new())?;
/// assert!(home.is_full());
///
/// home.update_option(0, 75)?;
/// home.toggle(1)?;
/// assert_eq!(home.switched_on_count(), 1);
/// # Ok::<(), smarthome_lib::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "HomeRecord")]
pub struct Home {
    devices: Vec<Device>,
    max_items: usize,
}

impl Home {
    /// Capacity of a home created with [`Home::default`].
    pub const DEFAULT_MAX_ITEMS: usize = 5;

    /// Creates an empty home that holds at most `max_items` devices.
    #[must_use]
    pub fn new(max_items: usize) -> Self {
        Self {
            devices: Vec::new(),
            max_items,
        }
    }

    /// Rebuilds a home from persisted parts without the add-time capacity
    /// check, since a lowered `max_items` may hold more devices.
    pub(crate) fn from_parts(max_items: usize, devices: Vec<Device>) -> Self {
        Self { devices, max_items }
    }

    /// Returns the devices in display order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Returns an iterator over the devices.
    pub fn iter(&self) -> slice::Iter<'_, Device> {
        self.devices.iter()
    }

    /// Returns the maximum number of devices.
    #[must_use]
    pub const fn max_items(&self) -> usize {
        self.max_items
    }

    /// Changes the maximum number of devices.
    ///
    /// Devices beyond the new limit are kept; only later additions are
    /// refused.
    pub fn set_max_items(&mut self, max_items: usize) {
        tracing::debug!(old = self.max_items, new = max_items, "Changing home capacity");
        self.max_items = max_items;
    }

    /// Returns the number of devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if the home holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Returns `true` if no further device can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.devices.len() >= self.max_items
    }

    /// Returns how many devices are switched on.
    #[must_use]
    pub fn switched_on_count(&self) -> usize {
        self.devices.iter().filter(|d| d.switched_on()).count()
    }

    /// Appends a device.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityReached` if the home is full.
    pub fn add(&mut self, device: impl Into<Device>) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityReached {
                max_items: self.max_items,
            });
        }
        let device = device.into();
        tracing::debug!(kind = %device.kind(), index = self.devices.len(), "Adding device");
        self.devices.push(device);
        Ok(())
    }

    /// Removes and returns the device at `index`, shifting later devices
    /// down by one.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is not a valid position.
    pub fn remove(&mut self, index: usize) -> Result<Device> {
        self.check_index(index)?;
        let device = self.devices.remove(index);
        tracing::debug!(kind = %device.kind(), index, "Removed device");
        Ok(device)
    }

    /// Returns the device at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is not a valid position.
    pub fn get(&self, index: usize) -> Result<&Device> {
        self.devices.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.devices.len(),
        })
    }

    /// Returns the device at `index` for mutation.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is not a valid position.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Device> {
        let len = self.devices.len();
        self.devices
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Flips the on/off state of the device at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is not a valid position.
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        let device = self.get_mut(index)?;
        device.toggle();
        tracing::debug!(index, switched_on = device.switched_on(), "Toggled device");
        Ok(())
    }

    /// Switches every device on.
    pub fn switch_all_on(&mut self) {
        self.switch_all(true);
    }

    /// Switches every device off.
    pub fn switch_all_off(&mut self) {
        self.switch_all(false);
    }

    fn switch_all(&mut self, on: bool) {
        for device in &mut self.devices {
            device.set_switched_on(on);
        }
        tracing::debug!(switched_on = on, count = self.devices.len(), "Switched all devices");
    }

    /// Routes `value` to the attribute of the device at `index`.
    ///
    /// Plugs take an integer consumption rate, televisions an integer
    /// channel, washing machines a wash mode string.
    ///
    /// # Errors
    ///
    /// - `Error::IndexOutOfRange` if `index` is not a valid position
    /// - `Error::TypeMismatch` if the value has the wrong kind for the device
    /// - `Error::Value` if the value is outside the attribute's domain
    pub fn update_option(&mut self, index: usize, value: impl Into<OptionValue>) -> Result<()> {
        let value = value.into();
        let device = self.get_mut(index)?;
        device.update_option(value.clone())?;
        tracing::debug!(index, kind = %device.kind(), %value, "Updated device option");
        Ok(())
    }

    /// Builds a device from a kind tag and raw text input.
    ///
    /// See [`Device::from_input`] for the conversion rules.
    ///
    /// # Errors
    ///
    /// Returns `Error::TypeMismatch` or `Error::Value` as described there.
    pub fn build_from_input(kind_tag: &str, raw: &str) -> Result<Device> {
        Device::from_input(kind_tag, raw)
    }

    /// Builds a device from a kind tag and raw text input and appends it.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`build_from_input`](Self::build_from_input)
    /// and `Error::CapacityReached` if the home is full.
    pub fn add_from_input(&mut self, kind_tag: &str, raw: &str) -> Result<()> {
        let device = Self::build_from_input(kind_tag, raw)?;
        self.add(device)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.devices.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.devices.len(),
            })
        }
    }
}

impl Default for Home {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ITEMS)
    }
}

impl fmt::Display for Home {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Home with {} device(s):", self.devices.len())?;
        for (i, device) in self.devices.iter().enumerate() {
            writeln!(f, "{}- {device}", i + 1)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Home {
    type Item = &'a Device;
    type IntoIter = slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

#[derive(serde::Deserialize)]
struct HomeRecord {
    devices: Vec<Device>,
    max_items: usize,
}

impl From<HomeRecord> for Home {
    fn from(record: HomeRecord) -> Self {
        Self::from_parts(record.max_items, record.devices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceKind, Plug, Television, WashingMachine};
    use crate::error::ValueError;
    use crate::types::{Attribute, ValueKind};

    fn sample_home() -> Home {
        let mut home = Home::new(3);
        home.add(Plug::new(120).unwrap()).unwrap();
        home.add(Television::new()).unwrap();
        home.add(WashingMachine::new()).unwrap();
        home
    }

    #[test]
    fn default_home_is_empty_with_five_slots() {
        let home = Home::default();
        assert!(home.is_empty());
        assert_eq!(home.max_items(), 5);
    }

    #[test]
    fn add_beyond_capacity_fails() {
        let mut home = sample_home();
        let err = home.add(WashingMachine::new()).unwrap_err();
        assert!(matches!(err, Error::CapacityReached { max_items: 3 }));
        assert_eq!(home.len(), 3);
    }

    #[test]
    fn zero_capacity_home_refuses_everything() {
        let mut home = Home::new(0);
        assert!(home.is_full());
        assert!(matches!(
            home.add(Plug::default()),
            Err(Error::CapacityReached { max_items: 0 })
        ));
    }

    #[test]
    fn shrinking_capacity_keeps_devices() {
        let mut home = sample_home();
        home.set_max_items(1);
        assert_eq!(home.len(), 3);
        assert!(home.is_full());
        assert!(home.add(Plug::default()).is_err());

        home.remove(0).unwrap();
        home.remove(0).unwrap();
        assert!(home.is_full());
        home.remove(0).unwrap();
        home.add(Plug::default()).unwrap();
    }

    #[test]
    fn remove_shifts_following_devices() {
        let mut home = sample_home();
        let next = home.get(1).unwrap().clone();
        let removed = home.remove(0).unwrap();
        assert_eq!(removed.kind(), DeviceKind::Plug);
        assert_eq!(home.get(0).unwrap(), &next);
        assert_eq!(home.len(), 2);
    }

    #[test]
    fn out_of_range_indices() {
        let mut home = sample_home();
        assert!(matches!(home.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 })));
        assert!(matches!(home.remove(7), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(home.toggle(3), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(home.update_option(3, 1), Err(Error::IndexOutOfRange { .. })));
        assert_eq!(home, sample_home());
    }

    #[test]
    fn toggle_by_index() {
        let mut home = sample_home();
        home.toggle(1).unwrap();
        assert!(home.get(1).unwrap().switched_on());
        assert!(!home.get(0).unwrap().switched_on());
        home.toggle(1).unwrap();
        assert!(!home.get(1).unwrap().switched_on());
    }

    #[test]
    fn switch_all_on_and_off() {
        let mut home = sample_home();
        home.toggle(0).unwrap();
        home.switch_all_on();
        assert_eq!(home.switched_on_count(), 3);
        home.switch_all_off();
        assert_eq!(home.switched_on_count(), 0);

        let mut empty = Home::new(2);
        empty.switch_all_on();
        assert!(empty.is_empty());
    }

    #[test]
    fn update_option_each_kind() {
        let mut home = sample_home();
        home.update_option(0, 150).unwrap();
        home.update_option(1, 734).unwrap();
        home.update_option(2, "Eco").unwrap();
        assert_eq!(home.get(0).unwrap().attribute_value(), OptionValue::Integer(150));
        assert_eq!(home.get(1).unwrap().attribute_value(), OptionValue::Integer(734));
        assert_eq!(
            home.get(2).unwrap().attribute_value(),
            OptionValue::Text("Eco".to_string())
        );
    }

    #[test]
    fn update_option_rejections_leave_home_unchanged() {
        let mut home = sample_home();
        let before = home.clone();

        assert!(matches!(
            home.update_option(0, 200),
            Err(Error::Value(ValueError::OutOfRange { .. }))
        ));
        assert!(matches!(
            home.update_option(1, 800),
            Err(Error::Value(ValueError::OutOfRange { .. }))
        ));
        assert!(matches!(
            home.update_option(2, "Wash and Dry"),
            Err(Error::Value(ValueError::InvalidWashMode(_)))
        ));
        assert!(matches!(
            home.update_option(2, 1),
            Err(Error::TypeMismatch {
                attribute: Attribute::WashMode,
                expected: ValueKind::Text,
            })
        ));
        assert_eq!(home, before);
    }

    #[test]
    fn add_from_input_validates_before_adding() {
        let mut home = Home::new(2);
        home.add_from_input("Television", "12").unwrap();
        assert!(home.add_from_input("Plug", "abc").is_err());
        assert_eq!(home.len(), 1);
        home.add_from_input("WashingMachine", "Eco").unwrap();
        assert!(matches!(
            home.add_from_input("Plug", "10"),
            Err(Error::CapacityReached { max_items: 2 })
        ));
    }

    #[test]
    fn display_lists_devices() {
        let home = sample_home();
        assert_eq!(
            home.to_string(),
            "Home with 3 device(s):\n\
             1- Smart plug is off with a consumption rate of 120\n\
             2- Smart TV is off, channel number 1\n\
             3- Smart washing machine is off with wash mode: Daily wash\n"
        );
    }

    #[test]
    fn json_snapshot_round_trip() {
        let mut home = sample_home();
        home.toggle(2).unwrap();
        let json = serde_json::to_string(&home).unwrap();
        let restored: Home = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, home);
    }

    #[test]
    fn json_snapshot_keeps_devices_beyond_lowered_capacity() {
        let mut home = sample_home();
        home.set_max_items(1);
        let json = serde_json::to_string(&home).unwrap();
        let restored: Home = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, home);
        assert_eq!(restored.len(), 3);
        assert_eq!(restored.max_items(), 1);
    }
}
