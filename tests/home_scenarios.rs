// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end scenarios for devices and homes.

use smarthome_lib::types::{Attribute, OptionValue, ValueKind, WashMode};
use smarthome_lib::{
    Device, DeviceKind, Error, Home, Plug, Switchable, Television, ValueError, WashingMachine,
};

// ============================================================================
// Device validation
// ============================================================================

mod device_validation {
    use super::*;

    #[test]
    fn plug_accepts_whole_domain_and_rejects_outside() {
        let mut plug = Plug::new(0).unwrap();
        for rate in 0..=150 {
            plug.set_consumption_rate(rate).unwrap();
            assert_eq!(i64::from(plug.consumption_rate().value()), rate);
        }
        for rate in [-1, 151, 1_000] {
            assert!(matches!(
                plug.set_consumption_rate(rate),
                Err(ValueError::OutOfRange { .. })
            ));
            assert_eq!(plug.consumption_rate().value(), 150);
        }
    }

    #[test]
    fn television_accepts_whole_domain_and_rejects_outside() {
        let mut tv = Television::new();
        for channel in 1..=734 {
            tv.set_channel(channel).unwrap();
            assert_eq!(i64::from(tv.channel().value()), channel);
        }
        for channel in [0, 735, -5] {
            assert!(tv.set_channel(channel).is_err());
            assert_eq!(tv.channel().value(), 734);
        }
    }

    #[test]
    fn washing_machine_normalises_case() {
        let mut machine = WashingMachine::new();
        for (input, expected) in [
            ("daily wash", "Daily wash"),
            ("QUICK WASH", "Quick wash"),
            ("eco", "Eco"),
            ("ECO", "Eco"),
        ] {
            machine.set_wash_mode(input).unwrap();
            assert_eq!(machine.wash_mode().as_str(), expected);
        }
    }

    #[test]
    fn new_washing_machine_scenario() {
        let mut machine = WashingMachine::new();
        assert_eq!(machine.wash_mode(), WashMode::DailyWash);
        assert!(!machine.switched_on());

        let err = machine.set_wash_mode("WASH AND DRY").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'Daily wash', 'Quick wash', 'Eco'"));
        assert_eq!(machine.wash_mode(), WashMode::DailyWash);
    }

    #[test]
    fn toggle_twice_restores_state() {
        for kind in DeviceKind::ALL {
            let mut device = Device::new(kind);
            device.toggle();
            device.toggle();
            assert_eq!(device, Device::new(kind));
        }
    }
}

// ============================================================================
// Home operations
// ============================================================================

mod home_operations {
    use super::*;

    #[test]
    fn capacity_and_update_scenario() {
        let mut home = Home::new(2);
        home.add(Plug::new(45).unwrap()).unwrap();
        home.add(Television::new()).unwrap();

        assert!(matches!(
            home.add(Television::new()),
            Err(Error::CapacityReached { max_items: 2 })
        ));
        assert_eq!(home.len(), 2);

        home.update_option(0, 75).unwrap();
        assert_eq!(home.get(0).unwrap().attribute_value(), OptionValue::Integer(75));

        assert!(matches!(
            home.update_option(0, "Eco"),
            Err(Error::TypeMismatch {
                attribute: Attribute::ConsumptionRate,
                expected: ValueKind::Integer,
            })
        ));
        assert!(matches!(
            home.update_option(5, 1),
            Err(Error::IndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn remove_then_get_returns_next_device() {
        let mut home = Home::new(4);
        home.add_from_input("Plug", "1").unwrap();
        home.add_from_input("Plug", "2").unwrap();
        home.add_from_input("Plug", "3").unwrap();

        home.remove(1).unwrap();
        assert_eq!(home.get(1).unwrap().attribute_value(), OptionValue::Integer(3));
        assert!(home.get(2).is_err());
    }

    #[test]
    fn size_never_exceeds_capacity() {
        let mut home = Home::new(3);
        for _ in 0..10 {
            let _ = home.add(Plug::default());
            assert!(home.len() <= home.max_items());
        }
        assert_eq!(home.len(), 3);
    }

    #[test]
    fn full_walkthrough() {
        let mut home = Home::new(3);
        home.add(Plug::new(120).unwrap()).unwrap();
        home.add(Television::new()).unwrap();
        home.add(WashingMachine::new()).unwrap();

        for i in 0..3 {
            home.toggle(i).unwrap();
        }
        assert_eq!(home.switched_on_count(), 3);

        home.switch_all_off();
        home.update_option(0, 150).unwrap();
        home.update_option(1, 734).unwrap();
        home.update_option(2, "Eco").unwrap();

        let snapshot = home.clone();
        assert!(home.update_option(0, 200).is_err());
        assert!(home.update_option(1, 800).is_err());
        assert!(home.update_option(2, "Wash and Dry").is_err());
        assert_eq!(home, snapshot);

        home.remove(2).unwrap();
        home.add(WashingMachine::new()).unwrap();
        assert!(matches!(
            home.add(WashingMachine::new()),
            Err(Error::CapacityReached { .. })
        ));
    }

    #[test]
    fn build_from_input_errors() {
        assert!(matches!(
            Home::build_from_input("Television", "seven"),
            Err(Error::TypeMismatch {
                attribute: Attribute::Channel,
                ..
            })
        ));
        assert!(matches!(
            Home::build_from_input("Plug", "-5"),
            Err(Error::Value(ValueError::OutOfRange { actual: -5, .. }))
        ));
        let machine = Home::build_from_input("WashingMachine", "Daily Wash").unwrap();
        assert_eq!(machine.attribute_value(), OptionValue::Text("Daily wash".into()));
    }
}
