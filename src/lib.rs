// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `smarthome_lib` - a small smart home device registry.
//!
//! This library models switchable devices with validated attributes, groups
//! them into capacity-bounded homes, and persists named homes to a flat,
//! comma delimited text file.
//!
//! # Supported Devices
//!
//! - **Plug**: consumption rate 0-150
//! - **Television**: channel 1-734 (default 1)
//! - **Washing machine**: wash mode `Daily wash` (default), `Quick wash` or `Eco`
//!
//! # Quick Start
//!
//! ## Building a home
//!
//! ```
//! use smarthome_lib::{Error, Home};
//! use smarthome_lib::device::{Plug, Television};
//!
//! let mut home = Home::new(2);
//! home.add(Plug::new(45)?)?;
//! home.add(Television::new())?;
//!
//! // The home is full
//! assert!(matches!(home.add(Television::new()), Err(Error::CapacityReached { .. })));
//!
//! // Values are routed to whichever attribute the device owns
//! home.update_option(0, 75)?;
//! assert!(matches!(home.update_option(0, "Eco"), Err(Error::TypeMismatch { .. })));
//! assert!(matches!(home.update_option(5, 1), Err(Error::IndexOutOfRange { .. })));
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Saving and loading
//!
//! ```no_run
//! use smarthome_lib::HomeRegistry;
//!
//! # fn main() -> smarthome_lib::Result<()> {
//! let mut registry = HomeRegistry::new();
//! let name = registry.create_home();
//! registry.get_mut(&name)?.add_from_input("WashingMachine", "eco")?;
//! registry.save("homes.csv")?;
//!
//! let mut restored = HomeRegistry::new();
//! restored.load("homes.csv")?;
//! assert_eq!(restored, registry);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod device;
pub mod error;
mod home;
mod registry;
pub mod types;

pub use config::{ParsePolicy, RegistryConfig};
pub use device::{Device, DeviceKind, Plug, Switchable, Television, WashingMachine};
pub use error::{Error, ParseError, ParseErrorKind, Result, ValueError};
pub use home::Home;
pub use registry::HomeRegistry;
pub use types::{Attribute, Channel, ConsumptionRate, OptionValue, ValueKind, WashMode};
