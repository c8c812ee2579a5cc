// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line-oriented text format for persisting homes.
//!
//! Each line holds one home:
//!
//! ```text
//! <home_name>,<max_items>,<kind_1>,<state_1>,<value_1>,<kind_2>,<state_2>,<value_2>,...
//! ```
//!
//! - `kind` is a [`DeviceKind`] tag (`Plug`, `Television`, `WashingMachine`)
//! - `state` is the literal `True` or `False`
//! - `value` is the consumption rate, channel number, or canonical wash mode
//!
//! Fields are not escaped, so names must not contain the delimiter. A home
//! without devices is just `name,max_items`. Blank lines are ignored.
//!
//! # Examples
//!
//! ```
//! use smarthome_lib::codec;
//!
//! let text = "Smart Home 1,3,Plug,True,45,WashingMachine,False,Eco\n";
//! let registry = codec::deserialize(text).unwrap();
//!
//! let home = registry.get("Smart Home 1").unwrap();
//! assert_eq!(home.len(), 2);
//! assert_eq!(codec::serialize(&registry), text);
//! ```

use crate::config::{ParsePolicy, RegistryConfig};
use crate::device::{Device, DeviceKind, Plug, Switchable, Television, WashingMachine};
use crate::error::{ParseError, ParseErrorKind};
use crate::home::Home;
use crate::registry::HomeRegistry;

/// Field delimiter.
pub const DELIMITER: char = ',';

const TRUE_TOKEN: &str = "True";
const FALSE_TOKEN: &str = "False";

/// Encodes a registry, one `\n`-terminated line per home, in registry order.
#[must_use]
pub fn serialize(registry: &HomeRegistry) -> String {
    registry
        .iter()
        .map(|(name, home)| {
            let mut line = encode_home(name, home);
            line.push('\n');
            line
        })
        .collect()
}

/// Encodes a single home as one line without a terminator.
#[must_use]
pub fn encode_home(name: &str, home: &Home) -> String {
    let mut fields = Vec::with_capacity(2 + home.len() * 3);
    fields.push(name.to_string());
    fields.push(home.max_items().to_string());
    for device in home {
        fields.push(device.kind().as_str().to_string());
        fields.push(state_token(device.switched_on()).to_string());
        fields.push(device.attribute_value().to_string());
    }
    fields.join(DELIMITER.to_string().as_str())
}

/// Decodes a registry, aborting on the first malformed line.
///
/// # Errors
///
/// Returns the `ParseError` of the first malformed line.
pub fn deserialize(text: &str) -> Result<HomeRegistry, ParseError> {
    deserialize_with(text, RegistryConfig::default())
}

/// Decodes a registry using the parse policy of `config`.
///
/// The returned registry carries `config`.
///
/// # Errors
///
/// Under [`ParsePolicy::Strict`], returns the `ParseError` of the first
/// malformed line. Under [`ParsePolicy::Lenient`] malformed lines are
/// skipped and this never fails.
pub fn deserialize_with(text: &str, config: RegistryConfig) -> Result<HomeRegistry, ParseError> {
    let homes = decode_homes(text, config.parse_policy)?;
    Ok(HomeRegistry::from_homes(config, homes))
}

/// Decodes every non-blank line into an ordered list of named homes.
pub(crate) fn decode_homes(
    text: &str,
    policy: ParsePolicy,
) -> Result<Vec<(String, Home)>, ParseError> {
    let mut homes: Vec<(String, Home)> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let decoded = decode_line(line_no, line).and_then(|(name, home)| {
            if homes.iter().any(|(existing, _)| *existing == name) {
                Err(ParseError::new(line_no, ParseErrorKind::DuplicateName(name)))
            } else {
                Ok((name, home))
            }
        });

        match decoded {
            Ok(entry) => homes.push(entry),
            Err(e) if policy == ParsePolicy::Lenient => {
                tracing::warn!(line = line_no, error = %e, "Skipping malformed home line");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(homes)
}

/// Decodes one line into a home name and its home.
///
/// `line_no` is only used to label errors.
///
/// # Errors
///
/// Returns a `ParseError` describing the first problem found on the line.
pub fn decode_line(line_no: usize, line: &str) -> Result<(String, Home), ParseError> {
    let err = |kind| ParseError::new(line_no, kind);

    let mut tokens = line.trim().split(DELIMITER);
    let name = tokens.next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err(err(ParseErrorKind::EmptyName));
    }

    let capacity = tokens
        .next()
        .ok_or(err(ParseErrorKind::MissingCapacity))?
        .trim();
    let max_items: usize = capacity
        .parse()
        .map_err(|_| err(ParseErrorKind::InvalidCapacity(capacity.to_string())))?;

    let device_tokens: Vec<&str> = tokens.collect();
    let trailing = device_tokens.len() % 3;
    if trailing != 0 {
        return Err(err(ParseErrorKind::IncompleteDevice { tokens: trailing }));
    }

    let devices = device_tokens
        .chunks_exact(3)
        .map(|triple| decode_device(triple[0], triple[1], triple[2]))
        .collect::<Result<Vec<_>, _>>()
        .map_err(err)?;

    // A lowered max_items may hold more devices than it allows
    Ok((name.to_string(), Home::from_parts(max_items, devices)))
}

fn decode_device(kind: &str, state: &str, value: &str) -> Result<Device, ParseErrorKind> {
    let kind: DeviceKind = kind
        .parse()
        .map_err(|_| ParseErrorKind::UnknownKind(kind.to_string()))?;

    let switched_on = match state {
        TRUE_TOKEN => true,
        FALSE_TOKEN => false,
        other => return Err(ParseErrorKind::InvalidState(other.to_string())),
    };

    let mut device = match kind {
        DeviceKind::Plug => Device::Plug(Plug::new(parse_integer(kind, value)?)?),
        DeviceKind::Television => {
            Device::Television(Television::with_channel(parse_integer(kind, value)?)?)
        }
        DeviceKind::WashingMachine => {
            Device::WashingMachine(WashingMachine::with_wash_mode(value)?)
        }
    };
    device.set_switched_on(switched_on);
    Ok(device)
}

fn parse_integer(kind: DeviceKind, value: &str) -> Result<i64, ParseErrorKind> {
    value.trim().parse().map_err(|_| ParseErrorKind::NotAnInteger {
        kind,
        value: value.to_string(),
    })
}

const fn state_token(switched_on: bool) -> &'static str {
    if switched_on { TRUE_TOKEN } else { FALSE_TOKEN }
}
