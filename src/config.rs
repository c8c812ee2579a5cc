// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registry configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::home::Home;

/// How the decoder reacts to a malformed line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Abort the whole load on the first malformed line.
    #[default]
    Strict,
    /// Skip malformed lines, logging each one, and keep the rest.
    Lenient,
}

/// Configuration for a [`HomeRegistry`](crate::HomeRegistry).
///
/// Every field has a default, so a configuration document only needs to
/// name the settings it changes.
///
/// # Examples
///
/// ```
/// use smarthome_lib::config::{ParsePolicy, RegistryConfig};
///
/// let config = RegistryConfig::default()
///     .with_default_max_items(8)
///     .with_name_prefix("House");
/// assert_eq!(config.parse_policy, ParsePolicy::Strict);
///
/// let config = RegistryConfig::from_json_str(r#"{ "parse_policy": "lenient" }"#).unwrap();
/// assert_eq!(config.default_max_items, 5);
/// assert_eq!(config.parse_policy, ParsePolicy::Lenient);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Capacity given to homes created by the registry.
    pub default_max_items: usize,
    /// Prefix of generated home names, followed by a space and the next id.
    pub name_prefix: String,
    /// Malformed line handling when loading.
    pub parse_policy: ParsePolicy,
}

impl RegistryConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capacity of newly created homes.
    #[must_use]
    pub fn with_default_max_items(mut self, max_items: usize) -> Self {
        self.default_max_items = max_items;
        self
    }

    /// Sets the prefix of generated home names.
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Sets the malformed line policy.
    #[must_use]
    pub fn with_parse_policy(mut self, policy: ParsePolicy) -> Self {
        self.parse_policy = policy;
        self
    }

    /// Decodes a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the document is not valid.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and `Error::Config` if
    /// it is not valid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!("Loaded registry configuration from {}", path.display());
        Ok(config)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_max_items: Home::DEFAULT_MAX_ITEMS,
            name_prefix: "Smart Home".to_string(),
            parse_policy: ParsePolicy::default(),
        }
    }
}
