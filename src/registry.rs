// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named collection of homes.

use std::fs;
use std::path::Path;

use crate::codec::{self, DELIMITER};
use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::home::Home;

/// An insertion-ordered mapping from unique names to homes.
///
/// The registry also owns the counter used to name new homes, so generated
/// names never repeat within a session.
///
/// Two registries are equal when they hold the same homes under the same
/// names in the same order; configuration and the name counter are not
/// compared.
///
/// # Examples
///
/// ```
/// use smarthome_lib::HomeRegistry;
///
/// let mut registry = HomeRegistry::new();
/// let first = registry.create_home();
/// let second = registry.create_home();
/// assert_eq!(first, "Smart Home 1");
/// assert_eq!(second, "Smart Home 2");
///
/// registry.get_mut(&first)?.add_from_input("Plug", "45")?;
/// registry.remove(&second)?;
///
/// assert_eq!(registry.to_text(), "Smart Home 1,5,Plug,False,45\n");
/// # Ok::<(), smarthome_lib::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HomeRegistry {
    homes: Vec<(String, Home)>,
    next_id: u64,
    config: RegistryConfig,
}

impl HomeRegistry {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            homes: Vec::new(),
            next_id: 1,
            config,
        }
    }

    pub(crate) fn from_homes(config: RegistryConfig, homes: Vec<(String, Home)>) -> Self {
        let mut registry = Self::with_config(config);
        registry.homes = homes;
        registry.next_id = next_id_after(&registry.homes);
        registry
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the id the next generated home name will use.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Returns the number of homes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.homes.len()
    }

    /// Returns `true` if there are no homes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.homes.is_empty()
    }

    /// Returns `true` if a home is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the home names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.homes.iter().map(|(name, _)| name.as_str())
    }

    /// Returns `(name, home)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Home)> {
        self.homes.iter().map(|(name, home)| (name.as_str(), home))
    }

    /// Creates an empty home under a generated name and returns the name.
    ///
    /// Names are `"{name_prefix} {id}"`; ids already taken are skipped.
    pub fn create_home(&mut self) -> String {
        let name = loop {
            let candidate = format!("{} {}", self.config.name_prefix, self.next_id);
            self.next_id += 1;
            if !self.contains(&candidate) {
                break candidate;
            }
        };
        tracing::debug!(name = %name, max_items = self.config.default_max_items, "Creating home");
        self.homes
            .push((name.clone(), Home::new(self.config.default_max_items)));
        name
    }

    /// Registers `home` under `name`.
    ///
    /// An existing home with the same name is replaced in place and
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidHomeName` if the name is empty, has leading or
    /// trailing whitespace, or contains the delimiter or a line break.
    pub fn insert(&mut self, name: impl Into<String>, home: Home) -> Result<Option<Home>> {
        let name = name.into();
        validate_name(&name)?;

        if let Some(id) = trailing_id(&name) {
            self.next_id = self.next_id.max(id + 1);
        }

        if let Some(index) = self.position(&name) {
            tracing::debug!(name = %name, "Replacing home");
            return Ok(Some(std::mem::replace(&mut self.homes[index].1, home)));
        }
        tracing::debug!(name = %name, "Inserting home");
        self.homes.push((name, home));
        Ok(None)
    }

    /// Removes and returns the home registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::HomeNotFound` if no such home exists.
    pub fn remove(&mut self, name: &str) -> Result<Home> {
        let index = self.index_of(name)?;
        tracing::debug!(name, "Removing home");
        Ok(self.homes.remove(index).1)
    }

    /// Returns the home registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::HomeNotFound` if no such home exists.
    pub fn get(&self, name: &str) -> Result<&Home> {
        let index = self.index_of(name)?;
        Ok(&self.homes[index].1)
    }

    /// Returns the home registered under `name` for mutation.
    ///
    /// # Errors
    ///
    /// Returns `Error::HomeNotFound` if no such home exists.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Home> {
        let index = self.index_of(name)?;
        Ok(&mut self.homes[index].1)
    }

    /// Moves `home` in under an existing name and returns the previous home.
    ///
    /// The home keeps its position in the registry.
    ///
    /// # Errors
    ///
    /// Returns `Error::HomeNotFound` if no such home exists.
    pub fn replace(&mut self, name: &str, home: Home) -> Result<Home> {
        let index = self.index_of(name)?;
        tracing::debug!(name, "Replacing home");
        Ok(std::mem::replace(&mut self.homes[index].1, home))
    }

    /// Returns the registry in the persisted text format.
    #[must_use]
    pub fn to_text(&self) -> String {
        codec::serialize(self)
    }

    /// Replaces every home with those decoded from `text`.
    ///
    /// The text is decoded completely before anything is replaced, so on
    /// error the registry is unchanged. The name counter restarts after the
    /// largest trailing number found in a loaded name.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` for a malformed line under the strict policy.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        let homes = codec::decode_homes(text, self.config.parse_policy)?;
        self.next_id = next_id_after(&homes);
        self.homes = homes;
        Ok(())
    }

    /// Replaces every home with those read from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and `Error::Parse` for
    /// a malformed line. The registry is unchanged on error.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        self.load_str(&text)?;
        tracing::info!(homes = self.homes.len(), "Loaded homes from {}", path.display());
        Ok(())
    }

    /// Writes every home to the file at `path`, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_text())?;
        tracing::info!(homes = self.homes.len(), "Saved homes to {}", path.display());
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.homes.iter().position(|(existing, _)| existing == name)
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| Error::HomeNotFound(name.to_string()))
    }
}

impl Default for HomeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for HomeRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.homes == other.homes
    }
}

impl Eq for HomeRegistry {}

fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.trim() != name
        || name.contains(|c: char| c == DELIMITER || c == '\n' || c == '\r');
    if invalid {
        return Err(Error::InvalidHomeName(name.to_string()));
    }
    Ok(())
}

/// Trailing ids are read as `u32` so the `u64` counter always has room
/// above them.
fn trailing_id(name: &str) -> Option<u64> {
    name.split_whitespace()
        .last()?
        .parse::<u32>()
        .ok()
        .map(u64::from)
}

fn next_id_after(homes: &[(String, Home)]) -> u64 {
    homes
        .iter()
        .filter_map(|(name, _)| trailing_id(name))
        .max()
        .map_or(1, |id| id + 1)
}
