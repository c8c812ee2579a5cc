// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the smart home registry.
//!
//! This module provides the error hierarchy for every failure the model can
//! report: attribute validation, value type mismatches, device indexing,
//! home capacity, persisted file parsing, and file I/O.
//!
//! All errors are local and recoverable. An operation that returns an error
//! leaves the targeted device, home, or registry unchanged.

use thiserror::Error;

use crate::device::DeviceKind;
use crate::types::{Attribute, ValueKind, WashMode};

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value is outside the legal domain of the targeted attribute.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A value has the wrong kind for the targeted attribute, e.g. text
    /// where an integer is required.
    #[error("{attribute} must be {expected}")]
    TypeMismatch {
        /// The attribute the value was routed to.
        attribute: Attribute,
        /// The kind of value the attribute accepts.
        expected: ValueKind,
    },

    /// A device index is outside `[0, len)`.
    #[error("device index {index} is out of range for a home with {len} device(s)")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of devices in the home.
        len: usize,
    },

    /// A device was added to a home that is already full.
    #[error("maximum number of devices reached for this home: {max_items}")]
    CapacityReached {
        /// The capacity of the home.
        max_items: usize,
    },

    /// A persisted line could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// No home is registered under the given name.
    #[error("home not found: {0}")]
    HomeNotFound(String),

    /// A home name cannot be stored in the persisted format.
    #[error("invalid home name: {0:?}")]
    InvalidHomeName(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document could not be decoded.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Errors related to attribute validation.
///
/// These errors occur when a device attribute is constructed or mutated
/// with a value outside its domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("{attribute} {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// The attribute being set.
        attribute: Attribute,
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// A wash mode string does not match any accepted mode.
    #[error(
        "wash mode '{0}' is not valid, must be one of: {accepted}",
        accepted = WashMode::accepted_values()
    )]
    InvalidWashMode(String),

    /// A device kind tag is not one of the known kinds.
    #[error("unknown device kind: {0}")]
    UnknownKind(String),
}

/// A persisted line that could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number in the source text.
    pub line: usize,
    /// What was wrong with the line.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a parse error for the given line.
    #[must_use]
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

/// The reason a persisted line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line has a name but no max items field.
    #[error("missing max items field")]
    MissingCapacity,

    /// The max items field is not a non-negative integer.
    #[error("invalid max items value '{0}'")]
    InvalidCapacity(String),

    /// The home name field is empty.
    #[error("home name is empty")]
    EmptyName,

    /// The device fields do not divide into (kind, state, value) triples.
    #[error("device fields must come in groups of three, found {tokens} trailing token(s)")]
    IncompleteDevice {
        /// Number of leftover tokens after the last complete triple.
        tokens: usize,
    },

    /// The kind tag is not a known device kind.
    #[error("unknown device kind '{0}'")]
    UnknownKind(String),

    /// The state token is neither `True` nor `False`.
    #[error("invalid switch state '{0}', expected 'True' or 'False'")]
    InvalidState(String),

    /// A numeric attribute value is not an integer.
    #[error("{kind} value '{value}' is not an integer")]
    NotAnInteger {
        /// The device kind whose attribute was being decoded.
        kind: DeviceKind,
        /// The offending token.
        value: String,
    },

    /// The attribute value is outside its domain.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// Another line already declared a home with this name.
    #[error("duplicate home name '{0}'")]
    DuplicateName(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            attribute: Attribute::ConsumptionRate,
            min: 0,
            max: 150,
            actual: 200,
        };
        assert_eq!(err.to_string(), "consumption rate 200 is out of range [0, 150]");
    }

    #[test]
    fn wash_mode_error_lists_every_mode() {
        let err = ValueError::InvalidWashMode("Wash and Dry".to_string());
        assert_eq!(
            err.to_string(),
            "wash mode 'Wash and Dry' is not valid, \
             must be one of: 'Daily wash', 'Quick wash', 'Eco'"
        );
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::UnknownKind("Fridge".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::UnknownKind(_))));
    }

    #[test]
    fn type_mismatch_display() {
        let err = Error::TypeMismatch {
            attribute: Attribute::ConsumptionRate,
            expected: ValueKind::Integer,
        };
        assert_eq!(err.to_string(), "consumption rate must be an integer");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::new(3, ParseErrorKind::InvalidState("yes".to_string()));
        assert_eq!(
            err.to_string(),
            "line 3: invalid switch state 'yes', expected 'True' or 'False'"
        );
    }

    #[test]
    fn parse_error_wraps_value_error_transparently() {
        let err = ParseError::new(
            1,
            ParseErrorKind::Value(ValueError::OutOfRange {
                attribute: Attribute::Channel,
                min: 1,
                max: 734,
                actual: 0,
            }),
        );
        assert_eq!(err.to_string(), "line 1: channel number 0 is out of range [1, 734]");
    }
}
