// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for configuration and lookup failures.
//!
//! The time/coordinate engine never halts on a recoverable problem: lookup
//! and parsing helpers return [`Result`], and [`Core`](crate::Core) turns
//! every failure into a logged warning plus a deterministic fallback.
//!
//! | Variant | Raised by | Core fallback |
//! |---------|-----------|---------------|
//! | [`UnknownDeltaTAlgorithm`](Error::UnknownDeltaTAlgorithm) | [`DeltaTAlgorithm::from_key`](crate::DeltaTAlgorithm::from_key) | `WithoutCorrection` |
//! | [`UnknownProjection`](Error::UnknownProjection) | [`ProjectionType::from_key`](crate::ProjectionType::from_key) | Stereographic |
//! | [`UnknownLocation`](Error::UnknownLocation) | [`LocationResolver::resolve`](crate::LocationResolver::resolve) | Paris |
//! | [`UnknownBody`](Error::UnknownBody) | [`PlanetCatalog`](crate::PlanetCatalog) lookups | Earth |
//! | [`InvalidDate`](Error::InvalidDate) | ISO-8601 and time-of-day parsing | system time |
//! | [`InvalidSetting`](Error::InvalidSetting) | typed [`Settings`](crate::Settings) getters | documented default |

use thiserror::Error;

/// Failures reported by parsers, resolvers and the settings store.
#[derive(Error, Debug)]
pub enum Error {
    /// A ΔT algorithm key that names no known model.
    #[error("unknown ΔT algorithm key `{0}`")]
    UnknownDeltaTAlgorithm(String),

    /// A projection key that names no known projection surface.
    #[error("unknown projection type `{0}`")]
    UnknownProjection(String),

    /// A location string the resolver could not match.
    #[error("unknown location `{0}`")]
    UnknownLocation(String),

    /// A body name that is not in the planet catalog.
    #[error("unknown body `{0}`")]
    UnknownBody(String),

    /// A malformed date or time-of-day string.
    #[error("invalid date/time `{input}`: {reason}")]
    InvalidDate { input: String, reason: &'static str },

    /// A stored setting whose value cannot be parsed as the expected type.
    #[error("invalid value `{value}` for setting `{key}` (expected {expected})")]
    InvalidSetting {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// The settings store could not be (de)serialized.
    #[cfg(feature = "serde")]
    #[error("settings serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_date(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason,
        }
    }

    pub(crate) fn invalid_setting(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            value: value.into(),
            expected,
        }
    }
}
