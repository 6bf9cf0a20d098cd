// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Flat `section/key = value` settings store and the typed Core view of it.
//!
//! ```
//! use skyframe::{CoreConfig, Settings};
//!
//! let mut settings = Settings::new();
//! settings.set("navigation/time_correction_algorithm", "MorrisonStephenson2004");
//! let config = CoreConfig::from_settings(&settings);
//! assert_eq!(config.delta_t_algorithm, "MorrisonStephenson2004");
//! assert_eq!(config.default_location, "Paris, France");
//! ```

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{Error, Result};
use crate::projector::{MaskType, ProjectionType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered string store keyed by `section/key`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values.insert(key.into(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// `None` when absent, an error when present but not a number.
    pub fn get_f64(&self, key: &str) -> Result<Option<f64>> {
        self.parse(key, "a number", |s| s.parse::<f64>().ok().filter(|v| v.is_finite()))
    }

    pub fn get_i64(&self, key: &str) -> Result<Option<i64>> {
        self.parse(key, "an integer", |s| s.parse::<i64>().ok())
    }

    /// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.parse(key, "a boolean", |s| match s.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        })
    }

    fn parse<T>(
        &self,
        key: &str,
        expected: &'static str,
        f: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(raw) => f(raw.trim())
                .map(Some)
                .ok_or_else(|| Error::invalid_setting(key, raw.as_str(), expected)),
        }
    }

    pub fn get_str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_str(key).unwrap_or(default)
    }

    pub fn get_f64_or(&self, key: &str, default: f64) -> f64 {
        self.get_f64(key).unwrap_or_else(|e| fallback(e, default)).unwrap_or(default)
    }

    pub fn get_i64_or(&self, key: &str, default: i64) -> i64 {
        self.get_i64(key).unwrap_or_else(|e| fallback(e, default)).unwrap_or(default)
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or_else(|e| fallback(e, default)).unwrap_or(default)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn fallback<T: std::fmt::Debug>(error: Error, default: T) -> Option<T> {
    warn!(%error, fallback = ?default, "invalid setting");
    Some(default)
}

/// How the simulation clock is initialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StartupTimeMode {
    /// Current system time.
    #[default]
    Actual,
    /// Today at [`CoreConfig::today_time`].
    Today,
    /// A fixed JD, [`CoreConfig::preset_sky_time`].
    Preset,
}

impl StartupTimeMode {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Actual => "actual",
            Self::Today => "today",
            Self::Preset => "preset",
        }
    }

    /// Unknown strings read as [`StartupTimeMode::Actual`].
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "today" => Self::Today,
            "preset" => Self::Preset,
            _ => Self::Actual,
        }
    }
}

pub mod keys {
    pub const DEFAULT_LOCATION: &str = "init_location/location";
    pub const DELTA_T_ALGORITHM: &str = "navigation/time_correction_algorithm";
    pub const CUSTOM_COEFFICIENTS: &str = "custom_time_correction/coefficients";
    pub const CUSTOM_YEAR: &str = "custom_time_correction/year";
    pub const CUSTOM_NDOT: &str = "custom_time_correction/ndot";
    pub const STARTUP_TIME_MODE: &str = "navigation/startup_time_mode";
    pub const PRESET_SKY_TIME: &str = "navigation/preset_sky_time";
    pub const TODAY_TIME: &str = "navigation/today_time";
    pub const FLAG_NUTATION: &str = "astro/flag_nutation";
    pub const FLAG_TOPOCENTRIC: &str = "astro/flag_topocentric_coordinates";
    pub const FLAG_USE_DE430: &str = "astro/flag_use_de430";
    pub const FLAG_USE_DE431: &str = "astro/flag_use_de431";
    pub const DE430_PATH: &str = "astro/de430_path";
    pub const DE431_PATH: &str = "astro/de431_path";
    pub const PROJECTION_TYPE: &str = "projection/type";
    pub const VIEWPORT_MASK: &str = "projection/viewport_mask";
    pub const FLIP_HORZ: &str = "projection/flip_horz";
    pub const FLIP_VERT: &str = "projection/flip_vert";
    pub const GRAVITY_LABELS: &str = "viewing/flag_gravity_labels";
    pub const PRESSURE_MBAR: &str = "landscape/pressure_mbar";
    pub const TEMPERATURE_C: &str = "landscape/temperature_C";
}

/// Every Core setting, typed.
///
/// String-valued keys (location, algorithm, projection) are kept raw: the
/// Core resolves them and falls back with a warning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoreConfig {
    pub default_location: String,
    pub delta_t_algorithm: String,
    pub custom_coefficients: [f64; 3],
    pub custom_year: f64,
    pub custom_ndot: f64,
    pub startup_time_mode: StartupTimeMode,
    pub preset_sky_time: f64,
    /// `HH:MM[:SS]`, local to the chosen startup day.
    pub today_time: String,
    pub flag_nutation: bool,
    pub flag_topocentric: bool,
    pub flag_use_de430: bool,
    pub flag_use_de431: bool,
    pub de430_path: String,
    pub de431_path: String,
    pub projection: String,
    pub viewport_mask: MaskType,
    pub flip_horz: bool,
    pub flip_vert: bool,
    pub gravity_labels: bool,
    pub pressure_mbar: f64,
    pub temperature_c: f64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_location: "Paris, France".into(),
            delta_t_algorithm: "EspenakMeeus".into(),
            custom_coefficients: [-20.0, 0.0, 32.0],
            custom_year: 1820.0,
            custom_ndot: -26.0,
            startup_time_mode: StartupTimeMode::Actual,
            preset_sky_time: 2_451_545.0,
            today_time: "22:00".into(),
            flag_nutation: true,
            flag_topocentric: true,
            flag_use_de430: false,
            flag_use_de431: false,
            de430_path: String::new(),
            de431_path: String::new(),
            projection: ProjectionType::Stereographic.key().into(),
            viewport_mask: MaskType::None,
            flip_horz: false,
            flip_vert: false,
            gravity_labels: false,
            pressure_mbar: 1013.0,
            temperature_c: 10.0,
        }
    }
}

/// Parses `"c0,c1,c2"`. Missing or bad entries yield `None`.
fn parse_coefficients(raw: &str) -> Option<[f64; 3]> {
    let values: Vec<f64> = raw
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    <[f64; 3]>::try_from(values).ok()
}

impl CoreConfig {
    /// Reads every key, substituting defaults for missing or bad values.
    pub fn from_settings(settings: &Settings) -> Self {
        use keys::*;
        let d = Self::default();

        let custom_coefficients = match settings.get_str(CUSTOM_COEFFICIENTS) {
            None => d.custom_coefficients,
            Some(raw) => parse_coefficients(raw).unwrap_or_else(|| {
                warn!(key = CUSTOM_COEFFICIENTS, value = %raw, fallback = ?d.custom_coefficients, "bad ΔT coefficients");
                d.custom_coefficients
            }),
        };

        Self {
            default_location: settings.get_str_or(DEFAULT_LOCATION, &d.default_location).to_string(),
            delta_t_algorithm: settings.get_str_or(DELTA_T_ALGORITHM, &d.delta_t_algorithm).to_string(),
            custom_coefficients,
            custom_year: settings.get_f64_or(CUSTOM_YEAR, d.custom_year),
            custom_ndot: settings.get_f64_or(CUSTOM_NDOT, d.custom_ndot),
            startup_time_mode: settings
                .get_str(STARTUP_TIME_MODE)
                .map_or(d.startup_time_mode, StartupTimeMode::from_key),
            preset_sky_time: settings.get_f64_or(PRESET_SKY_TIME, d.preset_sky_time),
            today_time: settings.get_str_or(TODAY_TIME, &d.today_time).to_string(),
            flag_nutation: settings.get_bool_or(FLAG_NUTATION, d.flag_nutation),
            flag_topocentric: settings.get_bool_or(FLAG_TOPOCENTRIC, d.flag_topocentric),
            flag_use_de430: settings.get_bool_or(FLAG_USE_DE430, d.flag_use_de430),
            flag_use_de431: settings.get_bool_or(FLAG_USE_DE431, d.flag_use_de431),
            de430_path: settings.get_str_or(DE430_PATH, "").to_string(),
            de431_path: settings.get_str_or(DE431_PATH, "").to_string(),
            projection: settings.get_str_or(PROJECTION_TYPE, &d.projection).to_string(),
            viewport_mask: settings
                .get_str(VIEWPORT_MASK)
                .map_or(d.viewport_mask, MaskType::from_key),
            flip_horz: settings.get_bool_or(FLIP_HORZ, d.flip_horz),
            flip_vert: settings.get_bool_or(FLIP_VERT, d.flip_vert),
            gravity_labels: settings.get_bool_or(GRAVITY_LABELS, d.gravity_labels),
            pressure_mbar: settings.get_f64_or(PRESSURE_MBAR, d.pressure_mbar),
            temperature_c: settings.get_f64_or(TEMPERATURE_C, d.temperature_c),
        }
    }

    /// Writes every key back.
    pub fn write_to(&self, settings: &mut Settings) {
        use keys::*;
        let [c0, c1, c2] = self.custom_coefficients;
        settings.set(DEFAULT_LOCATION, &self.default_location);
        settings.set(DELTA_T_ALGORITHM, &self.delta_t_algorithm);
        settings.set(CUSTOM_COEFFICIENTS, format!("{c0},{c1},{c2}"));
        settings.set(CUSTOM_YEAR, self.custom_year);
        settings.set(CUSTOM_NDOT, self.custom_ndot);
        settings.set(STARTUP_TIME_MODE, self.startup_time_mode.key());
        settings.set(PRESET_SKY_TIME, self.preset_sky_time);
        settings.set(TODAY_TIME, &self.today_time);
        settings.set(FLAG_NUTATION, self.flag_nutation);
        settings.set(FLAG_TOPOCENTRIC, self.flag_topocentric);
        settings.set(FLAG_USE_DE430, self.flag_use_de430);
        settings.set(FLAG_USE_DE431, self.flag_use_de431);
        settings.set(DE430_PATH, &self.de430_path);
        settings.set(DE431_PATH, &self.de431_path);
        settings.set(PROJECTION_TYPE, &self.projection);
        settings.set(VIEWPORT_MASK, self.viewport_mask.key());
        settings.set(FLIP_HORZ, self.flip_horz);
        settings.set(FLIP_VERT, self.flip_vert);
        settings.set(GRAVITY_LABELS, self.gravity_labels);
        settings.set(PRESSURE_MBAR, self.pressure_mbar);
        settings.set(TEMPERATURE_C, self.temperature_c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_getters() {
        let mut s = Settings::new();
        s.set("a/num", "1.5");
        s.set("a/int", 42);
        s.set("a/flag", "Yes");
        s.set("a/bad", "pumpkin");
        assert_eq!(s.get_f64("a/num").unwrap(), Some(1.5));
        assert_eq!(s.get_i64("a/int").unwrap(), Some(42));
        assert_eq!(s.get_bool("a/flag").unwrap(), Some(true));
        assert_eq!(s.get_f64("a/missing").unwrap(), None);
        assert!(matches!(s.get_f64("a/bad"), Err(Error::InvalidSetting { .. })));
        assert!(matches!(s.get_bool("a/bad"), Err(Error::InvalidSetting { .. })));
    }

    #[test]
    fn or_getters_fall_back() {
        let mut s = Settings::new();
        s.set("a/bad", "pumpkin");
        assert_eq!(s.get_f64_or("a/bad", 3.0), 3.0);
        assert_eq!(s.get_bool_or("a/bad", true), true);
        assert_eq!(s.get_i64_or("a/none", 7), 7);
        assert_eq!(s.get_str_or("a/none", "x"), "x");
    }

    #[test]
    fn defaults_from_empty_store() {
        let c = CoreConfig::from_settings(&Settings::new());
        assert_eq!(c, CoreConfig::default());
        assert_eq!(c.delta_t_algorithm, "EspenakMeeus");
        assert_eq!(c.custom_coefficients, [-20.0, 0.0, 32.0]);
        assert_eq!(c.custom_year, 1820.0);
        assert_eq!(c.projection, "ProjectionStereographic");
    }

    #[test]
    fn config_roundtrips_through_store() {
        let mut c = CoreConfig::default();
        c.default_location = "Tokyo, Japan".into();
        c.custom_coefficients = [1.5, -2.0, 30.25];
        c.startup_time_mode = StartupTimeMode::Preset;
        c.preset_sky_time = 2_440_000.5;
        c.flag_nutation = false;
        c.viewport_mask = MaskType::Disk;
        let mut s = Settings::new();
        c.write_to(&mut s);
        assert_eq!(s.get_str(keys::STARTUP_TIME_MODE), Some("preset"));
        assert_eq!(CoreConfig::from_settings(&s), c);
    }

    #[test]
    fn bad_coefficients_use_default() {
        let mut s = Settings::new();
        s.set(keys::CUSTOM_COEFFICIENTS, "1,2");
        assert_eq!(CoreConfig::from_settings(&s).custom_coefficients, [-20.0, 0.0, 32.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_persistence() {
        let mut s = Settings::new();
        CoreConfig::default().write_to(&mut s);
        let json = s.to_json().unwrap();
        assert!(json.contains("navigation/time_correction_algorithm"));
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }
}
