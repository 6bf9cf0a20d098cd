// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer sites and the location-resolver seam.
//!
//! # Coordinate conventions
//!
//! - **Latitude**: planetographic, north positive, degrees in `[-90, 90]`
//! - **Longitude**: east positive, degrees in `[-180, 180]`
//! - **Altitude**: metres above the reference surface
//!
//! Sites are identified by `"name, region"`. A [`LocationResolver`] turns
//! such ids (or raw `"lat, lon[, alt]"` strings) into [`Location`]s.
//!
//! ```
//! use skyframe::{LocationDb, LocationResolver};
//!
//! let db = LocationDb::builtin();
//! let paris = db.resolve("Paris, France")?;
//! assert!((paris.latitude - 48.8534).abs() < 1e-9);
//!
//! let adhoc = db.resolve("-29.2563, -70.738, 2400")?;
//! assert_eq!(adhoc.altitude, 2400.0);
//! # Ok::<(), skyframe::Error>(())
//! ```

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named observing site on some body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub name: String,
    pub region: String,
    /// English name of the body the site is on.
    pub planet: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Location {
    /// A site on Earth.
    pub fn on_earth(
        name: impl Into<String>,
        region: impl Into<String>,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            planet: "Earth".into(),
            latitude,
            longitude,
            altitude,
        }
    }

    /// Same site description moved to another body.
    pub fn with_planet(mut self, planet: impl Into<String>) -> Self {
        self.planet = planet.into();
        self
    }

    /// Hardcoded fallback used when nothing else resolves.
    pub fn last_resort() -> Self {
        Self::on_earth("Paris", "France", 48.8534, 2.3488, 42.0)
    }

    /// `"name, region"`, or the bare name when the region is empty.
    pub fn id(&self) -> String {
        if self.region.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.region)
        }
    }

    /// Parses `"lat, lon[, alt]"` in decimal degrees and metres.
    pub fn from_coordinates(input: &str) -> Result<Self> {
        let fields: Vec<&str> = input.split(',').map(str::trim).collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(Error::UnknownLocation(input.to_string()));
        }
        let number = |s: &str| {
            s.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| Error::UnknownLocation(input.to_string()))
        };
        let latitude = number(fields[0])?;
        let longitude = number(fields[1])?;
        let altitude = match fields.get(2) {
            Some(a) => number(a)?,
            None => 0.0,
        };
        if latitude.abs() > 90.0 || longitude.abs() > 180.0 {
            return Err(Error::UnknownLocation(input.to_string()));
        }
        Ok(Self {
            name: format!("{latitude:.4}, {longitude:.4}"),
            region: String::new(),
            planet: "Earth".into(),
            latitude,
            longitude,
            altitude,
        })
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::last_resort()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) {:.4}°, {:.4}°, {} m",
            self.id(),
            self.planet,
            self.latitude,
            self.longitude,
            self.altitude
        )
    }
}

/// Resolves location strings for the core.
pub trait LocationResolver {
    /// Looks up a site id, a bare name or a coordinate string.
    fn resolve(&self, query: &str) -> Result<Location>;

    /// Geolocation by network address; `None` when unsupported or offline.
    fn locate_by_ip(&self) -> Option<Location> {
        None
    }
}

/// Small in-memory site list.
#[derive(Debug, Clone, Default)]
pub struct LocationDb {
    sites: Vec<Location>,
}

impl LocationDb {
    /// An empty database that only understands coordinate strings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Database seeded with a handful of well-known sites.
    pub fn builtin() -> Self {
        let sites = vec![
            Location::last_resort(),
            Location::on_earth("Greenwich", "United Kingdom", 51.4769, -0.0005, 47.0),
            Location::on_earth("New York", "United States", 40.7128, -74.0060, 10.0),
            Location::on_earth("Tokyo", "Japan", 35.6895, 139.6917, 40.0),
            Location::on_earth("Sydney", "Australia", -33.8688, 151.2093, 58.0),
            Location::on_earth("Cape Town", "South Africa", -33.9249, 18.4241, 25.0),
            Location::on_earth("Santiago", "Chile", -33.4489, -70.6693, 570.0),
            Location::on_earth("Mauna Kea", "United States", 19.8207, -155.4681, 4205.0),
            Location::on_earth("Reykjavik", "Iceland", 64.1466, -21.9426, 20.0),
            Location::on_earth("Gale Crater", "Mars", -5.4, 137.8, -4500.0).with_planet("Mars"),
            Location::on_earth("Mare Tranquillitatis", "Moon", 0.674, 23.473, 0.0)
                .with_planet("Moon"),
        ];
        Self { sites }
    }

    /// Adds or replaces a site (matched by id).
    pub fn insert(&mut self, location: Location) {
        let id = location.id();
        match self.sites.iter_mut().find(|s| s.id() == id) {
            Some(slot) => *slot = location,
            None => self.sites.push(location),
        }
    }

    pub fn sites(&self) -> &[Location] {
        &self.sites
    }
}

impl LocationResolver for LocationDb {
    fn resolve(&self, query: &str) -> Result<Location> {
        let q = query.trim();
        if let Some(site) = self.sites.iter().find(|s| s.id().eq_ignore_ascii_case(q)) {
            return Ok(site.clone());
        }
        if let Some(site) = self.sites.iter().find(|s| s.name.eq_ignore_ascii_case(q)) {
            return Ok(site.clone());
        }
        Location::from_coordinates(q)
    }
}
