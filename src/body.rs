// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar-system bodies as seen by the time/coordinate engine.
//!
//! A [`Body`] carries only what the observer and transform layers need:
//! shape, rotation elements, orbital period, a mean Keplerian orbit and an
//! atmosphere flag. Rendering data belongs elsewhere.

use std::f64::consts::TAU;

use nalgebra::{Matrix3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Astronomical unit in kilometres.
pub const AU_KM: f64 = 149_597_870.691;

/// Name of the pseudo-body used to observe from outside any planet.
pub const SOLAR_SYSTEM_OBSERVER: &str = "Solar System Observer";

/// Non-owning handle into a [`PlanetCatalog`](crate::PlanetCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyId(pub(crate) usize);

impl BodyId {
    /// Index of the body inside its catalog.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    /// A bodiless vantage point such as the Solar System Observer.
    Observer,
}

/// Simple rotation model of a body.
///
/// Angles in radians unless stated otherwise; periods in days.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotationElements {
    /// Sidereal rotation period; 0 marks a body without a fixed spin.
    pub period: f64,
    /// Rotation angle at `epoch`, degrees.
    pub offset: f64,
    /// JDE the offset refers to.
    pub epoch: f64,
    /// Tilt of the rotation axis against the parent reference plane.
    pub obliquity: f64,
    /// Longitude of the ascending node of the equator.
    pub ascending_node: f64,
    /// Precession of the node, radians per day.
    pub precession_rate: f64,
    pub retrograde: bool,
}

/// Mean Keplerian elements at J2000.0 with linear rates per Julian century.
///
/// Angles are in degrees, `a` in AU. The resulting position is in the
/// parent's ecliptic J2000 (VSOP87) frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeplerOrbit {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub mean_longitude: f64,
    pub longitude_of_perihelion: f64,
    pub ascending_node: f64,
    /// Rates of the six elements above, same order, per century.
    pub rates: [f64; 6],
}

impl KeplerOrbit {
    /// Builds from two rows `[a, e, I, L, ϖ, Ω]` (J2000 values and rates).
    pub const fn from_rows(values: [f64; 6], rates: [f64; 6]) -> Self {
        Self {
            semi_major_axis: values[0],
            eccentricity: values[1],
            inclination: values[2],
            mean_longitude: values[3],
            longitude_of_perihelion: values[4],
            ascending_node: values[5],
            rates,
        }
    }

    /// Position relative to the parent at `t` centuries of TT since J2000.0.
    pub fn position(&self, t: f64) -> Vector3<f64> {
        let r = &self.rates;
        let a = self.semi_major_axis + r[0] * t;
        let e = self.eccentricity + r[1] * t;
        let i = (self.inclination + r[2] * t).to_radians();
        let l = (self.mean_longitude + r[3] * t).to_radians();
        let varpi = (self.longitude_of_perihelion + r[4] * t).to_radians();
        let node = (self.ascending_node + r[5] * t).to_radians();

        let arg_perihelion = varpi - node;
        let mean_anomaly = (l - varpi).rem_euclid(TAU);
        let ea = eccentric_anomaly(mean_anomaly, e);

        let x = a * (ea.cos() - e);
        let y = a * (1.0 - e * e).sqrt() * ea.sin();

        perifocal_to_ecliptic(node, i, arg_perihelion) * Vector3::new(x, y, 0.0)
    }
}

/// Solves Kepler's equation `M = E − e·sin E` by Newton iteration.
pub fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let m = mean_anomaly.rem_euclid(TAU);
    let mut ea = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..50 {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ea
}

/// `Rz(Ω)·Rx(i)·Rz(ω)` from the orbital plane to the reference ecliptic.
fn perifocal_to_ecliptic(node: f64, inclination: f64, arg_perihelion: f64) -> Matrix3<f64> {
    let (so, co) = node.sin_cos();
    let (si, ci) = inclination.sin_cos();
    let (sw, cw) = arg_perihelion.sin_cos();
    Matrix3::new(
        co * cw - so * sw * ci,
        -co * sw - so * cw * ci,
        so * si,
        so * cw + co * sw * ci,
        -so * sw + co * cw * ci,
        -co * si,
        sw * si,
        cw * si,
        ci,
    )
}

/// A body of the planet catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    pub parent: Option<BodyId>,
    /// Equatorial radius, km.
    pub radius_km: f64,
    /// Geometric flattening `1 − b/a`.
    pub flattening: f64,
    pub rotation: RotationElements,
    /// Sidereal orbital period, days; 0 when not orbiting.
    pub sidereal_period: f64,
    pub orbit: Option<KeplerOrbit>,
    pub has_atmosphere: bool,
}

impl Body {
    /// Equatorial radius in AU.
    #[inline]
    pub fn radius_au(&self) -> f64 {
        self.radius_km / AU_KM
    }

    /// Polar to equatorial axis ratio `b/a`.
    #[inline]
    pub fn one_minus_oblateness(&self) -> f64 {
        1.0 - self.flattening
    }

    /// Sidereal rotation period in days.
    #[inline]
    pub fn sidereal_day(&self) -> f64 {
        self.rotation.period
    }

    #[inline]
    pub fn is_solar_system_observer(&self) -> bool {
        self.name == SOLAR_SYSTEM_OBSERVER
    }
}
