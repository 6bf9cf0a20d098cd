// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! IAU 2006 precession angles (Capitaine, Wallace & Chapront 2003).
//!
//! All series take `t`, Julian centuries of dynamical time since J2000.0,
//! and are evaluated in arcseconds before conversion to radians.

use std::f64::consts::TAU;

/// Arcseconds to radians.
pub(crate) const AS2RAD: f64 = TAU / 1_296_000.0;

/// Mean obliquity of the ecliptic at J2000.0 (″).
pub const EPSILON_0_ARCSEC: f64 = 84_381.406;

/// The Fukushima-Williams style angle set used to build the precession
/// rotation `zrot(-ψA)·xrot(-ωA)·zrot(χA)` (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionAngles {
    /// Luni-solar precession ψA.
    pub psi_a: f64,
    /// Inclination of the mean equator on the J2000 ecliptic ωA.
    pub omega_a: f64,
    /// Planetary precession χA.
    pub chi_a: f64,
    /// Mean obliquity of date εA.
    pub epsilon_a: f64,
}

#[inline]
fn poly5(t: f64, c: [f64; 6]) -> f64 {
    ((((c[5] * t + c[4]) * t + c[3]) * t + c[2]) * t + c[1]) * t + c[0]
}

/// Precession angles at `t` centuries from J2000.0.
pub fn precession_angles(t: f64) -> PrecessionAngles {
    let psi_a = poly5(
        t,
        [0.0, 5_038.481_507, -1.079_006_9, -0.001_140_45, 0.000_132_851, -0.000_000_095_1],
    );
    let omega_a = poly5(
        t,
        [EPSILON_0_ARCSEC, -0.025_754, 0.051_262_3, -0.007_725_03, -0.000_000_467, 0.000_000_333_7],
    );
    let chi_a = poly5(
        t,
        [0.0, 10.556_403, -2.381_429_2, -0.001_211_97, 0.000_170_663, -0.000_000_056_0],
    );

    PrecessionAngles {
        psi_a: psi_a * AS2RAD,
        omega_a: omega_a * AS2RAD,
        chi_a: chi_a * AS2RAD,
        epsilon_a: mean_obliquity(t),
    }
}

/// Mean obliquity of the ecliptic of date εA (radians).
pub fn mean_obliquity(t: f64) -> f64 {
    poly5(
        t,
        [EPSILON_0_ARCSEC, -46.836_769, -0.000_183_1, 0.002_003_40, -0.000_000_576, -0.000_000_043_4],
    ) * AS2RAD
}

/// General precession in ecliptic longitude pA (radians).
pub fn general_precession(t: f64) -> f64 {
    poly5(
        t,
        [0.0, 5_028.796_195, 1.105_434_8, 0.000_079_64, -0.000_023_857, -0.000_000_038_3],
    ) * AS2RAD
}
