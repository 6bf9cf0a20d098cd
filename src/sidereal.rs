// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Earth rotation angle and Greenwich sidereal time.
//!
//! Sources: IERS Conventions 2010 eq. 5.15 (ERA) and Capitaine et al. 2003
//! table 2 (GMST polynomial). The rotation part takes the civil JD, the
//! polynomial part the dynamical JDE.

use std::f64::consts::TAU;

use crate::nutation::Nutation;
use crate::precession::{mean_obliquity, AS2RAD};
use crate::{JulianDate, JulianEphemerisDay};

/// Earth rotation angle in `[0, 2π)`.
pub fn earth_rotation_angle(jd: JulianDate) -> f64 {
    let du = jd.value() - JulianDate::J2000.value();
    // Split the day count so the fractional part keeps full precision.
    let frac = du.rem_euclid(1.0);
    (TAU * (frac + 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du)).rem_euclid(TAU)
}

/// Greenwich mean sidereal time (radians, `[0, 2π)`).
pub fn greenwich_mean_sidereal_time(jd: JulianDate, jde: JulianEphemerisDay) -> f64 {
    let t = jde.julian_centuries();
    let poly = ((((-0.000_000_036_8 * t - 0.000_029_956) * t - 0.000_000_44) * t
        + 1.391_581_7)
        * t
        + 4_612.156_534)
        * t
        + 0.014_506;
    (earth_rotation_angle(jd) + poly * AS2RAD).rem_euclid(TAU)
}

/// Greenwich apparent sidereal time: GMST plus the equation of the
/// equinoxes `Δψ·cos εA`.
pub fn greenwich_apparent_sidereal_time(
    jd: JulianDate,
    jde: JulianEphemerisDay,
    nutation: &Nutation,
) -> f64 {
    let eps = mean_obliquity(jde.julian_centuries());
    (greenwich_mean_sidereal_time(jd, jde) + nutation.delta_psi * eps.cos()).rem_euclid(TAU)
}

/// Local sidereal time for an east-positive `longitude` (radians).
pub fn local_sidereal_time(greenwich: f64, longitude: f64) -> f64 {
    (greenwich + longitude).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000() {
        let era = earth_rotation_angle(JulianDate::J2000);
        assert!((era - TAU * 0.779_057_273_264_0).abs() < 1e-12);
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987-04-10 0h UT: GMST = 13h10m46.3668s
        let jd = JulianDate::new(2_446_895.5);
        let jde = JulianEphemerisDay::new(2_446_895.5);
        let hours = greenwich_mean_sidereal_time(jd, jde).to_degrees() / 15.0;
        let expected = 13.0 + 10.0 / 60.0 + 46.3668 / 3600.0;
        assert!((hours - expected).abs() < 1e-4, "gmst = {hours} h");
    }

    #[test]
    fn sidereal_day_is_shorter_than_solar_day() {
        let jd = JulianDate::new(2_460_000.5);
        let jde = JulianEphemerisDay::new(2_460_000.5);
        let a = greenwich_mean_sidereal_time(jd, jde);
        let b = greenwich_mean_sidereal_time(
            JulianDate::new(2_460_001.5),
            JulianEphemerisDay::new(2_460_001.5),
        );
        let gain = (b - a).rem_euclid(TAU).to_degrees();
        assert!((gain - 0.9856).abs() < 1e-3, "gain = {gain}°");
    }

    #[test]
    fn apparent_differs_by_equation_of_equinoxes() {
        let jd = JulianDate::new(2_446_895.5);
        let jde = JulianEphemerisDay::new(2_446_895.5);
        let n = Nutation {
            delta_psi: -3.788 * AS2RAD,
            delta_epsilon: 9.443 * AS2RAD,
        };
        let diff = greenwich_apparent_sidereal_time(jd, jde, &n) - greenwich_mean_sidereal_time(jd, jde);
        // -0.2317 s of time
        assert!((diff.to_degrees() * 240.0 + 0.2317).abs() < 0.01, "diff = {diff}");
    }
}
