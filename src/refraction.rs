// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Atmospheric refraction on AltAz vectors.
//!
//! Forward (geometric → apparent) uses Saemundsson's formula, backward
//! (apparent → geometric) Bennett's. Bennett is not an exact inverse below
//! about −0.3°, so the backward branch switches to a polynomial fit of
//! Saemundsson there. Below the lowest altitude of each branch a linear
//! band fades the correction to zero instead of jumping.
//!
//! Only the altitude changes: the horizontal components are rescaled so
//! the vector length is preserved.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest geometric altitude (deg) for the full forward formula.
pub const MIN_GEO_ALTITUDE_DEG: f64 = -3.54;
/// Lowest apparent altitude (deg) for the backward polynomial.
pub const MIN_APP_ALTITUDE_DEG: f64 = -3.217_83;
/// Width of the forward fade-out band (deg).
pub const TRANSITION_WIDTH_GEO_DEG: f64 = 1.46;
/// Width of the backward fade-out band (deg).
pub const TRANSITION_WIDTH_APP_DEG: f64 = 1.782_17;

/// Apparent altitude above which Bennett's formula is used.
const BENNETT_MIN_APP_DEG: f64 = 0.228_79;

/// Refraction model parameterised by surface pressure and temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Refraction {
    pressure_mbar: f64,
    temperature_c: f64,
    press_temp_corr: f64,
}

impl Default for Refraction {
    fn default() -> Self {
        Self::new(1013.0, 10.0)
    }
}

impl Refraction {
    pub fn new(pressure_mbar: f64, temperature_c: f64) -> Self {
        let mut r = Self {
            pressure_mbar,
            temperature_c,
            press_temp_corr: 0.0,
        };
        r.update_precomputed();
        r
    }

    fn update_precomputed(&mut self) {
        self.press_temp_corr =
            self.pressure_mbar / 1010.0 * 283.0 / (273.0 + self.temperature_c) / 60.0;
    }

    pub fn pressure_mbar(&self) -> f64 {
        self.pressure_mbar
    }

    pub fn set_pressure_mbar(&mut self, pressure: f64) {
        self.pressure_mbar = pressure;
        self.update_precomputed();
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn set_temperature_c(&mut self, temperature: f64) {
        self.temperature_c = temperature;
        self.update_precomputed();
    }

    /// Saemundsson refraction (degrees) at geometric altitude `alt` (deg).
    fn saemundsson(&self, alt: f64) -> f64 {
        self.press_temp_corr * (1.02 / ((alt + 10.3 / (alt + 5.11)).to_radians()).tan() + 0.001_927_9)
    }

    fn backward_polynomial(alt: f64) -> f64 {
        (((((0.0444 * alt + 0.7662) * alt + 4.9746) * alt + 13.599) * alt + 8.052) * alt - 11.308)
            * alt
            + 34.341
    }

    /// Apparent altitude (deg) for a geometric altitude (deg).
    pub fn apparent_altitude(&self, geometric_deg: f64) -> f64 {
        if geometric_deg > MIN_GEO_ALTITUDE_DEG {
            (geometric_deg + self.saemundsson(geometric_deg)).min(90.0)
        } else if geometric_deg > MIN_GEO_ALTITUDE_DEG - TRANSITION_WIDTH_GEO_DEG {
            let r_min = self.saemundsson(MIN_GEO_ALTITUDE_DEG);
            geometric_deg
                + r_min * (geometric_deg - (MIN_GEO_ALTITUDE_DEG - TRANSITION_WIDTH_GEO_DEG))
                    / TRANSITION_WIDTH_GEO_DEG
        } else {
            geometric_deg
        }
    }

    /// Geometric altitude (deg) for an apparent altitude (deg).
    pub fn geometric_altitude(&self, apparent_deg: f64) -> f64 {
        if apparent_deg > BENNETT_MIN_APP_DEG {
            let r = self.press_temp_corr
                * (1.0 / ((apparent_deg + 7.31 / (apparent_deg + 4.4)).to_radians()).tan()
                    + 0.001_351_5);
            apparent_deg - r
        } else if apparent_deg > MIN_APP_ALTITUDE_DEG {
            apparent_deg - self.press_temp_corr * Self::backward_polynomial(apparent_deg)
        } else if apparent_deg > MIN_APP_ALTITUDE_DEG - TRANSITION_WIDTH_APP_DEG {
            let r_min = Self::backward_polynomial(MIN_APP_ALTITUDE_DEG);
            apparent_deg
                - r_min
                    * self.press_temp_corr
                    * (apparent_deg - (MIN_APP_ALTITUDE_DEG - TRANSITION_WIDTH_APP_DEG))
                    / TRANSITION_WIDTH_APP_DEG
        } else {
            apparent_deg
        }
    }

    /// Geometric AltAz vector to apparent AltAz vector.
    pub fn forward(&self, v: &Vector3<f64>) -> Vector3<f64> {
        rescale_altitude(v, |alt| self.apparent_altitude(alt))
    }

    /// Apparent AltAz vector to geometric AltAz vector.
    pub fn backward(&self, v: &Vector3<f64>) -> Vector3<f64> {
        rescale_altitude(v, |alt| self.geometric_altitude(alt))
    }
}

/// Moves `v` to the corrected altitude keeping azimuth and length.
fn rescale_altitude(v: &Vector3<f64>, correct: impl Fn(f64) -> f64) -> Vector3<f64> {
    let length = v.norm();
    if length == 0.0 {
        return *v;
    }
    let sin_in = (v.z / length).clamp(-1.0, 1.0);
    let alt_in = sin_in.asin().to_degrees();
    let alt_out = correct(alt_in);
    if alt_out == alt_in {
        return *v;
    }
    let sin_out = alt_out.to_radians().sin();
    let scale_xy = if sin_in.abs() >= 1.0 {
        1.0
    } else {
        ((1.0 - sin_out * sin_out) / (1.0 - sin_in * sin_in)).sqrt()
    };
    Vector3::new(v.x * scale_xy, v.y * scale_xy, sin_out * length)
}
