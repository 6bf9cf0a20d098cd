// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use qtty::*;

use super::instant::Time;
use super::scales::{JD, JDE, MJD};

/// One second expressed in days.
pub const JD_SECOND: f64 = 1.0 / 86_400.0;
/// One minute expressed in days.
pub const JD_MINUTE: f64 = 1.0 / 1_440.0;
/// One hour expressed in days.
pub const JD_HOUR: f64 = 1.0 / 24.0;
/// One day expressed in days.
pub const JD_DAY: f64 = 1.0;
/// Seconds per day.
pub const ONE_OVER_JD_SECOND: f64 = 86_400.0;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian year expressed in days.
    pub const JULIAN_YEAR: Days = Days::new(365.25);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Earliest simulated instant (≈ −100 000 CE). Trigonometric series
    /// downstream lose all meaning beyond this window.
    pub const MIN: Self = Self::new(-34_803_211.500_012);

    /// Latest simulated instant (≈ +100 000 CE).
    pub const MAX: Self = Self::new(38_245_309.499_988);

    /// Clamp into [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    ///
    /// NaN is mapped to [`J2000`](Self::J2000).
    #[inline]
    pub fn clamp_to_valid(self) -> Self {
        if self.value().is_nan() {
            Self::J2000
        } else {
            self.max(Self::MIN).min(Self::MAX)
        }
    }

    /// Julian centuries since J2000.0.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Convenience: MJD value corresponding to this JD.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }
}

impl Time<JDE> {
    /// J2000.0 on the dynamical axis.
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Julian centuries of dynamical time since J2000.0, the argument of
    /// the precession and nutation series.
    #[inline]
    pub fn julian_centuries(&self) -> f64 {
        ((*self - Self::J2000) / Time::<JD>::JULIAN_CENTURY)
            .simplify()
            .value()
    }
}
