// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a day count and the **time axis** it lives
//! on. Two axes exist:
//!
//! | Axis | Meaning |
//! |------|---------|
//! | [`Universal`] | civil time driven by Earth rotation (what the clock shows) |
//! | [`Dynamical`] | uniform ephemeris time used by planetary theories |
//!
//! Conversions inside one axis are constant epoch offsets. Moving between
//! axes needs ΔT, which depends on the selected model, so it is only offered
//! by [`DeltaTEngine`](crate::DeltaTEngine).
//!
//! | Marker | Description | Axis | Epoch (JD) |
//! |--------|-------------|------|------------|
//! | [`JD`] | Julian Day | universal | 0.0 |
//! | [`MJD`] | Modified Julian Day | universal | 2 400 000.5 |
//! | [`JDE`] | Julian Ephemeris Day | dynamical | 0.0 |

use super::instant::TimeScale;
use qtty::Days;

/// Marker trait for a time axis.
pub trait TimeAxis: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {}

/// Earth-rotation (UT) axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Universal;

/// Dynamical (TT) axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Dynamical;

impl TimeAxis for Universal {}
impl TimeAxis for Dynamical {}

/// Julian Day, counted on the universal axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    type Axis = Universal;
    const LABEL: &'static str = "JD";

    #[inline(always)]
    fn to_julian_day(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_julian_day(jd: Days) -> Days {
        jd
    }
}

/// Modified Julian Day, JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
pub(crate) const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    type Axis = Universal;
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_julian_day(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_julian_day(jd: Days) -> Days {
        jd - MJD_EPOCH
    }
}

/// Julian Ephemeris Day, `JD + ΔT/86400`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JDE;

impl TimeScale for JDE {
    type Axis = Dynamical;
    const LABEL: &'static str = "JDE";

    #[inline(always)]
    fn to_julian_day(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_julian_day(jd: Days) -> Days {
        jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mjd_offset_is_constant() {
        let jd = MJD::to_julian_day(Days::new(51_544.5));
        assert_eq!(jd, Days::new(2_451_545.0));
        assert_eq!(MJD::from_julian_day(jd), Days::new(51_544.5));
    }

    #[test]
    fn labels() {
        assert_eq!(JD::LABEL, "JD");
        assert_eq!(MJD::LABEL, "MJD");
        assert_eq!(JDE::LABEL, "JDE");
    }
}
