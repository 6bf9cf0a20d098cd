// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic time–scale parameterised instant.
//!
//! [`Time<S>`] stores a scalar quantity in [`Days`] whose *meaning* is
//! determined by the compile-time marker `S: TimeScale`. Arithmetic,
//! conversion between scales that share an axis, UTC conversion,
//! serialisation and display are implemented once, generically.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::scales::{TimeAxis, Universal};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A **time scale** defines a display label, the [`TimeAxis`] it counts on,
/// and a pair of conversions between its native quantity and an absolute
/// Julian Day on that same axis.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Axis the day count lives on.
    type Axis: TimeAxis;

    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale to an absolute Julian Day.
    fn to_julian_day(value: Days) -> Days;

    /// Convert an absolute Julian Day back to this scale.
    fn from_julian_day(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>: the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
///
/// Layout-identical to a single `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

const UNIX_EPOCH_JD: f64 = 2_440_587.5;

impl<S: TimeScale> Time<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Day on this scale's axis.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_julian_day(self.quantity)
    }

    /// Build an instant from an absolute Julian Day on this scale's axis.
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_julian_day(jd))
    }

    /// Convert to another scale on the same axis.
    ///
    /// ```
    /// use skyframe::{JulianDate, MJD};
    ///
    /// let mjd = JulianDate::J2000.to::<MJD>();
    /// assert_eq!(mjd.value(), 51_544.5);
    /// ```
    #[inline]
    pub fn to<T: TimeScale<Axis = S::Axis>>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_julian_day(self.quantity))
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }

    /// Mean (midpoint) between two instants on the same time scale.
    #[inline]
    pub const fn mean(self, other: Self) -> Self {
        Self::from_days(self.quantity.const_add(other.quantity).const_div(2.0))
    }
}

// ── UTC helpers (universal axis only) ─────────────────────────────────────

impl<S: TimeScale<Axis = Universal>> Time<S> {
    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds = (self.julian_day() - Days::new(UNIX_EPOCH_JD))
            .to::<Second>()
            .value();
        if !seconds.is_finite() {
            return None;
        }
        let secs = seconds.floor() as i64;
        let nanos = ((seconds - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_unix_millis(datetime.timestamp_millis())
            + Seconds::new(f64::from(datetime.timestamp_subsec_nanos() % 1_000_000) / 1e9)
                .to::<Day>()
    }

    /// Build an instant from milliseconds since the Unix epoch.
    pub fn from_unix_millis(millis: i64) -> Self {
        let seconds = Seconds::new(millis as f64 / 1000.0);
        Self::from_julian_day(Days::new(UNIX_EPOCH_JD) + seconds.to::<Day>())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::super::scales::{JD, JDE, MJD};
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn julian_day_creation() {
        let jd = Time::<JD>::new(2_451_545.0);
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
    }

    #[test]
    fn unix_epoch_maps_to_known_jd() {
        let jd = Time::<JD>::from_unix_millis(0);
        assert!((jd.value() - UNIX_EPOCH_JD).abs() < 1e-12);
    }

    #[test]
    fn utc_roundtrip_j2000() {
        let datetime = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = Time::<JD>::from_utc(datetime);
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9, "jd = {}", jd);
        let back = jd.to_utc().expect("to_utc");
        let delta_ms = back.timestamp_millis() - datetime.timestamp_millis();
        assert!(delta_ms.abs() <= 1, "roundtrip error: {} ms", delta_ms);
    }

    #[test]
    fn mjd_into_jd_on_same_axis() {
        let mjd = Time::<MJD>::new(51_544.5);
        let jd: Time<JD> = mjd.to::<JD>();
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
    }

    #[test]
    fn arithmetic_and_ordering() {
        let mut jd = Time::<JD>::new(2_451_545.0);
        jd += Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.quantity(), Days::new(2_451_545.5));
        assert!(jd > Time::<JD>::new(2_451_545.0));
        assert_eq!(jd - Time::<JD>::new(2_451_545.0), Days::new(0.5));
    }

    #[test]
    fn min_max_mean() {
        const A: Time<JDE> = Time::<JDE>::new(10.0);
        const B: Time<JDE> = Time::<JDE>::new(14.0);
        assert_eq!(A.min(B).quantity(), Days::new(10.0));
        assert_eq!(A.max(B).quantity(), Days::new(14.0));
        assert_eq!(A.mean(B).quantity(), Days::new(12.0));
    }

    #[test]
    fn display_uses_label() {
        let s = format!("{}", Time::<JDE>::new(2_451_545.0));
        assert!(s.starts_with("JDE"));
    }
}
