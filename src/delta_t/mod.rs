// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T): the UT ↔ TT correction layer
//!
//! ΔT = TT − UT has no closed form; it is tabulated from historical eclipse,
//! occultation and clock records and fitted by many authors. This module
//! offers about thirty of those fits behind a single [`DeltaTEngine`], so the
//! rest of the crate never cares which one is active.
//!
//! ## Evaluation
//!
//! For the selected [`DeltaTAlgorithm`] the engine computes
//!
//! ```text
//! ΔT(jd) = formula(jd) + lunar_secular_correction(jd, ndot)
//! ```
//!
//! where the second term is skipped for models whose formula already
//! embeds the lunar acceleration ([`DeltaTAlgorithm::dont_use_moon`]). The
//! correction re-bases a model fitted with lunar acceleration `ndot` onto
//! the ephemeris in use: ELP2000-82B (−23.8946″/cy²) or, when the JD falls
//! inside an active DE430/DE431 file, the DE43x value (−25.8″/cy²).
//!
//! ## Crossing time axes
//!
//! [`JulianDate`] and [`JulianEphemerisDay`] live on different
//! [`TimeAxis`](crate::TimeAxis)es, so the only way between them is through
//! the engine:
//!
//! ```rust
//! use skyframe::{DeltaTAlgorithm, DeltaTEngine, JulianDate};
//!
//! let engine = DeltaTEngine::new(DeltaTAlgorithm::EspenakMeeus);
//! let jd = JulianDate::J2000;
//! let jde = engine.jde_from_jd(jd);
//! let dt = engine.compute_delta_t(jd);
//! assert!((jde.value() - jd.value() - dt.value() / 86_400.0).abs() < 1e-9);
//! ```
//!
//! ## Scientific references
//! * Espenak & Meeus (2006): *Five Millennium Canon of Solar Eclipses*.
//! * Meeus (1998): *Astronomical Algorithms*, 2nd ed., ch. 10.
//! * Stephenson, Morrison & Hohenkerk (2016): *Proc. R. Soc. A* 472.

mod algorithm;
mod models;
mod moon_fluctuation;
mod tables;

pub use algorithm::{DeltaTAlgorithm, OutOfRangePolicy};

use qtty::Seconds;

use crate::calendar::date_from_julian_day;
use crate::error::Result;
use crate::{JulianDate, JulianEphemerisDay};

/// JD span covered by the DE430 ephemeris.
pub const DE430_RANGE: (f64, f64) = (2_287_184.5, 2_688_976.5);
/// JD span covered by the DE431 ephemeris.
pub const DE431_RANGE: (f64, f64) = (-3_100_015.5, 8_000_016.5);

/// Parameters of the user-defined quadratic model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomDeltaT {
    /// `[c0, c1, c2]` of `c0 + c1·u + c2·u²`.
    pub coefficients: [f64; 3],
    /// Reference year `u` is counted from.
    pub year: f64,
    /// Lunar acceleration the coefficients were fitted with (″/cy²).
    pub ndot: f64,
}

impl Default for CustomDeltaT {
    fn default() -> Self {
        Self {
            coefficients: [-20.0, 0.0, 32.0],
            year: 1820.0,
            ndot: -26.0,
        }
    }
}

/// Strategy holder for ΔT evaluation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeltaTEngine {
    algorithm: DeltaTAlgorithm,
    custom: CustomDeltaT,
    de430_active: bool,
    de431_active: bool,
}

impl DeltaTEngine {
    pub fn new(algorithm: DeltaTAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    // ── model selection ───────────────────────────────────────────────

    #[inline]
    pub fn algorithm(&self) -> DeltaTAlgorithm {
        self.algorithm
    }

    #[inline]
    pub fn set_algorithm(&mut self, algorithm: DeltaTAlgorithm) {
        self.algorithm = algorithm;
    }

    /// Key of the active model, as stored in the settings.
    #[inline]
    pub fn algorithm_key(&self) -> &'static str {
        self.algorithm.key()
    }

    /// Selects a model by key.
    ///
    /// An unknown key installs [`DeltaTAlgorithm::FALLBACK`] and returns the
    /// lookup error so the caller can report it; the engine is never left
    /// without a model.
    pub fn set_algorithm_key(&mut self, key: &str) -> Result<()> {
        match DeltaTAlgorithm::from_key(key) {
            Ok(algorithm) => {
                self.algorithm = algorithm;
                Ok(())
            }
            Err(e) => {
                self.algorithm = DeltaTAlgorithm::FALLBACK;
                Err(e)
            }
        }
    }

    // ── custom model ──────────────────────────────────────────────────

    #[inline]
    pub fn custom(&self) -> CustomDeltaT {
        self.custom
    }

    pub fn set_custom_coefficients(&mut self, coefficients: [f64; 3]) {
        self.custom.coefficients = coefficients;
    }

    #[inline]
    pub fn custom_coefficients(&self) -> [f64; 3] {
        self.custom.coefficients
    }

    pub fn set_custom_year(&mut self, year: f64) {
        self.custom.year = year;
    }

    #[inline]
    pub fn custom_year(&self) -> f64 {
        self.custom.year
    }

    pub fn set_custom_ndot(&mut self, ndot: f64) {
        self.custom.ndot = ndot;
    }

    #[inline]
    pub fn custom_ndot(&self) -> f64 {
        self.custom.ndot
    }

    // ── ephemeris flags ───────────────────────────────────────────────

    pub fn set_de430_active(&mut self, active: bool) {
        self.de430_active = active;
    }

    pub fn set_de431_active(&mut self, active: bool) {
        self.de431_active = active;
    }

    #[inline]
    pub fn is_de430_active(&self) -> bool {
        self.de430_active
    }

    #[inline]
    pub fn is_de431_active(&self) -> bool {
        self.de431_active
    }

    /// `true` when `jd` falls inside an active DE430 or DE431 file.
    pub fn uses_de43x(&self, jd: JulianDate) -> bool {
        let inside = |(lo, hi): (f64, f64)| (lo..=hi).contains(&jd.value());
        (self.de430_active && inside(DE430_RANGE)) || (self.de431_active && inside(DE431_RANGE))
    }

    // ── evaluation ────────────────────────────────────────────────────

    /// `ndot` of the active model (the user value for `Custom`).
    pub fn ndot(&self) -> f64 {
        match self.algorithm {
            DeltaTAlgorithm::Custom => self.custom.ndot,
            other => other.ndot(),
        }
    }

    /// The published formula of the active model, without lunar correction.
    pub fn raw_delta_t(&self, jd: JulianDate) -> Seconds {
        let value = match self.algorithm.formula() {
            Some(formula) => formula(jd.value()),
            None => models::custom(jd.value(), self.custom.coefficients, self.custom.year),
        };
        Seconds::new(value)
    }

    /// Secular-acceleration correction for the given `ndot` at `jd`.
    pub fn lunar_secular_correction(&self, jd: JulianDate, ndot: f64) -> Seconds {
        Seconds::new(models::lunar_secular_correction(
            jd.value(),
            ndot,
            self.uses_de43x(jd),
        ))
    }

    /// ΔT in seconds at `jd` for the active model.
    pub fn compute_delta_t(&self, jd: JulianDate) -> Seconds {
        let raw = self.raw_delta_t(jd);
        if self.algorithm.dont_use_moon() {
            raw
        } else {
            raw + self.lunar_secular_correction(jd, self.ndot())
        }
    }

    /// Converts a civil Julian Day to the dynamical axis.
    pub fn jde_from_jd(&self, jd: JulianDate) -> JulianEphemerisDay {
        let dt = self.compute_delta_t(jd);
        JulianEphemerisDay::from_days(jd.quantity() + dt.to::<qtty::Day>())
    }

    /// Converts a dynamical Julian Day back to the civil axis.
    ///
    /// ΔT is evaluated at the JDE value itself rather than solved for; the
    /// difference is far below the accuracy of any model.
    pub fn jd_from_jde(&self, jde: JulianEphemerisDay) -> JulianDate {
        let dt = self.compute_delta_t(JulianDate::from_days(jde.quantity()));
        JulianDate::from_days(jde.quantity() - dt.to::<qtty::Day>())
    }

    // ── presentation helpers ──────────────────────────────────────────

    /// Attribution and validity text of the active model.
    pub fn description(&self) -> String {
        let mut text = self.algorithm.attribution().to_owned();
        if let Some((start, end)) = self.algorithm.valid_range() {
            text.push_str(&format!(" Valid range of usage: between years {start} and {end}."));
        }
        if !self.algorithm.dont_use_moon() {
            text.push_str(&format!(
                " Lunar secular acceleration n-dot = {:.4} ″/cy².",
                self.ndot()
            ));
        }
        text
    }

    /// `"*"` when the year of `jd` lies outside the model's valid range,
    /// `"?"` when the range is unknown, `""` otherwise.
    pub fn valid_range_marker(&self, jd: JulianDate) -> &'static str {
        if self.algorithm == DeltaTAlgorithm::WithoutCorrection {
            return "";
        }
        match self.algorithm.valid_range() {
            None => "?",
            Some((start, end)) => {
                let (year, _, _) = date_from_julian_day(jd.value());
                if (start..=end).contains(&year) {
                    ""
                } else {
                    "*"
                }
            }
        }
    }
}

/// Published 1σ uncertainty of ΔT for years −1000..1600, `None` elsewhere.
pub fn standard_error(jd: JulianDate) -> Option<Seconds> {
    models::standard_error(jd.value()).map(Seconds::new)
}

/// Spencer Jones lunar longitude fluctuation at `jd` (zero outside 1681–1936).
pub fn moon_fluctuation(jd: JulianDate) -> Seconds {
    Seconds::new(models::moon_fluctuation(jd.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::julian_day_from_date;
    use crate::error::Error;

    fn jd_of_year(year: i32) -> JulianDate {
        JulianDate::new(julian_day_from_date(year, 1, 1, 0, 0, 0.0))
    }

    #[test]
    fn lunar_term_is_additive() {
        let jd = jd_of_year(1000);
        for &alg in DeltaTAlgorithm::ALL {
            let engine = DeltaTEngine::new(alg);
            let total = engine.compute_delta_t(jd);
            let raw = engine.raw_delta_t(jd);
            if alg.dont_use_moon() {
                assert_eq!(total, raw, "{alg}");
            } else {
                let expected = raw + engine.lunar_secular_correction(jd, engine.ndot());
                assert!((total - expected).abs() < Seconds::new(1e-9), "{alg}");
            }
        }
    }

    #[test]
    fn unknown_key_falls_back_to_no_correction() {
        let mut engine = DeltaTEngine::default();
        let err = engine.set_algorithm_key("not-a-real-key").unwrap_err();
        assert!(matches!(err, Error::UnknownDeltaTAlgorithm(_)));
        assert_eq!(engine.algorithm(), DeltaTAlgorithm::WithoutCorrection);
        for year in [-3000, 0, 1820, 2024, 5000] {
            assert_eq!(engine.compute_delta_t(jd_of_year(year)), Seconds::new(0.0));
        }
    }

    #[test]
    fn custom_parameters_are_independent() {
        let mut engine = DeltaTEngine::new(DeltaTAlgorithm::Custom);
        engine.set_custom_coefficients([10.0, 0.0, 0.0]);
        engine.set_custom_ndot(-23.8946);
        let jd = jd_of_year(1500);
        assert!((engine.raw_delta_t(jd) - Seconds::new(10.0)).abs() < Seconds::new(1e-12));

        engine.set_custom_coefficients([0.0, 100.0, 0.0]);
        engine.set_custom_year(1400.0);
        let dt = engine.raw_delta_t(jd).value();
        assert!((dt - 100.0).abs() < 0.5, "dt = {dt}");
        assert_eq!(engine.custom_year(), 1400.0);
        assert_eq!(engine.ndot(), -23.8946);
    }

    #[test]
    fn de43x_changes_the_correction_inside_coverage_only() {
        let mut engine = DeltaTEngine::new(DeltaTAlgorithm::EspenakMeeus);
        let jd = jd_of_year(1700);
        let before = engine.compute_delta_t(jd);
        engine.set_de430_active(true);
        assert!(engine.uses_de43x(jd));
        assert!(engine.compute_delta_t(jd) != before);

        let far = jd_of_year(-3000);
        assert!(!engine.uses_de43x(far));
        engine.set_de431_active(true);
        assert!(engine.uses_de43x(far));
    }

    #[test]
    fn axis_crossing_roundtrip() {
        let engine = DeltaTEngine::new(DeltaTAlgorithm::EspenakMeeus);
        let jd = JulianDate::new(2_460_000.5);
        let jde = engine.jde_from_jd(jd);
        let back = engine.jd_from_jde(jde);
        // ΔT changes by well under a millisecond over one minute.
        assert!((back - jd).abs().value() < 1e-8);
    }

    #[test]
    fn range_marker() {
        let engine = DeltaTEngine::new(DeltaTAlgorithm::MeeusSimons);
        assert_eq!(engine.valid_range_marker(jd_of_year(1900)), "");
        assert_eq!(engine.valid_range_marker(jd_of_year(2020)), "*");
        let engine = DeltaTEngine::new(DeltaTAlgorithm::IAU);
        assert_eq!(engine.valid_range_marker(jd_of_year(1900)), "?");
        let engine = DeltaTEngine::new(DeltaTAlgorithm::WithoutCorrection);
        assert_eq!(engine.valid_range_marker(jd_of_year(1900)), "");
    }

    #[test]
    fn description_mentions_range_and_ndot() {
        let engine = DeltaTEngine::default();
        let text = engine.description();
        assert!(text.contains("Espenak & Meeus"));
        assert!(text.contains("-1999"));
        assert!(text.contains("-25.8580"));
        let text = DeltaTEngine::new(DeltaTAlgorithm::EspenakMeeusZeroMoonAccel).description();
        assert!(text.contains("Experimental"));
    }

    #[test]
    fn standard_error_only_for_historical_years() {
        assert!(standard_error(jd_of_year(500)).is_some());
        assert!(standard_error(jd_of_year(2000)).is_none());
    }
}
