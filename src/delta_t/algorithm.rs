// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The closed set of ΔT models and their per-model metadata.

use std::fmt;
use std::str::FromStr;

use super::models;
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a model's value means outside its published range of validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfRangePolicy {
    /// Values keep extrapolating but carry no physical meaning.
    Meaningless,
    /// The model returns exactly zero.
    Zero,
    /// The model keeps using the segment of its nearest border year.
    EdgeValue,
}

macro_rules! delta_t_algorithms {
    ($($variant:ident => $key:literal),+ $(,)?) => {
        /// One of the published ΔT approximations.
        ///
        /// The string key of each variant is the one stored in the settings
        /// file, e.g. `"EspenakMeeus"`.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum DeltaTAlgorithm {
            $($variant,)+
        }

        impl DeltaTAlgorithm {
            /// Every model, in menu order.
            pub const ALL: &'static [DeltaTAlgorithm] = &[$(DeltaTAlgorithm::$variant,)+];

            /// Settings key of this model.
            pub const fn key(self) -> &'static str {
                match self {
                    $(DeltaTAlgorithm::$variant => $key,)+
                }
            }

            /// Resolves a settings key. Matching is exact.
            pub fn from_key(key: &str) -> Result<Self> {
                match key {
                    $($key => Ok(DeltaTAlgorithm::$variant),)+
                    other => Err(Error::UnknownDeltaTAlgorithm(other.to_owned())),
                }
            }
        }
    };
}

delta_t_algorithms! {
    WithoutCorrection => "WithoutCorrection",
    Schoch => "Schoch",
    Clemence => "Clemence",
    IAU => "IAU",
    AstronomicalEphemeris => "AstronomicalEphemeris",
    TuckermanGoldstine => "TuckermanGoldstine",
    MullerStephenson => "MullerStephenson",
    Stephenson1978 => "Stephenson1978",
    SchmadelZech1979 => "SchmadelZech1979",
    MorrisonStephenson1982 => "MorrisonStephenson1982",
    StephensonMorrison1984 => "StephensonMorrison1984",
    StephensonHoulden => "StephensonHoulden",
    Espenak => "Espenak",
    Borkowski => "Borkowski",
    SchmadelZech1988 => "SchmadelZech1988",
    ChaprontTouze => "ChaprontTouze",
    StephensonMorrison1995 => "StephensonMorrison1995",
    Stephenson1997 => "Stephenson1997",
    ChaprontMeeus => "ChaprontMeeus",
    JPLHorizons => "JPLHorizons",
    MeeusSimons => "MeeusSimons",
    MontenbruckPfleger => "MontenbruckPfleger",
    ReingoldDershowitz => "ReingoldDershowitz",
    MorrisonStephenson2004 => "MorrisonStephenson2004",
    Reijs => "Reijs",
    EspenakMeeus => "EspenakMeeus",
    EspenakMeeusZeroMoonAccel => "EspenakMeeusZeroMoonAccel",
    Banjevic => "Banjevic",
    IslamSadiqQureshi => "IslamSadiqQureshi",
    KhalidSultanaZaidi => "KhalidSultanaZaidi",
    StephensonMorrisonHohenkerk2016 => "StephensonMorrisonHohenkerk2016",
    Custom => "Custom",
}

impl DeltaTAlgorithm {
    /// Fallback used when a configured key cannot be resolved.
    pub const FALLBACK: Self = Self::WithoutCorrection;

    /// Secular acceleration of the Moon (″/cy²) the model was fitted with.
    ///
    /// For [`Custom`](Self::Custom) this is the default; the engine carries
    /// the user value.
    pub const fn ndot(self) -> f64 {
        use DeltaTAlgorithm::*;
        match self {
            WithoutCorrection => -26.0,
            Schoch => -29.68,
            Clemence | IAU | AstronomicalEphemeris | TuckermanGoldstine => -22.44,
            MullerStephenson => -37.5,
            Stephenson1978 => -30.0,
            SchmadelZech1979 | Espenak | ChaprontTouze | ReingoldDershowitz => -23.8946,
            Borkowski => -23.895,
            ChaprontMeeus | JPLHorizons | MeeusSimons => -25.7376,
            MontenbruckPfleger => -25.8,
            EspenakMeeus | EspenakMeeusZeroMoonAccel => -25.858,
            StephensonMorrisonHohenkerk2016 => -25.82,
            MorrisonStephenson1982
            | StephensonMorrison1984
            | StephensonHoulden
            | SchmadelZech1988
            | StephensonMorrison1995
            | Stephenson1997
            | MorrisonStephenson2004
            | Reijs
            | Banjevic
            | IslamSadiqQureshi
            | KhalidSultanaZaidi
            | Custom => -26.0,
        }
    }

    /// `true` when the published formula already accounts for the lunar
    /// acceleration, so no secular correction is added.
    pub const fn dont_use_moon(self) -> bool {
        use DeltaTAlgorithm::*;
        matches!(
            self,
            WithoutCorrection
                | MontenbruckPfleger
                | ReingoldDershowitz
                | EspenakMeeusZeroMoonAccel
                | IslamSadiqQureshi
                | KhalidSultanaZaidi
                | StephensonMorrisonHohenkerk2016
        )
    }

    /// Published range of validity in years, `None` when unknown.
    pub const fn valid_range(self) -> Option<(i32, i32)> {
        use DeltaTAlgorithm::*;
        match self {
            WithoutCorrection | Schoch | IAU | AstronomicalEphemeris | Stephenson1978
            | Custom => None,
            Clemence => Some((1681, 1900)),
            TuckermanGoldstine => Some((-600, 1649)),
            MullerStephenson => Some((-1375, 1975)),
            SchmadelZech1979 => Some((1650, 1978)),
            MorrisonStephenson1982 => Some((-4000, 2500)),
            StephensonMorrison1984 => Some((-391, 1600)),
            StephensonHoulden => Some((-600, 1650)),
            Espenak => Some((1950, 2100)),
            Borkowski => Some((-2136, 1715)),
            SchmadelZech1988 => Some((1800, 1988)),
            ChaprontTouze => Some((-4000, 8000)),
            StephensonMorrison1995 => Some((-700, 1600)),
            Stephenson1997 => Some((-500, 1600)),
            ChaprontMeeus => Some((-400, 2150)),
            JPLHorizons => Some((-2999, 1620)),
            MeeusSimons => Some((1620, 2000)),
            MontenbruckPfleger => Some((1825, 2005)),
            ReingoldDershowitz => Some((-1999, 3000)),
            MorrisonStephenson2004 => Some((-1000, 2000)),
            Reijs => Some((-1500, 1100)),
            EspenakMeeus | EspenakMeeusZeroMoonAccel => Some((-1999, 3000)),
            Banjevic => Some((-2020, 1620)),
            IslamSadiqQureshi => Some((1620, 2007)),
            KhalidSultanaZaidi => Some((1620, 2013)),
            StephensonMorrisonHohenkerk2016 => Some((-720, 2019)),
        }
    }

    /// Behaviour of the formula outside [`valid_range`](Self::valid_range).
    pub const fn out_of_range_policy(self) -> OutOfRangePolicy {
        use DeltaTAlgorithm::*;
        match self {
            MeeusSimons | MontenbruckPfleger => OutOfRangePolicy::Zero,
            StephensonMorrison1984 | JPLHorizons | SchmadelZech1979 | SchmadelZech1988
            | Banjevic | IslamSadiqQureshi | KhalidSultanaZaidi => OutOfRangePolicy::EdgeValue,
            _ => OutOfRangePolicy::Meaningless,
        }
    }

    /// Attribution text shown to the user.
    pub const fn attribution(self) -> &'static str {
        use DeltaTAlgorithm::*;
        match self {
            WithoutCorrection => "No ΔT correction: dynamical time equals universal time.",
            Schoch => "Schoch (1931). Used in Ahnert's Kalender für Sternfreunde and in Astronomical Ephemeris tables before 1960.",
            Clemence => "Clemence (1948). Based on lunar observations since 1681.",
            IAU => "IAU (1952), with the Spencer Jones (1939) lunar fluctuation term between 1681 and 1936.",
            AstronomicalEphemeris => "Astronomical Ephemeris (1960), as used by Mucke & Meeus, Canon of Solar Eclipses (1983).",
            TuckermanGoldstine => "Tuckerman (1962, 1964) and Goldstine (1973), for their planetary and lunar tables.",
            MullerStephenson => "Muller & Stephenson (1975), from ancient and medieval eclipse records.",
            Stephenson1978 => "Stephenson (1978), from records of ancient eclipses.",
            SchmadelZech1979 => "Schmadel & Zech (1979), polynomial fit to the Brouwer (1952) and Morrison (1979) data.",
            MorrisonStephenson1982 => "Morrison & Stephenson (1982), used by RedShift.",
            StephensonMorrison1984 => "Stephenson & Morrison (1984), from ancient and medieval eclipse and occultation records.",
            StephensonHoulden => "Stephenson & Houlden (1986), Atlas of Historical Eclipse Maps.",
            Espenak => "Espenak (1987, 1989), Fifty Year Canon of Solar Eclipses.",
            Borkowski => "Borkowski (1988), from ancient eclipse records with ELP2000-85.",
            SchmadelZech1988 => "Schmadel & Zech (1988), polynomial fit to data from 1800 to 1988.",
            ChaprontTouze => "Chapront-Touzé & Chapront (1991), Lunar Tables and Programs.",
            StephensonMorrison1995 => "Stephenson & Morrison (1995), from historical eclipse records.",
            Stephenson1997 => "Stephenson (1997), Historical Eclipses and Earth's Rotation.",
            ChaprontMeeus => "Chapront, Chapront-Touzé & Francou (1997) and Meeus (1998), with the biennial Meeus table for 1620 to 2000.",
            JPLHorizons => "JPL Horizons ephemeris service.",
            MeeusSimons => "Meeus & Simons (2000), polynomials for 1620 to 2000.",
            MontenbruckPfleger => "Montenbruck & Pfleger (2000), Astronomy on the Personal Computer.",
            ReingoldDershowitz => "Reingold & Dershowitz, Calendrical Calculations (2018).",
            MorrisonStephenson2004 => "Morrison & Stephenson (2004, 2005), historical values of the Earth's clock error.",
            Reijs => "Reijs (2006), parabola with a long-period oscillation.",
            EspenakMeeus => "Espenak & Meeus (2006), Five Millennium Canon of Solar Eclipses. Default model.",
            EspenakMeeusZeroMoonAccel => "Espenak & Meeus (2006) without the lunar acceleration correction. Experimental: the lunar term of this variant is suspected to be wrong.",
            Banjevic => "Banjevic (2006), from historical eclipse records.",
            IslamSadiqQureshi => "Islam, Sadiq & Qureshi (2008, revised 2013), polynomials for 1620 to 2007.",
            KhalidSultanaZaidi => "Khalid, Sultana & Zaidi (2014), polynomials for 1620 to 2013.",
            StephensonMorrisonHohenkerk2016 => "Stephenson, Morrison & Hohenkerk (2016), cubic spline over −720 to 2016.",
            Custom => "User-defined quadratic ΔT = c0 + c1·u + c2·u², u in centuries from the reference year.",
        }
    }

    /// Raw formula, or `None` for [`Custom`](Self::Custom) whose parameters
    /// live in the engine.
    pub(crate) fn formula(self) -> Option<fn(f64) -> f64> {
        use DeltaTAlgorithm::*;
        let f: fn(f64) -> f64 = match self {
            WithoutCorrection => models::without_correction,
            Schoch => models::schoch,
            Clemence => models::clemence,
            IAU => models::iau,
            AstronomicalEphemeris => models::astronomical_ephemeris,
            TuckermanGoldstine | StephensonHoulden => models::tuckerman_goldstine,
            MullerStephenson => models::muller_stephenson,
            Stephenson1978 => models::stephenson_1978,
            SchmadelZech1979 => models::schmadel_zech_1979,
            MorrisonStephenson1982 => models::morrison_stephenson_1982,
            StephensonMorrison1984 => models::stephenson_morrison_1984,
            Espenak => models::espenak,
            Borkowski => models::borkowski,
            SchmadelZech1988 => models::schmadel_zech_1988,
            ChaprontTouze => models::chapront_touze,
            StephensonMorrison1995 => models::stephenson_morrison_1995,
            Stephenson1997 => models::stephenson_1997,
            ChaprontMeeus => models::chapront_meeus,
            JPLHorizons => models::jpl_horizons,
            MeeusSimons => models::meeus_simons,
            MontenbruckPfleger => models::montenbruck_pfleger,
            ReingoldDershowitz => models::reingold_dershowitz,
            MorrisonStephenson2004 => models::morrison_stephenson_2004,
            Reijs => models::reijs,
            EspenakMeeus | EspenakMeeusZeroMoonAccel => models::espenak_meeus,
            Banjevic => models::banjevic,
            IslamSadiqQureshi => models::islam_sadiq_qureshi,
            KhalidSultanaZaidi => models::khalid_sultana_zaidi,
            StephensonMorrisonHohenkerk2016 => models::stephenson_morrison_hohenkerk_2016,
            Custom => return None,
        };
        Some(f)
    }
}

impl Default for DeltaTAlgorithm {
    fn default() -> Self {
        Self::EspenakMeeus
    }
}

impl fmt::Display for DeltaTAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DeltaTAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_roundtrip() {
        for &alg in DeltaTAlgorithm::ALL {
            assert_eq!(DeltaTAlgorithm::from_key(alg.key()).expect("known key"), alg);
            assert_eq!(alg.to_string().parse::<DeltaTAlgorithm>().expect("parse"), alg);
        }
        assert_eq!(DeltaTAlgorithm::ALL.len(), 32);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = DeltaTAlgorithm::from_key("not-a-real-key").unwrap_err();
        assert!(matches!(err, Error::UnknownDeltaTAlgorithm(ref k) if k == "not-a-real-key"));
        assert!(DeltaTAlgorithm::from_key("espenakmeeus").is_err());
    }

    #[test]
    fn only_custom_lacks_a_formula() {
        for &alg in DeltaTAlgorithm::ALL {
            assert_eq!(alg.formula().is_none(), alg == DeltaTAlgorithm::Custom, "{alg}");
        }
    }

    #[test]
    fn metadata_is_per_model() {
        assert_eq!(DeltaTAlgorithm::default(), DeltaTAlgorithm::EspenakMeeus);
        assert_eq!(DeltaTAlgorithm::EspenakMeeus.ndot(), -25.858);
        assert!(!DeltaTAlgorithm::EspenakMeeus.dont_use_moon());
        assert!(DeltaTAlgorithm::EspenakMeeusZeroMoonAccel.dont_use_moon());
        assert!(DeltaTAlgorithm::WithoutCorrection.dont_use_moon());
        assert_eq!(
            DeltaTAlgorithm::MeeusSimons.out_of_range_policy(),
            OutOfRangePolicy::Zero
        );
        assert_eq!(
            DeltaTAlgorithm::KhalidSultanaZaidi.out_of_range_policy(),
            OutOfRangePolicy::EdgeValue
        );
        assert_eq!(
            DeltaTAlgorithm::StephensonMorrison1984.out_of_range_policy(),
            OutOfRangePolicy::EdgeValue
        );
        assert_eq!(
            DeltaTAlgorithm::JPLHorizons.out_of_range_policy(),
            OutOfRangePolicy::EdgeValue
        );
        assert_eq!(DeltaTAlgorithm::IAU.valid_range(), None);
        assert_eq!(DeltaTAlgorithm::Clemence.valid_range(), Some((1681, 1900)));
    }
}
