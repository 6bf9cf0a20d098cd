// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Raw ΔT formulas, one per published model.
//!
//! Every function maps a Julian Day (UT) to ΔT in seconds **without** the
//! lunar secular-acceleration correction; [`DeltaTEngine`](super::DeltaTEngine)
//! adds that term where the model asks for it. Epoch comments give the
//! calendar instant of each reference Julian Day.

use super::moon_fluctuation as fluct_table;
use super::tables::{MEEUS_BIENNIAL, SMH2016_SPLINE};
use crate::calendar::{
    date_from_julian_day, fixed_from_gregorian, julian_day_from_date, year_fraction,
};

const DAYS_PER_CENTURY: f64 = 36_525.0;

/// 1900-01-00.5
const JD_1900: f64 = 2_415_020.0;
/// 2000-01-01.5
const JD_2000: f64 = 2_451_545.0;
/// 1820-01-00.5
const JD_1820: f64 = 2_385_800.0;
/// 1800-01-00.5
const JD_1800: f64 = 2_378_496.0;

#[inline]
fn centuries_since(jd: f64, epoch: f64) -> f64 {
    (jd - epoch) / DAYS_PER_CENTURY
}

#[inline]
fn decimal_year(jd: f64) -> (i32, f64) {
    let (year, month, day) = date_from_julian_day(jd);
    (year, year_fraction(year, month, f64::from(day)))
}

/// Long-term parabola shared by several models: `-20 + 32·((y - 1820)/100)²`.
#[inline]
fn long_term_parabola(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Espenak & Meeus −500..500 polynomial, `u` in centuries from year 0.
#[inline]
fn espenak_meeus_ancient(u: f64) -> f64 {
    (((((0.009_031_652_1 * u + 0.022_174_192) * u - 0.179_845_2) * u - 5.952_053) * u
        + 33.783_11)
        * u
        - 1_014.41)
        * u
        + 10_583.6
}

/// Espenak & Meeus 500..1600 polynomial, `u` in centuries from year 1000.
#[inline]
fn espenak_meeus_medieval(u: f64) -> f64 {
    (((((0.008_357_207_3 * u - 0.005_050_998) * u - 0.850_346_3) * u + 0.319_781) * u
        + 71.234_72)
        * u
        - 556.01)
        * u
        + 1_574.2
}

pub(super) fn without_correction(_jd: f64) -> f64 {
    0.0
}

/// Espenak & Meeus (2006), NASA *Five Millennium Canon of Solar Eclipses*.
pub(super) fn espenak_meeus(jd: f64) -> f64 {
    let (_, y) = decimal_year(jd);

    if y < -500.0 {
        long_term_parabola(y)
    } else if y < 500.0 {
        espenak_meeus_ancient(y / 100.0)
    } else if y < 1600.0 {
        espenak_meeus_medieval((y - 1000.0) / 100.0)
    } else if y < 1700.0 {
        let t = y - 1600.0;
        ((t / 7_129.0 - 0.015_32) * t - 0.980_8) * t + 120.0
    } else if y < 1800.0 {
        let t = y - 1700.0;
        (((-t / 1_174_000.0 + 0.000_133_36) * t - 0.005_928_5) * t + 0.160_3) * t + 8.83
    } else if y < 1860.0 {
        let t = y - 1800.0;
        ((((((0.000_000_000_875 * t - 0.000_000_169_9) * t + 0.000_012_127_2) * t
            - 0.000_374_36)
            * t
            + 0.004_111_6)
            * t
            + 0.006_861_2)
            * t
            - 0.332_447)
            * t
            + 13.72
    } else if y < 1900.0 {
        let t = y - 1860.0;
        ((((t / 233_174.0 - 0.000_447_362_4) * t + 0.016_806_68) * t - 0.251_754) * t
            + 0.573_7)
            * t
            + 7.62
    } else if y < 1920.0 {
        let t = y - 1900.0;
        (((-0.000_197 * t + 0.006_196_6) * t - 0.059_893_9) * t + 1.494_119) * t - 2.79
    } else if y < 1941.0 {
        let t = y - 1920.0;
        ((0.002_093_6 * t - 0.076_100) * t + 0.844_93) * t + 21.20
    } else if y < 1961.0 {
        let t = y - 1950.0;
        ((t / 2_547.0 - 1.0 / 233.0) * t + 0.407) * t + 29.07
    } else if y < 1986.0 {
        let t = y - 1975.0;
        ((-t / 718.0 - 1.0 / 260.0) * t + 1.067) * t + 45.45
    } else if y < 2005.0 {
        let t = y - 2000.0;
        ((((0.000_023_735_99 * t + 0.000_651_814) * t + 0.001_727_5) * t - 0.060_374) * t
            + 0.334_5)
            * t
            + 63.86
    } else if y < 2050.0 {
        let t = y - 2000.0;
        (0.005_589 * t + 0.322_17) * t + 62.92
    } else if y < 2150.0 {
        long_term_parabola(y) - 0.562_8 * (2150.0 - y)
    } else {
        long_term_parabola(y)
    }
}

/// Schoch (1931).
pub(super) fn schoch(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_1800);
    -36.28 + 36.28 * u * u
}

/// Clemence (1948).
pub(super) fn clemence(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_1900);
    8.72 + 26.75 * u + 11.22 * u * u
}

/// IAU (1952), with the tabulated lunar longitude fluctuation.
pub(super) fn iau(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_1900);
    (29.950 * u + 72.318) * u + 24.349 + 1.821_44 * moon_fluctuation(jd)
}

/// Astronomical Ephemeris (1960); the fluctuation term is ignored, as in
/// Mucke & Meeus (1983).
pub(super) fn astronomical_ephemeris(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_1900);
    (29.949 * u + 72.316_5) * u + 24.349
}

/// Tuckerman (1962, 1964) & Goldstine (1973). Stephenson & Houlden (1986)
/// use the same parabola.
pub(super) fn tuckerman_goldstine(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_1900);
    (36.79 * u + 35.06) * u + 4.87
}

/// Muller & Stephenson (1975).
pub(super) fn muller_stephenson(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_1900);
    (45.78 * u + 120.38) * u + 66.0
}

/// Stephenson (1978).
pub(super) fn stephenson_1978(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_1900);
    (38.30 * u + 114.0) * u + 20.0
}

/// Stephenson (1997).
pub(super) fn stephenson_1997(jd: f64) -> f64 {
    // 1735-01-00.5
    let u = centuries_since(jd, 2_354_755.0);
    -20.0 + 35.0 * u * u
}

/// Schmadel & Zech (1979); the fit is held at its end values outside 1800–1976.
pub(super) fn schmadel_zech_1979(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_1900).clamp(-1.0, 0.76);
    let days = (((((((((((-0.089_491 * u - 0.117_389) * u + 0.185_489) * u + 0.247_433) * u
        - 0.159_732)
        * u
        - 0.200_097)
        * u
        + 0.075_456)
        * u
        + 0.076_929)
        * u
        - 0.020_446)
        * u
        - 0.013_867)
        * u
        + 0.003_081)
        * u
        + 0.001_233)
        * u
        - 0.000_029;
    days * 86_400.0
}

/// Schmadel & Zech (1988); held at its end values outside 1800–1989.
pub(super) fn schmadel_zech_1988(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_1900).clamp(-1.0, 0.89);
    let days = (((((((((((-0.058_091 * u - 0.067_471) * u + 0.145_932) * u + 0.161_416) * u
        - 0.149_279)
        * u
        - 0.146_960)
        * u
        + 0.079_441)
        * u
        + 0.062_971)
        * u
        - 0.022_542)
        * u
        - 0.012_462)
        * u
        + 0.003_357)
        * u
        + 0.001_148)
        * u
        - 0.000_014;
    days * 86_400.0
}

/// Morrison & Stephenson (1982).
pub(super) fn morrison_stephenson_1982(jd: f64) -> f64 {
    // 1810-01-00.5
    let u = centuries_since(jd, 2_382_148.0);
    -15.0 + 32.5 * u * u
}

/// Stephenson & Morrison (1984); zero before −391, the year is held at 1600 after.
pub(super) fn stephenson_morrison_1984(jd: f64) -> f64 {
    let (year, month, day) = date_from_julian_day(jd);
    let year = year.clamp(-391, 1600);
    let u = (year_fraction(year, month, f64::from(day)) - 1800.0) / 100.0;

    if -391 < year && year <= 948 {
        (44.3 * u + 320.0) * u + 1_360.0
    } else if 948 < year && year <= 1600 {
        25.5 * u * u
    } else {
        0.0
    }
}

/// Stephenson & Morrison (1995).
pub(super) fn stephenson_morrison_1995(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_1820);
    -20.0 + 31.0 * u * u
}

/// Espenak (1987, 1989).
pub(super) fn espenak(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_2000);
    (64.3 * u + 61.0) * u + 67.0
}

/// Borkowski (1988).
pub(super) fn borkowski(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_2000) + 3.75;
    40.0 + 35.0 * u * u
}

/// Chapront-Touzé & Chapront (1991); zero outside −391..1600.
pub(super) fn chapront_touze(jd: f64) -> f64 {
    let (year, _, _) = date_from_julian_day(jd);
    let year = year.clamp(-391, 1600);
    let u = centuries_since(jd, JD_2000);

    if -391 < year && year <= 948 {
        (42.4 * u + 495.0) * u + 2_177.0
    } else if 948 < year && year <= 1600 {
        (23.6 * u + 100.0) * u + 102.0
    } else {
        0.0
    }
}

/// JPL Horizons; zero before −2999, the 948..1620 polynomial after 1620.
pub(super) fn jpl_horizons(jd: f64) -> f64 {
    let (year, _, _) = date_from_julian_day(jd);
    let year = year.clamp(-2999, 1620);

    if -2999 < year && year < 948 {
        let u = centuries_since(jd, JD_1820);
        31.0 * u * u
    } else if 948 < year && year <= 1620 {
        let u = centuries_since(jd, JD_2000);
        (22.5 * u + 67.5) * u + 50.6
    } else {
        0.0
    }
}

/// Morrison & Stephenson (2004, 2005).
pub(super) fn morrison_stephenson_2004(jd: f64) -> f64 {
    let u = centuries_since(jd, JD_1820);
    -20.0 + 32.0 * u * u
}

/// Reijs (2006): a parabola modulated by a 1443-year oscillation.
pub(super) fn reijs(jd: f64) -> f64 {
    use std::f64::consts::TAU;
    let offset_years = (JD_1820 - jd) / 365.25;
    ((1.8 * offset_years * offset_years / 200.0
        + 1_443.0 * 3.76 / TAU * ((TAU * offset_years / 1_443.0).cos() - 1.0))
        * 365.25)
        / 1_000.0
}

/// Chapront, Chapront-Touzé & Francou (1997) outside 1620–2000, Meeus'
/// biennial table inside.
pub(super) fn chapront_meeus(jd: f64) -> f64 {
    let (year, month, day) = date_from_julian_day(jd);
    let u = centuries_since(jd, JD_2000);

    if year < 948 {
        (44.1 * u + 497.0) * u + 2_177.0
    } else if year < 1620 {
        (25.3 * u + 102.0) * u + 102.0
    } else if year < 2000 {
        let yeardec = year_fraction(year, month, f64::from(day));
        let pos = ((year - 1620) / 2) as usize;
        let here = f64::from(MEEUS_BIENNIAL[pos]);
        let next = f64::from(MEEUS_BIENNIAL[pos + 1]);
        let start = f64::from(2 * pos as i32 + 1620);
        (here + (yeardec - start) * 0.5 * (next - here)) / 10.0
    } else if year < 2100 {
        (25.3 * u + 102.0) * u + 102.0 + 0.37 * f64::from(year - 2100)
    } else {
        (25.3 * u + 102.0) * u + 102.0
    }
}

/// Montenbruck & Pfleger (2000); zero outside 1825–2005.
///
/// The segments do not join continuously.
pub(super) fn montenbruck_pfleger(jd: f64) -> f64 {
    // (end JD, shift added to T, cubic coefficients from t³ down to t⁰)
    #[rustfmt::skip]
    const SEGMENTS: [(f64, f64, [f64; 4]); 8] = [
        (2_396_758.5, 1.75, [ -572.3,  413.9,  -80.8, 10.4]), // 1850
        (2_405_889.5, 1.50, [   18.8, -358.4,   46.3,  6.6]), // 1875
        (2_415_020.5, 1.25, [  867.4, -166.2,  -10.8, -3.9]), // 1900
        (2_424_151.5, 1.00, [-1467.4,  327.5,  114.1, -2.6]), // 1925
        (2_433_282.5, 0.75, [  483.4,   -8.2,   -6.3, 24.2]), // 1950
        (2_442_413.5, 0.50, [  550.7,   -3.8,   32.5, 29.3]), // 1975
        (2_451_545.5, 0.25, [ 1516.7, -570.5,  130.5, 45.3]), // 2000
        (2_453_736.5, 0.50, [ 1516.7, -570.5,  130.5, 45.3]), // 2006, extrapolated
    ];
    const START: f64 = 2_387_627.5; // 1825-01-01

    if jd < START {
        return 0.0;
    }
    let big_t = centuries_since(jd, JD_2000);
    SEGMENTS
        .iter()
        .find(|(end, _, _)| jd < *end)
        .map_or(0.0, |&(_, shift, [a, b, c, d])| {
            let t = big_t + shift;
            ((a * t + b) * t + c) * t + d
        })
}

/// Meeus & Simons (2000); zero outside 1620–2000.
pub(super) fn meeus_simons(jd: f64) -> f64 {
    // (first year past the segment, shift, quartic coefficients u⁴..u⁰)
    #[rustfmt::skip]
    const SEGMENTS: [(i32, f64, [f64; 5]); 8] = [
        (1690, 3.45, [ 1244.0, -454.0,   50.0, -107.0, 40.3]),
        (1770, 2.70, [   70.0,  -16.0,   -1.0,   11.3, 10.2]),
        (1820, 2.05, [    6.0,  173.0,  -22.0,  -18.8, 14.7]),
        (1870, 1.55, [-1654.0, -534.0,  111.0,   12.7,  5.7]),
        (1900, 1.15, [ 8234.0,  101.0,   27.0,  -14.6, -5.8]),
        (1940, 0.80, [ 4441.0,   19.0, -443.0,   67.0, 21.4]),
        (1990, 0.35, [-1883.0, -140.0,  189.0,   74.0, 36.2]),
        (2001, 0.05, [    0.0, -5034.0, -188.0,  82.0, 60.8]),
    ];

    let (year, _, _) = date_from_julian_day(jd);
    if year < 1620 {
        return 0.0;
    }
    let ub = centuries_since(jd, JD_2000);
    SEGMENTS
        .iter()
        .find(|(end, _, _)| year < *end)
        .map_or(0.0, |&(_, shift, [a4, a3, a2, a1, a0])| {
            let u = ub + shift;
            (((a4 * u + a3) * u + a2) * u + a1) * u + a0
        })
}

/// Reingold & Dershowitz, *Calendrical Calculations* (2018 edition).
///
/// Driven by the integer year only.
pub(super) fn reingold_dershowitz(jd: f64) -> f64 {
    let (year, _, _) = date_from_julian_day(jd);

    match year {
        2051..=2150 => {
            long_term_parabola(f64::from(year)) + 0.562_8 * f64::from(2150 - year)
        }
        1987..=2050 => {
            let y = f64::from(year - 2000);
            if year >= 2006 {
                (0.005_589 * y + 0.322_17) * y + 62.92
            } else {
                ((((0.000_023_735_99 * y + 0.000_651_814) * y + 0.001_727_5) * y - 0.060_374)
                    * y
                    + 0.334_5)
                    * y
                    + 63.86
            }
        }
        1800..=1986 => {
            let c = (fixed_from_gregorian(1900, 1, 1) - fixed_from_gregorian(year, 7, 1)) as f64
                / DAYS_PER_CENTURY;
            let days = if year >= 1900 {
                ((((((-0.212_591 * c + 0.677_066) * c - 0.861_938) * c + 0.553_040) * c
                    - 0.181_133)
                    * c
                    + 0.025_184)
                    * c
                    + 0.000_297)
                    * c
                    - 0.000_02
            } else {
                (((((((((2.043_794 * c + 11.636_204) * c + 28.316_289) * c + 38.291_999) * c
                    + 31.332_267)
                    * c
                    + 15.845_535)
                    * c
                    + 4.867_575)
                    * c
                    + 0.865_736)
                    * c
                    + 0.083_563)
                    * c
                    + 0.003_844)
                    * c
                    - 0.000_009
            };
            days * 86_400.0
        }
        1700..=1799 => {
            let y = f64::from(year - 1700);
            ((-0.000_026_648_4 * y + 0.003_336_121) * y - 0.005_092_142) * y + 8.118_780_842
        }
        1600..=1699 => {
            let y = f64::from(year - 1600);
            ((0.000_140_272_128 * y - 0.015_32) * y - 0.980_8) * y + 120.0
        }
        500..=1599 => espenak_meeus_medieval(f64::from(year - 1000) / 100.0),
        -499..=499 => espenak_meeus_ancient(f64::from(year) / 100.0),
        _ => long_term_parabola(f64::from(year)),
    }
}

/// Banjevic (2006); held at the edge values outside −2020..1620.
pub(super) fn banjevic(jd: f64) -> f64 {
    let (year, _, _) = date_from_julian_day(jd);
    let (u, c) = if year.clamp(-2020, 1620) <= -700 {
        (centuries_since(jd, JD_1800), 30.86)
    } else {
        (centuries_since(jd, JD_1820), 31.0)
    };
    c * u * u
}

/// Islam, Sadiq & Qureshi (2008, revised 2013); held at the edge values
/// outside 1620–2007.
pub(super) fn islam_sadiq_qureshi(jd: f64) -> f64 {
    // 2007-01-00.5
    const EPOCH: f64 = 2_454_101.0;
    #[rustfmt::skip]
    const SEGMENTS: [(i32, f64, [f64; 5]); 6] = [
        (1698,     3.480, [ 1162.805,  -273.116,  14.523, -105.262,  38.067]),
        (1806,     2.545, [  -71.724,   -39.048,   7.591,   13.893,  13.759]),
        (1872,     1.675, [-1612.55,   -157.977, 161.524,   -3.654,   5.859]),
        (1906,     1.175, [ 6250.501,  1006.463, 139.921,   -2.732,  -6.203]),
        (1953,     0.770, [ -390.785,   901.514, -88.044,    8.997,  24.006]),
        (i32::MAX, 0.265, [ 1314.759,  -296.018, -101.898,  88.659,  49.997]),
    ];

    let (year, _, _) = date_from_julian_day(jd);
    let reference = if year < 1620 {
        julian_day_from_date(1620, 1, 1, 0, 0, 0.0)
    } else if year > 2007 {
        julian_day_from_date(2008, 1, 1, 0, 0, 0.0)
    } else {
        jd
    };
    let ub = centuries_since(reference, EPOCH);

    SEGMENTS
        .iter()
        .find(|(last, _, _)| year <= *last)
        .map_or(0.0, |&(_, shift, [a4, a3, a2, a1, a0])| {
            let u = shift + ub;
            (((a4 * u + a3) * u + a2) * u + a1) * u + a0
        })
}

/// Khalid, Sultana & Zaidi (2014); held at the edge values outside 1620–2013.
pub(super) fn khalid_sultana_zaidi(jd: f64) -> f64 {
    const LAST_YEAR: [i32; 8] = [1672, 1729, 1797, 1843, 1877, 1904, 1945, 1989];
    const K: [f64; 9] = [3.670, 3.120, 2.495, 1.925, 1.525, 1.220, 0.880, 0.455, 0.115];
    #[rustfmt::skip]
    const A: [[f64; 5]; 9] = [
        // a0,      a1,        a2,        a3,         a4
        [ 76.541, -253.532,  695.901, -1256.982,  627.152],
        [ 10.872,  -40.744,  236.890,  -351.537,   36.612],
        [ 13.480,   13.075,    8.635,    -3.307, -128.294],
        [ 12.584,    1.929,   60.896, -1432.216, 3129.071],
        [  6.364,   11.004,  407.776, -4168.394, 7561.686],
        [ -5.058,   -1.701,  -46.403,  -866.171, 5917.585],
        [ 13.392,  128.592, -279.165, -1282.050, 4039.490],
        [ 30.782,   34.348,   46.452,  1295.550, -3210.913],
        [ 55.281,   91.248,   87.202, -3092.565, 8255.422],
    ];

    let (year, _, _) = date_from_julian_day(jd);
    let year = year.clamp(1620, 2013);
    let i = LAST_YEAR
        .iter()
        .position(|&last| year <= last)
        .unwrap_or(LAST_YEAR.len());

    let [a0, a1, a2, a3, a4] = A[i];
    let u = K[i] + f64::from(year - 2000) / 100.0;
    (((a4 * u + a3) * u + a2) * u + a1) * u + a0
}

/// Stephenson, Morrison & Hohenkerk (2016) cubic spline, with their
/// long-term parabola outside −720..2016.
pub(super) fn stephenson_morrison_hohenkerk_2016(jd: f64) -> f64 {
    let (_, y) = decimal_year(jd);
    if !(-720.0..=2016.0).contains(&y) {
        let f = (y - 1825.0) / 100.0;
        return -320.0 + 32.5 * f * f;
    }

    let segment = SMH2016_SPLINE
        .iter()
        .find(|s| s.to >= y)
        .unwrap_or(&SMH2016_SPLINE[SMH2016_SPLINE.len() - 1]);
    let t = (y - segment.from) / (segment.to - segment.from);
    let [a0, a1, a2, a3] = segment.coeffs;
    ((a3 * t + a2) * t + a1) * t + a0
}

/// User-defined quadratic `c0 + u·(c1 + u·c2)`, `u = (year - reference)/100`.
pub(super) fn custom(jd: f64, coefficients: [f64; 3], reference_year: f64) -> f64 {
    let (_, y) = decimal_year(jd);
    let u = (y - reference_year) / 100.0;
    let [c0, c1, c2] = coefficients;
    c0 + u * (c1 + u * c2)
}

// ── Correction terms ──────────────────────────────────────────────────────

/// Lunar longitude fluctuation (seconds) from the Spencer Jones table;
/// zero outside 1681.0–1936.5.
pub fn moon_fluctuation(jd: f64) -> f64 {
    let (_, t) = decimal_year(jd);
    if !(fluct_table::FIRST_YEAR..=fluct_table::LAST_YEAR).contains(&t) {
        return 0.0;
    }
    let index = ((t - fluct_table::FIRST_YEAR) * 10.0).floor() as usize;
    let last = fluct_table::TABLE.len() - 1;
    fluct_table::TABLE[index.min(last)] * fluct_table::SCALE
}

/// ṅ of the ELP2000-82B lunar theory (″/cy²).
pub(super) const NDOT_ELP2000: f64 = -23.894_6;
/// ṅ of the DE430/DE431 ephemerides (″/cy²).
pub(super) const NDOT_DE43X: f64 = -25.8;

/// Secular-acceleration correction (seconds) that re-bases a model fitted
/// with lunar acceleration `ndot` onto the ephemeris in use.
pub fn lunar_secular_correction(jd: f64, ndot: f64, de43x: bool) -> f64 {
    let (_, y) = decimal_year(jd);
    let t = (y - 1955.5) / 100.0;
    let ephemeris_ndot = if de43x { NDOT_DE43X } else { NDOT_ELP2000 };
    -0.910_72 * (ephemeris_ndot + ndot.abs()) * t * t
}

/// Published 1σ uncertainty (seconds) of historical ΔT for −1000..1600.
pub fn standard_error(jd: f64) -> Option<f64> {
    let (year, _, _) = date_from_julian_day(jd);
    if (-1000..=1600).contains(&year) {
        let u = centuries_since(jd, JD_1820);
        Some(0.8 * u * u)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jd_of_year(year: i32) -> f64 {
        julian_day_from_date(year, 1, 1, 0, 0, 0.0)
    }

    fn check(model: fn(f64) -> f64, year: i32, expected: f64, tol: f64) {
        let got = model(jd_of_year(year));
        assert!(
            (got - expected).abs() <= tol,
            "year {year}: expected {expected} ± {tol}, got {got}"
        );
    }

    /// Rows of `(year, expected, tolerance)`, compared on magnitudes.
    fn check_magnitudes(model: fn(f64) -> f64, rows: &[(i32, f64, f64)]) {
        for &(year, expected, tol) in rows {
            let got = model(jd_of_year(year));
            let error = (expected.abs() - got.abs()).abs();
            assert!(
                error <= tol,
                "year {year}: expected {expected} ± {tol}, got {got}"
            );
        }
    }

    #[test]
    fn espenak_meeus_matches_nasa_table() {
        check_magnitudes(
            espenak_meeus,
            &[
                (-500, 17_190.0, 430.0),
                (-400, 15_530.0, 390.0),
                (-300, 14_080.0, 360.0),
                (-200, 12_790.0, 330.0),
                (-100, 11_640.0, 290.0),
                (0, 10_580.0, 260.0),
                (100, 9_600.0, 240.0),
                (200, 8_640.0, 210.0),
                (300, 7_680.0, 180.0),
                (400, 6_700.0, 160.0),
                (500, 5_710.0, 140.0),
                (600, 4_740.0, 120.0),
                (700, 3_810.0, 100.0),
                (800, 2_960.0, 80.0),
                (900, 2_200.0, 70.0),
                (1000, 1_570.0, 55.0),
                (1100, 1_090.0, 40.0),
                (1200, 740.0, 30.0),
                (1300, 490.0, 20.0),
                (1400, 320.0, 20.0),
                (1500, 200.0, 20.0),
                (1600, 120.0, 20.0),
                (1700, 9.0, 5.0),
                (1750, 13.0, 2.0),
                (1800, 14.0, 1.0),
                (1850, 7.0, 1.0),
                (1870, -0.1, 1.0),
                (1900, -3.0, 1.0),
                (1910, 10.8, 1.0),
                (1925, 23.6, 0.5),
                (1945, 26.8, 0.5),
                (1950, 29.0, 0.1),
                (1955, 31.1, 0.1),
                (1960, 33.2, 0.1),
                (1965, 35.7, 0.1),
                (1970, 40.2, 0.1),
                (1975, 45.5, 0.1),
                (1980, 50.5, 0.1),
                (1985, 54.3, 0.1),
                (1990, 56.9, 0.1),
                (1995, 60.8, 0.1),
                (2000, 63.8, 0.1),
                (2005, 64.7, 0.1),
                (2010, 66.6, 1.0),
                (2015, 67.6, 2.0),
                (2020, 77.2, 7.0),
                (2030, 87.9, 12.0),
                (2050, 111.6, 20.0),
                (2060, 124.6, 15.0),
                (2070, 138.5, 15.0),
                (2090, 170.3, 15.0),
                (2100, 187.3, 20.0),
            ],
        );
    }

    #[test]
    fn classic_parabolas() {
        check(borkowski, 1000, 1407.0, 1.0);
        check(borkowski, 1500, 94.8, 1.0);
        check(astronomical_ephemeris, 1000, 1799.4, 1.0);
        check(astronomical_ephemeris, 1500, 214.2, 1.0);
        check(iau, 1000, 1799.4, 1.0);
        check(iau, 1500, 214.2, 1.0);
        check(tuckerman_goldstine, 1000, 2669.4, 1.0);
    }

    #[test]
    fn chapront_meeus_table_and_formula() {
        check(chapront_meeus, 1620, 121.0, 0.9);
        check(chapront_meeus, 1950, 29.1, 0.9);
        check(chapront_meeus, 1900, -2.8, 0.9);
    }

    #[test]
    fn meeus_simons_matches_published_table() {
        let rows = [
            (1619, 0.00), // outside 1620..2000
            (1974, 44.49),
            (1975, 45.48),
            (1976, 46.46),
            (1977, 47.52),
            (1978, 48.53),
            (1979, 49.59),
            (1980, 50.54),
            (1981, 51.38),
            (1982, 52.17),
            (1983, 52.96),
            (1984, 53.79),
            (1985, 54.34),
            (1986, 54.87),
            (1987, 55.32),
            (1988, 55.82),
            (1989, 56.30),
            (1990, 56.86),
            (1991, 57.57),
            (1992, 58.31),
            (1993, 59.12),
            (1994, 59.99),
            (1995, 60.79),
            (1996, 61.63),
            (1997, 62.30),
            (1999, 64.00),
            (2001, 0.00),
        ];
        for (year, expected) in rows {
            check(meeus_simons, year, expected, 1.0);
        }
    }

    #[test]
    fn montenbruck_pfleger_matches_published_table() {
        let rows = [
            (1820, 0.00), // outside 1825..2005
            (1900, -2.72),
            (1905, 3.86),
            (1910, 10.46),
            (1915, 17.20),
            (1920, 21.16),
            (1925, 23.62),
            (1930, 24.02),
            (1935, 23.93),
            (1940, 24.33),
            (1945, 26.77),
            (1950, 29.15),
            (1955, 31.07),
            (1960, 33.15),
            (1965, 35.73),
            (1970, 40.18),
            (1975, 45.48),
            (1980, 50.54),
            (1985, 54.34),
            (1990, 56.86),
            (1995, 60.82),
            (2010, 0.00),
        ];
        for (year, expected) in rows {
            check(montenbruck_pfleger, year, expected, 1.0);
        }
    }

    #[test]
    fn khalid_sultana_zaidi_matches_published_table() {
        let rows = [
            (1620, 124.201_597, 0.570_9),
            (1672, 23.455_938, 0.570_9),
            (1673, 23.518_597, 0.598_9),
            (1729, 10.794_455, 0.598_9),
            (1730, 10.964_421, 0.595_3),
            (1797, 15.096_315, 0.595_3),
            (1798, 14.433_142, 0.464_3),
            (1843, 6.564_327, 0.464_3),
            (1844, 6.668_453, 0.589_4),
            (1877, -4.648_388, 0.589_4),
            (1878, -5.058_000, 0.541_0),
            (1904, 3.181_019, 0.541_0),
            (1905, 3.559_383, 0.549_5),
            (1945, 27.258_421, 0.549_5),
            (1946, 27.234_794, 0.427_9),
            (1989, 55.872_143, 0.427_9),
            (1990, 56.659_321, 0.247_7),
            (2013, 67.135_703, 0.247_7),
        ];
        for (year, expected, tol) in rows {
            check(khalid_sultana_zaidi, year, expected, tol);
        }
    }

    #[test]
    fn reingold_dershowitz_matches_calendrical_calculations() {
        // Fractions of a day.
        let rows = [
            (-600, 0.216_672),
            (-500, 0.199_117),
            (-400, 0.179_756),
            (0, 0.122_495),
            (400, 0.077_537),
            (500, 0.066_089),
            (1000, 0.018_220),
            (1500, 0.002_295),
            (1590, 0.001_448),
            (1600, 0.001_389),
            (1690, 0.000_115),
            (1700, 0.000_094),
            (1790, 0.000_177),
            (1850, 1.755_490),
            (1987, 0.000_640),
            (2000, 0.000_739),
            (2005, 0.000_749),
            (2006, 0.000_752),
            (2010, 0.000_772),
            (2050, 0.001_076),
            (2060, 0.002_488),
            (2100, 0.002_998),
            (2150, 0.003_802),
            (2200, 0.005_117),
        ];
        let as_days = |jd: f64| reingold_dershowitz(jd) / 86_400.0;
        for (year, expected) in rows {
            let got = as_days(jd_of_year(year));
            assert!(
                (expected - got.abs()).abs() <= 1e-5,
                "year {year}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn jpl_horizons_matches_reference_values() {
        check_magnitudes(
            jpl_horizons,
            &[
                (500, 5_401.2, 1.0),
                (600, 4_614.0, 1.0),
                (700, 3_888.6, 1.0),
                (800, 3_225.0, 1.0),
                (900, 2_623.8, 1.0),
                (1000, 1_625.4, 1.0),
                (1100, 1_265.4, 1.0),
                (1200, 950.4, 1.0),
                (1300, 680.4, 1.0),
                (1400, 455.4, 1.0),
                (1500, 275.4, 1.0),
            ],
        );
    }

    #[test]
    fn zero_outside_chapront_touze_range() {
        assert_eq!(chapront_touze(jd_of_year(-1000)), 0.0);
    }

    #[test]
    fn border_segment_models_keep_evaluating_above_range() {
        // The year is clamped to 1600, so later dates reuse the 948..1600 parabola.
        let border = stephenson_morrison_1984(jd_of_year(1600));
        assert!((border - 102.0).abs() < 0.1, "{border}");
        let later = stephenson_morrison_1984(jd_of_year(1700));
        assert!((later - border).abs() < 0.1, "{later}");
        assert_eq!(stephenson_morrison_1984(jd_of_year(-500)), 0.0);

        // Past 1620 the 948..1620 polynomial runs on with the real date.
        let jpl = jpl_horizons(jd_of_year(1900));
        assert!((jpl - 5.6).abs() < 0.05, "{jpl}");
        assert_eq!(jpl_horizons(jd_of_year(-3500)), 0.0);
    }

    #[test]
    fn edge_value_models_hold_their_borders() {
        let a = khalid_sultana_zaidi(jd_of_year(2013));
        let b = khalid_sultana_zaidi(jd_of_year(2050));
        assert_eq!(a, b);
        let a = islam_sadiq_qureshi(jd_of_year(2010));
        let b = islam_sadiq_qureshi(jd_of_year(2030));
        assert_eq!(a, b);
        let a = schmadel_zech_1988(jd_of_year(2000));
        let b = schmadel_zech_1988(jd_of_year(2100));
        assert_eq!(a, b);
    }

    #[test]
    fn modern_models_agree_near_2000() {
        for model in [
            espenak_meeus as fn(f64) -> f64,
            reingold_dershowitz,
            stephenson_morrison_hohenkerk_2016,
        ] {
            check(model, 2000, 63.8, 0.5);
        }
    }

    #[test]
    fn smh2016_uses_long_term_parabola_outside_spline() {
        let jd = jd_of_year(-1000);
        let (_, y) = decimal_year(jd);
        let f = (y - 1825.0) / 100.0;
        let expected = -320.0 + 32.5 * f * f;
        assert!((stephenson_morrison_hohenkerk_2016(jd) - expected).abs() < 1e-9);
    }

    #[test]
    fn custom_default_matches_long_term_parabola() {
        let jd = jd_of_year(1500);
        let got = custom(jd, [-20.0, 0.0, 32.0], 1820.0);
        let (_, y) = decimal_year(jd);
        assert!((got - long_term_parabola(y)).abs() < 1e-9);
    }

    #[test]
    fn standard_error_reference_values() {
        for (year, expected) in [(-1000, 636.0), (-500, 431.0), (0, 265.0), (1000, 54.0)] {
            let sigma = standard_error(jd_of_year(year)).expect("inside range");
            assert!((sigma - expected).abs() <= 1.0, "year {year}: {sigma}");
        }
        assert!(standard_error(jd_of_year(1900)).is_none());
    }

    #[test]
    fn moon_fluctuation_window() {
        assert_eq!(moon_fluctuation(jd_of_year(1600)), 0.0);
        assert_eq!(moon_fluctuation(jd_of_year(2000)), 0.0);
        let first = moon_fluctuation(julian_day_from_date(1681, 1, 1, 12, 0, 0.0));
        assert!((first - (-12.720 * 0.07)).abs() < 1e-9);
    }

    #[test]
    fn lunar_correction_vanishes_at_1955_5_and_for_matching_ndot() {
        let jd = julian_day_from_date(1955, 7, 2, 0, 0, 0.0);
        assert!(lunar_secular_correction(jd, -26.0, false).abs() < 0.01);
        let jd = jd_of_year(1000);
        assert_eq!(lunar_secular_correction(jd, NDOT_ELP2000, false), 0.0);
        assert_eq!(lunar_secular_correction(jd, NDOT_DE43X, true), 0.0);
    }
}
