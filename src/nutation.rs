// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Truncated IAU 2000B luni-solar nutation.
//!
//! Only the leading terms of IERS Conventions 2010 table 5.3b are kept,
//! which is ample for a planetarium view (error of a few mas).

use crate::precession::AS2RAD;

/// Nutation in longitude and obliquity (radians).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Nutation {
    pub delta_psi: f64,
    pub delta_epsilon: f64,
}

/// Delaunay arguments `[l, l', F, D, Ω]` in radians.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let poly = |c: [f64; 5]| (((c[4] * t + c[3]) * t + c[2]) * t + c[1]) * t + c[0];
    [
        poly([485_868.249_036, 1_717_915_923.217_8, 31.879_2, 0.051_635, -0.000_244_70]),
        poly([1_287_104.793_05, 129_596_581.048_1, -0.553_2, 0.000_136, -0.000_011_49]),
        poly([335_779.526_232, 1_739_527_262.847_8, -12.751_2, -0.001_037, 0.000_004_17]),
        poly([1_072_260.703_69, 1_602_961_601.209_0, -6.370_6, 0.006_593, -0.000_031_69]),
        poly([450_160.398_036, -6_962_890.543_1, 7.472_2, 0.007_702, -0.000_059_39]),
    ]
    .map(|arcsec| (arcsec * AS2RAD).rem_euclid(std::f64::consts::TAU))
}

/// `[l, l', F, D, Ω, S, S', C, C']`, amplitudes in 1e-7″.
#[rustfmt::skip]
const TERMS: [[i64; 9]; 20] = [
    [ 0,  0, 0,  0, 1, -172_064_161, -174_666, 92_052_331,  9_086],
    [ 0,  0, 2, -2, 2,  -13_170_906,   -1_675,  5_730_336, -3_015],
    [ 0,  0, 2,  0, 2,   -2_276_413,     -234,    978_459,   -485],
    [ 0,  0, 0,  0, 2,    2_074_554,      207,   -897_492,    470],
    [ 0,  1, 0,  0, 0,    1_475_877,   -3_633,     73_871,   -184],
    [ 0,  1, 2, -2, 2,     -516_821,    1_226,    224_386,   -677],
    [ 1,  0, 0,  0, 0,      711_159,       73,     -6_750,      0],
    [ 0,  0, 2,  0, 1,     -387_298,     -367,    200_728,     18],
    [ 1,  0, 2,  0, 2,     -301_461,      -36,    129_025,    -63],
    [ 0, -1, 2, -2, 2,      215_829,     -494,    -95_929,    299],
    [ 0,  0, 2, -2, 1,      128_227,      137,    -68_982,     -9],
    [-1,  0, 2,  0, 2,      123_457,       11,    -53_311,     32],
    [-1,  0, 0,  2, 0,      156_994,       10,     -1_235,      0],
    [ 1,  0, 0,  0, 1,       63_110,       63,    -33_228,      0],
    [-1,  0, 0,  0, 1,      -57_976,      -63,     31_429,      0],
    [-1,  0, 2,  2, 2,      -59_641,      -11,     25_543,    -11],
    [ 1,  0, 2,  0, 1,      -51_613,      -42,     26_366,      0],
    [-2,  0, 2,  0, 1,       45_893,       50,    -24_236,    -10],
    [ 0,  0, 0,  2, 0,       63_384,       11,     -1_220,      0],
    [ 0,  0, 2,  2, 2,      -38_571,       -1,     16_452,    -11],
];

/// Nutation at `t` centuries of dynamical time from J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let args = fundamental_arguments(t);
    let (dpsi, deps) = TERMS.iter().fold((0.0, 0.0), |(dpsi, deps), row| {
        let arg: f64 = (0..5).map(|k| row[k] as f64 * args[k]).sum();
        let (s, c) = arg.sin_cos();
        (
            dpsi + (row[5] as f64 + row[6] as f64 * t) * s,
            deps + (row[7] as f64 + row[8] as f64 * t) * c,
        )
    });
    Nutation {
        delta_psi: dpsi * 1e-7 * AS2RAD,
        delta_epsilon: deps * 1e-7 * AS2RAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amplitude_is_bounded() {
        for k in -20..=20 {
            let n = nutation(k as f64 * 0.05);
            let dpsi = n.delta_psi / AS2RAD;
            let deps = n.delta_epsilon / AS2RAD;
            assert!(dpsi.abs() < 20.0, "dpsi = {dpsi}");
            assert!(deps.abs() < 10.0, "deps = {deps}");
        }
    }

    #[test]
    fn meeus_example_22a() {
        // 1987-04-10 0h TD: Δψ = -3.788″, Δε = +9.443″
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let n = nutation(t);
        assert!((n.delta_psi / AS2RAD + 3.788).abs() < 0.05);
        assert!((n.delta_epsilon / AS2RAD - 9.443).abs() < 0.05);
    }
}
