// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tabulated ΔT data.

/// Biennial ΔT from 1620 to 2000 in tenths of a second (Meeus 1998, table 10.A).
#[rustfmt::skip]
pub(super) const MEEUS_BIENNIAL: [i32; 191] = [
    1210, 1120, 1030,  950,  880,  820,  770,  720,  680,  630,  600,  560,  530,  510,  480,
     460,  440,  420,  400,  380,  350,  330,  310,  290,  260,  240,  220,  200,  180,  160,
     140,  120,  110,  100,   90,   80,   70,   70,   70,   70,   70,   70,   80,   80,   90,
      90,   90,   90,   90,  100,  100,  100,  100,  100,  100,  100,  100,  110,  110,  110,
     110,  110,  120,  120,  120,  120,  130,  130,  130,  140,  140,  140,  140,  150,  150,
     150,  150,  150,  160,  160,  160,  160,  160,  160,  160,  160,  150,  150,  140,  130,
     131,  125,  122,  120,  120,  120,  120,  120,  120,  119,  116,  110,  102,   92,   82,
      71,   62,   56,   54,   53,   54,   56,   59,   62,   65,   68,   71,   73,   75,   76,
      77,   73,   62,   52,   27,   14,  -12,  -28,  -38,  -48,  -55,  -53,  -56,  -57,  -59,
     -60,  -63,  -65,  -62,  -47,  -28,   -1,   26,   53,   77,  104,  133,  160,  182,  202,
     211,  224,  235,  238,  243,  240,  239,  239,  237,  240,  243,  253,  262,  273,  282,
     291,  300,  307,  314,  322,  331,  340,  350,  365,  383,  402,  422,  445,  465,  485,
     505,  522,  538,  549,  558,  569,  583,  600,  616,  630,  650,
];

/// One cubic segment of a piecewise ΔT spline over decimal years.
#[derive(Debug, Clone, Copy)]
pub(super) struct SplineSegment {
    pub from: f64,
    pub to: f64,
    /// Coefficients `a0..a3` of `a0 + a1·t + a2·t² + a3·t³`, `t ∈ [0, 1]`.
    pub coeffs: [f64; 4],
}

const fn seg(from: f64, to: f64, a0: f64, a1: f64, a2: f64, a3: f64) -> SplineSegment {
    SplineSegment {
        from,
        to,
        coeffs: [a0, a1, a2, a3],
    }
}

/// Stephenson, Morrison & Hohenkerk (2016), table S15.
#[rustfmt::skip]
pub(super) const SMH2016_SPLINE: [SplineSegment; 54] = [
    seg( -720.0,   400.0,  20550.593, -21268.478,  11863.418,  -4541.129),
    seg(  400.0,  1000.0,   6604.404,  -5981.266,   -505.093,   1349.609),
    seg( 1000.0,  1500.0,   1467.654,  -2452.187,   2460.927,  -1183.759),
    seg( 1500.0,  1600.0,    292.635,   -216.322,    -43.614,     56.681),
    seg( 1600.0,  1650.0,     89.380,    -66.754,     31.607,    -10.497),
    seg( 1650.0,  1720.0,     43.736,    -49.043,      0.227,     15.811),
    seg( 1720.0,  1800.0,     10.730,     -1.321,     62.250,    -52.946),
    seg( 1800.0,  1810.0,     18.714,     -4.457,     -1.509,      2.507),
    seg( 1810.0,  1820.0,     15.255,      0.046,      6.012,     -4.634),
    seg( 1820.0,  1830.0,     16.679,     -1.831,     -7.889,      3.799),
    seg( 1830.0,  1840.0,     10.758,     -6.211,      3.509,     -0.388),
    seg( 1840.0,  1850.0,      7.668,     -0.357,      2.345,     -0.338),
    seg( 1850.0,  1855.0,      9.317,      1.659,      0.332,     -0.932),
    seg( 1855.0,  1860.0,     10.376,     -0.472,     -2.463,      1.596),
    seg( 1860.0,  1865.0,      9.038,     -0.610,      2.325,     -2.497),
    seg( 1865.0,  1870.0,      8.256,     -3.450,     -5.166,      2.729),
    seg( 1870.0,  1875.0,      2.369,     -5.596,      3.020,     -0.919),
    seg( 1875.0,  1880.0,     -1.126,     -2.312,      0.264,     -0.037),
    seg( 1880.0,  1885.0,     -3.211,     -1.894,      0.154,      0.562),
    seg( 1885.0,  1890.0,     -4.388,      0.101,      1.841,     -1.438),
    seg( 1890.0,  1895.0,     -3.884,     -0.531,     -2.473,      1.870),
    seg( 1895.0,  1900.0,     -5.017,      0.134,      3.138,     -0.232),
    seg( 1900.0,  1905.0,     -1.977,      5.715,      2.443,     -1.257),
    seg( 1905.0,  1910.0,      4.923,      6.828,     -1.329,      0.720),
    seg( 1910.0,  1915.0,     11.142,      6.330,      0.831,     -0.825),
    seg( 1915.0,  1920.0,     17.479,      5.518,     -1.643,      0.262),
    seg( 1920.0,  1925.0,     21.617,      3.020,     -0.856,      0.008),
    seg( 1925.0,  1930.0,     23.789,      1.333,     -0.831,      0.127),
    seg( 1930.0,  1935.0,     24.418,      0.052,     -0.449,      0.142),
    seg( 1935.0,  1940.0,     24.164,     -0.419,     -0.022,      0.702),
    seg( 1940.0,  1945.0,     24.426,      1.645,      2.086,     -1.106),
    seg( 1945.0,  1950.0,     27.050,      2.499,     -1.232,      0.614),
    seg( 1950.0,  1953.0,     28.932,      1.127,      0.220,     -0.277),
    seg( 1953.0,  1956.0,     30.002,      0.737,     -0.610,      0.631),
    seg( 1956.0,  1959.0,     30.760,      1.409,      1.282,     -0.799),
    seg( 1959.0,  1962.0,     32.652,      1.577,     -1.115,      0.507),
    seg( 1962.0,  1965.0,     33.621,      0.868,      0.406,      0.199),
    seg( 1965.0,  1968.0,     35.093,      2.275,      1.002,     -0.414),
    seg( 1968.0,  1971.0,     37.956,      3.035,     -0.242,      0.202),
    seg( 1971.0,  1974.0,     40.951,      3.157,      0.364,     -0.229),
    seg( 1974.0,  1977.0,     44.244,      3.198,     -0.323,      0.172),
    seg( 1977.0,  1980.0,     47.291,      3.069,      0.193,     -0.192),
    seg( 1980.0,  1983.0,     50.361,      2.878,     -0.384,      0.081),
    seg( 1983.0,  1986.0,     52.936,      2.354,     -0.140,     -0.166),
    seg( 1986.0,  1989.0,     54.984,      1.577,     -0.637,      0.448),
    seg( 1989.0,  1992.0,     56.373,      1.649,      0.709,     -0.277),
    seg( 1992.0,  1995.0,     58.453,      2.235,     -0.122,      0.111),
    seg( 1995.0,  1998.0,     60.677,      2.324,      0.212,     -0.315),
    seg( 1998.0,  2001.0,     62.899,      1.804,     -0.732,      0.112),
    seg( 2001.0,  2004.0,     64.082,      0.675,     -0.396,      0.193),
    seg( 2004.0,  2007.0,     64.555,      0.463,      0.184,     -0.008),
    seg( 2007.0,  2010.0,     65.194,      0.809,      0.161,     -0.101),
    seg( 2010.0,  2013.0,     66.063,      0.828,     -0.142,      0.168),
    seg( 2013.0,  2016.0,     66.917,      1.046,      0.360,     -0.282),
];
