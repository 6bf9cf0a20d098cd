// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Planet catalog seam and the built-in mean-element solar system.
//!
//! The observer and transform layers only see bodies through
//! [`PlanetCatalog`]. [`SolarSystem`] is a self-contained implementation
//! driven by the JPL approximate Keplerian elements (Standish, valid
//! 1800–2050 AD), good to a few arcminutes for the planets. Hosts with a
//! precise ephemeris plug in their own catalog.
//!
//! Frames and units:
//!
//! | Quantity | Frame / unit |
//! |----------|--------------|
//! | heliocentric position | ecliptic J2000 (VSOP87), AU |
//! | `rot_equatorial_to_vsop87` | body equator of date → VSOP87 |
//! | sidereal time | degrees |
//! | mean solar day | days |

use nalgebra::{Matrix4, Vector3};

use crate::body::{
    Body, BodyId, BodyKind, KeplerOrbit, RotationElements, SOLAR_SYSTEM_OBSERVER,
};
use crate::error::{Error, Result};
use crate::nutation::nutation;
use crate::precession::precession_angles;
use crate::rotation::{xrot, zrot};
use crate::sidereal::{greenwich_apparent_sidereal_time, greenwich_mean_sidereal_time};
use crate::{JulianDate, JulianEphemerisDay};

/// Earth sidereal year in days, used when no home planet period applies.
pub const EARTH_SIDEREAL_YEAR: f64 = 365.256_363_004;
/// Earth sidereal day in days.
pub const EARTH_SIDEREAL_DAY: f64 = 0.997_269_566_33;

/// Read access to the bodies an observer can stand on.
///
/// Implementations own their bodies; callers keep [`BodyId`] handles only.
pub trait PlanetCatalog {
    /// Finds a body by English name (case-insensitive).
    fn lookup(&self, name: &str) -> Result<BodyId>;

    /// The body behind a handle, `None` for a handle from another catalog.
    fn body(&self, id: BodyId) -> Option<&Body>;

    /// Heliocentric ecliptic J2000 position (AU).
    fn heliocentric_position(&self, id: BodyId, jde: JulianEphemerisDay) -> Vector3<f64>;

    /// Rotation from the body's equator of date to the VSOP87 frame.
    fn rot_equatorial_to_vsop87(
        &self,
        id: BodyId,
        jde: JulianEphemerisDay,
        nutation: bool,
    ) -> Matrix4<f64>;

    /// Rotation angle of the prime meridian, degrees.
    fn sidereal_time(
        &self,
        id: BodyId,
        jd: JulianDate,
        jde: JulianEphemerisDay,
        nutation: bool,
    ) -> f64;

    /// Length of the mean solar day, days; 0 when undefined.
    fn mean_solar_day(&self, id: BodyId) -> f64;

    /// Recomputes cached positions for `jde`.
    fn compute_positions(&mut self, jde: JulianEphemerisDay);

    /// Sidereal orbital period (days), 0 for unknown handles.
    fn sidereal_period(&self, id: BodyId) -> f64 {
        self.body(id).map_or(0.0, |b| b.sidereal_period)
    }

    /// English name of a body, empty for unknown handles.
    fn name(&self, id: BodyId) -> &str {
        self.body(id).map_or("", |b| b.name.as_str())
    }
}

/// Built-in catalog: Sun, the eight planets, Pluto, the Moon and the
/// Solar System Observer pseudo-body.
#[derive(Debug, Clone)]
pub struct SolarSystem {
    bodies: Vec<Body>,
    positions: Vec<Vector3<f64>>,
    positions_jde: Option<f64>,
}

const DEG: f64 = std::f64::consts::PI / 180.0;

// JPL approximate elements, rows [a, e, I, L, ϖ, Ω] and rates per century.
const MERCURY: KeplerOrbit = KeplerOrbit::from_rows(
    [0.387_099_27, 0.205_635_93, 7.004_979_02, 252.250_323_50, 77.457_796_28, 48.330_765_93],
    [0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81],
);
const VENUS: KeplerOrbit = KeplerOrbit::from_rows(
    [0.723_335_66, 0.006_776_72, 3.394_676_05, 181.979_099_50, 131.602_467_18, 76.679_842_55],
    [0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18],
);
const EM_BARY: KeplerOrbit = KeplerOrbit::from_rows(
    [1.000_002_61, 0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93, 0.0],
    [0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64, 0.0],
);
const MARS: KeplerOrbit = KeplerOrbit::from_rows(
    [1.523_710_34, 0.093_394_10, 1.849_691_42, -4.553_432_05, -23.943_629_59, 49.559_538_91],
    [0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43],
);
const JUPITER: KeplerOrbit = KeplerOrbit::from_rows(
    [5.202_887_00, 0.048_386_24, 1.304_396_95, 34.396_440_51, 14.728_479_83, 100.473_909_09],
    [-0.000_116_07, -0.000_132_53, -0.001_837_14, 3_034.746_127_75, 0.212_526_68, 0.204_691_06],
);
const SATURN: KeplerOrbit = KeplerOrbit::from_rows(
    [9.536_675_94, 0.053_861_79, 2.485_991_87, 49.954_244_23, 92.598_878_31, 113.662_424_48],
    [-0.001_250_60, -0.000_509_91, 0.001_936_09, 1_222.493_622_01, -0.418_972_16, -0.288_677_94],
);
const URANUS: KeplerOrbit = KeplerOrbit::from_rows(
    [19.189_164_64, 0.047_257_44, 0.772_637_83, 313.238_104_51, 170.954_276_30, 74.016_925_03],
    [-0.001_961_76, -0.000_043_97, -0.002_429_39, 428.482_027_85, 0.408_052_81, 0.042_405_89],
);
const NEPTUNE: KeplerOrbit = KeplerOrbit::from_rows(
    [30.069_922_76, 0.008_590_48, 1.770_043_47, -55.120_029_69, 44.964_762_27, 131.784_225_74],
    [0.000_262_91, 0.000_051_05, 0.000_353_72, 218.459_453_25, -0.322_414_64, -0.005_086_64],
);
const PLUTO: KeplerOrbit = KeplerOrbit::from_rows(
    [39.482_116_75, 0.248_827_30, 17.140_012_06, 238.929_038_33, 224.068_916_29, 110.303_936_84],
    [-0.000_315_96, 0.000_051_70, 0.000_048_18, 145.207_805_15, -0.040_629_42, -0.011_834_82],
);
// Geocentric mean lunar orbit (Meeus ch. 47 mean arguments).
const MOON: KeplerOrbit = KeplerOrbit::from_rows(
    [0.002_569_555_29, 0.0549, 5.145, 218.316_447_7, 83.353_246_5, 125.044_52],
    [0.0, 0.0, 0.0, 481_267.881_234_21, 4_069.013_728_7, -1_934.136_289_1],
);

/// Rotation elements from catalog-style values: period in hours, angles
/// in degrees.
fn spin(period_h: f64, offset: f64, obliquity: f64, node: f64, retrograde: bool) -> RotationElements {
    RotationElements {
        period: period_h / 24.0,
        offset,
        epoch: JulianEphemerisDay::J2000.value(),
        obliquity: obliquity * DEG,
        ascending_node: node * DEG,
        precession_rate: 0.0,
        retrograde,
    }
}

impl SolarSystem {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        let mut bodies = Vec::with_capacity(12);
        let sun = BodyId(0);
        let earth = BodyId(3);

        bodies.push(Body {
            name: "Sun".into(),
            kind: BodyKind::Star,
            parent: None,
            radius_km: 696_000.0,
            flattening: 0.0,
            rotation: spin(609.12, 0.0, 7.25, 75.76, false),
            sidereal_period: 0.0,
            orbit: None,
            has_atmosphere: false,
        });

        let planet = |name: &str,
                      radius_km: f64,
                      flattening: f64,
                      rotation: RotationElements,
                      sidereal_period: f64,
                      orbit: KeplerOrbit,
                      has_atmosphere: bool| Body {
            name: name.into(),
            kind: BodyKind::Planet,
            parent: Some(sun),
            radius_km,
            flattening,
            rotation,
            sidereal_period,
            orbit: Some(orbit),
            has_atmosphere,
        };

        let mercury = planet("Mercury", 2_439.7, 0.0, spin(1_407.509_405, 291.20, 7.01, 48.33, false), 87.969_1, MERCURY, false);
        let venus = planet("Venus", 6_051.8, 0.0, spin(5_832.479_839, 160.20, 178.78, 300.0, true), 224.701, VENUS, true);
        let earth_body = planet(
            "Earth",
            6_378.137,
            0.003_352_810_664_7,
            RotationElements {
                period: EARTH_SIDEREAL_DAY,
                epoch: JulianEphemerisDay::J2000.value(),
                ..RotationElements::default()
            },
            EARTH_SIDEREAL_YEAR,
            EM_BARY,
            true,
        );
        let mars = planet("Mars", 3_396.19, 0.005_89, spin(24.622_9, 136.005, 26.72, 82.91, false), 686.971, MARS, true);
        let jupiter = planet("Jupiter", 71_492.0, 0.064_87, spin(9.925, 16.8, 2.22, 338.2, false), 4_332.589, JUPITER, true);
        let saturn = planet("Saturn", 60_268.0, 0.097_96, spin(10.656_22, 358.922, 28.049, 169.53, false), 10_759.22, SATURN, true);
        let uranus = planet("Uranus", 25_559.0, 0.022_93, spin(17.24, 331.18, 97.86, 167.76, true), 30_685.4, URANUS, true);
        let neptune = planet("Neptune", 24_764.0, 0.017_1, spin(16.11, 228.65, 29.56, 49.5, false), 60_189.0, NEPTUNE, true);
        let pluto = planet("Pluto", 1_188.3, 0.0, spin(153.293_5, 0.0, 119.6, 228.34, true), 90_560.0, PLUTO, false);

        bodies.extend([mercury, venus, earth_body, mars, jupiter, saturn, uranus, neptune, pluto]);

        bodies.push(Body {
            name: "Moon".into(),
            kind: BodyKind::Moon,
            parent: Some(earth),
            radius_km: 1_737.4,
            flattening: 0.001_2,
            rotation: RotationElements {
                period: 27.321_661,
                offset: 38.321_4,
                epoch: JulianEphemerisDay::J2000.value(),
                obliquity: 1.542_4 * DEG,
                ascending_node: 125.044_52 * DEG,
                precession_rate: -1_934.136_289_1 * DEG / 36_525.0,
                retrograde: false,
            },
            sidereal_period: 27.321_661,
            orbit: Some(MOON),
            has_atmosphere: false,
        });

        bodies.push(Body {
            name: SOLAR_SYSTEM_OBSERVER.into(),
            kind: BodyKind::Observer,
            parent: Some(sun),
            radius_km: 0.0,
            flattening: 0.0,
            rotation: RotationElements::default(),
            sidereal_period: 0.0,
            orbit: None,
            has_atmosphere: false,
        });

        let positions = vec![Vector3::zeros(); bodies.len()];
        Self {
            bodies,
            positions,
            positions_jde: None,
        }
    }

    /// All bodies in catalog order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Handle of the Earth.
    pub fn earth(&self) -> BodyId {
        BodyId(3)
    }

    /// Handle of the Sun.
    pub fn sun(&self) -> BodyId {
        BodyId(0)
    }

    /// Adds a body and returns its handle.
    pub fn insert(&mut self, body: Body) -> BodyId {
        self.bodies.push(body);
        self.positions.push(Vector3::zeros());
        self.positions_jde = None;
        BodyId(self.bodies.len() - 1)
    }

    fn is_earth(&self, id: BodyId) -> bool {
        self.bodies.get(id.0).is_some_and(|b| b.name == "Earth")
    }

    /// Position relative to the parent body, ecliptic J2000, AU.
    fn relative_position(&self, id: BodyId, jde: JulianEphemerisDay) -> Vector3<f64> {
        let Some(body) = self.bodies.get(id.0) else {
            return Vector3::zeros();
        };
        let Some(orbit) = body.orbit else {
            return Vector3::zeros();
        };
        orbit.position(jde.julian_centuries())
    }

    fn compute_heliocentric(&self, id: BodyId, jde: JulianEphemerisDay) -> Vector3<f64> {
        let mut pos = self.relative_position(id, jde);
        let mut parent = self.bodies.get(id.0).and_then(|b| b.parent);
        while let Some(p) = parent {
            let Some(body) = self.bodies.get(p.0) else {
                break;
            };
            // The root (Sun) sits at the origin.
            if body.parent.is_some() {
                pos += self.relative_position(p, jde);
            }
            parent = body.parent;
        }
        pos
    }

    /// Equator of the body relative to its parent's reference frame.
    fn rot_local_to_parent(&self, id: BodyId, jde: JulianEphemerisDay, with_nutation: bool) -> Matrix4<f64> {
        let Some(body) = self.bodies.get(id.0) else {
            return Matrix4::identity();
        };
        if self.is_earth(id) {
            let t = jde.julian_centuries();
            let pa = precession_angles(t);
            let mut m = zrot(-pa.psi_a) * xrot(-pa.omega_a) * zrot(pa.chi_a);
            if with_nutation {
                let n = nutation(t);
                m *= xrot(pa.epsilon_a) * zrot(-n.delta_psi) * xrot(-pa.epsilon_a - n.delta_epsilon);
            }
            return m;
        }
        let r = &body.rotation;
        let node = r.ascending_node - r.precession_rate * (jde.value() - r.epoch);
        zrot(node) * xrot(r.obliquity)
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PlanetCatalog for SolarSystem {
    fn lookup(&self, name: &str) -> Result<BodyId> {
        self.bodies
            .iter()
            .position(|b| b.name.eq_ignore_ascii_case(name.trim()))
            .map(BodyId)
            .ok_or_else(|| Error::UnknownBody(name.to_string()))
    }

    fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    fn heliocentric_position(&self, id: BodyId, jde: JulianEphemerisDay) -> Vector3<f64> {
        if self.positions_jde == Some(jde.value()) {
            if let Some(p) = self.positions.get(id.0) {
                return *p;
            }
        }
        self.compute_heliocentric(id, jde)
    }

    fn rot_equatorial_to_vsop87(
        &self,
        id: BodyId,
        jde: JulianEphemerisDay,
        nutation: bool,
    ) -> Matrix4<f64> {
        let mut rval = self.rot_local_to_parent(id, jde, nutation);
        let mut parent = self.bodies.get(id.0).and_then(|b| b.parent);
        while let Some(p) = parent {
            let Some(body) = self.bodies.get(p.0) else {
                break;
            };
            if body.parent.is_some() {
                rval = self.rot_local_to_parent(p, jde, nutation) * rval;
            }
            parent = body.parent;
        }
        rval
    }

    fn sidereal_time(
        &self,
        id: BodyId,
        jd: JulianDate,
        jde: JulianEphemerisDay,
        nutation_on: bool,
    ) -> f64 {
        if self.is_earth(id) {
            let theta = if nutation_on {
                greenwich_apparent_sidereal_time(jd, jde, &nutation(jde.julian_centuries()))
            } else {
                greenwich_mean_sidereal_time(jd, jde)
            };
            return theta.to_degrees();
        }
        let Some(body) = self.bodies.get(id.0) else {
            return 0.0;
        };
        let r = &body.rotation;
        let rotations = if r.period == 0.0 {
            1.0
        } else {
            (jde.value() - r.epoch) / r.period
        };
        rotations.fract() * 360.0 + r.offset
    }

    fn mean_solar_day(&self, id: BodyId) -> f64 {
        let Some(body) = self.bodies.get(id.0) else {
            return 0.0;
        };
        match body.kind {
            BodyKind::Star | BodyKind::Observer => 0.0,
            // The civil day is the JD day.
            BodyKind::Planet if body.name == "Earth" => 1.0,
            BodyKind::Moon => {
                let sday = body.sidereal_day();
                let parent_period = body
                    .parent
                    .and_then(|p| self.bodies.get(p.0))
                    .map_or(0.0, |p| p.sidereal_period);
                let a = parent_period / sday;
                if a == 1.0 || sday == 0.0 {
                    return 0.0;
                }
                sday * (a / (a - 1.0))
            }
            BodyKind::Planet => {
                let sday = body.sidereal_day();
                if body.sidereal_period == 0.0 {
                    return 0.0;
                }
                let coeff = (sday / body.sidereal_period).abs();
                let sign = if body.rotation.retrograde { -1.0 } else { 1.0 };
                sign * sday / (1.0 - sign * coeff)
            }
        }
    }

    fn compute_positions(&mut self, jde: JulianEphemerisDay) {
        if self.positions_jde == Some(jde.value()) {
            return;
        }
        let fresh: Vec<_> = (0..self.bodies.len())
            .map(|i| self.compute_heliocentric(BodyId(i), jde))
            .collect();
        self.positions = fresh;
        self.positions_jde = Some(jde.value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::rotation_part;

    fn jde(v: f64) -> JulianEphemerisDay {
        JulianEphemerisDay::new(v)
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let ss = SolarSystem::builtin();
        assert_eq!(ss.lookup("earth").unwrap(), ss.earth());
        assert_eq!(ss.lookup(" Sun ").unwrap(), ss.sun());
        assert!(matches!(ss.lookup("Vulcan"), Err(Error::UnknownBody(_))));
    }

    #[test]
    fn earth_is_about_one_au_from_sun() {
        let ss = SolarSystem::builtin();
        for k in 0..8 {
            let r = ss.heliocentric_position(ss.earth(), jde(2_451_545.0 + 45.0 * k as f64)).norm();
            assert!((r - 1.0).abs() < 0.02, "r = {r}");
        }
    }

    #[test]
    fn moon_orbits_the_earth() {
        let ss = SolarSystem::builtin();
        let moon = ss.lookup("Moon").unwrap();
        let t = jde(2_460_000.5);
        let d = ss.heliocentric_position(moon, t) - ss.heliocentric_position(ss.earth(), t);
        let km = d.norm() * crate::body::AU_KM;
        assert!(km > 356_000.0 && km < 407_000.0, "distance {km} km");
    }

    #[test]
    fn cache_matches_direct_evaluation() {
        let mut ss = SolarSystem::builtin();
        let t = jde(2_455_000.0);
        let mars = ss.lookup("Mars").unwrap();
        let direct = ss.heliocentric_position(mars, t);
        ss.compute_positions(t);
        assert_eq!(ss.heliocentric_position(mars, t), direct);
    }

    #[test]
    fn earth_orientation_at_j2000_is_obliquity_tilt() {
        let ss = SolarSystem::builtin();
        let m = ss.rot_equatorial_to_vsop87(ss.earth(), JulianEphemerisDay::J2000, false);
        // Without precession the equator pole maps to the ecliptic frame
        // tilted by ε0 about x.
        let pole = rotation_part(&m) * Vector3::z();
        let eps = crate::precession::EPSILON_0_ARCSEC / 3600.0 * DEG;
        assert!((pole.z - eps.cos()).abs() < 1e-9);
        assert!((pole.y - eps.sin()).abs() < 1e-9);
    }

    #[test]
    fn orientation_is_orthonormal() {
        let ss = SolarSystem::builtin();
        let moon = ss.lookup("Moon").unwrap();
        let r = rotation_part(&ss.rot_equatorial_to_vsop87(moon, jde(2_458_000.0), true));
        assert!((r * r.transpose() - nalgebra::Matrix3::identity()).norm() < 1e-12);
    }

    #[test]
    fn earth_sidereal_time_is_gmst_in_degrees() {
        let ss = SolarSystem::builtin();
        let jd = JulianDate::new(2_446_895.5);
        let st = ss.sidereal_time(ss.earth(), jd, jde(2_446_895.5), false);
        // Meeus 12.a: 13h10m46.3668s.
        let expected = (13.0 + 10.0 / 60.0 + 46.3668 / 3600.0) * 15.0;
        assert!((st - expected).abs() < 1e-3, "st = {st}");
    }

    #[test]
    fn mean_solar_days() {
        let ss = SolarSystem::builtin();
        assert_eq!(ss.mean_solar_day(ss.sun()), 0.0);
        assert_eq!(ss.mean_solar_day(ss.earth()), 1.0);

        let moon = ss.lookup("Moon").unwrap();
        assert!((ss.mean_solar_day(moon) - 29.53).abs() < 0.01);

        let mars = ss.lookup("Mars").unwrap();
        assert!((ss.mean_solar_day(mars) - 1.0275).abs() < 1e-3);

        // Retrograde rotators come out negative, |Venus| ≈ 116.75 d.
        let venus = ss.lookup("Venus").unwrap();
        let msd = ss.mean_solar_day(venus);
        assert!(msd < 0.0);
        assert!((msd.abs() - 116.75).abs() < 0.1, "msd = {msd}");

        let sso = ss.lookup(SOLAR_SYSTEM_OBSERVER).unwrap();
        assert_eq!(ss.mean_solar_day(sso), 0.0);
    }

    #[test]
    fn other_bodies_spin_linearly() {
        let ss = SolarSystem::builtin();
        let mars = ss.lookup("Mars").unwrap();
        let period = ss.body(mars).unwrap().rotation.period;
        let a = ss.sidereal_time(mars, JulianDate::J2000, JulianEphemerisDay::J2000, true);
        let b = ss.sidereal_time(
            mars,
            JulianDate::J2000,
            jde(JulianEphemerisDay::J2000.value() + period / 4.0),
            true,
        );
        assert!((b - a - 90.0).abs() < 1e-6);
    }
}
