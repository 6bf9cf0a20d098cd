// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Coordinate-frame transform chain.
//!
//! [`TransformState`] holds every 4×4 frame matrix for one instant and one
//! observer, rebuilt wholesale each frame in dependency order:
//!
//! 1. AltAz ↔ equinox equatorial of date, from the home body's rotation;
//! 2. equinox equatorial ↔ J2000, through the body's equator-to-VSOP87
//!    rotation and the fixed VSOP87 → J2000 tilt;
//! 3. J2000 ↔ AltAz by composition;
//! 4. heliocentric ecliptic J2000 → equinox equatorial, shifting by the
//!    home body's heliocentric position;
//! 5. AltAz ↔ heliocentric ecliptic J2000, optionally offset by the
//!    observer's topocentric displacement.
//!
//! Rotation inverses are transposes and translation inverses are rigid
//! inverses, so each pair is exact.
//!
//! [`TransformEngine`] wraps the state with the refraction model and exposes
//! vector conversions between frames.

use std::sync::OnceLock;

use nalgebra::{Matrix4, Vector3};

use crate::observer::HomeState;
use crate::precession::mean_obliquity;
use crate::projector::ModelView;
use crate::refraction::Refraction;
use crate::rotation::{rigid_inverse, sphe_to_rect, transform_vector, translation, xrot, zrot};
use crate::JulianEphemerisDay;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference frames a vector or projector can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FrameType {
    /// Horizontal: x south, y east, z zenith.
    AltAz,
    HeliocentricEclipticJ2000,
    ObservercentricEclipticJ2000,
    ObservercentricEclipticOfDate,
    Galactic,
    Supergalactic,
    /// Mean or true equator and equinox of date.
    EquinoxEqu,
    J2000,
}

/// When AltAz-facing conversions account for atmospheric refraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RefractionMode {
    /// Only while the atmosphere is shown.
    #[default]
    Auto,
    Off,
    On,
}

/// Obliquity of the VSOP87 ecliptic on the J2000 equator (deg).
const VSOP87_OBLIQUITY_DEG: f64 = 23.439_280_305_555_555_555_6;
/// Offset of the VSOP87 equinox from the FK5 one (deg).
const VSOP87_EQUINOX_OFFSET_DEG: f64 = 0.000_027_5;

/// Supergalactic north pole in galactic coordinates (deg).
const SUPERGALACTIC_POLE: (f64, f64) = (47.37, 6.32);
/// Supergalactic zero point in galactic coordinates (deg).
const SUPERGALACTIC_ORIGIN: (f64, f64) = (137.37, 0.0);

/// Time-independent frame rotations.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedFrames {
    pub j2000_to_vsop87: Matrix4<f64>,
    pub vsop87_to_j2000: Matrix4<f64>,
    pub j2000_to_galactic: Matrix4<f64>,
    pub galactic_to_j2000: Matrix4<f64>,
    pub galactic_to_supergalactic: Matrix4<f64>,
    pub supergalactic_to_galactic: Matrix4<f64>,
    pub j2000_to_supergalactic: Matrix4<f64>,
    pub supergalactic_to_j2000: Matrix4<f64>,
}

impl FixedFrames {
    fn compute() -> Self {
        let j2000_to_vsop87 = xrot(-VSOP87_OBLIQUITY_DEG.to_radians())
            * zrot(VSOP87_EQUINOX_OFFSET_DEG.to_radians());

        #[rustfmt::skip]
        let j2000_to_galactic = Matrix4::new(
            -0.054_875_539_726, -0.873_437_108_010, -0.483_834_985_808, 0.0,
             0.494_109_453_312, -0.444_829_589_425,  0.746_982_251_810, 0.0,
            -0.867_666_135_858, -0.198_076_386_122,  0.455_983_795_705, 0.0,
             0.0,                0.0,                0.0,               1.0,
        );

        let sgz = sphe_to_rect(
            SUPERGALACTIC_POLE.0.to_radians(),
            SUPERGALACTIC_POLE.1.to_radians(),
        );
        let sgx = sphe_to_rect(
            SUPERGALACTIC_ORIGIN.0.to_radians(),
            SUPERGALACTIC_ORIGIN.1.to_radians(),
        );
        let sgy = sgz.cross(&sgx);
        #[rustfmt::skip]
        let galactic_to_supergalactic = Matrix4::new(
            sgx.x, sgx.y, sgx.z, 0.0,
            sgy.x, sgy.y, sgy.z, 0.0,
            sgz.x, sgz.y, sgz.z, 0.0,
            0.0,   0.0,   0.0,   1.0,
        );

        let j2000_to_supergalactic = galactic_to_supergalactic * j2000_to_galactic;
        Self {
            vsop87_to_j2000: j2000_to_vsop87.transpose(),
            j2000_to_vsop87,
            galactic_to_j2000: j2000_to_galactic.transpose(),
            j2000_to_galactic,
            supergalactic_to_galactic: galactic_to_supergalactic.transpose(),
            galactic_to_supergalactic,
            supergalactic_to_j2000: j2000_to_supergalactic.transpose(),
            j2000_to_supergalactic,
        }
    }
}

/// The process-wide fixed frames, built on first use.
pub fn fixed_frames() -> &'static FixedFrames {
    static FRAMES: OnceLock<FixedFrames> = OnceLock::new();
    FRAMES.get_or_init(FixedFrames::compute)
}

/// All frame matrices for one instant and observer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    pub alt_az_to_equinox_equ: Matrix4<f64>,
    pub equinox_equ_to_alt_az: Matrix4<f64>,
    pub equinox_equ_to_j2000: Matrix4<f64>,
    pub j2000_to_equinox_equ: Matrix4<f64>,
    pub j2000_to_alt_az: Matrix4<f64>,
    pub alt_az_to_j2000: Matrix4<f64>,
    pub heliocentric_ecliptic_j2000_to_equinox_equ: Matrix4<f64>,
    pub heliocentric_ecliptic_j2000_to_alt_az: Matrix4<f64>,
    pub alt_az_to_heliocentric_ecliptic_j2000: Matrix4<f64>,
    /// Mean obliquity of the ecliptic of date (rad).
    pub obliquity_of_date: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        let id = Matrix4::identity();
        Self {
            alt_az_to_equinox_equ: id,
            equinox_equ_to_alt_az: id,
            equinox_equ_to_j2000: id,
            j2000_to_equinox_equ: id,
            j2000_to_alt_az: id,
            alt_az_to_j2000: id,
            heliocentric_ecliptic_j2000_to_equinox_equ: id,
            heliocentric_ecliptic_j2000_to_alt_az: id,
            alt_az_to_heliocentric_ecliptic_j2000: id,
            obliquity_of_date: mean_obliquity(0.0),
        }
    }
}

impl TransformState {
    /// Builds every matrix for `home` at `jde`.
    pub fn compute(home: &HomeState, jde: JulianEphemerisDay, topocentric: bool) -> Self {
        let fixed = fixed_frames();

        let alt_az_to_equinox_equ = home.rot_alt_az_to_equatorial;
        let equinox_equ_to_alt_az = alt_az_to_equinox_equ.transpose();

        let equinox_equ_to_j2000 = fixed.vsop87_to_j2000 * home.rot_equatorial_to_vsop87;
        let j2000_to_equinox_equ = equinox_equ_to_j2000.transpose();

        let j2000_to_alt_az = equinox_equ_to_alt_az * j2000_to_equinox_equ;
        let alt_az_to_j2000 = j2000_to_alt_az.transpose();

        let heliocentric_ecliptic_j2000_to_equinox_equ =
            j2000_to_equinox_equ * fixed.vsop87_to_j2000 * translation(&-home.center_vsop87);

        let alt_az_to_vsop87 = fixed.j2000_to_vsop87 * equinox_equ_to_j2000 * alt_az_to_equinox_equ;
        let offset = if topocentric {
            home.topocentric_offset
        } else {
            Vector3::zeros()
        };
        let alt_az_to_heliocentric_ecliptic_j2000 =
            translation(&home.center_vsop87) * alt_az_to_vsop87 * translation(&offset);
        let heliocentric_ecliptic_j2000_to_alt_az =
            rigid_inverse(&alt_az_to_heliocentric_ecliptic_j2000);

        Self {
            alt_az_to_equinox_equ,
            equinox_equ_to_alt_az,
            equinox_equ_to_j2000,
            j2000_to_equinox_equ,
            j2000_to_alt_az,
            alt_az_to_j2000,
            heliocentric_ecliptic_j2000_to_equinox_equ,
            heliocentric_ecliptic_j2000_to_alt_az,
            alt_az_to_heliocentric_ecliptic_j2000,
            obliquity_of_date: mean_obliquity(jde.julian_centuries()),
        }
    }

    /// Matrix from `frame` into AltAz, without refraction.
    pub fn to_alt_az(&self, frame: FrameType) -> Matrix4<f64> {
        let fixed = fixed_frames();
        match frame {
            FrameType::AltAz => Matrix4::identity(),
            FrameType::HeliocentricEclipticJ2000 => self.heliocentric_ecliptic_j2000_to_alt_az,
            FrameType::ObservercentricEclipticJ2000 => self.j2000_to_alt_az * fixed.vsop87_to_j2000,
            FrameType::ObservercentricEclipticOfDate => {
                self.equinox_equ_to_alt_az * xrot(self.obliquity_of_date)
            }
            FrameType::Galactic => self.j2000_to_alt_az * fixed.galactic_to_j2000,
            FrameType::Supergalactic => self.j2000_to_alt_az * fixed.supergalactic_to_j2000,
            FrameType::EquinoxEqu => self.equinox_equ_to_alt_az,
            FrameType::J2000 => self.j2000_to_alt_az,
        }
    }
}

/// Frame matrices plus the atmosphere model used by AltAz conversions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformEngine {
    state: TransformState,
    refraction: Refraction,
    atmosphere: bool,
}

impl TransformEngine {
    pub fn new(refraction: Refraction) -> Self {
        Self {
            state: TransformState::default(),
            refraction,
            atmosphere: false,
        }
    }

    /// Rebuilds every matrix for the current instant and observer.
    pub fn update(&mut self, home: &HomeState, jde: JulianEphemerisDay, topocentric: bool) {
        self.state = TransformState::compute(home, jde, topocentric);
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    pub fn refraction(&self) -> &Refraction {
        &self.refraction
    }

    pub fn refraction_mut(&mut self) -> &mut Refraction {
        &mut self.refraction
    }

    pub fn set_refraction(&mut self, refraction: Refraction) {
        self.refraction = refraction;
    }

    pub fn has_atmosphere(&self) -> bool {
        self.atmosphere
    }

    pub fn set_atmosphere(&mut self, atmosphere: bool) {
        self.atmosphere = atmosphere;
    }

    /// Whether `mode` refracts under the current atmosphere.
    pub fn refracts(&self, mode: RefractionMode) -> bool {
        match mode {
            RefractionMode::Off => false,
            RefractionMode::On => true,
            RefractionMode::Auto => self.atmosphere,
        }
    }

    fn leave_alt_az(&self, m: &Matrix4<f64>, v: &Vector3<f64>, mode: RefractionMode) -> Vector3<f64> {
        if self.refracts(mode) {
            transform_vector(m, &self.refraction.backward(v))
        } else {
            transform_vector(m, v)
        }
    }

    fn enter_alt_az(&self, m: &Matrix4<f64>, v: &Vector3<f64>, mode: RefractionMode) -> Vector3<f64> {
        let r = transform_vector(m, v);
        if self.refracts(mode) {
            self.refraction.forward(&r)
        } else {
            r
        }
    }

    pub fn alt_az_to_equinox_equ(&self, v: &Vector3<f64>, mode: RefractionMode) -> Vector3<f64> {
        self.leave_alt_az(&self.state.alt_az_to_equinox_equ, v, mode)
    }

    pub fn equinox_equ_to_alt_az(&self, v: &Vector3<f64>, mode: RefractionMode) -> Vector3<f64> {
        self.enter_alt_az(&self.state.equinox_equ_to_alt_az, v, mode)
    }

    pub fn alt_az_to_j2000(&self, v: &Vector3<f64>, mode: RefractionMode) -> Vector3<f64> {
        self.leave_alt_az(&self.state.alt_az_to_j2000, v, mode)
    }

    pub fn j2000_to_alt_az(&self, v: &Vector3<f64>, mode: RefractionMode) -> Vector3<f64> {
        self.enter_alt_az(&self.state.j2000_to_alt_az, v, mode)
    }

    pub fn heliocentric_ecliptic_to_alt_az(
        &self,
        v: &Vector3<f64>,
        mode: RefractionMode,
    ) -> Vector3<f64> {
        self.enter_alt_az(&self.state.heliocentric_ecliptic_j2000_to_alt_az, v, mode)
    }

    pub fn alt_az_to_heliocentric_ecliptic(
        &self,
        v: &Vector3<f64>,
        mode: RefractionMode,
    ) -> Vector3<f64> {
        self.leave_alt_az(&self.state.alt_az_to_heliocentric_ecliptic_j2000, v, mode)
    }

    pub fn equinox_equ_to_j2000(&self, v: &Vector3<f64>) -> Vector3<f64> {
        transform_vector(&self.state.equinox_equ_to_j2000, v)
    }

    pub fn j2000_to_equinox_equ(&self, v: &Vector3<f64>) -> Vector3<f64> {
        transform_vector(&self.state.j2000_to_equinox_equ, v)
    }

    pub fn galactic_to_j2000(&self, v: &Vector3<f64>) -> Vector3<f64> {
        transform_vector(&fixed_frames().galactic_to_j2000, v)
    }

    pub fn j2000_to_galactic(&self, v: &Vector3<f64>) -> Vector3<f64> {
        transform_vector(&fixed_frames().j2000_to_galactic, v)
    }

    pub fn supergalactic_to_j2000(&self, v: &Vector3<f64>) -> Vector3<f64> {
        transform_vector(&fixed_frames().supergalactic_to_j2000, v)
    }

    pub fn j2000_to_supergalactic(&self, v: &Vector3<f64>) -> Vector3<f64> {
        transform_vector(&fixed_frames().j2000_to_supergalactic, v)
    }

    pub fn heliocentric_ecliptic_to_equinox_equ(&self, v: &Vector3<f64>) -> Vector3<f64> {
        transform_vector(&self.state.heliocentric_ecliptic_j2000_to_equinox_equ, v)
    }

    /// J2000 equatorial to observer-centred ecliptic J2000.
    pub fn j2000_to_observercentric_ecliptic(&self, v: &Vector3<f64>) -> Vector3<f64> {
        transform_vector(&fixed_frames().j2000_to_vsop87, v)
    }

    /// Equatorial of date to ecliptic of date.
    pub fn equinox_equ_to_ecliptic_of_date(&self, v: &Vector3<f64>) -> Vector3<f64> {
        transform_vector(&xrot(-self.state.obliquity_of_date), v)
    }

    /// Model-view from `frame` into the view frame. `alt_az_model_view`
    /// orients AltAz towards the viewer.
    pub fn model_view(
        &self,
        frame: FrameType,
        mode: RefractionMode,
        alt_az_model_view: &Matrix4<f64>,
    ) -> ModelView {
        let pre = self.state.to_alt_az(frame);
        if self.refracts(mode) {
            ModelView::refracted(pre, self.refraction, *alt_az_model_view)
        } else {
            ModelView::linear(alt_az_model_view * pre)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::Observer;
    use crate::rotation::{rect_to_sphe, rotation_part};
    use crate::solar_system::{PlanetCatalog, SolarSystem};
    use crate::{JulianDate, Location, Time};

    fn state_at(lat: f64, lon: f64, jd: f64, topocentric: bool) -> (TransformState, HomeState) {
        let mut ss = SolarSystem::builtin();
        let jd = JulianDate::new(jd);
        let jde = JulianEphemerisDay::new(jd.value() + 64.0 / 86_400.0);
        ss.compute_positions(jde);
        let obs = Observer::fixed(Location::on_earth("Test", "", lat, lon, 0.0), &ss);
        let home = obs.home_state(&ss, jd, jde, true);
        (TransformState::compute(&home, jde, topocentric), home)
    }

    #[test]
    fn pairs_are_exact_transposes() {
        let (s, _) = state_at(48.85, 2.35, 2_460_000.3, true);
        assert_eq!(s.alt_az_to_equinox_equ.transpose(), s.equinox_equ_to_alt_az);
        assert_eq!(s.equinox_equ_to_j2000.transpose(), s.j2000_to_equinox_equ);
        assert_eq!(s.j2000_to_alt_az.transpose(), s.alt_az_to_j2000);
    }

    #[test]
    fn helio_pair_inverts() {
        let (s, _) = state_at(-30.0, 70.0, 2_455_000.7, true);
        let prod = s.heliocentric_ecliptic_j2000_to_alt_az * s.alt_az_to_heliocentric_ecliptic_j2000;
        assert!((prod - Matrix4::identity()).norm() < 1e-9);
    }

    #[test]
    fn zenith_is_at_observer_latitude() {
        let (s, _) = state_at(40.0, -3.0, 2_451_545.0, false);
        let zenith = transform_vector(&s.alt_az_to_equinox_equ, &Vector3::z());
        let (_, dec) = rect_to_sphe(&zenith);
        assert!((dec.to_degrees() - 40.0).abs() < 1e-9, "dec = {}", dec.to_degrees());
    }

    #[test]
    fn celestial_pole_altitude_equals_latitude() {
        let (s, _) = state_at(52.0, 13.0, 2_458_000.0, false);
        let pole = transform_vector(&s.equinox_equ_to_alt_az, &Vector3::z());
        assert!((pole.z.asin().to_degrees() - 52.0).abs() < 1e-9);
        // North lies opposite the +x (south) axis.
        assert!(pole.x < 0.0);
    }

    #[test]
    fn sun_direction_points_away_from_earth() {
        let (s, home) = state_at(0.0, 0.0, 2_451_545.0, false);
        let sun = transform_vector(&s.heliocentric_ecliptic_j2000_to_alt_az, &Vector3::zeros());
        assert!((sun.norm() - home.center_vsop87.norm()).abs() < 1e-9);
    }

    #[test]
    fn topocentric_shift_is_earth_radius() {
        let (geo, _) = state_at(45.0, 0.0, 2_451_545.0, false);
        let (topo, _) = state_at(45.0, 0.0, 2_451_545.0, true);
        let origin = Vector3::zeros();
        let a = transform_vector(&geo.alt_az_to_heliocentric_ecliptic_j2000, &origin);
        let b = transform_vector(&topo.alt_az_to_heliocentric_ecliptic_j2000, &origin);
        let km = (a - b).norm() * crate::body::AU_KM;
        assert!(km > 6_356.0 && km < 6_379.0, "km = {km}");
    }

    #[test]
    fn fixed_frames_are_orthonormal() {
        let f = fixed_frames();
        for m in [&f.j2000_to_vsop87, &f.j2000_to_galactic, &f.galactic_to_supergalactic] {
            let r = rotation_part(m);
            assert!((r * r.transpose() - nalgebra::Matrix3::identity()).norm() < 1e-9);
            assert!((r.determinant() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn galactic_centre_direction() {
        // Sgr A* region: RA 266.405°, Dec −28.936°.
        let engine = TransformEngine::default();
        let gc = sphe_to_rect(266.405_f64.to_radians(), (-28.936_f64).to_radians());
        let g = engine.j2000_to_galactic(&gc);
        let (l, b) = rect_to_sphe(&g);
        assert!(l.to_degrees().abs() < 0.01 && b.to_degrees().abs() < 0.01);
    }

    #[test]
    fn supergalactic_pole_maps_to_z() {
        let f = fixed_frames();
        let pole = sphe_to_rect(47.37_f64.to_radians(), 6.32_f64.to_radians());
        let sg = transform_vector(&f.galactic_to_supergalactic, &pole);
        assert!((sg - Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn refraction_follows_mode_and_atmosphere() {
        let (_, home) = state_at(48.0, 2.0, 2_451_545.0, false);
        let mut engine = TransformEngine::new(Refraction::default());
        engine.update(&home, Time::new(2_451_545.0), false);
        assert_eq!(engine.state().alt_az_to_equinox_equ, home.rot_alt_az_to_equatorial);
        let low = sphe_to_rect(1.0, 2f64.to_radians());
        let equ = engine.alt_az_to_equinox_equ(&low, RefractionMode::Off);

        let plain = engine.equinox_equ_to_alt_az(&equ, RefractionMode::Auto);
        assert!((plain - low).norm() < 1e-12);

        engine.set_atmosphere(true);
        let lifted = engine.equinox_equ_to_alt_az(&equ, RefractionMode::Auto);
        assert!(lifted.z > low.z);
        let back = engine.alt_az_to_equinox_equ(&lifted, RefractionMode::Auto);
        assert!((back - equ).norm() < 1e-3);
        assert!(engine.refracts(RefractionMode::On));
        assert!(!engine.refracts(RefractionMode::Off));
    }

    #[test]
    fn model_view_matches_accessors() {
        let (_, home) = state_at(10.0, 20.0, 2_452_000.0, true);
        let mut engine = TransformEngine::default();
        engine.update(&home, Time::new(2_452_000.0), true);
        let v = sphe_to_rect(0.4, 0.2);
        let mv = engine.model_view(FrameType::J2000, RefractionMode::Off, &Matrix4::identity());
        let expected = engine.j2000_to_alt_az(&v, RefractionMode::Off);
        assert!((mv.forward(&v) - expected).norm() < 1e-12);

        let ecl = engine.j2000_to_observercentric_ecliptic(&v);
        let mv = engine.model_view(
            FrameType::ObservercentricEclipticJ2000,
            RefractionMode::Off,
            &Matrix4::identity(),
        );
        assert!((mv.forward(&ecl) - expected).norm() < 1e-9);
    }

    #[test]
    fn ecliptic_of_date_pole() {
        let engine = TransformEngine::default();
        let eps = engine.state().obliquity_of_date;
        let pole = Vector3::new(0.0, -eps.sin(), eps.cos());
        let out = engine.equinox_equ_to_ecliptic_of_date(&pole);
        assert!((out - Vector3::z()).norm() < 1e-12);
    }
}
