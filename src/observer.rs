// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Who is observing, and from where.
//!
//! An [`Observer`] is either parked at a [`Location`] or in [`Transit`]
//! between two sites. A transit reports the end of its life through
//! [`Observer::is_observer_life_over`]; the owner then replaces it with
//! [`Observer::next_observer`] in one assignment, so exactly one observer
//! exists at any time.
//!
//! When a transit changes planets, an [`ArtificialBody`] stands in for the
//! home body and is blended from the start body towards the target body a
//! little more on every step.
//!
//! Home bodies are held as [`BodyId`] handles into the caller's
//! [`PlanetCatalog`]; the observer never owns a body.

use nalgebra::{Matrix4, Rotation3, UnitQuaternion, Vector3};
use tracing::{debug, warn};

use crate::body::{BodyId, AU_KM};
use crate::location::Location;
use crate::rotation::{rotation_part, yrot, zrot};
use crate::solar_system::PlanetCatalog;
use crate::{JulianDate, JulianEphemerisDay};

/// Planet name shown while travelling between bodies.
pub const SPACESHIP: &str = "SpaceShip";

/// Display name given to a start site that is itself a transit, so chained
/// moves do not read `"A -> B -> C"`.
pub const COLLAPSED_NAME: &str = ".";

/// Resolves `planet` or falls back to the Earth, then to the first body.
fn home_body(catalog: &dyn PlanetCatalog, planet: &str) -> BodyId {
    catalog.lookup(planet).unwrap_or_else(|_| {
        warn!(planet = %planet, fallback = "Earth", "unknown home planet for observer");
        catalog.lookup("Earth").unwrap_or(BodyId(0))
    })
}

/// Observer standing still at a site.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedObserver {
    location: Location,
    planet: BodyId,
}

impl FixedObserver {
    pub fn new(location: Location, catalog: &dyn PlanetCatalog) -> Self {
        let planet = home_body(catalog, &location.planet);
        Self { location, planet }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn planet(&self) -> BodyId {
        self.planet
    }
}

/// Stand-in home body while moving between two bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtificialBody {
    /// Heliocentric ecliptic J2000 position, AU.
    pub position: Vector3<f64>,
    /// Equator → VSOP87 orientation.
    pub orientation: UnitQuaternion<f64>,
    /// Rotation angle, degrees.
    pub sidereal_angle: f64,
    /// Equatorial radius, AU.
    pub radius_au: f64,
    destination: BodyId,
}

fn orientation_of(m: &Matrix4<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation_part(m)))
}

impl ArtificialBody {
    /// Starts as an exact copy of `start`.
    pub fn new(
        start: BodyId,
        destination: BodyId,
        catalog: &dyn PlanetCatalog,
        jd: JulianDate,
        jde: JulianEphemerisDay,
        nutation: bool,
    ) -> Self {
        Self {
            position: catalog.heliocentric_position(start, jde),
            orientation: orientation_of(&catalog.rot_equatorial_to_vsop87(start, jde, nutation)),
            sidereal_angle: catalog.sidereal_time(start, jd, jde, nutation),
            radius_au: catalog.body(start).map_or(0.0, |b| b.radius_au()),
            destination,
        }
    }

    pub fn destination(&self) -> BodyId {
        self.destination
    }

    /// Keeps weight `f1` of the current state and moves the rest towards the
    /// destination's current state.
    pub fn compute_average(
        &mut self,
        f1: f64,
        catalog: &dyn PlanetCatalog,
        jd: JulianDate,
        jde: JulianEphemerisDay,
        nutation: bool,
    ) {
        let f2 = 1.0 - f1;
        let dest = self.destination;

        self.position = self.position * f1 + catalog.heliocentric_position(dest, jde) * f2;

        let target = orientation_of(&catalog.rot_equatorial_to_vsop87(dest, jde, nutation));
        self.orientation = self.orientation.try_slerp(&target, f2, 1.0e-12).unwrap_or(target);

        // Shortest way round the circle.
        let dest_angle = catalog.sidereal_time(dest, jd, jde, nutation);
        let delta = (dest_angle - self.sidereal_angle + 540.0).rem_euclid(360.0) - 180.0;
        self.sidereal_angle += f2 * delta;

        let dest_radius = catalog.body(dest).map_or(0.0, |b| b.radius_au());
        self.radius_au = self.radius_au * f1 + dest_radius * f2;
    }
}

/// Observer moving from one site to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Transit {
    start: Location,
    target: Location,
    current: Location,
    planet: BodyId,
    artificial: Option<ArtificialBody>,
    time_to_go: f64,
    transit_seconds: f64,
}

impl Transit {
    /// Prepares a move lasting `transit_seconds`.
    ///
    /// An unknown start or target planet aborts the move: the transit is born
    /// dead and hands over to the target (or to the start when the target
    /// planet is the unknown one) on the next update.
    pub fn new(
        start: Location,
        target: Location,
        transit_seconds: f64,
        catalog: &dyn PlanetCatalog,
        jd: JulianDate,
        jde: JulianEphemerisDay,
        nutation: bool,
    ) -> Self {
        let mut target = target;
        let mut time_to_go = transit_seconds;
        let mut artificial = None;

        let target_planet = catalog.lookup(&target.planet);
        let planet = if start.planet != target.planet {
            match (catalog.lookup(&start.planet), target_planet) {
                (Ok(from), Ok(to)) => {
                    artificial = Some(ArtificialBody::new(from, to, catalog, jd, jde, nutation));
                    to
                }
                (from, to) => {
                    warn!(
                        from = %start.planet,
                        to = %target.planet,
                        "cannot travel between planets: unknown planet"
                    );
                    time_to_go = -1.0;
                    match to {
                        Ok(to) => to,
                        Err(_) => {
                            target = start.clone();
                            from.unwrap_or_else(|_| home_body(catalog, &start.planet))
                        }
                    }
                }
            }
        } else {
            match target_planet {
                Ok(to) => to,
                Err(_) => {
                    warn!(planet = %target.planet, "unknown target planet, staying put");
                    target = start.clone();
                    time_to_go = -1.0;
                    home_body(catalog, &start.planet)
                }
            }
        };

        Self {
            current: start.clone(),
            start,
            target,
            planet,
            artificial,
            time_to_go,
            transit_seconds,
        }
    }

    pub fn start(&self) -> &Location {
        &self.start
    }

    pub fn target(&self) -> &Location {
        &self.target
    }

    /// Seconds left; `<= 0` once arrived or aborted.
    pub fn time_to_go(&self) -> f64 {
        self.time_to_go
    }

    pub fn artificial_body(&self) -> Option<&ArtificialBody> {
        self.artificial.as_ref()
    }

    fn update(
        &mut self,
        dt: f64,
        catalog: &dyn PlanetCatalog,
        jd: JulianDate,
        jde: JulianEphemerisDay,
        nutation: bool,
    ) {
        if self.time_to_go < 0.0 {
            return;
        }
        self.time_to_go -= dt;
        if self.time_to_go <= 0.0 {
            self.artificial = None;
            self.current = self.target.clone();
            debug!(location = %self.target.id(), "transit arrived");
            return;
        }

        if let Some(body) = self.artificial.as_mut() {
            body.compute_average(self.time_to_go / (self.time_to_go + dt), catalog, jd, jde, nutation);
            self.current.planet = SPACESHIP.into();
            self.current.name = format!("{} -> {}", self.start.planet, self.target.planet);
        } else {
            self.current.name = format!("{} -> {}", self.start.name, self.target.name);
            self.current.planet = self.target.planet.clone();
        }
        self.current.region = String::new();

        let k = 1.0 - self.time_to_go / self.transit_seconds;
        self.current.latitude = self.start.latitude - k * (self.start.latitude - self.target.latitude);
        self.current.longitude =
            self.start.longitude - k * (self.start.longitude - self.target.longitude);
        self.current.altitude = self.start.altitude - k * (self.start.altitude - self.target.altitude);
    }
}

/// Per-frame snapshot of everything the transform layer needs from the
/// observer's home body.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    /// AltAz → equatorial-of-date of the home body.
    pub rot_alt_az_to_equatorial: Matrix4<f64>,
    /// Equatorial-of-date → VSOP87.
    pub rot_equatorial_to_vsop87: Matrix4<f64>,
    /// Heliocentric position of the body centre, AU.
    pub center_vsop87: Vector3<f64>,
    /// Distance of the observer from the body centre, AU.
    pub distance_from_center: f64,
    /// Observer position relative to the body centre, in AltAz axes, AU.
    pub topocentric_offset: Vector3<f64>,
    pub home: BodyId,
    pub has_atmosphere: bool,
    pub is_solar_system_observer: bool,
}

/// Geocentric `(ρ, φ')` of a site on an oblate body: `ρ` in AU and the
/// geocentric latitude in radians.
pub fn geocentric_radius_latitude(
    latitude_deg: f64,
    altitude_m: f64,
    radius_au: f64,
    one_minus_oblateness: f64,
) -> (f64, f64) {
    if radius_au == 0.0 {
        return (0.0, latitude_deg.to_radians());
    }
    let lat = latitude_deg.to_radians();
    let u = (one_minus_oblateness * lat.tan()).atan();
    let alt_fix = altitude_m / (1000.0 * AU_KM * radius_au);
    let rho_sin = one_minus_oblateness * u.sin() + alt_fix * lat.sin();
    let rho_cos = u.cos() + alt_fix * lat.cos();
    let rho = rho_sin.hypot(rho_cos);
    (rho * radius_au, rho_sin.atan2(rho_cos))
}

/// The observer state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Observer {
    Fixed(FixedObserver),
    Transitioning(Transit),
}

impl Observer {
    /// A parked observer at `location`.
    pub fn fixed(location: Location, catalog: &dyn PlanetCatalog) -> Self {
        Self::Fixed(FixedObserver::new(location, catalog))
    }

    /// Advances an in-flight transit by `dt` seconds.
    pub fn update(
        &mut self,
        dt: f64,
        catalog: &dyn PlanetCatalog,
        jd: JulianDate,
        jde: JulianEphemerisDay,
        nutation: bool,
    ) {
        if let Self::Transitioning(t) = self {
            t.update(dt, catalog, jd, jde, nutation);
        }
    }

    pub fn is_observer_life_over(&self) -> bool {
        match self {
            Self::Fixed(_) => false,
            Self::Transitioning(t) => t.time_to_go <= 0.0,
        }
    }

    pub fn is_traveling(&self) -> bool {
        matches!(self, Self::Transitioning(_)) && !self.is_observer_life_over()
    }

    /// The observer that replaces this one once its life is over.
    pub fn next_observer(&self, catalog: &dyn PlanetCatalog) -> Observer {
        match self {
            Self::Fixed(f) => Self::Fixed(f.clone()),
            Self::Transitioning(t) => Self::fixed(t.target.clone(), catalog),
        }
    }

    pub fn current_location(&self) -> &Location {
        match self {
            Self::Fixed(f) => &f.location,
            Self::Transitioning(t) => &t.current,
        }
    }

    /// The real body the observer is on, or heading to.
    pub fn home_planet(&self) -> BodyId {
        match self {
            Self::Fixed(f) => f.planet,
            Self::Transitioning(t) => t.planet,
        }
    }

    fn artificial_body(&self) -> Option<&ArtificialBody> {
        match self {
            Self::Transitioning(t) if !self.is_observer_life_over() => t.artificial.as_ref(),
            _ => None,
        }
    }

    /// Snapshot of the home body for the transform layer.
    pub fn home_state(
        &self,
        catalog: &dyn PlanetCatalog,
        jd: JulianDate,
        jde: JulianEphemerisDay,
        nutation: bool,
    ) -> HomeState {
        let home = self.home_planet();
        let location = self.current_location();
        let body = catalog.body(home);

        let (sidereal, rot_equ, center, radius_au, bf) = match self.artificial_body() {
            Some(a) => (a.sidereal_angle, a.orientation.to_homogeneous(), a.position, a.radius_au, 1.0),
            None => (
                catalog.sidereal_time(home, jd, jde, nutation),
                catalog.rot_equatorial_to_vsop87(home, jde, nutation),
                catalog.heliocentric_position(home, jde),
                body.map_or(0.0, |b| b.radius_au()),
                body.map_or(1.0, |b| b.one_minus_oblateness()),
            ),
        };

        let lat = location.latitude.clamp(-90.0, 90.0);
        let rot_alt_az_to_equatorial =
            zrot((sidereal + location.longitude).to_radians()) * yrot((90.0 - lat).to_radians());

        let (rho, phi_prime) = geocentric_radius_latitude(lat, location.altitude, radius_au, bf);
        let sigma = lat.to_radians() - phi_prime;
        let topocentric_offset = Vector3::new(rho * sigma.sin(), 0.0, rho * sigma.cos());

        HomeState {
            rot_alt_az_to_equatorial,
            rot_equatorial_to_vsop87: rot_equ,
            center_vsop87: center,
            distance_from_center: rho,
            topocentric_offset,
            home,
            has_atmosphere: body.is_some_and(|b| b.has_atmosphere) && self.artificial_body().is_none(),
            is_solar_system_observer: body.is_some_and(|b| b.is_solar_system_observer()),
        }
    }
}
