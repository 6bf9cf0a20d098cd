// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Planetarium time and coordinate-frame engine.
//!
//! `skyframe` keeps a simulated instant, converts it between the civil and
//! dynamical time axes with one of ~30 historical ΔT models, tracks who is
//! observing from where, and derives every coordinate-frame matrix a sky
//! renderer needs from that state.
//!
//! # Core types
//!
//! - [`Time<S>`]: generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`], [`JulianEphemerisDay`], [`ModifiedJulianDate`]: aliases
//!   for `Time<JD>`, `Time<JDE>` and `Time<MJD>`.
//! - [`DeltaTEngine`] / [`DeltaTAlgorithm`]: ΔT model selection and evaluation.
//! - [`Observer`]: fixed site or transit between sites.
//! - [`TransformEngine`]: per-frame matrices between [`FrameType`]s, with
//!   optional [`Refraction`].
//! - [`Projector`]: one of nine [`ProjectionType`] surfaces over a model-view.
//! - [`Core`]: the orchestrator tying all of the above to a clock.
//!
//! # Time axes
//!
//! | Marker | Scale | Axis |
//! |--------|-------|------|
//! | [`JD`] | Julian Date | [`Universal`] |
//! | [`MJD`] | Modified Julian Date | [`Universal`] |
//! | [`JDE`] | Julian Ephemeris Day | [`Dynamical`] |
//!
//! Conversions are only free within one axis (`Time::to`). Crossing axes
//! takes a ΔT value, so it goes through [`DeltaTEngine::jde_from_jd`] and
//! [`DeltaTEngine::jd_from_jde`].
//!
//! # Example
//!
//! ```
//! use skyframe::{Core, CoreConfig, FrameType, ManualClock, RefractionMode};
//! use nalgebra::Vector3;
//!
//! let mut core = Core::builder(CoreConfig::default())
//!     .clock(ManualClock::new(946_728_000_000)) // 2000-01-01T12:00Z
//!     .build();
//! core.update(0.0);
//!
//! // The north celestial pole stands at the site's latitude.
//! let pole = core
//!     .transform()
//!     .j2000_to_alt_az(&Vector3::z(), RefractionMode::Off);
//! let altitude = pole.z.asin().to_degrees();
//! assert!((altitude - core.current_location().latitude).abs() < 0.5);
//!
//! let projector = core.get_projection(FrameType::J2000, RefractionMode::Auto);
//! assert!(projector.pixel_per_rad() > 0.0);
//! ```

mod body;
pub mod calendar;
mod clock;
pub mod delta_t;
mod engine;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod location;
pub mod nutation;
mod observer;
pub mod precession;
mod projector;
mod proxy;
mod refraction;
pub mod rotation;
pub(crate) mod scales;
mod settings;
pub mod sidereal;
mod solar_system;
mod transform;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use body::{Body, BodyId, BodyKind, KeplerOrbit, RotationElements, AU_KM, SOLAR_SYSTEM_OBSERVER};
pub use calendar::CalendarDate;
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{
    CalendarUnit, Core, CoreBuilder, CoreEvent, Environment, ANOMALISTIC_MONTH, ANOMALISTIC_YEAR,
    DRACONIC_MONTH, DRACONIC_YEAR, GREGORIAN_YEAR, JULIAN_YEAR, SAROS, SIDEREAL_MONTH,
    SYNODIC_MONTH, TROPICAL_MONTH, TROPICAL_YEAR,
};
pub use delta_t::{DeltaTAlgorithm, DeltaTEngine, OutOfRangePolicy};
pub use error::{Error, Result};
pub use instant::{Time, TimeScale};
pub use julian_date_ext::{JD_DAY, JD_HOUR, JD_MINUTE, JD_SECOND, ONE_OVER_JD_SECOND};
pub use location::{Location, LocationDb, LocationResolver};
pub use observer::{ArtificialBody, FixedObserver, HomeState, Observer, Transit, COLLAPSED_NAME, SPACESHIP};
pub use projector::{MaskType, ModelView, ProjectionType, Projector, ProjectorParams};
pub use proxy::{CoreCommand, CoreProxy};
pub use refraction::Refraction;
pub use scales::{Dynamical, TimeAxis, Universal, JD, JDE, MJD};
pub use settings::{keys as setting_keys, CoreConfig, Settings, StartupTimeMode};
pub use solar_system::{PlanetCatalog, SolarSystem, EARTH_SIDEREAL_DAY, EARTH_SIDEREAL_YEAR};
pub use transform::{fixed_frames, FixedFrames, FrameType, RefractionMode, TransformEngine, TransformState};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date on the universal (civil) axis.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Julian Ephemeris Day on the dynamical axis, `JD + ΔT/86400`.
///
/// This is a type alias for [`Time<JDE>`].
pub type JulianEphemerisDay = Time<JDE>;

/// Modified Julian Date, `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
