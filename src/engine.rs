// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The simulation core: clock, ΔT, observer and frame transforms.
//!
//! One [`Core`] owns the simulated instant, the active ΔT model, the current
//! [`Observer`] and the [`TransformEngine`]. A frame is advanced with
//! [`Core::update`], which first steps time (and the observer) and then
//! rebuilds every frame matrix, so queries made after it see the new
//! instant.
//!
//! Configuration mistakes never abort: every fallible setter logs a
//! warning, installs a documented fallback and queues a
//! [`CoreEvent::Fallback`].
//!
//! ```
//! use skyframe::{Core, CoreConfig, ManualClock};
//!
//! let mut config = CoreConfig::default();
//! config.delta_t_algorithm = "NoSuchModel".into();
//! let mut core = Core::builder(config).clock(ManualClock::new(0)).build();
//! assert_eq!(core.current_delta_t_algorithm_key(), "WithoutCorrection");
//!
//! core.set_jd(2_451_545.0);
//! core.add_day();
//! assert_eq!(core.jd().value(), 2_451_546.0);
//! ```

use std::path::Path;
use std::sync::mpsc::{self, Receiver};

use nalgebra::{Matrix4, Point3, Vector3};
use qtty::{Day, Seconds};
use tracing::{debug, info, warn};

use crate::calendar::{parse_time_of_day, CalendarDate};
use crate::clock::{Clock, SystemClock};
use crate::delta_t::{self, DeltaTAlgorithm, DeltaTEngine};
use crate::julian_date_ext::JD_SECOND;
use crate::location::{Location, LocationDb, LocationResolver};
use crate::observer::{Observer, Transit, COLLAPSED_NAME};
use crate::projector::{MaskType, ProjectionType, Projector, ProjectorParams};
use crate::proxy::{CoreCommand, CoreProxy};
use crate::refraction::Refraction;
use crate::settings::{CoreConfig, Settings, StartupTimeMode};
use crate::solar_system::{PlanetCatalog, SolarSystem, EARTH_SIDEREAL_DAY, EARTH_SIDEREAL_YEAR};
use crate::transform::{FrameType, RefractionMode, TransformEngine};
use crate::{JulianDate, JulianEphemerisDay, ModifiedJulianDate};

/// Mean synodic month, days.
pub const SYNODIC_MONTH: f64 = 29.530_588_853;
pub const SIDEREAL_MONTH: f64 = 27.321_661;
pub const TROPICAL_MONTH: f64 = 27.321_582;
pub const DRACONIC_MONTH: f64 = 27.212_220_817;
pub const ANOMALISTIC_MONTH: f64 = 27.554_549_878;
pub const JULIAN_YEAR: f64 = 365.25;
pub const GREGORIAN_YEAR: f64 = 365.242_5;
pub const TROPICAL_YEAR: f64 = 365.242_189_7;
pub const ANOMALISTIC_YEAR: f64 = 365.259_636;
pub const DRACONIC_YEAR: f64 = 346.620_075_883;
/// 223 synodic months.
pub const SAROS: f64 = 6_585.321_347;

/// Sim-time interval after which [`Core::is_time_now`] asks the clock again.
const TIME_NOW_RECHECK: f64 = 0.25 * JD_SECOND;

/// Steps accepted by [`Core::add_units`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarUnit {
    Minute,
    Hour,
    /// Mean solar day of the home body.
    Day,
    Week,
    /// Sidereal rotation of the home body.
    SiderealDay,
    SiderealWeek,
    /// Sidereal orbital period of the home body.
    SiderealYear,
    SynodicMonth,
    SiderealMonth,
    TropicalMonth,
    DraconicMonth,
    AnomalisticMonth,
    JulianYear,
    GregorianYear,
    TropicalYear,
    AnomalisticYear,
    DraconicYear,
    Saros,
    /// 100 Julian years.
    Century,
    /// 1000 Julian years.
    Millennium,
}

enum Step {
    Solar(f64),
    Sidereal(f64),
    SiderealYear,
    Fixed(f64),
}

impl CalendarUnit {
    fn step(self) -> Step {
        match self {
            Self::Minute => Step::Solar(1.0 / 1_440.0),
            Self::Hour => Step::Solar(1.0 / 24.0),
            Self::Day => Step::Solar(1.0),
            Self::Week => Step::Solar(7.0),
            Self::SiderealDay => Step::Sidereal(1.0),
            Self::SiderealWeek => Step::Sidereal(7.0),
            Self::SiderealYear => Step::SiderealYear,
            Self::SynodicMonth => Step::Fixed(SYNODIC_MONTH),
            Self::SiderealMonth => Step::Fixed(SIDEREAL_MONTH),
            Self::TropicalMonth => Step::Fixed(TROPICAL_MONTH),
            Self::DraconicMonth => Step::Fixed(DRACONIC_MONTH),
            Self::AnomalisticMonth => Step::Fixed(ANOMALISTIC_MONTH),
            Self::JulianYear => Step::Fixed(JULIAN_YEAR),
            Self::GregorianYear => Step::Fixed(GREGORIAN_YEAR),
            Self::TropicalYear => Step::Fixed(TROPICAL_YEAR),
            Self::AnomalisticYear => Step::Fixed(ANOMALISTIC_YEAR),
            Self::DraconicYear => Step::Fixed(DRACONIC_YEAR),
            Self::Saros => Step::Fixed(SAROS),
            Self::Century => Step::Fixed(100.0 * JULIAN_YEAR),
            Self::Millennium => Step::Fixed(1_000.0 * JULIAN_YEAR),
        }
    }
}

/// Notifications queued by the core, drained with [`Core::take_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum CoreEvent {
    DateChanged(JulianDate),
    TimeRateChanged(f64),
    LocationChanged(Location),
    DeltaTAlgorithmChanged(DeltaTAlgorithm),
    ProjectionChanged(ProjectionType),
    /// A bad input was replaced by a default.
    Fallback {
        setting: &'static str,
        input: String,
        fallback: String,
    },
}

/// Landscape-side display flags driven by the home body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    pub atmosphere: bool,
    pub landscape: bool,
    pub fog: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            atmosphere: true,
            landscape: true,
            fog: true,
        }
    }
}

/// Assembles a [`Core`] from a config and optional collaborators.
pub struct CoreBuilder {
    config: CoreConfig,
    catalog: Option<Box<dyn PlanetCatalog>>,
    resolver: Option<Box<dyn LocationResolver>>,
    clock: Option<Box<dyn Clock>>,
}

impl CoreBuilder {
    pub fn catalog(mut self, catalog: impl PlanetCatalog + 'static) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }

    pub fn resolver(mut self, resolver: impl LocationResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn build(self) -> Core {
        Core::init(
            self.config,
            self.catalog.unwrap_or_else(|| Box::new(SolarSystem::builtin())),
            self.resolver.unwrap_or_else(|| Box::new(LocationDb::builtin())),
            self.clock.unwrap_or_else(|| Box::new(SystemClock)),
        )
    }
}

/// The time and coordinate engine.
pub struct Core {
    config: CoreConfig,
    catalog: Box<dyn PlanetCatalog>,
    resolver: Box<dyn LocationResolver>,
    clock: Box<dyn Clock>,

    delta_t_engine: DeltaTEngine,
    jd: JulianDate,
    delta_t: Seconds,
    time_rate: f64,
    /// Wall-clock millis and JD at the last explicit date change; real-time
    /// stepping is measured from here.
    sync_millis: i64,
    sync_jd: JulianDate,
    time_now_check: Option<(f64, bool)>,

    observer: Observer,
    default_location_id: String,
    environment: Environment,
    flag_nutation: bool,
    flag_topocentric: bool,

    transform: TransformEngine,
    projection: ProjectionType,
    projector_params: ProjectorParams,
    alt_az_model_view: Matrix4<f64>,

    events: Vec<CoreEvent>,
    commands: Option<Receiver<CoreCommand>>,
}

impl std::fmt::Debug for Core {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Core")
            .field("jd", &self.jd)
            .field("delta_t", &self.delta_t)
            .field("time_rate", &self.time_rate)
            .field("location", self.observer.current_location())
            .field("delta_t_algorithm", &self.delta_t_engine.algorithm())
            .field("projection", &self.projection)
            .finish_non_exhaustive()
    }
}

/// `"auto"` asks for IP geolocation; anything else goes to the resolver.
fn lookup_location(resolver: &dyn LocationResolver, id: &str) -> Option<Location> {
    let found = if id.trim().eq_ignore_ascii_case("auto") {
        resolver.locate_by_ip()
    } else {
        resolver.resolve(id).ok()
    };
    if found.is_none() {
        warn!(location = %id, "could not resolve location");
    }
    found
}

macro_rules! calendar_steps {
    ($($unit:ident => $add:ident, $sub:ident;)+) => {
        $(
            #[doc = concat!("Steps forward one `", stringify!($unit), "`.")]
            pub fn $add(&mut self) {
                self.add_units(CalendarUnit::$unit, 1.0);
            }

            #[doc = concat!("Steps back one `", stringify!($unit), "`.")]
            pub fn $sub(&mut self) {
                self.add_units(CalendarUnit::$unit, -1.0);
            }
        )+
    };
}

impl Core {
    /// Starts a builder with the built-in catalog, site list and system clock.
    pub fn builder(config: CoreConfig) -> CoreBuilder {
        CoreBuilder {
            config,
            catalog: None,
            resolver: None,
            clock: None,
        }
    }

    /// A core configured from a settings store, with built-in collaborators.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::builder(CoreConfig::from_settings(settings)).build()
    }

    fn init(
        config: CoreConfig,
        catalog: Box<dyn PlanetCatalog>,
        resolver: Box<dyn LocationResolver>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let now = clock.now_millis();
        let (location, unresolved) = match lookup_location(resolver.as_ref(), &config.default_location) {
            Some(location) => (location, false),
            None => (Location::last_resort(), true),
        };
        let observer = Observer::fixed(location, catalog.as_ref());
        let mut core = Self {
            catalog,
            resolver,
            delta_t_engine: DeltaTEngine::default(),
            jd: JulianDate::J2000,
            delta_t: Seconds::new(0.0),
            time_rate: JD_SECOND,
            sync_millis: now,
            sync_jd: JulianDate::J2000,
            time_now_check: None,
            observer,
            default_location_id: config.default_location.clone(),
            environment: Environment::default(),
            flag_nutation: config.flag_nutation,
            flag_topocentric: config.flag_topocentric,
            transform: TransformEngine::new(Refraction::new(config.pressure_mbar, config.temperature_c)),
            projection: ProjectionType::default(),
            projector_params: ProjectorParams {
                mask_type: config.viewport_mask,
                flip_horz: config.flip_horz,
                flip_vert: config.flip_vert,
                gravity_labels: config.gravity_labels,
                ..ProjectorParams::default()
            },
            alt_az_model_view: Matrix4::identity(),
            events: Vec::new(),
            commands: None,
            clock,
            config,
        };

        if unresolved {
            let id = core.default_location_id.clone();
            let last = Location::last_resort().id();
            warn!(location = %id, fallback = %last, "using last-resort location");
            core.fallback("init_location/location", &id, last);
        }
        core.apply_home_environment();

        let algorithm = core.config.delta_t_algorithm.clone();
        core.set_current_delta_t_algorithm_key(&algorithm);
        core.delta_t_engine.set_custom_coefficients(core.config.custom_coefficients);
        core.delta_t_engine.set_custom_year(core.config.custom_year);
        core.delta_t_engine.set_custom_ndot(core.config.custom_ndot);
        core.init_ephemeris();

        let projection = core.config.projection.clone();
        core.set_current_projection_type_key(&projection);

        match core.config.startup_time_mode {
            StartupTimeMode::Actual => core.set_time_now(),
            StartupTimeMode::Today => {
                let time = core.config.today_time.clone();
                core.set_today_at(&time);
            }
            StartupTimeMode::Preset => core.set_jd(core.config.preset_sky_time),
        }

        core.update_transform_matrices();
        core
    }

    fn init_ephemeris(&mut self) {
        let check = |flag: bool, path: &str, name: &str| {
            if flag && (path.is_empty() || !Path::new(path).exists()) {
                info!(ephemeris = name, path = %path, "ephemeris file not found, using built-in series");
                false
            } else {
                flag
            }
        };
        let de430 = check(self.config.flag_use_de430, &self.config.de430_path, "DE430");
        let de431 = check(self.config.flag_use_de431, &self.config.de431_path, "DE431");
        self.delta_t_engine.set_de430_active(de430);
        self.delta_t_engine.set_de431_active(de431);
    }

    fn fallback(&mut self, setting: &'static str, input: &str, fallback: String) {
        self.events.push(CoreEvent::Fallback {
            setting,
            input: input.to_string(),
            fallback,
        });
    }

    /// Drains queued notifications.
    pub fn take_events(&mut self) -> Vec<CoreEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Current settings, written back to `settings`.
    pub fn write_settings(&self, settings: &mut Settings) {
        let mut config = self.config.clone();
        config.default_location = self.default_location_id.clone();
        config.delta_t_algorithm = self.delta_t_engine.algorithm_key().to_string();
        config.custom_coefficients = self.delta_t_engine.custom_coefficients();
        config.custom_year = self.delta_t_engine.custom_year();
        config.custom_ndot = self.delta_t_engine.custom_ndot();
        config.flag_nutation = self.flag_nutation;
        config.flag_topocentric = self.flag_topocentric;
        config.projection = self.projection.key().to_string();
        config.viewport_mask = self.projector_params.mask_type;
        config.flip_horz = self.projector_params.flip_horz;
        config.flip_vert = self.projector_params.flip_vert;
        config.gravity_labels = self.projector_params.gravity_labels;
        config.pressure_mbar = self.transform.refraction().pressure_mbar();
        config.temperature_c = self.transform.refraction().temperature_c();
        config.write_to(settings);
    }

    pub fn catalog(&self) -> &dyn PlanetCatalog {
        self.catalog.as_ref()
    }

    // ── frame update ──────────────────────────────────────────────────

    /// Advances one rendered frame of `dt` wall-clock seconds.
    pub fn update(&mut self, dt: f64) {
        self.update_time(dt);
        self.update_transform_matrices();
    }

    /// Steps the clock and the observer.
    pub fn update_time(&mut self, dt: f64) {
        let jd = if self.is_real_time_speed() {
            let elapsed = (self.clock.now_millis() - self.sync_millis) as f64 / 1000.0;
            self.sync_jd.value() + elapsed * JD_SECOND
        } else {
            let jd = self.jd.value() + dt * self.time_rate;
            self.sync_millis = self.clock.now_millis();
            self.sync_jd = JulianDate::new(jd).clamp_to_valid();
            jd
        };
        self.jd = JulianDate::new(jd).clamp_to_valid();
        self.delta_t = self.delta_t_engine.compute_delta_t(self.jd);

        let jde = self.jde();
        self.observer
            .update(dt, self.catalog.as_ref(), self.jd, jde, self.flag_nutation);
        if self.observer.is_observer_life_over() {
            let next = self.observer.next_observer(self.catalog.as_ref());
            self.observer = next;
            debug!(location = %self.observer.current_location().id(), "observer hand-off");
            self.apply_home_environment();
        }
    }

    /// Rebuilds every frame matrix for the current instant and observer.
    pub fn update_transform_matrices(&mut self) {
        let jde = self.jde();
        self.catalog.compute_positions(jde);
        let home = self
            .observer
            .home_state(self.catalog.as_ref(), self.jd, jde, self.flag_nutation);
        // No refraction from inside a SpaceShip, whatever the environment says.
        self.transform
            .set_atmosphere(home.has_atmosphere && self.environment.atmosphere);
        self.transform.update(&home, jde, self.flag_topocentric);
    }

    // ── time ──────────────────────────────────────────────────────────

    pub fn jd(&self) -> JulianDate {
        self.jd
    }

    /// `JD + ΔT/86400`.
    pub fn jde(&self) -> JulianEphemerisDay {
        JulianEphemerisDay::from_days(self.jd.quantity() + self.delta_t.to::<Day>())
    }

    pub fn mjd(&self) -> ModifiedJulianDate {
        self.jd.to_mjd()
    }

    /// ΔT at the current instant.
    pub fn delta_t(&self) -> Seconds {
        self.delta_t
    }

    /// Sets the civil JD, silently clamped to the supported range.
    pub fn set_jd(&mut self, jd: f64) {
        self.jd = JulianDate::new(jd).clamp_to_valid();
        self.delta_t = self.delta_t_engine.compute_delta_t(self.jd);
        self.reset_sync();
        self.events.push(CoreEvent::DateChanged(self.jd));
    }

    /// Sets the dynamical JD; ΔT is evaluated at `jde` itself.
    pub fn set_jde(&mut self, jde: f64) {
        let jd = self.delta_t_engine.jd_from_jde(JulianEphemerisDay::new(jde));
        self.set_jd(jd.value());
    }

    pub fn set_mjd(&mut self, mjd: f64) {
        self.set_jd(ModifiedJulianDate::new(mjd).to::<crate::JD>().value());
    }

    fn reset_sync(&mut self) {
        self.sync_millis = self.clock.now_millis();
        self.sync_jd = self.jd;
        self.time_now_check = None;
    }

    fn now_jd(&self) -> JulianDate {
        JulianDate::from_unix_millis(self.clock.now_millis())
    }

    pub fn set_time_now(&mut self) {
        let now = self.now_jd();
        self.set_jd(now.value());
    }

    /// Whether the simulated instant matches the wall clock within one
    /// second. The clock is only consulted after a quarter second of sim
    /// time has passed since the previous check.
    pub fn is_time_now(&mut self) -> bool {
        let jd = self.jd.value();
        match self.time_now_check {
            Some((last, result)) if (jd - last).abs() <= TIME_NOW_RECHECK => result,
            _ => {
                let result = (jd - self.now_jd().value()).abs() < JD_SECOND;
                self.time_now_check = Some((jd, result));
                result
            }
        }
    }

    /// Today's date (UTC) at `hh:mm[:ss]`; a bad time falls back to now.
    pub fn set_today_at(&mut self, time: &str) {
        match parse_time_of_day(time) {
            Ok(fraction) => {
                let today = CalendarDate::from_julian_day(self.now_jd().value());
                let midnight = CalendarDate::new(today.year, today.month, today.day).to_julian_day();
                self.set_jd(midnight + fraction);
            }
            Err(e) => {
                warn!(error = %e, fallback = "now", "invalid time of day");
                self.fallback("navigation/today_time", time, "now".into());
                self.set_time_now();
            }
        }
    }

    /// Parses an ISO-8601 date; malformed input yields the current time.
    pub fn date_from_iso(&mut self, input: &str) -> JulianDate {
        match CalendarDate::parse_iso8601(input) {
            Ok(date) => date.to_julian_date(),
            Err(e) => {
                warn!(error = %e, fallback = "now", "invalid ISO-8601 date");
                self.fallback("date", input, "now".into());
                self.now_jd()
            }
        }
    }

    pub fn preset_sky_time(&self) -> f64 {
        self.config.preset_sky_time
    }

    pub fn set_preset_sky_time(&mut self, jd: f64) {
        self.config.preset_sky_time = jd;
    }

    pub fn startup_time_mode(&self) -> StartupTimeMode {
        self.config.startup_time_mode
    }

    pub fn set_startup_time_mode(&mut self, mode: StartupTimeMode) {
        self.config.startup_time_mode = mode;
    }

    // ── time rate ─────────────────────────────────────────────────────

    /// Simulated days per wall-clock second.
    pub fn time_rate(&self) -> f64 {
        self.time_rate
    }

    pub fn set_time_rate(&mut self, rate: f64) {
        self.reset_sync();
        self.time_rate = rate;
        self.events.push(CoreEvent::TimeRateChanged(rate));
    }

    fn step_rate_up(rate: f64, factor: f64) -> f64 {
        if rate >= JD_SECOND {
            rate * factor
        } else if rate < -JD_SECOND {
            rate / factor
        } else if rate >= 0.0 {
            JD_SECOND
        } else {
            0.0
        }
    }

    fn step_rate_down(rate: f64, factor: f64) -> f64 {
        if rate > JD_SECOND {
            rate / factor
        } else if rate <= -JD_SECOND {
            rate * factor
        } else if rate <= 0.0 {
            -JD_SECOND
        } else {
            0.0
        }
    }

    pub fn increase_time_speed(&mut self) {
        self.set_time_rate(Self::step_rate_up(self.time_rate, 10.0));
    }

    pub fn decrease_time_speed(&mut self) {
        self.set_time_rate(Self::step_rate_down(self.time_rate, 10.0));
    }

    pub fn increase_time_speed_less(&mut self) {
        self.set_time_rate(Self::step_rate_up(self.time_rate, 2.0));
    }

    pub fn decrease_time_speed_less(&mut self) {
        self.set_time_rate(Self::step_rate_down(self.time_rate, 2.0));
    }

    pub fn set_real_time_speed(&mut self) {
        self.set_time_rate(JD_SECOND);
    }

    pub fn set_zero_time_speed(&mut self) {
        self.set_time_rate(0.0);
    }

    pub fn toggle_real_time_speed(&mut self) {
        if self.is_real_time_speed() {
            self.set_zero_time_speed();
        } else {
            self.set_real_time_speed();
        }
    }

    pub fn is_real_time_speed(&self) -> bool {
        (self.time_rate - JD_SECOND).abs() < 1e-7
    }

    pub fn is_paused(&self) -> bool {
        self.time_rate == 0.0
    }

    // ── calendar arithmetic ───────────────────────────────────────────

    fn home_is_solar_system_observer(&self) -> bool {
        self.catalog
            .body(self.observer.home_planet())
            .is_some_and(|b| b.is_solar_system_observer())
    }

    /// Adds `d` mean solar days of the home body.
    pub fn add_solar_days(&mut self, d: f64) {
        let mut d = d;
        if !self.home_is_solar_system_observer() {
            let day = self.catalog.mean_solar_day(self.observer.home_planet()).abs();
            if day > 0.0 {
                d *= day;
            }
        }
        self.set_jd(self.jd.value() + d);
    }

    /// Adds `d` sidereal rotations of the home body; plain days for the
    /// Solar System Observer.
    pub fn add_sidereal_days(&mut self, d: f64) {
        let mut d = d;
        if !self.home_is_solar_system_observer() {
            d *= self.local_sidereal_day_length();
        }
        self.set_jd(self.jd.value() + d);
    }

    /// Adds `n` sidereal orbital periods of the home body.
    pub fn add_sidereal_years(&mut self, n: f64) {
        let period = self.catalog.sidereal_period(self.observer.home_planet());
        let year = if period > 0.0 && !self.home_is_solar_system_observer() {
            period
        } else {
            EARTH_SIDEREAL_YEAR
        };
        self.set_jd(self.jd.value() + n * year);
    }

    /// Moves time by `n` of `unit`.
    pub fn add_units(&mut self, unit: CalendarUnit, n: f64) {
        match unit.step() {
            Step::Solar(d) => self.add_solar_days(n * d),
            Step::Sidereal(d) => self.add_sidereal_days(n * d),
            Step::SiderealYear => self.add_sidereal_years(n),
            Step::Fixed(d) => self.set_jd(self.jd.value() + n * d),
        }
    }

    calendar_steps! {
        Minute => add_minute, subtract_minute;
        Hour => add_hour, subtract_hour;
        Day => add_day, subtract_day;
        Week => add_week, subtract_week;
        SiderealDay => add_sidereal_day, subtract_sidereal_day;
        SiderealWeek => add_sidereal_week, subtract_sidereal_week;
        SiderealYear => add_sidereal_year, subtract_sidereal_year;
        SynodicMonth => add_synodic_month, subtract_synodic_month;
        SiderealMonth => add_sidereal_month, subtract_sidereal_month;
        TropicalMonth => add_tropical_month, subtract_tropical_month;
        DraconicMonth => add_draconic_month, subtract_draconic_month;
        AnomalisticMonth => add_anomalistic_month, subtract_anomalistic_month;
        JulianYear => add_julian_year, subtract_julian_year;
        GregorianYear => add_gregorian_year, subtract_gregorian_year;
        TropicalYear => add_tropical_year, subtract_tropical_year;
        AnomalisticYear => add_anomalistic_year, subtract_anomalistic_year;
        DraconicYear => add_draconic_year, subtract_draconic_year;
        Saros => add_saros, subtract_saros;
        Century => add_century, subtract_century;
        Millennium => add_millennium, subtract_millennium;
    }

    /// Local sidereal time (radians) at the observer's longitude.
    pub fn local_sidereal_time(&self) -> f64 {
        let home = self.observer.home_planet();
        let theta = self
            .catalog
            .sidereal_time(home, self.jd, self.jde(), self.flag_nutation);
        (theta + self.observer.current_location().longitude)
            .to_radians()
            .rem_euclid(std::f64::consts::TAU)
    }

    /// Sidereal rotation period of the home body, days.
    pub fn local_sidereal_day_length(&self) -> f64 {
        self.catalog
            .body(self.observer.home_planet())
            .map(|b| b.sidereal_day().abs())
            .filter(|d| *d > 0.0)
            .unwrap_or(EARTH_SIDEREAL_DAY)
    }

    // ── ΔT facade ─────────────────────────────────────────────────────

    pub fn delta_t_engine(&self) -> &DeltaTEngine {
        &self.delta_t_engine
    }

    pub fn current_delta_t_algorithm(&self) -> DeltaTAlgorithm {
        self.delta_t_engine.algorithm()
    }

    pub fn current_delta_t_algorithm_key(&self) -> &'static str {
        self.delta_t_engine.algorithm_key()
    }

    /// Selects a ΔT model by key; unknown keys install `WithoutCorrection`.
    pub fn set_current_delta_t_algorithm_key(&mut self, key: &str) {
        if let Err(e) = self.delta_t_engine.set_algorithm_key(key) {
            let fallback = DeltaTAlgorithm::FALLBACK.key();
            warn!(error = %e, key = %key, fallback = %fallback, "unknown ΔT algorithm");
            self.fallback("navigation/time_correction_algorithm", key, fallback.into());
        }
        self.refresh_delta_t();
        self.events
            .push(CoreEvent::DeltaTAlgorithmChanged(self.delta_t_engine.algorithm()));
    }

    pub fn set_current_delta_t_algorithm(&mut self, algorithm: DeltaTAlgorithm) {
        self.delta_t_engine.set_algorithm(algorithm);
        self.refresh_delta_t();
        self.events.push(CoreEvent::DeltaTAlgorithmChanged(algorithm));
    }

    pub fn current_delta_t_algorithm_description(&self) -> String {
        self.delta_t_engine.description()
    }

    pub fn set_delta_t_custom_coefficients(&mut self, coefficients: [f64; 3]) {
        self.delta_t_engine.set_custom_coefficients(coefficients);
        self.refresh_delta_t();
    }

    pub fn set_delta_t_custom_year(&mut self, year: f64) {
        self.delta_t_engine.set_custom_year(year);
        self.refresh_delta_t();
    }

    pub fn set_delta_t_custom_ndot(&mut self, ndot: f64) {
        self.delta_t_engine.set_custom_ndot(ndot);
        self.refresh_delta_t();
    }

    /// `"*"` outside the model's valid years, `"?"` when unknown.
    pub fn delta_t_valid_range_marker(&self) -> &'static str {
        self.delta_t_engine.valid_range_marker(self.jd)
    }

    pub fn delta_t_standard_error(&self) -> Option<Seconds> {
        delta_t::standard_error(self.jd)
    }

    fn refresh_delta_t(&mut self) {
        self.delta_t = self.delta_t_engine.compute_delta_t(self.jd);
    }

    // ── observer and location ─────────────────────────────────────────

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn current_location(&self) -> &Location {
        self.observer.current_location()
    }

    fn resolve_location(&self, id: &str) -> Option<Location> {
        lookup_location(self.resolver.as_ref(), id)
    }

    fn resolve_default_location(&mut self) -> Location {
        let id = self.default_location_id.clone();
        self.resolve_location(&id).unwrap_or_else(|| {
            let last = Location::last_resort();
            warn!(location = %id, fallback = %last.id(), "using last-resort location");
            self.fallback("init_location/location", &id, last.id());
            last
        })
    }

    /// Moves the observer to `target` over `duration` seconds, or
    /// `duration_if_planet_change` when the body changes. A non-positive
    /// duration moves at once.
    pub fn move_observer_to(
        &mut self,
        target: Location,
        duration: f64,
        duration_if_planet_change: f64,
    ) {
        let current = self.observer.current_location().clone();
        let d = if current.planet != target.planet {
            duration_if_planet_change
        } else {
            duration
        };

        if d > 0.0 {
            let mut start = current;
            if self.observer.is_traveling() {
                start.name = COLLAPSED_NAME.into();
            }
            let jde = self.jde();
            self.observer = Observer::Transitioning(Transit::new(
                start,
                target.clone(),
                d,
                self.catalog.as_ref(),
                self.jd,
                jde,
                self.flag_nutation,
            ));
        } else {
            self.observer = Observer::fixed(target.clone(), self.catalog.as_ref());
            self.apply_home_environment();
        }
        debug!(location = %target.id(), duration = d, "moving observer");
        self.events.push(CoreEvent::LocationChanged(target));
    }

    /// Resolves `id` and moves there; unknown ids are ignored with a warning.
    pub fn move_observer_to_id(&mut self, id: &str, duration: f64, duration_if_planet_change: f64) {
        match self.resolve_location(id) {
            Some(target) => self.move_observer_to(target, duration, duration_if_planet_change),
            None => self.fallback("location", id, self.current_location().id()),
        }
    }

    /// Travels back to the default location.
    pub fn return_to_home(&mut self) {
        let home = self.resolve_default_location();
        self.move_observer_to(home, 1.0, 1.0);
    }

    /// Jumps to the default location and restores the home environment.
    pub fn return_to_default_location(&mut self) {
        let home = self.resolve_default_location();
        self.move_observer_to(home, 0.0, 0.0);
    }

    pub fn default_location_id(&self) -> &str {
        &self.default_location_id
    }

    /// Changes the default site; ids that do not resolve are rejected.
    pub fn set_default_location_id(&mut self, id: &str) {
        if self.resolve_location(id).is_some() {
            self.default_location_id = id.to_string();
        } else {
            let keep = self.default_location_id.clone();
            self.fallback("init_location/location", id, keep);
        }
    }

    fn apply_home_environment(&mut self) {
        let body = self.catalog.body(self.observer.home_planet());
        let solar_system_observer = body.is_some_and(|b| b.is_solar_system_observer());
        let shown = body.is_some_and(|b| b.has_atmosphere) && !solar_system_observer;
        self.environment = Environment {
            atmosphere: shown,
            landscape: !solar_system_observer,
            fog: shown,
        };
    }

    // ── flags ─────────────────────────────────────────────────────────

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn set_flag_atmosphere(&mut self, on: bool) {
        self.environment.atmosphere = on;
        self.transform.set_atmosphere(on);
    }

    pub fn set_flag_landscape(&mut self, on: bool) {
        self.environment.landscape = on;
    }

    pub fn set_flag_fog(&mut self, on: bool) {
        self.environment.fog = on;
    }

    pub fn flag_use_nutation(&self) -> bool {
        self.flag_nutation
    }

    pub fn set_flag_use_nutation(&mut self, on: bool) {
        self.flag_nutation = on;
    }

    pub fn flag_use_topocentric_coordinates(&self) -> bool {
        self.flag_topocentric
    }

    pub fn set_flag_use_topocentric_coordinates(&mut self, on: bool) {
        self.flag_topocentric = on;
    }

    pub fn refraction(&self) -> &Refraction {
        self.transform.refraction()
    }

    pub fn set_refraction(&mut self, refraction: Refraction) {
        self.transform.set_refraction(refraction);
    }

    // ── transforms and projection ─────────────────────────────────────

    pub fn transform(&self) -> &TransformEngine {
        &self.transform
    }

    /// Orientation of AltAz in the view frame.
    pub fn alt_az_model_view(&self) -> &Matrix4<f64> {
        &self.alt_az_model_view
    }

    pub fn set_alt_az_model_view(&mut self, m: Matrix4<f64>) {
        self.alt_az_model_view = m;
    }

    /// Points the view at J2000 direction `pos` with `up` (also J2000).
    pub fn look_at_j2000(&mut self, pos: &Vector3<f64>, up: &Vector3<f64>) {
        let f = self.transform.j2000_to_alt_az(pos, RefractionMode::Off);
        let u = self.transform.j2000_to_alt_az(up, RefractionMode::Off);
        self.alt_az_model_view = Matrix4::look_at_rh(&Point3::origin(), &Point3::from(f), &u);
    }

    pub fn current_projection_type(&self) -> ProjectionType {
        self.projection
    }

    pub fn current_projection_type_key(&self) -> &'static str {
        self.projection.key()
    }

    pub fn set_current_projection_type(&mut self, projection: ProjectionType) {
        self.projection = projection;
        self.projector_params.fov = self.projector_params.fov.min(projection.max_fov());
        self.events.push(CoreEvent::ProjectionChanged(projection));
    }

    /// Selects a projection by key; unknown keys install Stereographic.
    pub fn set_current_projection_type_key(&mut self, key: &str) {
        let projection = ProjectionType::from_key(key).unwrap_or_else(|e| {
            let fallback = ProjectionType::Stereographic;
            warn!(error = %e, key = %key, fallback = %fallback, "unknown projection type");
            self.fallback("projection/type", key, fallback.key().into());
            fallback
        });
        self.set_current_projection_type(projection);
    }

    pub fn projector_params(&self) -> &ProjectorParams {
        &self.projector_params
    }

    pub fn set_projector_params(&mut self, params: ProjectorParams) {
        self.projector_params = params;
    }

    pub fn window_has_been_resized(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.projector_params.set_viewport(x, y, width, height);
    }

    /// Field of view in degrees, capped by the projection.
    pub fn set_fov(&mut self, fov: f64) {
        self.projector_params.fov = fov.clamp(f64::EPSILON, self.projection.max_fov());
    }

    pub fn set_mask_type(&mut self, mask: MaskType) {
        self.projector_params.mask_type = mask;
    }

    pub fn set_flag_gravity_labels(&mut self, on: bool) {
        self.projector_params.gravity_labels = on;
    }

    pub fn set_default_angle_for_gravity_text(&mut self, degrees: f64) {
        self.projector_params.default_angle_for_gravity_text = degrees;
    }

    pub fn flip_horz(&self) -> bool {
        self.projector_params.flip_horz
    }

    pub fn set_flip_horz(&mut self, on: bool) {
        self.projector_params.flip_horz = on;
    }

    pub fn flip_vert(&self) -> bool {
        self.projector_params.flip_vert
    }

    pub fn set_flip_vert(&mut self, on: bool) {
        self.projector_params.flip_vert = on;
    }

    /// A projector for vectors in `frame`, with the current projection
    /// and viewport.
    pub fn get_projection(&self, frame: FrameType, mode: RefractionMode) -> Projector {
        let model_view = self.transform.model_view(frame, mode, &self.alt_az_model_view);
        Projector::new(self.projection, model_view, self.projector_params)
    }

    // ── cross-thread commands ─────────────────────────────────────────

    /// A handle other threads use to queue commands. Replaces any
    /// previous channel.
    pub fn proxy(&mut self) -> CoreProxy {
        let (tx, rx) = mpsc::channel();
        self.commands = Some(rx);
        CoreProxy::new(tx)
    }

    /// Applies every queued command; returns how many ran.
    pub fn process_commands(&mut self) -> usize {
        let Some(rx) = self.commands.take() else {
            return 0;
        };
        let pending: Vec<CoreCommand> = rx.try_iter().collect();
        self.commands = Some(rx);
        let count = pending.len();
        for command in pending {
            self.apply(command);
        }
        count
    }

    fn apply(&mut self, command: CoreCommand) {
        match command {
            CoreCommand::SetJd(jd) => self.set_jd(jd),
            CoreCommand::SetJde(jde) => self.set_jde(jde),
            CoreCommand::SetTimeNow => self.set_time_now(),
            CoreCommand::SetTimeRate(rate) => self.set_time_rate(rate),
            CoreCommand::AddUnits(unit, n) => self.add_units(unit, n),
            CoreCommand::MoveObserverTo {
                location,
                duration,
                duration_if_planet_change,
            } => self.move_observer_to(location, duration, duration_if_planet_change),
            CoreCommand::MoveObserverToId {
                id,
                duration,
                duration_if_planet_change,
            } => self.move_observer_to_id(&id, duration, duration_if_planet_change),
            CoreCommand::ReturnToHome => self.return_to_home(),
            CoreCommand::SetDeltaTAlgorithm(key) => self.set_current_delta_t_algorithm_key(&key),
            CoreCommand::SetProjection(key) => self.set_current_projection_type_key(&key),
            CoreCommand::SetFlagNutation(on) => self.set_flag_use_nutation(on),
            CoreCommand::SetFlagTopocentric(on) => self.set_flag_use_topocentric_coordinates(on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::observer::SPACESHIP;

    // 2024-01-01T00:00:00Z
    const MILLIS_2024: i64 = 1_704_067_200_000;

    fn core_with(config: CoreConfig) -> (Core, ManualClock) {
        let clock = ManualClock::new(MILLIS_2024);
        let core = Core::builder(config).clock(clock.clone()).build();
        (core, clock)
    }

    fn core() -> (Core, ManualClock) {
        core_with(CoreConfig::default())
    }

    #[test]
    fn starts_at_system_time() {
        let (core, _) = core();
        assert!((core.jd().value() - 2_460_310.5).abs() < 1e-6);
        assert_eq!(core.current_location().id(), "Paris, France");
        assert_eq!(core.current_delta_t_algorithm_key(), "EspenakMeeus");
        assert!(core.is_real_time_speed());
    }

    #[test]
    fn preset_startup_mode() {
        let mut config = CoreConfig::default();
        config.startup_time_mode = StartupTimeMode::Preset;
        config.preset_sky_time = 2_400_000.5;
        let (core, _) = core_with(config);
        assert_eq!(core.jd().value(), 2_400_000.5);
    }

    #[test]
    fn today_startup_mode() {
        let mut config = CoreConfig::default();
        config.startup_time_mode = StartupTimeMode::Today;
        config.today_time = "22:00".into();
        let (core, _) = core_with(config);
        assert!((core.jd().value() - (2_460_310.5 + 22.0 / 24.0)).abs() < 1e-6);
    }

    #[test]
    fn jde_is_jd_plus_delta_t() {
        let (mut core, _) = core();
        core.set_jd(2_451_545.0);
        assert_eq!(core.jd().value(), 2_451_545.0);
        let expected = core.jd().value() + core.delta_t().value() / 86_400.0;
        assert!((core.jde().value() - expected).abs() < 1e-9);
        assert!(core.delta_t().value() > 60.0 && core.delta_t().value() < 70.0);
    }

    #[test]
    fn set_jde_back_solves() {
        let (mut core, _) = core();
        core.set_jde(2_451_545.0);
        assert!((core.jde().value() - 2_451_545.0).abs() < 1e-8);
    }

    #[test]
    fn mjd_roundtrip() {
        let (mut core, _) = core();
        core.set_mjd(51_544.5);
        assert!((core.jd().value() - 2_451_545.0).abs() < 1e-9);
        assert!((core.mjd().value() - 51_544.5).abs() < 1e-9);
    }

    #[test]
    fn clamps_out_of_range_dates() {
        let (mut core, _) = core();
        core.set_jd(1e9);
        assert_eq!(core.jd().value(), 38_245_309.499_988);
        core.set_jd(-1e9);
        assert_eq!(core.jd().value(), -34_803_211.500_012);
    }

    #[test]
    fn time_speed_steps() {
        let (mut core, _) = core();
        core.set_zero_time_speed();
        assert!(core.is_paused());
        let mut expected = JD_SECOND;
        core.increase_time_speed();
        assert_eq!(core.time_rate(), JD_SECOND);
        for _ in 0..4 {
            core.increase_time_speed();
            expected *= 10.0;
            assert!((core.time_rate() - expected).abs() < 1e-15);
        }
        core.set_zero_time_speed();
        core.decrease_time_speed();
        assert_eq!(core.time_rate(), -JD_SECOND);
        core.decrease_time_speed();
        assert!((core.time_rate() + 10.0 * JD_SECOND).abs() < 1e-15);
        core.set_time_rate(-JD_SECOND);
        core.increase_time_speed();
        assert_eq!(core.time_rate(), 0.0);
        core.increase_time_speed_less();
        core.increase_time_speed_less();
        assert!((core.time_rate() - 2.0 * JD_SECOND).abs() < 1e-15);
        core.toggle_real_time_speed();
        assert!(core.is_real_time_speed());
        core.toggle_real_time_speed();
        assert!(core.is_paused());
    }

    #[test]
    fn real_time_follows_wall_clock() {
        let (mut core, clock) = core();
        let start = core.jd().value();
        clock.advance_millis(10_000);
        core.update(0.016);
        assert!((core.jd().value() - (start + 10.0 * JD_SECOND)).abs() < 1e-9);
    }

    #[test]
    fn accelerated_time_uses_rate() {
        let (mut core, _) = core();
        core.set_jd(2_451_545.0);
        core.set_time_rate(1.0);
        core.update(0.5);
        assert!((core.jd().value() - 2_451_545.5).abs() < 1e-9);
    }

    #[test]
    fn time_now_check_is_cached() {
        let (mut core, clock) = core();
        assert!(core.is_time_now());
        // Wall clock moves but sim time does not: cached answer stands.
        clock.advance_millis(60_000);
        assert!(core.is_time_now());
        core.set_jd(core.jd().value() + JD_SECOND);
        assert!(!core.is_time_now());
    }

    #[test]
    fn solar_and_sidereal_steps_on_earth() {
        let (mut core, _) = core();
        core.set_jd(2_451_545.0);
        core.add_day();
        assert_eq!(core.jd().value(), 2_451_546.0);
        core.subtract_day();
        core.add_sidereal_day();
        assert!((core.jd().value() - (2_451_545.0 + EARTH_SIDEREAL_DAY)).abs() < 1e-6);
        core.set_jd(2_451_545.0);
        core.add_synodic_month();
        assert!((core.jd().value() - (2_451_545.0 + SYNODIC_MONTH)).abs() < 1e-9);
        core.set_jd(2_451_545.0);
        core.add_sidereal_year();
        assert!((core.jd().value() - (2_451_545.0 + EARTH_SIDEREAL_YEAR)).abs() < 1e-6);
        core.set_jd(2_451_545.0);
        core.add_units(CalendarUnit::Hour, 6.0);
        assert!((core.jd().value() - 2_451_545.25).abs() < 1e-9);
    }

    #[test]
    fn solar_day_on_mars_is_longer() {
        let (mut core, _) = core();
        let gale = Location::on_earth("Gale", "", -5.4, 137.8, 0.0).with_planet("Mars");
        core.move_observer_to(gale, 0.0, 0.0);
        core.set_jd(2_451_545.0);
        core.add_day();
        let sol = core.jd().value() - 2_451_545.0;
        assert!((sol - 1.0275).abs() < 0.001, "sol = {sol}");
        assert!(core.environment().landscape);
    }

    #[test]
    fn unknown_keys_fall_back_with_events() {
        let (mut core, _) = core();
        core.set_current_delta_t_algorithm_key("not-a-real-key");
        assert_eq!(core.current_delta_t_algorithm(), DeltaTAlgorithm::WithoutCorrection);
        assert_eq!(core.delta_t().value(), 0.0);
        core.set_current_projection_type_key("ProjectionBogus");
        assert_eq!(core.current_projection_type(), ProjectionType::Stereographic);
        let events = core.take_events();
        let fallbacks = events
            .iter()
            .filter(|e| matches!(e, CoreEvent::Fallback { .. }))
            .count();
        assert_eq!(fallbacks, 2);
        assert!(core.take_events().is_empty());
    }

    #[test]
    fn unknown_default_location_uses_last_resort() {
        let mut config = CoreConfig::default();
        config.default_location = "Atlantis".into();
        let (core, _) = core_with(config);
        assert_eq!(core.current_location().id(), "Paris, France");
    }

    #[test]
    fn transit_hands_off_to_fixed_observer() {
        let (mut core, _) = core();
        core.set_zero_time_speed();
        let tokyo = core.resolver.resolve("Tokyo, Japan").unwrap();
        core.move_observer_to(tokyo.clone(), 2.0, 5.0);
        assert!(core.observer().is_traveling());
        core.update(1.0);
        assert!(core.current_location().name.contains("->"));
        core.update(1.5);
        assert!(matches!(core.observer(), Observer::Fixed(_)));
        assert_eq!(core.current_location(), &tokyo);
    }

    #[test]
    fn chained_moves_collapse_start_name() {
        let (mut core, _) = core();
        core.set_zero_time_speed();
        let a = Location::on_earth("A", "", 10.0, 10.0, 0.0);
        let b = Location::on_earth("B", "", 20.0, 20.0, 0.0);
        core.move_observer_to(a, 10.0, 10.0);
        core.update(1.0);
        core.move_observer_to(b, 10.0, 10.0);
        match core.observer() {
            Observer::Transitioning(t) => assert_eq!(t.start().name, COLLAPSED_NAME),
            other => panic!("unexpected observer {other:?}"),
        }
    }

    #[test]
    fn interplanetary_move_uses_spaceship_and_planet_duration() {
        let (mut core, _) = core();
        core.set_zero_time_speed();
        let mars = Location::on_earth("Gale", "", -5.4, 137.8, 0.0).with_planet("Mars");
        core.move_observer_to(mars, 1.0, 10.0);
        core.update(2.0);
        assert_eq!(core.current_location().planet, SPACESHIP);
        core.update(9.0);
        assert_eq!(core.current_location().planet, "Mars");
    }

    #[test]
    fn solar_system_observer_disables_environment() {
        let (mut core, _) = core();
        let sso = Location::on_earth("Above", "", 90.0, 0.0, 0.0)
            .with_planet(crate::body::SOLAR_SYSTEM_OBSERVER);
        core.move_observer_to(sso, 0.0, 0.0);
        let env = core.environment();
        assert!(!env.atmosphere && !env.landscape && !env.fog);
        core.set_jd(2_451_545.0);
        core.add_day();
        assert_eq!(core.jd().value(), 2_451_546.0);
        core.add_sidereal_day();
        assert_eq!(core.jd().value(), 2_451_547.0);
        core.subtract_sidereal_week();
        assert_eq!(core.jd().value(), 2_451_540.0);
        core.set_jd(2_451_546.0);
        core.add_sidereal_year();
        assert!((core.jd().value() - (2_451_546.0 + EARTH_SIDEREAL_YEAR)).abs() < 1e-6);
    }

    #[test]
    fn default_location_must_resolve() {
        let (mut core, _) = core();
        core.set_default_location_id("Atlantis");
        assert_eq!(core.default_location_id(), "Paris, France");
        core.set_default_location_id("Tokyo, Japan");
        core.return_to_default_location();
        assert_eq!(core.current_location().name, "Tokyo");
    }

    #[test]
    fn projection_follows_current_type() {
        let (mut core, _) = core();
        core.set_current_projection_type(ProjectionType::Perspective);
        let p = core.get_projection(FrameType::AltAz, RefractionMode::Off);
        assert_eq!(p.projection_type(), ProjectionType::Perspective);
        // Default model view looks down −z of AltAz, the nadir.
        let win = p.project(&-Vector3::z()).unwrap();
        assert!((win.x - 128.0).abs() < 1e-9);
    }

    #[test]
    fn look_at_points_view_axis() {
        let (mut core, _) = core();
        let target = Vector3::new(0.3, -0.2, 0.9).normalize();
        core.look_at_j2000(&target, &Vector3::z());
        let p = core.get_projection(FrameType::J2000, RefractionMode::Off);
        let win = p.project(&target).unwrap();
        assert!((win.x - 128.0).abs() < 1e-6 && (win.y - 128.0).abs() < 1e-6);
    }

    #[test]
    fn settings_roundtrip() {
        let (mut core, _) = core();
        core.set_current_delta_t_algorithm_key("MorrisonStephenson2004");
        core.set_flag_use_nutation(false);
        let mut settings = Settings::new();
        core.write_settings(&mut settings);
        let config = CoreConfig::from_settings(&settings);
        assert_eq!(config.delta_t_algorithm, "MorrisonStephenson2004");
        assert!(!config.flag_nutation);
    }

    #[test]
    fn date_from_iso_falls_back_to_now() {
        let (mut core, _) = core();
        let jd = core.date_from_iso("2000-01-01T12:00:00");
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
        let now = core.date_from_iso("yesterday-ish");
        assert!((now.value() - 2_460_310.5).abs() < 1e-6);
    }
}
