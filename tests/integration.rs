// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use skyframe::{
    Body, BodyKind, CalendarUnit, Core, CoreConfig, CoreEvent, DeltaTAlgorithm, DeltaTEngine,
    JulianDate, Location, ManualClock, Observer, PlanetCatalog, RefractionMode, RotationElements,
    SolarSystem, StartupTimeMode, JD_SECOND, SYNODIC_MONTH,
};

/// 2024-01-01T00:00:00Z.
const NOW_MILLIS: i64 = 1_704_067_200_000;

fn core_at_j2000() -> Core {
    let config = CoreConfig {
        startup_time_mode: StartupTimeMode::Preset,
        preset_sky_time: 2_451_545.0,
        ..CoreConfig::default()
    };
    Core::builder(config)
        .clock(ManualClock::new(NOW_MILLIS))
        .build()
}

#[test]
fn set_jd_roundtrips_and_jde_adds_delta_t() {
    let mut core = core_at_j2000();
    for jd in [2_451_545.0, 2_299_160.5, 1_721_423.5, 2_460_310.25] {
        core.set_jd(jd);
        assert_eq!(core.jd().value(), jd);
        let expected = jd + core.delta_t().value() / 86_400.0;
        assert!((core.jde().value() - expected).abs() < 1e-9, "jd {jd}");
    }
}

#[test]
fn delta_t_is_raw_formula_plus_lunar_term_unless_moon_is_ignored() {
    let jd = JulianDate::new(2_378_496.5); // 1800
    for &algorithm in DeltaTAlgorithm::ALL {
        if algorithm == DeltaTAlgorithm::WithoutCorrection {
            continue;
        }
        let engine = DeltaTEngine::new(algorithm);
        let raw = engine.raw_delta_t(jd);
        let expected = if algorithm.dont_use_moon() {
            raw
        } else {
            raw + engine.lunar_secular_correction(jd, engine.ndot())
        };
        assert_eq!(
            engine.compute_delta_t(jd).value(),
            expected.value(),
            "{}",
            algorithm.key()
        );
    }
}

#[test]
fn unknown_delta_t_key_falls_back_to_zero() {
    let mut core = core_at_j2000();
    core.take_events();
    core.set_current_delta_t_algorithm_key("not-a-real-key");
    assert_eq!(core.current_delta_t_algorithm(), DeltaTAlgorithm::WithoutCorrection);
    assert!(core
        .take_events()
        .iter()
        .any(|e| matches!(e, CoreEvent::Fallback { input, .. } if input == "not-a-real-key")));

    for jd in [-1_000_000.0, 2_451_545.0, 5_000_000.0] {
        core.set_jd(jd);
        assert_eq!(core.delta_t().value(), 0.0);
    }
}

#[test]
fn set_jd_clamps_to_supported_range() {
    let mut core = core_at_j2000();
    core.set_jd(1e9);
    assert_eq!(core.jd().value(), 38_245_309.499_988);
    core.set_jd(-1e9);
    assert_eq!(core.jd().value(), -34_803_211.500_012);
}

#[test]
fn increasing_time_speed_from_pause_steps_by_decades() {
    let mut core = core_at_j2000();
    core.set_zero_time_speed();
    let mut expected = JD_SECOND;
    core.increase_time_speed();
    assert_eq!(core.time_rate(), expected);
    for _ in 0..5 {
        let before = core.time_rate();
        core.increase_time_speed();
        expected *= 10.0;
        assert!(core.time_rate() > before);
        assert!((core.time_rate() / expected - 1.0).abs() < 1e-12);
    }
}

#[test]
fn alt_az_and_equatorial_matrices_are_exact_transposes() {
    let mut core = core_at_j2000();
    for jd in [2_451_545.0, 2_460_310.5, 2_305_447.5] {
        core.set_jd(jd);
        core.update_transform_matrices();
        let state = core.transform().state();
        assert_eq!(
            state.alt_az_to_equinox_equ.transpose(),
            state.equinox_equ_to_alt_az
        );
        assert_eq!(
            state.equinox_equ_to_j2000.transpose(),
            state.j2000_to_equinox_equ
        );
        assert_eq!(state.j2000_to_alt_az.transpose(), state.alt_az_to_j2000);
    }
}

#[test]
fn transit_hands_off_to_exactly_one_fixed_observer() {
    let mut core = core_at_j2000();
    core.set_zero_time_speed();
    let tokyo = Location::on_earth("Tokyo", "Japan", 35.6895, 139.6917, 40.0);
    core.move_observer_to(tokyo.clone(), 2.0, 2.0);
    assert!(matches!(core.observer(), Observer::Transitioning(_)));

    core.update(1.0);
    assert!(core.observer().is_traveling());
    assert_ne!(core.current_location(), &tokyo);

    core.update(1.5);
    assert!(matches!(core.observer(), Observer::Fixed(_)));
    assert_eq!(core.current_location(), &tokyo);
}

#[test]
fn spaceship_transit_switches_refraction_off() {
    let mut core = core_at_j2000();
    core.set_zero_time_speed();
    core.update(0.0);
    assert!(core.environment().atmosphere);
    assert!(core.transform().refracts(RefractionMode::Auto));

    let gale = Location::on_earth("Gale", "", -5.4, 137.8, 0.0).with_planet("Mars");
    core.move_observer_to(gale.clone(), 10.0, 10.0);
    core.update(1.0);
    match core.observer() {
        Observer::Transitioning(transit) => assert!(transit.artificial_body().is_some()),
        Observer::Fixed(_) => panic!("transit ended early"),
    }
    assert!(!core.transform().has_atmosphere());
    assert!(!core.transform().refracts(RefractionMode::Auto));
    assert!(core.transform().refracts(RefractionMode::On));

    // Mars has an atmosphere again once the ship has landed.
    core.update(10.0);
    assert_eq!(core.current_location(), &gale);
    assert!(core.transform().refracts(RefractionMode::Auto));
}

#[test]
fn add_day_on_earth_is_one_julian_day() {
    let mut core = core_at_j2000();
    core.set_jd(2_451_545.0);
    core.add_day();
    assert_eq!(core.jd().value(), 2_451_546.0);
    core.add_units(CalendarUnit::Day, -1.0);
    assert_eq!(core.jd().value(), 2_451_545.0);
}

#[test]
fn synodic_month_is_fixed_on_every_body() {
    let mut core = core_at_j2000();
    for planet in ["Earth", "Mars", "Moon"] {
        let site = Location::on_earth("Site", "", 10.0, 20.0, 0.0).with_planet(planet);
        core.move_observer_to(site, 0.0, 0.0);
        core.set_jd(2_451_545.0);
        core.add_synodic_month();
        assert!(
            (core.jd().value() - (2_451_545.0 + SYNODIC_MONTH)).abs() < 1e-9,
            "{planet}"
        );
    }
    assert_eq!(SYNODIC_MONTH, 29.530_588_853);
}

#[test]
fn sidereal_year_uses_home_body_period() {
    let mut system = SolarSystem::builtin();
    let sun = system.sun();
    system.insert(Body {
        name: "Ares".into(),
        kind: BodyKind::Planet,
        parent: Some(sun),
        radius_km: 3_396.0,
        flattening: 0.0,
        rotation: RotationElements {
            period: 1.025_957,
            ..RotationElements::default()
        },
        sidereal_period: 687.0,
        orbit: None,
        has_atmosphere: false,
    });
    let config = CoreConfig {
        startup_time_mode: StartupTimeMode::Preset,
        ..CoreConfig::default()
    };
    let mut core = Core::builder(config)
        .catalog(system)
        .clock(ManualClock::new(NOW_MILLIS))
        .build();

    let site = Location::on_earth("Base", "", 0.0, 0.0, 0.0).with_planet("Ares");
    core.move_observer_to(site, 0.0, 0.0);
    assert_eq!(core.catalog().name(core.observer().home_planet()), "Ares");
    assert_eq!(core.catalog().sidereal_period(core.observer().home_planet()), 687.0);

    core.set_jd(2_451_545.0);
    core.add_sidereal_year();
    assert!((core.jd().value() - (2_451_545.0 + 687.0)).abs() < 1e-9);

    core.move_observer_to(Location::last_resort(), 0.0, 0.0);
    core.set_jd(2_451_545.0);
    core.add_sidereal_year();
    assert!((core.jd().value() - (2_451_545.0 + 365.256_363_004)).abs() < 1e-6);
}

#[test]
fn proxy_commands_reach_the_owning_thread() {
    let mut core = core_at_j2000();
    let proxy = core.proxy();
    std::thread::spawn(move || {
        proxy.set_time_rate(0.0);
        proxy.add_units(CalendarUnit::Week, 1.0);
    })
    .join()
    .unwrap();
    assert_eq!(core.process_commands(), 2);
    assert!(core.is_paused());
    assert!((core.jd().value() - 2_451_552.0).abs() < 1e-9);
}
