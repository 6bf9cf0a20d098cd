// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Cross-thread access to a [`Core`](crate::Core).
//!
//! The core is not shared: other threads hold a [`CoreProxy`] and send
//! [`CoreCommand`]s, which the owning thread applies in order with
//! [`Core::process_commands`](crate::Core::process_commands).
//!
//! ```
//! use skyframe::{Core, CoreConfig, ManualClock};
//!
//! let mut core = Core::builder(CoreConfig::default()).clock(ManualClock::new(0)).build();
//! let proxy = core.proxy();
//! std::thread::spawn(move || proxy.set_jd(2_451_545.0)).join().unwrap();
//! assert_eq!(core.process_commands(), 1);
//! assert_eq!(core.jd().value(), 2_451_545.0);
//! ```

use std::sync::mpsc::Sender;

use tracing::debug;

use crate::engine::CalendarUnit;
use crate::location::Location;

/// A deferred mutation of the core's time or observer state.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreCommand {
    SetJd(f64),
    SetJde(f64),
    SetTimeNow,
    SetTimeRate(f64),
    AddUnits(CalendarUnit, f64),
    MoveObserverTo {
        location: Location,
        duration: f64,
        duration_if_planet_change: f64,
    },
    MoveObserverToId {
        id: String,
        duration: f64,
        duration_if_planet_change: f64,
    },
    ReturnToHome,
    SetDeltaTAlgorithm(String),
    SetProjection(String),
    SetFlagNutation(bool),
    SetFlagTopocentric(bool),
}

/// Sending half of the command channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CoreProxy {
    tx: Sender<CoreCommand>,
}

impl CoreProxy {
    pub(crate) fn new(tx: Sender<CoreCommand>) -> Self {
        Self { tx }
    }

    /// Queues `command`. Returns `false` once the core is gone or has
    /// opened a newer channel.
    pub fn send(&self, command: CoreCommand) -> bool {
        match self.tx.send(command) {
            Ok(()) => true,
            Err(e) => {
                debug!(command = ?e.0, "core channel closed, command dropped");
                false
            }
        }
    }

    pub fn set_jd(&self, jd: f64) -> bool {
        self.send(CoreCommand::SetJd(jd))
    }

    pub fn set_time_rate(&self, rate: f64) -> bool {
        self.send(CoreCommand::SetTimeRate(rate))
    }

    pub fn add_units(&self, unit: CalendarUnit, n: f64) -> bool {
        self.send(CoreCommand::AddUnits(unit, n))
    }

    pub fn move_observer_to(&self, location: Location, duration: f64) -> bool {
        self.send(CoreCommand::MoveObserverTo {
            location,
            duration,
            duration_if_planet_change: duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::{Core, CoreConfig};

    #[test]
    fn commands_apply_in_order_on_owner() {
        let mut core = Core::builder(CoreConfig::default())
            .clock(ManualClock::new(0))
            .build();
        let proxy = core.proxy();
        let worker = proxy.clone();
        std::thread::spawn(move || {
            worker.set_jd(2_451_545.0);
            worker.add_units(CalendarUnit::Day, 2.0);
            worker.set_time_rate(0.0);
            worker.send(CoreCommand::SetDeltaTAlgorithm("Bogus".into()));
        })
        .join()
        .unwrap();

        assert_eq!(core.jd().value(), 2_440_587.5);
        assert_eq!(core.process_commands(), 4);
        assert_eq!(core.jd().value(), 2_451_547.0);
        assert!(core.is_paused());
        assert_eq!(core.current_delta_t_algorithm_key(), "WithoutCorrection");
        assert_eq!(core.process_commands(), 0);
    }

    #[test]
    fn stale_proxy_reports_closed_channel() {
        let mut core = Core::builder(CoreConfig::default())
            .clock(ManualClock::new(0))
            .build();
        let old = core.proxy();
        let _new = core.proxy();
        assert!(!old.set_jd(1.0));
    }

    #[test]
    fn core_without_proxy_has_nothing_to_do() {
        let mut core = Core::builder(CoreConfig::default())
            .clock(ManualClock::new(0))
            .build();
        assert_eq!(core.process_commands(), 0);
    }
}
