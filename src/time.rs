//! Tick rate limiting.
//!
//! The simulation advances in discrete ticks, at most [`TICK_RATE_HZ`] per
//! second and at most one per rendered frame. When frames are slower than
//! the tick period the simulation simply runs slower: missed ticks are
//! dropped, never replayed.

use bevy::prelude::*;

use crate::config::SimulationConfig;
use crate::types::{SimulationSet, TICK_RATE_HZ};

/// Plugin providing the tick clock.
///
/// A [`TickClock`] inserted before this plugin is kept as is; otherwise one
/// is built from the [`SimulationConfig`] tick rate.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<TickClock>() {
            let hz = app
                .world()
                .get_resource::<SimulationConfig>()
                .map_or(TICK_RATE_HZ, |config| config.tick_rate_hz);
            app.insert_resource(TickClock::from_hz(hz));
        }

        app.add_systems(Update, advance_tick_clock.in_set(SimulationSet::Clock));
    }
}

/// Fixed-rate gate for simulation ticks.
#[derive(Resource, Clone, Debug)]
pub struct TickClock {
    /// Seconds per tick; zero means a tick every frame.
    period: f64,
    /// Real time accumulated towards the next tick.
    accumulated: f64,
    due: bool,
    ticks: u64,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::from_hz(TICK_RATE_HZ)
    }
}

impl TickClock {
    /// Clock allowing at most `hz` ticks per second.
    pub fn from_hz(hz: f64) -> Self {
        let period = if hz.is_finite() && hz > 0.0 { 1.0 / hz } else { 0.0 };
        Self {
            period,
            accumulated: 0.0,
            due: false,
            ticks: 0,
        }
    }

    /// Clock that lets every frame tick.
    pub fn every_frame() -> Self {
        Self::from_hz(f64::INFINITY)
    }

    pub fn period_secs(&self) -> f64 {
        self.period
    }

    /// Whether the current frame runs a tick.
    pub fn is_due(&self) -> bool {
        self.due
    }

    /// Ticks granted so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Account for `delta_secs` of real time and decide whether this frame
    /// ticks. A backlog of more than one period is discarded.
    pub fn advance(&mut self, delta_secs: f64) -> bool {
        if self.period <= 0.0 {
            self.due = true;
        } else {
            self.accumulated += delta_secs.max(0.0);
            self.due = self.accumulated >= self.period;
            if self.due {
                self.accumulated = if self.accumulated >= 2.0 * self.period {
                    0.0
                } else {
                    self.accumulated - self.period
                };
            }
        }

        if self.due {
            self.ticks += 1;
        }
        self.due
    }
}

/// Feed the frame delta into the tick clock.
fn advance_tick_clock(time: Res<Time>, mut clock: ResMut<TickClock>) {
    clock.advance(time.delta_secs_f64());
}

/// Run condition: true on frames that run a simulation tick.
pub fn tick_due(clock: Res<TickClock>) -> bool {
    clock.is_due()
}
