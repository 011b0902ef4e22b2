//! The pressure model.
//!
//! Pressure is the abstract threat currently bearing on the defenders.
//! Spawns add pressure; the defenders wear it down at a per-wave decay
//! rate derived from their economy. The model advances in fixed
//! one-second steps, and the planner only makes its next spawn decision
//! once pressure has drained back to zero.

use rampart_core::config::EconomyTuning;

/// Per-wave decay rate. Computed once from the currency accumulated in
/// prior waves; never recomputed mid-wave.
pub fn decay_rate_for_wave(accumulated_currency: i32, players: u32, economy: &EconomyTuning) -> f32 {
    (accumulated_currency as f32 * economy.currency_pressure_multiplier + economy.base_decay_rate)
        * players as f32
        * economy.decay_rate_multiplier
}

/// Mutable per-wave simulation state, owned by the wave planner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationState {
    /// Simulated seconds since wave start.
    pub t: i32,
    /// Threat currently on the defenders.
    pub pressure: f32,
    /// Spawn groups currently considered alive on the field. Scales the
    /// per-second decay: attention split across groups clears each one
    /// slower.
    pub active_groups: i32,
}

impl SimulationState {
    /// Register a newly frozen group: it starts active and its first
    /// member's pressure lands immediately.
    pub fn register_group(&mut self, effective_pressure: f32) {
        self.active_groups += 1;
        self.pressure += effective_pressure;
    }
}

/// Spawn bookkeeping for one group, alive for the wave's lifetime. The
/// serialized record never carries any of this.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTimer {
    /// Pressure added per member release.
    pub effective_pressure: f32,
    /// Seconds the defenders need to clear one release.
    pub time_to_kill: f32,
    /// Seconds between releases.
    pub interval: f32,
    /// Releases left after the first.
    pub remaining: i32,
    /// Seconds until the next release.
    pub until_next: f32,
    /// Seconds until the group's latest release counts as cleared. While
    /// positive the group is active.
    pub kill_countdown: f32,
}

impl SpawnTimer {
    /// Timer for a freshly registered group. The first member is already
    /// on the field; the timer tracks the rest.
    pub fn new(effective_pressure: f32, time_to_kill: f32, interval: f32, total_count: i32) -> Self {
        SpawnTimer {
            effective_pressure,
            time_to_kill,
            interval,
            remaining: total_count - 1,
            until_next: interval,
            kill_countdown: time_to_kill,
        }
    }
}

/// Advance the simulation by one second.
///
/// Every timer whose release countdown has run out fires as many releases
/// as fit into the elapsed second, each adding the group's effective
/// pressure and re-arming its kill countdown. A group whose kill
/// countdown runs out stops being active exactly once per release cycle.
/// Decay then divides across `active_groups + 1` so it never stalls with
/// an empty field.
pub fn step(
    state: &mut SimulationState,
    timers: &mut [SpawnTimer],
    decay_rate: f32,
    time_decay_multiplier: f32,
) {
    state.t += 1;

    let mut increase = 0.0;
    for timer in timers.iter_mut() {
        let mut was_active = timer.kill_countdown > 0.0;
        timer.kill_countdown -= 1.0;
        if was_active && timer.kill_countdown <= 0.0 {
            state.active_groups -= 1;
            was_active = false;
        }

        timer.until_next -= 1.0;
        while timer.remaining != 0 && timer.until_next <= 0.0 {
            increase += timer.effective_pressure;
            timer.until_next += timer.interval;
            if !was_active {
                state.active_groups += 1;
            }
            timer.kill_countdown = timer.time_to_kill;
            was_active = true;
            timer.remaining -= 1;
        }
    }

    state.pressure += increase;
    state.pressure -= decay_rate * time_decay_multiplier / (state.active_groups + 1) as f32;
}

/// Let the simulated defenders work pressure back down to zero before the
/// next spawn decision. Never steps past the wave's end.
pub fn drain(
    state: &mut SimulationState,
    timers: &mut [SpawnTimer],
    decay_rate: f32,
    time_decay_multiplier: f32,
    max_time: i32,
) {
    while state.pressure > 0.0 && state.t < max_time {
        step(state, timers, decay_rate, time_decay_multiplier);
    }
}
