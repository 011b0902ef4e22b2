//! Single-wave planning.
//!
//! Walks the wave's timeline: choose tank or bots, size the group,
//! register its pressure, then let the pressure model drain before the
//! next decision. Stops when the wave runs out of time, group slots, or
//! icon variety.

use std::collections::BTreeSet;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rampart_core::catalog::BotCatalog;
use rampart_core::config::MissionConfig;
use rampart_core::constants::*;
use rampart_core::records::{SpawnGroupRecord, SpawnPayload, TankRecord, WaveRecord};

use crate::pressure::{drain, SimulationState, SpawnTimer};
use crate::sizer::{size_bot, size_tank};

/// Plan one wave. Currency is distributed by the mission planner once the
/// wave is back in its hands.
pub fn plan_wave<C: BotCatalog>(
    config: &MissionConfig,
    wave_number: u32,
    decay_rate: f32,
    catalog: &mut C,
    rng: &mut ChaCha8Rng,
) -> WaveRecord {
    let mut state = SimulationState::default();
    let mut timers: Vec<SpawnTimer> = Vec::new();
    let mut groups: Vec<SpawnGroupRecord> = Vec::new();
    let mut icons: BTreeSet<String> = BTreeSet::new();

    while state.t < config.max_time
        && groups.len() < config.max_groups
        && icons.len() < config.max_icons
    {
        let name = format!("wave{}_{}", wave_number, groups.len() + 1);

        if rng.gen_bool(config.tank_chance as f64) {
            icons.insert("tank".to_string());

            let speed = rng.gen_range(TANK_SPEED_MIN..TANK_SPEED_MAX);
            let health_roll = rng.gen_range(TANK_HEALTH_ROLL_MIN..TANK_HEALTH_ROLL_MAX);
            let (health, sizing) = size_tank(
                speed,
                health_roll * TANK_HEALTH_STEP,
                decay_rate,
                state.t,
                config,
                rng,
            );

            groups.push(SpawnGroupRecord {
                name,
                total_count: sizing.total_count,
                wait_before_starting: state.t as f32,
                wait_between_spawns: sizing.interval,
                total_currency: 0,
                payload: SpawnPayload::Tank(TankRecord { health, speed }),
            });
            timers.push(SpawnTimer::new(
                sizing.effective_pressure,
                sizing.time_to_kill,
                sizing.interval,
                sizing.total_count,
            ));
            state.register_group(sizing.effective_pressure);
        } else {
            let meta = catalog.request_bot(decay_rate, rng);
            let (meta, sizing) = size_bot(meta, decay_rate, state.t, config, catalog, rng);

            // The icon registers after sizing so an escalated bot counts
            // under its escalated identity.
            icons.insert(meta.bot.icon.clone());

            let mut bot = meta.bot;
            bot.character_attributes
                .push(("move speed bonus".to_string(), meta.move_speed_bonus));

            groups.push(SpawnGroupRecord {
                name,
                total_count: sizing.total_count,
                wait_before_starting: state.t as f32,
                wait_between_spawns: sizing.interval,
                total_currency: 0,
                payload: SpawnPayload::Bot {
                    spawn_count: SPAWN_BATCH_SIZE,
                    max_active: sizing.total_count.min(MAX_ACTIVE_CAP),
                    location: HOSTILE_SPAWN_ZONE.to_string(),
                    bot,
                },
            });
            timers.push(SpawnTimer::new(
                sizing.effective_pressure,
                sizing.time_to_kill,
                sizing.interval,
                sizing.total_count,
            ));
            state.register_group(sizing.effective_pressure);
        }

        drain(
            &mut state,
            &mut timers,
            decay_rate,
            config.economy.time_decay_multiplier,
            config.max_time,
        );
    }

    WaveRecord {
        number: wave_number,
        start_relay: WAVE_START_RELAY.to_string(),
        finish_relay: WAVE_FINISHED_RELAY.to_string(),
        groups,
    }
}
