//! Spawn-group sizing search.
//!
//! Given a provisional actor and the wave's decay rate, searches for a
//! (count, interval) pair that fits the remaining time, adjusting the
//! actor's strength when nothing fits. The search is bounded; on
//! exhaustion it fields a single member with the last computed timing.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rampart_core::catalog::{BotCatalog, BotMeta};
use rampart_core::config::MissionConfig;
use rampart_core::constants::*;

use crate::escalation::{evaluate, SizingContext, SizingStep};

/// Frozen timing for one spawn group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupSizing {
    /// Pressure contributed per member.
    pub effective_pressure: f32,
    /// Seconds the defenders need to clear one member.
    pub time_to_kill: f32,
    /// Seconds between releases.
    pub interval: f32,
    pub total_count: i32,
}

/// Size a bot group starting at second `t` of the wave. `t` must be
/// inside the wave. Returns the possibly-transformed actor along with the
/// frozen sizing.
pub fn size_bot<C: BotCatalog>(
    mut meta: BotMeta,
    decay_rate: f32,
    t: i32,
    config: &MissionConfig,
    catalog: &C,
    rng: &mut ChaCha8Rng,
) -> (BotMeta, GroupSizing) {
    let time_left = (config.max_time - t).min(config.max_bot_group_time);
    let recip_decay = 1.0 / decay_rate;

    let mut effective_pressure = 0.0;
    let mut time_to_kill = 0.0;
    let mut interval = 0.0;

    for _ in 0..SIZER_ITERATION_CEILING {
        effective_pressure = meta.effective_pressure();
        time_to_kill = effective_pressure * recip_decay;
        interval = time_to_kill * rng.gen_range(INTERVAL_FACTOR_MIN..INTERVAL_FACTOR_MAX);
        let max_count = (time_left as f32 / interval).floor() as i32;

        let ctx = SizingContext {
            max_count,
            interval,
            health: meta.bot.health,
            time_remaining: config.max_time - t,
            elite: meta.is_elite(),
            reinforced: meta.is_reinforced(),
            capped: meta.capped,
        };

        match evaluate(&ctx) {
            SizingStep::Accept => {
                let total_count = rng.gen_range(1..=max_count);
                let sizing = GroupSizing {
                    effective_pressure,
                    time_to_kill,
                    interval,
                    total_count,
                };
                return (meta, sizing);
            }
            SizingStep::AcceptSingle => {
                let sizing = GroupSizing {
                    effective_pressure,
                    time_to_kill,
                    interval,
                    total_count: 1,
                };
                return (meta, sizing);
            }
            SizingStep::AcceptNearEnd => {
                // Strong bot, wave nearly over. Let it through whole if
                // its interval fits the wave's full duration at all.
                if (config.max_time as f32 / interval).floor() as i32 != 0 {
                    let sizing = GroupSizing {
                        effective_pressure,
                        time_to_kill,
                        interval,
                        total_count: 1,
                    };
                    return (meta, sizing);
                }
            }
            SizingStep::ShrinkHealth => {
                let reduced = (meta.bot.health as f32 * HEALTH_SHRINK_FACTOR) as i32;
                meta = meta.with_health(reduced);
            }
            SizingStep::MaybeEscalate => {
                if rng.gen_bool(ESCALATION_CHANCE) {
                    meta = escalate_meta(meta, catalog);
                } else {
                    // Accept the near-continuous stream as-is.
                    let total_count = rng.gen_range(1..=max_count);
                    let sizing = GroupSizing {
                        effective_pressure,
                        time_to_kill,
                        interval,
                        total_count,
                    };
                    return (meta, sizing);
                }
            }
        }
    }

    let sizing = GroupSizing {
        effective_pressure,
        time_to_kill,
        interval,
        total_count: 1,
    };
    (meta, sizing)
}

/// Size a tank group. Tanks only ever shrink; there is no escalation.
pub fn size_tank(
    speed: f32,
    initial_health: i32,
    decay_rate: f32,
    t: i32,
    config: &MissionConfig,
    rng: &mut ChaCha8Rng,
) -> (i32, GroupSizing) {
    let speed_pressure = (speed - TANK_SPEED_MIN) * TANK_SPEED_PRESSURE + 1.0;
    let recip_decay = 1.0 / decay_rate;
    let time_left = config.max_time - t;

    let mut health = initial_health;
    let mut effective_pressure = 0.0;
    let mut time_to_kill = 0.0;
    let mut interval = 0.0;

    for _ in 0..SIZER_ITERATION_CEILING {
        effective_pressure = health as f32 * speed_pressure;
        time_to_kill = effective_pressure * recip_decay;
        interval = time_to_kill * rng.gen_range(INTERVAL_FACTOR_MIN..INTERVAL_FACTOR_MAX);
        let max_count = (time_left as f32 / interval).floor() as i32;

        if max_count == 0 && health > TANK_HEALTH_FLOOR {
            health = (health as f32 * HEALTH_SHRINK_FACTOR) as i32;
        } else if max_count == 0 {
            let sizing = GroupSizing {
                effective_pressure,
                time_to_kill,
                interval,
                total_count: 1,
            };
            return (round_tank_health(health), sizing);
        } else {
            let total_count = rng.gen_range(1..=max_count);
            let sizing = GroupSizing {
                effective_pressure,
                time_to_kill,
                interval,
                total_count,
            };
            return (round_tank_health(health), sizing);
        }
    }

    let sizing = GroupSizing {
        effective_pressure,
        time_to_kill,
        interval,
        total_count: 1,
    };
    (round_tank_health(health), sizing)
}

/// Round up to the tank health granularity. The search sizes against the
/// raw value; only the frozen record is rounded.
pub fn round_tank_health(health: i32) -> i32 {
    (health as f32 / TANK_HEALTH_STEP as f32).ceil() as i32 * TANK_HEALTH_STEP
}

/// Escalation transform: reinforced bots double their health, normal
/// uncapped bots get promoted, capped bots double their health.
fn escalate_meta<C: BotCatalog>(meta: BotMeta, catalog: &C) -> BotMeta {
    if meta.is_reinforced() {
        meta.with_doubled_health()
    } else if !meta.capped {
        catalog.promote(meta)
    } else {
        meta.with_doubled_health()
    }
}
