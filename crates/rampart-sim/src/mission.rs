//! Mission planning.
//!
//! Loops over the configured wave count, recomputing the decay rate from
//! the currency accumulated so far, and assembles the document handed to
//! the serializer.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rampart_core::catalog::BotCatalog;
use rampart_core::config::{ConfigError, MissionConfig};
use rampart_core::constants::*;
use rampart_core::records::{MissionDocument, ScheduleSettings, SupportMissionRecord, WaveRecord};

use crate::pressure::decay_rate_for_wave;
use crate::wave::plan_wave;

/// Generates complete missions from a validated config and a seed.
#[derive(Debug)]
pub struct MissionPlanner {
    config: MissionConfig,
    rng: ChaCha8Rng,
}

impl MissionPlanner {
    /// Validates the config up front; a degenerate parameter set never
    /// reaches the search loops.
    pub fn new(config: MissionConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(MissionPlanner {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    /// Generate the full mission document. Same config, seed, and catalog
    /// always produce the same document.
    pub fn generate<C: BotCatalog>(&mut self, catalog: &mut C) -> MissionDocument {
        let mut waves = Vec::with_capacity(self.config.waves as usize);
        let mut current_currency = self.config.starting_currency;

        for wave_number in 1..=self.config.waves {
            let decay_rate =
                decay_rate_for_wave(current_currency, self.config.players, &self.config.economy);
            let mut wave = plan_wave(&self.config, wave_number, decay_rate, catalog, &mut self.rng);
            distribute_currency(&mut wave, self.config.currency_per_wave);
            waves.push(wave);
            current_currency += self.config.currency_per_wave;
        }

        MissionDocument {
            map_name: self.config.map_name.clone(),
            mission_name: self.config.mission_name.clone(),
            players: self.config.players,
            schedule: ScheduleSettings {
                starting_currency: self.config.starting_currency,
                respawn_wave_time: self.config.respawn_wave_time,
                event_mode: self.config.event_mode.clone(),
                fixed_respawn_wave_time: self.config.fixed_respawn_wave_time,
                bots_attack_in_spawn: self.config.bots_attack_in_spawn,
                saboteur_damage_threshold: self.config.saboteur_damage_threshold,
                saboteur_kill_threshold: self.config.saboteur_kill_threshold,
            },
            support: SupportMissionRecord {
                objective: SABOTEUR_OBJECTIVE.to_string(),
                location: HOSTILE_SPAWN_ZONE.to_string(),
                begin_at_wave: 1,
                run_for_waves: self.config.waves,
                initial_cooldown: SABOTEUR_INITIAL_COOLDOWN,
                cooldown: self.config.saboteur_cooldown,
                bot_template: SABOTEUR_TEMPLATE.to_string(),
            },
            waves,
        }
    }
}

/// Split the wave's currency grant evenly across its groups. Integer
/// division; the remainder is dropped. A wave with no groups is left
/// untouched.
pub fn distribute_currency(wave: &mut WaveRecord, currency_per_wave: i32) {
    if wave.groups.is_empty() {
        return;
    }
    let per_group = currency_per_wave / wave.groups.len() as i32;
    for group in &mut wave.groups {
        group.total_currency = per_group;
    }
}
