//! Mission generation configuration and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Raised when a configuration fails validation. Every variant names the
/// offending knob so callers can report it without string matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("wave count must be at least 1 (got {0})")]
    NoWaves(u32),
    #[error("player count must be at least 1 (got {0})")]
    NoPlayers(u32),
    #[error("wave duration must be at least 1 second (got {0})")]
    ZeroDuration(i32),
    #[error("tank chance must lie in [0, 1] (got {0})")]
    TankChanceOutOfRange(f32),
    #[error("icon cap must be at least 1 (got {0})")]
    ZeroIconCap(usize),
    #[error("spawn group cap must be at least 1 (got {0})")]
    ZeroGroupCap(usize),
    #[error("bot group time ceiling must be at least 1 second (got {0})")]
    ZeroBotGroupTime(i32),
    #[error("currency values must be non-negative (got {0})")]
    NegativeCurrency(i32),
    #[error("base pressure decay rate must be positive (got {0})")]
    NonPositiveBaseDecay(f32),
    #[error("pressure decay rate multiplier must be positive (got {0})")]
    NonPositiveDecayMultiplier(f32),
    #[error("time decay multiplier must be positive (got {0})")]
    NonPositiveTimeDecayMultiplier(f32),
    #[error("currency pressure multiplier must be non-negative (got {0})")]
    NegativeCurrencyPressure(f32),
}

/// Knobs controlling how defender currency converts into pressure decay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomyTuning {
    /// Scales how much banked currency speeds up the defenders' clear rate.
    pub currency_pressure_multiplier: f32,
    /// Decay every team generates regardless of currency.
    pub base_decay_rate: f32,
    /// Final multiplier applied to the whole per-wave decay rate.
    pub decay_rate_multiplier: f32,
    /// Multiplier applied only to the per-tick decay inside the simulation.
    pub time_decay_multiplier: f32,
}

impl Default for EconomyTuning {
    fn default() -> Self {
        EconomyTuning {
            currency_pressure_multiplier: DEFAULT_CURRENCY_PRESSURE_MULTIPLIER,
            base_decay_rate: DEFAULT_BASE_DECAY_RATE,
            decay_rate_multiplier: DEFAULT_DECAY_RATE_MULTIPLIER,
            time_decay_multiplier: DEFAULT_TIME_DECAY_MULTIPLIER,
        }
    }
}

/// Everything the planner needs to generate a mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Map the mission targets. Used for relay names and the output filename.
    pub map_name: String,
    /// Mission name embedded in the output filename.
    pub mission_name: String,
    /// Number of waves to generate.
    pub waves: u32,
    /// Currency the defenders start the mission with.
    pub starting_currency: i32,
    /// Currency awarded for clearing each wave.
    pub currency_per_wave: i32,
    /// Defender count the mission is balanced around.
    pub players: u32,
    /// Wave duration in seconds. Generation for a wave stops at this mark.
    pub max_time: i32,
    /// Probability that a given spawn group is a tank rather than bots.
    pub tank_chance: f32,
    /// Maximum distinct HUD icons per wave.
    pub max_icons: usize,
    /// Maximum spawn groups per wave.
    pub max_groups: usize,
    /// Ceiling on the spawn window of a single bot group, in seconds.
    pub max_bot_group_time: i32,
    /// Defender respawn time during waves, in seconds.
    pub respawn_wave_time: i32,
    /// Holiday/event gating for the mission, if any.
    pub event_mode: Option<String>,
    /// When set, respawn time stays fixed instead of scaling with wave count.
    pub fixed_respawn_wave_time: bool,
    /// Whether bots are vulnerable while still inside their spawn zone.
    pub bots_attack_in_spawn: bool,
    /// Damage the saboteur support mission tolerates before retreating.
    pub saboteur_damage_threshold: i32,
    /// Kills the saboteur support mission aims for per sortie.
    pub saboteur_kill_threshold: i32,
    /// Delay between saboteur sorties, in seconds.
    pub saboteur_cooldown: f32,
    pub economy: EconomyTuning,
}

impl Default for MissionConfig {
    fn default() -> Self {
        MissionConfig {
            map_name: "facility".to_string(),
            mission_name: "generated".to_string(),
            waves: 7,
            starting_currency: 400,
            currency_per_wave: 600,
            players: 4,
            max_time: 120,
            tank_chance: 0.1,
            max_icons: 8,
            max_groups: 20,
            max_bot_group_time: 60,
            respawn_wave_time: 6,
            event_mode: None,
            fixed_respawn_wave_time: false,
            bots_attack_in_spawn: false,
            saboteur_damage_threshold: 500,
            saboteur_kill_threshold: 1,
            saboteur_cooldown: 40.0,
            economy: EconomyTuning::default(),
        }
    }
}

impl MissionConfig {
    /// Checks every knob against its legal range. Generation assumes a
    /// validated config; planners refuse to construct without one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.waves == 0 {
            return Err(ConfigError::NoWaves(self.waves));
        }
        if self.players == 0 {
            return Err(ConfigError::NoPlayers(self.players));
        }
        if self.max_time < 1 {
            return Err(ConfigError::ZeroDuration(self.max_time));
        }
        if !(0.0..=1.0).contains(&self.tank_chance) {
            return Err(ConfigError::TankChanceOutOfRange(self.tank_chance));
        }
        if self.max_icons == 0 {
            return Err(ConfigError::ZeroIconCap(self.max_icons));
        }
        if self.max_groups == 0 {
            return Err(ConfigError::ZeroGroupCap(self.max_groups));
        }
        if self.max_bot_group_time < 1 {
            return Err(ConfigError::ZeroBotGroupTime(self.max_bot_group_time));
        }
        if self.starting_currency < 0 {
            return Err(ConfigError::NegativeCurrency(self.starting_currency));
        }
        if self.currency_per_wave < 0 {
            return Err(ConfigError::NegativeCurrency(self.currency_per_wave));
        }
        if self.economy.base_decay_rate <= 0.0 {
            return Err(ConfigError::NonPositiveBaseDecay(self.economy.base_decay_rate));
        }
        if self.economy.decay_rate_multiplier <= 0.0 {
            return Err(ConfigError::NonPositiveDecayMultiplier(
                self.economy.decay_rate_multiplier,
            ));
        }
        if self.economy.time_decay_multiplier <= 0.0 {
            return Err(ConfigError::NonPositiveTimeDecayMultiplier(
                self.economy.time_decay_multiplier,
            ));
        }
        if self.economy.currency_pressure_multiplier < 0.0 {
            return Err(ConfigError::NegativeCurrencyPressure(
                self.economy.currency_pressure_multiplier,
            ));
        }
        Ok(())
    }
}
