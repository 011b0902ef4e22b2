//! Generator constants and tuning parameters.

// --- Economy defaults ---

/// Pressure decay contributed per unit of accumulated currency.
pub const DEFAULT_CURRENCY_PRESSURE_MULTIPLIER: f32 = 0.02;

/// Baseline pressure decay per second per player, before currency scaling.
pub const DEFAULT_BASE_DECAY_RATE: f32 = 2.0;

/// Global multiplier on the per-wave decay rate.
pub const DEFAULT_DECAY_RATE_MULTIPLIER: f32 = 1.0;

/// Multiplier on decay applied during the per-second time steps.
pub const DEFAULT_TIME_DECAY_MULTIPLIER: f32 = 1.0;

// --- Sizing search ---

/// Minimum bot health; the shrink branch never reduces health at or below this.
pub const BOT_HEALTH_FLOOR: i32 = 25;

/// Minimum tank health; the tank shrink branch stops here.
pub const TANK_HEALTH_FLOOR: i32 = 1000;

/// Health is multiplied by this on each shrink step.
pub const HEALTH_SHRINK_FACTOR: f32 = 0.9;

/// Inter-spawn interval = time-to-eliminate times a factor in [MIN, MAX).
pub const INTERVAL_FACTOR_MIN: f32 = 1.0;
pub const INTERVAL_FACTOR_MAX: f32 = 5.0;

/// Seconds left in the wave below which the sizer stops shrinking and tries
/// to place the bot at full strength.
pub const NEAR_END_WINDOW: i32 = 20;

/// Probability of escalating (promote or double health) when the computed
/// interval drops under one second.
pub const ESCALATION_CHANCE: f64 = 0.9;

/// Hard ceiling on sizing-search iterations. The shrink branch reaches the
/// health floor well inside this; hitting the ceiling accepts a single spawn.
pub const SIZER_ITERATION_CEILING: u32 = 128;

/// Cap on a bot group's simultaneously active members.
pub const MAX_ACTIVE_CAP: i32 = 22;

/// Members released per spawn event.
pub const SPAWN_BATCH_SIZE: i32 = 1;

// --- Tank rolls ---

/// Tank speed is rolled uniformly in [MIN, MAX).
pub const TANK_SPEED_MIN: f32 = 10.0;
pub const TANK_SPEED_MAX: f32 = 100.0;

/// Tank health is a uniform integer in [MIN, MAX) times TANK_HEALTH_STEP.
pub const TANK_HEALTH_ROLL_MIN: i32 = 1;
pub const TANK_HEALTH_ROLL_MAX: i32 = 100;

/// Tank health granularity; final health rounds up to a multiple of this.
pub const TANK_HEALTH_STEP: i32 = 1000;

/// Extra pressure multiplier per unit of tank speed above the minimum.
pub const TANK_SPEED_PRESSURE: f32 = 0.1;

// --- Map entities ---

/// Relay triggered when a wave starts.
pub const WAVE_START_RELAY: &str = "wave_start_relay";

/// Relay triggered when a wave is cleared.
pub const WAVE_FINISHED_RELAY: &str = "wave_finished_relay";

/// Spawn zone for hostile bots.
pub const HOSTILE_SPAWN_ZONE: &str = "hostile_spawn";

/// Relay triggered when a tank enters the map.
pub const TANK_SPAWN_RELAY: &str = "tank_spawn_relay";

/// Relay triggered when a tank is destroyed.
pub const TANK_KILLED_RELAY: &str = "tank_killed_relay";

/// Relay triggered when a tank delivers its payload.
pub const TANK_DEPLOY_RELAY: &str = "tank_deploy_relay";

/// Name given to every tank entity.
pub const TANK_NAME: &str = "breacher";

/// First node of the tank path.
pub const TANK_PATH_START_NODE: &str = "tank_path_a1";

// --- Bot catalog ---

/// Decay rate at which the skill roll is fully weighted toward Hard/Expert.
pub const SKILL_GRADE_SCALE: f32 = 60.0;

/// Chance a bot rolls the always-crit modifier.
pub const ALWAYS_CRIT_CHANCE: f64 = 0.1;

/// Pressure multiplier carried by always-crit bots.
pub const ALWAYS_CRIT_PRESSURE: f32 = 1.5;

/// Chance of a damage bonus modifier, and its roll range.
pub const DAMAGE_BONUS_CHANCE: f64 = 0.15;
pub const DAMAGE_BONUS_MIN: f32 = 1.1;
pub const DAMAGE_BONUS_MAX: f32 = 1.75;

/// Chance of a move-speed bonus modifier, and its roll range.
pub const MOVE_SPEED_BONUS_CHANCE: f64 = 0.2;
pub const MOVE_SPEED_BONUS_MIN: f32 = 1.1;
pub const MOVE_SPEED_BONUS_MAX: f32 = 1.4;

/// Chance a jump-capable class actually takes jump routes.
pub const AUTO_JUMP_CHANCE: f64 = 0.5;

/// Decay rate above which bots may spawn already reinforced.
pub const PRE_REINFORCE_DECAY: f32 = 40.0;
pub const PRE_REINFORCE_CHANCE: f64 = 0.25;

/// Decay rate above which elite bots may be minted, and how often.
pub const ELITE_DECAY: f32 = 80.0;
pub const ELITE_CHANCE: f64 = 0.04;

/// Model scale of escalated variants.
pub const REINFORCED_SCALE: f32 = 1.75;
pub const ELITE_SCALE: f32 = 1.9;

/// Elite health = reinforced health times this.
pub const ELITE_HEALTH_MULTIPLIER: i32 = 2;

/// Reinforced variants keep half their rolled move-speed bonus.
pub const REINFORCED_SPEED_FACTOR: f32 = 0.5;

// --- Saboteur support mission ---

/// Objective keyword for the saboteur support mission.
pub const SABOTEUR_OBJECTIVE: &str = "DestroyTurrets";

/// Template name for the saboteur bot, provided by the base script.
pub const SABOTEUR_TEMPLATE: &str = "T_Bot_Saboteur";

/// Base script included for the saboteur template.
pub const SABOTEUR_BASE_SCRIPT: &str = "bot_saboteur.pop";

/// Seconds before the first saboteur may be sent.
pub const SABOTEUR_INITIAL_COOLDOWN: f32 = 5.0;
