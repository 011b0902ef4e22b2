//! The mission document record tree.
//!
//! This is the sole artifact crossing the simulation/serializer boundary:
//! `MissionDocument` → `WaveRecord` → `SpawnGroupRecord` → bot or tank
//! payload. Records are plain data; nothing here carries simulation state.

use serde::{Deserialize, Serialize};

use crate::enums::{BotAttribute, BotClass, SkillTier, WeaponRestriction};

/// Header-level settings echoed into the popfile's schedule block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    pub starting_currency: i32,
    pub respawn_wave_time: i32,
    pub event_mode: Option<String>,
    pub fixed_respawn_wave_time: bool,
    pub bots_attack_in_spawn: bool,
    /// Damage dealt by defenders that summons a saboteur.
    pub saboteur_damage_threshold: i32,
    /// Defender kill count that summons a saboteur.
    pub saboteur_kill_threshold: i32,
}

/// A support mission scheduled by the header rather than a wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportMissionRecord {
    pub objective: String,
    /// Spawn zone the support bot deploys from.
    pub location: String,
    pub begin_at_wave: u32,
    pub run_for_waves: u32,
    pub initial_cooldown: f32,
    pub cooldown: f32,
    /// Bot template name, resolved by the base script.
    pub bot_template: String,
}

/// One scored round of the mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveRecord {
    /// 1-based wave number.
    pub number: u32,
    /// Relay triggered when the wave starts.
    pub start_relay: String,
    /// Relay triggered when the wave is cleared.
    pub finish_relay: String,
    pub groups: Vec<SpawnGroupRecord>,
}

/// A timed, repeating release of one kind of hostile actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnGroupRecord {
    pub name: String,
    /// Total members released over the group's lifetime.
    pub total_count: i32,
    /// Seconds from wave start until the first release.
    pub wait_before_starting: f32,
    /// Seconds between releases.
    pub wait_between_spawns: f32,
    /// Currency this group pays out, from the wave's even split.
    pub total_currency: i32,
    pub payload: SpawnPayload,
}

/// Kind-specific content of a spawn group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpawnPayload {
    Bot {
        /// Members released per spawn event.
        spawn_count: i32,
        /// Cap on simultaneously alive members.
        max_active: i32,
        /// Spawn zone the members deploy from.
        location: String,
        bot: BotRecord,
    },
    Tank(TankRecord),
}

/// A fully specified hostile bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotRecord {
    pub class: BotClass,
    pub name: String,
    /// HUD icon slug.
    pub icon: String,
    pub health: i32,
    /// Model scale override. Reinforced bots render larger.
    pub scale: Option<f32>,
    pub skill: SkillTier,
    pub weapon_restriction: Option<WeaponRestriction>,
    /// Sight distance cap, for classes that would otherwise snipe across
    /// the map.
    pub max_vision_range: Option<f32>,
    /// Destination zone for teleport beacons, when the class builds them.
    pub teleport_location: Option<String>,
    pub attributes: Vec<BotAttribute>,
    /// Min/max trigger range for jump-route usage.
    pub auto_jump: Option<(f32, f32)>,
    /// Equipment granted on spawn.
    pub items: Vec<String>,
    /// Per-character stat overrides, rendered verbatim as key/value pairs.
    pub character_attributes: Vec<(String, f32)>,
}

/// A tank. Health and speed are all the game needs; the path and relay
/// wiring are map properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankRecord {
    pub health: i32,
    pub speed: f32,
}

/// The finished mission, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionDocument {
    pub map_name: String,
    pub mission_name: String,
    pub players: u32,
    pub schedule: ScheduleSettings,
    pub support: SupportMissionRecord,
    pub waves: Vec<WaveRecord>,
}
