//! The bot catalog implementation.
//!
//! Turns a wave's decay rate into concrete hostiles: class and skill
//! rolls, rare modifiers, and the reinforced/elite escalation transforms
//! requested by the wave planner.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rampart_core::catalog::{BotCatalog, BotMeta};
use rampart_core::constants::*;
use rampart_core::enums::{BotAttribute, BotClass, BotTier, SkillTier};
use rampart_core::records::BotRecord;

use crate::names::generate_name;
use crate::profiles::{get_profile, ClassProfile};

/// Catalog drawing uniformly from a roster of classes.
#[derive(Debug, Clone)]
pub struct BotGenerator {
    classes: Vec<BotClass>,
}

impl BotGenerator {
    pub fn new() -> Self {
        BotGenerator {
            classes: BotClass::ALL.to_vec(),
        }
    }

    /// Restrict the catalog to a subset of classes. Panics on an empty
    /// roster.
    pub fn with_classes(classes: Vec<BotClass>) -> Self {
        assert!(!classes.is_empty(), "empty class roster");
        BotGenerator { classes }
    }
}

impl Default for BotGenerator {
    fn default() -> Self {
        BotGenerator::new()
    }
}

impl BotCatalog for BotGenerator {
    fn request_bot(&mut self, decay_rate: f32, rng: &mut ChaCha8Rng) -> BotMeta {
        // Roll order is fixed; reordering changes every mission generated
        // from an existing seed.
        let class = self.classes[rng.gen_range(0..self.classes.len())];
        let profile = get_profile(class);
        let name = generate_name(rng);
        let skill = roll_skill(decay_rate, rng);

        let mut pressure = skill_pressure(skill);
        let mut move_speed_bonus = 1.0;
        let mut attributes = profile.attributes.to_vec();
        let mut character_attributes = Vec::new();

        if rng.gen_bool(ALWAYS_CRIT_CHANCE) {
            attributes.push(BotAttribute::AlwaysCrit);
            pressure *= ALWAYS_CRIT_PRESSURE;
        }
        if rng.gen_bool(DAMAGE_BONUS_CHANCE) {
            let bonus = rng.gen_range(DAMAGE_BONUS_MIN..DAMAGE_BONUS_MAX);
            character_attributes.push(("damage bonus".to_string(), bonus));
            pressure *= bonus;
        }
        if rng.gen_bool(MOVE_SPEED_BONUS_CHANCE) {
            move_speed_bonus = rng.gen_range(MOVE_SPEED_BONUS_MIN..MOVE_SPEED_BONUS_MAX);
            pressure *= move_speed_bonus;
        }

        let mut auto_jump = None;
        if profile.can_auto_jump && rng.gen_bool(AUTO_JUMP_CHANCE) {
            let min = rng.gen_range(3.0..8.0);
            let max = min + rng.gen_range(2.0..8.0);
            auto_jump = Some((min, max));
            attributes.push(BotAttribute::AutoJump);
        }

        let mut items: Vec<String> = profile.items.iter().map(|s| s.to_string()).collect();
        if skill >= SkillTier::Hard {
            items.extend(profile.advanced_items.iter().map(|s| s.to_string()));
        }

        let teleport_location = if profile.builds_teleporters {
            Some(HOSTILE_SPAWN_ZONE.to_string())
        } else {
            None
        };

        let bot = BotRecord {
            class,
            name,
            icon: profile.icon.to_string(),
            health: profile.base_health,
            scale: None,
            skill,
            weapon_restriction: profile.weapon_restriction,
            max_vision_range: profile.max_vision_range,
            teleport_location,
            attributes,
            auto_jump,
            items,
            character_attributes,
        };

        let mut meta = BotMeta {
            bot,
            pressure,
            move_speed_bonus,
            tier: BotTier::Normal,
            capped: profile.reinforced_health.is_none(),
        };

        // Against strong defenses the catalog escalates on its own: the
        // occasional pre-reinforced bot, and very rarely an elite.
        if !meta.capped {
            if decay_rate >= ELITE_DECAY && rng.gen_bool(ELITE_CHANCE) {
                meta = mint_elite(meta, &profile);
            } else if decay_rate >= PRE_REINFORCE_DECAY && rng.gen_bool(PRE_REINFORCE_CHANCE) {
                meta = promote_meta(meta);
            }
        }

        meta
    }

    fn promote(&self, meta: BotMeta) -> BotMeta {
        promote_meta(meta)
    }
}

/// Skill roll biased by the wave's decay rate: stronger defenders are met
/// with sharper bots.
pub fn roll_skill(decay_rate: f32, rng: &mut ChaCha8Rng) -> SkillTier {
    let grade = (decay_rate / SKILL_GRADE_SCALE).clamp(0.0, 1.0);
    let roll = rng.gen::<f32>() * 0.5 + grade * 0.5;
    if roll < 0.25 {
        SkillTier::Easy
    } else if roll < 0.5 {
        SkillTier::Normal
    } else if roll < 0.75 {
        SkillTier::Hard
    } else {
        SkillTier::Expert
    }
}

/// Pressure multiplier contributed by a skill tier.
pub fn skill_pressure(skill: SkillTier) -> f32 {
    match skill {
        SkillTier::Easy => 0.9,
        SkillTier::Normal => 1.0,
        SkillTier::Hard => 1.15,
        SkillTier::Expert => 1.3,
    }
}

/// Reinforced transform: profile health, larger model, half the move-speed
/// bonus. Capped classes pass through unchanged.
fn promote_meta(meta: BotMeta) -> BotMeta {
    let profile = get_profile(meta.bot.class);
    let reinforced_health = match profile.reinforced_health {
        Some(health) => health,
        None => return meta,
    };

    let mut meta = meta;
    meta.bot.health = reinforced_health;
    meta.bot.scale = Some(REINFORCED_SCALE);
    meta.bot.icon = format!("{}_reinforced", profile.icon);
    meta.bot.name = format!("Reinforced {}", meta.bot.name);
    if !meta.bot.attributes.contains(&BotAttribute::Reinforced) {
        meta.bot.attributes.push(BotAttribute::Reinforced);
    }
    meta.move_speed_bonus *= REINFORCED_SPEED_FACTOR;
    meta.tier = BotTier::Reinforced;
    meta
}

fn mint_elite(meta: BotMeta, profile: &ClassProfile) -> BotMeta {
    let mut meta = meta;
    let reinforced_health = profile.reinforced_health.unwrap_or(meta.bot.health);
    meta.bot.health = reinforced_health * ELITE_HEALTH_MULTIPLIER;
    meta.bot.scale = Some(ELITE_SCALE);
    meta.bot.icon = format!("{}_elite", profile.icon);
    meta.bot.name = format!("Elite {}", meta.bot.name);
    if !meta.bot.attributes.contains(&BotAttribute::Reinforced) {
        meta.bot.attributes.push(BotAttribute::Reinforced);
    }
    meta.bot.attributes.push(BotAttribute::BossHealthBar);
    meta.move_speed_bonus *= REINFORCED_SPEED_FACTOR;
    meta.tier = BotTier::Elite;
    meta
}
