//! Bot catalog interface.
//!
//! The wave planner treats the catalog as an oracle: it requests a bot
//! tuned to the current decay rate, and may hand the result back for
//! promotion when spawn timing forces an escalation. All transforms are
//! value transforms; the planner never mutates a fetched record in place.

use rand_chacha::ChaCha8Rng;

use crate::enums::BotTier;
use crate::records::BotRecord;

/// A catalog bot plus the metadata the sizing search needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BotMeta {
    pub bot: BotRecord,
    /// Pressure contributed per point of health.
    pub pressure: f32,
    /// Movement multiplier, appended to the bot's character attributes
    /// once sizing has settled.
    pub move_speed_bonus: f32,
    pub tier: BotTier,
    /// Capped bots never take the reinforced transition.
    pub capped: bool,
}

impl BotMeta {
    /// Per-member pressure contribution at current health.
    pub fn effective_pressure(&self) -> f32 {
        self.pressure * self.bot.health as f32
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.bot.health = health;
        self
    }

    pub fn with_doubled_health(self) -> Self {
        let health = self.bot.health * 2;
        self.with_health(health)
    }

    pub fn is_reinforced(&self) -> bool {
        self.tier >= BotTier::Reinforced
    }

    pub fn is_elite(&self) -> bool {
        self.tier == BotTier::Elite
    }
}

/// Source of hostile bots for the wave planner.
pub trait BotCatalog {
    /// Produces a bot scaled to the wave's decay rate. All randomness must
    /// come from `rng` so missions stay reproducible.
    fn request_bot(&mut self, decay_rate: f32, rng: &mut ChaCha8Rng) -> BotMeta;

    /// Escalates a normal-tier bot to its reinforced variant.
    fn promote(&self, meta: BotMeta) -> BotMeta;
}
