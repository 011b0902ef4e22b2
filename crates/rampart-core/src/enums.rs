//! Enumeration types used throughout the generator.

use serde::{Deserialize, Serialize};

/// Hostile bot class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotClass {
    /// Fast, fragile harasser.
    Skirmisher,
    /// All-round rocket infantry.
    Trooper,
    /// Short-range area denial.
    Scorcher,
    /// Indirect-fire explosives.
    Demolisher,
    /// Slow, high-health suppression.
    Juggernaut,
    /// Support class: builds teleport beacons.
    Mechanist,
    /// Support class: heals the horde.
    Surgeon,
    /// Long-range precision threat.
    Longshot,
    /// Infiltrator targeting defenders directly.
    Phantom,
}

impl BotClass {
    /// Class keyword as written in the popfile.
    pub fn as_str(self) -> &'static str {
        match self {
            BotClass::Skirmisher => "Skirmisher",
            BotClass::Trooper => "Trooper",
            BotClass::Scorcher => "Scorcher",
            BotClass::Demolisher => "Demolisher",
            BotClass::Juggernaut => "Juggernaut",
            BotClass::Mechanist => "Mechanist",
            BotClass::Surgeon => "Surgeon",
            BotClass::Longshot => "Longshot",
            BotClass::Phantom => "Phantom",
        }
    }

    /// All classes, in roster order.
    pub const ALL: [BotClass; 9] = [
        BotClass::Skirmisher,
        BotClass::Trooper,
        BotClass::Scorcher,
        BotClass::Demolisher,
        BotClass::Juggernaut,
        BotClass::Mechanist,
        BotClass::Surgeon,
        BotClass::Longshot,
        BotClass::Phantom,
    ];
}

/// Bot AI skill tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillTier {
    Easy,
    #[default]
    Normal,
    Hard,
    Expert,
}

impl SkillTier {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillTier::Easy => "Easy",
            SkillTier::Normal => "Normal",
            SkillTier::Hard => "Hard",
            SkillTier::Expert => "Expert",
        }
    }
}

/// Escalation tier of a bot. Transitions are one-directional:
/// Normal → Reinforced → Elite, with no demotion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BotTier {
    /// Stock variant.
    #[default]
    Normal,
    /// "Giant" variant: heavily armored, slower, larger.
    Reinforced,
    /// Boss variant: unique, always spawns alone.
    Elite,
}

/// Behavior flags written as `Attributes` lines in the popfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotAttribute {
    /// Every hit is a critical.
    AlwaysCrit,
    /// Never stops firing, even without a target.
    AlwaysFireWeapon,
    /// Reloads fully before re-engaging.
    HoldFireUntilFullReload,
    /// Support gauge starts full.
    SpawnWithFullCharge,
    /// Uses jump routes where the map provides them.
    AutoJump,
    /// Reinforced chassis: immune to knockback, crushes obstacles.
    Reinforced,
    /// Shown with a dedicated health bar in the HUD.
    BossHealthBar,
}

impl BotAttribute {
    pub fn as_str(self) -> &'static str {
        match self {
            BotAttribute::AlwaysCrit => "AlwaysCrit",
            BotAttribute::AlwaysFireWeapon => "AlwaysFireWeapon",
            BotAttribute::HoldFireUntilFullReload => "HoldFireUntilFullReload",
            BotAttribute::SpawnWithFullCharge => "SpawnWithFullCharge",
            BotAttribute::AutoJump => "AutoJump",
            BotAttribute::Reinforced => "Reinforced",
            BotAttribute::BossHealthBar => "BossHealthBar",
        }
    }
}

/// Restricts which weapon slot a bot may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponRestriction {
    PrimaryOnly,
    SecondaryOnly,
    MeleeOnly,
}

impl WeaponRestriction {
    pub fn as_str(self) -> &'static str {
        match self {
            WeaponRestriction::PrimaryOnly => "PrimaryOnly",
            WeaponRestriction::SecondaryOnly => "SecondaryOnly",
            WeaponRestriction::MeleeOnly => "MeleeOnly",
        }
    }
}
