//! Class-specific bot profiles.
//!
//! Consolidates per-class parameters for the generator.

use rampart_core::enums::{BotAttribute, BotClass, WeaponRestriction};

/// Static parameters for a hostile class.
pub struct ClassProfile {
    /// Stock health.
    pub base_health: i32,
    /// Reinforced ("giant") health. None for classes that never field a
    /// reinforced variant; those bots are capped at normal tier.
    pub reinforced_health: Option<i32>,
    /// HUD icon slug for the stock variant.
    pub icon: &'static str,
    /// Behavior flags every bot of the class carries.
    pub attributes: &'static [BotAttribute],
    /// Equipment always granted.
    pub items: &'static [&'static str],
    /// Extra equipment granted at Hard skill and above.
    pub advanced_items: &'static [&'static str],
    pub weapon_restriction: Option<WeaponRestriction>,
    /// Sight distance cap, for classes that would otherwise cover the
    /// whole map.
    pub max_vision_range: Option<f32>,
    /// Whether the class deploys teleport beacons for the horde.
    pub builds_teleporters: bool,
    /// Whether the class may take jump routes.
    pub can_auto_jump: bool,
}

/// Get the profile for a given class.
pub fn get_profile(class: BotClass) -> ClassProfile {
    match class {
        BotClass::Skirmisher => ClassProfile {
            base_health: 125,
            reinforced_health: Some(1600),
            icon: "skirmisher",
            attributes: &[],
            items: &[],
            advanced_items: &["razor flechettes"],
            weapon_restriction: None,
            max_vision_range: None,
            builds_teleporters: false,
            can_auto_jump: true,
        },
        BotClass::Trooper => ClassProfile {
            base_health: 200,
            reinforced_health: Some(3800),
            icon: "trooper",
            attributes: &[],
            items: &[],
            advanced_items: &["cluster warheads"],
            weapon_restriction: None,
            max_vision_range: None,
            builds_teleporters: false,
            can_auto_jump: false,
        },
        BotClass::Scorcher => ClassProfile {
            base_health: 175,
            reinforced_health: Some(3000),
            icon: "scorcher",
            attributes: &[BotAttribute::AlwaysFireWeapon],
            items: &[],
            advanced_items: &["pressure accelerant"],
            weapon_restriction: None,
            max_vision_range: None,
            builds_teleporters: false,
            can_auto_jump: false,
        },
        BotClass::Demolisher => ClassProfile {
            base_health: 175,
            reinforced_health: Some(3300),
            icon: "demolisher",
            attributes: &[BotAttribute::HoldFireUntilFullReload],
            items: &[],
            advanced_items: &["impact charges"],
            weapon_restriction: None,
            max_vision_range: None,
            builds_teleporters: false,
            can_auto_jump: false,
        },
        BotClass::Juggernaut => ClassProfile {
            base_health: 300,
            reinforced_health: Some(5000),
            icon: "juggernaut",
            attributes: &[],
            items: &[],
            advanced_items: &["tungsten drum"],
            weapon_restriction: None,
            max_vision_range: None,
            builds_teleporters: false,
            can_auto_jump: false,
        },
        BotClass::Mechanist => ClassProfile {
            base_health: 125,
            reinforced_health: None,
            icon: "mechanist",
            attributes: &[],
            items: &["beacon toolkit"],
            advanced_items: &[],
            weapon_restriction: None,
            max_vision_range: None,
            builds_teleporters: true,
            can_auto_jump: false,
        },
        BotClass::Surgeon => ClassProfile {
            base_health: 150,
            reinforced_health: Some(4500),
            icon: "surgeon",
            attributes: &[BotAttribute::SpawnWithFullCharge],
            items: &["field regenerator"],
            advanced_items: &["overcharge kit"],
            weapon_restriction: None,
            max_vision_range: None,
            builds_teleporters: false,
            can_auto_jump: false,
        },
        BotClass::Longshot => ClassProfile {
            base_health: 125,
            reinforced_health: None,
            icon: "longshot",
            attributes: &[],
            items: &[],
            advanced_items: &[],
            weapon_restriction: None,
            max_vision_range: Some(2400.0),
            builds_teleporters: false,
            can_auto_jump: false,
        },
        BotClass::Phantom => ClassProfile {
            base_health: 125,
            reinforced_health: None,
            icon: "phantom",
            attributes: &[],
            items: &["veil projector"],
            advanced_items: &[],
            weapon_restriction: Some(WeaponRestriction::MeleeOnly),
            max_vision_range: None,
            builds_teleporters: false,
            can_auto_jump: false,
        },
    }
}
