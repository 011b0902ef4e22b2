#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use rampart_core::catalog::{BotCatalog, BotMeta};
    use rampart_core::constants::*;
    use rampart_core::enums::{BotAttribute, BotClass, BotTier, SkillTier};
    use rampart_core::records::BotRecord;

    use crate::generator::{roll_skill, skill_pressure, BotGenerator};
    use crate::names::generate_name;
    use crate::profiles::get_profile;

    fn sample_meta(class: BotClass) -> BotMeta {
        let profile = get_profile(class);
        BotMeta {
            bot: BotRecord {
                class,
                name: "Test Subject".to_string(),
                icon: profile.icon.to_string(),
                health: profile.base_health,
                scale: None,
                skill: SkillTier::Normal,
                weapon_restriction: profile.weapon_restriction,
                max_vision_range: profile.max_vision_range,
                teleport_location: None,
                attributes: profile.attributes.to_vec(),
                auto_jump: None,
                items: Vec::new(),
                character_attributes: Vec::new(),
            },
            pressure: 1.0,
            move_speed_bonus: 1.2,
            tier: BotTier::Normal,
            capped: profile.reinforced_health.is_none(),
        }
    }

    // ---- Profiles ----

    #[test]
    fn test_profiles_cover_all_classes() {
        for class in BotClass::ALL {
            let profile = get_profile(class);
            assert!(profile.base_health > 0, "{:?} needs positive health", class);
            assert!(!profile.icon.is_empty(), "{:?} needs an icon", class);
            if let Some(reinforced) = profile.reinforced_health {
                assert!(
                    reinforced > profile.base_health,
                    "{:?} reinforced variant should outlast the stock one",
                    class
                );
            }
        }
    }

    #[test]
    fn test_support_classes_never_reinforce() {
        for class in [BotClass::Mechanist, BotClass::Longshot, BotClass::Phantom] {
            assert!(get_profile(class).reinforced_health.is_none());
        }
        assert!(get_profile(BotClass::Trooper).reinforced_health.is_some());
    }

    // ---- Names ----

    #[test]
    fn test_generate_name() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let name = generate_name(&mut rng);
        assert!(!name.is_empty());
        assert!(name.contains(' '), "names are epithet + callsign: {name}");
    }

    #[test]
    fn test_name_variety() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let names: Vec<String> = (0..100).map(|_| generate_name(&mut rng)).collect();

        let unique: std::collections::HashSet<_> = names.iter().collect();
        assert!(unique.len() > 10);
    }

    // ---- Skill rolls ----

    #[test]
    fn test_skill_tracks_decay() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            assert!(roll_skill(0.0, &mut rng) <= SkillTier::Normal);
        }
        for _ in 0..200 {
            assert!(roll_skill(SKILL_GRADE_SCALE, &mut rng) >= SkillTier::Hard);
        }
    }

    #[test]
    fn test_skill_pressure_monotone() {
        assert!(skill_pressure(SkillTier::Easy) < skill_pressure(SkillTier::Normal));
        assert!(skill_pressure(SkillTier::Normal) < skill_pressure(SkillTier::Hard));
        assert!(skill_pressure(SkillTier::Hard) < skill_pressure(SkillTier::Expert));
    }

    // ---- Catalog requests ----

    #[test]
    fn test_request_bot_populates_record() {
        let mut gen = BotGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..100 {
            let meta = gen.request_bot(10.0, &mut rng);
            let profile = get_profile(meta.bot.class);
            assert!(!meta.bot.name.is_empty());
            assert!(!meta.bot.icon.is_empty());
            assert!(meta.pressure > 0.0);
            assert!(meta.move_speed_bonus >= 1.0);
            // Low decay never escalates out of the catalog.
            assert_eq!(meta.tier, BotTier::Normal);
            assert_eq!(meta.bot.health, profile.base_health);
            assert_eq!(meta.capped, profile.reinforced_health.is_none());
        }
    }

    #[test]
    fn test_request_bot_deterministic() {
        let mut a_gen = BotGenerator::new();
        let mut b_gen = BotGenerator::new();
        let mut a_rng = ChaCha8Rng::seed_from_u64(42);
        let mut b_rng = ChaCha8Rng::seed_from_u64(42);

        let a: Vec<BotMeta> = (0..20).map(|_| a_gen.request_bot(30.0, &mut a_rng)).collect();
        let b: Vec<BotMeta> = (0..20).map(|_| b_gen.request_bot(30.0, &mut b_rng)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_auto_jump_consistency() {
        let mut gen = BotGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..300 {
            let meta = gen.request_bot(0.0, &mut rng);
            let has_attr = meta.bot.attributes.contains(&BotAttribute::AutoJump);
            assert_eq!(meta.bot.auto_jump.is_some(), has_attr);
            if let Some((min, max)) = meta.bot.auto_jump {
                assert!(get_profile(meta.bot.class).can_auto_jump);
                assert!(min > 0.0 && min < max);
            }
        }
    }

    #[test]
    fn test_mechanist_builds_teleporters() {
        let mut gen = BotGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut found = false;
        for _ in 0..300 {
            let meta = gen.request_bot(0.0, &mut rng);
            if meta.bot.class == BotClass::Mechanist {
                assert_eq!(
                    meta.bot.teleport_location.as_deref(),
                    Some(HOSTILE_SPAWN_ZONE)
                );
                assert!(meta.capped);
                found = true;
                break;
            }
        }
        assert!(found, "no Mechanist drawn in 300 requests");
    }

    #[test]
    fn test_advanced_items_at_high_skill() {
        let mut gen = BotGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let meta = gen.request_bot(100.0, &mut rng);
            assert!(meta.bot.skill >= SkillTier::Hard);
            let profile = get_profile(meta.bot.class);
            for item in profile.advanced_items {
                assert!(
                    meta.bot.items.iter().any(|i| i == item),
                    "{:?} at {:?} skill missing {item}",
                    meta.bot.class,
                    meta.bot.skill
                );
            }
        }
    }

    #[test]
    fn test_with_classes_restricts_roster() {
        let mut gen = BotGenerator::with_classes(vec![BotClass::Scorcher]);
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        for _ in 0..50 {
            let meta = gen.request_bot(10.0, &mut rng);
            assert_eq!(meta.bot.class, BotClass::Scorcher);
        }
    }

    #[test]
    #[should_panic(expected = "empty class roster")]
    fn test_with_classes_rejects_empty_roster() {
        BotGenerator::with_classes(Vec::new());
    }

    // ---- Escalation transforms ----

    #[test]
    fn test_promote_reinforces() {
        let gen = BotGenerator::new();
        let promoted = gen.promote(sample_meta(BotClass::Trooper));

        assert_eq!(promoted.tier, BotTier::Reinforced);
        assert_eq!(promoted.bot.health, 3800);
        assert_eq!(promoted.bot.scale, Some(REINFORCED_SCALE));
        assert_eq!(promoted.bot.icon, "trooper_reinforced");
        assert_eq!(promoted.bot.name, "Reinforced Test Subject");
        assert!(promoted.bot.attributes.contains(&BotAttribute::Reinforced));
        assert!((promoted.move_speed_bonus - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_promote_capped_no_change() {
        let gen = BotGenerator::new();
        let meta = sample_meta(BotClass::Phantom);
        let promoted = gen.promote(meta.clone());
        assert_eq!(promoted, meta);
    }

    #[test]
    fn test_pre_reinforced_at_moderate_decay() {
        let mut gen = BotGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut found = false;
        for _ in 0..2000 {
            let meta = gen.request_bot(50.0, &mut rng);
            if meta.tier == BotTier::Reinforced {
                let profile = get_profile(meta.bot.class);
                assert_eq!(meta.bot.health, profile.reinforced_health.unwrap());
                assert_eq!(meta.bot.scale, Some(REINFORCED_SCALE));
                assert!(meta.bot.icon.ends_with("_reinforced"));
                assert!(meta.bot.attributes.contains(&BotAttribute::Reinforced));
                found = true;
                break;
            }
        }
        assert!(found, "no reinforced bot drawn in 2000 requests");
    }

    #[test]
    fn test_elite_minted_at_high_decay() {
        let mut gen = BotGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut found = false;
        for _ in 0..2000 {
            let meta = gen.request_bot(100.0, &mut rng);
            if meta.tier == BotTier::Elite {
                let profile = get_profile(meta.bot.class);
                let reinforced = profile.reinforced_health.unwrap();
                assert_eq!(meta.bot.health, reinforced * ELITE_HEALTH_MULTIPLIER);
                assert_eq!(meta.bot.scale, Some(ELITE_SCALE));
                assert!(meta.bot.icon.ends_with("_elite"));
                assert!(meta.bot.name.starts_with("Elite "));
                assert!(meta.bot.attributes.contains(&BotAttribute::BossHealthBar));
                found = true;
                break;
            }
        }
        assert!(found, "no elite drawn in 2000 requests");
    }
}
