//! Popfile serializer.
//!
//! Emits the tab-indented block syntax line by line, in the order the
//! game's loader expects. Rendering is pure; the file wrapper is a thin
//! convenience.

use std::fmt::Display;
use std::io;
use std::path::Path;

use rampart_core::constants::*;
use rampart_core::records::{
    BotRecord, MissionDocument, SpawnGroupRecord, SpawnPayload, SupportMissionRecord, TankRecord,
    WaveRecord,
};

/// Width of the slash rule in `// WAVE N` banners.
const WAVE_BANNER_RULE: usize = 110;

/// Render a mission document to popfile text.
pub fn render_popfile(doc: &MissionDocument) -> String {
    let mut w = PopWriter::new();

    w.line("// Mission file generated by rampart.");
    w.line(&format!(
        "// {} on {} for {} players.",
        doc.mission_name, doc.map_name, doc.players
    ));
    w.blank();
    w.line(&format!("#base {SABOTEUR_BASE_SCRIPT}"));
    w.blank();

    w.block_start("WaveSchedule");
    w.pair("StartingCurrency", doc.schedule.starting_currency);
    w.pair("RespawnWaveTime", doc.schedule.respawn_wave_time);
    if let Some(event_mode) = &doc.schedule.event_mode {
        w.pair("EventMode", event_mode);
    }
    if doc.schedule.fixed_respawn_wave_time {
        w.pair("FixedRespawnWaveTime", 1);
    }
    w.pair(
        "AddSaboteurWhenDamageDealtExceeds",
        doc.schedule.saboteur_damage_threshold,
    );
    w.pair(
        "AddSaboteurWhenKillCountExceeds",
        doc.schedule.saboteur_kill_threshold,
    );
    w.pair(
        "CanBotsAttackWhileInSpawnRoom",
        if doc.schedule.bots_attack_in_spawn {
            "yes"
        } else {
            "no"
        },
    );
    w.blank();

    render_support_mission(&mut w, &doc.support);

    for wave in &doc.waves {
        render_wave(&mut w, wave);
    }

    w.block_end(); // WaveSchedule
    w.out
}

/// Render a mission document and write it to disk.
pub fn write_popfile(doc: &MissionDocument, path: &Path) -> io::Result<()> {
    std::fs::write(path, render_popfile(doc))
}

fn render_support_mission(w: &mut PopWriter, support: &SupportMissionRecord) {
    w.block_start("Mission");
    w.pair("Objective", &support.objective);
    w.pair("InitialCooldown", fmt_float(support.initial_cooldown));
    w.pair("Where", &support.location);
    w.pair("BeginAtWave", support.begin_at_wave);
    w.pair("RunForThisManyWaves", support.run_for_waves);
    w.pair("CooldownTime", fmt_float(support.cooldown));
    w.block_start("Bot");
    w.pair("Template", &support.bot_template);
    w.block_end(); // Bot
    w.block_end(); // Mission
}

fn render_wave(w: &mut PopWriter, wave: &WaveRecord) {
    w.line(&format!(
        "// WAVE {} {}",
        wave.number,
        "/".repeat(WAVE_BANNER_RULE)
    ));
    w.block_start("Wave");
    w.block_start("StartWaveOutput");
    w.pair("Target", &wave.start_relay);
    w.pair("Action", "Trigger");
    w.block_end(); // StartWaveOutput
    w.block_start("DoneOutput");
    w.pair("Target", &wave.finish_relay);
    w.pair("Action", "Trigger");
    w.block_end(); // DoneOutput

    for group in &wave.groups {
        render_group(w, group);
    }

    w.block_end(); // Wave
}

fn render_group(w: &mut PopWriter, group: &SpawnGroupRecord) {
    w.block_start("WaveSpawn");
    w.pair("Name", quoted(&group.name));
    w.pair("TotalCount", group.total_count);
    w.pair("WaitBeforeStarting", fmt_float(group.wait_before_starting));
    w.pair("WaitBetweenSpawns", fmt_float(group.wait_between_spawns));
    w.pair("TotalCurrency", group.total_currency);

    match &group.payload {
        SpawnPayload::Bot {
            spawn_count,
            max_active,
            location,
            bot,
        } => {
            w.pair("SpawnCount", *spawn_count);
            w.pair("MaxActive", *max_active);
            w.pair("Where", location);
            w.blank();
            render_bot(w, bot);
        }
        SpawnPayload::Tank(tank) => {
            w.blank();
            w.block_start("FirstSpawnOutput");
            w.pair("Target", TANK_SPAWN_RELAY);
            w.pair("Action", "Trigger");
            w.block_end(); // FirstSpawnOutput
            w.blank();
            render_tank(w, tank);
        }
    }

    w.block_end(); // WaveSpawn
}

fn render_bot(w: &mut PopWriter, bot: &BotRecord) {
    w.block_start("Bot");
    w.pair("Class", bot.class.as_str());
    w.pair("Name", quoted(&bot.name));
    w.pair("Icon", &bot.icon);
    w.pair("Health", bot.health);
    if let Some(scale) = bot.scale {
        w.pair("Scale", fmt_float(scale));
    }
    w.pair("Skill", bot.skill.as_str());
    if let Some(restriction) = bot.weapon_restriction {
        w.pair("WeaponRestrictions", restriction.as_str());
    }
    if let Some(range) = bot.max_vision_range {
        w.pair("MaxVisionRange", fmt_float(range));
    }
    if let Some(zone) = &bot.teleport_location {
        w.pair("TeleportWhere", zone);
    }
    for attribute in &bot.attributes {
        w.pair("Attributes", attribute.as_str());
    }
    if let Some((min, max)) = bot.auto_jump {
        w.pair("AutoJumpMin", fmt_float(min));
        w.pair("AutoJumpMax", fmt_float(max));
    }
    for item in &bot.items {
        w.pair("Item", quoted(item));
    }
    if !bot.character_attributes.is_empty() {
        w.block_start("CharacterAttributes");
        for (key, value) in &bot.character_attributes {
            w.pair(&quoted(key), fmt_float(*value));
        }
        w.block_end(); // CharacterAttributes
    }
    w.block_end(); // Bot
}

fn render_tank(w: &mut PopWriter, tank: &TankRecord) {
    w.block_start("Tank");
    w.pair("Health", tank.health);
    w.pair("Speed", fmt_float(tank.speed));
    w.pair("Name", quoted(TANK_NAME));
    w.pair("StartingPathTrackNode", quoted(TANK_PATH_START_NODE));
    w.block_start("OnKilledOutput");
    w.pair("Target", TANK_KILLED_RELAY);
    w.pair("Action", "Trigger");
    w.block_end(); // OnKilledOutput
    w.block_start("OnBombDroppedOutput");
    w.pair("Target", TANK_DEPLOY_RELAY);
    w.pair("Action", "Trigger");
    w.block_end(); // OnBombDroppedOutput
    w.block_end(); // Tank
}

/// Tab-indented line emitter. Blocks manage their own indentation.
struct PopWriter {
    out: String,
    indent: usize,
}

impl PopWriter {
    fn new() -> Self {
        PopWriter {
            out: String::new(),
            indent: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push('\t');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn pair<V: Display>(&mut self, key: &str, value: V) {
        self.line(&format!("{key} {value}"));
    }

    /// Blank separator line, never indented.
    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn block_start(&mut self, name: &str) {
        self.line(name);
        self.line("{");
        self.indent += 1;
    }

    fn block_end(&mut self) {
        self.indent -= 1;
        self.line("}");
    }
}

fn quoted(text: &str) -> String {
    format!("\"{text}\"")
}

/// Floats print the way the loader expects: no fraction when integral.
fn fmt_float(value: f32) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
