//! mission-gen: procedural wave mission generator.
//!
//! Usage:
//!   mission-gen generate --map facility --players 4 --waves 7 --seed 31337
//!   mission-gen generate --map outpost --mission assault --output outpost_assault.pop

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use rampart_botgen::BotGenerator;
use rampart_core::config::MissionConfig;
use rampart_popfile::write_popfile;
use rampart_sim::pressure::decay_rate_for_wave;
use rampart_sim::MissionPlanner;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "generate" => cmd_generate(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "mission-gen: RAMPART wave mission generator\n\
         \n\
         Commands:\n\
         \n\
         generate  Generate a mission popfile\n\
         \n\
           --map <name>               Target map name (default: facility)\n\
           --mission <name>           Mission name for the filename (default: generated)\n\
           --waves <N>                Number of waves (default: 7)\n\
           --players <N>              Defender count to balance around (default: 4)\n\
           --starting-currency <N>    Currency at mission start (default: 400)\n\
           --currency-per-wave <N>    Currency awarded per cleared wave (default: 600)\n\
           --wave-duration <seconds>  Wave length in seconds (default: 120)\n\
           --tank-chance <0..1>       Probability a spawn group is a tank (default: 0.1)\n\
           --max-icons <N>            Distinct HUD icons per wave (default: 8)\n\
           --max-groups <N>           Spawn groups per wave (default: 20)\n\
           --max-group-time <seconds> Spawn window ceiling per bot group (default: 60)\n\
           --respawn-time <seconds>   Defender respawn time (default: 6)\n\
           --event-mode <name>        Event gate for the mission (default: none)\n\
           --fixed-respawn            Keep respawn time fixed across waves\n\
           --bots-attack-in-spawn     Bots are live inside their spawn zone\n\
           --saboteur-damage <N>      Damage threshold summoning a saboteur (default: 500)\n\
           --saboteur-kills <N>       Kill threshold summoning a saboteur (default: 1)\n\
           --saboteur-cooldown <s>    Delay between saboteur sorties (default: 40)\n\
           --seed <N>                 RNG seed (default: 0)\n\
           --output <path>            Output path (default: <map>_<players>p_<mission>.pop)\n\
         \n\
         Examples:\n\
         \n\
           mission-gen generate --map facility --players 4 --waves 7 --seed 31337\n\
           mission-gen generate --map outpost --tank-chance 0.2 --output outpost_assault.pop\n"
    );
}

fn parse_string(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn parse_value<T: FromStr>(args: &[String], flag: &str) -> Option<T> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(value) = args[i + 1].parse() {
                return Some(value);
            }
        }
    }
    None
}

fn parse_output(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--output" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

// --- Generate command ---

fn cmd_generate(args: &[String]) {
    let mut config = MissionConfig::default();

    if let Some(map) = parse_string(args, "--map") {
        config.map_name = map;
    }
    if let Some(mission) = parse_string(args, "--mission") {
        config.mission_name = mission;
    }
    if let Some(waves) = parse_value(args, "--waves") {
        config.waves = waves;
    }
    if let Some(players) = parse_value(args, "--players") {
        config.players = players;
    }
    if let Some(currency) = parse_value(args, "--starting-currency") {
        config.starting_currency = currency;
    }
    if let Some(currency) = parse_value(args, "--currency-per-wave") {
        config.currency_per_wave = currency;
    }
    if let Some(duration) = parse_value(args, "--wave-duration") {
        config.max_time = duration;
    }
    if let Some(chance) = parse_value(args, "--tank-chance") {
        config.tank_chance = chance;
    }
    if let Some(cap) = parse_value(args, "--max-icons") {
        config.max_icons = cap;
    }
    if let Some(cap) = parse_value(args, "--max-groups") {
        config.max_groups = cap;
    }
    if let Some(ceiling) = parse_value(args, "--max-group-time") {
        config.max_bot_group_time = ceiling;
    }
    if let Some(respawn) = parse_value(args, "--respawn-time") {
        config.respawn_wave_time = respawn;
    }
    if let Some(event) = parse_string(args, "--event-mode") {
        config.event_mode = Some(event);
    }
    if has_flag(args, "--fixed-respawn") {
        config.fixed_respawn_wave_time = true;
    }
    if has_flag(args, "--bots-attack-in-spawn") {
        config.bots_attack_in_spawn = true;
    }
    if let Some(damage) = parse_value(args, "--saboteur-damage") {
        config.saboteur_damage_threshold = damage;
    }
    if let Some(kills) = parse_value(args, "--saboteur-kills") {
        config.saboteur_kill_threshold = kills;
    }
    if let Some(cooldown) = parse_value(args, "--saboteur-cooldown") {
        config.saboteur_cooldown = cooldown;
    }

    let seed: u64 = parse_value(args, "--seed").unwrap_or(0);

    let output = match parse_output(args) {
        Some(p) => p,
        None => PathBuf::from(format!(
            "{}_{}p_{}.pop",
            config.map_name, config.players, config.mission_name
        )),
    };

    let mut planner = match MissionPlanner::new(config, seed) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let config = planner.config().clone();

    eprintln!(
        "Generating {} waves on {} for {} players (seed {seed})...",
        config.waves, config.map_name, config.players
    );

    let mut catalog = BotGenerator::new();
    let doc = planner.generate(&mut catalog);

    let mut currency = config.starting_currency;
    for wave in &doc.waves {
        let decay_rate = decay_rate_for_wave(currency, config.players, &config.economy);
        eprintln!(
            "Wave {}/{}: decay rate {:.2}, {} spawn groups.",
            wave.number,
            config.waves,
            decay_rate,
            wave.groups.len()
        );
        currency += config.currency_per_wave;
    }

    eprintln!("Writing popfile to {}...", output.display());
    match write_popfile(&doc, &output) {
        Ok(()) => {
            let file_size = std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
            eprintln!("Done! Output: {} ({} bytes)", output.display(), file_size);
        }
        Err(e) => {
            eprintln!("Error writing popfile: {e}");
            process::exit(1);
        }
    }
}
