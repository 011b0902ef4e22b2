//! Bot display-name generation.

use rand::Rng;

/// Generate a random bot name.
pub fn generate_name(rng: &mut impl Rng) -> String {
    let epithet = EPITHETS[rng.gen_range(0..EPITHETS.len())];
    let callsign = CALLSIGNS[rng.gen_range(0..CALLSIGNS.len())];

    format!("{epithet} {callsign}")
}

static EPITHETS: &[&str] = &[
    "Rusty",
    "Grim",
    "Howling",
    "Scrapheap",
    "Burnt",
    "Iron",
    "Crooked",
    "Rattling",
    "Smoldering",
    "Dented",
    "Feral",
    "Graveyard",
    "Oily",
    "Shrieking",
    "Patchwork",
    "Thundering",
    "Rogue",
    "Hollow",
    "Jagged",
    "Midnight",
    "Furnace",
    "Riveted",
    "Stray",
    "Crackling",
];

static CALLSIGNS: &[&str] = &[
    "Jackal",
    "Piston",
    "Vulture",
    "Cleaver",
    "Sprocket",
    "Mauler",
    "Wrench",
    "Hound",
    "Cinder",
    "Flywheel",
    "Ripper",
    "Gasket",
    "Prowler",
    "Anvil",
    "Shrike",
    "Crankshaft",
    "Widow",
    "Boiler",
    "Talon",
    "Grinder",
    "Magpie",
    "Camshaft",
    "Reaper",
    "Drifter",
];
