//! Hostile bot generation for RAMPART missions.
//!
//! Implements the bot catalog consumed by the wave planner: per-class
//! profiles, skill and modifier rolls scaled to the defenders' strength,
//! and the reinforced/elite escalation transforms.

pub mod generator;
pub mod names;
pub mod profiles;

pub use generator::BotGenerator;

pub use rampart_core as core;

#[cfg(test)]
mod tests;
