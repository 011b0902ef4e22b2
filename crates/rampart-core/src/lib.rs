//! Core types and definitions for the RAMPART mission generator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! mission configuration, tuning constants, the mission document record
//! tree, and the bot catalog interface. It performs no simulation and no
//! I/O of its own.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod enums;
pub mod records;

pub use catalog::{BotCatalog, BotMeta};
pub use config::{ConfigError, EconomyTuning, MissionConfig};
pub use records::MissionDocument;
