//! Popfile rendering for finished missions.
//!
//! Turns a `MissionDocument` into the tab-indented block syntax the
//! game's population loader reads. Records in, text out; nothing here
//! makes balancing decisions.

pub mod writer;

pub use writer::{render_popfile, write_popfile};

pub use rampart_core as core;
