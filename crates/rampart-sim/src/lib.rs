//! Wave content simulation and balancing for RAMPART missions.
//!
//! Implements the pressure model, the spawn-group sizing search, the
//! escalation policy, and the wave/mission planners that together decide
//! what spawns, how strong it is, and when it arrives.

pub mod escalation;
pub mod mission;
pub mod pressure;
pub mod sizer;
pub mod wave;

pub use mission::MissionPlanner;

pub use rampart_core as core;
