//! Sizing escalation policy.
//!
//! Pure decision function over one sizing iteration. No randomness and no
//! transforms here: the sizer rolls the escalation chance and applies the
//! health/tier changes a step calls for.

use rampart_core::constants::*;

/// Input to the policy for a single sizing iteration.
pub struct SizingContext {
    /// Members that fit the group's time budget at the current interval.
    pub max_count: i32,
    /// Seconds between releases at the current roll.
    pub interval: f32,
    pub health: i32,
    /// Seconds left in the wave.
    pub time_remaining: i32,
    pub elite: bool,
    pub reinforced: bool,
    pub capped: bool,
}

/// What the sizer should do with the current iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingStep {
    /// Freeze the group at a count drawn from the feasible range.
    Accept,
    /// Freeze the group with a single member.
    AcceptSingle,
    /// Wave is nearly over: field a single member at full strength if the
    /// interval fits the wave's whole duration, otherwise reroll.
    AcceptNearEnd,
    /// The bot is too strong for the remaining time. Reduce health and
    /// reroll.
    ShrinkHealth,
    /// Spawns would land under a second apart. Escalate with high
    /// probability; otherwise accept the near-continuous stream.
    MaybeEscalate,
}

/// Decide the fate of one bot sizing iteration.
pub fn evaluate(ctx: &SizingContext) -> SizingStep {
    if ctx.max_count == 0 && ctx.health > BOT_HEALTH_FLOOR {
        if ctx.time_remaining > NEAR_END_WINDOW {
            return SizingStep::ShrinkHealth;
        }
        return SizingStep::AcceptNearEnd;
    }

    if ctx.interval < 1.0 {
        return SizingStep::MaybeEscalate;
    }

    // Elites and capped bots that already reinforced have nowhere left to
    // escalate; neither do bots at the health floor. One of each is enough.
    if ctx.elite || (ctx.capped && ctx.reinforced) || ctx.health <= BOT_HEALTH_FLOOR {
        return SizingStep::AcceptSingle;
    }

    SizingStep::Accept
}
