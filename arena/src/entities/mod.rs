//! Battle-ready entities.

mod combatant;

pub use combatant::{AttackOutcome, Combatant};
