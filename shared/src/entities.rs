//! Shared entity definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Probability that a single attack is a critical hit
pub const CRITICAL_CHANCE: f64 = 0.1;

/// Damage multiplier applied on a critical hit
pub const CRITICAL_MULTIPLIER: u32 = 2;

/// Normalized combat stats extracted from a detail record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTuple {
    pub name: String,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl StatTuple {
    pub fn new(name: impl Into<String>, hp: u32, attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            defense,
            speed,
        }
    }
}

impl fmt::Display for StatTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{name: {}, hp: {}, attack: {}, defense: {}, speed: {}}}",
            self.name, self.hp, self.attack, self.defense, self.speed
        )
    }
}

/// Which side of a battle a combatant fights on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatantRole {
    A,
    B,
}

impl CombatantRole {
    pub fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}
