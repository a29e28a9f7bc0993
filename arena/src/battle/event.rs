//! Battle log entries.

use std::fmt;

use arena_shared::CombatantRole;

/// One entry in the battle log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    Attack {
        attacker: CombatantRole,
        attacker_name: String,
        defender: CombatantRole,
        defender_name: String,
        damage: u32,
        critical: bool,
    },
    Down {
        role: CombatantRole,
        name: String,
    },
    Winner {
        role: CombatantRole,
        name: String,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack {
                attacker_name,
                defender_name,
                damage,
                critical,
                ..
            } => {
                write!(f, "{} attacked {} for {} damage", attacker_name, defender_name, damage)?;
                if *critical {
                    write!(f, " (Critical!)")?;
                }
                Ok(())
            }
            Self::Down { name, .. } => write!(f, "{} down!", name),
            Self::Winner { name, .. } => write!(f, "The winner is {}!", name),
        }
    }
}
