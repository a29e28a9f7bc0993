//! Combatant built from normalized stats.

use arena_shared::{StatTuple, CRITICAL_CHANCE, CRITICAL_MULTIPLIER};
use rand::Rng;

/// Result of a single attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub damage: u32,
    pub critical: bool,
}

/// Mutable battle state for one creature.
///
/// `health` never exceeds `max_health` and never increases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub attack_power: u32,
    pub defense: u32,
    pub speed: u32,
}

impl Combatant {
    pub fn new(stats: &StatTuple) -> Self {
        Self {
            name: stats.name.clone(),
            health: stats.hp,
            max_health: stats.hp,
            attack_power: stats.attack,
            defense: stats.defense,
            speed: stats.speed,
        }
    }

    /// Take damage, bottoming out at zero
    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Damage before any critical roll, never less than 1
    pub fn base_damage_against(&self, target: &Combatant) -> u32 {
        self.attack_power.saturating_sub(target.defense).max(1)
    }

    /// Attack `target`, applying the damage to it.
    ///
    /// `rng` supplies one uniform draw; below [`CRITICAL_CHANCE`] the hit is critical.
    pub fn attack<R: Rng + ?Sized>(&self, target: &mut Combatant, rng: &mut R) -> AttackOutcome {
        let mut damage = self.base_damage_against(target);
        let critical = rng.gen::<f64>() < CRITICAL_CHANCE;
        if critical {
            damage = damage.saturating_mul(CRITICAL_MULTIPLIER);
        }

        target.take_damage(damage);
        AttackOutcome { damage, critical }
    }
}

impl From<StatTuple> for Combatant {
    fn from(stats: StatTuple) -> Self {
        Self::new(&stats)
    }
}
