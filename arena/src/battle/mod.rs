//! Turn-based battle between two combatants.

mod event;

pub use event::BattleEvent;

use arena_shared::CombatantRole;
use log::debug;
use rand::Rng;

use crate::entities::Combatant;
use crate::error::{ArenaError, Result};

/// Battle progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    Ongoing,
    Finished,
}

/// Final result of a battle
#[derive(Debug, Clone)]
pub struct BattleOutcome {
    pub events: Vec<BattleEvent>,
    pub winner: CombatantRole,
    pub winner_name: String,
}

/// Battle between combatant A and combatant B.
///
/// Each round the faster combatant strikes first (A on ties). A knockout of
/// the defender ends the round before the counter-attack.
#[derive(Debug)]
pub struct Battle {
    a: Combatant,
    b: Combatant,
    state: BattleState,
    round: u32,
    events: Vec<BattleEvent>,
}

impl Battle {
    /// Start a battle; both combatants must have health left
    pub fn new(a: Combatant, b: Combatant) -> Result<Self> {
        for (role, c) in [(CombatantRole::A, &a), (CombatantRole::B, &b)] {
            if !c.is_alive() {
                return Err(ArenaError::validation(format!(
                    "combatant {:?} ({}) has no health left",
                    role, c.name
                )));
            }
        }

        Ok(Self {
            a,
            b,
            state: BattleState::Ongoing,
            round: 0,
            events: Vec::new(),
        })
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn combatant(&self, role: CombatantRole) -> &Combatant {
        match role {
            CombatantRole::A => &self.a,
            CombatantRole::B => &self.b,
        }
    }

    /// Who strikes first this round
    fn turn_order(&self) -> (CombatantRole, CombatantRole) {
        if self.a.speed >= self.b.speed {
            (CombatantRole::A, CombatantRole::B)
        } else {
            (CombatantRole::B, CombatantRole::A)
        }
    }

    /// Mutable access to (attacker, defender)
    fn pair_mut(&mut self, attacker: CombatantRole) -> (&Combatant, &mut Combatant) {
        match attacker {
            CombatantRole::A => (&self.a, &mut self.b),
            CombatantRole::B => (&self.b, &mut self.a),
        }
    }

    fn strike<R: Rng + ?Sized>(&mut self, attacker: CombatantRole, rng: &mut R) -> bool {
        let (atk, def) = self.pair_mut(attacker);
        let outcome = atk.attack(def, rng);

        let event = BattleEvent::Attack {
            attacker,
            attacker_name: atk.name.clone(),
            defender: attacker.opponent(),
            defender_name: def.name.clone(),
            damage: outcome.damage,
            critical: outcome.critical,
        };
        let defender_alive = def.is_alive();

        self.events.push(event);
        defender_alive
    }

    fn knock_out(&mut self, role: CombatantRole) {
        let name = self.combatant(role).name.clone();
        self.events.push(BattleEvent::Down { role, name });
    }

    /// Play one round and report the resulting state
    pub fn play_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> BattleState {
        if self.state == BattleState::Finished {
            return self.state;
        }

        self.round += 1;
        let (attacker, defender) = self.turn_order();

        if !self.strike(attacker, rng) {
            self.knock_out(defender);
            self.state = BattleState::Finished;
            return self.state;
        }

        // Counter-attack; a knocked out attacker ends the battle at the next check
        if !self.strike(defender, rng) {
            self.knock_out(attacker);
        }

        if !(self.a.is_alive() && self.b.is_alive()) {
            self.state = BattleState::Finished;
        }

        debug!(
            "Round {}: {} {}/{} vs {} {}/{}",
            self.round,
            self.a.name,
            self.a.health,
            self.a.max_health,
            self.b.name,
            self.b.health,
            self.b.max_health
        );

        self.state
    }

    /// Announce the winner and hand back the full log.
    ///
    /// Plays any remaining rounds first.
    pub fn finish<R: Rng + ?Sized>(mut self, rng: &mut R) -> BattleOutcome {
        while self.play_round(rng) == BattleState::Ongoing {}

        let winner = if self.a.is_alive() {
            CombatantRole::A
        } else {
            CombatantRole::B
        };
        let winner_name = self.combatant(winner).name.clone();

        self.events.push(BattleEvent::Winner {
            role: winner,
            name: winner_name.clone(),
        });

        BattleOutcome {
            events: self.events,
            winner,
            winner_name,
        }
    }
}

/// Run a full battle between `a` and `b`
pub fn run_battle<R: Rng + ?Sized>(a: Combatant, b: Combatant, rng: &mut R) -> Result<BattleOutcome> {
    let battle = Battle::new(a, b)?;
    Ok(battle.finish(rng))
}

#[cfg(test)]
mod tests {
    use arena_shared::StatTuple;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn never_crit() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn combatant(name: &str, hp: u32, attack: u32, defense: u32, speed: u32) -> Combatant {
        Combatant::new(&StatTuple::new(name, hp, attack, defense, speed))
    }

    #[test]
    fn test_faster_combatant_always_attacks_first() {
        let a = combatant("fast", 10, 5, 0, 10);
        let b = combatant("slow", 10, 5, 0, 1);

        let outcome = run_battle(a, b, &mut never_crit()).unwrap();

        // B falls in round 2 before it can hit back again
        assert_eq!(
            outcome.events,
            vec![
                BattleEvent::Attack {
                    attacker: CombatantRole::A,
                    attacker_name: "fast".into(),
                    defender: CombatantRole::B,
                    defender_name: "slow".into(),
                    damage: 5,
                    critical: false,
                },
                BattleEvent::Attack {
                    attacker: CombatantRole::B,
                    attacker_name: "slow".into(),
                    defender: CombatantRole::A,
                    defender_name: "fast".into(),
                    damage: 5,
                    critical: false,
                },
                BattleEvent::Attack {
                    attacker: CombatantRole::A,
                    attacker_name: "fast".into(),
                    defender: CombatantRole::B,
                    defender_name: "slow".into(),
                    damage: 5,
                    critical: false,
                },
                BattleEvent::Down {
                    role: CombatantRole::B,
                    name: "slow".into(),
                },
                BattleEvent::Winner {
                    role: CombatantRole::A,
                    name: "fast".into(),
                },
            ]
        );
        assert_eq!(outcome.winner, CombatantRole::A);
        assert_eq!(outcome.winner_name, "fast");
    }

    #[test]
    fn test_speed_tie_favours_first_listed() {
        let a = combatant("first", 3, 1, 0, 7);
        let b = combatant("second", 3, 1, 0, 7);

        let mut battle = Battle::new(a, b).unwrap();
        let mut rng = never_crit();

        while battle.state() == BattleState::Ongoing {
            let logged = battle.events().len();
            battle.play_round(&mut rng);

            match &battle.events()[logged] {
                BattleEvent::Attack { attacker, .. } => assert_eq!(*attacker, CombatantRole::A),
                other => panic!("round {} opened with {:?}", battle.round(), other),
            }
        }
        assert_eq!(battle.round(), 3);

        let outcome = battle.finish(&mut rng);
        assert_eq!(outcome.winner, CombatantRole::A);
    }

    #[test]
    fn test_slower_b_attacks_first_when_faster() {
        let a = combatant("slow", 10, 1, 0, 1);
        let b = combatant("fast", 10, 1, 0, 2);

        let mut battle = Battle::new(a, b).unwrap();
        battle.play_round(&mut never_crit());

        match &battle.events()[0] {
            BattleEvent::Attack { attacker, defender, .. } => {
                assert_eq!(*attacker, CombatantRole::B);
                assert_eq!(*defender, CombatantRole::A);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_knockout_skips_counter_attack() {
        let a = combatant("striker", 10, 50, 0, 5);
        let b = combatant("glass", 5, 50, 0, 1);

        let mut battle = Battle::new(a, b).unwrap();
        let state = battle.play_round(&mut never_crit());

        assert_eq!(state, BattleState::Finished);
        assert_eq!(battle.events().len(), 2);
        assert!(matches!(battle.events()[1], BattleEvent::Down { role: CombatantRole::B, .. }));
        assert_eq!(battle.combatant(CombatantRole::A).health, 10);
    }

    #[test]
    fn test_counter_attack_knockout_ends_battle() {
        let a = combatant("fragile", 1, 1, 0, 9);
        let b = combatant("tank", 100, 1, 0, 1);

        let mut battle = Battle::new(a, b).unwrap();
        let state = battle.play_round(&mut never_crit());

        assert_eq!(state, BattleState::Finished);
        assert!(matches!(battle.events()[2], BattleEvent::Down { role: CombatantRole::A, .. }));

        let outcome = battle.finish(&mut never_crit());
        assert_eq!(outcome.winner, CombatantRole::B);
        assert_eq!(outcome.events.len(), 4);
    }

    #[test]
    fn test_play_round_after_finish_is_noop() {
        let a = combatant("a", 10, 50, 0, 5);
        let b = combatant("b", 5, 0, 0, 1);

        let mut battle = Battle::new(a, b).unwrap();
        battle.play_round(&mut never_crit());
        let logged = battle.events().len();

        assert_eq!(battle.play_round(&mut never_crit()), BattleState::Finished);
        assert_eq!(battle.events().len(), logged);
        assert_eq!(battle.round(), 1);
    }

    #[test]
    fn test_dead_combatant_is_rejected() {
        let a = combatant("alive", 10, 1, 1, 1);
        let b = combatant("dead", 0, 1, 1, 1);

        assert!(matches!(run_battle(a, b, &mut never_crit()), Err(ArenaError::Validation(_))));
    }

    #[test]
    fn test_random_battles_have_one_winner() {
        let mut rng = StdRng::seed_from_u64(7);

        for seed in 0..50u32 {
            let a = combatant("a", 20 + seed % 13, seed % 9, seed % 5, seed % 4);
            let b = combatant("b", 15 + seed % 7, seed % 6, seed % 8, seed % 3);

            let outcome = run_battle(a, b, &mut rng).unwrap();

            let winners: Vec<_> = outcome
                .events
                .iter()
                .filter(|e| matches!(e, BattleEvent::Winner { .. }))
                .collect();
            assert_eq!(winners.len(), 1);
            assert!(matches!(outcome.events.last(), Some(BattleEvent::Winner { .. })));

            let downs: Vec<_> = outcome
                .events
                .iter()
                .filter_map(|e| match e {
                    BattleEvent::Down { role, .. } => Some(*role),
                    _ => None,
                })
                .collect();
            assert_eq!(downs, vec![outcome.winner.opponent()]);
        }
    }
}
