//! Creature arena: concurrent API fetching and a turn-based battle engine.

pub mod battle;
pub mod config;
pub mod entities;
pub mod error;
pub mod fetch;
pub mod network;
pub mod normalize;
pub mod report;

pub use battle::{run_battle, Battle, BattleEvent, BattleOutcome, BattleState};
pub use entities::{AttackOutcome, Combatant};
pub use error::{ArenaError, Result};
pub use fetch::PokeApi;
pub use network::{HttpClient, ReqwestClient};
pub use normalize::normalize;
