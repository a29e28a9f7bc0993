//! Console rendering of the battle log.

use arena_shared::CombatantRole;

use crate::battle::BattleEvent;

const COLOR_ORANGE: &str = "\x1b[38;5;214m";
const COLOR_BLUE: &str = "\x1b[34m";
const COLOR_GREEN: &str = "\x1b[32m";
const COLOR_RED: &str = "\x1b[31m";
const COLOR_RESET: &str = "\x1b[0m";

fn role_color(role: CombatantRole) -> &'static str {
    match role {
        CombatantRole::A => COLOR_ORANGE,
        CombatantRole::B => COLOR_BLUE,
    }
}

fn paint(color: &str, text: &str) -> String {
    format!("{}{}{}", color, text, COLOR_RESET)
}

/// Colour an event for terminal output; A is orange, B is blue
pub fn render_event(event: &BattleEvent) -> String {
    match event {
        BattleEvent::Attack {
            attacker,
            attacker_name,
            defender,
            defender_name,
            damage,
            critical,
        } => format!(
            "{} attacked {} for {} damage{}",
            paint(role_color(*attacker), attacker_name),
            paint(role_color(*defender), defender_name),
            damage,
            if *critical { " (Critical!)" } else { "" }
        ),
        BattleEvent::Down { .. } => paint(COLOR_RED, &event.to_string()),
        BattleEvent::Winner { .. } => paint(COLOR_GREEN, &event.to_string()),
    }
}
