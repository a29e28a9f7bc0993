//! Projection of raw detail records onto fixed combat stats.

use std::collections::HashMap;

use arena_shared::{DetailRecord, StatTuple};
use serde_json::Value;

/// Name used when a record carries none
pub const UNKNOWN_NAME: &str = "Unknown";

/// Reduce a detail record to name + hp/attack/defense/speed.
///
/// Never fails: absent or malformed fields default to zero, and when a stat
/// name appears more than once the last entry wins. Entries whose `base_stat`
/// is not an integer are skipped before that, so an earlier valid entry for
/// the same name is kept.
pub fn normalize(record: &DetailRecord) -> StatTuple {
    let value = record.as_value();

    let name = value
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_NAME);

    let stats = stat_lookup(value);
    let stat = |key: &str| stats.get(key).copied().unwrap_or(0);

    StatTuple::new(name, stat("hp"), stat("attack"), stat("defense"), stat("speed"))
}

/// Stat name -> base value, later entries overwriting earlier ones
fn stat_lookup(value: &Value) -> HashMap<&str, u32> {
    let mut stats = HashMap::new();

    let Some(entries) = value.get("stats").and_then(Value::as_array) else {
        return stats;
    };

    for entry in entries {
        let name = entry
            .get("stat")
            .and_then(|s| s.get("name"))
            .and_then(Value::as_str);
        let base = entry.get("base_stat").and_then(base_stat);

        if let (Some(name), Some(base)) = (name, base) {
            stats.insert(name, base);
        }
    }

    stats
}

/// Integer base stat clamped into `0..=u32::MAX`
fn base_stat(value: &Value) -> Option<u32> {
    if let Some(v) = value.as_u64() {
        return Some(u32::try_from(v).unwrap_or(u32::MAX));
    }
    value.as_i64().map(|_| 0)
}
