//! Creature Arena
//!
//! Fetches the whole creature collection, samples a handful of entries, and
//! lets two of them fight it out in the terminal.

use clap::Parser;
use log::{error, info};
use rand::seq::SliceRandom;

use arena::config::{Args, Config};
use arena::report::render_event;
use arena::{normalize, run_battle, ArenaError, Combatant, PokeApi, ReqwestClient, Result};
use arena_shared::StatTuple;

async fn run(config: Config) -> Result<()> {
    let client = ReqwestClient::new(config.timeout)?;
    let api = PokeApi::new(client, config.base_url.as_str());

    // Whole collection, fetched in concurrent chunks
    let entries = api.fetch_all_entries(config.chunk_size).await?;
    println!("Fetched {} Pokémon:\n", entries.len());
    for entry in &entries {
        println!("{{name: {}, url: {}}}", entry.name, entry.url);
    }

    // Details for a random sample
    println!("\nDetails of {} random Pokémon:\n", config.sample_size.min(entries.len()));
    let sample: Vec<_> = {
        let mut rng = rand::thread_rng();
        entries
            .choose_multiple(&mut rng, config.sample_size)
            .cloned()
            .collect()
    };
    let details = api.fetch_detail_batch(&sample).await?;

    let parsed: Vec<StatTuple> = details.iter().map(normalize).collect();
    for stats in &parsed {
        println!("{}", stats);
    }

    // Two random fighters that can actually stand
    let fit: Vec<&StatTuple> = parsed.iter().filter(|s| s.hp > 0).collect();
    let (first, second) = {
        let mut rng = rand::thread_rng();
        match fit.choose_multiple(&mut rng, 2).collect::<Vec<_>>().as_slice() {
            [first, second] => ((**first).clone(), (**second).clone()),
            _ => {
                return Err(ArenaError::validation(format!(
                    "need two fighters with health, found {}",
                    fit.len()
                )))
            }
        }
    };

    println!("\nFight {} vs {}", first.name, second.name);
    println!("{}\n{}", first, second);

    let outcome = {
        let mut rng = rand::thread_rng();
        run_battle(Combatant::new(&first), Combatant::new(&second), &mut rng)?
    };
    info!("{} won after {} events", outcome.winner_name, outcome.events.len());

    for event in &outcome.events {
        println!("{}", render_event(event));
        if !config.pace.is_zero() {
            tokio::time::sleep(config.pace).await;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_args(Args::parse()) {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting arena against {}", config.base_url);

    if let Err(e) = run(config).await {
        error!("Arena run failed: {}", e);
        std::process::exit(1);
    }
}
