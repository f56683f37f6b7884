//! Headless battle demo.
//!
//! Composition root that assembles the runtime from environment
//! configuration, then replays the scenario's scripted directions the way an
//! interactive frontend would issue them: resolve the four tiles around the
//! active actor, turn the chosen direction into a move, an attack or a pass,
//! and acknowledge the hit effect once it has "played".
//!
//! ```bash
//! BATTLE_SCENARIO=crates/game/content/data/duel.ron cargo run -p battle-demo
//! ```
mod config;

use anyhow::Result;
use tokio::sync::broadcast::error::RecvError;

use battle_core::{Action, CardinalDirection, EffectPayload, TileChoice};
use battle_runtime::{BattleEvent, Event, Runtime, RuntimeHandle, Topic};

use config::DemoConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from_env()?;
    let tile_size = config.runtime.battle.tile_size;
    let script = config.scenario.script.clone();
    let hit_effect = config.scenario.hit_effect.clone();

    tracing::info!(
        actors = config.scenario.actors.len(),
        map_objects = config.scenario.map_objects.len(),
        steps = script.len(),
        "Starting battle demo"
    );

    let runtime = Runtime::builder()
        .config(config.runtime)
        .scenario(config.scenario)
        .build()
        .await?;
    let handle = runtime.handle();

    let mut battle_events = handle.subscribe(Topic::Battle);
    let reporter = tokio::spawn(async move {
        loop {
            match battle_events.recv().await {
                Ok(Event::Battle(event)) => report(&event),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Battle event reporter lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    replay(&handle, &script, tile_size, &hit_effect).await?;

    let state = handle.query_state().await?;
    for actor in state.actors().values() {
        tracing::info!(
            actor = %actor.id,
            kind = %actor.kind,
            health = actor.health,
            x = actor.position.x,
            y = actor.position.y,
            facing = %actor.facing,
            "Final standing"
        );
    }

    drop(handle);
    runtime.shutdown().await?;
    reporter.await?;

    tracing::info!("Battle demo finished");
    Ok(())
}

/// Plays one scripted direction per turn until the script runs out or the
/// battle is decided.
async fn replay(
    handle: &RuntimeHandle,
    script: &[CardinalDirection],
    tile_size: i32,
    hit_effect: &EffectPayload,
) -> Result<()> {
    for &direction in script {
        let state = handle.query_state().await?;
        if state.is_decided() {
            tracing::info!("Battle already decided, ignoring remaining script");
            break;
        }
        let Some(active) = state.active_actor() else {
            break;
        };

        let adjacency = handle.adjacency().await?;
        match adjacency.choice(direction, active.position, tile_size) {
            Some(TileChoice::Attack(target)) => {
                handle
                    .attack_with_delay(active.id.clone(), target, hit_effect.clone())
                    .await?;
                // Headless: the hit animation counts as finished on commit.
                handle.stop_effect().await?;
            }
            Some(TileChoice::Move(destination)) => {
                handle
                    .execute(Action::move_to(active.id.clone(), destination))
                    .await?;
            }
            None => {
                tracing::info!(actor = %active.id, %direction, "Direction blocked, passing");
                handle.pass(active.id.clone()).await?;
            }
        }
    }

    Ok(())
}

fn report(event: &BattleEvent) {
    match event {
        BattleEvent::ActionExecuted { nonce, action, .. } => {
            tracing::info!(nonce, action = action.as_snake_case(), actor = ?action.actor(), "Executed");
        }
        BattleEvent::ActionFailed { action, error, .. } => {
            tracing::warn!(action = action.as_snake_case(), "Rejected: {}", error);
        }
        BattleEvent::ActorEliminated { actor } => {
            tracing::info!(actor = %actor, "Eliminated");
        }
        BattleEvent::BattleDecided { winner } => match winner {
            Some(winner) => tracing::info!(winner = %winner, "Battle decided"),
            None => tracing::info!("Battle decided with no survivor"),
        },
    }
}
