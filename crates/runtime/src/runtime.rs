//! High-level runtime orchestrator.
//!
//! The runtime owns the battle worker, wires up command and event channels,
//! and exposes a builder-based API for clients to drive the battle.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use battle_content::Scenario;
use battle_core::{BattleConfig, BattleState};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::workers::{BattleWorker, Command};

/// Runtime configuration shared across the orchestrator and the worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Time between an attack's effect starting and its damage landing.
    pub attack_commit_delay: Duration,
}

impl RuntimeConfig {
    pub const DEFAULT_ATTACK_COMMIT_DELAY: Duration = Duration::from_millis(500);

    /// Defaults overridden by process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_EVENT_BUFFER` - Broadcast capacity per topic (default: 100)
    /// - `BATTLE_COMMAND_BUFFER` - Worker command queue size (default: 32)
    /// - `BATTLE_ATTACK_DELAY_MS` - Attack commit delay (default: 500)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("BATTLE_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("BATTLE_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(millis) = read_env::<u64>("BATTLE_ATTACK_DELAY_MS") {
            config.attack_commit_delay = Duration::from_millis(millis);
        }

        config
    }

    pub fn with_battle(mut self, battle: BattleConfig) -> Self {
        self.battle = battle;
        self
    }

    pub fn with_attack_commit_delay(mut self, delay: Duration) -> Self {
        self.attack_commit_delay = delay;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            event_buffer_size: EventBus::DEFAULT_CAPACITY,
            command_buffer_size: 32,
            attack_commit_delay: Self::DEFAULT_ATTACK_COMMIT_DELAY,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that orchestrates the battle
///
/// Runtime owns the worker; [`RuntimeHandle`] provides a cloneable façade
/// for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every outstanding handle clone is dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<BattleState>,
    scenario: Option<Scenario>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            scenario: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial battle state
    ///
    /// Takes precedence over [`scenario`](Self::scenario). The state is
    /// checked for queue and actor map consistency in [`build`](Self::build).
    pub fn initial_state(mut self, state: BattleState) -> Self {
        self.state = Some(state);
        self
    }

    /// Seed the battle from a scenario
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Build the runtime and spawn its worker
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let initial_state = match (self.state, self.scenario) {
            (Some(state), _) => state,
            (None, Some(scenario)) => scenario
                .into_state()
                .map_err(RuntimeError::InitialState)?,
            (None, None) => BattleState::new(),
        };
        initial_state
            .check_invariants()
            .map_err(RuntimeError::InvalidInitialState)?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(
            command_tx,
            event_bus.clone(),
            self.config.attack_commit_delay,
        );

        let worker = BattleWorker::new(initial_state, self.config.battle, command_rx, event_bus);
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
