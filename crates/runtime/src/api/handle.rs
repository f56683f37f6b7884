//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the battle or streaming events from specific topics.
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::{
    Action, ActorId, Adjacency, BattleState, EffectPayload, ExecutionOutcome, PendingAttack,
};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    attack_commit_delay: Duration,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        attack_commit_delay: Duration,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            attack_commit_delay,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Execute any action against the battle
    pub async fn execute(&self, action: Action) -> Result<ExecutionOutcome> {
        self.request(|reply| Command::Execute { action, reply })
            .await?
    }

    /// Start an attack: validates it and plays the hit effect on the target.
    pub async fn begin_attack(
        &self,
        actor: impl Into<ActorId>,
        target: impl Into<ActorId>,
        payload: EffectPayload,
    ) -> Result<PendingAttack> {
        let actor = actor.into();
        let target = target.into();
        self.request(|reply| Command::BeginAttack {
            actor,
            target,
            payload,
            reply,
        })
        .await?
    }

    /// Commit a begun attack: applies damage and rotates the turn.
    pub async fn resolve_attack(&self, pending: PendingAttack) -> Result<ExecutionOutcome> {
        self.request(|reply| Command::ResolveAttack { pending, reply })
            .await?
    }

    /// Begin an attack, wait the configured commit delay, then resolve it.
    ///
    /// The commit runs on its own task, so it fires even if the caller stops
    /// awaiting this future. The effect is left playing; stopping it is up to
    /// whoever renders it.
    pub async fn attack_with_delay(
        &self,
        actor: impl Into<ActorId>,
        target: impl Into<ActorId>,
        payload: EffectPayload,
    ) -> Result<ExecutionOutcome> {
        let pending = self.begin_attack(actor, target, payload).await?;

        let handle = self.clone();
        let delay = self.attack_commit_delay;
        let commit = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            handle.resolve_attack(pending).await
        });

        commit.await.map_err(RuntimeError::CommitJoin)?
    }

    /// End `actor`'s turn without moving.
    ///
    /// The worker reads the actor's position when it runs the pass, so a
    /// transition queued ahead of it cannot turn the pass into a move.
    pub async fn pass(&self, actor: impl Into<ActorId>) -> Result<ExecutionOutcome> {
        let actor = actor.into();
        self.request(|reply| Command::Pass { actor, reply }).await?
    }

    /// Clear the transient effect (renderer completion notification)
    pub async fn stop_effect(&self) -> Result<ExecutionOutcome> {
        self.execute(Action::stop_effect()).await
    }

    /// Classify the four tiles around the active actor
    pub async fn adjacency(&self) -> Result<Adjacency> {
        self.request(|reply| Command::Adjacency { reply }).await?
    }

    /// Query the current battle state (read-only snapshot)
    pub async fn query_state(&self) -> Result<BattleState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Battle` - Action execution, failures, eliminations
    /// - `Topic::Turn` - Turn hand-over
    /// - `Topic::Effect` - Effect start and stop
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }
}
