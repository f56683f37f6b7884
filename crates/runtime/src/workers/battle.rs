//! Battle worker that owns the authoritative [`battle_core::BattleState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), executes
//! actions via [`battle_core::BattleEngine`], and publishes events to the
//! EventBus. Commands are handled one at a time, which is what makes the
//! battle single-writer.

use tokio::sync::{mpsc, oneshot};

use battle_core::{
    Action, ActionResult, Adjacency, BattleConfig, BattleEngine, BattleState, EffectPayload,
    ExecuteError, ExecutionOutcome, GameError, MoveError, PendingAttack, Position, SystemAction,
    TransitionPhase, TransitionPhaseError,
};
use tracing::{debug, info, warn};

use crate::api::Result;
use crate::events::{BattleEvent, EffectEvent, Event, EventBus, TurnEvent};

/// Commands that can be sent to the battle worker
pub(crate) enum Command {
    /// Execute any action.
    Execute {
        action: Action,
        reply: oneshot::Sender<Result<ExecutionOutcome>>,
    },
    /// Validate an attack and start its hit effect.
    BeginAttack {
        actor: battle_core::ActorId,
        target: battle_core::ActorId,
        payload: EffectPayload,
        reply: oneshot::Sender<Result<PendingAttack>>,
    },
    /// End an actor's turn where it currently stands.
    Pass {
        actor: battle_core::ActorId,
        reply: oneshot::Sender<Result<ExecutionOutcome>>,
    },
    /// Apply a previously begun attack.
    ResolveAttack {
        pending: PendingAttack,
        reply: oneshot::Sender<Result<ExecutionOutcome>>,
    },
    /// Classify the tiles around the active actor.
    Adjacency {
        reply: oneshot::Sender<Result<Adjacency>>,
    },
    /// Query the current battle state (read-only).
    QueryState { reply: oneshot::Sender<BattleState> },
}

/// Background task that processes battle commands.
pub(crate) struct BattleWorker {
    state: BattleState,
    config: BattleConfig,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl BattleWorker {
    pub(crate) fn new(
        state: BattleState,
        config: BattleConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::worker",
            actors = state.actors().len(),
            map_objects = state.map_objects().len(),
            head = ?state.turn().head(),
            "BattleWorker initialized"
        );

        Self {
            state,
            config,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every handle has been dropped.
    pub(crate) async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        debug!(target: "runtime::worker", "BattleWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Execute { action, reply } => {
                let result = self.execute(&action).map_err(Into::into);
                if reply.send(result).is_err() {
                    debug!("Execute reply channel closed (caller dropped)");
                }
            }
            Command::BeginAttack {
                actor,
                target,
                payload,
                reply,
            } => {
                let result = self.begin_attack(actor, target, payload).map_err(Into::into);
                if reply.send(result).is_err() {
                    debug!("BeginAttack reply channel closed (caller dropped)");
                }
            }
            Command::Pass { actor, reply } => {
                let result = self.pass(actor).map_err(Into::into);
                if reply.send(result).is_err() {
                    debug!("Pass reply channel closed (caller dropped)");
                }
            }
            Command::ResolveAttack { pending, reply } => {
                let action = Action::attack(pending.actor().clone(), pending.target().clone());
                let result = {
                    let mut engine = BattleEngine::new(&mut self.state);
                    engine.resolve_attack(pending)
                };
                let result = self.publish_result(&action, result).map_err(Into::into);
                if reply.send(result).is_err() {
                    debug!("ResolveAttack reply channel closed (caller dropped)");
                }
            }
            Command::Adjacency { reply } => {
                let result = self.state.adjacency(&self.config).map_err(Into::into);
                if reply.send(result).is_err() {
                    debug!("Adjacency reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Executes one action and publishes the resulting events.
    ///
    /// This is the only path, apart from attack resolution, that calls
    /// `BattleEngine::execute`, so every transition is published.
    fn execute(&mut self, action: &Action) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        let result = BattleEngine::new(&mut self.state).execute(action);
        self.publish_result(action, result)
    }

    /// Passes from the actor's position as of this command.
    fn pass(
        &mut self,
        actor: battle_core::ActorId,
    ) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        let Some(position) = self.state.actor(&actor).map(|a| a.position) else {
            let error = ExecuteError::Move(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                MoveError::ActorNotFound(actor.clone()),
            ));
            self.publish_failure(&Action::pass(actor, Position::default()), &error);
            return Err(error);
        };

        self.execute(&Action::pass(actor, position))
    }

    fn begin_attack(
        &mut self,
        actor: battle_core::ActorId,
        target: battle_core::ActorId,
        payload: EffectPayload,
    ) -> std::result::Result<PendingAttack, ExecuteError> {
        let attempted = Action::attack(actor.clone(), target.clone());
        let result = BattleEngine::new(&mut self.state).begin_attack(actor, target, payload);

        match result {
            Ok((pending, effect_outcome)) => {
                let effect_action = effect_outcome.delta.action.clone();
                self.publish_outcome(&effect_action, &effect_outcome);
                debug!(
                    target: "runtime::worker",
                    actor = %pending.actor(),
                    defender = %pending.target(),
                    "Attack begun, awaiting commit"
                );
                Ok(pending)
            }
            Err(error) => {
                self.publish_failure(&attempted, &error);
                Err(error)
            }
        }
    }

    fn publish_result(
        &self,
        action: &Action,
        result: std::result::Result<ExecutionOutcome, ExecuteError>,
    ) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        match &result {
            Ok(outcome) => self.publish_outcome(action, outcome),
            Err(error) => self.publish_failure(action, error),
        }
        result
    }

    fn publish_failure(&self, action: &Action, error: &ExecuteError) {
        warn!(
            target: "runtime::worker",
            action = action.as_snake_case(),
            actor = ?action.actor(),
            code = error.error_code(),
            severity = error.severity().as_str(),
            "Action rejected: {}",
            error
        );

        self.event_bus
            .publish(Event::Battle(BattleEvent::ActionFailed {
                action: action.clone(),
                phase: error.phase(),
                error: error.to_string(),
            }));
    }

    /// Fans one outcome out to the battle, turn and effect topics.
    fn publish_outcome(&self, action: &Action, outcome: &ExecutionOutcome) {
        let delta = &outcome.delta;
        debug!(
            target: "runtime::worker",
            nonce = delta.action_nonce,
            action = action.as_snake_case(),
            actor = ?action.actor(),
            "Action executed"
        );

        self.event_bus
            .publish(Event::Battle(BattleEvent::ActionExecuted {
                nonce: delta.action_nonce,
                action: action.clone(),
                delta: Box::new(delta.clone()),
                result: outcome.result.clone(),
            }));

        for actor in &delta.actors.removed {
            info!(target: "runtime::worker", actor = %actor, "Actor eliminated");
            self.event_bus
                .publish(Event::Battle(BattleEvent::ActorEliminated {
                    actor: actor.clone(),
                }));
        }

        if delta.effect_changed {
            let event = match self.state.effect() {
                Some(effect) => EffectEvent::Started {
                    position: effect.position,
                    payload: effect.payload.clone(),
                },
                None => EffectEvent::Stopped,
            };
            self.event_bus.publish(Event::Effect(event));
        }

        if delta.turn.order_changed {
            self.event_bus.publish(Event::Turn(TurnEvent {
                actor: delta.turn.head.clone(),
                nonce: delta.action_nonce,
            }));
        }

        let eliminated = !delta.actors.removed.is_empty();
        if eliminated && self.state.is_decided() {
            let winner = self.state.turn().head().cloned();
            info!(target: "runtime::worker", winner = ?winner, "Battle decided");
            self.event_bus
                .publish(Event::Battle(BattleEvent::BattleDecided { winner }));
        }

        if let ActionResult::Attack(attack) = &outcome.result {
            debug!(
                target: "runtime::worker",
                defender = %attack.target,
                remaining_health = attack.remaining_health,
                "Attack landed"
            );
        }

        if matches!(action, Action::System(SystemAction::AddActor(_))) && delta.is_empty() {
            debug!(target: "runtime::worker", "Duplicate AddActor ignored");
        }
    }
}
