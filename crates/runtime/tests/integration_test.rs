use std::time::Duration;

use battle_content::Scenario;
use battle_core::{
    Action, ActionResult, ActorId, ActorKind, BattleEngine, BattleState, CardinalDirection,
    EffectPayload, ExecuteError, MoveError, Occupant, Position, StateInvariantError,
    TransitionPhase,
};
use battle_runtime::{
    BattleEvent, EffectEvent, Event, Runtime, RuntimeConfig, RuntimeError, Topic,
};
use tokio::sync::broadcast;
use tokio::time::timeout;

const EVENT_TIMEOUT: Duration = Duration::from_secs(2);

async fn next_event(rx: &mut broadcast::Receiver<Event>) -> Event {
    timeout(EVENT_TIMEOUT, rx.recv())
        .await
        .expect("Timed out waiting for event")
        .expect("Event channel closed")
}

async fn duel_runtime(delay: Duration) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig::default().with_attack_commit_delay(delay))
        .scenario(Scenario::duel())
        .build()
        .await
        .expect("Runtime should build from the duel scenario")
}

#[tokio::test]
async fn duel_is_decided_by_one_delayed_attack() {
    let runtime = duel_runtime(Duration::from_millis(20)).await;
    let handle = runtime.handle();
    let mut battle = handle.subscribe(Topic::Battle);
    let mut effects = handle.subscribe(Topic::Effect);
    let mut turns = handle.subscribe(Topic::Turn);

    let outcome = handle
        .attack_with_delay("player-1", "player-2", EffectPayload::hit())
        .await
        .expect("Attack should land");

    match outcome.result {
        ActionResult::Attack(attack) => {
            assert_eq!(attack.target, ActorId::from("player-2"));
            assert_eq!(attack.remaining_health, 0);
            assert!(attack.eliminated);
        }
        other => panic!("Expected an attack result, got {other:?}"),
    }

    // Effect first, damage second.
    match next_event(&mut battle).await {
        Event::Battle(BattleEvent::ActionExecuted { action, .. }) => {
            assert!(matches!(action, Action::System(_)));
        }
        other => panic!("Expected the effect action, got {other:?}"),
    }
    match next_event(&mut battle).await {
        Event::Battle(BattleEvent::ActionExecuted { action, .. }) => {
            assert_eq!(action, Action::attack("player-1", "player-2"));
        }
        other => panic!("Expected the attack action, got {other:?}"),
    }
    assert!(matches!(
        next_event(&mut battle).await,
        Event::Battle(BattleEvent::ActorEliminated { actor }) if actor == ActorId::from("player-2")
    ));
    assert!(matches!(
        next_event(&mut battle).await,
        Event::Battle(BattleEvent::BattleDecided { winner: Some(winner) })
            if winner == ActorId::from("player-1")
    ));

    match next_event(&mut effects).await {
        Event::Effect(EffectEvent::Started { position, payload }) => {
            assert_eq!(position, Position::new(352, 240));
            assert_eq!(payload, EffectPayload::hit());
        }
        other => panic!("Expected effect start, got {other:?}"),
    }

    match next_event(&mut turns).await {
        Event::Turn(turn) => assert_eq!(turn.actor, Some(ActorId::from("player-1"))),
        other => panic!("Expected a turn event, got {other:?}"),
    }

    let state = handle.query_state().await.expect("State query should succeed");
    assert!(state.is_decided());
    assert_eq!(state.actors().len(), 1);
    assert_eq!(state.turn().len(), 1);
    assert!(state.effect().is_some(), "Effect stays until stopped");

    drop(handle);
    runtime.shutdown().await.expect("Runtime should shut down");
}

#[tokio::test]
async fn attack_commits_even_if_caller_stops_waiting() {
    let runtime = duel_runtime(Duration::from_millis(200)).await;
    let handle = runtime.handle();
    let mut battle = handle.subscribe(Topic::Battle);

    let abandoned = timeout(
        Duration::from_millis(20),
        handle.attack_with_delay("player-1", "player-2", EffectPayload::hit()),
    )
    .await;
    assert!(abandoned.is_err(), "Caller gave up before the commit");

    let state = handle.query_state().await.expect("State query should succeed");
    assert_eq!(
        state.actor(&ActorId::from("player-2")).map(|a| a.health),
        Some(1),
        "Damage is not dealt before the delay"
    );
    assert!(state.effect().is_some());

    loop {
        if let Event::Battle(BattleEvent::BattleDecided { winner }) = next_event(&mut battle).await
        {
            assert_eq!(winner, Some(ActorId::from("player-1")));
            break;
        }
    }

    drop(handle);
    runtime.shutdown().await.expect("Runtime should shut down");
}

#[tokio::test]
async fn out_of_turn_action_is_rejected_and_reported() {
    let runtime = duel_runtime(Duration::ZERO).await;
    let handle = runtime.handle();
    let mut battle = handle.subscribe(Topic::Battle);
    let before = handle.query_state().await.expect("State query should succeed");

    let error = handle
        .execute(Action::move_to("player-2", Position::new(352, 224)))
        .await
        .expect_err("player-2 is not the head of the queue");

    match error {
        RuntimeError::Execute(ExecuteError::ActorNotCurrent {
            actor,
            current_actor,
        }) => {
            assert_eq!(actor, ActorId::from("player-2"));
            assert_eq!(current_actor, Some(ActorId::from("player-1")));
        }
        other => panic!("Expected ActorNotCurrent, got {other:?}"),
    }

    match next_event(&mut battle).await {
        Event::Battle(BattleEvent::ActionFailed { phase, .. }) => assert_eq!(phase, None),
        other => panic!("Expected ActionFailed, got {other:?}"),
    }

    let after = handle.query_state().await.expect("State query should succeed");
    assert_eq!(before, after);

    drop(handle);
    runtime.shutdown().await.expect("Runtime should shut down");
}

#[tokio::test]
async fn adjacency_reports_opponent_above() {
    let runtime = duel_runtime(Duration::ZERO).await;
    let handle = runtime.handle();

    let adjacency = handle.adjacency().await.expect("Active actor exists");
    assert_eq!(
        adjacency.get(CardinalDirection::Up),
        &Occupant::Actor(ActorId::from("player-2"))
    );
    for direction in [
        CardinalDirection::Right,
        CardinalDirection::Down,
        CardinalDirection::Left,
    ] {
        assert_eq!(adjacency.get(direction), &Occupant::Empty);
    }

    drop(handle);
    runtime.shutdown().await.expect("Runtime should shut down");
}

#[tokio::test]
async fn empty_battle_has_no_adjacency() {
    let runtime = Runtime::builder().build().await.expect("Runtime should build");
    let handle = runtime.handle();

    let error = handle.adjacency().await.expect_err("No actor is active");
    assert!(matches!(error, RuntimeError::Targeting(_)));

    drop(handle);
    runtime.shutdown().await.expect("Runtime should shut down");
}

#[tokio::test]
async fn move_hands_turn_to_the_opponent() {
    let runtime = duel_runtime(Duration::ZERO).await;
    let handle = runtime.handle();
    let mut turns = handle.subscribe(Topic::Turn);

    handle
        .execute(Action::move_to("player-1", Position::new(336, 256)))
        .await
        .expect("Move left should succeed");

    match next_event(&mut turns).await {
        Event::Turn(turn) => assert_eq!(turn.actor, Some(ActorId::from("player-2"))),
        other => panic!("Expected a turn event, got {other:?}"),
    }

    handle.pass("player-2").await.expect("Pass should succeed");
    match next_event(&mut turns).await {
        Event::Turn(turn) => assert_eq!(turn.actor, Some(ActorId::from("player-1"))),
        other => panic!("Expected a turn event, got {other:?}"),
    }

    let state = handle.query_state().await.expect("State query should succeed");
    let player = state
        .actor(&ActorId::from("player-1"))
        .expect("player-1 exists");
    assert_eq!(player.position, Position::new(336, 256));
    assert_eq!(player.facing, CardinalDirection::Left);

    drop(handle);
    runtime.shutdown().await.expect("Runtime should shut down");
}

#[tokio::test]
async fn stop_effect_is_published_once() {
    let runtime = duel_runtime(Duration::ZERO).await;
    let handle = runtime.handle();
    let mut effects = handle.subscribe(Topic::Effect);
    let mut battle = handle.subscribe(Topic::Battle);

    handle
        .begin_attack("player-1", "player-2", EffectPayload::hit())
        .await
        .expect("Attack should begin");
    assert!(matches!(
        next_event(&mut effects).await,
        Event::Effect(EffectEvent::Started { .. })
    ));

    handle.stop_effect().await.expect("Stop should succeed");
    assert!(matches!(
        next_event(&mut effects).await,
        Event::Effect(EffectEvent::Stopped)
    ));

    let outcome = handle.stop_effect().await.expect("Second stop is a no-op");
    assert!(!outcome.delta.effect_changed);

    // Drain the battle topic so every published event has been observed.
    for _ in 0..3 {
        next_event(&mut battle).await;
    }
    assert!(matches!(
        effects.try_recv(),
        Err(broadcast::error::TryRecvError::Empty)
    ));

    drop(handle);
    runtime.shutdown().await.expect("Runtime should shut down");
}

async fn solo_runtime() -> Runtime {
    let mut state = BattleState::new();
    BattleEngine::new(&mut state)
        .execute(&Action::add_actor(
            "solo",
            ActorKind::Boy,
            3,
            Position::new(0, 0),
        ))
        .expect("AddActor should succeed");

    Runtime::builder()
        .initial_state(state)
        .build()
        .await
        .expect("Runtime should build")
}

#[tokio::test(flavor = "current_thread")]
async fn pass_uses_position_at_execution_time() {
    let runtime = solo_runtime().await;
    let handle = runtime.handle();

    let (passed, moved) = tokio::join!(
        handle.pass("solo"),
        handle.execute(Action::move_to("solo", Position::new(16, 0))),
    );
    passed.expect("Pass should succeed");
    moved.expect("Move should succeed");

    let state = handle.query_state().await.expect("State query should succeed");
    let solo = state.actor(&ActorId::from("solo")).expect("solo exists");
    assert_eq!(solo.position, Position::new(16, 0));
    assert_eq!(solo.facing, CardinalDirection::Right);

    drop(handle);
    runtime.shutdown().await.expect("Runtime should shut down");
}

#[tokio::test]
async fn pass_for_unknown_actor_reports_not_found() {
    let runtime = solo_runtime().await;
    let handle = runtime.handle();
    let before = handle.query_state().await.expect("State query should succeed");

    let error = handle
        .pass("ghost")
        .await
        .expect_err("ghost is not in the battle");
    match error {
        RuntimeError::Execute(ExecuteError::Move(failure)) => {
            assert_eq!(failure.phase, TransitionPhase::PreValidate);
            assert_eq!(failure.error, MoveError::ActorNotFound(ActorId::from("ghost")));
        }
        other => panic!("Expected ActorNotFound, got {other:?}"),
    }

    let after = handle.query_state().await.expect("State query should succeed");
    assert_eq!(before, after);

    drop(handle);
    runtime.shutdown().await.expect("Runtime should shut down");
}

#[tokio::test]
async fn inconsistent_initial_state_is_rejected() {
    let state: BattleState = serde_json::from_value(serde_json::json!({
        "turn": { "order": ["ghost"], "action_nonce": 0 },
        "actors": {},
        "map_objects": [],
        "effect": null,
    }))
    .expect("State should deserialize");

    let error = Runtime::builder()
        .initial_state(state)
        .build()
        .await
        .err()
        .expect("Queue entry without an actor must be rejected");

    match error {
        RuntimeError::InvalidInitialState(StateInvariantError::QueuedWithoutActor { id }) => {
            assert_eq!(id, ActorId::from("ghost"));
        }
        other => panic!("Expected InvalidInitialState, got {other:?}"),
    }
}
