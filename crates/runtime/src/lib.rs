//! Runtime orchestration for the turn-based battle.
//!
//! This crate wraps [`battle_core`] in a single-writer worker task so several
//! async callers can drive one battle without sharing the state directly.
//! Consumers build a [`Runtime`], issue commands through the cloneable
//! [`RuntimeHandle`], and subscribe to topic events on the [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{BattleEvent, EffectEvent, Event, EventBus, Topic, TurnEvent};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
