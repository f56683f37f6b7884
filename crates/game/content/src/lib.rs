//! Data-driven battle setup and loaders.
//!
//! This crate describes how a battle starts and provides loaders for the
//! files that describe it:
//! - Scenarios (actors, scenery, hit effect, replay script) via RON
//! - Battle configuration via TOML
//!
//! A scenario becomes a [`battle_core::BattleState`] by replaying `AddActor`
//! actions, so loaded content goes through the same validation as anything
//! else.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{ActorSpec, Scenario};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ScenarioLoader};
