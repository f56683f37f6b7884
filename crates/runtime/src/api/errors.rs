//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and from the battle engine so
//! clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use battle_core::{ExecuteError, StateInvariantError, TargetingError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("battle worker command channel closed")]
    CommandChannelClosed,

    #[error("battle worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("deferred attack commit task failed")]
    CommitJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Targeting(#[from] TargetingError),

    #[error("failed to build initial battle state from scenario")]
    InitialState(#[source] ExecuteError),

    #[error("initial battle state is inconsistent")]
    InvalidInitialState(#[source] StateInvariantError),
}
