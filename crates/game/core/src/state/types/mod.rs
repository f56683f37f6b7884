pub mod actor;
pub mod common;
pub mod effect;
pub mod map_object;
pub mod turn;

pub use actor::{ActorKind, ActorState};
pub use common::{ActorId, CardinalDirection, Position};
pub use effect::{EffectPayload, EffectState, SoundCue};
pub use map_object::MapObject;
pub use turn::TurnQueue;
