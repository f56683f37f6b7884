use bitflags::bitflags;

bitflags! {
    /// Tracks which fields of an [`ActorState`](crate::state::ActorState)
    /// changed during a transition.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ActorFields: u8 {
        const POSITION = 1 << 0;
        const FACING   = 1 << 1;
        const HEALTH   = 1 << 2;
    }
}
