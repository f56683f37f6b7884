use crate::state::BattleState;

/// Defines how a concrete action variant mutates battle state.
///
/// Implementors override the validation hooks to surface pre- and
/// post-conditions that must hold around the mutation. The hooks take
/// read-only access and must stay side-effect free.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &BattleState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the state directly. Implementations may
    /// assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut BattleState) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &BattleState) -> Result<(), Self::Error> {
        Ok(())
    }
}
