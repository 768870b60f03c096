use super::intent::Intent;
use super::state::UiState;

/// Pure transition function `(State, Intent) -> State`.
///
/// Implementations never fail: an intent that does not apply yields the
/// state it was given.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply `intents` in order, starting from `state`.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
