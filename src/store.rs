//! Thread-safe holder of the canonical form state.
//!
//! The reducer is pure; whoever owns the current state must serialize
//! read-modify-write sequences when several writers can race. `FormStore`
//! does that with a single write lock around each dispatch.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::form::{FormIntent, FormReducer, FormState};
use crate::mvi::{Reducer, UiState};

/// Shared form state with serialized dispatch.
///
/// Clones share the same underlying state.
#[derive(Clone, Default)]
pub struct FormStore {
    inner: Arc<RwLock<FormState>>,
}

impl FormStore {
    pub fn new(initial: FormState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Snapshot of the current state.
    ///
    /// Cheap: only the root `Arc` is cloned. Later dispatches never alter a
    /// snapshot already handed out.
    pub fn get(&self) -> FormState {
        self.inner.read().clone()
    }

    /// Run one intent through the reducer.
    ///
    /// Returns `false` if the reducer handed back the same state, `true` if
    /// it produced a new one. Overwrites are not compared by value, so a
    /// repeated event can return `true` with a value-equal state.
    pub fn dispatch(&self, intent: FormIntent) -> bool {
        let mut guard = self.inner.write();
        let kind = intent.kind().to_string();
        // `guard` keeps its handle, so the reducer copies on write instead of
        // mutating the state in place.
        let next = FormReducer::reduce(guard.clone(), intent);
        let changed = !next.is_unchanged_from(&guard);
        *guard = next;
        drop(guard);

        tracing::debug!(kind = %kind, changed, "Dispatched form intent");
        changed
    }

    /// Dispatch each intent in order; returns how many changed the state.
    pub fn dispatch_all(&self, intents: impl IntoIterator<Item = FormIntent>) -> usize {
        intents
            .into_iter()
            .map(|intent| self.dispatch(intent))
            .filter(|changed| *changed)
            .count()
    }

    /// Replace the whole state, e.g. when restoring a snapshot.
    pub fn replace(&self, state: FormState) {
        *self.inner.write() = state;
    }
}
