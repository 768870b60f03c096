//! Unidirectional state primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ caller
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! A caller builds an intent, hands it to a reducer with the current state
//! and keeps whatever comes back as the new state. Nothing here owns state;
//! see [`crate::store::FormStore`] for a holder.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
