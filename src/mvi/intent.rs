/// Marker for event records a [`super::Reducer`] accepts.
///
/// Intents are plain values: building one has no side effects and the
/// reducer consumes it.
pub trait Intent: Send + 'static {}
