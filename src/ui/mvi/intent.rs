//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent operations requested by the user (a button activation)
/// and are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
