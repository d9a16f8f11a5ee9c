/// Marker trait for intent objects.
///
/// Intents represent control interactions (load more, search, category
/// change) and settled requests. Reducers turn them into new states.
pub trait Intent: Send + 'static {}
