/// Marker trait for state objects.
///
/// States are cloned into snapshots for rendering and compared to detect
/// changes; `Default` is the state of a freshly opened page.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
