/// Marker trait for view state snapshots.
///
/// `PartialEq` lets the store skip notifications for no-op transitions,
/// and `Default` is the state a fresh screen starts from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
