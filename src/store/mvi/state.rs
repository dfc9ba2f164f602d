//! Base trait for store state.

/// Marker trait for store state objects.
///
/// States should be:
/// - Cloneable (snapshots are handed out to readers)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (the store starts from `Default::default()`)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
