/// Returned by [`FlatMap::at`](crate::FlatMap::at) and
/// [`FlatMap::at_mut`](crate::FlatMap::at_mut) when the map holds no entry for the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("key not found")]
pub struct KeyNotFound;
