mod error;
pub use error::KeyNotFound;

pub mod key_search;
pub use key_search::{BinarySearch, KeySearcher, LinearSearch};

mod map;
pub use map::FlatMap;

pub mod iter;
