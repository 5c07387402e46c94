pub mod map;

pub use map::{MapTreeOps, OrderedMap, OrderedMapIter};
