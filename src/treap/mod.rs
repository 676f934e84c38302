//! Probabilistic binary search tree where each node also maintains the heap invariant.

mod arena;
mod node;
mod set;
mod tree;

pub use self::set::TreapSet;
pub use self::set::TreapSetIter;
