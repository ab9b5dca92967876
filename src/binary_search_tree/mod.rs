//! Binary search tree that performs no rebalancing.

mod node;
mod set;
mod tree;

pub use self::set::{BstSet, BstSetIter};
