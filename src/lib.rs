//! Ordered and sequential containers.
//!
//! - [`avl_tree::AvlSet`]: a height-balanced ordered set.
//! - [`binary_search_tree::BstSet`]: an ordered set backed by a binary search tree that never
//!   rebalances.
//! - [`linked_list::SinglyLinkedList`]: an index-addressable singly linked list.
//!
//! The sets implement the [`Set`] capability and the list implements the [`Sequence`]
//! capability. Tree-backed sets can describe their shape as a GraphViz graph through
//! [`GraphvizExport`].

pub mod avl_tree;
pub mod binary_search_tree;
mod collection;
mod error;
pub mod graphviz;
pub mod linked_list;

pub use crate::collection::{Sequence, Set};
pub use crate::error::{Error, Result};
pub use crate::graphviz::{GraphvizConfig, GraphvizExport};
