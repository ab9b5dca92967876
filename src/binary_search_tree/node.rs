use crate::binary_search_tree::tree::{self, Tree};
use crate::graphviz::GraphvizNode;
use std::fmt::Display;

/// A struct representing an internal node of a binary search tree. `size` counts the keys in the
/// subtree rooted at the node.
pub struct Node<T> {
    pub key: T,
    pub size: usize,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        self.size = tree::len(&self.left) + tree::len(&self.right) + 1;
    }
}

impl<T> GraphvizNode for Node<T>
where
    T: Display,
{
    type Key = T;

    fn key(&self) -> &T {
        &self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_ref().map(|node| &**node)
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_ref().map(|node| &**node)
    }
}
