use crate::binary_search_tree::node::Node;
use std::cmp::{self, Ordering};

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn len<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.size,
    }
}

// The tree does not cache heights, so this walks every node.
pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(node) => cmp::max(height(&node.left), height(&node.right)) + 1,
    }
}

// precondition: the tree is not empty
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(node) = tree {
        if node.left.is_some() {
            let min = remove_min(&mut node.left);
            node.update();
            return min;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    match tree {
        Some(node) => {
            let inserted = match key.cmp(&node.key) {
                Ordering::Less => insert(&mut node.left, key),
                Ordering::Greater => insert(&mut node.right, key),
                Ordering::Equal => false,
            };
            if inserted {
                node.size += 1;
            }
            inserted
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            true
        },
    }
}

/// Removes a key from the tree and returns it. A node with two children is replaced by the
/// minimum node of its right subtree.
pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return None,
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => remove(&mut node.left, key),
        Ordering::Greater => remove(&mut node.right, key),
        Ordering::Equal => {
            let Node {
                key, left, right, ..
            } = *node;
            *tree = match (left, right) {
                (None, right) => right,
                (left, None) => left,
                (left, mut right) => {
                    let mut successor = remove_min(&mut right);
                    successor.left = left;
                    successor.right = right;
                    successor.update();
                    Some(successor)
                },
            };
            return Some(key);
        },
    };

    if removed.is_some() {
        node.update();
    }
    *tree = Some(node);
    removed
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

/// Empties the tree one node at a time so that tearing down a degenerate tree does not recurse
/// once per level.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut stack = Vec::new();
    stack.extend(tree.take());
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
