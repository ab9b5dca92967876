use crate::avl_tree::node::Node;
use log::{debug, trace};
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Returns the cached height of a tree, or `-1` for an empty tree.
pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// precondition: the heights of the subtrees of `node` differ by at most two
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let factor = node.balance();

    if factor > 1 {
        let child = match node.left.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        if height(&child.left) >= height(&child.right) {
            trace!("left-left imbalance, rotating right");
            node.left = Some(child);
        } else {
            trace!("left-right imbalance, rotating left then right");
            node.left = Some(rotate_left(child));
        }
        rotate_right(node)
    } else if factor < -1 {
        let child = match node.right.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        if height(&child.right) >= height(&child.left) {
            trace!("right-right imbalance, rotating left");
            node.right = Some(child);
        } else {
            trace!("right-left imbalance, rotating right then left");
            node.right = Some(rotate_right(child));
        }
        rotate_left(node)
    } else {
        node
    }
}

// Refreshes the height of the root of `tree` after one of its children changed, restores the
// balance invariant at the root, then refreshes the height of whichever node became the root.
fn rebalance<T>(tree: &mut Tree<T>) {
    if let Some(mut node) = tree.take() {
        node.update();
        let mut node = balance(node);
        node.update();
        *tree = Some(node);
    }
}

// precondition: the tree is not empty
fn remove_max<T>(tree: &mut Tree<T>) -> T {
    if let Some(node) = tree {
        if node.right.is_some() {
            let key = remove_max(&mut node.right);
            rebalance(tree);
            return key;
        }
    }

    match tree.take() {
        Some(node) => {
            let Node { key, left, .. } = *node;
            *tree = left;
            key
        },
        None => unreachable!(),
    }
}

/// Inserts a key into the tree. Returns `true` if the key did not already exist.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    if inserted {
        rebalance(tree);
    }
    inserted
}

/// Removes a key from the tree and returns it. A node with two children takes the key of its
/// in-order predecessor, which is removed from the left subtree instead.
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
            if node.left.is_some() && node.right.is_some() {
                debug!("removing node with two children, promoting in-order predecessor");
                let predecessor = remove_max(&mut node.left);
                Some(mem::replace(&mut node.key, predecessor))
            } else {
                let Node {
                    key, left, right, ..
                } = *node;
                *tree = left.or(right);
                return Some(key);
            }
        },
    };

    *tree = Some(node);
    if removed.is_some() {
        rebalance(tree);
    }
    removed
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    match tree {
        None => false,
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
    }
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
