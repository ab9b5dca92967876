use crate::binary_search_tree::node::Node;
use crate::binary_search_tree::tree;
use crate::collection::Set;
use crate::error::{Error, Result};
use crate::graphviz::{self, GraphvizConfig, GraphvizExport};
use std::fmt::{self, Debug, Display};
use std::iter::FromIterator;

/// An ordered set implemented using a binary search tree that performs no balancing.
///
/// Each node records the size of its subtree. The shape of the tree depends entirely on the
/// insertion order, so inserting sorted keys degrades it into a list with `O(N)` operations.
/// Clearing or dropping the set tears the tree down without recursion.
///
/// # Examples
/// ```
/// use ordered_collections::binary_search_tree::BstSet;
///
/// let mut set = BstSet::new();
/// set.insert(2);
/// set.insert(1);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.to_string(), "{1, 2}");
/// assert!(set.remove(&2));
/// ```
pub struct BstSet<T> {
    tree: tree::Tree<T>,
}

impl<T> BstSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BstSet<T>`.
    pub fn new() -> Self {
        BstSet { tree: None }
    }

    /// Inserts a key into the set. Returns `true` if the key was added.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::binary_search_tree::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        tree::insert(&mut self.tree, key)
    }

    /// Removes a key from the set. Returns `true` if the key existed in the set.
    pub fn remove(&mut self, key: &T) -> bool {
        self.take(key).is_some()
    }

    /// Removes a key from the set and returns it. Returns `None` if the key does not exist.
    pub fn take(&mut self, key: &T) -> Option<T> {
        tree::remove(&mut self.tree, key)
    }

    /// Checks if a key exists in the set.
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        tree::len(&self.tree)
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
    }

    /// Returns the height of the tree, where a single key has height `0` and an empty set has
    /// height `-1`. This walks the whole tree.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::binary_search_tree::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.insert(3);
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the keys of the set in ascending order. An empty set yields an empty `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::binary_search_tree::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BstSetIter<'_, T> {
        let mut iter = BstSetIter {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left(&self.tree);
        iter
    }
}

impl<T> Set<T> for BstSet<T>
where
    T: Ord,
{
    fn add(&mut self, key: Option<T>) -> Result<()> {
        let key = key.ok_or(Error::InvalidArgument { operation: "add" })?;
        self.insert(key);
        Ok(())
    }

    fn remove(&mut self, key: Option<&T>) -> Result<bool> {
        let key = key.ok_or(Error::InvalidArgument { operation: "remove" })?;
        Ok(BstSet::remove(self, key))
    }

    fn contains(&self, key: Option<&T>) -> Result<bool> {
        let key = key.ok_or(Error::InvalidArgument { operation: "contains" })?;
        Ok(BstSet::contains(self, key))
    }

    fn is_empty(&self) -> bool {
        BstSet::is_empty(self)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        BstSet::clear(self);
    }

    fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec()
    }
}

impl<T> Drop for BstSet<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T> GraphvizExport for BstSet<T>
where
    T: Display,
{
    fn graphviz_with(&self, config: &GraphvizConfig) -> Result<String> {
        graphviz::render(self.tree.as_ref().map(|node| &**node), config)
    }
}

impl<T> Display for BstSet<T>
where
    T: Ord + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, key) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "}}")
    }
}

impl<T> Debug for BstSet<T>
where
    T: Ord + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a BstSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = BstSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for BstSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = BstSet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

/// An iterator for `BstSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct BstSetIter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> BstSetIter<'a, T> {
    fn push_left(&mut self, mut tree: &'a tree::Tree<T>) {
        while let Some(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for BstSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for BstSetIter<'a, T> where T: 'a {}

impl<T> Default for BstSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::BstSet;
    use crate::binary_search_tree::node::Node;
    use crate::graphviz::GraphvizExport;

    const DEGENERATE_LEN: u32 = 1_000_000;

    // Builds a right spine directly, since inserting sorted keys recurses once per level.
    fn degenerate_set(len: u32) -> BstSet<u32> {
        let mut tree = None;
        for key in (0..len).rev() {
            let mut node = Node::new(key);
            node.right = tree;
            node.update();
            tree = Some(Box::new(node));
        }
        BstSet { tree }
    }

    #[test]
    fn test_drop_degenerate() {
        let set = degenerate_set(DEGENERATE_LEN);
        assert_eq!(set.len(), DEGENERATE_LEN as usize);
        assert_eq!(set.min(), Some(&0));
        drop(set);
    }

    #[test]
    fn test_clear_degenerate() {
        let mut set = degenerate_set(DEGENERATE_LEN);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_len_empty() {
        let set: BstSet<u32> = BstSet::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.height(), -1);
    }

    #[test]
    fn test_insert_remove() {
        let mut set = BstSet::new();
        assert!(set.insert(1));
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 2);
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_min_max() {
        let set: BstSet<u32> = vec![4, 2, 9].into_iter().collect();
        assert_eq!(set.min(), Some(&2));
        assert_eq!(set.max(), Some(&9));
    }

    #[test]
    fn test_clear() {
        let mut set: BstSet<u32> = vec![4, 2, 9].into_iter().collect();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "{}");
    }

    #[test]
    fn test_graphviz_degenerate_shape() {
        let set: BstSet<u32> = vec![1, 2, 3].into_iter().collect();
        let dot = set.graphviz().unwrap();
        assert!(dot.contains(
            "node1 [label=\"1\"];\nnode1 -> node3;\nnode3 [label=\"2\"];\n\
             node3 -> node7;\nnode7 [label=\"3\"];\n"
        ));
    }
}
