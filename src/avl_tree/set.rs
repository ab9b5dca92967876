use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::collection::Set;
use crate::error::{Error, Result};
use crate::graphviz::{self, GraphvizConfig, GraphvizExport};
use log::debug;
use std::fmt::{self, Debug, Display};
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// rebalances each ancestor of the modified node on the way back up, so the height of the tree
/// stays proportional to the logarithm of the number of keys.
///
/// # Examples
/// ```
/// use ordered_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.to_string(), "{0, 3}");
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet { tree: None, len: 0 }
    }

    /// Inserts a key into the set. Returns `true` if the key was added and `false` if it already
    /// existed, in which case the set is unchanged.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set. Returns `true` if the key existed in the set.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        self.take(key).is_some()
    }

    /// Removes a key from the set and returns it. Returns `None` if the key does not exist.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, key: &T) -> Option<T> {
        let removed = tree::remove(&mut self.tree, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing avl set of {} keys", self.len);
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree, where a single key has height `0` and an empty set has
    /// height `-1`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), -1);
    /// set.insert(1);
    /// set.insert(2);
    /// set.insert(3);
    /// assert_eq!(set.height(), 1);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the keys of the set in ascending order. An empty set yields an empty `Vec`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// ```
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
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        let mut iter = AvlSetIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(&self.tree);
        iter
    }
}

impl<T> Set<T> for AvlSet<T>
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
        Ok(AvlSet::remove(self, key))
    }

    fn contains(&self, key: Option<&T>) -> Result<bool> {
        let key = key.ok_or(Error::InvalidArgument { operation: "contains" })?;
        Ok(AvlSet::contains(self, key))
    }

    fn is_empty(&self) -> bool {
        AvlSet::is_empty(self)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        AvlSet::clear(self);
    }

    fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec()
    }
}

impl<T> GraphvizExport for AvlSet<T>
where
    T: Display,
{
    fn graphviz_with(&self, config: &GraphvizConfig) -> Result<String> {
        graphviz::render(self.tree.as_ref().map(|node| &**node), config)
    }
}

impl<T> Display for AvlSet<T>
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

impl<T> Debug for AvlSet<T>
where
    T: Ord + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = AvlSetIntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(self.tree);
        iter
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    stack: Vec<Node<T>>,
    remaining: usize,
}

impl<T> AvlSetIntoIter<T> {
    fn push_left(&mut self, mut tree: tree::Tree<T>) {
        while let Some(mut node) = tree {
            tree = node.left.take();
            self.stack.push(*node);
        }
    }
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let Node { key, right, .. } = self.stack.pop()?;
        self.push_left(right);
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for AvlSetIntoIter<T> {}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
/// The stack holds the unvisited ancestors along the current left spine, so at most `O(log N)`
/// references are held at once.
pub struct AvlSetIter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> AvlSetIter<'a, T> {
    fn push_left(&mut self, mut tree: &'a tree::Tree<T>) {
        while let Some(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
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

impl<'a, T> ExactSizeIterator for AvlSetIter<'a, T> where T: 'a {}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlSet;
    use crate::collection::Set;
    use crate::error::Error;
    use crate::graphviz::{GraphvizConfig, GraphvizExport};

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_clear() {
        let mut set: AvlSet<u32> = (0..10).collect();
        set.clear();
        assert_eq!(set.len(), 0);
        assert_eq!(set.height(), -1);
        assert_eq!(set.to_string(), "{}");
    }

    #[test]
    fn test_display() {
        let mut set = AvlSet::new();
        assert_eq!(set.to_string(), "{}");
        set.insert(2);
        set.insert(1);
        assert_eq!(set.to_string(), "{1, 2}");
    }

    #[test]
    fn test_debug() {
        let set: AvlSet<u32> = vec![3, 1, 2].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{1, 2, 3}");
    }

    #[test]
    fn test_set_capability_rejects_absent_keys() {
        let mut set: AvlSet<u32> = (0..3).collect();
        assert_eq!(
            Set::add(&mut set, None),
            Err(Error::InvalidArgument { operation: "add" }),
        );
        assert_eq!(
            Set::remove(&mut set, None),
            Err(Error::InvalidArgument { operation: "remove" }),
        );
        assert_eq!(
            Set::contains(&set, None),
            Err(Error::InvalidArgument { operation: "contains" }),
        );
        assert_eq!(Set::size(&set), 3);
    }

    #[test]
    fn test_set_capability() {
        let mut set = AvlSet::new();
        Set::add(&mut set, Some(2)).unwrap();
        Set::add(&mut set, Some(1)).unwrap();
        assert_eq!(Set::contains(&set, Some(&1)), Ok(true));
        assert_eq!(Set::remove(&mut set, Some(&3)), Ok(false));
        assert_eq!(Set::to_array(&set), vec![1, 2]);
        Set::clear(&mut set);
        assert!(Set::is_empty(&set));
        assert_eq!(Set::to_array(&set), Vec::<u32>::new());
    }

    #[test]
    fn test_graphviz_show_height() {
        let set: AvlSet<u32> = vec![2, 1, 3].into_iter().collect();
        let dot = set.graphviz_with(&GraphvizConfig::default().show_height(true)).unwrap();
        assert!(dot.contains("node1 [label=\"2-1\"];\n"));
        assert!(dot.contains("node2 [label=\"1-0\"];\n"));
        assert!(dot.contains("node3 [label=\"3-0\"];\n"));
    }

    #[test]
    fn test_into_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        let iter = set.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }

    #[test]
    fn test_iter_size_hint() {
        let set: AvlSet<u32> = (0..10).collect();
        let mut iter = set.iter();
        assert_eq!(iter.len(), 10);
        iter.next();
        assert_eq!(iter.len(), 9);
    }
}
