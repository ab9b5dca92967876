use crate::collection::Sequence;
use crate::error::{Error, Result};
use std::fmt::{self, Debug, Display};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

type Link<T> = Option<Box<ListNode<T>>>;

struct ListNode<T> {
    value: T,
    next: Link<T>,
}

impl<T> ListNode<T> {
    fn new(value: T) -> Self {
        ListNode { value, next: None }
    }
}

/// A singly linked list.
///
/// Values are kept in insertion order and duplicates are allowed. Accessing, inserting, or
/// removing at an arbitrary index walks the list from the head, so these operations take `O(N)`
/// time. Operations at the front of the list take `O(1)` time.
///
/// # Examples
///
/// ```
/// use ordered_collections::linked_list::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(3);
///
/// assert_eq!(list.get(0), Some(&3));
/// assert_eq!(list.get(3), None);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.to_string(), "[3, 1, 2]");
///
/// assert_eq!(list.pop_front(), Some(3));
/// assert_eq!(list.remove(1), Some(2));
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Constructs a new, empty `SinglyLinkedList<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<u32> = SinglyLinkedList::new();
    /// ```
    pub fn new() -> Self {
        SinglyLinkedList { head: None, len: 0 }
    }

    // Returns the link that holds the node at `index`, or the trailing empty link if `index` is
    // past the end of the list.
    fn link_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut curr = &mut self.head;
        for _ in 0..index {
            match curr {
                Some(node) => curr = &mut node.next,
                None => break,
            }
        }
        curr
    }

    /// Inserts a value into the list at a particular index, shifting elements one position to the
    /// right if needed. Returns an error if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.insert(0, 1).unwrap();
    /// list.insert(0, 2).unwrap();
    /// assert_eq!(list.get(0), Some(&2));
    /// assert_eq!(list.get(1), Some(&1));
    /// assert!(list.insert(5, 3).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let link = self.link_mut(index);
        let next = link.take();
        *link = Some(Box::new(ListNode { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Removes a value at a particular index from the list. Returns `None` if the index is out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.push_back(1);
    /// assert_eq!(list.remove(1), None);
    /// assert_eq!(list.remove(0), Some(1));
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let link = self.link_mut(index);
        let node = link.take()?;
        let ListNode { value, next } = *node;
        *link = next;
        self.len -= 1;
        Some(value)
    }

    /// Inserts a value at the front of the list.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.len += 1;
    }

    /// Inserts a value at the back of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.get(0), Some(&1));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        *self.link_mut(len) = Some(Box::new(ListNode::new(value)));
        self.len += 1;
    }

    /// Removes a value at the front of the list. Returns `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(0)
    }

    /// Returns an immutable reference to the value at a particular index. Returns `None` if the
    /// index is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns a mutable reference to the value at a particular index. Returns `None` if the
    /// index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.push_back(1);
    /// *list.get_mut(0).unwrap() = 2;
    /// assert_eq!(list.get(0), Some(&2));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    /// Returns the index of the first occurrence of a value. Returns `None` if the value does not
    /// exist in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<u32> = vec![4, 5, 4].into_iter().collect();
    /// assert_eq!(list.index_of(&4), Some(0));
    /// assert_eq!(list.index_of(&6), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|curr| curr == value)
    }

    /// Checks if a value exists in the list.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes the first occurrence of a value. Returns `true` if the value existed in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<u32> = vec![4, 5, 4].into_iter().collect();
    /// assert!(list.remove_first(&4));
    /// assert_eq!(list.to_string(), "[5, 4]");
    /// ```
    pub fn remove_first(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_some(),
            None => false,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the list, removing all values.
    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }

    /// Returns the values of the list from first to last.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iterator = list.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SinglyLinkedListIter<'_, T> {
        SinglyLinkedListIter {
            current: self.head.as_ref().map(|node| &**node),
            remaining: self.len,
        }
    }

    /// Returns a mutable iterator over the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<u32> = vec![1, 2].into_iter().collect();
    /// for value in &mut list {
    ///     *value += 1;
    /// }
    /// assert_eq!(list.to_vec(), vec![2, 3]);
    /// ```
    pub fn iter_mut(&mut self) -> SinglyLinkedListIterMut<'_, T> {
        SinglyLinkedListIterMut {
            current: self.head.as_mut().map(|node| &mut **node),
            remaining: self.len,
        }
    }
}

impl<T> Sequence<T> for SinglyLinkedList<T> {
    fn add(&mut self, value: T) {
        self.push_back(value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        SinglyLinkedList::insert(self, index, value)
    }

    fn get(&self, index: usize) -> Result<&T> {
        let len = self.len;
        SinglyLinkedList::get(self, index).ok_or(Error::IndexOutOfBounds { index, len })
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        SinglyLinkedList::remove(self, index).ok_or(Error::IndexOutOfBounds { index, len })
    }

    fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_first(value)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        SinglyLinkedList::contains(self, value)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        SinglyLinkedList::index_of(self, value)
    }

    fn clear(&mut self) {
        SinglyLinkedList::clear(self);
    }

    fn is_empty(&self) -> bool {
        SinglyLinkedList::is_empty(self)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Display for SinglyLinkedList<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> Debug for SinglyLinkedList<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len;
        let mut added = 0;
        let mut tail = self.link_mut(len);
        for value in iter {
            *tail = Some(Box::new(ListNode::new(value)));
            if let Some(node) = tail {
                tail = &mut node.next;
            }
            added += 1;
        }
        self.len += added;
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type IntoIter = SinglyLinkedListIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T>
where
    T: 'a,
{
    type IntoIter = SinglyLinkedListIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T>
where
    T: 'a,
{
    type IntoIter = SinglyLinkedListIterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `SinglyLinkedList<T>`.
pub struct SinglyLinkedListIntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for SinglyLinkedListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

/// An iterator for `SinglyLinkedList<T>`.
pub struct SinglyLinkedListIter<'a, T> {
    current: Option<&'a ListNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for SinglyLinkedListIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_ref().map(|node| &**node);
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// A mutable iterator for `SinglyLinkedList<T>`.
pub struct SinglyLinkedListIterMut<'a, T> {
    current: Option<&'a mut ListNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for SinglyLinkedListIterMut<'a, T>
where
    T: 'a,
{
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_mut().map(|node| &mut **node);
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Error: index out of bounds.")
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Error: index out of bounds.")
    }
}
