//! Capability traits implemented by the containers of this crate.
//!
//! The traits model arguments that may be absent with `Option`, so that a missing key is reported
//! as an [`Error::InvalidArgument`](crate::Error::InvalidArgument) instead of being
//! unrepresentable. The inherent methods of each container take keys directly.

use crate::error::Result;

/// Trait for unordered-insert, duplicate-rejecting sets that iterate in ascending order.
pub trait Set<T> {
    /// Adds a key to the set. Adding a key that already exists leaves the set unchanged.
    ///
    /// Fails with `InvalidArgument` if the key is absent.
    fn add(&mut self, key: Option<T>) -> Result<()>;

    /// Removes a key from the set. Returns `true` if the set contained the key.
    ///
    /// Fails with `InvalidArgument` if the key is absent.
    fn remove(&mut self, key: Option<&T>) -> Result<bool>;

    /// Returns `true` if the set contains the key.
    ///
    /// Fails with `InvalidArgument` if the key is absent.
    fn contains(&self, key: Option<&T>) -> Result<bool>;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool;

    /// Returns the number of keys in the set.
    fn size(&self) -> usize;

    /// Removes every key from the set.
    fn clear(&mut self);

    /// Returns the keys of the set in ascending order. An empty set yields an empty `Vec`.
    fn to_array(&self) -> Vec<T>
    where
        T: Clone;
}

/// Trait for ordered, index-addressable sequences that may contain duplicates.
pub trait Sequence<T> {
    /// Appends a value to the end of the sequence.
    fn add(&mut self, value: T);

    /// Inserts a value at `index`, shifting later values one position to the right.
    ///
    /// Fails with `IndexOutOfBounds` unless `index <= size()`.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Returns the value at `index`.
    ///
    /// Fails with `IndexOutOfBounds` unless `index < size()`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Removes and returns the value at `index`.
    ///
    /// Fails with `IndexOutOfBounds` unless `index < size()`.
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Removes the first occurrence of a value. Returns `true` if the value was present.
    fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq;

    /// Returns `true` if the sequence contains the value.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Returns the index of the first occurrence of the value.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Removes every value from the sequence.
    fn clear(&mut self);

    /// Returns `true` if the sequence is empty.
    fn is_empty(&self) -> bool;

    /// Returns the number of values in the sequence.
    fn size(&self) -> usize;

    /// Returns the values of the sequence from first to last.
    fn to_array(&self) -> Vec<T>
    where
        T: Clone;
}
