//! Singly linked list addressable by index.

mod list;

pub use self::list::{
    SinglyLinkedList, SinglyLinkedListIntoIter, SinglyLinkedListIter, SinglyLinkedListIterMut,
};
