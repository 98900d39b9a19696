//! Singly-linked sequence over an owned node arena.
//!
//! The list stores a head key and a length. Nodes live in a private
//! [`slab::Slab`] and link forward by key, with `usize::MAX` as the
//! end-of-chain sentinel.
//!
//! # Cost model
//!
//! The list keeps no tail reference, so every operation is a walk from the
//! head:
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `add` | O(n), walks to the tail |
//! | `get` | O(index) |
//! | `index_of` / `contains` / `remove` | O(n) |
//! | `sort` | O(n log n) plus one temporary `Vec` of keys |
//!
//! Bulk construction (`FromIterator`, deserialization) carries the tail key
//! locally and stays linear.
//!
//! # Example
//!
//! ```
//! use nexus_seq::SeqList;
//!
//! let mut list = SeqList::new();
//! list.add("b");
//! list.add("a");
//! list.add("c");
//! assert_eq!(list.to_string(), "[b, a, c]");
//!
//! list.sort();
//! assert_eq!(list.to_string(), "[a, b, c]");
//!
//! assert!(list.remove(&"a"));
//! assert_eq!(list.to_string(), "[b, c]");
//!
//! assert!(list.get(5).is_err());
//! assert_eq!(list.index_of(&"z"), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter};
use crate::node::{Arena, NONE, Node};

/// A generic, singly-linked, mutable sequence.
///
/// Elements keep insertion order, duplicates are allowed, and removal is by
/// value equality. See the [module docs](self) for the cost of each
/// operation.
///
/// # Example
///
/// ```
/// use nexus_seq::SeqList;
///
/// let mut list: SeqList<u64> = SeqList::with_capacity(16);
/// list.add(3);
/// list.add(1);
/// list.add(2);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(0), Ok(&3));
/// assert_eq!(list.index_of(&2), Some(2));
///
/// list.sort();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct SeqList<T> {
    arena: Arena<T>,
    head: usize,
    len: usize,
}

impl<T> Default for SeqList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Size and construction
// =============================================================================

impl<T> SeqList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: NONE,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the arena
    /// reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    // ========================================================================
    // Chain plumbing
    // ========================================================================

    /// Walks from the head and returns the last node's key, or `NONE`.
    fn tail_key(&self) -> usize {
        let mut key = self.head;
        while let Some(node) = self.arena.get(key) {
            if node.is_last() {
                return key;
            }
            key = node.next;
        }
        NONE
    }

    /// Returns the key of the node at `index`, or `NONE`.
    fn key_at(&self, index: usize) -> usize {
        let mut key = self.head;
        for _ in 0..index {
            match self.arena.get(key) {
                Some(node) => key = node.next,
                None => return NONE,
            }
        }
        key
    }

    /// Allocates a node for `value` and links it after `tail`.
    ///
    /// `tail` must be the current last node, or `NONE` for an empty list.
    /// Returns the new node's key, which is the new tail.
    pub(crate) fn link_after(&mut self, tail: usize, value: T) -> usize {
        let key = self.arena.insert(Node::new(value));
        match self.arena.get_mut(tail) {
            Some(node) => node.next = key,
            None => self.head = key,
        }
        self.len += 1;
        key
    }

    /// Appends every item, carrying the tail key instead of re-walking.
    fn extend_chain<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let mut tail = self.tail_key();
        for value in items {
            tail = self.link_after(tail, value);
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Appends `value` as the new last element.
    ///
    /// Always succeeds and always returns `true`; duplicates are kept. The
    /// list has no tail reference, so this walks the whole chain.
    pub fn add(&mut self, value: T) -> bool {
        let tail = self.tail_key();
        self.link_after(tail, value);
        true
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false`, leaving the list untouched, if the list is empty or
    /// no element matches. The remaining elements keep their relative order.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        let mut prev = NONE;
        let mut key = self.head;

        while let Some(node) = self.arena.get(key) {
            if node.data.eq(value) {
                let next = node.next;
                match self.arena.get_mut(prev) {
                    // Interior or tail match: bridge over the node
                    Some(pred) => pred.next = next,
                    // Head match: the second node becomes the head
                    None => self.head = next,
                }
                self.arena.remove(key);
                self.len -= 1;
                return true;
            }
            prev = key;
            key = node.next;
        }

        false
    }

    /// Removes every element, releasing all nodes.
    pub fn clear(&mut self) {
        trace!("releasing {} nodes", self.len);
        self.arena.clear();
        self.head = NONE;
        self.len = 0;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the element at zero-based `index`, walking from the head.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`, which includes every
    /// index on an empty list.
    pub fn get(&self, index: usize) -> Result<&T> {
        // Walking past the tail lands on the sentinel, which the arena misses.
        let key = self.key_at(index);
        self.arena
            .get(key)
            .map(|node| &node.data)
            .ok_or(Error::OutOfRange {
                index,
                len: self.len,
            })
    }

    /// Returns a mutable reference to the element at zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        let key = self.key_at(index);
        self.arena
            .get_mut(key)
            .map(|node| &mut node.data)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.arena.get(self.head).map(|node| &node.data)
    }

    /// Returns the last element, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        self.arena.get(self.tail_key()).map(|node| &node.data)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns the lowest index whose element equals `value`, or `None`.
    pub fn index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.iter().position(|elem| elem.eq(value))
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.iter().any(|elem| elem.eq(value))
    }

    /// Returns `true` if every element of `other` is present in this list.
    ///
    /// Presence is checked once per element of `other`, so duplicates there
    /// only need one match here. A list shorter than `other` is rejected
    /// up front without scanning.
    ///
    /// ```
    /// use nexus_seq::SeqList;
    ///
    /// let list: SeqList<u64> = [1, 2, 3].into_iter().collect();
    /// assert!(list.contains_all(&[3, 1]));
    /// assert!(!list.contains_all(&[4]));
    /// assert!(!list.contains_all(&[1, 1, 1, 1]));
    /// ```
    pub fn contains_all<'a, I>(&self, other: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: ExactSizeIterator,
        T: PartialEq + 'a,
    {
        let mut other = other.into_iter();
        if self.len < other.len() {
            return false;
        }
        other.all(|elem| self.contains(elem))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Copies every element, in order, into a new boxed slice.
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies every element, in order, into the caller's buffer.
    ///
    /// The buffer is cleared first and its allocation reused. The returned
    /// vector always has exactly `len()` elements.
    ///
    /// ```
    /// use nexus_seq::SeqList;
    ///
    /// let list: SeqList<u64> = [4, 5].into_iter().collect();
    /// let buf = list.to_array_in(vec![9, 9, 9]);
    /// assert_eq!(buf, vec![4, 5]);
    /// ```
    pub fn to_array_in(&self, mut buf: Vec<T>) -> Vec<T>
    where
        T: Clone,
    {
        buf.clear();
        buf.reserve(self.len);
        buf.extend(self.iter().cloned());
        buf
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Sorts the list into ascending natural order.
    ///
    /// The node keys are copied into a temporary `Vec` in chain order,
    /// sorted there by element with the standard stable sort, and the chain
    /// is relinked in that order. Equal elements keep their relative order.
    /// Nothing is relinked until the sort has finished, so a panicking
    /// comparison leaves the list as it was.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Sorts the list with a comparator, using the same rebuild strategy as
    /// [`sort`](Self::sort).
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut keys = Vec::with_capacity(self.len);
        let mut key = self.head;
        while let Some(node) = self.arena.get(key) {
            keys.push(key);
            key = node.next;
        }

        let arena = &self.arena;
        keys.sort_by(|&a, &b| compare(&arena[a].data, &arena[b].data));

        debug!("relinking chain from {} sorted elements", keys.len());
        self.head = keys.first().copied().unwrap_or(NONE);
        for pair in keys.windows(2) {
            self.arena[pair[0]].next = pair[1];
        }
        if let Some(&last) = keys.last() {
            self.arena[last].next = NONE;
        }
    }

    /// Sorts the list by a key extracted from each element.
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)));
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns a forward iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.head, self.len)
    }

    // ========================================================================
    // Unsupported bulk operations
    // ========================================================================

    /// Bulk append is not offered by this container.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`]; the list is not modified.
    pub fn add_all<I>(&mut self, _items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        unsupported("add_all")
    }

    /// Bulk removal is not offered by this container.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`]; the list is not modified.
    pub fn remove_all<'a, I>(&mut self, _items: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        unsupported("remove_all")
    }

    /// Bulk retention is not offered by this container.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`]; the list is not modified.
    pub fn retain_all<'a, I>(&mut self, _items: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        unsupported("retain_all")
    }
}

fn unsupported(op: &'static str) -> Result<()> {
    trace!("rejected unsupported operation {op}");
    Err(Error::Unsupported { op })
}

// =============================================================================
// Standard traits
// =============================================================================

impl<T: PartialEq> PartialEq for SeqList<T> {
    /// Ordered, element-wise equality.
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SeqList<T> {}

impl<T: Hash> Hash for SeqList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for elem in self.iter() {
            elem.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SeqList<T> {
    /// Renders `[]`, or the elements comma-space separated in brackets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for SeqList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend_chain(iter);
        list
    }
}

impl<T> IntoIterator for SeqList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.arena, self.head)
    }
}

impl<'a, T> IntoIterator for &'a SeqList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
