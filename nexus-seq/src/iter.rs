//! Forward iterators over a [`SeqList`](crate::SeqList).

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::node::{Arena, NONE};

/// Where an [`Iter`] stands in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Nothing produced yet; the next element is the head.
    NotStarted,
    /// Key of the node produced most recently.
    At(usize),
}

/// Single-pass cursor over references to list elements, front to back.
///
/// The iterator borrows the list, so the chain cannot be restructured while
/// it is alive. It owns nothing: every element it yields lives in the list.
///
/// Besides the standard [`Iterator`] protocol it exposes an explicit
/// `has_next` / `try_next` pair, where running past the end is an error
/// rather than `None`.
///
/// # Example
///
/// ```
/// use nexus_seq::{Error, SeqList};
///
/// let list: SeqList<&str> = ["x", "y"].into_iter().collect();
/// let mut it = list.iter();
///
/// assert!(it.has_next());
/// assert_eq!(it.try_next(), Ok(&"x"));
/// assert_eq!(it.try_next(), Ok(&"y"));
/// assert!(!it.has_next());
/// assert_eq!(it.try_next(), Err(Error::Exhausted));
/// ```
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    head: usize,
    position: Position,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(arena: &'a Arena<T>, head: usize, len: usize) -> Self {
        Self {
            arena,
            head,
            position: Position::NotStarted,
            remaining: len,
        }
    }

    /// Key of the node `try_next` would produce, or `NONE`.
    #[inline]
    fn upcoming(&self) -> usize {
        match self.position {
            Position::NotStarted => self.head,
            Position::At(key) => self.arena.get(key).map_or(NONE, |node| node.next),
        }
    }

    /// Returns `true` if another element can be produced.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.upcoming() != NONE
    }

    /// Advances and returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] once every element has been produced.
    /// The cursor stays where it is, so later calls keep failing.
    #[inline]
    pub fn try_next(&mut self) -> Result<&'a T> {
        let arena = self.arena;
        let key = self.upcoming();
        let node = arena.get(key).ok_or(Error::Exhausted)?;

        self.position = Position::At(key);
        self.remaining = self.remaining.saturating_sub(1);
        Ok(&node.data)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            head: self.head,
            position: self.position,
            remaining: self.remaining,
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("position", &self.position)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that moves elements out of a list, front to back.
///
/// Created by [`SeqList::into_iter`](crate::SeqList). Elements not consumed
/// are dropped with the iterator.
pub struct IntoIter<T> {
    arena: Arena<T>,
    current: usize,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) fn new(arena: Arena<T>, head: usize) -> Self {
        Self {
            arena,
            current: head,
        }
    }
}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.arena.len())
            .finish_non_exhaustive()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.try_remove(self.current)?;
        self.current = node.next;
        Some(node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every node left in the arena is still on the chain.
        let len = self.arena.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
