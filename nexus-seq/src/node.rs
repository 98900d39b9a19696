//! Chain nodes stored in the list's arena.

/// Sentinel key meaning "no node".
///
/// `slab` hands out dense keys starting at zero, so `usize::MAX` is never a
/// live slot.
pub(crate) const NONE: usize = usize::MAX;

/// Arena of chain nodes, addressed by stable `usize` keys.
pub(crate) type Arena<T> = slab::Slab<Node<T>>;

/// A single cell of the chain: one element plus the key of its successor.
///
/// Each node is linked from exactly one place (its predecessor's `next`, or
/// the list head), so the chain owns it even though the slab holds the bytes.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: usize,
}

impl<T> Node<T> {
    /// Creates a detached node (no successor).
    #[inline]
    pub(crate) fn new(data: T) -> Self {
        Self { data, next: NONE }
    }

    #[inline]
    pub(crate) fn is_last(&self) -> bool {
        self.next == NONE
    }
}
