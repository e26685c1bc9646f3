//! Recency List Module
//!
//! Doubly linked ordering of cache records from most- to least-recently
//! used, backed by an arena of index-based links. No raw pointers and no
//! `unsafe`: `prev`/`next` are `usize` handles into the arena, with
//! `usize::MAX` as the null sentinel. All operations are O(1).

/// Stable handle addressing one record across the list and the slot arena.
pub(crate) type Handle = usize;

/// Null sentinel for `prev`/`next` links and for the head/tail/free anchors.
const NIL: usize = usize::MAX;

// == Link ==
/// Neighbor links for one arena slot. Freed slots are chained into a free
/// list through `next`.
#[derive(Debug, Clone, Copy)]
struct Link {
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// Head = most recently used, tail = least recently used. Handles are
/// allocated by the list and recycled through an internal free list, so a
/// handle stays valid until `remove`/`pop_back` releases it.
#[derive(Debug)]
pub(crate) struct RecencyList {
    /// Arena of links, indexed by handle
    links: Vec<Link>,
    /// Most recently used, NIL when empty
    head: usize,
    /// Least recently used, NIL when empty
    tail: usize,
    /// Head of the free-slot chain, NIL when none
    free: usize,
    /// Number of linked (live) handles
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` handles.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            links: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Allocates a handle and links it at the head (most recently used).
    ///
    /// Returns a fresh arena index the first time, a recycled one after
    /// removals; the caller stores the record under the same index.
    pub(crate) fn push_front(&mut self) -> Handle {
        let idx = self.alloc();
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Touch ==
    /// Moves an existing handle to the head (most recently used).
    pub(crate) fn touch(&mut self, idx: Handle) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Unlinks a handle and releases it for reuse.
    pub(crate) fn remove(&mut self, idx: Handle) {
        self.unlink(idx);
        self.release(idx);
        self.len -= 1;
    }

    // == Pop Back ==
    /// Removes and returns the least recently used handle.
    ///
    /// Returns None if the list is empty.
    pub(crate) fn pop_back(&mut self) -> Option<Handle> {
        if self.tail == NIL {
            return None;
        }
        let idx = self.tail;
        self.remove(idx);
        Some(idx)
    }

    // == Peek Back ==
    /// Returns the least recently used handle without removing it.
    #[cfg(test)]
    pub(crate) fn back(&self) -> Option<Handle> {
        (self.tail != NIL).then_some(self.tail)
    }

    // == Length ==
    /// Returns the number of linked handles.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    // == Clear ==
    /// Resets the whole structure to empty, dropping the arena wholesale
    /// rather than unlinking node by node.
    pub(crate) fn clear(&mut self) {
        self.links.clear();
        self.head = NIL;
        self.tail = NIL;
        self.free = NIL;
        self.len = 0;
    }

    /// Iterates handles from most- to least-recently used.
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = Handle> + '_ {
        std::iter::successors(
            (self.head != NIL).then_some(self.head),
            move |&idx| {
                let next = self.links[idx].next;
                (next != NIL).then_some(next)
            },
        )
    }

    // == Internal Link Operations ==
    /// Takes a slot from the free chain, or grows the arena.
    fn alloc(&mut self) -> usize {
        if self.free != NIL {
            let idx = self.free;
            self.free = self.links[idx].next;
            self.links[idx] = Link { prev: NIL, next: NIL };
            idx
        } else {
            self.links.push(Link { prev: NIL, next: NIL });
            self.links.len() - 1
        }
    }

    /// Chains a released slot onto the free list.
    fn release(&mut self, idx: usize) {
        self.links[idx].next = self.free;
        self.free = idx;
    }

    /// Inserts an allocated, unlinked slot at the head.
    fn link_front(&mut self, idx: usize) {
        self.links[idx].prev = NIL;
        self.links[idx].next = self.head;
        if self.head != NIL {
            self.links[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    /// Detaches a slot from its neighbors, fixing head/tail anchors.
    fn unlink(&mut self, idx: usize) {
        let Link { prev, next } = self.links[idx];
        if prev != NIL {
            self.links[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.links[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.links[idx] = Link { prev: NIL, next: NIL };
    }
}
