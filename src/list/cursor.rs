//! The cursor cache of a [`List`] and the index resolver built on it.
//!
//! A list remembers one `(node, index)` pair, the last position it resolved.
//! Every index-addressed operation calls [`List::seek_to`] first, which starts
//! from whichever of three anchors is nearest to the target:
//!
//! ```text
//!        front anchor        cursor anchor              rear anchor
//!             ↓                    ↓                         ↓
//! [F] ──→ [0] ──→ [1] ──→ ┄ ──→ [c] ──→ ┄ ──→ [n - 1] ──→ [R]
//!
//! distance:  target      |c - target|      n - target
//! ```
//!
//! Ties keep the cursor where it is, so sequential scans never jump.

use crate::list::{List, REAR};

/// A cached position in the list: the node at `index`.
///
/// With `index == len` the cursor rests on the rear sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub(crate) node: usize,
    pub(crate) index: usize,
}

/// The reference point a seek starts walking from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Anchor {
    /// The first real node, at index 0.
    Front,
    /// The cached cursor.
    Cursor,
    /// The rear sentinel, at index `len`.
    Rear,
}

impl Cursor {
    pub(crate) fn new(node: usize, index: usize) -> Self {
        Self { node, index }
    }

    /// Move forward the cursor by given steps.
    ///
    /// The caller guarantees the walk does not pass the rear sentinel.
    fn seek_forward_fast<T>(&mut self, list: &List<T>, steps: usize) {
        self.index += steps;
        (0..steps).for_each(|_| self.node = list.node(self.node).next);
    }

    /// Move backward the cursor by given steps.
    ///
    /// The caller guarantees the walk does not pass the first node.
    fn seek_backward_fast<T>(&mut self, list: &List<T>, steps: usize) {
        self.index -= steps;
        (0..steps).for_each(|_| self.node = list.node(self.node).prev);
    }

    /// Move the cursor to the next node. Returns `false` without moving if the
    /// cursor already rests on the rear sentinel.
    pub(crate) fn move_next<T>(&mut self, list: &List<T>) -> bool {
        if self.node == REAR {
            return false;
        }
        self.seek_forward_fast(list, 1);
        true
    }
}

impl<T> List<T> {
    /// A cursor at the first node (the rear sentinel if the list is empty).
    pub(crate) fn cursor_start(&self) -> Cursor {
        Cursor::new(self.front_node(), 0)
    }

    /// A cursor at the rear sentinel.
    pub(crate) fn cursor_end(&self) -> Cursor {
        Cursor::new(REAR, self.len)
    }

    /// Choose the anchor nearest to `target`.
    ///
    /// The front anchor wins only if strictly nearer than the cursor, then the
    /// rear anchor likewise; otherwise the cursor stays.
    pub(crate) fn nearest_anchor(&self, target: usize) -> Anchor {
        let from_front = target;
        let from_cursor = self.cursor().index.abs_diff(target);
        let from_rear = self.len - target;
        if from_front < from_cursor {
            Anchor::Front
        } else if from_rear < from_cursor {
            Anchor::Rear
        } else {
            Anchor::Cursor
        }
    }

    /// Move the cursor cache to `target` and return the node there.
    ///
    /// `target` must be in `0..=len`; with `target == len` this returns the
    /// rear sentinel.
    ///
    /// This operation should compute in *O*(min(*t*, |*c* - *t*|, *n* - *t*))
    /// time, for cursor index *c*, target *t* and length *n*.
    pub(crate) fn seek_to(&self, target: usize) -> usize {
        debug_assert!(target <= self.len, "Cannot seek to a nonexistent index");
        let mut cursor = match self.nearest_anchor(target) {
            Anchor::Front => self.cursor_start(),
            Anchor::Cursor => self.cursor(),
            Anchor::Rear => self.cursor_end(),
        };
        if target > cursor.index {
            cursor.seek_forward_fast(self, target - cursor.index);
        } else {
            cursor.seek_backward_fast(self, cursor.index - target);
        }
        self.set_cursor(cursor);
        cursor.node
    }
}
