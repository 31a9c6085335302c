use std::cell::Cell;
use std::fmt::{Debug, Formatter};
use std::io;

use crate::error::ListError;
use crate::list::cursor::Cursor;
use crate::Iter;

pub use crate::list::algorithms::Drain;

pub mod iterator;

mod algorithms;
mod cursor;

/// The "none" link of the front sentinel's `prev` and the rear sentinel's `next`.
pub(crate) const NIL: usize = usize::MAX;
/// Slot of the front sentinel.
pub(crate) const FRONT: usize = 0;
/// Slot of the rear sentinel.
pub(crate) const REAR: usize = 1;

/// The `List` is a doubly-linked list bounded by two sentinel nodes, addressed
/// by index through a cached cursor.
///
/// Inserting or removing at a resolved position takes constant time. Reaching
/// a position takes *O*(*n*) time in the worst case, but the list remembers the
/// last position it visited, so sequential or nearby accesses are amortized
/// *O*(1).
///
/// The `List` contains:
/// - an arena `nodes` of owned nodes, linked by slot indices. Slot 0 is the
///   front sentinel and slot 1 is the rear sentinel; neither holds an element;
/// - a stack of `vacant` slots, reused by later insertions;
/// - a length field `len` counting the real nodes;
/// - the cursor cache, a `(node, index)` pair.
///
/// The cursor is not part of the value of the list. Comparing, hashing or
/// cloning a list only looks at its elements, and read-only operations such as
/// [`List::get`] are allowed to move the cursor.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the rear sentinel).
pub struct List<T> {
    nodes: Vec<Node<T>>,
    vacant: Vec<usize>,
    /// the length of the list
    pub(crate) len: usize,
    cursor: Cell<Cursor>,
}

pub(crate) struct Node<T> {
    pub(crate) prev: usize,
    pub(crate) next: usize,
    pub(crate) element: Option<T>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn node(&self, at: usize) -> &Node<T> {
        &self.nodes[at]
    }
    pub(crate) fn front_node(&self) -> usize {
        self.nodes[FRONT].next
    }
    pub(crate) fn back_node(&self) -> usize {
        self.nodes[REAR].prev
    }

    pub(crate) fn cursor(&self) -> Cursor {
        self.cursor.get()
    }
    pub(crate) fn set_cursor(&self, cursor: Cursor) {
        self.cursor.set(cursor)
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Allocate a node holding `element`, reusing a vacant slot if there is one.
    ///
    /// The node is not linked into the chain yet.
    fn new_detached(&mut self, element: T) -> usize {
        let node = Node::new(NIL, NIL, Some(element));
        match self.vacant.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent nodes of the list (checked only in
    /// `#[cfg(debug_assertions)]`).
    fn attach_node(&mut self, prev: usize, next: usize, node: usize) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
    }

    /// Detach a single real node from the list, release its slot and return
    /// its element.
    ///
    /// Returns `None` for a sentinel, whose element is always empty, without
    /// touching any link.
    fn detach_node(&mut self, node: usize) -> Option<T> {
        let element = self.nodes[node].element.take()?;
        let (prev, next) = (self.nodes[node].prev, self.nodes[node].next);
        self.connect(prev, next);
        self.len -= 1;
        self.nodes[node] = Node::new(NIL, NIL, None);
        self.vacant.push(node);
        Some(element)
    }

    /// Insert `element` at position `at`, which must be in `0..=len`.
    pub(crate) fn insert_at(&mut self, at: usize, element: T) {
        let next = self.seek_to(at);
        let node = self.new_detached(element);
        self.attach_node(self.nodes[next].prev, next, node);
        self.set_cursor(Cursor::new(node, at));
    }

    /// Remove the element at position `at`, which must be in `0..len`.
    ///
    /// With `at == len` this resolves the rear sentinel and returns `None`,
    /// leaving the list unchanged.
    pub(crate) fn remove_at_unchecked(&mut self, at: usize) -> Option<T> {
        let node = self.seek_to(at);
        let next = self.nodes[node].next;
        let element = self.detach_node(node)?;
        self.set_cursor(Cursor::new(next, at));
        Some(element)
    }

    fn out_of_range(&self, index: usize, bound: usize) -> ListError {
        tracing::debug!(index, bound, len = self.len, "rejected list index");
        ListError::OutOfRange { index, bound }
    }

    /// Check that `index` addresses an element, i.e. `index < len`.
    fn check_element_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.len {
            Ok(())
        } else {
            Err(self.out_of_range(index, self.len))
        }
    }

    /// Check that `index` addresses a position, i.e. `index <= len`.
    fn check_position_index(&self, index: usize) -> Result<(), ListError> {
        if index <= self.len {
            Ok(())
        } else {
            Err(self.out_of_range(index, self.len + 1))
        }
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.nodes[prev].next, next);
        assert_eq!(self.nodes[next].prev, prev);
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use cursor_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `List` with room for `capacity` elements before the
    /// node arena reallocates.
    ///
    /// # Examples
    /// ```
    /// use cursor_list::List;
    /// let mut list = List::with_capacity(16);
    /// list.push_back('a');
    /// assert_eq!(list.size(), 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 2);
        nodes.push(Node::new(NIL, REAR, None));
        nodes.push(Node::new(FRONT, NIL, None));
        Self {
            nodes,
            vacant: Vec::new(),
            len: 0,
            cursor: Cell::new(Cursor::new(REAR, 0)),
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == REAR
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements in the `List`. Same as [`List::len`].
    ///
    /// A failed [`List::find`] returns this value.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Inserts `value` at `index`, shifting every element at or after `index`
    /// one position towards the back.
    ///
    /// `index == size()` appends to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time in the worst case, and
    /// in *O*(1) time at the ends of the list or next to the last accessed
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index > size()`. The list is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.add('a', 0).unwrap();
    /// list.add('b', 1).unwrap();
    /// list.add('c', 1).unwrap();
    /// assert_eq!(list.to_string(), "<a, c, b>");
    ///
    /// assert!(list.add('d', 5).is_err());
    /// assert_eq!(list.size(), 3);
    /// ```
    pub fn add(&mut self, value: T, index: usize) -> Result<(), ListError> {
        self.check_position_index(index)?;
        self.insert_at(index, value);
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time in the worst case, and
    /// in *O*(1) time at the ends of the list or next to the last accessed
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index >= size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from_iter(['c', 'b']);
    /// assert_eq!(list.remove_at(0), Ok('c'));
    /// assert_eq!(list.to_string(), "<b>");
    /// assert!(list.remove_at(1).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.check_element_index(index)?;
        let removed = self.remove_at_unchecked(index);
        debug_assert!(removed.is_some(), "Checked index {} hit a sentinel", index);
        removed.ok_or(ListError::OutOfRange {
            index,
            bound: self.len,
        })
    }

    /// Returns a copy of the element at `index`.
    ///
    /// This moves the internal cursor, but does not change the list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index >= size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.get(2), Ok(3));
    /// assert_eq!(list.get(0), Ok(1));
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<T, ListError>
    where
        T: Clone,
    {
        self.check_element_index(index)?;
        let node = self.seek_to(index);
        self.nodes[node]
            .element
            .clone()
            .ok_or(ListError::OutOfRange {
                index,
                bound: self.len,
            })
    }

    /// Removes all elements from the `List`, from the front to the back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.nodes.truncate(2);
        self.vacant.clear();
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.nodes[self.front_node()].element.as_ref()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.nodes[self.back_node()].element.as_ref()
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.insert_at(0, elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.remove_at_unchecked(0)
    }

    /// Appends an element to the back of a list. Same as `add(elt, size())`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.insert_at(self.len, elt);
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.remove_at_unchecked(self.len - 1)
    }

    /// Provides a forward iterator.
    ///
    /// Iterating does not move the internal cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Removes every element from the front of the list and yields it.
    ///
    /// Elements not consumed by the iterator are dropped when the iterator
    /// is dropped, and the list is left empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut drain = list.drain();
    /// assert_eq!(drain.next(), Some(1));
    /// drop(drain);
    /// assert!(list.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Writes the list to `out` as `<e0, e1, ..., en>`. An empty list is
    /// written as `<>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from_iter(['c', 'b']);
    /// let mut out = Vec::new();
    /// list.output(&mut out).unwrap();
    /// assert_eq!(out, b"<c, b>");
    /// ```
    pub fn output<W: io::Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: std::fmt::Display,
    {
        write!(out, "{}", self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    fn new(prev: usize, next: usize, element: Option<T>) -> Self {
        Node {
            prev,
            next,
            element,
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the whole chain and check every structural invariant, including
    /// that the cursor cache addresses the node it claims to.
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.nodes[FRONT].prev, NIL);
        assert_eq!(self.nodes[REAR].next, NIL);
        assert!(self.nodes[FRONT].element.is_none());
        assert!(self.nodes[REAR].element.is_none());

        let mut forward = Vec::new();
        let mut node = self.front_node();
        while node != REAR {
            assert!(forward.len() < self.len, "forward chain is longer than len");
            assert!(self.nodes[node].element.is_some());
            assert_eq!(self.nodes[self.nodes[node].next].prev, node);
            forward.push(node);
            node = self.nodes[node].next;
        }
        assert_eq!(forward.len(), self.len);

        let mut node = self.back_node();
        for &expected in forward.iter().rev() {
            assert_eq!(node, expected);
            node = self.nodes[node].prev;
        }
        assert_eq!(node, FRONT);

        let cursor = self.cursor();
        assert!(cursor.index <= self.len);
        let expected = forward.get(cursor.index).copied().unwrap_or(REAR);
        assert_eq!(cursor.node, expected, "cursor does not match its index");

        assert_eq!(self.nodes.len(), self.len + self.vacant.len() + 2);
    }
}
