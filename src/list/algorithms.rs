use crate::list::{List, REAR};
use std::fmt;
use std::hash::{Hash, Hasher};

pub use self::drain::Drain;

mod drain;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

/// Copies are built by replaying `add(element, position)` for every element
/// of the source, so they never share nodes with it.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = List::with_capacity(self.len());
        list.replay(self);
        list
    }

    /// Destroys the current contents, then copies `source`.
    ///
    /// Assigning a list to itself cannot be expressed here: `source` and
    /// `self` are borrowed at the same time.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.replay(source);
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// Renders the list as `<e0, e1, ..., en>`, or `<>` when empty.
///
/// # Examples
///
/// ```
/// use cursor_list::List;
///
/// assert_eq!(List::<char>::new().to_string(), "<>");
/// assert_eq!(List::from_iter(['a', 'c', 'b']).to_string(), "<a, c, b>");
/// ```
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for elt in iter {
                write!(f, ", {}", elt)?;
            }
        }
        f.write_str(">")
    }
}

impl<T> List<T> {
    /// Copy every element of `source` into this empty list, adding each at
    /// its original position.
    fn replay(&mut self, source: &Self)
    where
        T: Clone,
    {
        debug_assert!(self.is_empty());
        for (position, elt) in source.iter().enumerate() {
            self.insert_at(position, elt.clone());
        }
    }

    /// Scan forward from the first node for `x`, leaving the cursor on the
    /// first match, or on the rear sentinel if there is none.
    ///
    /// The rear sentinel is never compared.
    fn scan_for(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor_start();
        let found = loop {
            if cursor.node == REAR {
                break None;
            }
            if self.node(cursor.node).element.as_ref() == Some(x) {
                break Some(cursor.index);
            }
            cursor.move_next(self);
        };
        self.set_cursor(cursor);
        found
    }

    /// Returns the index of the first element equal to `x`, or
    /// [`size()`](List::size) if there is none.
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
    /// let list = List::from_iter(['a', 'c', 'b', 'c']);
    /// assert_eq!(list.find(&'c'), 1);
    /// assert_eq!(list.find(&'z'), list.size());
    /// ```
    pub fn find(&self, x: &T) -> usize
    where
        T: PartialEq,
    {
        self.scan_for(x).unwrap_or(self.len)
    }

    /// Removes the first element equal to `x` and returns it, or returns
    /// `None` and leaves the list unchanged if there is none.
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
    /// let mut list = List::from_iter([1, 2, 3, 2]);
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.remove(&5), None);
    /// assert_eq!(list.to_string(), "<1, 3, 2>");
    /// ```
    pub fn remove(&mut self, x: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let at = self.scan_for(x)?;
        self.remove_at_unchecked(at)
    }

    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// Unlike [`List::find`], this does not move the cursor.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}
