//! This crate provides a doubly-linked list bounded by two sentinel nodes,
//! addressed by index.
//!
//! The [`List`] inserts and removes elements at a resolved position in constant
//! time. To reach a position, it walks from the nearest of three anchors: the
//! front, the rear, or the position it visited last. Sequential and nearby
//! accesses are therefore cheap, while a random access takes *O*(*n*) time in
//! the worst case.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cursor_list::List;
//!
//! let mut list = List::new();
//! list.add('a', 0).unwrap();
//! list.add('b', 1).unwrap();
//! list.add('c', 1).unwrap();
//! assert_eq!(list.to_string(), "<a, c, b>");
//!
//! assert_eq!(list.find(&'c'), 1);
//! assert_eq!(list.remove_at(0), Ok('a'));
//! assert_eq!(list.get(1), Ok('b'));
//! assert!(list.get(2).is_err());
//! ```
//!
//! # Memory Layout
//!
//! The nodes live in one arena and link to each other by slot:
//! ```text
//!    slot 0                 slot 3                 slot 2                 slot 1
//! ╔═══════════╗          ┌───────────┐          ┌───────────┐          ╔═══════════╗
//! ║   next    ║ ───────→ │   next    │ ───────→ │   next    │ ───────→ ║ next: NIL ║
//! ╟───────────╢          ├───────────┤          ├───────────┤          ╟───────────╢
//! ║ prev: NIL ║ ←─────── │   prev    │ ←─────── │   prev    │ ←─────── ║   prev    ║
//! ╟───────────╢          ├───────────┤          ├───────────┤          ╟───────────╢
//! ┊No payload ┊          │ payload T │          │ payload T │          ┊No payload ┊
//! ╚═══════════╝          └───────────┘          └───────────┘          ╚═══════════╝
//!  Front sentinel           Index 0                Index 1             Rear sentinel
//!                                                     ↑
//!                                      cursor: (slot 2, index 1)
//! ```
//! The `List` contains:
//! - the node arena, with the front sentinel in slot 0 and the rear sentinel in
//!   slot 1;
//! - the slots freed by removals, reused by later insertions;
//! - a length field `len` counting the real nodes;
//! - the cursor cache, the `(node, index)` pair resolved last.
//!
//! In convention, in a list with length *n*, the real nodes are indexed by 0,
//! 1, ..., *n* - 1, and the rear sentinel is indexed by *n*. In an empty list
//! the front sentinel links straight to the rear sentinel.
//!
//! The cursor is a cache, not part of the value. Two lists with the same
//! elements are equal wherever their cursors are, and [`List::get`] takes
//! `&self` even though it moves the cursor. For the same reason a `List` can
//! be sent to another thread but not shared between threads.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] iterator, a double-ended iterator
//! that reads the links directly and leaves the cursor alone. [`IntoIter`] and
//! [`Drain`] move the elements out.
//!
//! ```
//! use cursor_list::List;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
//! ```
//!
//! # Text Generation
//!
//! The [`markov`] module builds a character-level text generator on top of
//! `List<char>`, which the `randwrite` binary drives from the command line.

#[doc(inline)]
pub use error::ListError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{Drain, List};

pub mod error;
pub mod list;
pub mod markov;
