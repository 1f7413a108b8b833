//! This crate provides a singly-linked list with owned nodes, anchored by a
//! ghost node that sits before the first element.
//!
//! The [`List`] allows inserting and removing elements after any given position
//! in constant time. In compromise, reaching a position takes *O*(*n*) time, and
//! the list can only be walked forward.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use forward_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_before_start_mut();
//!
//! cursor.insert_after(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&0));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 3, 4]));
//!
//! cursor.move_next().unwrap(); // move the cursor onto 1, and remove what follows
//! assert_eq!(cursor.erase_after(), Some(2));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 3, 4]));
//!
//! list.push_front(5);
//! assert_eq!(list, List::from_iter([5, 0, 1, 3, 4]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!   List
//! ╔═══════════╗         ┌───────────┐         ┌───────────┐                ┌───────────┐
//! ║   next    ║ ──────→ │   next    │ ──────→ │   next    │ ──→ ┄┄ ──────→ │   next    │ ──→ (none)
//! ╟───────────╢         ├───────────┤         ├───────────┤                ├───────────┤
//! ║   (len)   ║         │ payload T │         │ payload T │                │ payload T │
//! ╚═══════════╝         └───────────┘         └───────────┘                └───────────┘
//! (Ghost) Node              Node 0                Node 1                       Node n-1
//! ```
//! The `List` contains:
//! - the ghost node, stored inline, which is a bare `next` link with no payload;
//! - a length field `len` indicating the length of the list. It can be disabled by
//!   disabling the `length` feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! forward_list = { default-features = false }
//! ```
//!
//! Each node of the list `List<T>` is allocated on heap and owned by the link
//! before it. It contains:
//! - the `next` link that owns the next element (or nothing if it is the last
//!   element in the list);
//! - the actual payload `T`.
//!
//! Initially, the `next` link of the ghost node is empty. As elements are
//! inserted, it owns the first element, and the chain of `next` links owns the
//! rest. Swapping two lists only swaps their ghost links and lengths.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! forward, fused iterators. [`IterMut`] provides mutability of the elements (but
//! not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] mark a single position of a list.
//! In a list with length *n*, there are *n* + 2 positions: the ghost node
//! (`before_start`), the *n* elements, and the end. Cursors only move forward.
//!
//! A [`Cursor`] is read-only and `Copy`. A [`CursorMut`] holds the exclusive
//! borrow of the list and provides the editing operations, all of which act
//! on the node *after* the cursor:
//! - [`insert_after`]: insert a new element after the cursor, and move onto it;
//! - [`erase_after`]: remove the element after the cursor;
//! - [`split_after`]: split everything after the cursor into a new list;
//! - [`splice_after`]: link another list in after the cursor.
//!
//! Starting from the ghost node, the same operations edit the front of the list.
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_before_start_mut();
//! assert_eq!(cursor.erase_after(), Some(1)); // becomes [2, 3, 4]
//!
//! cursor.move_next().unwrap(); // points to 2
//! cursor.insert_after(5); // becomes [2, 5, 3, 4], points to 5
//! assert_eq!(cursor.current(), Some(&5));
//!
//! let rest = cursor.split_after(); // becomes [2, 5]
//! assert_eq!(Vec::from_iter(rest), vec![3, 4]);
//!
//! assert_eq!(Vec::from_iter(list), vec![2, 5]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! # Value Semantics
//!
//! A `List` can be cloned into an independent copy, compared element-wise
//! (`==`), and ordered lexicographically (`<`, `<=`, `>`, `>=`), like other
//! standard sequences. [`Clone::clone_from`] builds the copy aside and swaps it
//! in, so the target is untouched if an element fails to clone.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert_after`]: crate::list::cursor::CursorMut::insert_after
//! [`erase_after`]: crate::list::cursor::CursorMut::erase_after
//! [`split_after`]: crate::list::cursor::CursorMut::split_after
//! [`splice_after`]: crate::list::cursor::CursorMut::splice_after

#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;
