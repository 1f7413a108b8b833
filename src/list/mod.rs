use std::fmt::{Debug, Formatter};
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a singly-linked list with owned nodes. A ghost node placed
/// before the first element lets every insertion and removal be expressed as
/// "after some node", including those at the front of the list.
///
/// Inserting or removing an element after a known position takes constant time.
/// In compromise, reaching a position takes *O*(*n*) time, and the list can only
/// be walked forward.
///
/// The `List` contains:
/// - the ghost node `ghost`, stored inline, whose link is the first element;
/// - a length field `len` indicating the length of the list. It can be disabled by
///   disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// forward_list = { default-features = false }
/// ```
///
/// # Naming Conventions
///
/// - `before_start`: the ghost node, one position before the first element;
/// - `start`: the first element (or the end if the list is empty);
/// - `end`: the position past the last element. It refers to no node at all.
pub struct List<T> {
    ghost: Link<T>,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
}

/// The outgoing link of a node.
///
/// The ghost node is a bare `Link` with no payload, and every element node
/// starts with one, so cursors address both kinds as a `NonNull<Link<T>>`.
pub(crate) struct Link<T> {
    pub(crate) next: Option<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) link: Link<T>,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_link(&self) -> NonNull<Link<T>> {
        NonNull::from(&self.ghost)
    }
    pub(crate) fn ghost_link_mut(&mut self) -> NonNull<Link<T>> {
        NonNull::from(&mut self.ghost)
    }
    pub(crate) fn front_link(&self) -> Option<NonNull<Link<T>>> {
        self.ghost.next.as_deref().map(Node::as_link)
    }
    pub(crate) fn front_link_mut(&mut self) -> Option<NonNull<Link<T>>> {
        self.ghost.next.as_deref_mut().map(Node::as_link_mut)
    }

    /// Construct a list owning the chain starting at `front`.
    ///
    /// The length is counted by walking the links, before the list is built.
    pub(crate) fn from_chain(front: Option<Box<Node<T>>>) -> Self {
        #[cfg(feature = "length")]
        let len = {
            let mut len = 0;
            let mut next = front.as_deref();
            while let Some(node) = next {
                len += 1;
                next = node.link.next.as_deref();
            }
            len
        };
        Self {
            ghost: Link { next: front },
            #[cfg(feature = "length")]
            len,
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use forward_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: Link { next: None },
            #[cfg(feature = "length")]
            len: 0,
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
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ghost.next.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time with the `length`
    /// feature, and in *O*(*n*) time without it.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `List`.
    ///
    /// Nodes are released one by one from the front, so dropping a long
    /// list never recurses.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
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
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        #[cfg(feature = "length")]
        debug_assert_eq!(self.len, 0, "length out of sync with the chain");
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.ghost.next.as_deref_mut().map(|node| &mut node.element)
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
    /// use forward_list::List;
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
        self.cursor_before_start_mut().insert_after(elt);
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
    /// use forward_list::List;
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
        self.cursor_before_start_mut().erase_after()
    }

    /// Exchanges the contents of two lists.
    ///
    /// Only the links to the first elements (and the lengths) are swapped;
    /// no element is moved or copied.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut a = List::from_iter([1, 2, 3]);
    /// let mut b = List::from_iter([4, 5]);
    ///
    /// a.swap(&mut b);
    ///
    /// assert_eq!(a, List::from_iter([4, 5]));
    /// assert_eq!(b, List::from_iter([1, 2, 3]));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.ghost.next, &mut other.ghost.next);
        #[cfg(feature = "length")]
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Provides a cursor at the ghost node, one position before the first
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_before_start();
    /// assert!(cursor.is_before_start());
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.peek_next(), Some(&1));
    /// ```
    pub fn cursor_before_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, Some(self.ghost_link()))
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is at the end if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_link())
    }

    /// Provides a cursor at the end, past the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list: List<i32> = List::new();
    /// assert_eq!(list.cursor_start(), list.cursor_end());
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    /// Provides a cursor with editing operations at the ghost node.
    ///
    /// This is where insertions and removals at the front of the list start.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([2, 3]);
    /// let mut cursor = list.cursor_before_start_mut();
    ///
    /// cursor.insert_after(1);
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn cursor_before_start_mut(&mut self) -> CursorMut<'_, T> {
        let mut cursor = CursorMut::new(self, None);
        cursor.current = Some(cursor.list.ghost_link_mut());
        cursor
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is at the end if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let mut cursor = CursorMut::new(self, None);
        cursor.current = cursor.list.front_link_mut();
        cursor
    }

    /// Provides a cursor with editing operations at the end.
    ///
    /// Nothing can be inserted after the end, so this cursor is mostly
    /// useful for comparisons.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, None)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// list.push_front(0);
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

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
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
    pub(crate) fn new(element: T, next: Option<Box<Node<T>>>) -> Box<Self> {
        Box::new(Node {
            link: Link { next },
            element,
        })
    }

    // `Node` is `#[repr(C)]` with `link` as its first field, so a node pointer
    // is also a valid pointer to its link.
    pub(crate) fn as_link(&self) -> NonNull<Link<T>> {
        NonNull::from(self).cast()
    }

    pub(crate) fn as_link_mut(&mut self) -> NonNull<Link<T>> {
        NonNull::from(self).cast()
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Ensure that `List` and its read-only views are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
    fn d<'i, 'a>(x: Cursor<'i, &'static str>) -> Cursor<'i, &'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[derive(Debug)]
    struct DropChecker<'a, T: Copy> {
        value: T,
        dropped: &'a RefCell<Vec<T>>,
    }
    impl<'a, T: Copy> DropChecker<'a, T> {
        fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
            Self { value, dropped }
        }
    }
    impl<'a, T: Copy> Drop for DropChecker<'a, T> {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.value);
        }
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_front(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_empty_state() {
        let list = List::<i32>::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.cursor_start(), list.cursor_end());
        assert_eq!(list, List::new());
        assert_eq!(list, List::default());
    }

    #[test]
    fn list_drop() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_front(DropChecker::new(3, &dropped));
        list.push_front(DropChecker::new(2, &dropped));
        list.push_front(DropChecker::new(1, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_clear_releases_each_node_once() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        for value in (0..4).rev() {
            list.push_front(DropChecker::new(value, &dropped));
        }
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(dropped.borrow().as_slice(), &[0, 1, 2, 3]);

        // clearing again is a no-op
        list.clear();
        assert!(list.is_empty());
        drop(list);
        assert_eq!(dropped.borrow().len(), 4);
    }

    #[test]
    fn list_drop_long_chain() {
        let list = List::from_iter(0..200_000);
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.pop_front(), None);

        list.push_front(1);
        list.push_front(2);
        assert_eq!(list.len(), 2);
        assert_eq!(list.front(), Some(&2));

        if let Some(front) = list.front_mut() {
            *front = 20;
        }
        assert_eq!(list.pop_front(), Some(20));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_swap() {
        let mut a = List::from_iter([1, 2, 3]);
        let mut b = List::from_iter([9]);
        a.swap(&mut b);
        assert_eq!(Vec::from_iter(a.iter().copied()), vec![9]);
        assert_eq!(Vec::from_iter(b.iter().copied()), vec![1, 2, 3]);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 3);

        let mut empty = List::new();
        b.swap(&mut empty);
        assert!(b.is_empty());
        assert_eq!(b.cursor_start(), b.cursor_end());
        assert_eq!(empty, List::from_iter([1, 2, 3]));
    }

    #[test]
    fn list_insert_at_front_round_trip() {
        let mut list = List::new();
        list.cursor_before_start_mut().insert_after(7);
        assert_eq!(list.cursor_start().current(), Some(&7));
        assert_eq!(list.len(), 1);

        assert_eq!(list.cursor_before_start_mut().erase_after(), Some(7));
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn list_erase_after_interior() {
        let mut list = List::from_iter([1, 2, 3, 4]);
        let mut cursor = list.cursor_start_mut();
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.erase_after(), Some(3));
        assert_eq!(cursor.peek_next(), Some(&4));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 4]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn list_len() {
        let mut list = List::new();
        assert_eq!(list.len(), 0);

        list.push_front(1);
        assert_eq!(list.len(), 1);

        list.pop_front();
        assert_eq!(list.len(), 0);

        list.extend(0..5);
        assert_eq!(list.len(), 5);

        let mut cursor = list.cursor_start_mut();
        cursor.erase_after();
        cursor.insert_after(10);
        assert_eq!(list.len(), 5);

        let split = list.cursor_start_mut().split_after();
        assert_eq!(list.len(), 1);
        assert_eq!(split.len(), 4);

        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_from_chain_counts_nodes() {
        let mut list = List::from_iter([1, 2, 3]);
        let chain = list.ghost.next.take();
        #[cfg(feature = "length")]
        {
            list.len = 0;
        }

        let rebuilt = List::from_chain(chain);
        assert_eq!(rebuilt.len(), 3);
        #[cfg(feature = "length")]
        assert_eq!(rebuilt.iter().len(), 3);
        assert_eq!(Vec::from_iter(rebuilt), vec![1, 2, 3]);

        assert!(List::<i32>::from_chain(None).is_empty());
        assert_eq!(List::<i32>::from_chain(None).len(), 0);
    }

    #[cfg(all(feature = "length", debug_assertions))]
    #[test]
    #[should_panic(expected = "length out of sync")]
    fn list_erase_checks_length() {
        // the list is leaked, so unwinding never drops the broken chain
        let mut list = std::mem::ManuallyDrop::new(List::from_iter([1]));
        list.len = 0;
        list.pop_front();
    }
}
