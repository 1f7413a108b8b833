use crate::list::{Link, List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

/// A read-only cursor over a `List`.
///
/// A `Cursor` is a position marker that only moves forward. In a list with
/// length *n*, there are *n* + 2 valid locations for the cursor: the ghost
/// node before the first element, each of the *n* elements, and the end.
///
/// A `Cursor` is `Copy`, so it can be passed around by value and used as a
/// bookmark. The default cursor is at the end and refers to no node.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`, and the end by `$`).
/// ```
/// use forward_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [# A B C $]
/// let list = List::from_iter(['A', 'B', 'C']);
///
/// // Create a cursor at the ghost node: [|# A B C $]
/// let mut cursor = list.cursor_before_start();
/// assert_eq!(cursor.current(), None);
/// assert_eq!(cursor.peek_next(), Some(&'A'));
///
/// // Move cursor forward: [# |A B C $]
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // A copy keeps its own position.
/// let bookmark = cursor;
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(bookmark.current(), Some(&'A'));
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Move to the end: [# A B C |$]
/// assert!(cursor.move_next().is_ok());
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor, list.cursor_end());
/// assert!(cursor.move_next().is_err());
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: Option<NonNull<Link<T>>>,
    ghost: Option<NonNull<Link<T>>>,
    _marker: PhantomData<&'a List<T>>,
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` holds the exclusive borrow of the list, so it is the only
/// way to relink nodes after a given position, and no other cursor can be
/// left dangling by its removals. The lifetime of its yielded references is
/// tied to its own lifetime, instead of just the underlying list.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily borrow
/// the list and returns an immutable reference whose lifetime is shorter than the
/// cursor.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: Option<NonNull<Link<T>>>,
    pub(crate) list: &'a mut List<T>,
}

/// The link following `link`, as a read-only pointer.
///
/// It is unsafe because `link` must point to a live link of a list.
unsafe fn next_of<T>(link: NonNull<Link<T>>) -> Option<NonNull<Link<T>>> {
    link.as_ref().next.as_deref().map(Node::as_link)
}

/// The link following `link`, as a writable pointer.
///
/// It is unsafe because `link` must point to a live link of a list, and it
/// must have been derived from an exclusive borrow.
unsafe fn next_of_mut<T>(link: NonNull<Link<T>>) -> Option<NonNull<Link<T>>> {
    (*link.as_ptr()).next.as_deref_mut().map(Node::as_link_mut)
}

/// The element stored in the node owning `link`.
///
/// It is unsafe because `link` must belong to an element node, never the
/// ghost node.
unsafe fn element<'b, T>(link: NonNull<Link<T>>) -> &'b T {
    &link.cast::<Node<T>>().as_ref().element
}

macro_rules! impl_cursor {
    ($CURSOR:ident, $NEXT_OF:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the cursor is at the ghost node, one position
            /// before the first element.
            pub fn is_before_start(&self) -> bool {
                match self.current {
                    Some(link) => ptr::eq(link.as_ptr(), self.ghost_ptr()),
                    None => false,
                }
            }

            /// Returns `true` if the cursor is at the end, past the last element.
            pub fn is_end(&self) -> bool {
                self.current.is_none()
            }

            /// Move the cursor to the next position, or return an error
            /// if it is already at the end.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                let link = self.current.ok_or("Cannot move past the end of the list")?;
                // SAFETY: a position other than the end is a live link of the list.
                self.current = unsafe { $NEXT_OF(link) };
                Ok(())
            }

            /// Move the cursor to the last element, or leave it at the ghost node
            /// if the list is empty. A cursor at the end stays there.
            ///
            /// This operation should compute in *O*(*n*) time.
            pub fn move_to_last(&mut self) {
                if let Some(mut link) = self.current {
                    // SAFETY: every link reachable from a live link is owned by the list.
                    while let Some(next) = unsafe { $NEXT_OF(link) } {
                        link = next;
                    }
                    self.current = Some(link);
                }
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let mut f = f.debug_struct(stringify!($CURSOR));
                if self.is_before_start() {
                    f.field("current", &"<before start>");
                } else if self.is_end() {
                    f.field("current", &"<end>");
                } else {
                    f.field("current", &self.current());
                }
                f.finish()
            }
        }
    };
}

impl_cursor!(Cursor, next_of);
impl_cursor!(CursorMut, next_of_mut);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: Option<NonNull<Link<T>>>) -> Self {
        Self {
            current,
            ghost: Some(list.ghost_link()),
            _marker: PhantomData,
        }
    }

    fn ghost_ptr(&self) -> *const Link<T> {
        self.ghost
            .map_or(ptr::null(), |ghost| ghost.as_ptr() as *const Link<T>)
    }

    /// Return a reference to the element at the cursor, or `None` if the
    /// cursor is at the ghost node or the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor_start().current(), Some(&1));
    /// assert_eq!(list.cursor_before_start().current(), None);
    /// assert_eq!(list.cursor_end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        let link = self.current?;
        if self.is_before_start() {
            return None;
        }
        // SAFETY: every position except the ghost node and the end is an
        // element node, and the list is borrowed for `'a`.
        Some(unsafe { element(link) })
    }

    /// Return a reference to the element after the cursor, or `None` if
    /// there is no element after it.
    pub fn peek_next(&self) -> Option<&'a T> {
        // SAFETY: a position other than the end is a live link of the list,
        // and the link after it is always an element node.
        let next = unsafe { next_of(self.current?) }?;
        debug_assert!(
            !ptr::eq(next.as_ptr(), self.ghost_ptr()),
            "the ghost node is not an element"
        );
        // SAFETY: as above.
        Some(unsafe { element(next) })
    }
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

impl<'a, T: 'a> Default for Cursor<'a, T> {
    /// Create a cursor at the end, referring to no node.
    fn default() -> Self {
        Self {
            current: None,
            ghost: None,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: Option<NonNull<Link<T>>>) -> Self {
        Self { current, list }
    }

    fn ghost_ptr(&self) -> *const Link<T> {
        &self.list.ghost
    }
}

// Methods that does not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return a reference to the element at the cursor, or `None` if the
    /// cursor is at the ghost node or the end.
    pub fn current(&self) -> Option<&T> {
        let link = self.current?;
        if self.is_before_start() {
            return None;
        }
        // SAFETY: every position except the ghost node and the end is an
        // element node.
        Some(unsafe { element(link) })
    }

    /// Return a mutable reference to the element at the cursor, or `None`
    /// if the cursor is at the ghost node or the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the ghost node.
    /// assert!(list.cursor_before_start_mut().current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let link = self.current?;
        if self.is_before_start() {
            return None;
        }
        // SAFETY: non-ghost nodes hold a valid element, and the cursor owns
        // the exclusive borrow of the list.
        Some(unsafe { &mut (*link.cast::<Node<T>>().as_ptr()).element })
    }

    /// Return a reference to the element after the cursor, or `None` if
    /// there is no element after it.
    pub fn peek_next(&self) -> Option<&T> {
        // SAFETY: a position other than the end is a live link of the list,
        // and the link after it is always an element node.
        unsafe { next_of(self.current?).map(|next| element(next)) }
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current)
    }

    /// Temporarily view the list via an immutable reference.
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
    /// assert_eq!(cursor.view().len(), 3);
    ///
    /// cursor.insert_after(4);
    /// assert_eq!(Vec::from_iter(list), vec![1, 4, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Insert a new element after the cursor, and move the cursor onto it.
    ///
    /// Repeated calls therefore lay elements out in the order they are
    /// inserted.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 4]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.insert_after(2);
    /// cursor.insert_after(3);
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(cursor.peek_next(), Some(&4));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert_after(&mut self, item: T) {
        let mut link = self
            .current
            .expect("Cannot insert after the end of the list");
        // SAFETY: a position other than the end is a live link of the list.
        let link = unsafe { link.as_mut() };
        let next = link.next.take();
        let node = link.next.insert(Node::new(item, next));
        self.current = Some(node.as_link_mut());
        #[cfg(feature = "length")]
        {
            self.list.len += 1;
        }
    }

    /// Remove the element after the cursor and return it, or return `None`
    /// if there is no element after the cursor.
    ///
    /// The cursor stays where it is, so the element that followed the removed
    /// one is now the next.
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
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor.erase_after(), Some(3));
    /// assert_eq!(cursor.peek_next(), Some(&4));
    ///
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor.erase_after(), None); // nothing after the last element
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4]);
    /// ```
    pub fn erase_after(&mut self) -> Option<T> {
        let mut link = self.current?;
        // SAFETY: a position other than the end is a live link of the list.
        let link = unsafe { link.as_mut() };
        let mut node = link.next.take()?;
        link.next = node.link.next.take();
        #[cfg(feature = "length")]
        {
            debug_assert!(self.list.len > 0, "length out of sync with the chain");
            self.list.len -= 1;
        }
        Some(node.into_element())
    }

    /// Split the list into two after the cursor. Returns everything after
    /// the cursor; the cursor becomes the last position of its list.
    ///
    /// A cursor at the end splits off an empty list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time with the `length`
    /// feature (the split-off nodes are counted), and in *O*(1) time without it.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// assert!(cursor.move_next().is_ok());
    /// let split = cursor.split_after();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2]);
    /// assert_eq!(Vec::from_iter(split), vec![3, 4]);
    /// ```
    pub fn split_after(&mut self) -> List<T> {
        let rest = match self.current {
            // SAFETY: a position other than the end is a live link of the list.
            Some(mut link) => unsafe { link.as_mut() }.next.take(),
            None => None,
        };
        let split = List::from_chain(rest);
        #[cfg(feature = "length")]
        {
            debug_assert!(split.len <= self.list.len, "length out of sync with the chain");
            self.list.len -= split.len;
        }
        split
    }

    /// Link all the elements of `other` in after the cursor, and move the
    /// cursor onto the last of them. The cursor stays if `other` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the length
    /// of `other`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 4]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.splice_after(List::from_iter([2, 3]));
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// ```
    pub fn splice_after(&mut self, mut other: List<T>) {
        let mut link = self
            .current
            .expect("Cannot splice after the end of the list");
        #[cfg(feature = "length")]
        let len = other.len;
        let mut front = match other.ghost.next.take() {
            Some(front) => front,
            None => return,
        };
        let mut back = front.as_link_mut();
        // SAFETY: `front` owns the detached chain and every link reached from
        // it; `link` is a live link of the list.
        unsafe {
            while let Some(next) = next_of_mut(back) {
                back = next;
            }
            back.as_mut().next = link.as_mut().next.take();
            link.as_mut().next = Some(front);
        }
        self.current = Some(back);
        #[cfg(feature = "length")]
        {
            self.list.len += len;
        }
    }
}

/// Compare cursors by the node they refer to.
///
/// Cursors at the same position of the same list are equal, whatever their
/// flavor. Comparing cursors of different lists is meaningless, except that
/// all cursors at the end are equal.
///
/// # Examples
/// ```
/// use forward_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1;
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next().unwrap();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
/// ```
impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.current == other.current
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.current == other.current
    }
}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.current == other.current
    }
}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.current == other.current
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}
