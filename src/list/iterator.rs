use crate::list::{List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of a `List`.
///
/// This `struct` is created by [`List::iter`]. It walks the chain of
/// nodes from the first element and stops at the end; the ghost node is
/// never yielded.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_front(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    next: Option<&'a Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            next: list.ghost.next.as_deref(),
            #[cfg(feature = "length")]
            len: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            #[cfg(feature = "length")]
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.link.next.as_deref();
            #[cfg(feature = "length")]
            {
                debug_assert!(self.len > 0, "length out of sync with the chain");
                self.len -= 1;
            }
            &node.element
        })
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// It provides mutability of the elements, but not of the linked structure
/// of the list.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use forward_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    next: Option<&'a mut Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        #[cfg(feature = "length")]
        let len = list.len();
        Self {
            next: list.ghost.next.as_deref_mut(),
            #[cfg(feature = "length")]
            len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut next = self.next.as_deref();
        while let Some(node) = next {
            f.field(&node.element);
            next = node.link.next.as_deref();
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.link.next.as_deref_mut();
            #[cfg(feature = "length")]
            {
                debug_assert!(self.len > 0, "length out of sync with the chain");
                self.len -= 1;
            }
            &mut node.element
        })
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Build a list in the order of the iterator.
///
/// Each element is inserted after the previous one, starting from the ghost
/// node, so the order is kept without reversing.
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        let mut cursor = list.cursor_before_start_mut();
        iter.into_iter().for_each(|item| cursor.insert_after(item));
        list
    }
}

/// Append the elements of the iterator at the back of the list.
///
/// The list is walked once to find its last node.
impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = self.cursor_before_start_mut();
        cursor.move_to_last();
        iter.into_iter().for_each(|item| cursor.insert_after(item));
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    /// Converts a `[T; N]` into a `List<T>`.
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    fn from(array: [T; N]) -> Self {
        IntoIterator::into_iter(array).collect()
    }
}
