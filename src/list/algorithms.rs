use crate::list::List;
use std::cmp::Ordering;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        #[cfg(feature = "length")]
        if self.len() != other.len() {
            return false;
        }
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

/// Lists are ordered lexicographically: the first unequal pair of elements
/// decides, and a list that is a prefix of another is the lesser.
impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Replace the contents of the list with a copy of `source`.
    ///
    /// The copy is built aside and then swapped in, so if cloning an element
    /// panics the list is left untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap(&mut replacement);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(0);
    /// list.push_front(1);
    /// list.push_front(2);
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

#[cfg(test)]
mod tests {
    use crate::List;
    use quickcheck_macros::quickcheck;
    use std::iter::FromIterator;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn list_lexicographic_order() {
        fn l(items: &[i32]) -> List<i32> {
            List::from_iter(items.iter().copied())
        }

        assert!(l(&[1, 2, 3]) < l(&[1, 2, 4]));
        assert!(l(&[1, 2]) < l(&[1, 2, 3]));
        assert!(l(&[]) < l(&[1]));
        assert!(l(&[1, 2, 3]) > l(&[1, 2]));
        assert!(l(&[2]) > l(&[1, 9, 9]));
        assert!(l(&[1, 2, 3]) <= l(&[1, 2, 3]));
        assert!(l(&[1, 2, 3]) >= l(&[1, 2, 3]));
        assert!(!(l(&[1, 2, 3]) < l(&[1, 2, 3])));

        assert_eq!(l(&[1, 2, 3]), l(&[1, 2, 3]));
        assert_ne!(l(&[1, 2, 3]), l(&[1, 2]));
        assert_ne!(l(&[1, 2]), l(&[1, 2, 3]));
        assert_ne!(l(&[1, 2, 3]), l(&[1, 2, 4]));
        assert_eq!(l(&[]), l(&[]));
    }

    #[test]
    fn list_partial_order() {
        let a = List::from_iter([1.0, f64::NAN]);
        let b = List::from_iter([1.0, 2.0]);
        assert_eq!(a.partial_cmp(&b), None);
        assert_ne!(a, a.clone());

        let c = List::from_iter([0.5, f64::NAN]);
        assert!(c < b);
    }

    #[test]
    fn list_clone_is_independent() {
        let original = List::from_iter([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.push_front(0);
        if let Some(x) = copy.front_mut() {
            *x = 10;
        }
        copy.cursor_start_mut().erase_after();
        assert_eq!(Vec::from_iter(copy.iter().copied()), vec![10, 2, 3]);
        assert_eq!(Vec::from_iter(original.iter().copied()), vec![1, 2, 3]);
        assert_eq!(original.len(), 3);
    }

    #[test]
    fn list_clone_from() {
        let source = List::from_iter(0..5);
        let mut target = List::from_iter([9, 9]);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.len(), 5);

        target.clone_from(&List::new());
        assert!(target.is_empty());
    }

    #[test]
    fn list_assign_clone_of_itself() {
        let mut list = List::from_iter(["a", "b"]);
        list = list.clone();
        assert_eq!(list, List::from_iter(["a", "b"]));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn list_clone_from_leaves_target_on_panic() {
        #[derive(Debug, PartialEq)]
        struct Fragile(i32);
        impl Clone for Fragile {
            fn clone(&self) -> Self {
                if self.0 == 3 {
                    panic!("cannot clone 3");
                }
                Fragile(self.0)
            }
        }

        let source = List::from_iter([Fragile(1), Fragile(2), Fragile(3)]);
        let mut target = List::from_iter([Fragile(7), Fragile(8)]);
        let result = panic::catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());
        assert_eq!(target, List::from_iter([Fragile(7), Fragile(8)]));
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn list_contains() {
        let list = List::from_iter(["x", "y"]);
        assert!(list.contains(&"y"));
        assert!(!list.contains(&"z"));
        assert!(!List::<i32>::new().contains(&0));
    }

    #[quickcheck]
    fn order_matches_vec(a: Vec<u8>, b: Vec<u8>) -> bool {
        let (la, lb) = (List::from_iter(a.clone()), List::from_iter(b.clone()));
        la.cmp(&lb) == a.cmp(&b)
            && la.partial_cmp(&lb) == a.partial_cmp(&b)
            && (la == lb) == (a == b)
    }

    #[quickcheck]
    fn clone_then_mutate_leaves_original(input: Vec<i32>, value: i32) -> bool {
        let original = List::from_iter(input.clone());
        let mut copy = original.clone();
        let equal_after_copy = copy == original;
        copy.push_front(value);
        copy.iter_mut().for_each(|x| *x = x.wrapping_add(1));
        equal_after_copy && Vec::from_iter(original) == input
    }

    #[quickcheck]
    fn swap_exchanges_contents(a: Vec<i32>, b: Vec<i32>) -> bool {
        let (mut la, mut lb) = (List::from_iter(a.clone()), List::from_iter(b.clone()));
        la.swap(&mut lb);
        la.len() == b.len()
            && lb.len() == a.len()
            && Vec::from_iter(la) == b
            && Vec::from_iter(lb) == a
    }

    /// Apply random edits to a list and a `Vec` model side by side; the list
    /// must always hold exactly the model's elements.
    #[quickcheck]
    fn len_matches_reachable_elements(ops: Vec<(u8, u16)>) -> bool {
        let mut list = List::new();
        let mut model: Vec<u16> = Vec::new();
        for (op, value) in ops {
            let at = value as usize % (model.len() + 1);
            let mut cursor = list.cursor_before_start_mut();
            for _ in 0..at {
                if cursor.move_next().is_err() {
                    return false;
                }
            }
            match op % 7 {
                0 => {
                    drop(cursor);
                    list.push_front(value);
                    model.insert(0, value);
                }
                1 => {
                    drop(cursor);
                    if list.pop_front() != (!model.is_empty()).then(|| model.remove(0)) {
                        return false;
                    }
                }
                2 => {
                    cursor.insert_after(value);
                    model.insert(at, value);
                }
                3 => {
                    let expected = (at < model.len()).then(|| model.remove(at));
                    if cursor.erase_after() != expected {
                        return false;
                    }
                }
                4 => {
                    let tail = cursor.split_after();
                    let expected = model.split_off(at);
                    if tail.len() != expected.len() || !tail.iter().eq(expected.iter()) {
                        return false;
                    }
                }
                5 => {
                    let other = List::from_iter([value, value.wrapping_add(1)]);
                    cursor.splice_after(other);
                    if cursor.current() != Some(&value.wrapping_add(1)) {
                        return false;
                    }
                    model.insert(at, value);
                    model.insert(at + 1, value.wrapping_add(1));
                }
                _ => {
                    drop(cursor);
                    if value % 8 == 0 {
                        list.clear();
                        model.clear();
                    }
                }
            }
            if list.len() != model.len()
                || list.iter().count() != model.len()
                || list.is_empty() != (list.cursor_start() == list.cursor_end())
            {
                return false;
            }
        }
        list.iter().eq(model.iter())
    }
}
