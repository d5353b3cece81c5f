use core::cmp::Ordering::{Equal, Greater, Less};
use core::iter::Map;
use core::slice;

use super::{SortedMapView, SortedSetView};
use crate::{Edge, Incomparable, OrderError};

/// A map view over a slice of entries sorted by key under [`PartialOrd`].
///
/// Keys only need a partial order, so a probe may turn out to be
/// incomparable (`NaN` against `f64` keys, for example). Lookups report that
/// as [`Incomparable`] instead of guessing a position.
///
/// # Examples
///
/// ```
/// use boundary_assert::{SortedEntries, SortedMapView};
///
/// let entries = [(0.5, "a"), (1.5, "b")];
/// let view = SortedEntries::new(&entries)?;
/// assert_eq!(view.lookup(&1.5), Ok(Some(&"b")));
/// assert!(view.lookup(&f64::NAN).is_err());
/// # Ok::<(), boundary_assert::OrderError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SortedEntries<'a, K, V> {
    entries: &'a [(K, V)],
}

impl<'a, K: PartialOrd, V> SortedEntries<'a, K, V> {
    /// Wraps `entries`, which must be in strictly ascending key order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::SelfIncomparable`] at the first key that cannot be
    /// ordered against itself, or [`OrderError::NotAscending`] at the first key
    /// that does not sort strictly after its predecessor (duplicates and
    /// incomparable neighbors included).
    pub fn new(entries: &'a [(K, V)]) -> Result<Self, OrderError> {
        check_ascending(entries, |(key, _)| key)?;
        Ok(SortedEntries { entries })
    }

    /// The wrapped slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [(K, V)] {
        self.entries
    }
}

impl<K: PartialOrd, V> SortedMapView for SortedEntries<'_, K, V> {
    type Key = K;
    type Value = V;
    type Entries<'b>
        = Map<slice::Iter<'b, (K, V)>, fn(&(K, V)) -> (&K, &V)>
    where
        Self: 'b;

    fn entries(&self) -> Self::Entries<'_> {
        self.entries.iter().map(split_entry as fn(&(K, V)) -> (&K, &V))
    }

    fn boundary(&self, edge: Edge) -> Option<(&K, &V)> {
        let entry = match edge {
            Edge::First => self.entries.first(),
            Edge::Last => self.entries.last(),
        };
        entry.map(split_entry)
    }

    fn lookup(&self, key: &K) -> Result<Option<&V>, Incomparable> {
        let found = search(self.entries, key, |(k, _)| k)?;
        Ok(found.map(|index| &self.entries[index].1))
    }
}

/// A set view over a slice sorted under [`PartialOrd`].
///
/// See [`SortedEntries`] for how incomparable probes are reported.
#[derive(Clone, Copy, Debug)]
pub struct SortedElements<'a, T> {
    elements: &'a [T],
}

impl<'a, T: PartialOrd> SortedElements<'a, T> {
    /// Wraps `elements`, which must be in strictly ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::SelfIncomparable`] at the first element that cannot
    /// be ordered against itself, or [`OrderError::NotAscending`] at the first
    /// element that does not sort strictly after its predecessor.
    pub fn new(elements: &'a [T]) -> Result<Self, OrderError> {
        check_ascending(elements, |element| element)?;
        Ok(SortedElements { elements })
    }

    /// The wrapped slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.elements
    }
}

impl<T: PartialOrd> SortedSetView for SortedElements<'_, T> {
    type Element = T;
    type Elements<'b>
        = slice::Iter<'b, T>
    where
        Self: 'b;

    fn elements(&self) -> Self::Elements<'_> {
        self.elements.iter()
    }

    fn boundary(&self, edge: Edge) -> Option<&T> {
        match edge {
            Edge::First => self.elements.first(),
            Edge::Last => self.elements.last(),
        }
    }

    fn probe(&self, element: &T) -> Result<bool, Incomparable> {
        Ok(search(self.elements, element, |e| e)?.is_some())
    }
}

fn split_entry<K, V>(entry: &(K, V)) -> (&K, &V) {
    (&entry.0, &entry.1)
}

fn check_ascending<X, T, F>(items: &[X], key: F) -> Result<(), OrderError>
where
    T: PartialOrd,
    F: Fn(&X) -> &T,
{
    let mut previous: Option<&T> = None;
    for (index, item) in items.iter().enumerate() {
        let current = key(item);
        if current.partial_cmp(current) != Some(Equal) {
            return Err(OrderError::SelfIncomparable { index });
        }
        if previous.is_some_and(|prev| prev.partial_cmp(current) != Some(Less)) {
            return Err(OrderError::NotAscending { index });
        }
        previous = Some(current);
    }
    Ok(())
}

/// Binary search that refuses to guess when the order is undefined.
fn search<X, T, F>(items: &[X], probe: &T, key: F) -> Result<Option<usize>, Incomparable>
where
    T: PartialOrd,
    F: Fn(&X) -> &T,
{
    let (mut lo, mut hi) = (0, items.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match key(&items[mid]).partial_cmp(probe).ok_or(Incomparable)? {
            Less => lo = mid + 1,
            Greater => hi = mid,
            Equal => return Ok(Some(mid)),
        }
    }
    Ok(None)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use alloc::string::ToString;

    #[test]
    fn rejects_unsorted_input() {
        assert_eq!(
            SortedEntries::new(&[(1, 'a'), (0, 'b')]).unwrap_err(),
            OrderError::NotAscending { index: 1 }
        );
        assert_eq!(
            SortedElements::new(&[0, 1, 1]).unwrap_err(),
            OrderError::NotAscending { index: 2 }
        );
        assert_eq!(
            SortedElements::new(&[0.0, 1.0, 0.5]).unwrap_err(),
            OrderError::NotAscending { index: 2 }
        );
    }

    #[test]
    fn rejects_items_unordered_against_themselves() {
        assert_eq!(
            SortedEntries::new(&[(f64::NAN, 'a')]).unwrap_err(),
            OrderError::SelfIncomparable { index: 0 }
        );
        assert_eq!(
            SortedEntries::new(&[(f64::NAN, 'a'), (1.0, 'b')]).unwrap_err(),
            OrderError::SelfIncomparable { index: 0 }
        );
        assert_eq!(
            SortedElements::new(&[0.0, f64::NAN]).unwrap_err(),
            OrderError::SelfIncomparable { index: 1 }
        );
        assert_eq!(
            SortedElements::new(&[f64::NAN]).unwrap_err().to_string(),
            "entry at index 0 cannot be ordered against itself"
        );
    }

    #[test]
    fn lookup_finds_every_key() {
        let entries: Vec<(i32, i32)> = (0..17).map(|i| (i * 2, i)).collect();
        let view = SortedEntries::new(&entries).unwrap();
        for (key, value) in &entries {
            assert_eq!(view.lookup(key), Ok(Some(value)));
            assert_eq!(view.lookup(&(key + 1)), Ok(None));
        }
        assert_eq!(view.lookup(&-1), Ok(None));
    }

    #[test]
    fn nan_probe_is_incomparable() {
        let view = SortedEntries::new(&[(0.5, 'a'), (1.5, 'b')]).unwrap();
        assert_eq!(view.lookup(&f64::NAN), Err(Incomparable));

        let set = SortedElements::new(&[0.5, 1.5]).unwrap();
        assert_eq!(set.probe(&f64::NAN), Err(Incomparable));
        assert_eq!(set.probe(&1.5), Ok(true));
    }

    #[test]
    fn boundaries_are_slice_ends() {
        let view = SortedEntries::new(&[(1, 'a'), (2, 'b'), (3, 'c')]).unwrap();
        assert_eq!(view.boundary(Edge::First), Some((&1, &'a')));
        assert_eq!(view.boundary(Edge::Last), Some((&3, &'c')));
        assert_eq!(view.entries().count(), 3);

        let empty = SortedElements::<u8>::new(&[]).unwrap();
        assert_eq!(empty.elements().count(), 0);
        assert_eq!(empty.boundary(Edge::Last), None);
    }
}
