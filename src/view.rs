//! Read-only access to ordered collections.
//!
//! The diagnosers never see a concrete container. They need only the
//! boundary, a point lookup and an ascending walk, which is what
//! [`SortedMapView`] and [`SortedSetView`] expose. Implementations borrow the
//! collection; nothing is copied.
//!
//! Views are provided for [`BTreeMap`](alloc::collections::BTreeMap) and
//! [`BTreeSet`](alloc::collections::BTreeSet), and for pre-sorted slices ordered
//! by [`PartialOrd`] ([`SortedEntries`], [`SortedElements`]).

use core::fmt;

use crate::render::{write_list, write_map};
use crate::{Edge, Incomparable, Render};

mod btree;
mod sorted_slice;

pub use sorted_slice::{SortedElements, SortedEntries};

/// A key-sorted mapping, seen through the operations a boundary diagnosis needs.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use boundary_assert::{Edge, SortedMapView};
///
/// let map = BTreeMap::from([(2, 'b'), (1, 'a')]);
/// assert_eq!(map.boundary(Edge::First), Some((&1, &'a')));
/// assert_eq!(SortedMapView::lookup(&map, &2), Ok(Some(&'b')));
/// ```
pub trait SortedMapView {
    /// The key type.
    type Key;
    /// The value type.
    type Value;
    /// Ascending iterator over the entries.
    type Entries<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Returns the entries in ascending key order.
    fn entries(&self) -> Self::Entries<'_>;

    /// Returns the first or last entry, or `None` if the map is empty.
    fn boundary(&self, edge: Edge) -> Option<(&Self::Key, &Self::Value)>;

    /// Returns the value mapped from `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Incomparable`] if `key` cannot be placed in the map's order.
    fn lookup(&self, key: &Self::Key) -> Result<Option<&Self::Value>, Incomparable>;
}

/// A sorted set, seen through the operations a boundary diagnosis needs.
pub trait SortedSetView {
    /// The element type.
    type Element;
    /// Ascending iterator over the elements.
    type Elements<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Returns the elements in ascending order.
    fn elements(&self) -> Self::Elements<'_>;

    /// Returns the first or last element, or `None` if the set is empty.
    fn boundary(&self, edge: Edge) -> Option<&Self::Element>;

    /// Returns `true` if `element` is in the set.
    ///
    /// # Errors
    ///
    /// Returns [`Incomparable`] if `element` cannot be placed in the set's order.
    fn probe(&self, element: &Self::Element) -> Result<bool, Incomparable>;
}

/// Renders a map view as `{k1=v1, k2=v2}`.
pub(crate) struct MapText<'a, M: ?Sized>(pub(crate) &'a M);

impl<M> fmt::Display for MapText<'_, M>
where
    M: SortedMapView + ?Sized,
    M::Key: Render,
    M::Value: Render,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_map(f, self.0.entries())
    }
}

/// Renders a set view as `[e1, e2]`.
pub(crate) struct SetText<'a, S: ?Sized>(pub(crate) &'a S);

impl<S> fmt::Display for SetText<'_, S>
where
    S: SortedSetView + ?Sized,
    S::Element: Render,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0.elements())
    }
}
