use alloc::collections::{BTreeMap, BTreeSet, btree_map, btree_set};

use super::{SortedMapView, SortedSetView};
use crate::{Edge, Incomparable};

impl<K: Ord, V> SortedMapView for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Entries<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn boundary(&self, edge: Edge) -> Option<(&K, &V)> {
        match edge {
            Edge::First => self.first_key_value(),
            Edge::Last => self.last_key_value(),
        }
    }

    fn lookup(&self, key: &K) -> Result<Option<&V>, Incomparable> {
        Ok(self.get(key))
    }
}

impl<T: Ord> SortedSetView for BTreeSet<T> {
    type Element = T;
    type Elements<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    fn boundary(&self, edge: Edge) -> Option<&T> {
        match edge {
            Edge::First => self.first(),
            Edge::Last => self.last(),
        }
    }

    fn probe(&self, element: &T) -> Result<bool, Incomparable> {
        Ok(self.contains(element))
    }
}
