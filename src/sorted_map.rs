//! Boundary claims against key-sorted maps.
//!
//! Key claims (`has_first_key`, `has_last_key`) distinguish a key that is in
//! the map at the wrong position from one that is not in the map at all.
//!
//! Entry claims (`has_first_entry`, `has_last_entry`) are more granular. When
//! the boundary entry differs from the claim, the first matching explanation
//! below is reported:
//!
//! 1. the map holds exactly this entry elsewhere ([`EntryWrongPosition`]);
//! 2. the boundary has the expected key, with another value ([`ValueMismatchAtBoundary`]);
//! 3. the boundary has the expected value, under another key ([`KeyMismatchAtBoundary`]);
//! 4. the expected key is mapped to another value ([`KeyWrongPosition`]);
//! 5. the expected value is held by other keys, all of which are listed in
//!    ascending order ([`ValueWrongPosition`]);
//! 6. otherwise the entry is absent ([`EntryAbsent`]).
//!
//! [`EntryWrongPosition`]: FailureCategory::EntryWrongPosition
//! [`ValueMismatchAtBoundary`]: FailureCategory::ValueMismatchAtBoundary
//! [`KeyMismatchAtBoundary`]: FailureCategory::KeyMismatchAtBoundary
//! [`KeyWrongPosition`]: FailureCategory::KeyWrongPosition
//! [`ValueWrongPosition`]: FailureCategory::ValueWrongPosition
//! [`EntryAbsent`]: FailureCategory::EntryAbsent
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use boundary_assert::FailureCategory;
//! use boundary_assert::sorted_map;
//!
//! let map = BTreeMap::from([(0, 0), (1, 1), (2, 1), (3, 3)]);
//! let diagnosis = sorted_map::has_first_entry(&map, &10, &1)?;
//!
//! let failure = diagnosis.failure().unwrap();
//! assert_eq!(failure.category(), FailureCategory::ValueWrongPosition);
//! assert_eq!(failure.ambiguous_keys(), ["1", "2"]);
//! assert_eq!(failure.boundary(), Some("0=0"));
//! # Ok::<(), boundary_assert::OrderError>(())
//! ```

use alloc::string::ToString;

use tracing::debug;

use crate::failure::{Claim, ClaimKind};
use crate::key_rules::diagnose_key;
use crate::render::{EntryText, text};
use crate::view::MapText;
use crate::{Diagnosis, Edge, Failure, FailureCategory, Incomparable, OrderError, Render, SortedMapView};

mod entry_rules;

use entry_rules::{EntryProbe, classify};

/// Checks that `key` is the first key of `map`.
///
/// # Errors
///
/// Returns [`OrderError::Incomparable`] if `key` cannot be ordered against
/// the map's keys.
pub fn has_first_key<M>(map: &M, key: &M::Key) -> Result<Diagnosis, OrderError>
where
    M: SortedMapView + ?Sized,
    M::Key: PartialEq + Render,
    M::Value: Render,
{
    has_key(map, Edge::First, key)
}

/// Checks that `key` is the last key of `map`.
///
/// # Errors
///
/// Returns [`OrderError::Incomparable`] if `key` cannot be ordered against
/// the map's keys.
pub fn has_last_key<M>(map: &M, key: &M::Key) -> Result<Diagnosis, OrderError>
where
    M: SortedMapView + ?Sized,
    M::Key: PartialEq + Render,
    M::Value: Render,
{
    has_key(map, Edge::Last, key)
}

/// Checks that `key` is the key at `edge` of `map`.
///
/// # Errors
///
/// Returns [`OrderError::Incomparable`] if `key` cannot be ordered against
/// the map's keys.
pub fn has_key<M>(map: &M, edge: Edge, key: &M::Key) -> Result<Diagnosis, OrderError>
where
    M: SortedMapView + ?Sized,
    M::Key: PartialEq + Render,
    M::Value: Render,
{
    diagnose_key(
        edge,
        ClaimKind::Key,
        key,
        map.boundary(edge).map(|(k, _)| k),
        || MapText(map).to_string(),
        |k| Ok(map.lookup(k)?.is_some()),
    )
}

/// Checks that `key=value` is the first entry of `map`.
///
/// # Errors
///
/// Returns [`OrderError::Incomparable`] if `key` cannot be ordered against
/// the map's keys.
pub fn has_first_entry<M>(map: &M, key: &M::Key, value: &M::Value) -> Result<Diagnosis, OrderError>
where
    M: SortedMapView + ?Sized,
    M::Key: PartialEq + Render,
    M::Value: PartialEq + Render,
{
    has_entry(map, Edge::First, key, value)
}

/// Checks that `key=value` is the last entry of `map`.
///
/// # Errors
///
/// Returns [`OrderError::Incomparable`] if `key` cannot be ordered against
/// the map's keys.
pub fn has_last_entry<M>(map: &M, key: &M::Key, value: &M::Value) -> Result<Diagnosis, OrderError>
where
    M: SortedMapView + ?Sized,
    M::Key: PartialEq + Render,
    M::Value: PartialEq + Render,
{
    has_entry(map, Edge::Last, key, value)
}

/// Checks that `key=value` is the entry at `edge` of `map`.
///
/// # Errors
///
/// Returns [`OrderError::Incomparable`] if `key` cannot be ordered against
/// the map's keys.
pub fn has_entry<M>(
    map: &M,
    edge: Edge,
    key: &M::Key,
    value: &M::Value,
) -> Result<Diagnosis, OrderError>
where
    M: SortedMapView + ?Sized,
    M::Key: PartialEq + Render,
    M::Value: PartialEq + Render,
{
    let claim = Claim {
        edge,
        kind: ClaimKind::Entry,
        expected: EntryText(key, value).to_string(),
    };
    let Some((actual_key, actual_value)) = map.boundary(edge) else {
        debug!(%edge, "entry claim against an empty map");
        return Ok(Diagnosis::Fail(Failure::empty(claim, MapText(map).to_string())));
    };
    if actual_key == key && actual_value == value {
        return Ok(Diagnosis::Pass);
    }

    let actual = MapText(map).to_string();
    let probe = EntryProbe {
        map,
        key,
        value,
        actual_key,
        actual_value,
    };
    let finding = match classify(&probe) {
        Ok(finding) => finding,
        Err(Incomparable) => {
            return Err(OrderError::Incomparable {
                noun: ClaimKind::Key.noun(),
                probe: text(key),
                actual,
            });
        }
    };

    let category: FailureCategory = finding.category();
    debug!(%edge, ?category, "entry claim failed");
    let explanation = finding.explain(edge, actual_key, actual_value);
    let failure = Failure::at_boundary(
        claim,
        category,
        actual,
        EntryText(actual_key, actual_value).to_string(),
        &explanation.sentence,
        explanation.facts,
    )
    .with_ambiguous_keys(explanation.ambiguous_keys);
    Ok(Diagnosis::Fail(failure))
}
