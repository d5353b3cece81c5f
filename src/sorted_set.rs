//! Boundary claims against sorted sets.
//!
//! An element carries no attached value, so a failed claim is either
//! [`WrongPosition`](crate::FailureCategory::WrongPosition) (the element is in
//! the set, elsewhere) or [`Absent`](crate::FailureCategory::Absent).
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use boundary_assert::sorted_set;
//!
//! let set = BTreeSet::from([0, 1, 2]);
//! assert!(sorted_set::has_last_element(&set, &2)?.is_pass());
//!
//! let diagnosis = sorted_set::has_first_element(&set, &1)?;
//! assert_eq!(
//!     diagnosis.failure().unwrap().message(),
//!     "Not true that <[0, 1, 2]> has first element <1>. \
//!      It does contain this element, but the first element is <0>"
//! );
//! # Ok::<(), boundary_assert::OrderError>(())
//! ```

use alloc::string::ToString;

use crate::failure::ClaimKind;
use crate::key_rules::diagnose_key;
use crate::view::SetText;
use crate::{Diagnosis, Edge, OrderError, Render, SortedSetView};

/// Checks that `element` is the first element of `set`.
///
/// # Errors
///
/// Returns [`OrderError::Incomparable`] if `element` cannot be ordered
/// against the set's elements.
pub fn has_first_element<S>(set: &S, element: &S::Element) -> Result<Diagnosis, OrderError>
where
    S: SortedSetView + ?Sized,
    S::Element: PartialEq + Render,
{
    has_element(set, Edge::First, element)
}

/// Checks that `element` is the last element of `set`.
///
/// # Errors
///
/// Returns [`OrderError::Incomparable`] if `element` cannot be ordered
/// against the set's elements.
pub fn has_last_element<S>(set: &S, element: &S::Element) -> Result<Diagnosis, OrderError>
where
    S: SortedSetView + ?Sized,
    S::Element: PartialEq + Render,
{
    has_element(set, Edge::Last, element)
}

/// Checks that `element` is the element at `edge` of `set`.
///
/// # Errors
///
/// Returns [`OrderError::Incomparable`] if `element` cannot be ordered
/// against the set's elements.
pub fn has_element<S>(set: &S, edge: Edge, element: &S::Element) -> Result<Diagnosis, OrderError>
where
    S: SortedSetView + ?Sized,
    S::Element: PartialEq + Render,
{
    diagnose_key(
        edge,
        ClaimKind::Element,
        element,
        set.boundary(edge),
        || SetText(set).to_string(),
        |e| set.probe(e),
    )
}
