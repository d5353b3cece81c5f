use alloc::string::String;

use thiserror::Error;

use crate::Failure;

/// Reported by a view when a probe cannot be placed in the collection's order.
///
/// Totally ordered collections such as `BTreeMap` never report it; views over
/// a partial order (for example `f64` keys compared against `NaN`) do.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Error)]
#[error("value cannot be ordered against the collection")]
pub struct Incomparable;

/// The input to a diagnosis was malformed.
///
/// These are caller errors, not failed claims: no
/// [`FailureCategory`](crate::FailureCategory) describes them.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum OrderError {
    /// The expected key or element cannot be ordered against the collection.
    #[error("expected {noun} <{probe}> cannot be ordered against <{actual}>")]
    Incomparable {
        /// `"key"` or `"element"`.
        noun: &'static str,
        /// The rendered probe.
        probe: String,
        /// The rendered collection.
        actual: String,
    },

    /// A slice handed to a sorted view is not in strictly ascending order.
    #[error("entries are not in strictly ascending order at index {index}")]
    NotAscending {
        /// Index of the first entry that does not sort after its predecessor.
        index: usize,
    },

    /// A slice handed to a sorted view holds an item that cannot be ordered
    /// against itself (`NaN`, for example).
    #[error("entry at index {index} cannot be ordered against itself")]
    SelfIncomparable {
        /// Index of the first such entry.
        index: usize,
    },
}

/// Returned by the [`Subject`](crate::Subject) assertions.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CheckError {
    /// The claim does not hold.
    #[error(transparent)]
    Failed(#[from] Failure),

    /// The claim could not be evaluated.
    #[error(transparent)]
    Unordered(#[from] OrderError),
}

impl CheckError {
    /// Returns the failure if the claim was evaluated and does not hold.
    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            CheckError::Failed(failure) => Some(failure),
            CheckError::Unordered(_) => None,
        }
    }
}
