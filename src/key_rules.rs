//! The key-only diagnosis shared by map key claims and set element claims.
//!
//! A key or element carries no attached value, so once the boundary is known
//! to differ there are only two explanations: the expectation is somewhere
//! else in the collection, or it is not in the collection at all.

use alloc::format;
use alloc::string::String;

use tracing::{debug, trace};

use crate::failure::{Claim, ClaimKind, Fact};
use crate::render::text;
use crate::{Diagnosis, Edge, Failure, FailureCategory, Incomparable, OrderError, Render};

/// Diagnoses `has {edge} {kind} <expected>` against a collection whose
/// boundary is `boundary`.
///
/// `actual` renders the whole collection and is only called on failure.
/// `contains` reports whether `expected` is anywhere in the collection.
pub(crate) fn diagnose_key<T, A, C>(
    edge: Edge,
    kind: ClaimKind,
    expected: &T,
    boundary: Option<&T>,
    actual: A,
    contains: C,
) -> Result<Diagnosis, OrderError>
where
    T: PartialEq + Render + ?Sized,
    A: FnOnce() -> String,
    C: FnOnce(&T) -> Result<bool, Incomparable>,
{
    let claim = Claim {
        edge,
        kind,
        expected: text(expected),
    };
    let Some(boundary) = boundary else {
        debug!(%edge, noun = kind.noun(), "boundary claim against an empty collection");
        return Ok(Diagnosis::Fail(Failure::empty(claim, actual())));
    };
    if boundary == expected {
        return Ok(Diagnosis::Pass);
    }

    let actual = actual();
    let present = match contains(expected) {
        Ok(present) => present,
        Err(Incomparable) => {
            return Err(OrderError::Incomparable {
                noun: kind.noun(),
                probe: claim.expected,
                actual,
            });
        }
    };
    trace!(%edge, noun = kind.noun(), present, "probed collection for expectation");

    let noun = kind.noun();
    let boundary = text(boundary);
    let (category, explanation) = if present {
        (
            FailureCategory::WrongPosition,
            format!(". It does contain this {noun}, but the {edge} {noun} is <{boundary}>"),
        )
    } else {
        (
            FailureCategory::Absent,
            format!(". It does not contain this {noun}, and the {edge} {noun} is <{boundary}>"),
        )
    };
    debug!(%edge, noun, ?category, "boundary claim failed");

    let facts = alloc::vec![Fact::new(format!("{edge} {noun}"), boundary.clone())];
    Ok(Diagnosis::Fail(Failure::at_boundary(
        claim,
        category,
        actual,
        boundary,
        &explanation,
        facts,
    )))
}
