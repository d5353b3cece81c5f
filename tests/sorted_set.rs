use std::collections::BTreeSet;

use boundary_assert::sorted_set;
use boundary_assert::{
    CheckError, ClaimKind, Diagnosis, Edge, Failure, FailureCategory, OrderError, SortedElements,
    assert_that,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn null_set() -> BTreeSet<Option<&'static str>> {
    BTreeSet::from([None])
}

fn failure_of(diagnosis: Result<Diagnosis, OrderError>) -> Failure {
    match diagnosis.expect("claim should be evaluable") {
        Diagnosis::Pass => panic!("claim should fail"),
        Diagnosis::Fail(failure) => failure,
    }
}

fn message_of(result: Result<(), CheckError>) -> String {
    result.expect_err("claim should fail").to_string()
}

#[test]
fn has_first_last_element() {
    let set = BTreeSet::from([1, 2]);
    assert_that(&set).has_first_element(&1).unwrap();
    assert_that(&set).has_last_element(&2).unwrap();

    let nulls = null_set();
    assert_that(&nulls).has_first_element(&None).unwrap();
    assert_that(&nulls).has_last_element(&None).unwrap();
}

#[test]
fn wrapping_keeps_identity() {
    let set: BTreeSet<i32> = BTreeSet::new();
    assert!(std::ptr::eq(assert_that(&set).actual(), &set));
}

#[test]
fn named_subject() {
    let set = BTreeSet::from([3]);
    assert_eq!(
        message_of(assert_that(&set).with_message("foo").has_first_element(&1)),
        "foo\nNot true that <[3]> has first element <1>. \
         It does not contain this element, and the first element is <3>"
    );
}

#[test]
fn has_first_element_empty() {
    let set: BTreeSet<i32> = BTreeSet::new();
    let failure = failure_of(sorted_set::has_first_element(&set, &1));
    assert_eq!(failure.category(), FailureCategory::EmptyCollection);
    assert_eq!(failure.kind(), ClaimKind::Element);
    assert_eq!(
        failure.fact_names().collect::<Vec<_>>(),
        ["expected to have first element", "but was"]
    );
    assert_eq!(failure.fact("expected to have first element"), Some("1"));
    assert_eq!(failure.fact("but was"), Some("[]"));
}

#[test]
fn has_last_element_empty() {
    let set: BTreeSet<i32> = BTreeSet::new();
    let failure = failure_of(sorted_set::has_last_element(&set, &1));
    assert_eq!(
        failure.fact_names().collect::<Vec<_>>(),
        ["expected to have last element", "but was"]
    );
    assert_eq!(failure.fact("expected to have last element"), Some("1"));
    assert_eq!(failure.fact("but was"), Some("[]"));
}

#[test]
fn has_first_element_empty_null() {
    let set: BTreeSet<Option<i32>> = BTreeSet::new();
    let failure = failure_of(sorted_set::has_first_element(&set, &None));
    assert_eq!(failure.fact("expected to have first element"), Some("null"));
    assert_eq!(failure.fact("but was"), Some("[]"));
}

#[test]
fn has_last_element_empty_null() {
    let set: BTreeSet<Option<i32>> = BTreeSet::new();
    let failure = failure_of(sorted_set::has_last_element(&set, &None));
    assert_eq!(failure.fact("expected to have last element"), Some("null"));
    assert_eq!(failure.fact("but was"), Some("[]"));
}

#[test]
fn has_first_last_element_wrong_position() {
    let set = BTreeSet::from([0, 1, 2]);
    assert_eq!(
        message_of(assert_that(&set).has_first_element(&1)),
        "Not true that <[0, 1, 2]> has first element <1>. \
         It does contain this element, but the first element is <0>"
    );
    assert_eq!(
        message_of(assert_that(&set).has_last_element(&1)),
        "Not true that <[0, 1, 2]> has last element <1>. \
         It does contain this element, but the last element is <2>"
    );

    let failure = failure_of(sorted_set::has_first_element(&set, &1));
    assert_eq!(failure.category(), FailureCategory::WrongPosition);
    assert_eq!(failure.boundary(), Some("0"));
    assert_eq!(failure.fact("first element"), Some("0"));
}

#[test]
fn has_first_last_element_absent() {
    let set = BTreeSet::from([0]);
    assert_eq!(
        message_of(assert_that(&set).has_first_element(&1)),
        "Not true that <[0]> has first element <1>. \
         It does not contain this element, and the first element is <0>"
    );
    assert_eq!(
        message_of(assert_that(&set).has_last_element(&1)),
        "Not true that <[0]> has last element <1>. \
         It does not contain this element, and the last element is <0>"
    );
    assert_eq!(
        failure_of(sorted_set::has_last_element(&set, &1)).category(),
        FailureCategory::Absent
    );
}

#[test]
fn sorted_slice_elements() {
    let elements = [0.25, 0.5, 0.75];
    let view = SortedElements::new(&elements).unwrap();
    assert_that(&view).has_last_element(&0.75).unwrap();
    assert_eq!(
        message_of(assert_that(&view).has_first_element(&0.5)),
        "Not true that <[0.25, 0.5, 0.75]> has first element <0.5>. \
         It does contain this element, but the first element is <0.25>"
    );

    let error = sorted_set::has_first_element(&view, &f64::NAN).unwrap_err();
    assert_eq!(
        error.to_string(),
        "expected element <NaN> cannot be ordered against <[0.25, 0.5, 0.75]>"
    );
}

#[test]
fn sorted_slice_rejects_nan_element() {
    assert_eq!(
        SortedElements::new(&[f64::NAN]).unwrap_err(),
        OrderError::SelfIncomparable { index: 0 }
    );
    assert_eq!(
        SortedElements::new(&[0.25, f64::NAN, 0.75]).unwrap_err(),
        OrderError::SelfIncomparable { index: 1 }
    );
}

fn set_strategy() -> impl Strategy<Value = BTreeSet<i16>> {
    proptest::collection::btree_set(-8i16..8, 0..10)
}

fn edge_strategy() -> impl Strategy<Value = Edge> {
    prop_oneof![Just(Edge::First), Just(Edge::Last)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// An element claim passes exactly when the boundary equals the expectation,
    /// and otherwise splits on membership.
    #[test]
    fn element_category_matches_membership(set in set_strategy(), edge in edge_strategy(), element in -10i16..10) {
        let boundary = match edge {
            Edge::First => set.first(),
            Edge::Last => set.last(),
        };
        let expected = match boundary {
            None => Some(FailureCategory::EmptyCollection),
            Some(b) if *b == element => None,
            Some(_) if set.contains(&element) => Some(FailureCategory::WrongPosition),
            Some(_) => Some(FailureCategory::Absent),
        };

        let diagnosis = sorted_set::has_element(&set, edge, &element).unwrap();
        prop_assert_eq!(diagnosis.category(), expected);
        if let Some(failure) = diagnosis.failure() {
            prop_assert_eq!(failure.boundary().map(str::to_owned), boundary.map(ToString::to_string));
        }
    }

    /// A slice view and a `BTreeSet` with the same contents diagnose identically.
    #[test]
    fn slice_view_agrees_with_btree_set(set in set_strategy(), edge in edge_strategy(), element in -10i16..10) {
        let elements: Vec<i16> = set.iter().copied().collect();
        let view = SortedElements::new(&elements).unwrap();
        prop_assert_eq!(
            sorted_set::has_element(&view, edge, &element),
            sorted_set::has_element(&set, edge, &element)
        );
    }
}
