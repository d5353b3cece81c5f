//! Boundary assertions for sorted maps and sets.
//!
//! This crate checks claims about the first or last key, entry or element of
//! an ordered collection. When a claim does not hold, it reports *why*, not just
//! that it failed:
//!
//! - the expected key is in the map, just not at the boundary;
//! - it is not in the map at all;
//! - the boundary has the right key but the wrong value, or the other way round;
//! - the expected value is held by other keys, and which ones.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use boundary_assert::{FailureCategory, assert_that};
//!
//! let map = BTreeMap::from([(0, 0), (1, 0), (2, 0)]);
//!
//! assert_that(&map).has_first_entry(&0, &0)?;
//!
//! let error = assert_that(&map).has_first_entry(&1, &1).unwrap_err();
//! let failure = error.failure().unwrap();
//! assert_eq!(failure.category(), FailureCategory::KeyWrongPosition);
//! assert_eq!(
//!     failure.message(),
//!     "Not true that <{0=0, 1=0, 2=0}> has first entry <1=1>. It does contain this key, \
//!      but the key is mapped to <0>, and the first entry is <0=0>"
//! );
//! assert_eq!(failure.fact("key is mapped to"), Some("0"));
//! # Ok::<(), boundary_assert::CheckError>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Container agnostic** - Diagnosis runs against [`SortedMapView`] / [`SortedSetView`],
//!   implemented for `BTreeMap`, `BTreeSet` and pre-sorted slices
//! - **Structured failures** - Every [`Failure`] carries its [`FailureCategory`] and named
//!   [`Fact`]s as well as the rendered message
//!
//! # Implementation
//!
//! Entry claims are explained by a fixed, priority-ordered list of rules; the first rule that
//! matches decides the category. See [`sorted_map`] for the order. Key and element claims share
//! a two-way split between a misplaced and an absent expectation.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod edge;
mod error;
mod failure;
mod key_rules;
mod render;
mod subject;
mod view;

pub mod sorted_map;
pub mod sorted_set;

pub use edge::Edge;
pub use error::{CheckError, Incomparable, OrderError};
pub use failure::{ClaimKind, Diagnosis, Fact, Failure, FailureCategory};
pub use render::{Render, Rendered};
pub use subject::{Subject, assert_that};
pub use view::{SortedElements, SortedEntries, SortedMapView, SortedSetView};
