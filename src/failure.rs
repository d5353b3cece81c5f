//! Failure taxonomy and message construction.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Edge;

/// What a boundary claim is about.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ClaimKind {
    /// `has_first_key` / `has_last_key`.
    Key,
    /// `has_first_entry` / `has_last_entry`.
    Entry,
    /// `has_first_element` / `has_last_element`.
    Element,
}

impl ClaimKind {
    /// Returns the noun used for this kind in failure messages.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            ClaimKind::Key => "key",
            ClaimKind::Entry => "entry",
            ClaimKind::Element => "element",
        }
    }
}

/// Why a boundary claim does not hold.
///
/// Exactly one category applies to a failing claim. For entry claims the
/// categories are tried in the order they are declared below, starting at
/// [`EntryWrongPosition`](Self::EntryWrongPosition); the first that matches wins.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FailureCategory {
    /// The collection has no boundary at all.
    EmptyCollection,
    /// The key or element is present, just not at the boundary.
    WrongPosition,
    /// The key or element is not present.
    Absent,
    /// The exact entry is present, just not at the boundary.
    EntryWrongPosition,
    /// The boundary has the expected key but a different value.
    ValueMismatchAtBoundary,
    /// The boundary has the expected value but a different key.
    KeyMismatchAtBoundary,
    /// The expected key is present elsewhere, mapped to another value.
    KeyWrongPosition,
    /// The expected value is present elsewhere, mapped from other keys.
    ValueWrongPosition,
    /// Neither the expected key nor the expected value is present.
    EntryAbsent,
}

/// A named piece of failure content, such as `but was: {}`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Fact {
    name: String,
    value: String,
}

impl Fact {
    pub(crate) fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Fact {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The fact's name, e.g. `expected to have first key`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rendered value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The claim under evaluation, with its expectation already rendered.
#[derive(Clone, Debug)]
pub(crate) struct Claim {
    pub(crate) edge: Edge,
    pub(crate) kind: ClaimKind,
    pub(crate) expected: String,
}

impl Claim {
    fn expectation(&self) -> Fact {
        Fact::new(
            format!("expected to have {} {}", self.edge, self.kind.noun()),
            self.expected.clone(),
        )
    }

    /// `has first key <1>`
    fn sentence(&self) -> String {
        format!("has {} {} <{}>", self.edge, self.kind.noun(), self.expected)
    }
}

/// A boundary claim that does not hold, with the evidence gathered for it.
///
/// All content is rendered when the failure is built, so a `Failure` owns no
/// borrow of the collection it describes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Failure {
    edge: Edge,
    kind: ClaimKind,
    category: FailureCategory,
    expected: String,
    actual: String,
    boundary: Option<String>,
    ambiguous_keys: Vec<String>,
    facts: Vec<Fact>,
    body: String,
    message: Option<String>,
}

impl Failure {
    /// The collection is empty: reported in fact form.
    pub(crate) fn empty(claim: Claim, actual: String) -> Self {
        let facts = alloc::vec![claim.expectation(), Fact::new("but was", actual.clone())];
        let body = render_facts(&facts);
        Failure {
            edge: claim.edge,
            kind: claim.kind,
            category: FailureCategory::EmptyCollection,
            expected: claim.expected,
            actual,
            boundary: None,
            ambiguous_keys: Vec::new(),
            facts,
            body,
            message: None,
        }
    }

    /// The collection has a boundary that does not satisfy the claim.
    ///
    /// `explanation` is appended verbatim to `Not true that <actual> has ...`,
    /// so it carries its own leading `. ` or `, `.
    pub(crate) fn at_boundary(
        claim: Claim,
        category: FailureCategory,
        actual: String,
        boundary: String,
        explanation: &str,
        extra: Vec<Fact>,
    ) -> Self {
        let body = format!("Not true that <{actual}> {}{explanation}", claim.sentence());
        let mut facts = alloc::vec![claim.expectation(), Fact::new("but was", actual.clone())];
        facts.extend(extra);
        Failure {
            edge: claim.edge,
            kind: claim.kind,
            category,
            expected: claim.expected,
            actual,
            boundary: Some(boundary),
            ambiguous_keys: Vec::new(),
            facts,
            body,
            message: None,
        }
    }

    pub(crate) fn with_ambiguous_keys(mut self, keys: Vec<String>) -> Self {
        self.ambiguous_keys = keys;
        self
    }

    /// Prepends a custom message as the first line of the rendered failure.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Which boundary the claim was about.
    #[must_use]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Whether the claim was about a key, an entry or an element.
    #[must_use]
    pub fn kind(&self) -> ClaimKind {
        self.kind
    }

    /// Why the claim does not hold.
    #[must_use]
    pub fn category(&self) -> FailureCategory {
        self.category
    }

    /// The rendered expectation: `1`, `1=0` or `null`.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The rendered collection: `{0=0, 1=1}` or `[0, 1]`.
    #[must_use]
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// The rendered boundary key, entry or element, or `None` for an empty collection.
    #[must_use]
    pub fn boundary(&self) -> Option<&str> {
        self.boundary.as_deref()
    }

    /// For [`FailureCategory::ValueWrongPosition`], every key holding the
    /// expected value, in ascending key order. Empty otherwise.
    #[must_use]
    pub fn ambiguous_keys(&self) -> &[String] {
        &self.ambiguous_keys
    }

    /// The named facts, in the order they were recorded.
    #[must_use]
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Looks up a fact value by name.
    #[must_use]
    pub fn fact(&self, name: &str) -> Option<&str> {
        self.facts.iter().find(|fact| fact.name == name).map(Fact::value)
    }

    /// The fact names, in order.
    pub fn fact_names(&self) -> impl Iterator<Item = &str> {
        self.facts.iter().map(Fact::name)
    }

    /// The full rendered message, including any custom first line.
    #[must_use]
    pub fn message(&self) -> String {
        alloc::string::ToString::to_string(self)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.message {
            writeln!(f, "{message}")?;
        }
        f.write_str(&self.body)
    }
}

impl core::error::Error for Failure {}

/// One fact per line, names padded so that the colons line up.
fn render_facts(facts: &[Fact]) -> String {
    let width = facts.iter().map(|fact| fact.name.chars().count()).max().unwrap_or(0);
    let lines: Vec<String> = facts
        .iter()
        .map(|fact| format!("{:<width$}: {}", fact.name, fact.value))
        .collect();
    lines.join("\n")
}

/// The outcome of evaluating a boundary claim.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Diagnosis {
    /// The claim holds.
    Pass,
    /// The claim does not hold.
    Fail(Failure),
}

impl Diagnosis {
    /// Returns `true` if the claim holds.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Diagnosis::Pass)
    }

    /// The failure category, or `None` if the claim holds.
    #[must_use]
    pub fn category(&self) -> Option<FailureCategory> {
        self.failure().map(Failure::category)
    }

    /// The failure, or `None` if the claim holds.
    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Diagnosis::Pass => None,
            Diagnosis::Fail(failure) => Some(failure),
        }
    }

    /// Converts into a `Result`, with the failure as the error.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] if the claim does not hold.
    pub fn into_result(self) -> Result<(), Failure> {
        match self {
            Diagnosis::Pass => Ok(()),
            Diagnosis::Fail(failure) => Err(failure),
        }
    }
}
