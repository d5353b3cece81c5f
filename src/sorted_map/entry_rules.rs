//! Priority-ordered rules that explain why an entry is not at the boundary.
//!
//! [`ENTRY_RULES`] is evaluated top to bottom and the first rule that matches
//! decides the [`FailureCategory`]. When none matches the entry is absent.
//!
//! The order matters because the conditions overlap. A genuine entry can also
//! share its value with the boundary entry (`{0=0, 1=0}` claiming first entry
//! `1=0`), and that must be reported as a misplaced entry, not as a key
//! mismatch. The boundary comparisons come before the containment scans
//! because they describe the boundary itself.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::failure::Fact;
use crate::render::{EntryText, text};
use crate::{Edge, FailureCategory, Incomparable, Render, SortedMapView};

/// The claim and the boundary entry it failed against.
pub(crate) struct EntryProbe<'a, M: SortedMapView + ?Sized> {
    pub(crate) map: &'a M,
    pub(crate) key: &'a M::Key,
    pub(crate) value: &'a M::Value,
    pub(crate) actual_key: &'a M::Key,
    pub(crate) actual_value: &'a M::Value,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EntryRule {
    /// The map holds exactly this entry, elsewhere.
    GenuineEntry,
    /// The boundary has the expected key.
    BoundaryKey,
    /// The boundary has the expected value.
    BoundaryValue,
    /// The expected key is mapped to another value.
    KeyElsewhere,
    /// The expected value is held by other keys.
    ValueElsewhere,
}

pub(crate) const ENTRY_RULES: [EntryRule; 5] = [
    EntryRule::GenuineEntry,
    EntryRule::BoundaryKey,
    EntryRule::BoundaryValue,
    EntryRule::KeyElsewhere,
    EntryRule::ValueElsewhere,
];

/// A matched rule together with the evidence it found.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum EntryFinding<'a, K, V> {
    GenuineEntry,
    BoundaryKey,
    BoundaryValue,
    KeyElsewhere(&'a V),
    /// Every key holding the expected value, ascending.
    ValueElsewhere(Vec<&'a K>),
    Absent,
}

impl EntryRule {
    /// Returns the finding if this rule applies to `probe`.
    ///
    /// Rules assume that every earlier rule in [`ENTRY_RULES`] did not match
    /// and that the boundary entry differs from the claim.
    pub(crate) fn evaluate<'a, M>(
        self,
        probe: &EntryProbe<'a, M>,
    ) -> Result<Option<EntryFinding<'a, M::Key, M::Value>>, Incomparable>
    where
        M: SortedMapView + ?Sized,
        M::Key: PartialEq,
        M::Value: PartialEq,
    {
        let finding = match self {
            EntryRule::GenuineEntry => probe
                .map
                .lookup(probe.key)?
                .filter(|mapped| *mapped == probe.value)
                .map(|_| EntryFinding::GenuineEntry),
            EntryRule::BoundaryKey => {
                (probe.key == probe.actual_key).then_some(EntryFinding::BoundaryKey)
            }
            EntryRule::BoundaryValue => {
                (probe.value == probe.actual_value).then_some(EntryFinding::BoundaryValue)
            }
            EntryRule::KeyElsewhere => probe.map.lookup(probe.key)?.map(EntryFinding::KeyElsewhere),
            EntryRule::ValueElsewhere => {
                let keys: Vec<&'a M::Key> = probe
                    .map
                    .entries()
                    .filter(|(_, mapped)| *mapped == probe.value)
                    .map(|(key, _)| key)
                    .collect();
                (!keys.is_empty()).then_some(EntryFinding::ValueElsewhere(keys))
            }
        };
        Ok(finding)
    }
}

/// Runs [`ENTRY_RULES`] in order and returns the first finding.
pub(crate) fn classify<'a, M>(
    probe: &EntryProbe<'a, M>,
) -> Result<EntryFinding<'a, M::Key, M::Value>, Incomparable>
where
    M: SortedMapView + ?Sized,
    M::Key: PartialEq,
    M::Value: PartialEq,
{
    for rule in ENTRY_RULES {
        let finding = rule.evaluate(probe)?;
        tracing::trace!(?rule, matched = finding.is_some(), "evaluated entry rule");
        if let Some(finding) = finding {
            return Ok(finding);
        }
    }
    Ok(EntryFinding::Absent)
}

/// The sentence tail, facts and ambiguous keys for a finding.
pub(crate) struct Explanation {
    pub(crate) sentence: String,
    pub(crate) facts: Vec<Fact>,
    pub(crate) ambiguous_keys: Vec<String>,
}

impl<K: Render, V: Render> EntryFinding<'_, K, V> {
    pub(crate) fn category(&self) -> FailureCategory {
        match self {
            EntryFinding::GenuineEntry => FailureCategory::EntryWrongPosition,
            EntryFinding::BoundaryKey => FailureCategory::ValueMismatchAtBoundary,
            EntryFinding::BoundaryValue => FailureCategory::KeyMismatchAtBoundary,
            EntryFinding::KeyElsewhere(_) => FailureCategory::KeyWrongPosition,
            EntryFinding::ValueElsewhere(_) => FailureCategory::ValueWrongPosition,
            EntryFinding::Absent => FailureCategory::EntryAbsent,
        }
    }

    pub(crate) fn explain(&self, edge: Edge, actual_key: &K, actual_value: &V) -> Explanation {
        let entry = format!("{}", EntryText(actual_key, actual_value));
        let entry_fact = || Fact::new(format!("{edge} entry"), entry.clone());
        let mut ambiguous_keys = Vec::new();

        let (sentence, facts) = match self {
            EntryFinding::GenuineEntry => (
                format!(". It does contain this entry, but the {edge} entry is <{entry}>"),
                alloc::vec![entry_fact()],
            ),
            EntryFinding::BoundaryKey => {
                let value = text(actual_value);
                (
                    format!(", the {edge} value is <{value}>"),
                    alloc::vec![Fact::new(format!("{edge} value"), value)],
                )
            }
            EntryFinding::BoundaryValue => {
                let key = text(actual_key);
                (
                    format!(", the {edge} key is <{key}>"),
                    alloc::vec![Fact::new(format!("{edge} key"), key)],
                )
            }
            EntryFinding::KeyElsewhere(mapped) => {
                let mapped = text(*mapped);
                (
                    format!(
                        ". It does contain this key, but the key is mapped to <{mapped}>, \
                         and the {edge} entry is <{entry}>"
                    ),
                    alloc::vec![Fact::new("key is mapped to", mapped), entry_fact()],
                )
            }
            EntryFinding::ValueElsewhere(keys) => {
                let list = text(keys);
                ambiguous_keys = keys.iter().map(|key| text(*key)).collect();
                (
                    format!(
                        ". It does contain this value, but the value is mapped from the keys \
                         <{list}>, and the {edge} entry is <{entry}>"
                    ),
                    alloc::vec![Fact::new("value is mapped from keys", list), entry_fact()],
                )
            }
            EntryFinding::Absent => (
                format!(". It does not contain this entry, and the {edge} entry is <{entry}>"),
                alloc::vec![entry_fact()],
            ),
        };

        Explanation {
            sentence,
            facts,
            ambiguous_keys,
        }
    }
}
