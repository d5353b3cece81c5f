use core::fmt;

/// Selects which boundary of an ordered collection a claim is about.
///
/// `First` is the minimal key or element under the collection's order and
/// `Last` is the maximal one.
///
/// # Examples
///
/// ```
/// use boundary_assert::Edge;
///
/// assert_eq!(Edge::First.to_string(), "first");
/// assert_eq!(Edge::Last.as_str(), "last");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Edge {
    /// The minimal key or element.
    First,
    /// The maximal key or element.
    Last,
}

impl Edge {
    /// Returns the lowercase word used for this edge in failure messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Edge::First => "first",
            Edge::Last => "last",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
