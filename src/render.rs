//! Natural textual form of keys, values and elements in failure messages.
//!
//! [`Render`] is close to [`Display`](fmt::Display), with two differences that
//! matter for diagnostics: an absent value (`None`) renders as the literal
//! `null`, and sequences render in bracketed form (`[a, b]`).

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Writes the textual form of a value as it appears inside a failure message.
///
/// # Examples
///
/// ```
/// use boundary_assert::Rendered;
///
/// assert_eq!(Rendered(&Some(1)).to_string(), "1");
/// assert_eq!(Rendered(&None::<i32>).to_string(), "null");
/// assert_eq!(Rendered(&vec!["a", "b"]).to_string(), "[a, b]");
/// ```
pub trait Render {
    /// Writes `self` to the formatter.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatter does.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Adapts any [`Render`] value to [`Display`](fmt::Display).
#[derive(Clone, Copy, Debug)]
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

// Floats keep their fractional part (`1.0`, not `1`); very large or small
// magnitudes use Rust's exponent form (`1e20`) and infinities print as `inf`.
macro_rules! render_via_debug {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(self, f)
                }
            }
        )*
    };
}

render_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);
render_via_debug!(f32, f64);

impl Render for () {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str("null"),
        }
    }
}

impl<T: Render> Render for [T] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().render(f)
    }
}

/// Renders a single map entry as `key=value`.
pub(crate) struct EntryText<'a, K: ?Sized, V: ?Sized>(pub(crate) &'a K, pub(crate) &'a V);

impl<K: Render + ?Sized, V: Render + ?Sized> fmt::Display for EntryText<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)?;
        f.write_str("=")?;
        self.1.render(f)
    }
}

/// Writes `[a, b, c]`.
pub(crate) fn write_list<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Render,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.render(f)?;
    }
    f.write_str("]")
}

/// Writes `{k1=v1, k2=v2}`.
pub(crate) fn write_map<'a, K, V, I>(f: &mut fmt::Formatter<'_>, entries: I) -> fmt::Result
where
    K: Render + 'a,
    V: Render + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    f.write_str("{")?;
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", EntryText(key, value))?;
    }
    f.write_str("}")
}

#[must_use]
pub(crate) fn text<T: Render + ?Sized>(value: &T) -> String {
    Rendered(value).to_string()
}
