use alloc::string::String;

use crate::{
    CheckError, Diagnosis, OrderError, Render, SortedMapView, SortedSetView, sorted_map,
    sorted_set,
};

/// Starts a boundary assertion about `actual`.
///
/// The subject borrows `actual`; [`Subject::actual`] hands back the very same
/// reference.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use boundary_assert::{FailureCategory, assert_that};
///
/// let map = BTreeMap::from([(1, 0), (2, 0)]);
/// assert_that(&map).has_first_key(&1)?;
///
/// let error = assert_that(&map)
///     .with_message("startup order")
///     .has_last_entry(&2, &2)
///     .unwrap_err();
/// let failure = error.failure().unwrap();
/// assert_eq!(failure.category(), FailureCategory::ValueMismatchAtBoundary);
/// assert_eq!(
///     failure.message(),
///     "startup order\nNot true that <{1=0, 2=0}> has last entry <2=2>, the last value is <0>"
/// );
/// # Ok::<(), boundary_assert::CheckError>(())
/// ```
pub fn assert_that<C: ?Sized>(actual: &C) -> Subject<'_, C> {
    Subject {
        actual,
        message: None,
    }
}

/// A collection under assertion. Created by [`assert_that`].
#[must_use]
pub struct Subject<'a, C: ?Sized> {
    actual: &'a C,
    message: Option<String>,
}

impl<'a, C: ?Sized> Subject<'a, C> {
    /// Prepends `message` as the first line of any failure this subject reports.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The collection under assertion, exactly as passed to [`assert_that`].
    #[must_use]
    pub fn actual(&self) -> &'a C {
        self.actual
    }

    fn conclude(&self, diagnosis: Result<Diagnosis, OrderError>) -> Result<(), CheckError> {
        match diagnosis? {
            Diagnosis::Pass => Ok(()),
            Diagnosis::Fail(failure) => Err(match &self.message {
                Some(message) => failure.with_message(message.clone()),
                None => failure,
            }
            .into()),
        }
    }
}

impl<M> Subject<'_, M>
where
    M: SortedMapView + ?Sized,
    M::Key: PartialEq + Render,
    M::Value: PartialEq + Render,
{
    /// Asserts that `key` is the first key.
    ///
    /// # Errors
    ///
    /// [`CheckError::Failed`] if the claim does not hold,
    /// [`CheckError::Unordered`] if it cannot be evaluated.
    pub fn has_first_key(&self, key: &M::Key) -> Result<(), CheckError> {
        self.conclude(sorted_map::has_first_key(self.actual, key))
    }

    /// Asserts that `key` is the last key.
    ///
    /// # Errors
    ///
    /// [`CheckError::Failed`] if the claim does not hold,
    /// [`CheckError::Unordered`] if it cannot be evaluated.
    pub fn has_last_key(&self, key: &M::Key) -> Result<(), CheckError> {
        self.conclude(sorted_map::has_last_key(self.actual, key))
    }

    /// Asserts that `key=value` is the first entry.
    ///
    /// # Errors
    ///
    /// [`CheckError::Failed`] if the claim does not hold,
    /// [`CheckError::Unordered`] if it cannot be evaluated.
    pub fn has_first_entry(&self, key: &M::Key, value: &M::Value) -> Result<(), CheckError> {
        self.conclude(sorted_map::has_first_entry(self.actual, key, value))
    }

    /// Asserts that `key=value` is the last entry.
    ///
    /// # Errors
    ///
    /// [`CheckError::Failed`] if the claim does not hold,
    /// [`CheckError::Unordered`] if it cannot be evaluated.
    pub fn has_last_entry(&self, key: &M::Key, value: &M::Value) -> Result<(), CheckError> {
        self.conclude(sorted_map::has_last_entry(self.actual, key, value))
    }
}

impl<S> Subject<'_, S>
where
    S: SortedSetView + ?Sized,
    S::Element: PartialEq + Render,
{
    /// Asserts that `element` is the first element.
    ///
    /// # Errors
    ///
    /// [`CheckError::Failed`] if the claim does not hold,
    /// [`CheckError::Unordered`] if it cannot be evaluated.
    pub fn has_first_element(&self, element: &S::Element) -> Result<(), CheckError> {
        self.conclude(sorted_set::has_first_element(self.actual, element))
    }

    /// Asserts that `element` is the last element.
    ///
    /// # Errors
    ///
    /// [`CheckError::Failed`] if the claim does not hold,
    /// [`CheckError::Unordered`] if it cannot be evaluated.
    pub fn has_last_element(&self, element: &S::Element) -> Result<(), CheckError> {
        self.conclude(sorted_set::has_last_element(self.actual, element))
    }
}
