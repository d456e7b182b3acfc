use alloc::sync::Arc;
use core::{error::Error, iter::FusedIterator};

use super::Leaf;

/// An iterator over references to the errors in a [`Collector`].
///
/// Created by [`Collector::iter`]. Yields the leaf errors in the order they
/// were collected.
///
/// # Examples
///
/// ```
/// use errcollect::Collector;
///
/// let mut errors = Collector::new();
/// errors.push("Error 1");
/// errors.push("Error 2");
///
/// let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
/// assert_eq!(messages, ["Error 1", "Error 2"]);
/// ```
///
/// [`Collector`]: crate::Collector
/// [`Collector::iter`]: crate::Collector::iter
#[must_use]
#[derive(Clone)]
pub struct Iter<'a> {
    inner: core::slice::Iter<'a, Leaf>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(items: &'a [Leaf]) -> Self {
        Self {
            inner: items.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a (dyn Error + Send + Sync + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|leaf| &**leaf)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|leaf| &**leaf)
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Iter<'_> {}

impl core::fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

/// An owning iterator over the errors in a [`Collector`].
///
/// This iterator consumes a [`Collector`] and yields its leaf errors as
/// shared trait objects, which can be stored elsewhere or handed to another
/// error type.
///
/// # Examples
///
/// ```
/// use errcollect::Collector;
///
/// let mut errors = Collector::new();
/// errors.push("Error 1");
/// errors.push("Error 2");
///
/// for error in errors {
///     println!("Owned error: {error}");
/// }
/// ```
///
/// [`Collector`]: crate::Collector
#[must_use]
pub struct IntoIter {
    inner: alloc::vec::IntoIter<Leaf>,
}

impl IntoIter {
    pub(crate) fn new(items: alloc::vec::Vec<Leaf>) -> Self {
        Self {
            inner: items.into_iter(),
        }
    }
}

impl Iterator for IntoIter {
    type Item = Arc<dyn Error + Send + Sync + 'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for IntoIter {}

impl core::fmt::Debug for IntoIter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}
