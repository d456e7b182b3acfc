use alloc::{boxed::Box, vec::Vec};
use core::{error::Error, iter::FusedIterator, mem};

use crate::Collector;

/// Extension methods for iterators over `Result` types to collect errors.
///
/// This trait provides methods to collect successful values while accumulating
/// all errors into a [`Collector`], rather than stopping at the first error
/// like [`Iterator::collect`] does.
///
/// # When to Use
///
/// Use these methods when you want to:
/// - Process all items in an iterator, even if some fail
/// - Collect all errors that occurred, not just the first one
/// - Validate multiple items and report all validation failures at once
///
/// # Comparison to Standard Collect
///
/// The standard library's [`Iterator::collect`] stops at the first error, while
/// these methods continue processing and collect all errors:
///
/// ```rust
/// use errcollect::prelude::*;
///
/// let inputs = vec!["1", "2", "invalid", "4", "bad"];
///
/// // Standard collect stops at first error
/// let standard: Result<Vec<u8>, _> = inputs.iter().map(|s| s.parse::<u8>()).collect();
/// assert!(standard.is_err()); // Stopped at "invalid", never saw "bad"
///
/// // collect_errors_vec processes ALL items and collects ALL errors
/// let result: Result<Vec<u8>, Collector> = inputs
///     .into_iter()
///     .map(|s| s.parse::<u8>())
///     .collect_errors_vec();
///
/// assert!(result.is_err());
/// let all_errors = result.unwrap_err();
/// assert_eq!(all_errors.len(), 2); // Both "invalid" and "bad" collected
/// ```
pub trait IteratorExt<A, E>: Sized + Iterator<Item = Result<A, E>> {
    /// Collects successful values into a container, or all errors into a
    /// [`Collector`].
    ///
    /// This method processes the entire iterator, collecting all `Ok` values
    /// into the specified container type. If any `Err` values are
    /// encountered, iteration continues to collect **all** errors before
    /// returning them in a [`Collector`]. Errors that are themselves
    /// collectors are flattened.
    ///
    /// # Returns
    ///
    /// - `Ok(Container)`: If all items were successful
    /// - `Err(Collector)`: If any errors occurred, containing all of them
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    ///
    /// use errcollect::prelude::*;
    ///
    /// let inputs = vec!["1", "2", "foo", "4", "bar"];
    /// let result: Result<BTreeSet<u8>, Collector> = inputs
    ///     .into_iter()
    ///     .map(|s| s.parse::<u8>())
    ///     .collect_errors();
    ///
    /// let errors = result.unwrap_err();
    /// assert_eq!(errors.len(), 2); // "foo" and "bar" both failed
    ///
    /// let inputs = vec!["1", "2", "2"];
    /// let result: Result<BTreeSet<u8>, Collector> = inputs
    ///     .into_iter()
    ///     .map(|s| s.parse::<u8>())
    ///     .collect_errors();
    ///
    /// assert_eq!(result.unwrap(), BTreeSet::from([1u8, 2]));
    /// ```
    fn collect_errors<Container>(self) -> Result<Container, Collector>
    where
        Container: FromIterator<A>,
        E: Into<Box<dyn Error + Send + Sync + 'static>>;

    /// Collects successful values into a `Vec`, or all errors into a
    /// [`Collector`].
    ///
    /// This is a specialized version of
    /// [`collect_errors`](IteratorExt::collect_errors) that always collects
    /// into a `Vec`, which helps with type inference.
    ///
    /// # Examples
    ///
    /// ```
    /// use errcollect::prelude::*;
    ///
    /// let inputs = vec!["1", "2", "foo", "2", "bar"];
    /// let errors = inputs
    ///     .into_iter()
    ///     .map(|s| s.parse::<u8>())
    ///     .collect_errors_vec()
    ///     .unwrap_err();
    ///
    /// assert_eq!(
    ///     errors.to_string(),
    ///     "collected errors: invalid digit found in string, invalid digit found in string"
    /// );
    /// ```
    fn collect_errors_vec(self) -> Result<Vec<A>, Collector>
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>;
}

struct IteratorWrapper<'a, Iter> {
    iter: Iter,
    errors: &'a mut Collector,
}

impl<Iter, Object, E> Iterator for IteratorWrapper<'_, Iter>
where
    Iter: Iterator<Item = Result<Object, E>>,
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    type Item = Object;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.errors.is_empty() {
            match self.iter.next()? {
                Ok(object) => return Some(object),
                Err(err) => self.errors.push(err),
            }
        }

        // The first real error was just collected, so only errors matter from
        // here on.
        self.errors.extend((&mut self.iter).filter_map(|v| v.err()));
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.errors.is_empty() {
            let (_, upper) = self.iter.size_hint();
            (0, upper)
        } else {
            (0, Some(0))
        }
    }
}

impl<Iter, Object, E> FusedIterator for IteratorWrapper<'_, Iter>
where
    Iter: FusedIterator<Item = Result<Object, E>>,
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
}

impl<A, E, I> IteratorExt<A, E> for I
where
    I: Iterator<Item = Result<A, E>>,
{
    #[inline]
    fn collect_errors<Container>(self) -> Result<Container, Collector>
    where
        Container: FromIterator<A>,
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        let mut errors = Collector::new();
        let result = Container::from_iter(IteratorWrapper {
            iter: self,
            errors: &mut errors,
        });
        errors.into_result_with(result)
    }

    #[inline]
    fn collect_errors_vec(mut self) -> Result<Vec<A>, Collector>
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        let mut out = Vec::new();
        let mut errors = Collector::new();
        while let Some(v) = self.next() {
            match v {
                Ok(v) if errors.is_empty() => out.push(v),
                Ok(_) => {}
                Err(err) => errors.push(err),
            }
        }
        if errors.is_empty() {
            Ok(out)
        } else {
            mem::drop(out);
            Err(errors)
        }
    }
}
