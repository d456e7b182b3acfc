use alloc::boxed::Box;
use core::error::Error;

use crate::Collector;

mod sealed {
    pub trait Sealed {}
    impl<A, E> Sealed for Result<A, E> {}
}

/// Extension methods for feeding `Result`s into a [`Collector`].
///
/// This trait is sealed and only implemented for [`Result`].
pub trait ResultExt<V, E>: sealed::Sealed {
    /// Returns the success value, or collects the error and returns `None`.
    ///
    /// This lets a sequence of fallible steps keep going after a failure while
    /// remembering every error for later.
    ///
    /// # Examples
    ///
    /// ```
    /// use errcollect::prelude::*;
    ///
    /// let mut errors = Collector::new();
    ///
    /// let port = "8080".parse::<u16>().or_collect(&mut errors);
    /// let retries = "many".parse::<u8>().or_collect(&mut errors);
    ///
    /// assert_eq!(port, Some(8080));
    /// assert_eq!(retries, None);
    /// assert_eq!(errors.len(), 1);
    /// ```
    fn or_collect(self, errors: &mut Collector) -> Option<V>
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>;
}

impl<V, E> ResultExt<V, E> for Result<V, E> {
    #[inline]
    fn or_collect(self, errors: &mut Collector) -> Option<V>
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                errors.push(err);
                None
            }
        }
    }
}
