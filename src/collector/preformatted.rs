use alloc::{format, string::String};
use core::{error::Error, fmt};

/// An error that has been preformatted into `String`s for both `Display` and
/// `Debug`.
///
/// Errors that are not `Send + Sync`, such as the contents of a
/// `Box<dyn Error>`, are stored in this form by
/// [`Collector::collect_local`](crate::Collector::collect_local). The
/// preformatted error displays exactly like the original did at the time it
/// was collected, and can be moved across threads with the rest of the
/// collector. The original error value and its `source` chain are dropped.
///
/// # Examples
///
/// ```
/// use std::error::Error;
///
/// use errcollect::{Collector, PreformattedError};
///
/// let legacy: Box<dyn Error> = "disk is full".into();
///
/// let mut errors = Collector::new();
/// errors.collect_local(Some(legacy));
///
/// let stored = errors.get(0).unwrap();
/// assert!(stored.downcast_ref::<PreformattedError>().is_some());
/// assert_eq!(stored.to_string(), "disk is full");
/// ```
pub struct PreformattedError {
    display: String,
    debug: String,
}

impl PreformattedError {
    pub(crate) fn new(error: &dyn Error) -> Self {
        Self {
            display: format!("{error}"),
            debug: format!("{error:?}"),
        }
    }
}

impl fmt::Display for PreformattedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl fmt::Debug for PreformattedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug)
    }
}

impl Error for PreformattedError {}
