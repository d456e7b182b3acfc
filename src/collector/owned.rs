use alloc::{boxed::Box, sync::Arc, vec::Vec};
use core::{error::Error, fmt};

use super::{BoxedError, IntoIter, Iter, Leaf, PreformattedError};

/// An ordered collection of errors that is itself an error.
///
/// You can think of a [`Collector`] as a `Vec` of boxed errors with a few
/// differences in behavior:
/// - [`collect`](Self::collect) takes an [`Option`], and `None` is a no-op.
/// - Collecting another [`Collector`] appends its errors one by one instead of
///   nesting it, so a collector only ever holds leaf errors.
/// - It implements [`Error`], rendering as `collected errors: ` followed by
///   every collected message joined with `, `.
/// - An empty collector means "no error". Use [`into_result`](Self::into_result)
///   or [`into_error`](Self::into_error) to turn it into the usual `Result` or
///   `Option` shape.
///
/// Cloning is cheap, as the collected errors are reference counted. Stored
/// errors are `Send + Sync`; errors that are not, such as `Box<dyn Error>`, go
/// through [`collect_local`](Self::collect_local).
///
/// # Examples
///
/// ```
/// use errcollect::Collector;
///
/// fn parse_all(inputs: &[&str]) -> Result<Vec<u8>, Collector> {
///     let mut errors = Collector::new();
///     let mut parsed = Vec::new();
///     for input in inputs {
///         match input.parse::<u8>() {
///             Ok(value) => parsed.push(value),
///             Err(err) => errors.push(err),
///         }
///     }
///     errors.into_result_with(parsed)
/// }
///
/// assert_eq!(parse_all(&["1", "2"]).unwrap(), [1, 2]);
///
/// let errors = parse_all(&["1", "x", "y"]).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Collector {
    items: Vec<Leaf>,
}

impl Collector {
    /// Creates a new, empty `Collector`.
    ///
    /// The collector will have no capacity allocated. This method is
    /// equivalent to calling [`Default::default()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use errcollect::Collector;
    ///
    /// let errors = Collector::new();
    /// assert!(errors.is_empty());
    /// assert!(errors.into_error().is_none());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Collects a possibly absent error.
    ///
    /// - `None` leaves the collector untouched.
    /// - A [`Collector`] has its errors appended in order, also when it sits
    ///   behind a `Box` or an `Arc`. Nested collectors are never stored as a
    ///   single item, so any depth of nesting ends up as one flat list.
    /// - Anything else is appended as a single error.
    ///
    /// This cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use errcollect::Collector;
    ///
    /// fn step(fail: bool) -> Result<(), std::fmt::Error> {
    ///     if fail { Err(std::fmt::Error) } else { Ok(()) }
    /// }
    ///
    /// let mut errors = Collector::new();
    /// errors.collect(step(false).err());
    /// assert!(errors.is_empty());
    ///
    /// errors.collect(step(true).err());
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn collect<E>(&mut self, error: Option<E>)
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        let Some(error) = error else {
            return;
        };

        let error: BoxedError = error.into();
        match error.downcast::<Collector>() {
            Ok(nested) => {
                let nested = *nested;
                self.items.extend(nested.items);
            }
            Err(error) => match Self::as_collector(&*error) {
                Some(nested) => self.items.extend(nested.items.iter().cloned()),
                None => self.items.push(Arc::from(error)),
            },
        }
    }

    /// Collects a possibly absent error that is not `Send + Sync`.
    ///
    /// This accepts anything convertible into `Box<dyn Error>`, which is the
    /// error type of many existing APIs. Collectors are flattened exactly like
    /// in [`collect`](Self::collect). Any other error is stored as a
    /// [`PreformattedError`] holding its rendered messages, so the collector
    /// stays `Send + Sync`.
    ///
    /// Errors that are already `Send + Sync` should go through
    /// [`collect`](Self::collect), which keeps the original value.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::error::Error;
    ///
    /// use errcollect::Collector;
    ///
    /// fn legacy(fail: bool) -> Result<(), Box<dyn Error>> {
    ///     if fail { Err("legacy step failed".into()) } else { Ok(()) }
    /// }
    ///
    /// let mut errors = Collector::new();
    /// errors.collect_local(legacy(false).err());
    /// errors.collect_local(legacy(true).err());
    /// assert_eq!(errors.to_string(), "collected errors: legacy step failed");
    /// ```
    pub fn collect_local<E>(&mut self, error: Option<E>)
    where
        E: Into<Box<dyn Error + 'static>>,
    {
        let Some(error) = error else {
            return;
        };

        let error: Box<dyn Error + 'static> = error.into();
        match error.downcast::<Collector>() {
            Ok(nested) => {
                let nested = *nested;
                self.items.extend(nested.items);
            }
            Err(error) => match Self::as_collector(&*error) {
                Some(nested) => self.items.extend(nested.items.iter().cloned()),
                None => self.items.push(Arc::new(PreformattedError::new(&*error))),
            },
        }
    }

    /// Collects an error that is known to be present.
    ///
    /// Equivalent to `self.collect(Some(error))`, including the flattening of
    /// nested collectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use errcollect::Collector;
    ///
    /// let mut errors = Collector::new();
    /// errors.push("this is a test error");
    /// assert_eq!(errors.to_string(), "collected errors: this is a test error");
    ///
    /// errors.push("another one");
    /// assert_eq!(
    ///     errors.to_string(),
    ///     "collected errors: this is a test error, another one"
    /// );
    /// ```
    pub fn push<E>(&mut self, error: E)
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        self.collect(Some(error));
    }

    /// Returns the number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing has been collected.
    ///
    /// An empty collector stands for "no error".
    ///
    /// # Examples
    ///
    /// ```
    /// use errcollect::Collector;
    ///
    /// let mut errors = Collector::new();
    /// errors.push(Collector::new());
    /// assert!(errors.is_empty());
    ///
    /// errors.push("An error");
    /// assert!(!errors.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the error at the given index, or [`None`] if the
    /// index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.items.get(index).map(|leaf| &**leaf)
    }

    /// Returns an iterator over the collected errors, in collection order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.items)
    }

    /// Converts the collector into an optional error.
    ///
    /// Returns `None` when nothing was collected, and `Some(self)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use errcollect::Collector;
    ///
    /// assert!(Collector::new().into_error().is_none());
    ///
    /// let mut errors = Collector::new();
    /// errors.push("beep");
    /// assert!(errors.into_error().is_some());
    /// ```
    #[must_use]
    pub fn into_error(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }

    /// Converts the collector into a `Result`.
    ///
    /// Returns `Ok(())` when nothing was collected, and `Err(self)` otherwise.
    /// This is usually the last expression of a function that accumulated
    /// errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use errcollect::Collector;
    ///
    /// fn validate(name: &str, age: i32) -> Result<(), Collector> {
    ///     let mut errors = Collector::new();
    ///     if name.is_empty() {
    ///         errors.push("name must not be empty");
    ///     }
    ///     if age < 0 {
    ///         errors.push("age must not be negative");
    ///     }
    ///     errors.into_result()
    /// }
    ///
    /// assert!(validate("Ada", 36).is_ok());
    /// assert_eq!(
    ///     validate("", -1).unwrap_err().to_string(),
    ///     "collected errors: name must not be empty, age must not be negative"
    /// );
    /// ```
    pub fn into_result(self) -> Result<(), Self> {
        self.into_result_with(())
    }

    /// Converts the collector into a `Result` carrying `value` on success.
    ///
    /// Returns `Ok(value)` when nothing was collected, and `Err(self)`
    /// otherwise, dropping `value`.
    pub fn into_result_with<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    /// Looks through a type-erased error for a [`Collector`].
    ///
    /// This is the query used to decide whether a collected error should be
    /// flattened. It returns the collector and its ordered leaves when `error`
    /// is a `Collector`, a `Box<Collector>` or an `Arc<Collector>`, and `None`
    /// for any other error.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::error::Error;
    ///
    /// use errcollect::Collector;
    ///
    /// let mut errors = Collector::new();
    /// errors.push("beep");
    /// let erased: Box<dyn Error> = Box::new(errors);
    ///
    /// let found = Collector::as_collector(&*erased).unwrap();
    /// assert_eq!(found.len(), 1);
    ///
    /// let other: Box<dyn Error> = "boop".into();
    /// assert!(Collector::as_collector(&*other).is_none());
    /// ```
    #[must_use]
    pub fn as_collector<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a Collector> {
        error
            .downcast_ref::<Collector>()
            .or_else(|| error.downcast_ref::<Box<Collector>>().map(|c| &**c))
            .or_else(|| error.downcast_ref::<Arc<Collector>>().map(|c| &**c))
    }
}

impl fmt::Display for Collector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("collected errors: ")?;
        for (index, error) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl Error for Collector {}

impl<E> Extend<E> for Collector
where
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}

impl<E> FromIterator<E> for Collector
where
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut collector = Collector::new();
        collector.extend(iter);
        collector
    }
}

impl IntoIterator for Collector {
    type Item = Arc<dyn Error + Send + Sync + 'static>;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items)
    }
}

impl<'a> IntoIterator for &'a Collector {
    type Item = &'a (dyn Error + Send + Sync + 'static);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        format,
        rc::Rc,
        string::{String, ToString},
        vec::Vec,
    };

    use super::*;

    #[derive(Debug)]
    struct Message(&'static str);

    impl fmt::Display for Message {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl Error for Message {}

    fn absent() -> Option<Message> {
        None
    }

    fn messages(collector: &Collector) -> Vec<String> {
        collector.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_collector_send_sync() {
        static_assertions::assert_impl_all!(Collector: Send, Sync, Error);
    }

    #[test]
    fn test_collector_copy_clone() {
        static_assertions::assert_impl_all!(Collector: Clone, Default);
        static_assertions::assert_not_impl_any!(Collector: Copy);
    }

    #[test]
    fn test_new_is_empty() {
        let collector = Collector::new();
        assert!(collector.is_empty());
        assert_eq!(collector.len(), 0);
        assert!(collector.get(0).is_none());
        assert!(collector.into_result().is_ok());
    }

    #[test]
    fn test_collect_none_is_noop() {
        let mut collector = Collector::new();
        for _ in 0..5 {
            collector.collect(absent());
        }
        assert!(collector.is_empty());
        assert!(collector.into_error().is_none());
    }

    #[test]
    fn test_collect_keeps_order() {
        let mut collector = Collector::new();
        collector.collect(Some(Message("e1")));
        collector.collect(absent());
        collector.collect(Some(Message("e2")));
        collector.push(Message("e3"));

        assert_eq!(messages(&collector), ["e1", "e2", "e3"]);
        assert_eq!(collector.to_string(), "collected errors: e1, e2, e3");
    }

    #[test]
    fn test_single_item_keeps_prefix() {
        let mut collector = Collector::new();
        collector.push(Message("this is a test error"));
        assert_eq!(
            collector.to_string(),
            "collected errors: this is a test error"
        );
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(Collector::new().to_string(), "collected errors: ");
    }

    #[test]
    fn test_nested_collector_is_flattened() {
        let mut outer = Collector::new();
        outer.push(Message("x"));

        let mut inner = Collector::new();
        inner.push(Message("a"));
        inner.push(Message("b"));

        outer.push(inner);
        assert_eq!(outer.len(), 3);
        assert_eq!(messages(&outer), ["x", "a", "b"]);
        assert!(outer.iter().all(|e| Collector::as_collector(e).is_none()));
    }

    #[test]
    fn test_deep_nesting_is_flattened() {
        let mut level3 = Collector::new();
        level3.push(Message("deepest"));

        let mut level2 = Collector::new();
        level2.push(Message("middle"));
        level2.push(level3);

        let mut level1 = Collector::new();
        level1.push(level2);
        level1.push(Message("top"));

        assert_eq!(messages(&level1), ["middle", "deepest", "top"]);
    }

    #[test]
    fn test_boxed_collector_is_flattened() {
        let mut inner = Collector::new();
        inner.push(Message("a"));
        inner.push(Message("b"));
        let boxed: BoxedError = Box::new(inner);

        let mut outer = Collector::new();
        outer.push(boxed);
        assert_eq!(messages(&outer), ["a", "b"]);
    }

    #[test]
    fn test_collector_behind_box_or_arc_is_flattened() {
        let mut inner = Collector::new();
        inner.push(Message("a"));
        inner.push(Message("b"));

        let mut outer = Collector::new();
        outer.push(Box::new(inner.clone()));
        outer.push(Arc::new(inner));

        assert_eq!(outer.len(), 4);
        assert_eq!(outer.to_string(), "collected errors: a, b, a, b");
        assert!(outer.iter().all(|e| Collector::as_collector(e).is_none()));
    }

    #[test]
    fn test_as_collector_sees_through_box_and_arc() {
        let mut inner = Collector::new();
        inner.push(Message("a"));

        let boxed = Box::new(inner.clone());
        let shared = Arc::new(inner);
        assert_eq!(Collector::as_collector(&boxed).map(Collector::len), Some(1));
        assert_eq!(Collector::as_collector(&shared).map(Collector::len), Some(1));
        assert!(Collector::as_collector(&Message("a")).is_none());
    }

    #[test]
    fn test_collect_local_boxed_error() {
        fn legacy() -> Result<(), Box<dyn Error>> {
            Err(Box::new(Message("legacy failure")))
        }

        let mut collector = Collector::new();
        collector.collect_local(legacy().err());
        collector.collect_local(None::<Box<dyn Error>>);

        assert_eq!(collector.len(), 1);
        assert_eq!(collector.to_string(), "collected errors: legacy failure");
        let stored = collector.get(0).map(|e| e.downcast_ref::<PreformattedError>());
        assert!(matches!(stored, Some(Some(_))));
    }

    #[test]
    fn test_collect_local_non_send_error() {
        #[derive(Debug)]
        struct Shared(Rc<str>);

        impl fmt::Display for Shared {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Error for Shared {}

        let mut collector = Collector::new();
        collector.push(Message("x"));
        collector.collect_local(Some(Shared(Rc::from("not thread safe"))));
        assert_eq!(messages(&collector), ["x", "not thread safe"]);
    }

    #[test]
    fn test_collect_local_flattens_collectors() {
        let mut inner = Collector::new();
        inner.push(Message("a"));
        inner.push(Message("b"));
        let erased: Box<dyn Error> = Box::new(inner.clone());

        let mut collector = Collector::new();
        collector.collect_local(Some(erased));
        collector.collect_local(Some(Arc::new(inner)));
        collector.collect_local(Some(Collector::new()));

        assert_eq!(messages(&collector), ["a", "b", "a", "b"]);
        assert!(collector.iter().all(|e| e.downcast_ref::<PreformattedError>().is_none()));
    }

    #[test]
    fn test_empty_nested_collector_is_neutral() {
        let mut outer = Collector::new();
        outer.push(Collector::new());
        assert!(outer.is_empty());

        outer.push(Message("x"));
        outer.collect(Some(Collector::new()));
        assert_eq!(outer.len(), 1);
    }

    #[test]
    fn test_string_errors() {
        let mut collector = Collector::new();
        collector.push("static");
        collector.push(format!("formatted {}", 42));
        assert_eq!(
            collector.to_string(),
            "collected errors: static, formatted 42"
        );
    }

    #[test]
    fn test_into_result_with() {
        assert_eq!(Collector::new().into_result_with(7).ok(), Some(7));

        let mut collector = Collector::new();
        collector.push(Message("beep"));
        let err = collector.into_result_with(7).unwrap_err();
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_clone_shares_leaves() {
        let mut collector = Collector::new();
        collector.push(Message("beep"));

        let mut cloned = collector.clone();
        cloned.push(Message("boop"));

        assert_eq!(collector.len(), 1);
        assert_eq!(cloned.len(), 2);
    }

    #[test]
    fn test_from_iter_and_extend_flatten() {
        let mut inner = Collector::new();
        inner.push(Message("b"));

        let mut collector: Collector = [Message("a")].into_iter().collect();
        collector.extend([inner]);
        assert_eq!(messages(&collector), ["a", "b"]);
    }

    #[test]
    fn test_get() {
        let collector: Collector = ["first", "second"].into_iter().collect();
        assert_eq!(collector.get(1).map(|e| e.to_string()).as_deref(), Some("second"));
        assert!(collector.get(2).is_none());
    }

    #[test]
    fn test_collector_source_is_none() {
        let mut collector = Collector::new();
        collector.push(Message("beep"));
        assert!(collector.source().is_none());
    }
}
