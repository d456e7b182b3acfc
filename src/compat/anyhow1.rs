//! Bidirectional integration with the [`anyhow`] 1.x error handling library.
//!
//! This module specifically supports `anyhow` version 1.x. To enable this
//! integration, add the `compat-anyhow1` feature flag to your `Cargo.toml`.
//!
//! # Converting from Collector to Anyhow
//!
//! [`Collector`] implements [`core::error::Error`], so the `?` operator
//! converts it into an [`anyhow::Error`] on its own. [`IntoAnyhow`] offers the
//! same conversion as a method:
//!
//! ```
//! use errcollect::{Collector, compat::anyhow1::IntoAnyhow};
//!
//! fn collecting() -> Result<(), Collector> {
//!     let mut errors = Collector::new();
//!     errors.push("database connection failed");
//!     errors.into_result()
//! }
//!
//! fn anyhow_function() -> anyhow::Result<()> {
//!     collecting().into_anyhow()?;
//!     Ok(())
//! }
//!
//! assert_eq!(
//!     anyhow_function().unwrap_err().to_string(),
//!     "collected errors: database connection failed"
//! );
//! ```
//!
//! # Converting from Anyhow to Collector
//!
//! Use [`IntoCollector`] to bring an [`anyhow::Error`] back. If the anyhow
//! error is a collector that was converted with `?`, the original collector is
//! recovered, so its errors are flattened rather than nested:
//!
//! ```
//! use errcollect::prelude::*;
//!
//! fn anyhow_function() -> anyhow::Result<()> {
//!     let mut errors = Collector::new();
//!     errors.push("beep");
//!     errors.push("boop");
//!     errors.into_result()?;
//!     Ok(())
//! }
//!
//! let mut errors = Collector::new();
//! errors.push("first");
//! errors.collect(anyhow_function().into_collector().err());
//! assert_eq!(errors.to_string(), "collected errors: first, beep, boop");
//! ```
//!
//! An anyhow error that carries context on top of a collector is kept as a
//! single error, so its context message is not lost.

use super::IntoCollector;
use crate::Collector;

impl IntoCollector for anyhow::Error {
    type Output = Collector;

    #[inline]
    fn into_collector(self) -> Self::Output {
        let error = if self.chain().nth(1).is_none() {
            match self.downcast::<Collector>() {
                Ok(collector) => return collector,
                Err(error) => error,
            }
        } else {
            self
        };

        let mut collector = Collector::new();
        collector.push(error);
        collector
    }
}

impl<T> IntoCollector for anyhow::Result<T> {
    type Output = Result<T, Collector>;

    #[inline]
    fn into_collector(self) -> Self::Output {
        self.map_err(|e| e.into_collector())
    }
}

/// A trait for converting a [`Collector`] into [`anyhow::Error`].
///
/// Implemented for both [`Collector`] and [`Result<T, Collector>`].
///
/// # Examples
///
/// ```
/// use errcollect::{Collector, compat::anyhow1::IntoAnyhow};
///
/// let result: Result<i32, Collector> = Ok(42);
/// let converted: anyhow::Result<i32> = result.into_anyhow();
/// assert_eq!(converted.unwrap(), 42);
///
/// let mut errors = Collector::new();
/// errors.push("failed");
/// let anyhow_err: anyhow::Error = errors.into_anyhow();
/// assert!(anyhow_err.is::<Collector>());
/// ```
pub trait IntoAnyhow {
    /// The type produced by the conversion.
    ///
    /// - For [`Collector`]: produces [`anyhow::Error`]
    /// - For [`Result<T, Collector>`]: produces [`anyhow::Result<T>`]
    type Output;

    /// Converts this value into an anyhow type.
    fn into_anyhow(self) -> Self::Output;
}

impl IntoAnyhow for Collector {
    type Output = anyhow::Error;

    fn into_anyhow(self) -> Self::Output {
        anyhow::Error::new(self)
    }
}

impl<T> IntoAnyhow for Result<T, Collector> {
    type Output = anyhow::Result<T>;

    fn into_anyhow(self) -> Self::Output {
        self.map_err(|e| e.into_anyhow())
    }
}
