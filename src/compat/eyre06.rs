//! Bidirectional integration with the [`eyre`] 0.6.x error handling library.
//!
//! This module specifically supports `eyre` version 0.6.x. To enable this
//! integration, add the `compat-eyre06` feature flag to your `Cargo.toml`.
//!
//! The conversions mirror the `anyhow1` module: [`IntoEyre`] turns a
//! [`Collector`] into an [`eyre::Report`], and [`IntoCollector`] turns a report
//! back, recovering a wrapped collector so that its errors flatten.
//!
//! ```
//! use errcollect::{compat::eyre06::IntoEyre, prelude::*};
//!
//! fn eyre_function() -> eyre::Result<()> {
//!     let mut errors = Collector::new();
//!     errors.push("beep");
//!     errors.push("boop");
//!     errors.into_result().into_eyre()?;
//!     Ok(())
//! }
//!
//! let mut errors = Collector::new();
//! errors.collect(eyre_function().into_collector().err());
//! assert_eq!(errors.to_string(), "collected errors: beep, boop");
//! ```

use super::IntoCollector;
use crate::Collector;

impl IntoCollector for eyre::Report {
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

impl<T> IntoCollector for eyre::Result<T> {
    type Output = Result<T, Collector>;

    #[inline]
    fn into_collector(self) -> Self::Output {
        self.map_err(|e| e.into_collector())
    }
}

/// A trait for converting a [`Collector`] into [`eyre::Report`].
///
/// Implemented for both [`Collector`] and [`Result<T, Collector>`].
///
/// # Examples
///
/// ```
/// use errcollect::{Collector, compat::eyre06::IntoEyre};
///
/// let mut errors = Collector::new();
/// errors.push("failed");
/// let report: eyre::Report = errors.into_eyre();
/// assert_eq!(report.to_string(), "collected errors: failed");
/// ```
pub trait IntoEyre {
    /// The type produced by the conversion.
    ///
    /// - For [`Collector`]: produces [`eyre::Report`]
    /// - For [`Result<T, Collector>`]: produces [`eyre::Result<T>`]
    type Output;

    /// Converts this value into an eyre type.
    fn into_eyre(self) -> Self::Output;
}

impl IntoEyre for Collector {
    type Output = eyre::Report;

    fn into_eyre(self) -> Self::Output {
        eyre::Report::new(self)
    }
}

impl<T> IntoEyre for Result<T, Collector> {
    type Output = eyre::Result<T>;

    fn into_eyre(self) -> Self::Output {
        self.map_err(|e| e.into_eyre())
    }
}
