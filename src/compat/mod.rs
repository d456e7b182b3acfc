//! Compatibility and interoperability with other error handling libraries.
//!
//! # Overview
//!
//! A [`Collector`](crate::Collector) implements [`core::error::Error`], so it
//! already converts into `Box<dyn Error>`, [`anyhow::Error`] or
//! [`eyre::Report`] through `?`. The way back is the interesting direction:
//! once a collector has been wrapped by another library, a plain
//! [`Collector::push`](crate::Collector::push) would store the wrapper as one
//! opaque error. The [`IntoCollector`] trait unwraps such
//! values first, so a collector that travelled through another error type
//! still flattens when it is collected again.
//!
//! # Available Integrations
//!
//! - [`boxed_error`] - Boxed error trait objects
//!   (`Box<dyn Error + Send + Sync>` and `Box<dyn Error>`)
//! - [`anyhow1`] - The `anyhow` 1.x error handling library (requires the
//!   `compat-anyhow1` feature flag)
//! - [`eyre06`] - The `eyre` 0.6.x error handling library (requires the
//!   `compat-eyre06` feature flag)
//!
//! [`anyhow::Error`]: https://docs.rs/anyhow/1/anyhow/struct.Error.html
//! [`eyre::Report`]: https://docs.rs/eyre/0.6/eyre/struct.Report.html
//! [`anyhow1`]: https://docs.rs/errcollect/latest/errcollect/compat/anyhow1/index.html
//! [`eyre06`]: https://docs.rs/errcollect/latest/errcollect/compat/eyre06/index.html
//!
//! # Example
//!
//! ```
//! use errcollect::prelude::*;
//!
//! let mut inner = Collector::new();
//! inner.push("beep");
//! inner.push("boop");
//!
//! let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(inner);
//!
//! let mut errors = Collector::new();
//! errors.push(boxed.into_collector());
//! assert_eq!(errors.len(), 2);
//! ```

/// A trait for converting external error types into a
/// [`Collector`](crate::Collector).
///
/// The `.into_collector()` method converts both individual error values and
/// `Result` types. When the external error wraps a
/// [`Collector`](crate::Collector) and nothing else, that collector is
/// returned as is. Any other error becomes a
/// collector holding that one error.
///
/// # Implementations
///
/// - [`boxed_error`] provides implementations for
///   `Box<dyn Error + Send + Sync>`, `Box<dyn Error>` and results thereof
/// - `anyhow1` provides implementations for `anyhow::Error` and
///   `anyhow::Result<T>`
/// - `eyre06` provides implementations for `eyre::Report` and
///   `eyre::Result<T>`
///
/// # Examples
///
/// ```
/// use errcollect::prelude::*;
///
/// fn legacy() -> Result<u8, Box<dyn std::error::Error + Send + Sync>> {
///     Err("legacy failure".into())
/// }
///
/// let result: Result<u8, Collector> = legacy().into_collector();
/// assert_eq!(
///     result.unwrap_err().to_string(),
///     "collected errors: legacy failure"
/// );
/// ```
pub trait IntoCollector {
    /// The type produced by the conversion.
    ///
    /// For error types, this is [`Collector`](crate::Collector). For `Result`
    /// types, this is `Result<T, Collector>`.
    type Output;

    /// Converts this value into a collector type.
    ///
    /// - For error types: unwraps a wrapped collector, or wraps the error in a
    ///   one-item [`Collector`](crate::Collector)
    /// - For `Result` types: converts the error variant while preserving the
    ///   success value
    fn into_collector(self) -> Self::Output;
}

pub mod boxed_error;

#[cfg(feature = "compat-anyhow1")]
#[cfg_attr(docsrs, doc(cfg(feature = "compat-anyhow1")))]
pub mod anyhow1;

#[cfg(feature = "compat-eyre06")]
#[cfg_attr(docsrs, doc(cfg(feature = "compat-eyre06")))]
pub mod eyre06;
