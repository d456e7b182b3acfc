#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    unsafe_code,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Collect many errors, report them as one.
//!
//! ## Overview
//!
//! Some operations should not stop at the first failure: validating every
//! field of a form, processing every file in a batch, tearing down every
//! resource in a shutdown sequence. This crate provides a [`Collector`], an
//! ordered list of errors that is itself an error. You run all of the fallible
//! steps, feed each outcome to the collector, and afterwards return the
//! collector as one error describing everything that went wrong.
//!
//! ## Quick Example
//!
//! ```
//! use errcollect::Collector;
//!
//! fn check_even(numbers: &[u32]) -> Result<(), Collector> {
//!     let mut errors = Collector::new();
//!     for n in numbers {
//!         if n % 2 != 0 {
//!             errors.push(format!("{n} is not an even number"));
//!         }
//!     }
//!     errors.into_result()
//! }
//!
//! assert!(check_even(&[2, 4, 6]).is_ok());
//!
//! let err = check_even(&[1, 2, 3]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "collected errors: 1 is not an even number, 3 is not an even number"
//! );
//! ```
//!
//! ## Core Concepts
//!
//! A [`Collector`] holds **leaf errors**: any value implementing
//! [`core::error::Error`] `+ Send + Sync`, plus anything that converts into a
//! boxed error such as `&str` and `String`.
//!
//! - **Absence is a no-op.** [`Collector::collect`] takes an [`Option`], so the
//!   result of `result.err()` can be fed in directly. `None` never changes the
//!   collector.
//! - **Nesting flattens.** Collecting a collector appends its leaves in order
//!   instead of storing it as one item. Since every collector only ever holds
//!   leaves, this is transitive across any nesting depth.
//! - **Emptiness is "no error".** An empty collector is not an error:
//!   [`Collector::into_result`] returns `Ok(())` and [`Collector::into_error`]
//!   returns `None`. Presence is decided by the item count, never by identity.
//!
//! ## Rendering
//!
//! The [`Display`](core::fmt::Display) output is always
//! `collected errors: ` followed by each leaf's message, joined with `, `:
//!
//! ```
//! use errcollect::Collector;
//!
//! let mut inner = Collector::new();
//! inner.push("biip");
//! inner.collect(None::<&str>);
//!
//! let mut outer = Collector::new();
//! outer.push("beep");
//! outer.push("boop");
//! outer.push(inner);
//!
//! assert_eq!(outer.len(), 3);
//! assert_eq!(outer.to_string(), "collected errors: beep, boop, biip");
//! ```
//!
//! A single item is rendered with the same prefix.
//!
//! ## Ecosystem
//!
//! - **`errcollect-tracing`** emits collected errors as [`tracing`] events.
//! - The `compat-anyhow1` and `compat-eyre06` features convert to and from
//!   `anyhow` and `eyre` errors without losing flattening. See [`compat`].
//!
//! [`tracing`]: https://docs.rs/tracing

extern crate alloc;

mod collector;
pub mod compat;
mod iterator_ext;
pub mod prelude;
mod result_ext;

pub use self::{
    collector::{Collector, IntoIter, Iter, PreformattedError},
    iterator_ext::IteratorExt,
    result_ext::ResultExt,
};
