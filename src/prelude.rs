//! Commonly used items for convenient importing.
//!
//! # Usage
//!
//! ```rust
//! use errcollect::prelude::*;
//!
//! fn parse_pair(a: &str, b: &str) -> Result<(u8, u8), Collector> {
//!     let mut errors = Collector::new();
//!     let a = a.parse::<u8>().or_collect(&mut errors);
//!     let b = b.parse::<u8>().or_collect(&mut errors);
//!     match (a, b) {
//!         (Some(a), Some(b)) => Ok((a, b)),
//!         _ => Err(errors),
//!     }
//! }
//!
//! assert_eq!(parse_pair("1", "2").unwrap(), (1, 2));
//! assert_eq!(parse_pair("x", "y").unwrap_err().len(), 2);
//! ```
//!
//! # What's Included
//!
//! - **[`Collector`]**: The error collection type
//! - **[`IteratorExt`]**: Extension methods for iterators of `Result`s
//! - **[`ResultExt`]**: Extension methods for `Result` types
//! - **[`IntoCollector`]**: Conversion from other error handling libraries

pub use crate::{
    Collector, compat::IntoCollector, iterator_ext::IteratorExt, result_ext::ResultExt,
};
