//! Conversions between [`Collector`] and boxed error trait objects.
//!
//! A [`Collector`] converts into `Box<dyn Error + Send + Sync>` through the
//! standard blanket `From` implementation, and [`Collector::push`] already
//! recognises a boxed collector. [`IntoCollector`] covers the remaining case of
//! turning a boxed error, or a `Result` carrying one, into a collector.
//!
//! ```
//! use std::error::Error;
//!
//! use errcollect::prelude::*;
//!
//! fn uses_boxed() -> Result<(), Box<dyn Error + Send + Sync>> {
//!     let mut errors = Collector::new();
//!     errors.push("first");
//!     errors.push("second");
//!     errors.into_result()?;
//!     Ok(())
//! }
//!
//! let errors = uses_boxed().into_collector().unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

use alloc::boxed::Box;
use core::error::Error;

use super::IntoCollector;
use crate::Collector;

impl IntoCollector for Box<dyn Error + Send + Sync + 'static> {
    type Output = Collector;

    #[inline]
    fn into_collector(self) -> Self::Output {
        let mut collector = Collector::new();
        collector.push(self);
        collector
    }
}

impl<T> IntoCollector for Result<T, Box<dyn Error + Send + Sync + 'static>> {
    type Output = Result<T, Collector>;

    #[inline]
    fn into_collector(self) -> Self::Output {
        self.map_err(|e| e.into_collector())
    }
}

impl IntoCollector for Box<dyn Error + 'static> {
    type Output = Collector;

    #[inline]
    fn into_collector(self) -> Self::Output {
        let mut collector = Collector::new();
        collector.collect_local(Some(self));
        collector
    }
}

impl<T> IntoCollector for Result<T, Box<dyn Error + 'static>> {
    type Output = Result<T, Collector>;

    #[inline]
    fn into_collector(self) -> Self::Output {
        self.map_err(|e| e.into_collector())
    }
}
