mod iter;
mod owned;
mod preformatted;

pub use self::{
    iter::{IntoIter, Iter},
    owned::Collector,
    preformatted::PreformattedError,
};

use alloc::{boxed::Box, sync::Arc};
use core::error::Error;

/// The boxed form every collected value passes through before it is stored.
pub(crate) type BoxedError = Box<dyn Error + Send + Sync + 'static>;

/// A stored leaf error.
pub(crate) type Leaf = Arc<dyn Error + Send + Sync + 'static>;
