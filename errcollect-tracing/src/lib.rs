#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Tracing output for errcollect collectors.
//!
//! This crate emits the errors held by a [`Collector`] as [`tracing`] events,
//! so that accumulated failures show up in whatever subscriber your
//! application already uses (console output, log files, log forwarding).
//!
//! # How It Works
//!
//! Every event is emitted at the `ERROR` level with the target `errcollect`.
//! By default each collected error becomes its own event carrying the fields
//! `index`, `total` and `error`. In summary mode the whole collector becomes a
//! single event carrying `count` and the rendered collector as its message.
//! An empty collector emits nothing.
//!
//! # Quick Start
//!
//! ```
//! use errcollect::Collector;
//! use errcollect_tracing::TraceExt;
//!
//! fn load_all() -> Result<(), Collector> {
//!     let mut errors = Collector::new();
//!     errors.push("missing file a.toml");
//!     errors.push("missing file b.toml");
//!     errors.into_result()
//! }
//!
//! let subscriber = tracing_subscriber::fmt().finish();
//! tracing::subscriber::with_default(subscriber, || {
//!     // Logs both errors and hands the result back unchanged
//!     let result = load_all().trace_errors();
//!     assert!(result.is_err());
//! });
//! ```
//!
//! Output:
//! ```text
//! ERROR errcollect: collected error index=0 total=2 error=missing file a.toml
//! ERROR errcollect: collected error index=1 total=2 error=missing file b.toml
//! ```
//!
//! # Environment Variables
//!
//! - `ERRCOLLECT_TRACING` - Comma-separated options:
//!   - `summary` - Emit one event per collector instead of one per error

use std::sync::OnceLock;

use errcollect::Collector;

/// The target used for every event emitted by this crate.
pub const TARGET: &str = "errcollect";

/// Emits the contents of a [`Collector`] as tracing events.
///
/// # Examples
///
/// Basic usage with settings taken from the environment:
///
/// ```
/// use errcollect::Collector;
/// use errcollect_tracing::CollectorTracer;
///
/// let mut errors = Collector::new();
/// errors.push("beep");
///
/// CollectorTracer::new().trace(&errors);
/// ```
///
/// Custom configuration:
///
/// ```
/// use errcollect::Collector;
/// use errcollect_tracing::CollectorTracer;
///
/// let tracer = CollectorTracer { summary_only: true };
///
/// let mut errors = Collector::new();
/// errors.push("beep");
/// errors.push("boop");
///
/// // Emits one event: "collected errors: beep, boop"
/// tracer.trace(&errors);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct CollectorTracer {
    /// Whether to emit a single summary event per collector instead of one
    /// event per collected error.
    pub summary_only: bool,
}

#[derive(Debug)]
struct ErrcollectTracingEnvOptions {
    summary_only: bool,
}

impl ErrcollectTracingEnvOptions {
    fn get() -> &'static Self {
        static ERRCOLLECT_TRACING_FLAGS: OnceLock<ErrcollectTracingEnvOptions> = OnceLock::new();

        ERRCOLLECT_TRACING_FLAGS.get_or_init(|| {
            Self::parse(
                std::env::var_os("ERRCOLLECT_TRACING")
                    .map(|var| var.to_string_lossy().into_owned())
                    .as_deref(),
            )
        })
    }

    fn parse(var: Option<&str>) -> Self {
        let mut summary_only = false;

        if let Some(var) = var {
            for v in var.split(',') {
                if v.trim().eq_ignore_ascii_case("summary") {
                    summary_only = true;
                }
            }
        }

        ErrcollectTracingEnvOptions { summary_only }
    }
}

impl CollectorTracer {
    /// Creates a new [`CollectorTracer`] with default settings.
    ///
    /// Configuration is controlled by environment variables, read once per
    /// process.
    ///
    /// # Environment Variables
    ///
    /// - `ERRCOLLECT_TRACING` - Comma-separated options:
    ///   - `summary` - Emit one event per collector instead of one per error
    pub fn new() -> Self {
        let env_options = ErrcollectTracingEnvOptions::get();

        Self {
            summary_only: env_options.summary_only,
        }
    }

    /// Emits the errors of `collector` as `ERROR` level events.
    ///
    /// Nothing is emitted for an empty collector, since it does not represent
    /// an error.
    pub fn trace(&self, collector: &Collector) {
        if collector.is_empty() {
            return;
        }

        let total = collector.len();
        if self.summary_only {
            tracing::error!(target: TARGET, count = total, "{collector}");
            return;
        }

        for (index, error) in collector.iter().enumerate() {
            tracing::error!(
                target: TARGET,
                index,
                total,
                error = %error,
                "collected error"
            );
        }
    }
}

impl Default for CollectorTracer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension trait for tracing collected errors on their way out.
///
/// The value is returned unchanged, so the call can sit at the end of an
/// expression that is returned or propagated with `?`.
///
/// # Examples
///
/// ```
/// use errcollect::Collector;
/// use errcollect_tracing::TraceExt;
///
/// fn validate(values: &[i32]) -> Result<(), Collector> {
///     let mut errors = Collector::new();
///     for value in values {
///         if *value < 0 {
///             errors.push(format!("{value} is negative"));
///         }
///     }
///     errors.into_result().trace_errors()
/// }
///
/// assert!(validate(&[1, -2]).is_err());
/// ```
pub trait TraceExt: Sized {
    /// Emits the collected errors using [`CollectorTracer::new`] and returns
    /// `self`.
    fn trace_errors(self) -> Self {
        self.trace_errors_with(&CollectorTracer::new())
    }

    /// Emits the collected errors using the given tracer and returns `self`.
    fn trace_errors_with(self, tracer: &CollectorTracer) -> Self;
}

impl TraceExt for Collector {
    fn trace_errors_with(self, tracer: &CollectorTracer) -> Self {
        tracer.trace(&self);
        self
    }
}

impl<T> TraceExt for Result<T, Collector> {
    fn trace_errors_with(self, tracer: &CollectorTracer) -> Self {
        if let Err(collector) = &self {
            tracer.trace(collector);
        }
        self
    }
}
