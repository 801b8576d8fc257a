//! Process-wide lookup context.
//!
//! Blocking callers (the C exports and `resolve_canonical_name`) share one
//! runtime and one resolver for the lifetime of the process. Both are created
//! lazily on the first lookup.

use std::future::Future;
use std::sync::LazyLock;

use hickory_resolver::TokioAsyncResolver;
use tokio::runtime::{Builder, Handle, Runtime};

use super::resolver::init_resolver;
use crate::config::LOOKUP_WORKER_THREADS;
use crate::error_handling::{InitializationError, LookupError};

static LOOKUP_CONTEXT: LazyLock<Result<LookupContext, InitializationError>> =
    LazyLock::new(|| {
        let context = LookupContext::new();
        match &context {
            Ok(_) => log::info!("Initialized CNAME lookup context"),
            Err(e) => log::error!("Failed to initialize CNAME lookup context: {e}"),
        }
        context
    });

/// Returns the process-wide lookup context, creating it on first use.
///
/// # Errors
///
/// Returns `LookupError::ContextUnavailable` if the context could not be
/// created. The failure is remembered: later calls fail the same way without
/// retrying.
pub fn lookup_context() -> Result<&'static LookupContext, LookupError> {
    LOOKUP_CONTEXT
        .as_ref()
        .map_err(|e| LookupError::ContextUnavailable(e.to_string()))
}

/// A runtime plus the resolver whose background tasks run on it.
pub struct LookupContext {
    runtime: Runtime,
    resolver: TokioAsyncResolver,
}

impl LookupContext {
    /// Builds a new runtime and a resolver from the system configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::RuntimeError` if the runtime cannot be built.
    pub fn new() -> Result<Self, InitializationError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(LOOKUP_WORKER_THREADS)
            .thread_name("cname-lookup")
            .enable_all()
            .build()?;

        let resolver = {
            let _guard = runtime.enter();
            init_resolver()
        };

        Ok(Self { runtime, resolver })
    }

    /// Runs `f` against the shared resolver and blocks until it completes.
    ///
    /// Safe to call from inside another Tokio runtime: in that case the
    /// future is driven from a short-lived helper thread, since a runtime
    /// cannot be blocked on from one of its own threads.
    pub fn run<'a, F, Fut, T>(&'a self, f: F) -> T
    where
        F: FnOnce(&'a TokioAsyncResolver) -> Fut + Send,
        Fut: Future<Output = T>,
        T: Send,
    {
        if Handle::try_current().is_err() {
            return self.runtime.block_on(f(&self.resolver));
        }

        std::thread::scope(|scope| {
            let handle = scope.spawn(|| self.runtime.block_on(f(&self.resolver)));
            match handle.join() {
                Ok(value) => value,
                Err(payload) => std::panic::resume_unwind(payload),
            }
        })
    }
}
