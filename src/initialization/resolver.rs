//! DNS resolver initialization.
//!
//! This module builds the resolver from the host's resolver configuration so
//! that lookups go to the same name servers, with the same timeouts, as the
//! operating system's own lookups.

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for CNAME lookups.
///
/// Reads the system resolver configuration (`/etc/resolv.conf` on Unix, the
/// registry on Windows). Name servers, search domains, timeout and attempt
/// counts all come from there; no timeout of our own is layered on top.
///
/// If the system configuration cannot be read, falls back to the resolver's
/// default upstream configuration and logs a warning.
///
/// Must be called from within a Tokio runtime context.
pub fn init_resolver() -> TokioAsyncResolver {
    let (config, opts) = match read_system_conf() {
        Ok((config, opts)) => {
            log::debug!(
                "Using system resolver configuration ({} name servers, timeout {:?}, {} attempts)",
                config.name_servers().len(),
                opts.timeout,
                opts.attempts
            );
            (config, opts)
        }
        Err(e) => {
            log::warn!(
                "Failed to read system resolver configuration, using default upstream resolvers: {e}"
            );
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    TokioAsyncResolver::tokio(config, opts)
}
