//! Canonical name resolution.

use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::config::CNAME_NOT_FOUND;
use crate::error_handling::{categorize_resolve_error, LookupError};
use crate::initialization::lookup_context;

/// Queries the CNAME record of a hostname.
///
/// When the answer holds a chain of aliases, the final target is returned.
/// Names are rendered in absolute form, with a trailing dot.
///
/// # Arguments
///
/// * `host` - The hostname to query; used as-is
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// `Ok(Some(name))` with the canonical name, or `Ok(None)` if the name has no
/// CNAME record or does not exist.
///
/// # Errors
///
/// Returns `LookupError::Resolve` for real failures (timeouts, network errors,
/// protocol errors).
pub async fn lookup_cname(
    host: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Option<String>, LookupError> {
    match resolver.lookup(host, RecordType::CNAME).await {
        Ok(lookup) => {
            let canonical = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::CNAME(cname) = rdata {
                        Some(cname.to_utf8())
                    } else {
                        None
                    }
                })
                .last();
            Ok(canonical)
        }
        Err(e) => {
            if categorize_resolve_error(&e).is_not_found() {
                Ok(None)
            } else {
                Err(e.into())
            }
        }
    }
}

/// Blocking form of [`lookup_cname`] using the process-wide lookup context.
///
/// # Errors
///
/// Returns `LookupError::ContextUnavailable` if the lookup context could not
/// be created, otherwise the errors of [`lookup_cname`].
pub fn lookup_cname_blocking(host: &str) -> Result<Option<String>, LookupError> {
    let context = lookup_context()?;
    context.run(|resolver| lookup_cname(host, resolver))
}

/// Resolves the canonical name of a hostname, or returns `"Could not find CNAME"`.
///
/// Every kind of failure (missing record, unknown name, timeout, network
/// error) yields the same fallback text. Failures are logged with their
/// category but never retried.
///
/// Blocks the calling thread until the system resolver answers or gives up.
pub fn resolve_canonical_name(host: &str) -> String {
    match lookup_cname_blocking(host) {
        Ok(Some(cname)) => {
            log::debug!("Resolved CNAME for {host}: {cname}");
            cname
        }
        Ok(None) => {
            log::debug!("No CNAME record for {host}");
            CNAME_NOT_FOUND.to_string()
        }
        Err(e) => {
            log::warn!(
                "CNAME lookup failed for {host} ({}): {e}",
                e.error_type().as_str()
            );
            CNAME_NOT_FOUND.to_string()
        }
    }
}
