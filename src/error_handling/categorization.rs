//! Lookup failure categorization.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;

use super::types::ErrorType;

/// Categorizes a resolver error into an `ErrorType`.
///
/// Structured error kinds are checked first; anything else falls back to
/// [`categorize_dns_error_message`] on the rendered error.
pub fn categorize_resolve_error(error: &ResolveError) -> ErrorType {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            categorize_response_code(*response_code)
        }
        ResolveErrorKind::Timeout => ErrorType::DnsTimeout,
        _ => categorize_dns_error_message(&error.to_string()),
    }
}

/// Categorizes the response code of an answer that carried no records.
///
/// Only NOERROR (the name exists without a CNAME) and NXDOMAIN mean "not
/// found". SERVFAIL, REFUSED and the rest are server failures.
pub fn categorize_response_code(response_code: ResponseCode) -> ErrorType {
    match response_code {
        ResponseCode::NoError => ErrorType::DnsNoRecords,
        ResponseCode::NXDomain => ErrorType::DnsNxDomain,
        _ => ErrorType::DnsLookupError,
    }
}

/// Categorizes a DNS error by its message text.
///
/// Resolver errors that arrive wrapped (I/O, protocol) only carry their
/// meaning in the message, so this matches on the same phrases the resolver
/// uses.
///
/// # Arguments
///
/// * `message` - The rendered error message
///
/// # Returns
///
/// The appropriate `ErrorType` for the message.
pub fn categorize_dns_error_message(message: &str) -> ErrorType {
    let msg = message.to_lowercase();
    if msg.contains("nxdomain") {
        ErrorType::DnsNxDomain
    } else if msg.contains("no records found") || msg.contains("no record found") {
        ErrorType::DnsNoRecords
    } else if msg.contains("timeout") || msg.contains("timed out") {
        ErrorType::DnsTimeout
    } else {
        ErrorType::DnsLookupError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_message_nxdomain() {
        assert_eq!(
            categorize_dns_error_message("query failed: NXDomain"),
            ErrorType::DnsNxDomain
        );
    }

    #[test]
    fn test_categorize_message_no_records() {
        assert_eq!(
            categorize_dns_error_message("no record found for Query { name: example.com. }"),
            ErrorType::DnsNoRecords
        );
        assert_eq!(
            categorize_dns_error_message("no records found for example.com"),
            ErrorType::DnsNoRecords
        );
    }

    #[test]
    fn test_categorize_message_timeout() {
        assert_eq!(
            categorize_dns_error_message("request timed out"),
            ErrorType::DnsTimeout
        );
        assert_eq!(
            categorize_dns_error_message("Timeout waiting for response"),
            ErrorType::DnsTimeout
        );
    }

    #[test]
    fn test_categorize_message_other() {
        assert_eq!(
            categorize_dns_error_message("connection refused"),
            ErrorType::DnsLookupError
        );
        assert_eq!(categorize_dns_error_message(""), ErrorType::DnsLookupError);
    }

    #[test]
    fn test_categorize_response_code_not_found() {
        assert_eq!(
            categorize_response_code(ResponseCode::NoError),
            ErrorType::DnsNoRecords
        );
        assert_eq!(
            categorize_response_code(ResponseCode::NXDomain),
            ErrorType::DnsNxDomain
        );
    }

    #[test]
    fn test_categorize_response_code_server_failures() {
        for code in [
            ResponseCode::ServFail,
            ResponseCode::Refused,
            ResponseCode::FormErr,
            ResponseCode::NotImp,
        ] {
            let error_type = categorize_response_code(code);
            assert_eq!(error_type, ErrorType::DnsLookupError, "{code:?}");
            assert!(!error_type.is_not_found());
        }
    }

    #[test]
    fn test_categorize_resolve_error_timeout_kind() {
        let err = ResolveError::from(ResolveErrorKind::Timeout);
        assert_eq!(categorize_resolve_error(&err), ErrorType::DnsTimeout);
    }

    #[test]
    fn test_categorize_resolve_error_plain_message() {
        let err = ResolveError::from("no connections available");
        assert_eq!(categorize_resolve_error(&err), ErrorType::DnsLookupError);
    }
}
