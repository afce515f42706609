//! Errors that can occur while querying the service.

/// An error querying the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No connection to the service could be established.
    #[error("unable to resolve a proxy for `{address}`: {source}")]
    Resolve {
        /// The address that was being resolved.
        address: String,
        /// The underlying transport failure.
        source: tonic::transport::Error,
    },
    /// The service or the transport reported a failure for an invocation.
    #[error("remote invocation failed: {0}")]
    Remote(#[from] tonic::Status),
    /// The service answered, but not in the shape the operation defines.
    #[error("malformed answer to `{operation}`: {reason}")]
    MalformedAnswer {
        /// The operation that was invoked.
        operation: &'static str,
        /// What was wrong with the answer.
        reason: String,
    },
}

impl Error {
    /// A malformed answer to `operation`.
    pub(crate) fn malformed(operation: &'static str, reason: impl ToString) -> Self {
        Self::MalformedAnswer {
            operation,
            reason: reason.to_string(),
        }
    }
}
