/// Feedback-gateway errors. Surfaced as an absent critique, never thrown
/// past the gateway boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway not configured: {reason}")]
    NotConfigured { reason: String },

    #[error("upstream unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("rate limited by upstream (retry after {retry_after_secs:?}s)")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("malformed upstream response: {reason}")]
    MalformedResponse { reason: String },
}
