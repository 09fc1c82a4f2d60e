use thiserror::Error;

/// Error taxonomy for the checkout protocol and the API client beneath it.
///
/// Every variant maps to one of the user-visible failure classes: input
/// rejected before any network call, session initiation refused by the
/// backend, gateway script not ready, verification rejected, or transport
/// trouble where the true order state is unknowable client-side.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The order intent was rejected locally (empty line items, zero total).
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// The backend rejected a request and supplied a message in its error
    /// envelope (`meta.message`), or we fell back to a status-derived one.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The hosted checkout widget was not ready when the bridge was invoked.
    #[error("Payment gateway unavailable: {0}")]
    GatewayUnavailable(String),

    /// The gateway widget failed to open or crashed mid-session.
    #[error("Payment gateway error: {0}")]
    Gateway(String),

    /// An attempt is already outstanding; the pay action is disabled until it
    /// reaches a terminal or cancelled state.
    #[error("A payment attempt is already in progress")]
    AttemptInFlight,

    /// The order exists but is not in a state the retry path acts on.
    #[error("Order {0} is not awaiting a payment retry")]
    NotRetryable(String),

    /// Network-level failure. For verification calls this is the
    /// reconciliation gap: the payment may have succeeded on the gateway side
    /// while this request was lost.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a body we could not interpret.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(#[from] serde_json::Error),

    /// Bad client configuration (unparseable base URL and the like).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckoutError {
    /// Message supplied by the backend's error envelope, when there is one.
    ///
    /// Callers surface this to the user and fall back to a flow-specific
    /// generic message otherwise, so transport and parse internals never leak
    /// into a toast.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            CheckoutError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// User-facing rendition of this error.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::Api { message, .. } => message.clone(),
            CheckoutError::Transport(_) => "Network error. Please try again.".to_string(),
            CheckoutError::UnexpectedResponse(_) => {
                "Something went wrong. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}
