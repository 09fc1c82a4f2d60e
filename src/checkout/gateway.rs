//! External checkout bridge capability.
//!
//! The hosted checkout widget is owned by the gateway and loaded out of band,
//! so the flow receives it as an injected capability rather than reaching for
//! ambient global state. An implementation that is still loading reports
//! `is_ready() == false` and the bridge fails fast instead of hanging.

use async_trait::async_trait;

use crate::errors::CheckoutError;
use crate::models::PaymentProof;

/// Prefill block for the checkout modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Configuration handed to the hosted checkout, mirroring the widget's
/// options object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOptions {
    /// Public gateway key id.
    pub key: String,
    /// Amount in minor units, as issued by the gateway session. The widget
    /// charges exactly this figure, never a client-computed one.
    pub amount: String,
    pub currency: String,
    /// Gateway order id binding the modal to the server-side order.
    pub order_id: String,
    pub name: String,
    pub description: String,
    pub prefill: CheckoutPrefill,
    pub theme_color: String,
}

/// What the hosted checkout reported back. Exactly one of these follows each
/// opened modal.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutEvent {
    /// The user completed payment; the gateway produced a signed proof.
    Completed(PaymentProof),
    /// The user closed the modal. Not a payment failure: no proof exists and
    /// the flow returns to idle.
    Dismissed,
}

/// Injected handle to the third-party hosted checkout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGatewayClient: Send + Sync {
    /// Whether the widget has finished loading and can open a modal.
    fn is_ready(&self) -> bool;

    /// Open the hosted modal once and wait for its single outcome. Errors
    /// mean the modal failed to open, not that the payment failed.
    async fn open_checkout(&self, options: CheckoutOptions)
        -> Result<CheckoutEvent, CheckoutError>;
}
