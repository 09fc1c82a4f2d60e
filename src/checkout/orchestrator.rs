//! Checkout flow orchestration.
//!
//! Drives one payment attempt end to end: intent → gateway session →
//! hosted checkout → verification, with the retry path re-entering the same
//! bridge and verifier against an existing failed order. Only one attempt may
//! be in flight at a time; every failure or cancellation returns the machine
//! to an interactive state.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::api::StorefrontClient;
use crate::checkout::gateway::{
    CheckoutEvent, CheckoutOptions, CheckoutPrefill, PaymentGatewayClient,
};
use crate::checkout::intent::OrderIntentBuilder;
use crate::checkout::notify::NotificationSink;
use crate::config::ClientConfig;
use crate::errors::CheckoutError;
use crate::models::{GatewaySession, Order, PaymentProof};

const PREFILL_NAME: &str = "Customer";
const PREFILL_EMAIL: &str = "customer@example.com";
const PREFILL_CONTACT: &str = "+919876543210";

/// Client-observed state of the current attempt.
///
/// ```text
/// Idle -> Initiating -> AwaitingGateway -> Verifying -> { Succeeded | Failed }
///                                        \-> (dismissed) -> Idle
/// ```
/// `Failed` is not a dead end; the retry path re-enters `Initiating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    Initiating,
    AwaitingGateway,
    Verifying,
    Succeeded,
    Failed,
}

/// Where an attempt ended up, so the view layer can navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Verification succeeded; navigate to order history.
    Paid { order_id: String },
    /// The backend answered but rejected the proof; the order stays failed
    /// and may be retried from order history.
    VerificationFailed { message: String },
    /// The user closed the modal; no proof was produced.
    Cancelled,
    /// The retry path could not start; navigate back to the order list.
    AbortedToOrders { message: String },
}

/// Orchestrates the order payment protocol over injected capabilities.
pub struct CheckoutFlow {
    api: StorefrontClient,
    gateway: Arc<dyn PaymentGatewayClient>,
    notifier: Arc<dyn NotificationSink>,
    key_id: String,
    merchant_name: String,
    description: String,
    theme_color: String,
    state: CheckoutState,
}

impl CheckoutFlow {
    pub fn new(
        api: StorefrontClient,
        gateway: Arc<dyn PaymentGatewayClient>,
        notifier: Arc<dyn NotificationSink>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            api,
            gateway,
            notifier,
            key_id: config.razorpay_key_id.clone(),
            merchant_name: config.merchant_name.clone(),
            description: config.checkout_description.clone(),
            theme_color: config.theme_color.clone(),
            state: CheckoutState::Idle,
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Whether an initiation, gateway session or verification call is
    /// outstanding. The pay action stays disabled while this holds.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self.state,
            CheckoutState::Initiating | CheckoutState::AwaitingGateway | CheckoutState::Verifying
        )
    }

    /// Fresh-order path: build the intent, create the order, then hand off to
    /// the hosted checkout and verification.
    #[instrument(skip(self, builder))]
    pub async fn pay(
        &mut self,
        builder: OrderIntentBuilder,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        self.guard_idle()?;

        let intent = match builder.build() {
            Ok(intent) => intent,
            Err(e) => {
                self.notifier.error("Invalid order details");
                return Err(e);
            }
        };

        self.state = CheckoutState::Initiating;
        let created = match self.api.create_order(&intent).await {
            Ok(created) => created,
            Err(e) => {
                warn!(error = %e, "order creation failed");
                self.notifier
                    .error(e.server_message().unwrap_or("Failed to initiate payment"));
                self.state = CheckoutState::Idle;
                return Err(e);
            }
        };

        self.open_gateway(created.razorpay_order, created.order_data)
            .await
    }

    /// Retry path: fetch the failed order, request a fresh gateway session
    /// against the same record, then rejoin the bridge and verifier.
    #[instrument(skip(self))]
    pub async fn retry(&mut self, order_id: &str) -> Result<CheckoutOutcome, CheckoutError> {
        self.guard_idle()?;
        self.state = CheckoutState::Initiating;

        let order = match self.api.fetch_order(order_id).await {
            Ok(order) => order,
            Err(e) => {
                warn!(error = %e, "could not load order for retry");
                self.notifier.error("Failed to load order details");
                self.state = CheckoutState::Idle;
                return Ok(CheckoutOutcome::AbortedToOrders {
                    message: e.user_message(),
                });
            }
        };

        if !order.is_retryable() {
            let message = CheckoutError::NotRetryable(order.id.clone()).to_string();
            self.notifier.error(&message);
            self.state = CheckoutState::Idle;
            return Ok(CheckoutOutcome::AbortedToOrders { message });
        }

        let retried = match self.api.retry_payment(order_id).await {
            Ok(retried) => retried,
            Err(e) => {
                warn!(error = %e, "payment retry refused");
                self.notifier
                    .error(e.server_message().unwrap_or("Payment retry failed"));
                self.state = CheckoutState::Idle;
                return Err(e);
            }
        };

        self.open_gateway(retried.razorpay_order, retried.order).await
    }

    fn guard_idle(&self) -> Result<(), CheckoutError> {
        if self.is_in_flight() {
            return Err(CheckoutError::AttemptInFlight);
        }
        Ok(())
    }

    /// Bridge to the hosted checkout: one modal, one outcome.
    async fn open_gateway(
        &mut self,
        session: GatewaySession,
        order: Order,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        if !self.gateway.is_ready() {
            self.notifier
                .error("Payment gateway failed to load. Please refresh the page.");
            self.state = CheckoutState::Idle;
            return Err(CheckoutError::GatewayUnavailable(
                "checkout widget not loaded".into(),
            ));
        }

        self.state = CheckoutState::AwaitingGateway;
        let options = self.checkout_options(&session, &order);

        match self.gateway.open_checkout(options).await {
            Ok(CheckoutEvent::Completed(proof)) => {
                self.state = CheckoutState::Verifying;
                self.verify(proof, order).await
            }
            Ok(CheckoutEvent::Dismissed) => {
                // Cancellation, not failure: no proof exists and the user may
                // click pay again.
                info!(order_id = %order.id, "checkout modal dismissed");
                self.notifier.info("Payment window closed");
                self.state = CheckoutState::Idle;
                Ok(CheckoutOutcome::Cancelled)
            }
            Err(e) => {
                error!(error = %e, "failed to open checkout modal");
                self.notifier
                    .error("Failed to open payment gateway. Please try again.");
                self.state = CheckoutState::Idle;
                Err(e)
            }
        }
    }

    /// Submit the proof for authoritative verification and settle the
    /// attempt.
    async fn verify(
        &mut self,
        proof: PaymentProof,
        order: Order,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        let order_id = order.id.clone();
        match self.api.verify_payment(proof, order).await {
            Ok(meta) if meta.success => {
                info!(%order_id, "payment verified");
                self.notifier.success("Payment Successful!");
                self.state = CheckoutState::Succeeded;
                Ok(CheckoutOutcome::Paid { order_id })
            }
            Ok(meta) => {
                let message = meta
                    .message
                    .unwrap_or_else(|| "Payment verification failed".to_string());
                warn!(%order_id, %message, "payment verification rejected");
                self.notifier.error(&message);
                self.state = CheckoutState::Failed;
                Ok(CheckoutOutcome::VerificationFailed { message })
            }
            Err(e) => {
                // The payment may have succeeded on the gateway side while
                // this call was lost; the backend reconciles through the
                // gateway webhook. The client only returns to an interactive
                // state.
                error!(%order_id, error = %e, "payment verification transport failure");
                self.notifier.error("Error verifying payment");
                self.state = CheckoutState::Idle;
                Err(e)
            }
        }
    }

    fn checkout_options(&self, session: &GatewaySession, order: &Order) -> CheckoutOptions {
        let profile = order.customer.as_ref().and_then(|user| user.profile());
        let prefill = CheckoutPrefill {
            name: profile
                .and_then(|p| p.name.clone())
                .unwrap_or_else(|| PREFILL_NAME.to_string()),
            email: profile
                .and_then(|p| p.email.clone())
                .unwrap_or_else(|| PREFILL_EMAIL.to_string()),
            contact: profile
                .and_then(|p| p.phone_number.clone())
                .unwrap_or_else(|| PREFILL_CONTACT.to_string()),
        };

        CheckoutOptions {
            key: self.key_id.clone(),
            // The gateway session's figure, never the client-computed total.
            amount: session.amount.to_string(),
            currency: session.currency.clone(),
            order_id: session.id.clone(),
            name: self.merchant_name.clone(),
            description: self.description.clone(),
            prefill,
            theme_color: self.theme_color.clone(),
        }
    }

    #[cfg(test)]
    fn set_state(&mut self, state: CheckoutState) {
        self.state = state;
    }
}
