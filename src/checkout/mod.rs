//! Order payment orchestration.
//!
//! The protocol: build an order intent, create the order (or retry an
//! existing failed one) to obtain a gateway session, open the hosted
//! checkout exactly once, and submit the resulting proof for authoritative
//! verification. The backend owns all money math and state transitions; this
//! module owns the call sequencing and failure handling.

pub mod gateway;
pub mod intent;
pub mod notify;
pub mod orchestrator;

pub use gateway::{CheckoutEvent, CheckoutOptions, CheckoutPrefill, PaymentGatewayClient};
pub use intent::OrderIntentBuilder;
pub use notify::{NotificationSink, TracingNotifier};
pub use orchestrator::{CheckoutFlow, CheckoutOutcome, CheckoutState};
