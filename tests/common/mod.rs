//! Shared harness for the integration tests: a scripted stand-in for the
//! hosted checkout widget and a notifier that records every toast.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use ratnam_storefront::checkout::{
    CheckoutEvent, CheckoutFlow, CheckoutOptions, NotificationSink, PaymentGatewayClient,
};
use ratnam_storefront::models::{CartItem, PaymentProof};
use ratnam_storefront::{CheckoutError, ClientConfig, StorefrontClient};

/// Gateway double that replays a queue of outcomes and records every options
/// object it was opened with.
pub struct ScriptedGateway {
    ready: bool,
    events: Mutex<VecDeque<Result<CheckoutEvent, CheckoutError>>>,
    opened: Mutex<Vec<CheckoutOptions>>,
}

impl ScriptedGateway {
    pub fn ready() -> Self {
        Self {
            ready: true,
            events: Mutex::new(VecDeque::new()),
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn not_loaded() -> Self {
        Self {
            ready: false,
            ..Self::ready()
        }
    }

    pub fn push_completed(&self, proof: PaymentProof) {
        self.events
            .lock()
            .unwrap()
            .push_back(Ok(CheckoutEvent::Completed(proof)));
    }

    pub fn push_dismissed(&self) {
        self.events
            .lock()
            .unwrap()
            .push_back(Ok(CheckoutEvent::Dismissed));
    }

    pub fn opened_options(&self) -> Vec<CheckoutOptions> {
        self.opened.lock().unwrap().clone()
    }

    pub fn open_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }
}

#[async_trait]
impl PaymentGatewayClient for ScriptedGateway {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn open_checkout(
        &self,
        options: CheckoutOptions,
    ) -> Result<CheckoutEvent, CheckoutError> {
        self.opened.lock().unwrap().push(options);
        self.events
            .lock()
            .unwrap()
            .pop_front()
            .expect("gateway opened with no scripted event")
    }
}

/// Notifier that records `(kind, message)` pairs.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(String, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn contains(&self, kind: &str, message: &str) -> bool {
        self.messages()
            .iter()
            .any(|(k, m)| k == kind && m == message)
    }

    fn record(&self, kind: &str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((kind.to_string(), message.to_string()));
    }
}

impl NotificationSink for RecordingNotifier {
    fn success(&self, message: &str) {
        self.record("success", message);
    }

    fn error(&self, message: &str) {
        self.record("error", message);
    }

    fn info(&self, message: &str) {
        self.record("info", message);
    }
}

/// A checkout flow wired to a wiremock backend and the given doubles.
pub fn flow(
    backend_uri: &str,
    gateway: Arc<ScriptedGateway>,
    notifier: Arc<RecordingNotifier>,
) -> CheckoutFlow {
    let config = ClientConfig::new(backend_uri, "rzp_test_key");
    let api = StorefrontClient::new(&config).expect("client should build");
    CheckoutFlow::new(api, gateway, notifier, &config)
}

pub fn proof_for(gateway_order_id: &str) -> PaymentProof {
    PaymentProof {
        razorpay_order_id: gateway_order_id.to_string(),
        razorpay_payment_id: "pay_29QQoUBi66xm2f".to_string(),
        razorpay_signature: "9ef4dffbfd84f1318f6739a3ce19f9d85851857ae648f114332d8401e0949a3d"
            .to_string(),
    }
}

/// Cart snapshot used across tests: qty 2 @ 500 plain plus qty 1 @ 1000 with
/// 10% off, totalling 1900 rupees.
pub fn sample_cart() -> Vec<CartItem> {
    serde_json::from_value(json!([
        {
            "_id": "c1",
            "productId": {"_id": "p1", "name": "Silver Anklet", "price": 500, "discount": 0},
            "quantity": 2
        },
        {
            "_id": "c2",
            "productId": {"_id": "p2", "name": "Gold Pendant", "price": 1000, "discount": 10},
            "quantity": 1
        }
    ]))
    .expect("cart fixture")
}
