//! Order and payment endpoints.

use tracing::{info, instrument};

use super::StorefrontClient;
use crate::errors::CheckoutError;
use crate::models::{
    CreatedOrder, DataEnvelope, Meta, MetaEnvelope, Order, OrderIntent, PaymentProof, RetriedOrder,
    VerifyPaymentRequest,
};

impl StorefrontClient {
    /// Create an order from an intent and obtain a gateway session for it.
    ///
    /// The returned order carries the backend's authoritative pricing; the
    /// client never charges its own price math.
    #[instrument(skip(self, intent), fields(lines = intent.products.len()))]
    pub async fn create_order(&self, intent: &OrderIntent) -> Result<CreatedOrder, CheckoutError> {
        let response = self.post("/order").json(intent).send().await?;
        let envelope: DataEnvelope<CreatedOrder> = self.expect_json(response).await?;
        info!(
            order_id = %envelope.data.order_data.id,
            gateway_order_id = %envelope.data.razorpay_order.id,
            "order created"
        );
        Ok(envelope.data)
    }

    /// Request a fresh gateway session for an existing failed order. Reuses
    /// the order record; the backend increments its own attempt counter.
    #[instrument(skip(self))]
    pub async fn retry_payment(&self, order_id: &str) -> Result<RetriedOrder, CheckoutError> {
        let response = self
            .get(&format!("/order/retry/{order_id}"))
            .send()
            .await?;
        let envelope: DataEnvelope<RetriedOrder> = self.expect_json(response).await?;
        info!(gateway_order_id = %envelope.data.razorpay_order.id, "payment retry session issued");
        Ok(envelope.data)
    }

    /// Submit a payment proof plus the order snapshot for authoritative
    /// verification. A `meta.success == false` answer is a logical failure
    /// (bad signature and the like), not a transport one.
    #[instrument(skip(self, proof, order), fields(order_id = %order.id))]
    pub async fn verify_payment(
        &self,
        proof: PaymentProof,
        order: Order,
    ) -> Result<Meta, CheckoutError> {
        let request = VerifyPaymentRequest {
            proof,
            order_data: order,
        };
        let response = self
            .post("/order/verify-payment")
            .json(&request)
            .send()
            .await?;
        let envelope: MetaEnvelope = self.expect_json(response).await?;
        Ok(envelope.meta)
    }

    /// Fetch an order by id, for the retry path and order detail views.
    #[instrument(skip(self))]
    pub async fn fetch_order(&self, order_id: &str) -> Result<Order, CheckoutError> {
        let response = self
            .get(&format!("/order/admin/order-by-id/{order_id}"))
            .send()
            .await?;
        let envelope: DataEnvelope<Order> = self.expect_json(response).await?;
        Ok(envelope.data)
    }

    /// List the authenticated user's orders, newest first.
    #[instrument(skip(self))]
    pub async fn user_orders(&self, page: u32, limit: u32) -> Result<Vec<Order>, CheckoutError> {
        let response = self
            .get("/order/user/orders")
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        let envelope: DataEnvelope<Vec<Order>> = self.expect_json(response).await?;
        Ok(envelope.data)
    }
}
