//! Shopping cart endpoints.

use serde_json::json;
use tracing::instrument;

use super::StorefrontClient;
use crate::errors::CheckoutError;
use crate::models::{CartItem, DataEnvelope, Meta, MetaEnvelope};

impl StorefrontClient {
    /// Fetch the authenticated user's cart with populated product pricing,
    /// ready to feed the intent builder.
    #[instrument(skip(self))]
    pub async fn cart_items(&self) -> Result<Vec<CartItem>, CheckoutError> {
        let response = self.get("/user/cart").send().await?;
        let envelope: DataEnvelope<Vec<CartItem>> = self.expect_json(response).await?;
        Ok(envelope.data)
    }

    /// Add a product to the cart (quantity edits happen client-side before
    /// checkout).
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, product_id: &str) -> Result<Meta, CheckoutError> {
        let response = self
            .post("/user/cart")
            .json(&json!({ "productId": product_id }))
            .send()
            .await?;
        let envelope: MetaEnvelope = self.expect_json(response).await?;
        Ok(envelope.meta)
    }

    /// Remove a product from the cart.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, product_id: &str) -> Result<Meta, CheckoutError> {
        let response = self
            .delete("/user/cart")
            .json(&json!({ "productId": product_id }))
            .send()
            .await?;
        let envelope: MetaEnvelope = self.expect_json(response).await?;
        Ok(envelope.meta)
    }
}
