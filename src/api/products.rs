//! Product catalog endpoints (read side).

use tracing::instrument;

use super::StorefrontClient;
use crate::errors::CheckoutError;
use crate::models::{Categories, DataEnvelope, PageMeta, Product, ProductPage, ProductQuery};

use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    data: Vec<Product>,
    #[serde(default)]
    meta: Option<PageMeta>,
}

impl StorefrontClient {
    /// Search the catalog. Pagination rides on `page`/`limit`; a missing
    /// `meta.hasNextPage` means the listing is exhausted.
    #[instrument(skip(self, query), fields(page = query.page))]
    pub async fn search_products(
        &self,
        query: &ProductQuery,
    ) -> Result<ProductPage, CheckoutError> {
        let response = self
            .get("/product/search")
            .query(query)
            .send()
            .await?;
        let envelope: SearchEnvelope = self.expect_json(response).await?;
        Ok(ProductPage {
            products: envelope.data,
            has_next_page: envelope.meta.unwrap_or_default().has_next_page,
        })
    }

    /// Fetch one product with its full detail.
    #[instrument(skip(self))]
    pub async fn product_by_id(&self, product_id: &str) -> Result<Product, CheckoutError> {
        let response = self
            .post("/product/product-by-id")
            .json(&json!({ "id": product_id }))
            .send()
            .await?;
        let envelope: DataEnvelope<Product> = self.expect_json(response).await?;
        Ok(envelope.data)
    }

    /// Fetch the category tree backing the search filters.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Categories, CheckoutError> {
        let response = self.get("/product/get-categories").send().await?;
        let envelope: DataEnvelope<Categories> = self.expect_json(response).await?;
        Ok(envelope.data)
    }
}
