//! Wire types for the storefront API.
//!
//! The backend speaks camelCase JSON with Mongo-style `_id` keys, and
//! populates references inconsistently: a product or user field may arrive as
//! a bare id string or as an embedded document. The untagged ref enums absorb
//! both shapes so callers never branch on wire details.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as embedded in carts and orders when the backend populates the
/// reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Unit price in rupees.
    pub price: Decimal,
    /// Discount percentage, 0 when absent.
    #[serde(default)]
    pub discount: u32,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProductSummary {
    /// Unit price with the product discount applied. Display math only; the
    /// actual charge always uses the gateway-returned amount.
    pub fn discounted_price(&self) -> Decimal {
        self.price - self.price * Decimal::from(self.discount) / Decimal::ONE_HUNDRED
    }
}

/// A full catalog product, as returned by the search and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Unit price in rupees.
    pub price: Decimal,
    /// Discount percentage, 0 when absent.
    #[serde(default)]
    pub discount: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub stock: Option<u32>,
}

/// Query parameters for catalog search. `None` fields stay off the wire.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ProductQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }
}

/// One page of catalog search results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub has_next_page: bool,
}

/// Pagination block carried in the search response's meta.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub has_next_page: bool,
}

/// Category tree used by the search filters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categories {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub sub_categories: Vec<String>,
}

/// A product reference that may or may not be populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Populated(ProductSummary),
    Id(String),
}

impl ProductRef {
    pub fn id(&self) -> &str {
        match self {
            ProductRef::Populated(product) => &product.id,
            ProductRef::Id(id) => id,
        }
    }

    pub fn summary(&self) -> Option<&ProductSummary> {
        match self {
            ProductRef::Populated(product) => Some(product),
            ProductRef::Id(_) => None,
        }
    }
}

/// One line of a cart or an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "productId")]
    pub product: ProductRef,
    pub quantity: u32,
}

/// Cart lines share the order line shape.
pub type CartItem = OrderItem;

/// One normalized line of an [`OrderIntent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentItem {
    pub product_id: String,
    pub quantity: u32,
}

/// Client-assembled, not-yet-persisted description of what the user wants to
/// buy and where to ship it. Built by the intent builder, consumed by order
/// creation, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIntent {
    pub products: Vec<IntentItem>,
    pub delivery_address: String,
}

/// Order payment states as observed by the client. The server owns the state
/// machine; `payment_failed` is the only state the retry path acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    PendingPayment,
    Paid,
    PaymentFailed,
    Shipped,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// Customer profile as embedded when the backend populates the user ref.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// A user reference that may or may not be populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Profile(CustomerProfile),
    Id(String),
}

impl UserRef {
    pub fn profile(&self) -> Option<&CustomerProfile> {
        match self {
            UserRef::Profile(profile) => Some(profile),
            UserRef::Id(_) => None,
        }
    }
}

/// Login credentials for the session endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The authenticated user's account, as returned by login and profile
/// fetches. Login embeds the saved cart so the client can seed its state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub cart: Vec<CartItem>,
}

/// Login payload under the data envelope: `{ "data": { "user": ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub user: UserAccount,
}

/// Server-owned order record, referenced by id. The client re-serializes this
/// snapshot verbatim into the verification request, so it keeps round-trip
/// fidelity for the fields it knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub products: Vec<OrderItem>,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub status: OrderStatus,
    /// Display only; the 3-attempt cap is enforced server-side.
    #[serde(default)]
    pub payment_attempts: u32,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Whether the retry path may act on this order. Reflects the
    /// server-reported status; no attempt counting happens client-side.
    pub fn is_retryable(&self) -> bool {
        self.status == OrderStatus::PaymentFailed
    }
}

/// Short-lived gateway handle bound to one server-side order, consumed by the
/// hosted checkout and then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewaySession {
    /// Gateway order id (`order_...`).
    pub id: String,
    /// Amount in minor currency units (paise), authoritative for the charge.
    pub amount: i64,
    pub currency: String,
}

/// Signed confirmation artifact produced by the hosted checkout on success.
/// Opaque to the client; forwarded verbatim to verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentProof {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// Outcome block returned by verification and carried in error envelopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Success envelope: `{ "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Meta envelope: `{ "meta": { "success", "message" } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaEnvelope {
    pub meta: Meta,
}

/// Payload of a successful order creation: the gateway handle plus the
/// authoritative order the backend persisted (prices and discounts resolved
/// server-side).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
    pub razorpay_order: GatewaySession,
    pub order_data: Order,
}

/// Payload of a successful payment retry: a fresh gateway handle against the
/// existing order record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetriedOrder {
    pub razorpay_order: GatewaySession,
    pub order: Order,
}

/// Verification request: the proof fields at the top level, the order
/// snapshot alongside.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyPaymentRequest {
    #[serde(flatten)]
    pub proof: PaymentProof,
    #[serde(rename = "orderData")]
    pub order_data: Order,
}
