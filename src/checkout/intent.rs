//! Order intent assembly.
//!
//! A pure transform from a cart snapshot or an existing order into the
//! normalized payload order creation expects. Quantities are validated
//! upstream by the cart editing surface; the builder only refuses to proceed
//! on an empty line-up or a zero display total.

use rust_decimal::Decimal;

use crate::errors::CheckoutError;
use crate::models::{IntentItem, Order, OrderIntent, OrderItem};

/// Placeholder used when no address reaches the fresh checkout path.
const FALLBACK_ADDRESS: &str = "Sample address";

const EMPTY_ORDER_MESSAGE: &str = "Invalid order details";

/// Builds an [`OrderIntent`] from either source the checkout flow supports.
#[derive(Debug, Clone)]
pub struct OrderIntentBuilder {
    items: Vec<OrderItem>,
    delivery_address: Option<String>,
}

impl OrderIntentBuilder {
    /// Start from a cart snapshot with populated product pricing.
    pub fn from_cart(items: Vec<OrderItem>) -> Self {
        Self {
            items,
            delivery_address: None,
        }
    }

    /// Start from an existing order; the delivery address comes from the
    /// order record, not re-entered.
    pub fn from_order(order: &Order) -> Self {
        Self {
            items: order.products.clone(),
            delivery_address: Some(order.delivery_address.clone()),
        }
    }

    /// Set the delivery address for the fresh-order path.
    pub fn delivery_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = Some(address.into());
        self
    }

    /// Total in rupees with product discounts applied.
    ///
    /// Display only: unpopulated product refs contribute zero, and the actual
    /// charge always uses the gateway-returned amount.
    pub fn display_total(&self) -> Decimal {
        self.items
            .iter()
            .filter_map(|item| {
                item.product
                    .summary()
                    .map(|product| Decimal::from(item.quantity) * product.discounted_price())
            })
            .sum()
    }

    /// Produce the normalized intent, refusing empty or zero-total orders
    /// before any network call happens.
    pub fn build(self) -> Result<OrderIntent, CheckoutError> {
        if self.items.is_empty() || self.display_total() == Decimal::ZERO {
            return Err(CheckoutError::InvalidOrder(EMPTY_ORDER_MESSAGE.into()));
        }

        let products = self
            .items
            .iter()
            .map(|item| IntentItem {
                product_id: item.product.id().to_string(),
                quantity: item.quantity,
            })
            .collect();

        let delivery_address = self
            .delivery_address
            .filter(|address| !address.is_empty())
            .unwrap_or_else(|| FALLBACK_ADDRESS.to_string());

        Ok(OrderIntent {
            products,
            delivery_address,
        })
    }
}
