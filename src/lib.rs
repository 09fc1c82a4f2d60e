//! Ratnam Storefront client
//!
//! Typed REST client for the storefront backend plus the order/payment
//! checkout orchestration: order creation, hand-off to the hosted payment
//! gateway, payment verification, and retry of previously failed payments.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod api;
pub mod checkout;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;

pub use api::StorefrontClient;
pub use checkout::{
    CheckoutFlow, CheckoutOutcome, CheckoutState, NotificationSink, OrderIntentBuilder,
    PaymentGatewayClient, TracingNotifier,
};
pub use config::ClientConfig;
pub use errors::CheckoutError;
