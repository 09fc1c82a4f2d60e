//! Integration tests for the REST client: envelope handling, error-message
//! extraction, and the cart/order endpoints.

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ratnam_storefront::models::{Credentials, OrderIntent, OrderStatus, ProductQuery};
use ratnam_storefront::{CheckoutError, ClientConfig, StorefrontClient};

fn client(uri: &str) -> StorefrontClient {
    StorefrontClient::new(&ClientConfig::new(uri, "rzp_test_key")).expect("client should build")
}

fn sample_intent() -> OrderIntent {
    serde_json::from_value(json!({
        "products": [{"productId": "p1", "quantity": 2}],
        "deliveryAddress": "12 MG Road, Bengaluru"
    }))
    .expect("intent fixture")
}

#[tokio::test]
async fn create_order_unwraps_the_data_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/order"))
        .and(body_json(json!({
            "products": [{"productId": "p1", "quantity": 2}],
            "deliveryAddress": "12 MG Road, Bengaluru"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "razorpayOrder": {"id": "order_X1", "amount": 100000, "currency": "INR"},
                "orderData": {"_id": "o1", "status": "pending_payment"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server.uri())
        .create_order(&sample_intent())
        .await
        .unwrap();
    assert_eq!(created.razorpay_order.id, "order_X1");
    assert_eq!(created.razorpay_order.amount, 100000);
    assert_eq!(created.order_data.status, OrderStatus::PendingPayment);
}

#[tokio::test]
async fn backend_error_message_is_extracted_from_meta() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/order"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "meta": {"success": false, "message": "Cart is empty"}
        })))
        .mount(&server)
        .await;

    let err = client(&server.uri())
        .create_order(&sample_intent())
        .await
        .unwrap_err();
    assert_matches!(
        err,
        CheckoutError::Api { status: 400, ref message } if message == "Cart is empty"
    );
    assert_eq!(err.server_message(), Some("Cart is empty"));
}

#[tokio::test]
async fn non_envelope_error_falls_back_to_status_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/order/admin/order-by-id/o1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client(&server.uri()).fetch_order("o1").await.unwrap_err();
    assert_matches!(
        err,
        CheckoutError::Api { status: 503, ref message }
            if message == "Request failed: Service Unavailable"
    );
}

#[tokio::test]
async fn cart_items_parse_populated_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "_id": "c1",
                    "productId": {"_id": "p1", "name": "Silver Anklet", "price": 500, "discount": 10},
                    "quantity": 2
                }
            ]
        })))
        .mount(&server)
        .await;

    let items = client(&server.uri()).cart_items().await.unwrap();
    assert_eq!(items.len(), 1);
    let product = items[0].product.summary().expect("populated product");
    assert_eq!(product.discounted_price(), dec!(450));
}

#[tokio::test]
async fn cart_mutations_return_the_meta_block() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/cart"))
        .and(body_json(json!({"productId": "p1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"success": true, "message": "Added to cart"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/user/cart"))
        .and(body_json(json!({"productId": "p1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"success": true, "message": "Item removed from cart"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server.uri());
    let added = api.add_to_cart("p1").await.unwrap();
    assert_eq!(added.message.as_deref(), Some("Added to cart"));

    let removed = api.remove_from_cart("p1").await.unwrap();
    assert!(removed.success);
}

#[tokio::test]
async fn user_orders_pass_pagination_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/order/user/orders"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"_id": "o1", "status": "paid"},
                {"_id": "o2", "status": "payment_failed", "paymentAttempts": 2}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orders = client(&server.uri()).user_orders(2, 5).await.unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders[1].is_retryable());
}

#[tokio::test]
async fn login_establishes_a_session_for_later_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/login"))
        .and(body_json(json!({
            "email": "asha@example.com",
            "password": "hunter2"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=s3cr3t; Path=/; HttpOnly")
                .set_body_json(json!({
                    "data": {
                        "user": {
                            "_id": "u1",
                            "name": "Asha",
                            "email": "asha@example.com",
                            "cart": [{"productId": "p1", "quantity": 1}]
                        }
                    },
                    "meta": {"success": true, "message": "Logged in"}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/cart"))
        .and(header("cookie", "session=s3cr3t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server.uri());
    let user = api
        .login(&Credentials {
            email: "asha@example.com".into(),
            password: "hunter2".into(),
        })
        .await
        .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.cart.len(), 1);

    // The session cookie from login must ride on the next request.
    let items = api.cart_items().await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn logout_returns_the_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"success": true, "message": "Logged out"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let meta = client(&server.uri()).logout().await.unwrap();
    assert_eq!(meta.message.as_deref(), Some("Logged out"));
}

#[tokio::test]
async fn profile_parses_the_account() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "_id": "u1",
                "name": "Asha",
                "phoneNumber": "+919812345678",
                "address": "12 MG Road, Bengaluru"
            }
        })))
        .mount(&server)
        .await;

    let user = client(&server.uri()).profile().await.unwrap();
    assert_eq!(user.phone_number.as_deref(), Some("+919812345678"));
    assert!(user.cart.is_empty());
}

#[tokio::test]
async fn product_search_passes_filters_and_reads_page_meta() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product/search"))
        .and(query_param("name", "anklet"))
        .and(query_param("category", "Silver"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"_id": "p1", "name": "Silver Anklet", "price": 500, "discount": 10},
                {"_id": "p2", "name": "Silver Chain", "price": 900}
            ],
            "meta": {"success": true, "hasNextPage": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ProductQuery {
        name: Some("anklet".into()),
        category: Some("Silver".into()),
        ..ProductQuery::page(1)
    };
    let page = client(&server.uri()).search_products(&query).await.unwrap();
    assert_eq!(page.products.len(), 2);
    assert_eq!(page.products[0].price, dec!(500));
    assert!(page.has_next_page);
}

#[tokio::test]
async fn product_search_without_meta_means_last_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product/search"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let page = client(&server.uri())
        .search_products(&ProductQuery::page(3))
        .await
        .unwrap();
    assert!(page.products.is_empty());
    assert!(!page.has_next_page);
}

#[tokio::test]
async fn product_by_id_posts_the_id_and_unwraps_the_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/product/product-by-id"))
        .and(body_json(json!({"id": "p1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "_id": "p1",
                "name": "Silver Anklet",
                "price": 500,
                "discount": 10,
                "description": "Handcrafted",
                "category": "Silver",
                "stock": 7
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product = client(&server.uri()).product_by_id("p1").await.unwrap();
    assert_eq!(product.name, "Silver Anklet");
    assert_eq!(product.stock, Some(7));
}

#[tokio::test]
async fn categories_parse_both_lists() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product/get-categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "categories": ["Silver", "Gold"],
                "subCategories": ["Anklets", "Chains"]
            }
        })))
        .mount(&server)
        .await;

    let categories = client(&server.uri()).categories().await.unwrap();
    assert_eq!(categories.categories, vec!["Silver", "Gold"]);
    assert_eq!(categories.sub_categories, vec!["Anklets", "Chains"]);
}
