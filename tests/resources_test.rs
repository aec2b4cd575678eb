use cafe_client::{
    AddToCart, ApiClient, Backoff, CategoryFields, FilePart, NewOrder, NewOrderItem, OrderFromCart, OrderStatus,
    RetryPolicy,
};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.url("/api"))
        .unwrap()
        .with_retry_policy(RetryPolicy::default().with_backoff(Backoff::None))
        .with_timeout(Duration::from_secs(2))
}

async fn mock_csrf(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/csrf/");
            then.status(200)
                .header("Set-Cookie", "csrftoken=cookie-half; Path=/")
                .json_body(json!({"csrfToken": "tok"}));
        })
        .await;
}

#[tokio::test]
async fn test_get_categories_unwraps_envelope_in_order() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/categories/");
            then.status(200).json_body(json!({
                "count": 2,
                "next": null,
                "results": [
                    {"id": 2, "name": "Rolls", "name_uz": "Rollar", "name_ru": "Роллы", "icon": "🍣", "image": null},
                    {"id": 1, "name": "Soups", "name_uz": "Sho'rvalar", "name_ru": "Супы", "icon": null}
                ]
            }));
        })
        .await;

    let categories = client(&server).get_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, 2);
    assert_eq!(categories[1].name_ru, "Супы");
    assert_eq!(categories[1].icon, "");
    assert!(categories.iter().all(|c| c.is_active));
}

#[tokio::test]
async fn test_get_menu_items_accepts_both_shapes() {
    let item = json!({
        "id": 7,
        "name": "Tonkotsu ramen",
        "price": "52000.00",
        "weight": "450.00",
        "category": 1,
        "ingredients": ["noodles", "pork"],
        "ingredients_uz": null
    });

    let bare = MockServer::start_async().await;
    bare.mock_async(|when, then| {
        when.method(GET).path("/api/menu-items/").query_param("show_all", "true");
        then.status(200).json_body(json!([item.clone()]));
    })
    .await;

    let wrapped = MockServer::start_async().await;
    wrapped
        .mock_async(|when, then| {
            when.method(GET).path("/api/menu-items/").query_param("show_all", "true");
            then.status(200).json_body(json!({"results": [item.clone()]}));
        })
        .await;

    let from_bare = client(&bare).get_menu_items().await.unwrap();
    let from_envelope = client(&wrapped).get_menu_items().await.unwrap();
    assert_eq!(from_bare, from_envelope);
    assert_eq!(from_bare[0].price, 52000.0);
    assert_eq!(from_bare[0].weight, Some(450.0));
    assert_eq!(from_bare[0].ingredients, vec!["noodles", "pork"]);
    assert!(from_bare[0].ingredients_uz.is_empty());
}

#[tokio::test]
async fn test_search_passes_query_and_category() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/search/")
                .query_param("q", "green tea")
                .query_param("category", "3");
            then.status(200).json_body(json!([]));
        })
        .await;

    let items = client(&server).search_menu_items("green tea", Some(3)).await.unwrap();
    assert!(items.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_category_with_image_is_multipart() {
    let server = MockServer::start_async().await;
    mock_csrf(&server).await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/categories/")
                .header("x-csrftoken", "tok")
                .header_exists("content-type")
                .body_contains("form-data; name=\"name_uz\"")
                .body_contains("Choy")
                .body_contains("filename=\"tea.png\"")
                .body_contains("PNGBYTES");
            then.status(201).json_body(json!({
                "id": 9,
                "name": "Tea",
                "name_uz": "Choy",
                "name_ru": "Чай",
                "icon": "🍵",
                "image": "/media/categories/tea.png"
            }));
        })
        .await;

    let fields = CategoryFields {
        name: Some("Tea".to_string()),
        name_uz: Some("Choy".to_string()),
        name_ru: Some("Чай".to_string()),
        icon: Some("🍵".to_string()),
        ..CategoryFields::default()
    };
    let image = FilePart::new("upload", "tea.png", b"PNGBYTES".to_vec());

    let category = client(&server).create_category(&fields, Some(image)).await.unwrap();
    create.assert_async().await;
    assert_eq!(category.id, 9);
    assert_eq!(category.image.as_deref(), Some("/media/categories/tea.png"));
}

#[tokio::test]
async fn test_create_order_posts_json() {
    let server = MockServer::start_async().await;
    mock_csrf(&server).await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/orders/")
                .header("content-type", "application/json")
                .header("cookie", "csrftoken=cookie-half")
                .json_body(json!({
                    "table_number": 4,
                    "customer_name": "Dilnoza",
                    "items": [{"menu_item": 7, "quantity": 2}]
                }));
            then.status(201).json_body(json!({
                "id": 31,
                "table_number": 4,
                "customer_name": "Dilnoza",
                "total": 104000,
                "status": "pending",
                "items": [{
                    "id": 1,
                    "menu_item": 7,
                    "menu_item_name": "Tonkotsu ramen",
                    "quantity": 2,
                    "price": "52000.00",
                    "total_price": "104000.00"
                }]
            }));
        })
        .await;

    let order = client(&server)
        .create_order(&NewOrder {
            table_number: 4,
            customer_name: Some("Dilnoza".to_string()),
            notes: None,
            items: vec![NewOrderItem {
                menu_item: 7,
                quantity: 2,
                notes: None,
            }],
        })
        .await
        .unwrap();

    create.assert_async().await;
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items[0].total_price, 104000.0);
}

#[tokio::test]
async fn test_missing_cart_becomes_empty_cart() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/cart/");
            then.status(404).json_body(json!({"detail": "Not found."}));
        })
        .await;

    let cart = client(&server).get_cart().await.unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.total_price, 0.0);
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn test_cart_flow() {
    let server = MockServer::start_async().await;
    mock_csrf(&server).await;
    let add = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/cart/add/")
                .header("x-csrftoken", "tok")
                .json_body(json!({"menu_item_id": 7, "quantity": 1, "notes": "extra egg"}));
            then.status(200).json_body(json!({
                "id": 12,
                "session_key": "abc",
                "total_items": 1,
                "total_price": "52000.00",
                "items": [{
                    "id": 100,
                    "menu_item": 7,
                    "menu_item_name": "Tonkotsu ramen",
                    "menu_item_price": "52000.00",
                    "quantity": 1,
                    "notes": "extra egg",
                    "price": "52000.00",
                    "total_price": "52000.00"
                }]
            }));
        })
        .await;
    let checkout = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/cart/order/")
                .json_body(json!({"table_number": 6}));
            then.status(201).json_body(json!({
                "id": 40,
                "table_number": 6,
                "total": "52000.00",
                "status": "pending"
            }));
        })
        .await;
    let clear = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/cart/");
            then.status(200).json_body(json!({"message": "Cart cleared"}));
        })
        .await;

    let c = client(&server);
    let cart = c
        .add_to_cart(&AddToCart {
            menu_item_id: 7,
            quantity: 1,
            notes: Some("extra egg".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(cart.total_items, 1);
    assert_eq!(cart.items[0].menu_item_price, 52000.0);

    let order = c
        .create_order_from_cart(&OrderFromCart {
            table_number: 6,
            customer_name: None,
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(order.id, 40);
    assert!(order.items.is_empty());

    let message = c.clear_session_cart().await.unwrap();
    assert_eq!(message.message, "Cart cleared");

    add.assert_async().await;
    checkout.assert_async().await;
    clear.assert_async().await;
}

#[tokio::test]
async fn test_text_content_by_type_encodes_segment() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/text-content/type/hero/");
            then.status(200).json_body(json!([
                {"id": 1, "content_type": "hero", "key": "main", "title": "Welcome", "title_uz": null}
            ]));
        })
        .await;

    let blocks = client(&server).get_text_content_by_type("hero").await.unwrap();
    mock.assert_async().await;
    assert_eq!(blocks[0].title.as_deref(), Some("Welcome"));
    assert!(blocks[0].is_active);
}

#[tokio::test]
async fn test_admin_clear_all_carts_ignores_body() {
    let server = MockServer::start_async().await;
    mock_csrf(&server).await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/admin/carts/");
            then.status(200).body("Deleted 3 carts");
        })
        .await;

    client(&server).admin_clear_all_carts().await.unwrap();
    mock.assert_async().await;
}
