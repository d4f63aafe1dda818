mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{create_ad, create_test_app, laptop_ad, publish, sign_up};

fn bike_ad(city: &str, price: u32) -> Value {
    json!({
        "title": "Road bike",
        "description": "Carbon road bike, 54cm frame, recently serviced",
        "price": price,
        "city": city,
        "postalCode": "69001",
        "category": "sports"
    })
}

#[tokio::test]
async fn test_search_only_returns_published_ads() {
    let app = create_test_app();
    let (token, _) = sign_up(&app.server, "seller@example.com").await;
    create_ad(&app.server, &token, laptop_ad()).await;
    let live = create_ad(&app.server, &token, laptop_ad()).await;
    publish(&app.server, &token, live).await;

    let response = app
        .server
        .get("/api/v1/search")
        .add_query_param("keyword", "laptop")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total"], 1);
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 20);
    assert_eq!(json["totalPages"], 1);
    assert_eq!(json["ads"][0]["id"], live.to_string());
}

#[tokio::test]
async fn test_search_filters_and_paginates() {
    let app = create_test_app();
    let (token, _) = sign_up(&app.server, "seller@example.com").await;
    for price in [100, 200, 300] {
        let id = create_ad(&app.server, &token, bike_ad("Lyon", price)).await;
        publish(&app.server, &token, id).await;
    }
    let paris = create_ad(&app.server, &token, bike_ad("Paris", 150)).await;
    publish(&app.server, &token, paris).await;

    let json = app
        .server
        .get("/api/v1/search?category=sports&city=lyon&minPrice=150&page=1&limit=1")
        .await
        .json::<Value>();

    assert_eq!(json["total"], 2);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["ads"].as_array().unwrap().len(), 1);
    assert_eq!(json["ads"][0]["location"]["city"], "Lyon");
}

#[tokio::test]
async fn test_search_empty_price_bounds_are_ignored() {
    let app = create_test_app();
    let (token, _) = sign_up(&app.server, "seller@example.com").await;
    let id = create_ad(&app.server, &token, laptop_ad()).await;
    publish(&app.server, &token, id).await;

    let response = app.server.get("/api/v1/search?minPrice=&maxPrice=").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["total"], 1);
}

#[tokio::test]
async fn test_search_rejects_invalid_params() {
    let app = create_test_app();

    app.server
        .get("/api/v1/search?minPrice=500&maxPrice=100")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    app.server
        .get("/api/v1/search?minPrice=-1")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    app.server
        .get("/api/v1/search?category=spaceships")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(app.search.calls(), 0);
}

#[tokio::test]
async fn test_search_limit_is_clamped() {
    let app = create_test_app();

    let json = app
        .server
        .get("/api/v1/search?limit=500&page=0")
        .await
        .json::<Value>();

    assert_eq!(json["limit"], 100);
    assert_eq!(json["page"], 1);
}

#[tokio::test]
async fn test_repeated_search_is_served_from_cache() {
    let app = create_test_app();
    let (token, _) = sign_up(&app.server, "seller@example.com").await;
    let id = create_ad(&app.server, &token, laptop_ad()).await;
    publish(&app.server, &token, id).await;

    let first = app
        .server
        .get("/api/v1/search?keyword=Laptop")
        .await
        .json::<Value>();
    let second = app
        .server
        .get("/api/v1/search?keyword=laptop")
        .await
        .json::<Value>();

    assert_eq!(first, second);
    assert_eq!(app.search.calls(), 1);
}

#[tokio::test]
async fn test_publish_invalidates_cached_results() {
    let app = create_test_app();
    let (token, _) = sign_up(&app.server, "seller@example.com").await;
    let first = create_ad(&app.server, &token, laptop_ad()).await;
    publish(&app.server, &token, first).await;

    let before = app
        .server
        .get("/api/v1/search?keyword=laptop")
        .await
        .json::<Value>();
    assert_eq!(before["total"], 1);

    let second = create_ad(&app.server, &token, laptop_ad()).await;
    publish(&app.server, &token, second).await;

    let after = app
        .server
        .get("/api/v1/search?keyword=laptop")
        .await
        .json::<Value>();
    assert_eq!(after["total"], 2);
    assert_eq!(app.search.calls(), 2);
}

#[tokio::test]
async fn test_sold_ad_drops_out_of_search() {
    let app = create_test_app();
    let (token, _) = sign_up(&app.server, "seller@example.com").await;
    let id = create_ad(&app.server, &token, laptop_ad()).await;
    publish(&app.server, &token, id).await;
    assert_eq!(
        app.server.get("/api/v1/search").await.json::<Value>()["total"],
        1
    );

    app.server
        .patch(&format!("/api/v1/ads/{id}/sold"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    let json = app.server.get("/api/v1/search").await.json::<Value>();
    assert_eq!(json["total"], 0);
    assert_eq!(json["totalPages"], 0);
}
