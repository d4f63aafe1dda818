mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use classifieds::domain::entities::AdStatus;
use common::{create_ad, create_test_app, laptop_ad, publish, sign_up};

#[tokio::test]
async fn test_create_ad_starts_as_draft() {
    let app = create_test_app();
    let (token, seller_id) = sign_up(&app.server, "seller@example.com").await;

    let response = app
        .server
        .post("/api/v1/ads")
        .authorization_bearer(&token)
        .json(&laptop_ad())
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["status"], "DRAFT");
    assert_eq!(json["sellerId"], seller_id.to_string());
    assert_eq!(json["price"]["currency"], "EUR");
    assert_eq!(json["location"]["country"], "France");
    assert_eq!(json["category"], "electronics");
}

#[tokio::test]
async fn test_create_ad_rejects_short_title() {
    let app = create_test_app();
    let (token, _) = sign_up(&app.server, "seller@example.com").await;
    let mut body = laptop_ad();
    body["title"] = json!("Hi");

    app.server
        .post("/api/v1/ads")
        .authorization_bearer(&token)
        .json(&body)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_publish_then_sell_lifecycle() {
    let app = create_test_app();
    let (token, _) = sign_up(&app.server, "seller@example.com").await;
    let id = create_ad(&app.server, &token, laptop_ad()).await;

    publish(&app.server, &token, id).await;
    assert_eq!(app.ads.stored(id).unwrap().status(), AdStatus::Published);

    let sold = app
        .server
        .patch(&format!("/api/v1/ads/{id}/sold"))
        .authorization_bearer(&token)
        .await;
    sold.assert_status_ok();
    assert_eq!(sold.json::<Value>()["status"], "SOLD");

    let stored = app.ads.stored(id).unwrap();
    assert_eq!(stored.status(), AdStatus::Sold);
    assert_eq!(stored.version(), 3);
}

#[tokio::test]
async fn test_publish_twice_is_rejected() {
    let app = create_test_app();
    let (token, _) = sign_up(&app.server, "seller@example.com").await;
    let id = create_ad(&app.server, &token, laptop_ad()).await;
    publish(&app.server, &token, id).await;

    let response = app
        .server
        .patch(&format!("/api/v1/ads/{id}/publish"))
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Only draft ads can be published"
    );
}

#[tokio::test]
async fn test_only_owner_can_change_ad() {
    let app = create_test_app();
    let (owner, _) = sign_up(&app.server, "seller@example.com").await;
    let (stranger, _) = sign_up(&app.server, "other@example.com").await;
    let id = create_ad(&app.server, &owner, laptop_ad()).await;

    app.server
        .patch(&format!("/api/v1/ads/{id}/publish"))
        .authorization_bearer(&stranger)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    app.server
        .patch(&format!("/api/v1/ads/{id}"))
        .authorization_bearer(&stranger)
        .json(&json!({ "title": "Stolen laptop" }))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    assert_eq!(app.ads.stored(id).unwrap().version(), 1);
}

#[tokio::test]
async fn test_update_ad_partial_fields() {
    let app = create_test_app();
    let (token, _) = sign_up(&app.server, "seller@example.com").await;
    let id = create_ad(&app.server, &token, laptop_ad()).await;

    let response = app
        .server
        .patch(&format!("/api/v1/ads/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "price": 1200, "city": "Lyon", "postalCode": "69001" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["price"]["amount"], 1200.0);
    assert_eq!(json["price"]["currency"], "EUR");
    assert_eq!(json["location"]["city"], "Lyon");
    assert_eq!(json["title"], "Gaming Laptop");
}

#[tokio::test]
async fn test_update_sold_ad_is_rejected() {
    let app = create_test_app();
    let (token, _) = sign_up(&app.server, "seller@example.com").await;
    let id = create_ad(&app.server, &token, laptop_ad()).await;
    publish(&app.server, &token, id).await;
    app.server
        .patch(&format!("/api/v1/ads/{id}/sold"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    app.server
        .patch(&format!("/api/v1/ads/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "title": "Gaming Laptop v2" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_ad() {
    let app = create_test_app();

    let response = app
        .server
        .get(&format!("/api/v1/ads/{}", uuid::Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_list_ads_defaults_to_published() {
    let app = create_test_app();
    let (token, seller_id) = sign_up(&app.server, "seller@example.com").await;
    let draft = create_ad(&app.server, &token, laptop_ad()).await;
    let live = create_ad(&app.server, &token, laptop_ad()).await;
    publish(&app.server, &token, live).await;

    let listed = app.server.get("/api/v1/ads").await.json::<Vec<Value>>();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], live.to_string());

    let by_seller = app
        .server
        .get("/api/v1/ads")
        .add_query_param("sellerId", seller_id)
        .await
        .json::<Vec<Value>>();
    assert_eq!(by_seller.len(), 2);
    assert!(by_seller.iter().any(|ad| ad["id"] == draft.to_string()));
}
