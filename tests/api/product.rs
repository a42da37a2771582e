use crate::helpers::{envelope, TestApp};

#[actix_web::test]
async fn product_lifecycle(){
    let app = TestApp::spawn_app().await;

    let response = app.post_json("/api/v1/product", &serde_json::json!({
        "title": "Rose Apothecary soap",
        "description": "goat milk",
        "price": 12.5,
        "published": true
    })).await;
    assert_eq!(response.status().as_u16(), 201);
    let reference = envelope(response).await["data"]["reference"].as_str().unwrap().to_string();
    assert!(reference.starts_with("PRD-"));

    let response = app.patch_json(&format!("/api/v1/product/{}", reference), &serde_json::json!({
        "published": false
    })).await;
    assert_eq!(envelope(response).await["data"], 1);

    let listed = envelope(app.get("/api/v1/product").await).await;
    assert_eq!(listed["data"][0]["published"], false);
    assert_eq!(listed["data"][0]["title"], "Rose Apothecary soap");

    app.delete(&format!("/api/v1/product/{}", reference)).await;
    let listed = envelope(app.get("/api/v1/product").await).await;
    assert_eq!(listed["data"], serde_json::json!([]));
}

#[actix_web::test]
async fn product_without_title_is_rejected(){
    let app = TestApp::spawn_app().await;

    let response = app.post_json("/api/v1/product", &serde_json::json!({ "price": 3.0 })).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(envelope(response).await["error"]["title"], "You forgot the title field");
}

#[actix_web::test]
async fn updating_unknown_product_is_not_found(){
    let app = TestApp::spawn_app().await;

    let response = app.patch_json("/api/v1/product/PRD-0000000000", &serde_json::json!({ "price": 1.0 })).await;

    assert_eq!(envelope(response).await["error"], "product not found");
}
