use crate::helpers::{envelope, TestApp};

#[actix_web::test]
async fn dish_lifecycle(){
    let app = TestApp::spawn_app().await;
    let reference = app.create_dish("cheeseburgers", 10.52, "FOOD").await;
    assert!(reference.starts_with("DSH-"));

    let shown = envelope(app.get(&format!("/api/v1/dish/{}", reference)).await).await;
    assert_eq!(shown["data"]["name"], "cheeseburgers");
    assert_eq!(shown["data"]["active"], true);

    let response = app.patch_json(&format!("/api/v1/dish/{}", reference), &serde_json::json!({
        "price": 12.0,
        "active": false
    })).await;
    assert_eq!(response.status().as_u16(), 200);

    let shown = envelope(app.get(&format!("/api/v1/dish/{}", reference)).await).await;
    assert_eq!(shown["data"]["price"], 12.0);
    assert_eq!(shown["data"]["active"], false);
    assert_eq!(shown["data"]["name"], "cheeseburgers");

    let response = app.delete(&format!("/api/v1/dish/{}", reference)).await;
    assert_eq!(envelope(response).await["msg"], "dish successfully deleted");

    let shown = envelope(app.get(&format!("/api/v1/dish/{}", reference)).await).await;
    assert_eq!(shown["status"], false);
    assert_eq!(shown["error"], "dish not found");
}

#[actix_web::test]
async fn invalid_dish_is_rejected(){
    let app = TestApp::spawn_app().await;

    let response = app.post_json("/api/v1/dish", &serde_json::json!({
        "name": "napkin",
        "price": -2.0,
        "type": "PAPER"
    })).await;

    assert_eq!(response.status().as_u16(), 400);
    let body = envelope(response).await;
    assert_eq!(body["error"]["description"], "You forgot the description field");
    assert_eq!(body["error"]["price"], "The price can't be negative");
}

#[actix_web::test]
async fn empty_patch_is_rejected(){
    let app = TestApp::spawn_app().await;
    let reference = app.create_dish("soup", 6.0, "FOOD").await;

    let response = app.patch_json(&format!("/api/v1/dish/{}", reference), &serde_json::json!({})).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(envelope(response).await["error"]["dish"], "Nothing to update");
}
