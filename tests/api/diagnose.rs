use crate::helpers::{envelope, TestApp};

fn diagnose_body(server_name: &str, level: &str, month: i64) -> serde_json::Value {
    serde_json::json!({
        "server_name": server_name,
        "over_cooked_level": level,
        "month": month
    })
}

#[actix_web::test]
async fn sums_quantities_and_amounts_of_matching_dishes(){
    let app = TestApp::spawn_app().await;
    let server = app.seed_server("John", "Doe");
    let customer = app.create_customer("Moira", "Rose").await;
    let order = app.seed_order(&customer, Some(server));
    let steak = app.create_dish("steak", 10.0, "FOOD").await;
    let ribs = app.create_dish("ribs", 10.0, "FOOD").await;
    let lamb = app.create_dish("lamb", 12.0, "FOOD").await;

    let response = app.post_json(&format!("/api/v1/manager/order/{}", order), &serde_json::json!({
        "over_cooked_level": "WELL DONE",
        "items": [
            { "DishId": steak, "quantity": 2 },
            { "DishId": ribs, "quantity": 1 },
            { "DishId": lamb, "quantity": 3 }
        ]
    })).await;
    assert_eq!(response.status().as_u16(), 201);

    // another level on another order of the same server is left out
    let other = app.seed_order(&customer, Some(server));
    app.post_json(&format!("/api/v1/manager/order/{}", other), &serde_json::json!({
        "over_cooked_level": "RARE",
        "items": [{ "DishId": steak, "quantity": 5 }]
    })).await;

    let response = app.post_json("/api/v1/manager/diagnose", &diagnose_body("doe", "WELL DONE", 1)).await;

    assert_eq!(response.status().as_u16(), 201);
    let body = envelope(response).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["data"]["dishesCount"], 6);
    assert_eq!(body["data"]["amount"], 66.0);
}

#[actix_web::test]
async fn known_server_without_dishes_returns_null(){
    let app = TestApp::spawn_app().await;
    app.seed_server("John", "Doe");

    let response = app.post_json("/api/v1/manager/diagnose", &diagnose_body("Doe", "WELL DONE", 0)).await;

    assert_eq!(response.status().as_u16(), 201);
    let body = envelope(response).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["data"], serde_json::Value::Null);
}

#[actix_web::test]
async fn unknown_server_is_a_failure(){
    let app = TestApp::spawn_app().await;
    app.seed_server("John", "Doe");

    let response = app.post_json("/api/v1/manager/diagnose", &diagnose_body("Smith", "WELL DONE", 3)).await;

    assert_eq!(response.status().as_u16(), 400);
    let body = envelope(response).await;
    assert_eq!(body["status"], false);
    assert_eq!(body["error"], "Server not found");
}

#[actix_web::test]
async fn wildcards_in_the_name_are_literal(){
    let app = TestApp::spawn_app().await;
    app.seed_server("John", "Doe");

    let response = app.post_json("/api/v1/manager/diagnose", &diagnose_body("%", "WELL DONE", 3)).await;

    assert_eq!(envelope(response).await["error"], "Server not found");
}

#[actix_web::test]
async fn blank_server_name_is_rejected(){
    let app = TestApp::spawn_app().await;
    app.seed_server("John", "Doe");

    let response = app.post_json("/api/v1/manager/diagnose", &diagnose_body("   ", "WELL DONE", 1)).await;

    assert_eq!(response.status().as_u16(), 400);
    let body = envelope(response).await;
    assert_eq!(body["status"], false);
    assert_eq!(body["data"], serde_json::Value::Null);
    assert!(body["error"]["server_name"].is_string());
}
