use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use schitts::schema::{customer_dishes, dish_orders};

use crate::helpers::{envelope, TestApp};

fn dish_order_count(app: &TestApp) -> i64 {
    let mut conn = app.pool.get().unwrap();
    dish_orders::table.count().get_result(&mut conn).unwrap()
}

fn customer_dish_count(app: &TestApp) -> i64 {
    let mut conn = app.pool.get().unwrap();
    customer_dishes::table.count().get_result(&mut conn).unwrap()
}

#[actix_web::test]
async fn duplicate_dishes_are_stored_once(){
    let app = TestApp::spawn_app().await;
    let customer = app.create_customer("David", "Rose").await;
    let order = app.seed_order(&customer, None);
    let burger = app.create_dish("burger", 10.0, "FOOD").await;
    let fries = app.create_dish("fries", 4.0, "FOOD").await;
    let soda = app.create_dish("soda", 2.0, "DRINK").await;

    let response = app.post_json(&format!("/api/v1/manager/order/{}", order), &serde_json::json!({
        "over_cooked_level": "MEDIUM",
        "items": [
            { "DishId": burger, "quantity": 2 },
            { "DishId": fries, "quantity": 1 },
            { "DishId": burger, "quantity": 7 },
            { "DishId": soda, "quantity": 3 },
            { "DishId": fries, "quantity": 9 }
        ]
    })).await;

    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(envelope(response).await["data"], 3);
    assert_eq!(dish_order_count(&app), 3);
    assert_eq!(customer_dish_count(&app), 3);

    // first occurrence wins
    let mut conn = app.pool.get().unwrap();
    let quantities: Vec<i32> = dish_orders::table
        .order(dish_orders::id.asc())
        .select(dish_orders::quantity)
        .load(&mut conn)
        .unwrap();
    assert_eq!(quantities, vec![2, 1, 3]);

    let prices: Vec<f64> = dish_orders::table
        .filter(dish_orders::over_cooked_level.eq("MEDIUM"))
        .order(dish_orders::id.asc())
        .select(dish_orders::price)
        .load(&mut conn)
        .unwrap();
    assert_eq!(prices, vec![10.0, 4.0, 2.0]);
}

#[actix_web::test]
async fn ordered_dishes_show_up_on_the_customer(){
    let app = TestApp::spawn_app().await;
    let customer = app.create_customer("Patrick", "Brewer").await;
    let burger = app.create_dish("burger", 10.0, "FOOD").await;

    for _ in 0..2 {
        let order = app.seed_order(&customer, None);
        app.post_json(&format!("/api/v1/manager/order/{}", order), &serde_json::json!({
            "over_cooked_level": "RARE",
            "items": [{ "DishId": burger, "quantity": 1 }]
        })).await;
    }

    assert_eq!(customer_dish_count(&app), 2);

    let shown = envelope(app.get(&format!("/api/v1/customer/{}", customer)).await).await;
    assert_eq!(shown["data"]["Dishes"].as_array().unwrap().len(), 1);
    assert_eq!(shown["data"]["Dishes"][0]["reference"], burger.as_str());
    assert_eq!(shown["data"]["Orders"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn unknown_dish_rejects_the_whole_submission(){
    let app = TestApp::spawn_app().await;
    let customer = app.create_customer("Alexis", "Rose").await;
    let order = app.seed_order(&customer, None);
    let burger = app.create_dish("burger", 10.0, "FOOD").await;

    let response = app.post_json(&format!("/api/v1/manager/order/{}", order), &serde_json::json!({
        "over_cooked_level": "MEDIUM",
        "items": [
            { "DishId": burger, "quantity": 1 },
            { "DishId": "DSH-0000000000", "quantity": 1 }
        ]
    })).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        envelope(response).await["error"],
        "One dish doesn't match our records: DSH-0000000000"
    );
    assert_eq!(dish_order_count(&app), 0);
    assert_eq!(customer_dish_count(&app), 0);
}

#[actix_web::test]
async fn unknown_order_is_reported_before_dishes(){
    let app = TestApp::spawn_app().await;

    let response = app.post_json("/api/v1/manager/order/ORD-0000000000", &serde_json::json!({
        "over_cooked_level": "MEDIUM",
        "items": [{ "DishId": "DSH-0000000000", "quantity": 1 }]
    })).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(envelope(response).await["error"], "order not found: ORD-0000000000");
    assert_eq!(dish_order_count(&app), 0);
}

#[actix_web::test]
async fn invalid_submissions_are_rejected_before_any_lookup(){
    let app = TestApp::spawn_app().await;

    let cases = [
        (serde_json::json!({ "over_cooked_level": "MEDIUM", "items": [] }), "items"),
        (serde_json::json!({ "items": [{ "DishId": "DSH-0000000000", "quantity": 1 }] }), "over_cooked_level"),
        (serde_json::json!({ "over_cooked_level": "MEDIUM", "items": [{ "DishId": "DSH-0000000000", "quantity": 0 }] }), "items")
    ];

    for (body, field) in cases {
        let response = app.post_json("/api/v1/manager/order/ORD-0000000000", &body).await;

        assert_eq!(response.status().as_u16(), 400);
        let body = envelope(response).await;
        assert!(body["error"][field].is_string(), "expected an error on {}: {}", field, body);
    }
}
