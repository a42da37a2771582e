use crate::helpers::{envelope, TestApp};

async fn create_booking(app: &TestApp, customer: &str) -> serde_json::Value {
    let response = app.post_json("/api/v1/manager/booking", &serde_json::json!({
        "reservation_date": "2024-10-01T19:30:00Z",
        "party_size": 4,
        "customer_id": customer
    })).await;
    assert_eq!(response.status().as_u16(), 201);

    envelope(response).await["data"].clone()
}

#[actix_web::test]
async fn booking_is_created_for_a_known_customer(){
    let app = TestApp::spawn_app().await;
    let customer = app.create_customer("Jocelyn", "Schitt").await;

    let booking = create_booking(&app, &customer).await;

    assert!(booking["reference"].as_str().unwrap().starts_with("BKG-"));
    assert_eq!(booking["party_size"], 4);

    let shown = envelope(app.get(&format!("/api/v1/customer/{}", customer)).await).await;
    assert_eq!(shown["data"]["Bookings"][0]["reference"], booking["reference"]);
}

#[actix_web::test]
async fn booking_for_unknown_customer_is_rejected(){
    let app = TestApp::spawn_app().await;

    let response = app.post_json("/api/v1/manager/booking", &serde_json::json!({
        "reservation_date": "2024-10-01T19:30:00Z",
        "party_size": 4,
        "customer_id": "CUS-0000000000"
    })).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(envelope(response).await["error"], "customer not found: CUS-0000000000");
}

#[actix_web::test]
async fn update_ignores_fields_that_are_not_mutable(){
    let app = TestApp::spawn_app().await;
    let customer = app.create_customer("Ronnie", "Lee").await;
    let booking = create_booking(&app, &customer).await;
    let reference = booking["reference"].as_str().unwrap();

    let response = app.patch_json(&format!("/api/v1/manager/booking/{}", reference), &serde_json::json!({
        "party_size": 6,
        "reference": "BKG-HIJACKED00",
        "created_at": "2000-01-01T00:00:00Z"
    })).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(envelope(response).await["data"], 1);

    let shown = envelope(app.get(&format!("/api/v1/customer/{}", customer)).await).await;
    let stored = &shown["data"]["Bookings"][0];
    assert_eq!(stored["reference"], reference);
    assert_eq!(stored["party_size"], 6);
    assert_eq!(stored["created_at"], booking["created_at"]);
}

#[actix_web::test]
async fn update_moves_booking_to_another_customer(){
    let app = TestApp::spawn_app().await;
    let first = app.create_customer("Bob", "Currie").await;
    let second = app.create_customer("Ray", "Butani").await;
    let booking = create_booking(&app, &first).await;

    app.patch_json(
        &format!("/api/v1/manager/booking/{}", booking["reference"].as_str().unwrap()),
        &serde_json::json!({ "customer_id": second })
    ).await;

    let shown = envelope(app.get(&format!("/api/v1/customer/{}", second)).await).await;
    assert_eq!(shown["data"]["Bookings"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn update_of_unknown_booking_is_not_found(){
    let app = TestApp::spawn_app().await;

    let response = app.patch_json("/api/v1/manager/booking/BKG-0000000000", &serde_json::json!({
        "party_size": 2
    })).await;

    assert_eq!(envelope(response).await["error"], "Booking not found");
}

#[actix_web::test]
async fn update_without_mutable_fields_is_rejected(){
    let app = TestApp::spawn_app().await;
    let customer = app.create_customer("Mutt", "Schitt").await;
    let booking = create_booking(&app, &customer).await;

    let response = app.patch_json(
        &format!("/api/v1/manager/booking/{}", booking["reference"].as_str().unwrap()),
        &serde_json::json!({ "note": "window seat" })
    ).await;

    assert_eq!(response.status().as_u16(), 400);
    assert!(envelope(response).await["error"]["booking"].is_string());
}
