use crate::helpers::TestApp;

#[actix_web::test]
async fn health_check_reports_working(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/health").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "Working");
}
