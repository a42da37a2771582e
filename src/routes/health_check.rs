use actix_web::{http::header::ContentType, HttpResponse};

#[tracing::instrument("Health check")]
pub async fn health_check() -> HttpResponse{
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("Working")
}
