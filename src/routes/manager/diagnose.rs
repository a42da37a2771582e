use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::{
    db_interaction::diagnose::{server_over_cooked_dishes, ServerPerformance},
    domain::text::validate_not_blank,
    error::ApiError,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Validate, Debug)]
pub struct DiagnoseForm{
    #[validate(
        required(message = "You forgot the server_name field"),
        custom(function = "validate_not_blank")
    )]
    pub server_name: Option<String>,
    #[validate(required(message = "You forgot the over_cooked_level field"))]
    pub over_cooked_level: Option<String>,
    #[validate(
        required(message = "You forgot the month field"),
        range(min = 0, max = 1200, message = "The month must be between 0 and 1200")
    )]
    pub month: Option<i64>
}

#[tracing::instrument(
    "Diagnosing server",
    skip(pool)
)]
pub async fn diagnose_server(
    pool: web::Data<DbPool>,
    body: web::Json<DiagnoseForm>
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let DiagnoseForm{ server_name, over_cooked_level, month } = body.into_inner();
    let months = month
        .and_then(|m| u32::try_from(m).ok())
        .ok_or_else(|| ApiError::invalid("month", "The month must be between 0 and 1200"))?;

    let conn = get_pooled_connection(&pool).await?;
    let performance = server_over_cooked_dishes(
        conn,
        server_name.unwrap_or_default(),
        over_cooked_level.unwrap_or_default(),
        months,
        Utc::now().date_naive()
    ).await?;

    let envelope = match performance {
        Some(performance) => Envelope::data(performance),
        None => Envelope::<ServerPerformance>::empty()
            .with_msg("No dish found for this server and level")
    };

    Ok(envelope.created())
}
