use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::{
    db_interaction::customer::update_customer as update_customer_row,
    error::ApiError,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

use super::CustomerForm;

// The email of a customer can't be changed, it isn't read from the body
#[tracing::instrument(
    "Updating customer",
    skip(pool)
)]
pub async fn update_customer(
    pool: web::Data<DbPool>,
    reference: web::Path<String>,
    body: web::Json<CustomerForm>
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let conn = get_pooled_connection(&pool).await?;
    let updated = update_customer_row(conn, reference.into_inner(), body.into_inner().into_fields()).await?;

    Ok(Envelope::data(updated).ok())
}
