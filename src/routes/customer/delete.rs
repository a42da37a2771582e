use actix_web::{web, HttpResponse};

use crate::{
    db_interaction::customer::delete_customer as delete_customer_row,
    error::ApiError,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

#[tracing::instrument(
    "Deleting customer",
    skip(pool)
)]
pub async fn delete_customer(
    pool: web::Data<DbPool>,
    reference: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;

    delete_customer_row(conn, reference.into_inner()).await?;

    Ok(Envelope::<()>::empty()
        .with_msg("customer successfully deleted")
        .ok())
}
