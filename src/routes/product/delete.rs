use actix_web::{web, HttpResponse};

use crate::{
    db_interaction::product::delete_product as delete_product_row,
    error::ApiError,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

#[tracing::instrument(
    "Deleting product",
    skip(pool)
)]
pub async fn delete_product(
    pool: web::Data<DbPool>,
    reference: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;

    delete_product_row(conn, reference.into_inner()).await?;

    Ok(Envelope::<()>::empty()
        .with_msg("product successfully deleted")
        .ok())
}
