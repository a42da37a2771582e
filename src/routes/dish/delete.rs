use actix_web::{web, HttpResponse};

use crate::{
    db_interaction::dish::delete_dish as delete_dish_row,
    error::ApiError,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

#[tracing::instrument(
    "Deleting dish",
    skip(pool)
)]
pub async fn delete_dish(
    pool: web::Data<DbPool>,
    reference: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;

    delete_dish_row(conn, reference.into_inner()).await?;

    Ok(Envelope::<()>::empty()
        .with_msg("dish successfully deleted")
        .ok())
}
