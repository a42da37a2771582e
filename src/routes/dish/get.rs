use actix_web::{web, HttpResponse};

use crate::{
    db_interaction::dish::{get_dish_by_reference, get_dishes},
    error::ApiError,
    response::Envelope,
    utils::{get_pooled_connection, DbPool, PageQuery, PageSize}
};

#[tracing::instrument(
    "Listing dishes",
    skip(pool, page_size)
)]
pub async fn list_dishes(
    pool: web::Data<DbPool>,
    page_size: web::Data<PageSize>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;
    let page_size = *page_size.get_ref();

    let dishes = get_dishes(conn, query.offset(page_size), page_size.0).await?;

    Ok(Envelope::data(dishes).ok())
}

#[tracing::instrument(
    "Showing dish",
    skip(pool)
)]
pub async fn show_dish(
    pool: web::Data<DbPool>,
    reference: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;

    let dish = get_dish_by_reference(conn, reference.into_inner()).await?;

    Ok(Envelope::data(dish).ok())
}
