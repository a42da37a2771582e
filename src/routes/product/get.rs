use actix_web::{web, HttpResponse};

use crate::{
    db_interaction::product::{get_product_by_reference, get_products},
    error::ApiError,
    response::Envelope,
    utils::{get_pooled_connection, DbPool, PageQuery, PageSize}
};

#[tracing::instrument(
    "Listing products",
    skip(pool, page_size)
)]
pub async fn list_products(
    pool: web::Data<DbPool>,
    page_size: web::Data<PageSize>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;
    let page_size = *page_size.get_ref();

    let products = get_products(conn, query.offset(page_size), page_size.0).await?;

    Ok(Envelope::data(products).ok())
}

#[tracing::instrument(
    "Showing product",
    skip(pool)
)]
pub async fn show_product(
    pool: web::Data<DbPool>,
    reference: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;

    let product = get_product_by_reference(conn, reference.into_inner()).await?;

    Ok(Envelope::data(product).ok())
}
