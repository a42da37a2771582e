use actix_web::{web, HttpResponse};

use crate::{
    db_interaction::customer::{get_customer_by_reference, get_customers},
    error::ApiError,
    response::Envelope,
    utils::{get_pooled_connection, DbPool, PageQuery, PageSize}
};

#[tracing::instrument(
    "Listing customers",
    skip(pool, page_size)
)]
pub async fn list_customers(
    pool: web::Data<DbPool>,
    page_size: web::Data<PageSize>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;
    let page_size = *page_size.get_ref();

    let customers = get_customers(conn, query.offset(page_size), page_size.0).await?;

    Ok(Envelope::data(customers).ok())
}

#[tracing::instrument(
    "Showing customer",
    skip(pool)
)]
pub async fn show_customer(
    pool: web::Data<DbPool>,
    reference: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;

    let customer = get_customer_by_reference(conn, reference.into_inner()).await?;

    Ok(Envelope::data(customer).ok())
}
