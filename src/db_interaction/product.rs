use anyhow::Context;
use chrono::Utc;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{
    domain::reference::ReferenceKind,
    error::ApiError,
    models::{NewProduct, Product, ProductChangeset},
    schema::products,
    telemetry::spawn_blocking_with_tracing,
    utils::DbConnection
};

#[tracing::instrument(
    "Getting products from db",
    skip(conn)
)]
pub async fn get_products(
    mut conn: DbConnection,
    offset: i64,
    limit: i64
) -> Result<Vec<Product>, ApiError> {

    let res = spawn_blocking_with_tracing(move || {
        products::table
            .filter(products::deleted_at.is_null())
            .order(products::id.asc())
            .limit(limit)
            .offset(offset)
            .select(Product::as_select())
            .load::<Product>(&mut conn)
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

#[tracing::instrument(
    "Getting product by reference",
    skip(conn)
)]
pub async fn get_product_by_reference(
    mut conn: DbConnection,
    reference: String
) -> Result<Product, ApiError> {

    spawn_blocking_with_tracing(move || {
        products::table
            .filter(products::reference.eq(&reference))
            .filter(products::deleted_at.is_null())
            .select(Product::as_select())
            .first::<Product>(&mut conn)
            .optional()
    })
    .await
    .context("Failed due to threadpool error")??
    .ok_or_else(|| ApiError::not_found("product not found"))
}

#[tracing::instrument(
    "Inserting product into the database",
    skip(conn)
)]
pub async fn insert_product(
    mut conn: DbConnection,
    mut new_product: NewProduct
) -> Result<Product, ApiError> {
    new_product.reference = ReferenceKind::Product.generate();

    let product = spawn_blocking_with_tracing(move || {
        diesel::insert_into(products::table)
            .values(&new_product)
            .returning(Product::as_returning())
            .get_result::<Product>(&mut conn)
    })
    .await
    .context("Failed due to threadpool error")??;
    tracing::info!("New product created, reference: {}", product.reference);

    Ok(product)
}

#[tracing::instrument(
    "Updating product",
    skip(conn)
)]
pub async fn update_product(
    mut conn: DbConnection,
    reference: String,
    changeset: ProductChangeset
) -> Result<usize, ApiError> {
    if changeset.is_empty() {
        return Err(ApiError::invalid("product", "Nothing to update"));
    }

    let updated = spawn_blocking_with_tracing(move || {
        diesel::update(products::table)
            .filter(products::reference.eq(&reference))
            .filter(products::deleted_at.is_null())
            .set(&changeset)
            .execute(&mut conn)
    })
    .await
    .context("Failed due to threadpool error")??;

    if updated == 0 {
        return Err(ApiError::not_found("product not found"));
    }

    Ok(updated)
}

#[tracing::instrument(
    "Deleting product",
    skip(conn)
)]
pub async fn delete_product(
    mut conn: DbConnection,
    reference: String
) -> Result<(), ApiError> {

    let deleted = spawn_blocking_with_tracing(move || {
        diesel::update(products::table)
            .filter(products::reference.eq(&reference))
            .filter(products::deleted_at.is_null())
            .set(products::deleted_at.eq(Some(Utc::now())))
            .execute(&mut conn)
    })
    .await
    .context("Failed due to threadpool error")??;

    if deleted == 0 {
        return Err(ApiError::not_found("product not found"));
    }

    Ok(())
}
