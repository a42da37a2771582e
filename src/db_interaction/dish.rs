use anyhow::Context;
use chrono::Utc;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{
    domain::reference::ReferenceKind,
    error::ApiError,
    models::{Dish, DishChangeset, NewDish},
    schema::dishes,
    telemetry::spawn_blocking_with_tracing,
    utils::DbConnection
};

#[tracing::instrument(
    "Getting dishes from db",
    skip(conn)
)]
pub async fn get_dishes(
    mut conn: DbConnection,
    offset: i64,
    limit: i64
) -> Result<Vec<Dish>, ApiError> {

    let res = spawn_blocking_with_tracing(move || {
        dishes::table
            .filter(dishes::deleted_at.is_null())
            .order(dishes::id.asc())
            .limit(limit)
            .offset(offset)
            .select(Dish::as_select())
            .load::<Dish>(&mut conn)
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

#[tracing::instrument(
    "Getting dish by reference",
    skip(conn)
)]
pub async fn get_dish_by_reference(
    mut conn: DbConnection,
    reference: String
) -> Result<Dish, ApiError> {

    let res = spawn_blocking_with_tracing(move || {
        dishes::table
            .filter(dishes::reference.eq(&reference))
            .filter(dishes::deleted_at.is_null())
            .select(Dish::as_select())
            .first::<Dish>(&mut conn)
            .optional()
    })
    .await
    .context("Failed due to threadpool error")??;

    res.ok_or_else(|| ApiError::not_found("dish not found"))
}

#[tracing::instrument(
    "Inserting dish into the database",
    skip(conn)
)]
pub async fn insert_dish(
    mut conn: DbConnection,
    mut new_dish: NewDish
) -> Result<Dish, ApiError> {
    new_dish.reference = ReferenceKind::Dish.generate();

    let dish = spawn_blocking_with_tracing(move || {
        diesel::insert_into(dishes::table)
            .values(&new_dish)
            .returning(Dish::as_returning())
            .get_result::<Dish>(&mut conn)
    })
    .await
    .context("Failed due to threadpool error")??;
    tracing::info!("New dish created, reference: {}", dish.reference);

    Ok(dish)
}

#[tracing::instrument(
    "Updating dish",
    skip(conn)
)]
pub async fn update_dish(
    mut conn: DbConnection,
    reference: String,
    changeset: DishChangeset
) -> Result<usize, ApiError> {
    if changeset.is_empty() {
        return Err(ApiError::invalid("dish", "Nothing to update"));
    }

    let updated = spawn_blocking_with_tracing(move || {
        diesel::update(dishes::table)
            .filter(dishes::reference.eq(&reference))
            .filter(dishes::deleted_at.is_null())
            .set(&changeset)
            .execute(&mut conn)
    })
    .await
    .context("Failed due to threadpool error")??;

    if updated == 0 {
        return Err(ApiError::not_found("dish not found"));
    }

    Ok(updated)
}

#[tracing::instrument(
    "Deleting dish",
    skip(conn)
)]
pub async fn delete_dish(
    mut conn: DbConnection,
    reference: String
) -> Result<(), ApiError> {

    let deleted = spawn_blocking_with_tracing(move || {
        diesel::update(dishes::table)
            .filter(dishes::reference.eq(&reference))
            .filter(dishes::deleted_at.is_null())
            .set(dishes::deleted_at.eq(Some(Utc::now())))
            .execute(&mut conn)
    })
    .await
    .context("Failed due to threadpool error")??;

    if deleted == 0 {
        return Err(ApiError::not_found("dish not found"));
    }

    Ok(())
}
