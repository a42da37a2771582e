use std::collections::HashSet;

use anyhow::Context;
use diesel::{Connection, RunQueryDsl};
use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    models::{NewCustomerDish, NewDishOrder},
    schema::{customer_dishes, dish_orders},
    telemetry::spawn_blocking_with_tracing,
    utils::DbConnection
};

use super::resolver::{resolve, resolve_dishes, DishKey, OrderKey};

// One requested line of an order submission
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderLine{
    #[serde(rename = "DishId")]
    pub dish_reference: String,
    pub quantity: i32
}

#[derive(Debug, Clone)]
pub struct DishOrderSubmission{
    pub order_reference: String,
    pub over_cooked_level: String,
    pub items: Vec<OrderLine>
}

// At most one line per dish, first occurrence wins, later quantities are dropped
pub fn unique_by_dish(items: Vec<OrderLine>) -> Vec<OrderLine> {
    let mut seen = HashSet::new();

    items.into_iter()
        .filter(|item| seen.insert(item.dish_reference.clone()))
        .collect()
}

// Rows for dish_orders and customer_dishes, `dishes` is aligned with `items`
pub fn build_order_rows(
    order: OrderKey,
    items: &[OrderLine],
    dishes: &[DishKey],
    over_cooked_level: &str
) -> (Vec<NewDishOrder>, Vec<NewCustomerDish>) {
    items.iter()
        .zip(dishes)
        .map(|(item, dish)| {
            let dish_order = NewDishOrder{
                order_id: order.id,
                dish_id: dish.id,
                quantity: item.quantity,
                price: dish.price,
                over_cooked_level: over_cooked_level.to_string()
            };

            let customer_dish = NewCustomerDish{
                customer_id: order.customer_id,
                dish_id: dish.id
            };

            (dish_order, customer_dish)
        })
        .unzip()
}

// Store the dishes of an order and remember them as ordered by the order's customer.
// Nothing is written unless the order and every dish resolve.
#[tracing::instrument(
    "Storing dishes ordered",
    skip(conn)
)]
pub async fn insert_dish_orders(
    mut conn: DbConnection,
    submission: DishOrderSubmission
) -> Result<usize, ApiError> {

    let inserted = spawn_blocking_with_tracing(move || {
        conn.transaction::<usize, ApiError, _>(|conn| {
            let items = unique_by_dish(submission.items);

            let order: OrderKey = resolve(conn, &submission.order_reference)?;

            let references: Vec<String> = items.iter()
                .map(|item| item.dish_reference.clone())
                .collect();
            let dishes = resolve_dishes(conn, &references)?;

            let (dish_orders, customer_dishes) = build_order_rows(
                order,
                &items,
                &dishes,
                &submission.over_cooked_level
            );

            let inserted = diesel::insert_into(dish_orders::table)
                .values(&dish_orders)
                .execute(conn)?;
            tracing::info!("DishOrder inserted, count: {}", inserted);

            let remembered = diesel::insert_into(customer_dishes::table)
                .values(&customer_dishes)
                .execute(conn)?;
            tracing::info!("CustomerDishes inserted, count: {}", remembered);

            Ok(inserted)
        })
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(inserted)
}
