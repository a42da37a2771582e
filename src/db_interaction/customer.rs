use std::collections::HashSet;

use anyhow::Context;
use chrono::Utc;
use diesel::{
    BelongingToDsl, BoolExpressionMethods, Connection, ExpressionMethods, GroupedBy, OptionalExtension,
    PgConnection, PgTextExpressionMethods, QueryDsl, QueryResult, RunQueryDsl, SelectableHelper,
    TextExpressionMethods
};
use serde::Serialize;

use crate::{
    domain::{category::DishType, reference::ReferenceKind},
    error::ApiError,
    models::{Booking, Customer, CustomerChangeset, CustomerDish, CustomerName, Dish, NewCustomer, Order},
    schema::{bookings, customer_dishes, customers, dishes, orders},
    telemetry::spawn_blocking_with_tracing,
    utils::DbConnection
};

use super::resolver::{like_pattern, resolve_favorite};

// Customer with the dishes they ordered, their orders and their bookings
#[derive(Serialize, Debug)]
pub struct CustomerDetails{
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(rename = "Dishes")]
    pub dishes: Vec<Dish>,
    #[serde(rename = "Orders")]
    pub orders: Vec<Order>,
    #[serde(rename = "Bookings")]
    pub bookings: Vec<Booking>
}

// Columns a client may write, favorites are dish references
#[derive(Debug, Clone)]
pub struct CustomerFields{
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub favorite_food: String,
    pub favorite_drink: String,
    pub kind: String,
    pub bill_split: String
}

fn load_relations(conn: &mut PgConnection, customers: Vec<Customer>) -> QueryResult<Vec<CustomerDetails>> {
    let ordered_dishes: Vec<(CustomerDish, Dish)> = CustomerDish::belonging_to(&customers)
        .inner_join(dishes::table)
        .filter(customer_dishes::deleted_at.is_null())
        .filter(dishes::deleted_at.is_null())
        .order(customer_dishes::id.asc())
        .select((CustomerDish::as_select(), Dish::as_select()))
        .load(conn)?;

    let customer_orders: Vec<Order> = Order::belonging_to(&customers)
        .filter(orders::deleted_at.is_null())
        .select(Order::as_select())
        .load(conn)?;

    let customer_bookings: Vec<Booking> = Booking::belonging_to(&customers)
        .filter(bookings::deleted_at.is_null())
        .select(Booking::as_select())
        .load(conn)?;

    let dishes_per_customer = ordered_dishes.grouped_by(&customers);
    let orders_per_customer = customer_orders.grouped_by(&customers);
    let bookings_per_customer = customer_bookings.grouped_by(&customers);

    let details = customers.into_iter()
        .zip(dishes_per_customer)
        .zip(orders_per_customer)
        .zip(bookings_per_customer)
        .map(|(((customer, ordered), orders), bookings)| {
            // the same dish shows up once per order it was part of
            let mut seen = HashSet::new();
            let dishes = ordered.into_iter()
                .map(|(_, dish)| dish)
                .filter(|dish| seen.insert(dish.id))
                .collect();

            CustomerDetails{ customer, dishes, orders, bookings }
        })
        .collect();

    Ok(details)
}

#[tracing::instrument(
    "Getting customers from db",
    skip(conn)
)]
pub async fn get_customers(
    mut conn: DbConnection,
    offset: i64,
    limit: i64
) -> Result<Vec<CustomerDetails>, ApiError> {

    let res = spawn_blocking_with_tracing(move || {
        let page: Vec<Customer> = customers::table
            .filter(customers::deleted_at.is_null())
            .order(customers::id.asc())
            .limit(limit)
            .offset(offset)
            .select(Customer::as_select())
            .load(&mut conn)?;

        let details = load_relations(&mut conn, page)?;
        tracing::info!("Fetching customers, count: {}", details.len());

        Ok::<_, ApiError>(details)
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

#[tracing::instrument(
    "Getting customer by reference",
    skip(conn)
)]
pub async fn get_customer_by_reference(
    mut conn: DbConnection,
    reference: String
) -> Result<CustomerDetails, ApiError> {

    spawn_blocking_with_tracing(move || {
        let customer = customers::table
            .filter(customers::reference.eq(&reference))
            .filter(customers::deleted_at.is_null())
            .select(Customer::as_select())
            .first::<Customer>(&mut conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("customer not found"))?;

        load_relations(&mut conn, vec![customer])?
            .pop()
            .ok_or_else(|| ApiError::not_found("customer not found"))
    })
    .await
    .context("Failed due to threadpool error")?
}

#[tracing::instrument(
    "Inserting customer into the database",
    skip(conn)
)]
pub async fn insert_customer(
    mut conn: DbConnection,
    email: String,
    fields: CustomerFields
) -> Result<Customer, ApiError> {

    spawn_blocking_with_tracing(move || {
        conn.transaction::<Customer, ApiError, _>(|conn| {
            let favorite_food = resolve_favorite(conn, "favorite_food", &fields.favorite_food, DishType::Food)?;
            let favorite_drink = resolve_favorite(conn, "favorite_drink", &fields.favorite_drink, DishType::Drink)?;

            let new_customer = NewCustomer{
                reference: ReferenceKind::Customer.generate(),
                first_name: fields.first_name,
                last_name: fields.last_name,
                email,
                phone_number: fields.phone_number,
                address: fields.address,
                city: fields.city,
                favorite_food: Some(favorite_food),
                favorite_drink: Some(favorite_drink),
                type_: fields.kind,
                bill_split: fields.bill_split
            };

            let customer = diesel::insert_into(customers::table)
                .values(&new_customer)
                .returning(Customer::as_returning())
                .get_result(conn)?;
            tracing::info!("New customer created, reference: {}", customer.reference);

            Ok(customer)
        })
    })
    .await
    .context("Failed due to threadpool error")?
}

// Email is not part of the fields, it can't be changed
#[tracing::instrument(
    "Updating customer",
    skip(conn)
)]
pub async fn update_customer(
    mut conn: DbConnection,
    reference: String,
    fields: CustomerFields
) -> Result<usize, ApiError> {

    spawn_blocking_with_tracing(move || {
        conn.transaction::<usize, ApiError, _>(|conn| {
            let favorite_food = resolve_favorite(conn, "favorite_food", &fields.favorite_food, DishType::Food)?;
            let favorite_drink = resolve_favorite(conn, "favorite_drink", &fields.favorite_drink, DishType::Drink)?;

            let changeset = CustomerChangeset{
                first_name: fields.first_name,
                last_name: fields.last_name,
                phone_number: fields.phone_number,
                address: fields.address,
                city: fields.city,
                favorite_food: Some(favorite_food),
                favorite_drink: Some(favorite_drink),
                type_: fields.kind,
                bill_split: fields.bill_split
            };

            let updated = diesel::update(customers::table)
                .filter(customers::reference.eq(&reference))
                .filter(customers::deleted_at.is_null())
                .set(&changeset)
                .execute(conn)?;

            if updated == 0 {
                return Err(ApiError::not_found("customer not found"));
            }
            tracing::info!("Customer updated, reference: {}", reference);

            Ok(updated)
        })
    })
    .await
    .context("Failed due to threadpool error")?
}

// Soft deletion, the row stays for audit
#[tracing::instrument(
    "Deleting customer",
    skip(conn)
)]
pub async fn delete_customer(
    mut conn: DbConnection,
    reference: String
) -> Result<(), ApiError> {

    spawn_blocking_with_tracing(move || {
        let deleted = diesel::update(customers::table)
            .filter(customers::reference.eq(&reference))
            .filter(customers::deleted_at.is_null())
            .set(customers::deleted_at.eq(Some(Utc::now())))
            .execute(&mut conn)?;

        if deleted == 0 {
            tracing::debug!("Customer not found, reference: {}", reference);
            return Err(ApiError::not_found("Customer not found"));
        }

        Ok(())
    })
    .await
    .context("Failed due to threadpool error")?
}

// `fullname` is matched against "firstlast" and "lastfirst", whitespace ignored
#[tracing::instrument(
    "Finding customers by name and type",
    skip(conn)
)]
pub async fn find_customers_by_name(
    mut conn: DbConnection,
    fullname: String,
    kind: String
) -> Result<Vec<CustomerName>, ApiError> {
    let needle: String = fullname.split_whitespace().collect();
    if needle.is_empty() {
        return Ok(Vec::new());
    }
    let pattern = like_pattern(&needle);

    let res = spawn_blocking_with_tracing(move || {
        customers::table
            .filter(customers::type_.eq(&kind))
            .filter(
                customers::first_name.concat(customers::last_name).ilike(&pattern)
                    .or(customers::last_name.concat(customers::first_name).ilike(&pattern))
            )
            .filter(customers::deleted_at.is_null())
            .order(customers::id.asc())
            .select(CustomerName::as_select())
            .load::<CustomerName>(&mut conn)
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}
