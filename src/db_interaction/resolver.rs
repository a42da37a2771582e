use diesel::{
    BoolExpressionMethods, ExpressionMethods, OptionalExtension, PgConnection, PgTextExpressionMethods,
    QueryDsl, QueryResult, RunQueryDsl, SelectableHelper
};
use diesel::prelude::{Queryable, Selectable};

use crate::{
    domain::category::DishType,
    error::ApiError,
    models::Server,
    schema::{customers, dishes, orders, servers}
};

// Turns a public reference into the internal row key of an entity
pub trait Resolve: Sized {
    const ENTITY: &'static str;

    fn find_by_reference(conn: &mut PgConnection, reference: &str) -> QueryResult<Option<Self>>;
}

pub fn resolve<T: Resolve>(conn: &mut PgConnection, reference: &str) -> Result<T, ApiError> {
    T::find_by_reference(conn, reference)?
        .ok_or_else(|| ApiError::NotFound(format!("{} not found: {}", T::ENTITY, reference)))
}

macro_rules! resolvable {
    ($key:ty, $table:ident, $entity:literal) => {
        impl Resolve for $key {
            const ENTITY: &'static str = $entity;

            fn find_by_reference(conn: &mut PgConnection, reference: &str) -> QueryResult<Option<Self>> {
                $table::table
                    .filter($table::reference.eq(reference))
                    .filter($table::deleted_at.is_null())
                    .select(<$key>::as_select())
                    .first::<Self>(conn)
                    .optional()
            }
        }
    };
}

#[derive(Queryable, Selectable, Debug, Clone, Copy)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerKey{
    pub id: i32
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = dishes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DishKey{
    pub id: i32,
    pub reference: String,
    pub price: f64,
    pub type_: String
}

#[derive(Queryable, Selectable, Debug, Clone, Copy)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderKey{
    pub id: i32,
    pub customer_id: i32
}

resolvable!(CustomerKey, customers, "customer");
resolvable!(DishKey, dishes, "dish");
resolvable!(OrderKey, orders, "order");

// Favorite food / drink, the dish must exist and be of the expected type
#[tracing::instrument("Resolving favorite dish", skip(conn))]
pub fn resolve_favorite(
    conn: &mut PgConnection,
    field: &str,
    reference: &str,
    expected: DishType
) -> Result<i32, ApiError> {
    match DishKey::find_by_reference(conn, reference)? {
        Some(dish) if dish.type_ == expected.as_str() => Ok(dish.id),
        _ => Err(ApiError::NotFound(format!("{} not found", field)))
    }
}

// Resolve several dishes with one query, the first unknown reference (in input order) fails the lookup
#[tracing::instrument("Resolving dishes by reference", skip(conn))]
pub fn resolve_dishes(conn: &mut PgConnection, references: &[String]) -> Result<Vec<DishKey>, ApiError> {
    let found: Vec<DishKey> = dishes::table
        .filter(dishes::reference.eq_any(references))
        .filter(dishes::deleted_at.is_null())
        .select(DishKey::as_select())
        .load(conn)?;

    references.iter()
        .map(|reference| {
            found.iter()
                .find(|dish| &dish.reference == reference)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(format!("One dish doesn't match our records: {}", reference)))
        })
        .collect()
}

// `%` and `_` in user input are matched literally
pub(crate) fn like_pattern(fragment: &str) -> String {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    format!("%{}%", escaped)
}

// Case insensitive partial match on first or last name, lowest id wins
#[tracing::instrument("Finding server by name", skip(conn))]
pub fn find_server_by_name(conn: &mut PgConnection, name: &str) -> Result<Server, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::not_found("Server not found"));
    }
    let pattern = like_pattern(name);

    servers::table
        .filter(
            servers::first_name.ilike(&pattern)
                .or(servers::last_name.ilike(&pattern))
        )
        .filter(servers::deleted_at.is_null())
        .order(servers::id.asc())
        .select(Server::as_select())
        .first::<Server>(conn)
        .optional()?
        .ok_or_else(|| ApiError::NotFound("Server not found".to_string()))
}
