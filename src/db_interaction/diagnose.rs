use anyhow::Context;
use chrono::{DateTime, Days, Months, NaiveDate, NaiveTime, Utc};
use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use serde::Serialize;

use crate::{
    error::ApiError,
    schema::{dish_orders, orders},
    telemetry::spawn_blocking_with_tracing,
    utils::DbConnection
};

use super::resolver::find_server_by_name;

// Whole days from `from` to `to`, both included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow{
    pub from: NaiveDate,
    pub to: NaiveDate
}

impl DateWindow {
    // Calendar month subtraction, clamped to the end of shorter months (Mar 31 - 1 month = Feb 28/29)
    pub fn months_back(today: NaiveDate, months: u32) -> DateWindow {
        let from = today
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN);

        DateWindow{ from, to: today }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.from.and_time(NaiveTime::MIN).and_utc()
    }

    // First instant after the window
    pub fn end_exclusive(&self) -> DateTime<Utc> {
        self.to
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX)
            .and_time(NaiveTime::MIN)
            .and_utc()
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.from.format("%Y/%m/%d"), self.to.format("%Y/%m/%d"))
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ServerPerformance{
    #[serde(rename = "dishesCount")]
    pub dishes_count: i64,
    pub amount: f64
}

// None when there is nothing to sum
pub fn summarize(rows: &[(i32, f64)]) -> Option<ServerPerformance> {
    if rows.is_empty() {
        return None;
    }

    let dishes_count = rows.iter()
        .map(|(quantity, _)| i64::from(*quantity))
        .sum();
    let amount = rows.iter()
        .map(|(quantity, price)| f64::from(*quantity) * price)
        .sum();

    Some(ServerPerformance{ dishes_count, amount })
}

// Dishes served by a server at a given doneness level over the last `months` months.
// Unknown server is an error, no matching dish is Ok(None).
#[tracing::instrument(
    "Summing dishes ordered by server and doneness level",
    skip(conn)
)]
pub async fn server_over_cooked_dishes(
    mut conn: DbConnection,
    server_name: String,
    over_cooked_level: String,
    months: u32,
    today: NaiveDate
) -> Result<Option<ServerPerformance>, ApiError> {

    let res = spawn_blocking_with_tracing(move || {
        let server = find_server_by_name(&mut conn, &server_name)?;

        let order_ids: Vec<i32> = orders::table
            .filter(orders::server_id.eq(server.id))
            .filter(orders::deleted_at.is_null())
            .select(orders::id)
            .load(&mut conn)?;

        let window = DateWindow::months_back(today, months);
        tracing::info!(server_id = server.id, orders = order_ids.len(), "Looking up dishes ordered between {}", window);

        let rows: Vec<(i32, f64)> = dish_orders::table
            .filter(dish_orders::order_id.eq_any(&order_ids))
            .filter(dish_orders::over_cooked_level.eq(&over_cooked_level))
            .filter(dish_orders::created_at.ge(window.start()))
            .filter(dish_orders::created_at.lt(window.end_exclusive()))
            .filter(dish_orders::deleted_at.is_null())
            .select((dish_orders::quantity, dish_orders::price))
            .load(&mut conn)?;
        tracing::info!("Dishes ordered found, count: {}", rows.len());

        Ok::<_, ApiError>(summarize(&rows))
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}
