use anyhow::Context;
use chrono::{DateTime, Utc};
use diesel::{Connection, ExpressionMethods, RunQueryDsl, SelectableHelper};

use crate::{
    domain::reference::ReferenceKind,
    error::ApiError,
    models::{Booking, BookingChangeset, NewBooking},
    schema::bookings,
    telemetry::spawn_blocking_with_tracing,
    utils::DbConnection
};

use super::resolver::{resolve, CustomerKey};

#[derive(Debug, Clone)]
pub struct BookingDraft{
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub customer_reference: String
}

// Mutable booking fields, anything else sent by the client never reaches the database
#[derive(Debug, Clone, Default)]
pub struct BookingPatch{
    pub reservation_date: Option<DateTime<Utc>>,
    pub party_size: Option<i32>,
    pub customer_reference: Option<String>
}

impl BookingPatch {
    pub fn is_empty(&self) -> bool {
        self.reservation_date.is_none()
            && self.party_size.is_none()
            && self.customer_reference.is_none()
    }
}

#[tracing::instrument(
    "Inserting booking into the database",
    skip(conn)
)]
pub async fn insert_booking(
    mut conn: DbConnection,
    draft: BookingDraft
) -> Result<Booking, ApiError> {

    let booking = spawn_blocking_with_tracing(move || {
        conn.transaction::<Booking, ApiError, _>(|conn| {
            let customer: CustomerKey = resolve(conn, &draft.customer_reference)?;

            let new_booking = NewBooking{
                reference: ReferenceKind::Booking.generate(),
                reservation_date: draft.reservation_date,
                party_size: draft.party_size,
                customer_id: customer.id
            };

            let booking = diesel::insert_into(bookings::table)
                .values(&new_booking)
                .returning(Booking::as_returning())
                .get_result(conn)?;
            tracing::info!("New booking created, reference: {}", booking.reference);

            Ok(booking)
        })
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(booking)
}

// Returns the number of updated rows
#[tracing::instrument(
    "Updating booking",
    skip(conn)
)]
pub async fn update_booking(
    mut conn: DbConnection,
    reference: String,
    patch: BookingPatch
) -> Result<usize, ApiError> {
    if patch.is_empty() {
        return Err(ApiError::invalid(
            "booking",
            "Provide at least one of reservation_date, party_size or customer_id"
        ));
    }

    let updated = spawn_blocking_with_tracing(move || {
        conn.transaction::<usize, ApiError, _>(|conn| {
            let customer_id = match &patch.customer_reference {
                Some(customer_reference) => Some(resolve::<CustomerKey>(conn, customer_reference)?.id),
                None => None
            };

            let changeset = BookingChangeset{
                reservation_date: patch.reservation_date,
                party_size: patch.party_size,
                customer_id
            };

            let updated = diesel::update(bookings::table)
                .filter(bookings::reference.eq(&reference))
                .filter(bookings::deleted_at.is_null())
                .set(&changeset)
                .execute(conn)?;

            if updated == 0 {
                return Err(ApiError::not_found("Booking not found"));
            }
            tracing::info!("Booking updated, reference: {}", reference);

            Ok(updated)
        })
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(updated)
}
