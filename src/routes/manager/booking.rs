use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    db_interaction::booking::{insert_booking, update_booking as update_booking_row, BookingDraft, BookingPatch},
    error::ApiError,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Validate, Debug)]
pub struct BookingForm{
    #[validate(required(message = "You forgot the reservation_date field"))]
    pub reservation_date: Option<DateTime<Utc>>,
    #[validate(
        required(message = "You forgot the party_size field"),
        range(min = 1, message = "The party_size must be at least 1")
    )]
    pub party_size: Option<i32>,
    // reference of the customer
    #[validate(required(message = "You forgot the customer_id field"))]
    pub customer_id: Option<String>
}

// Fields that aren't listed here are dropped by serde
#[derive(Deserialize, Validate, Debug)]
pub struct BookingPatchForm{
    pub reservation_date: Option<DateTime<Utc>>,
    #[validate(range(min = 1, message = "The party_size must be at least 1"))]
    pub party_size: Option<i32>,
    pub customer_id: Option<String>
}

impl From<BookingPatchForm> for BookingPatch {
    fn from(form: BookingPatchForm) -> Self {
        BookingPatch{
            reservation_date: form.reservation_date,
            party_size: form.party_size,
            customer_reference: form.customer_id
        }
    }
}

#[tracing::instrument(
    "Creating booking",
    skip(pool)
)]
pub async fn create_booking(
    pool: web::Data<DbPool>,
    body: web::Json<BookingForm>
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let BookingForm{ reservation_date, party_size, customer_id } = body.into_inner();
    let (Some(reservation_date), Some(party_size), Some(customer_reference)) = (reservation_date, party_size, customer_id) else {
        return Err(ApiError::invalid("booking", "Incomplete booking"));
    };

    let conn = get_pooled_connection(&pool).await?;
    let booking = insert_booking(conn, BookingDraft{ reservation_date, party_size, customer_reference }).await?;

    Ok(Envelope::data(booking).created())
}

#[tracing::instrument(
    "Updating booking",
    skip(pool)
)]
pub async fn update_booking(
    pool: web::Data<DbPool>,
    reference: web::Path<String>,
    body: web::Json<BookingPatchForm>
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let conn = get_pooled_connection(&pool).await?;
    let updated = update_booking_row(conn, reference.into_inner(), body.into_inner().into()).await?;

    Ok(Envelope::data(updated).ok())
}
