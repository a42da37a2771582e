use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    db_interaction::orders::{insert_dish_orders, DishOrderSubmission, OrderLine},
    error::ApiError,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Validate, Debug)]
pub struct OrderForm{
    #[validate(
        required(message = "You forgot the over_cooked_level field"),
        length(min = 1, message = "You forgot the over_cooked_level field")
    )]
    pub over_cooked_level: Option<String>,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "The order must contain at least one dish"),
        custom(function = "validate_order_lines")
    )]
    pub items: Vec<OrderLine>
}

fn validate_order_lines(items: &[OrderLine]) -> Result<(), ValidationError> {
    match items.iter().find(|item| item.quantity < 1) {
        Some(item) => {
            let mut error = ValidationError::new("range");
            error.message = Some(format!("The quantity of {} must be at least 1", item.dish_reference).into());
            Err(error)
        },
        None => Ok(())
    }
}

#[tracing::instrument(
    "Submitting dishes of an order",
    skip(pool)
)]
pub async fn submit_order(
    pool: web::Data<DbPool>,
    reference: web::Path<String>,
    body: web::Json<OrderForm>
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let OrderForm{ over_cooked_level, items } = body.into_inner();
    let submission = DishOrderSubmission{
        order_reference: reference.into_inner(),
        over_cooked_level: over_cooked_level.unwrap_or_default(),
        items
    };

    let conn = get_pooled_connection(&pool).await?;
    let inserted = insert_dish_orders(conn, submission).await?;

    Ok(Envelope::data(inserted).created())
}
