use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    db_interaction::dish::insert_dish,
    domain::category::validate_dish_type,
    error::ApiError,
    models::NewDish,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Validate, Debug)]
pub struct DishForm{
    #[validate(required(message = "You forgot the name field"))]
    pub name: Option<String>,
    #[validate(required(message = "You forgot the description field"))]
    pub description: Option<String>,
    #[validate(
        required(message = "You forgot the price field"),
        range(min = 0.0, message = "The price can't be negative")
    )]
    pub price: Option<f64>,
    #[serde(rename = "type")]
    #[validate(
        required(message = "You forgot the type field"),
        custom(function = "validate_dish_type")
    )]
    pub kind: Option<String>,
    pub last_preparation_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "The conservation_time can't be negative"))]
    pub conservation_time: Option<i32>,
    pub active: Option<bool>
}

impl DishForm {
    // The reference is generated when the row is written
    pub fn into_new_dish(self) -> NewDish {
        NewDish{
            reference: String::new(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            type_: self.kind.unwrap_or_default(),
            last_preparation_date: self.last_preparation_date,
            conservation_time: self.conservation_time,
            active: self.active.unwrap_or(true)
        }
    }
}

#[tracing::instrument(
    "Creating dish",
    skip(pool)
)]
pub async fn create_dish(
    pool: web::Data<DbPool>,
    body: web::Json<DishForm>
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let conn = get_pooled_connection(&pool).await?;
    let dish = insert_dish(conn, body.into_inner().into_new_dish()).await?;

    Ok(Envelope::data(dish).created())
}
