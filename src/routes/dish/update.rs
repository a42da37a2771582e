use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    db_interaction::dish::update_dish as update_dish_row,
    domain::category::validate_dish_type,
    error::ApiError,
    models::DishChangeset,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Validate, Debug)]
pub struct DishPatchForm{
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "The price can't be negative"))]
    pub price: Option<f64>,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_dish_type"))]
    pub kind: Option<String>,
    pub last_preparation_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "The conservation_time can't be negative"))]
    pub conservation_time: Option<i32>,
    pub active: Option<bool>
}

impl From<DishPatchForm> for DishChangeset {
    fn from(form: DishPatchForm) -> Self {
        DishChangeset{
            name: form.name,
            description: form.description,
            price: form.price,
            type_: form.kind,
            last_preparation_date: form.last_preparation_date,
            conservation_time: form.conservation_time,
            active: form.active
        }
    }
}

#[tracing::instrument(
    "Updating dish",
    skip(pool)
)]
pub async fn update_dish(
    pool: web::Data<DbPool>,
    reference: web::Path<String>,
    body: web::Json<DishPatchForm>
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let conn = get_pooled_connection(&pool).await?;
    let updated = update_dish_row(conn, reference.into_inner(), body.into_inner().into()).await?;

    Ok(Envelope::data(updated).ok())
}
