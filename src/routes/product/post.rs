use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::{
    db_interaction::product::insert_product,
    error::ApiError,
    models::NewProduct,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Validate, Debug)]
pub struct ProductForm{
    #[validate(
        required(message = "You forgot the title field"),
        length(min = 1, message = "You forgot the title field")
    )]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "The price can't be negative"))]
    pub price: Option<f64>,
    pub published: Option<bool>
}

impl ProductForm {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct{
            reference: String::new(),
            title: self.title.unwrap_or_default(),
            description: self.description,
            price: self.price.unwrap_or_default(),
            published: self.published.unwrap_or(false)
        }
    }
}

#[tracing::instrument(
    "Creating product",
    skip(pool)
)]
pub async fn create_product(
    pool: web::Data<DbPool>,
    body: web::Json<ProductForm>
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let conn = get_pooled_connection(&pool).await?;
    let product = insert_product(conn, body.into_inner().into_new_product()).await?;

    Ok(Envelope::data(product).created())
}
