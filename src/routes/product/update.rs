use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::{
    db_interaction::product::update_product as update_product_row,
    error::ApiError,
    models::ProductChangeset,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Validate, Debug)]
pub struct ProductPatchForm{
    #[validate(length(min = 1, message = "The title can't be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "The price can't be negative"))]
    pub price: Option<f64>,
    pub published: Option<bool>
}

impl From<ProductPatchForm> for ProductChangeset {
    fn from(form: ProductPatchForm) -> Self {
        ProductChangeset{
            title: form.title,
            description: form.description,
            price: form.price,
            published: form.published
        }
    }
}

#[tracing::instrument(
    "Updating product",
    skip(pool)
)]
pub async fn update_product(
    pool: web::Data<DbPool>,
    reference: web::Path<String>,
    body: web::Json<ProductPatchForm>
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let conn = get_pooled_connection(&pool).await?;
    let updated = update_product_row(conn, reference.into_inner(), body.into_inner().into()).await?;

    Ok(Envelope::data(updated).ok())
}
