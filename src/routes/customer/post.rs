use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::{
    db_interaction::customer::insert_customer,
    error::{collect_validation, ApiError},
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

use super::CustomerForm;

#[derive(Deserialize, Validate, Debug)]
pub struct NewCustomerForm{
    #[validate(
        required(message = "You forgot the email field"),
        email(message = "email is not valid")
    )]
    pub email: Option<String>,
    #[serde(flatten)]
    pub customer: CustomerForm
}

#[tracing::instrument(
    "Creating customer",
    skip(pool)
)]
pub async fn create_customer(
    pool: web::Data<DbPool>,
    body: web::Json<NewCustomerForm>
) -> Result<HttpResponse, ApiError> {
    collect_validation([body.validate(), body.customer.validate()])?;

    let NewCustomerForm{ email, customer } = body.into_inner();
    let conn = get_pooled_connection(&pool).await?;

    let created = insert_customer(
        conn,
        email.unwrap_or_default(),
        customer.into_fields()
    ).await?;

    Ok(Envelope::data(created).created())
}
