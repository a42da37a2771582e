use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::{
    db_interaction::customer::find_customers_by_name,
    domain::{category::validate_customer_type, text::validate_not_blank},
    error::ApiError,
    models::CustomerName,
    response::Envelope,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Validate, Debug)]
pub struct FindByNameForm{
    #[validate(
        required(message = "You forgot the fullname field"),
        custom(function = "validate_not_blank")
    )]
    pub fullname: Option<String>,
    #[serde(rename = "type")]
    #[validate(
        required(message = "You forgot the type field"),
        custom(function = "validate_customer_type")
    )]
    pub kind: Option<String>
}

pub fn found_message(count: usize) -> String {
    match count {
        0 => "customers not found".to_string(),
        1 => "1 customer was found.".to_string(),
        n => format!("{} customers were found.", n)
    }
}

#[tracing::instrument(
    "Finding customers by name",
    skip(pool)
)]
pub async fn find_customers(
    pool: web::Data<DbPool>,
    body: web::Json<FindByNameForm>
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let FindByNameForm{ fullname, kind } = body.into_inner();
    let conn = get_pooled_connection(&pool).await?;

    let customers = find_customers_by_name(
        conn,
        fullname.unwrap_or_default(),
        kind.unwrap_or_default()
    ).await?;
    let msg = found_message(customers.len());

    let envelope = if customers.is_empty() {
        Envelope::<Vec<CustomerName>>::empty()
    } else {
        Envelope::data(customers)
    };

    Ok(envelope.with_msg(msg).ok())
}
