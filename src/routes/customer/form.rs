use serde::Deserialize;
use validator::Validate;

use crate::{
    db_interaction::customer::CustomerFields,
    domain::{
        category::{validate_bill_split, validate_customer_type},
        phone_number::validate_phone_number
    }
};

// Writable customer columns, shared by creation and update
#[derive(Deserialize, Validate, Debug)]
pub struct CustomerForm{
    #[validate(required(message = "You forgot the first_name field"))]
    pub first_name: Option<String>,
    #[validate(required(message = "You forgot the last_name field"))]
    pub last_name: Option<String>,
    #[validate(
        required(message = "You forgot the phone_number field"),
        custom(function = "validate_phone_number")
    )]
    pub phone_number: Option<String>,
    #[validate(required(message = "You forgot the address field"))]
    pub address: Option<String>,
    #[validate(required(message = "You forgot the city field"))]
    pub city: Option<String>,
    #[validate(required(message = "You forgot the favorite_food field"))]
    pub favorite_food: Option<String>,
    #[validate(required(message = "You forgot the favorite_drink field"))]
    pub favorite_drink: Option<String>,
    #[serde(rename = "type")]
    #[validate(
        required(message = "You forgot the type field"),
        custom(function = "validate_customer_type")
    )]
    pub kind: Option<String>,
    #[validate(
        required(message = "You forgot the bill_split field"),
        custom(function = "validate_bill_split")
    )]
    pub bill_split: Option<String>
}

impl CustomerForm {
    // Only called once `validate` passed, a missing field still can't panic
    pub fn into_fields(self) -> CustomerFields {
        CustomerFields{
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default().trim().to_string(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            favorite_food: self.favorite_food.unwrap_or_default(),
            favorite_drink: self.favorite_drink.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            bill_split: self.bill_split.unwrap_or_default()
        }
    }
}
