use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::{AsChangeset, Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::Serialize;

use crate::schema::{bookings, customer_dishes, customers, dish_orders, dishes, orders, products, servers};

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Customer{
    #[serde(skip_serializing)]
    pub id: i32,
    pub reference: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub favorite_food: Option<i32>,
    pub favorite_drink: Option<i32>,
    #[serde(rename = "type")]
    pub type_: String,
    pub bill_split: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>
}

#[derive(Insertable, Debug)]
#[diesel(table_name = customers)]
pub struct NewCustomer{
    pub reference: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub favorite_food: Option<i32>,
    pub favorite_drink: Option<i32>,
    pub type_: String,
    pub bill_split: String
}

#[derive(AsChangeset, Debug)]
#[diesel(table_name = customers)]
pub struct CustomerChangeset{
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub favorite_food: Option<i32>,
    pub favorite_drink: Option<i32>,
    pub type_: String,
    pub bill_split: String
}

#[derive(Queryable, Selectable, Serialize, Debug)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerName{
    pub first_name: String,
    pub last_name: String
}

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone)]
#[diesel(table_name = dishes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Dish{
    #[serde(skip_serializing)]
    pub id: i32,
    pub reference: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub type_: String,
    pub last_preparation_date: Option<NaiveDate>,
    pub conservation_time: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>
}

#[derive(Insertable, Debug)]
#[diesel(table_name = dishes)]
pub struct NewDish{
    pub reference: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub type_: String,
    pub last_preparation_date: Option<NaiveDate>,
    pub conservation_time: Option<i32>,
    pub active: bool
}

// None fields are left untouched
#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = dishes)]
pub struct DishChangeset{
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub type_: Option<String>,
    pub last_preparation_date: Option<NaiveDate>,
    pub conservation_time: Option<i32>,
    pub active: Option<bool>
}

impl DishChangeset {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.type_.is_none()
            && self.last_preparation_date.is_none()
            && self.conservation_time.is_none()
            && self.active.is_none()
    }
}

#[derive(Queryable, Selectable, Serialize, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product{
    #[serde(skip_serializing)]
    pub id: i32,
    pub reference: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(Insertable, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct{
    pub reference: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub published: bool
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = products)]
pub struct ProductChangeset{
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub published: Option<bool>
}

impl ProductChangeset {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.published.is_none()
    }
}

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug)]
#[diesel(table_name = servers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Server{
    pub id: i32,
    pub first_name: String,
    pub last_name: String
}

#[derive(Queryable, Selectable, Identifiable, Associations, Serialize, Debug)]
#[diesel(belongs_to(Customer))]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Booking{
    #[serde(skip_serializing)]
    pub id: i32,
    pub reference: String,
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub customer_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(Insertable, Debug)]
#[diesel(table_name = bookings)]
pub struct NewBooking{
    pub reference: String,
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub customer_id: i32
}

// Only the mutable booking columns, None fields are left untouched
#[derive(AsChangeset, Debug)]
#[diesel(table_name = bookings)]
pub struct BookingChangeset{
    pub reservation_date: Option<DateTime<Utc>>,
    pub party_size: Option<i32>,
    pub customer_id: Option<i32>
}

#[derive(Queryable, Selectable, Identifiable, Associations, Serialize, Debug)]
#[diesel(belongs_to(Customer))]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order{
    #[serde(skip_serializing)]
    pub id: i32,
    pub reference: String,
    pub customer_id: i32,
    pub server_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = dish_orders)]
pub struct NewDishOrder{
    pub order_id: i32,
    pub dish_id: i32,
    pub quantity: i32,
    pub price: f64,
    pub over_cooked_level: String
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug)]
#[diesel(belongs_to(Customer))]
#[diesel(belongs_to(Dish))]
#[diesel(table_name = customer_dishes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerDish{
    pub id: i32,
    pub customer_id: i32,
    pub dish_id: i32
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = customer_dishes)]
pub struct NewCustomerDish{
    pub customer_id: i32,
    pub dish_id: i32
}
