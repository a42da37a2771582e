pub mod resolver;
pub mod orders;
pub mod booking;
pub mod diagnose;
pub mod customer;
pub mod dish;
pub mod product;
