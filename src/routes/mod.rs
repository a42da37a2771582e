mod health_check;
mod customer;
mod dish;
mod product;
mod manager;

pub use health_check::*;
pub use customer::*;
pub use dish::*;
pub use product::*;
pub use manager::*;
