pub mod phone_number;
pub mod reference;
pub mod category;
pub mod text;
