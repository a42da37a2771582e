mod form;
mod get;
mod post;
mod update;
mod delete;
mod find;

pub use form::*;
pub use get::*;
pub use post::*;
pub use update::*;
pub use delete::*;
pub use find::*;
