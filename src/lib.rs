pub mod routes;
pub mod startup;
pub mod configuration;
pub mod telemetry;
pub mod utils;
pub mod schema;
pub mod models;
pub mod error;
pub mod response;
pub mod domain;
pub mod db_interaction;
