mod helpers;
mod health_check;
mod dish;
mod product;
mod booking;
mod order;
mod diagnose;
