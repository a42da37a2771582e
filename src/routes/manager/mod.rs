mod booking;
mod order;
mod diagnose;

pub use booking::*;
pub use order::*;
pub use diagnose::*;
