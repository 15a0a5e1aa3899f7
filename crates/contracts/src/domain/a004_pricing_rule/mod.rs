pub mod aggregate;
pub mod cost;
