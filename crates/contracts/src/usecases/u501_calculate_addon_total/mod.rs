//! Add-on total calculation: the client sends ids and counts only, the API
//! prices them.

pub mod request;
pub mod response;

pub use request::{CalculateTotalRequest, SelectedAddOn};
pub use response::CalculateTotalResponse;
