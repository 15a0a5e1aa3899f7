use crate::integer_id;
use serde::{Deserialize, Serialize};

integer_id!(
    /// Unique tour identifier
    TourId
);

/// Tour as returned by the tour listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: TourId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}
