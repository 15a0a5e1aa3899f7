use crate::integer_id;
use serde::{Deserialize, Serialize};

integer_id!(
    /// Unique add-on category identifier
    AddOnCategoryId
);

/// Display grouping for add-ons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnCategory {
    pub id: AddOnCategoryId,
    pub name: String,
}
