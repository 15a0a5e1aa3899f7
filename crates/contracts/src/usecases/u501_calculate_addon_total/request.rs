use crate::domain::a001_addon::aggregate::AddOnId;
use serde::{Deserialize, Serialize};

/// One selected add-on and its quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedAddOn {
    pub id: AddOnId,
    pub count: u32,
}

/// `POST /calculate-total` body
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateTotalRequest {
    pub selected_addons: Vec<SelectedAddOn>,
}

impl CalculateTotalRequest {
    pub fn new(selected_addons: Vec<SelectedAddOn>) -> Self {
        Self { selected_addons }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let req = CalculateTotalRequest::new(vec![
            SelectedAddOn { id: AddOnId(1), count: 3 },
            SelectedAddOn { id: AddOnId(2), count: 2 },
        ]);
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"selectedAddons":[{"id":1,"count":3},{"id":2,"count":2}]}"#
        );
    }
}
