use crate::domain::a002_addon_category::aggregate::AddOnCategoryId;
use crate::integer_id;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

integer_id!(
    /// Unique add-on identifier
    AddOnId
);

// ============================================================================
// Aggregate
// ============================================================================

/// Optional purchasable item offered alongside a tour booking.
///
/// `price` is for display only. The authoritative total always comes from the
/// calculation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: AddOnId,
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: AddOnCategoryId,
    pub price: f64,
}

impl AddOn {
    /// Edit form pre-filled from this add-on
    pub fn to_dto(&self) -> AddOnDto {
        AddOnDto {
            id: Some(self.id),
            name: self.name.clone(),
            category_id: self.category_id,
            price: self.price,
        }
    }

    /// Apply a successful update to the local copy
    pub fn apply(&mut self, dto: &AddOnDto) {
        self.name = dto.name.trim().to_string();
        self.category_id = dto.category_id;
        self.price = dto.price;
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOnDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AddOnId>,
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: AddOnCategoryId,
    pub price: f64,
}

impl AddOnDto {
    pub fn new(name: impl Into<String>, category_id: AddOnCategoryId, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            category_id,
            price,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Add-on name must not be empty".into());
        }
        if !self.price.is_finite() {
            return Err("Add-on price must be a number".into());
        }
        if self.price < 0.0 {
            return Err("Add-on price must not be negative".into());
        }
        Ok(())
    }

    /// Payload as sent over the wire: name trimmed, id left to the URL path
    pub fn normalized(&self) -> Self {
        Self {
            id: None,
            name: self.name.trim().to_string(),
            category_id: self.category_id,
            price: self.price,
        }
    }
}

/// Group add-ons under their category, keeping catalog order inside each group.
///
/// Categories without add-ons still get an (empty) group so the screen can show
/// every heading; add-ons whose category is unknown are dropped.
pub fn group_by_category<'a, C>(
    categories: &'a [C],
    addons: &'a [AddOn],
    category_id: impl Fn(&C) -> AddOnCategoryId,
) -> Vec<(&'a C, Vec<&'a AddOn>)> {
    categories
        .iter()
        .map(|category| {
            let id = category_id(category);
            let items = addons.iter().filter(|a| a.category_id == id).collect();
            (category, items)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addon(id: i64, category: i64, price: f64) -> AddOn {
        AddOn {
            id: AddOnId(id),
            name: format!("Add-on {}", id),
            category_id: AddOnCategoryId(category),
            price,
        }
    }

    #[test]
    fn test_deserializes_camel_case_payload() {
        let json = r#"{"id":3,"name":"Lunch box","categoryId":2,"price":12.5}"#;
        let addon: AddOn = serde_json::from_str(json).unwrap();
        assert_eq!(addon.id, AddOnId(3));
        assert_eq!(addon.category_id, AddOnCategoryId(2));
        assert_eq!(addon.price, 12.5);
    }

    #[test]
    fn test_dto_omits_missing_id() {
        let dto = AddOnDto::new("Binoculars", AddOnCategoryId(1), 4.0);
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["categoryId"], 1);
    }

    #[test]
    fn test_validate_rejects_blank_name_and_negative_price() {
        assert!(AddOnDto::new("  ", AddOnCategoryId(1), 1.0).validate().is_err());
        assert!(AddOnDto::new("Tent", AddOnCategoryId(1), -0.5).validate().is_err());
        assert!(AddOnDto::new("Tent", AddOnCategoryId(1), f64::NAN).validate().is_err());
        assert!(AddOnDto::new("Tent", AddOnCategoryId(1), 0.0).validate().is_ok());
    }

    #[test]
    fn test_apply_trims_name() {
        let mut a = addon(1, 1, 10.0);
        let mut dto = a.to_dto();
        dto.name = "  Guide  ".into();
        dto.price = 15.0;
        a.apply(&dto);
        assert_eq!(a.name, "Guide");
        assert_eq!(a.price, 15.0);
    }

    #[test]
    fn test_group_by_category_keeps_empty_groups() {
        let categories = vec![(1, "Food"), (2, "Gear"), (3, "Empty")];
        let addons = vec![addon(1, 2, 5.0), addon(2, 1, 3.0), addon(3, 2, 1.0), addon(4, 9, 1.0)];
        let groups = group_by_category(&categories, &addons, |c| AddOnCategoryId(c.0));

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].1.iter().map(|a| a.id.0).collect::<Vec<_>>(), vec![2]);
        assert_eq!(groups[1].1.iter().map(|a| a.id.0).collect::<Vec<_>>(), vec![1, 3]);
        assert!(groups[2].1.is_empty());
    }
}
