use crate::domain::common::text_id::string_or_number;
use serde::{Deserialize, Serialize};

/// Tour reference embedded in a pricing rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourRef {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
}

/// Adult/child price tier for a tour.
///
/// A rule covers group sizes from `min_adults` to `max_adults` inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub min_adults: u32,
    pub max_adults: u32,
    pub price_per_adult: f64,
    pub price_per_child: f64,
    /// The API omits the tour when it was deleted
    #[serde(default)]
    pub tour: Option<TourRef>,
}

impl PricingRule {
    /// True when `adults` falls inside this rule's band
    pub fn covers(&self, adults: u32) -> bool {
        self.min_adults <= adults && adults <= self.max_adults
    }

    pub fn tour_id(&self) -> Option<&str> {
        self.tour.as_ref().map(|t| t.id.as_str())
    }

    pub fn tour_name(&self) -> &str {
        self.tour
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or("No Tour Assigned")
    }

    /// Edit form pre-filled from this rule
    pub fn to_dto(&self) -> PricingRuleDto {
        PricingRuleDto {
            tour_id: self.tour_id().map(str::to_string),
            min_adults: self.min_adults,
            max_adults: self.max_adults,
            price_per_adult: self.price_per_adult,
            price_per_child: self.price_per_child,
        }
    }
}

/// Create/update payload.
///
/// `tour_id` is required on create and ignored by the API on update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRuleDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_id: Option<String>,
    pub min_adults: u32,
    pub max_adults: u32,
    pub price_per_adult: f64,
    pub price_per_child: f64,
}

impl PricingRuleDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_adults > self.max_adults {
            return Err("Min adults must not exceed max adults".into());
        }
        for (label, price) in [
            ("Price per adult", self.price_per_adult),
            ("Price per child", self.price_per_child),
        ] {
            if !price.is_finite() || price < 0.0 {
                return Err(format!("{} must be a non-negative number", label));
            }
        }
        Ok(())
    }

    pub fn validate_for_create(&self) -> Result<(), String> {
        match self.tour_id.as_deref().map(str::trim) {
            None | Some("") => return Err("Select a tour for the pricing rule".into()),
            Some(_) => {}
        }
        self.validate()
    }

    /// Update payload: everything except the tour
    pub fn for_update(&self) -> Self {
        Self {
            tour_id: None,
            ..self.clone()
        }
    }
}

/// Find the rule whose band covers `adults` for the given tour.
///
/// Bands are not guaranteed to be disjoint; the narrowest covering band wins and
/// ties go to the rule listed first. Display-only: the cost itself is priced by
/// the API.
pub fn applicable_rule<'a>(
    rules: &'a [PricingRule],
    tour_id: &str,
    adults: u32,
) -> Option<&'a PricingRule> {
    rules
        .iter()
        .filter(|r| r.tour_id() == Some(tour_id) && r.covers(adults))
        .min_by_key(|r| r.max_adults - r.min_adults)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str, tour: &str, min: u32, max: u32) -> PricingRule {
        PricingRule {
            id: id.into(),
            min_adults: min,
            max_adults: max,
            price_per_adult: 100.0,
            price_per_child: 50.0,
            tour: Some(TourRef {
                id: tour.into(),
                name: format!("Tour {}", tour),
            }),
        }
    }

    #[test]
    fn test_covers_is_inclusive_on_both_edges() {
        let r = rule("r1", "t1", 2, 4);
        assert!(!r.covers(1));
        assert!(r.covers(2));
        assert!(r.covers(4));
        assert!(!r.covers(5));
    }

    #[test]
    fn test_applicable_rule_filters_by_tour() {
        let rules = vec![rule("a", "t1", 1, 3), rule("b", "t2", 1, 3)];
        assert_eq!(applicable_rule(&rules, "t2", 2).map(|r| r.id.as_str()), Some("b"));
        assert!(applicable_rule(&rules, "t3", 2).is_none());
    }

    #[test]
    fn test_applicable_rule_prefers_narrowest_band() {
        let rules = vec![rule("wide", "t1", 1, 10), rule("narrow", "t1", 3, 4), rule("same", "t1", 3, 4)];
        assert_eq!(applicable_rule(&rules, "t1", 3).map(|r| r.id.as_str()), Some("narrow"));
        assert_eq!(applicable_rule(&rules, "t1", 8).map(|r| r.id.as_str()), Some("wide"));
        assert!(applicable_rule(&rules, "t1", 11).is_none());
    }

    #[test]
    fn test_rule_without_tour_never_applies() {
        let mut orphan = rule("o", "t1", 1, 5);
        orphan.tour = None;
        assert_eq!(orphan.tour_name(), "No Tour Assigned");
        assert!(applicable_rule(&[orphan], "t1", 2).is_none());
    }

    #[test]
    fn test_deserializes_api_payload() {
        let json = r#"{
            "id": "r-1",
            "minAdults": 1,
            "maxAdults": 4,
            "pricePerAdult": 120,
            "pricePerChild": 60.5,
            "tour": {"id": "7", "name": "Serengeti"}
        }"#;
        let r: PricingRule = serde_json::from_str(json).unwrap();
        assert_eq!(r.max_adults, 4);
        assert_eq!(r.price_per_child, 60.5);
        assert_eq!(r.tour_name(), "Serengeti");
    }

    #[test]
    fn test_deserializes_numeric_ids() {
        let json = r#"{
            "id": 5,
            "minAdults": 2,
            "maxAdults": 6,
            "pricePerAdult": 90,
            "pricePerChild": 45,
            "tour": {"id": 7, "name": "Serengeti"}
        }"#;
        let r: PricingRule = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, "5");
        assert_eq!(r.tour_id(), Some("7"));
        assert_eq!(applicable_rule(&[r], "7", 3).map(|r| r.id.as_str()), Some("5"));
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = rule("r", "t1", 1, 4).to_dto();
        assert!(dto.validate_for_create().is_ok());

        dto.min_adults = 5;
        assert!(dto.validate().is_err());

        dto.min_adults = 1;
        dto.price_per_child = -1.0;
        assert!(dto.validate().is_err());

        let missing_tour = PricingRuleDto {
            tour_id: Some("  ".into()),
            ..PricingRuleDto::default()
        };
        assert!(missing_tour.validate_for_create().is_err());
    }

    #[test]
    fn test_update_payload_drops_tour() {
        let dto = rule("r", "t1", 1, 4).to_dto().for_update();
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("tourId").is_none());
        assert_eq!(json["pricePerAdult"], 100.0);
    }
}
