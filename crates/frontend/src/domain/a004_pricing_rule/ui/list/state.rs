use contracts::domain::a003_tour::aggregate::Tour;
use contracts::domain::a004_pricing_rule::aggregate::{PricingRule, PricingRuleDto};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct PricingRuleListState {
    pub rules: Vec<PricingRule>,
    pub tours: Vec<Tour>,
    /// Rule currently open in the edit form
    pub editing: Option<String>,
    pub is_loaded: bool,
}

impl PricingRuleListState {
    /// Store a rule echoed back by a save. Updates do not send the tour, so
    /// an echo without one keeps the tour already shown.
    pub fn upsert(&mut self, mut rule: PricingRule) {
        match self.rules.iter_mut().find(|r| r.id == rule.id) {
            Some(existing) => {
                if rule.tour.is_none() {
                    rule.tour = existing.tour.take();
                }
                *existing = rule;
            }
            None => self.rules.push(rule),
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.rules.retain(|r| r.id != id);
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
    }
}

/// Raw text of the rule form, as typed
#[derive(Clone, Debug, PartialEq)]
pub struct RuleForm {
    pub tour_id: String,
    pub min_adults: String,
    pub max_adults: String,
    pub price_per_adult: String,
    pub price_per_child: String,
}

impl Default for RuleForm {
    fn default() -> Self {
        Self {
            tour_id: String::new(),
            min_adults: "1".into(),
            max_adults: "1".into(),
            price_per_adult: "0".into(),
            price_per_child: "0".into(),
        }
    }
}

impl RuleForm {
    pub fn from_rule(rule: &PricingRule) -> Self {
        Self {
            tour_id: rule.tour_id().unwrap_or_default().to_string(),
            min_adults: rule.min_adults.to_string(),
            max_adults: rule.max_adults.to_string(),
            price_per_adult: rule.price_per_adult.to_string(),
            price_per_child: rule.price_per_child.to_string(),
        }
    }

    pub fn to_dto(&self) -> Result<PricingRuleDto, String> {
        let tour_id = self.tour_id.trim();
        Ok(PricingRuleDto {
            tour_id: (!tour_id.is_empty()).then(|| tour_id.to_string()),
            min_adults: parse_count("Min adults", &self.min_adults)?,
            max_adults: parse_count("Max adults", &self.max_adults)?,
            price_per_adult: parse_amount("Price per adult", &self.price_per_adult)?,
            price_per_child: parse_amount("Price per child", &self.price_per_child)?,
        })
    }
}

pub fn parse_count(label: &str, raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format!("{} must be a whole number", label))
}

fn parse_amount(label: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("{} must be a number", label))
}

pub fn create_state() -> RwSignal<PricingRuleListState> {
    RwSignal::new(PricingRuleListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_pricing_rule::aggregate::TourRef;

    fn rule(id: &str) -> PricingRule {
        PricingRule {
            id: id.into(),
            min_adults: 2,
            max_adults: 6,
            price_per_adult: 150.0,
            price_per_child: 75.5,
            tour: Some(TourRef {
                id: "3".into(),
                name: "Coastal walk".into(),
            }),
        }
    }

    #[test]
    fn test_form_round_trips_a_rule() {
        let dto = RuleForm::from_rule(&rule("r1")).to_dto().unwrap();
        assert_eq!(dto, rule("r1").to_dto());
    }

    #[test]
    fn test_form_rejects_bad_numbers() {
        let form = RuleForm {
            min_adults: "two".into(),
            ..RuleForm::default()
        };
        assert_eq!(form.to_dto().unwrap_err(), "Min adults must be a whole number");

        let form = RuleForm {
            price_per_child: "".into(),
            ..RuleForm::default()
        };
        assert!(form.to_dto().is_err());
    }

    #[test]
    fn test_blank_tour_becomes_none() {
        let dto = RuleForm::default().to_dto().unwrap();
        assert_eq!(dto.tour_id, None);
        assert!(dto.validate_for_create().is_err());
    }

    #[test]
    fn test_update_echo_without_tour_keeps_tour() {
        let mut state = PricingRuleListState::default();
        state.upsert(rule("r1"));

        let mut echoed = rule("r1");
        echoed.tour = None;
        echoed.price_per_adult = 175.0;
        state.upsert(echoed);

        assert_eq!(state.rules[0].price_per_adult, 175.0);
        assert_eq!(state.rules[0].tour_name(), "Coastal walk");
    }

    #[test]
    fn test_upsert_and_remove() {
        let mut state = PricingRuleListState::default();
        state.upsert(rule("r1"));
        let mut changed = rule("r1");
        changed.max_adults = 8;
        state.upsert(changed);
        assert_eq!(state.rules.len(), 1);
        assert_eq!(state.rules[0].max_adults, 8);

        state.editing = Some("r1".into());
        state.remove("r1");
        assert!(state.rules.is_empty());
        assert!(state.editing.is_none());
    }
}
