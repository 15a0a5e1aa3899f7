use serde::{Deserialize, Serialize};

/// Server-side cost calculation request for a tour party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCalculationRequest {
    pub adults: u32,
    pub children: u32,
    pub tour_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCalculationData {
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCalculationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<CostCalculationData>,
}

impl CostCalculationResponse {
    /// The priced total, or the server's explanation why there is none
    pub fn into_total(self) -> Result<f64, String> {
        if !self.success {
            return Err(if self.message.is_empty() {
                "Cost calculation failed".to_string()
            } else {
                self.message
            });
        }
        match self.data {
            Some(d) if d.total_cost.is_finite() => Ok(d.total_cost),
            _ => Err("Cost calculation response has no total".to_string()),
        }
    }
}
