use crate::shared::api_utils::{api_url, delete, get_data, post_data, put_data};
use contracts::domain::a004_pricing_rule::aggregate::{PricingRule, PricingRuleDto};
use contracts::domain::a004_pricing_rule::cost::{CostCalculationRequest, CostCalculationResponse};

pub async fn fetch_all() -> Result<Vec<PricingRule>, String> {
    get_data("/pricing-rules").await
}

pub async fn create(dto: &PricingRuleDto) -> Result<PricingRule, String> {
    dto.validate_for_create()?;
    post_data("/pricing-rules", dto).await
}

pub async fn update(id: &str, dto: &PricingRuleDto) -> Result<PricingRule, String> {
    dto.validate()?;
    put_data(&format!("/pricing-rules/{}", id), &dto.for_update()).await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&format!("/pricing-rules/{}", id)).await
}

/// Server-priced cost for a party. This endpoint answers with
/// `{success, message, data: {totalCost}}` rather than the usual envelope.
pub async fn calculate_cost(request: &CostCalculationRequest) -> Result<f64, String> {
    let response = gloo_net::http::Request::post(&api_url("/pricing-rules/calculateCost"))
        .json(request)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    if !response.ok() {
        return match serde_json::from_str::<CostCalculationResponse>(&text) {
            Ok(parsed) if !parsed.message.is_empty() => {
                Err(format!("HTTP {}: {}", status, parsed.message))
            }
            _ => Err(format!("HTTP {}", status)),
        };
    }

    serde_json::from_str::<CostCalculationResponse>(&text)
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_total()
}
