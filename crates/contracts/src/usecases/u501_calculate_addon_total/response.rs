use serde::{Deserialize, Serialize};

/// `POST /calculate-total` response.
///
/// `total` is only meaningful when `success` is set; `message` explains a
/// failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculateTotalResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CalculateTotalResponse {
    pub fn ok(total: f64) -> Self {
        Self {
            success: true,
            total: Some(total),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            total: None,
            message: Some(message.into()),
        }
    }
}
