use crate::shared::api_utils::api_url;
use contracts::usecases::u501_calculate_addon_total::{
    CalculateTotalRequest, CalculateTotalResponse, SelectedAddOn,
};
use thiserror::Error;

/// Why a total could not be obtained. None of these are fatal: the caller
/// keeps showing the previous total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("calculation rejected: {0}")]
    Rejected(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Remote pricing of a selection. Only ids and counts go out; prices are
/// resolved by the server.
#[allow(async_fn_in_trait)]
pub trait TotalCalculator {
    async fn calculate(&self, selection: &[SelectedAddOn]) -> Result<f64, CalculatorError>;
}

/// `POST {api}/calculate-total`
#[derive(Debug, Clone)]
pub struct HttpTotalCalculator {
    url: String,
}

impl HttpTotalCalculator {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Endpoint on the configured API base
    pub fn from_config() -> Self {
        Self::new(api_url("/calculate-total"))
    }
}

impl TotalCalculator for HttpTotalCalculator {
    async fn calculate(&self, selection: &[SelectedAddOn]) -> Result<f64, CalculatorError> {
        let body = CalculateTotalRequest::new(selection.to_vec());

        let response = gloo_net::http::Request::post(&self.url)
            .json(&body)
            .map_err(|e| CalculatorError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| CalculatorError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CalculatorError::Transport(e.to_string()))?;

        interpret_response(status, &text)
    }
}

/// Turn a raw HTTP status and body into a total.
///
/// `success=true` without a finite `total` counts as malformed, so callers
/// never display a missing or NaN total.
pub fn interpret_response(status: u16, body: &str) -> Result<f64, CalculatorError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<CalculateTotalResponse>(body)
            .ok()
            .and_then(|r| r.message)
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "Failed to calculate total".to_string()
                } else {
                    trimmed.to_string()
                }
            });
        return Err(CalculatorError::Status { status, message });
    }

    let parsed: CalculateTotalResponse =
        serde_json::from_str(body).map_err(|e| CalculatorError::Malformed(e.to_string()))?;

    if !parsed.success {
        return Err(CalculatorError::Rejected(
            parsed
                .message
                .unwrap_or_else(|| "Failed to calculate total".to_string()),
        ));
    }

    match parsed.total {
        Some(total) if total.is_finite() => Ok(total),
        Some(total) => Err(CalculatorError::Malformed(format!("total is not a number: {}", total))),
        None => Err(CalculatorError::Malformed("success without total".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        assert_eq!(interpret_response(200, r#"{"success":true,"total":40}"#), Ok(40.0));
        assert_eq!(interpret_response(201, r#"{"success":true,"total":0.5}"#), Ok(0.5));
    }

    #[test]
    fn test_success_without_total_is_malformed() {
        assert!(matches!(
            interpret_response(200, r#"{"success":true}"#),
            Err(CalculatorError::Malformed(_))
        ));
        assert!(matches!(
            interpret_response(200, r#"{"success":true,"total":null}"#),
            Err(CalculatorError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        assert!(matches!(
            interpret_response(200, "<html>gateway</html>"),
            Err(CalculatorError::Malformed(_))
        ));
    }

    #[test]
    fn test_unsuccessful_flag_is_rejected() {
        assert_eq!(
            interpret_response(200, r#"{"success":false,"message":"Add-on 9 not found"}"#),
            Err(CalculatorError::Rejected("Add-on 9 not found".into()))
        );
        assert_eq!(
            interpret_response(200, r#"{"success":false}"#),
            Err(CalculatorError::Rejected("Failed to calculate total".into()))
        );
    }

    #[test]
    fn test_http_error_uses_server_message() {
        assert_eq!(
            interpret_response(400, r#"{"success":false,"message":"Invalid add-on list"}"#),
            Err(CalculatorError::Status {
                status: 400,
                message: "Invalid add-on list".into()
            })
        );
        assert_eq!(
            interpret_response(502, "Bad Gateway"),
            Err(CalculatorError::Status {
                status: 502,
                message: "Bad Gateway".into()
            })
        );
        assert_eq!(
            interpret_response(500, ""),
            Err(CalculatorError::Status {
                status: 500,
                message: "Failed to calculate total".into()
            })
        );
    }

    #[test]
    fn test_error_display() {
        let e = CalculatorError::Status {
            status: 503,
            message: "down".into(),
        };
        assert_eq!(e.to_string(), "HTTP 503: down");
    }
}
