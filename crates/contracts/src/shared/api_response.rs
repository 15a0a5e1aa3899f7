use serde::{Deserialize, Serialize};

/// Envelope used by every catalog endpoint of the tour platform API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: String::new(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Unwrap the payload of a successful response
    pub fn into_data(self) -> Result<T, String> {
        if !self.success {
            return Err(self.failure_message());
        }
        self.data
            .ok_or_else(|| "Response reported success but carried no data".to_string())
    }

    /// Check a successful response whose payload is irrelevant (e.g. delete)
    pub fn into_unit(self) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self.failure_message())
        }
    }

    fn failure_message(&self) -> String {
        if self.message.is_empty() {
            "Request failed".to_string()
        } else {
            self.message.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_data_success() {
        let r: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"message":"","data":[1,2]}"#).unwrap();
        assert_eq!(r.into_data(), Ok(vec![1, 2]));
    }

    #[test]
    fn test_into_data_failure_keeps_message() {
        let r: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"message":"Error fetching add-ons","data":null}"#)
                .unwrap();
        assert_eq!(r.into_data(), Err("Error fetching add-ons".to_string()));
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let r: ApiResponse<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(r.into_data().is_err());
    }

    #[test]
    fn test_into_unit_ignores_payload() {
        let r: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"message":"deleted","data":{"id":3}}"#).unwrap();
        assert_eq!(r.into_unit(), Ok(()));
        assert_eq!(ApiResponse::<()>::failure("").into_unit(), Err("Request failed".to_string()));
    }
}
