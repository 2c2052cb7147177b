//! Invocation event and response envelope

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Invocation payload passed to the function on each trigger
#[derive(Debug, Deserialize)]
pub struct InvocationEvent {
    /// Base64-encoded photo bytes
    pub body: String,
}

/// Lambda proxy response envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// HTTP status code
    pub status_code: u16,
    /// JSON-serialized response body
    pub body: String,
}

impl UploadResponse {
    /// Successful upload response carrying the object's public URL
    #[must_use]
    pub fn success(file_url: &str) -> Self {
        Self {
            status_code: 200,
            body: json!({
                "message": "File uploaded successfully",
                "file_url": file_url,
            })
            .to_string(),
        }
    }

    /// Client error response with a machine-readable code
    #[must_use]
    pub fn client_error(code: &str, message: &str) -> Self {
        Self {
            status_code: 400,
            body: json!({
                "code": code,
                "message": message,
            })
            .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_has_message_and_file_url() {
        let response =
            UploadResponse::success("https://photos.s3.amazonaws.com/abc.jpg");
        assert_eq!(response.status_code, 200);

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert!(body["message"].is_string());
        assert_eq!(
            body["file_url"],
            "https://photos.s3.amazonaws.com/abc.jpg"
        );
    }

    #[test]
    fn response_serializes_with_proxy_field_names() {
        let response = UploadResponse::success("https://example.com/a.jpg");
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("statusCode").is_some());
        assert!(value.get("body").is_some());
    }

    #[test]
    fn event_requires_body_field() {
        let result: Result<InvocationEvent, _> = serde_json::from_str("{}");
        assert!(result.is_err());

        let event: InvocationEvent =
            serde_json::from_str(r#"{"body": "aGVsbG8="}"#).unwrap();
        assert_eq!(event.body, "aGVsbG8=");
    }
}
