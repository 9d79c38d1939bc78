use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    ConfigError,
    ValidationError,
    TransportError,
    ProtocolError,
    SerializationError,
}

#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct HoneyError {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<serde_json::Value>,
}

impl HoneyError {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            http: None,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigError, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationError, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TransportError, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError, message)
    }

    /// Non-accepted response status. Keeps the raw body for the error record.
    pub fn protocol(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            kind: ErrorKind::ProtocolError,
            message: format!("Failed with {status} and message: {}", body.trim()),
            http: Some(serde_json::json!({
                "status": status,
                "body": body,
            })),
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.http
            .as_ref()
            .and_then(|h| h.get("status"))
            .and_then(|s| s.as_u64())
            .and_then(|s| u16::try_from(s).ok())
    }
}
