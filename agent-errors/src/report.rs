//! JSON error body for handlers that surface failures to a caller.
//!
//! The body carries the stable [`ErrorKind`] code and the raw message, and can
//! be turned back into an [`AgentError`] on the receiving side.

use serde::{Deserialize, Serialize};

use crate::error_handler::{AgentError, Describe};
use crate::kind::ErrorKind;

/// Serializable error body for handlers that surface failures as JSON.
///
/// Shape: `{"error": "NO_VECTOR_STORES_FOUND", "message": "..."}`; `message`
/// is omitted when the error carried none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Stable, machine-readable error code.
    pub error: ErrorKind,
    /// Message supplied at construction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorReport {
    /// Captures the kind and message of any describable error.
    pub fn from_describe<E: Describe + ?Sized>(err: &E) -> Self {
        Self {
            error: err.kind(),
            message: err.message().map(str::to_owned),
        }
    }

    /// Rebuilds the error this report was taken from.
    pub fn into_error(self) -> AgentError {
        AgentError::from_kind(self.error, self.message)
    }

    /// Serializes the body as compact JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&AgentError> for ErrorReport {
    fn from(err: &AgentError) -> Self {
        Self::from_describe(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handler::{IngestionPipelineError, NoVectorStoresFoundError};

    #[test]
    fn body_uses_code_and_skips_absent_message() {
        let err: AgentError = NoVectorStoresFoundError::new().into();
        let json = ErrorReport::from(&err).to_json().unwrap();
        assert_eq!(json, r#"{"error":"NO_VECTOR_STORES_FOUND"}"#);
    }

    #[test]
    fn body_keeps_message() {
        let report =
            ErrorReport::from_describe(&IngestionPipelineError::with_message("3/3 pipelines failed"));
        let json = report.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"error":"INGESTION_PIPELINE","message":"3/3 pipelines failed"}"#
        );
    }

    #[test]
    fn parsed_body_rebuilds_error() {
        let report: ErrorReport = serde_json::from_str(
            r#"{"error":"AGENT_RUN_METHOD_PARAMETER","message":"missing required field: query"}"#,
        )
        .unwrap();
        let err = report.into_error();
        assert!(err.is(ErrorKind::AgentRunMethodParameter));
        assert_eq!(err.message(), Some("missing required field: query"));
    }
}
