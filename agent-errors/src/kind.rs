//! Closed set of error kinds with stable, machine-readable codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discriminant shared by every error type in this crate.
///
/// Handlers that only need to branch on "what went wrong" can match on this
/// instead of on the concrete error types. Serialized as [`ErrorKind::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Invalid parameters were passed to an agent run method.
    #[serde(rename = "AGENT_RUN_METHOD_PARAMETER")]
    AgentRunMethodParameter,
    /// Vector-store discovery returned zero stores.
    #[serde(rename = "NO_VECTOR_STORES_FOUND")]
    NoVectorStoresFound,
    /// Every ingestion pipeline attempt failed.
    #[serde(rename = "INGESTION_PIPELINE")]
    IngestionPipeline,
}

impl ErrorKind {
    /// All kinds, in declaration order.
    pub const ALL: [ErrorKind; 3] = [
        ErrorKind::AgentRunMethodParameter,
        ErrorKind::NoVectorStoresFound,
        ErrorKind::IngestionPipeline,
    ];

    /// Name of the concrete error type carrying this kind.
    pub const fn type_name(self) -> &'static str {
        match self {
            ErrorKind::AgentRunMethodParameter => "AgentRunMethodParameterError",
            ErrorKind::NoVectorStoresFound => "NoVectorStoresFoundError",
            ErrorKind::IngestionPipeline => "IngestionPipelineError",
        }
    }

    /// Stable, machine-readable code (e.g. `"NO_VECTOR_STORES_FOUND"`).
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::AgentRunMethodParameter => "AGENT_RUN_METHOD_PARAMETER",
            ErrorKind::NoVectorStoresFound => "NO_VECTOR_STORES_FOUND",
            ErrorKind::IngestionPipeline => "INGESTION_PIPELINE",
        }
    }

    /// Human-readable meaning of the kind, independent of any message.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorKind::AgentRunMethodParameter => {
                "Invalid parameters provided to an agent run method."
            }
            ErrorKind::NoVectorStoresFound => "No vector stores were found in the system.",
            ErrorKind::IngestionPipeline => "All ingestion pipelines failed.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Returned by [`ErrorKind::from_str`] for unknown names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error kind: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for ErrorKind {
    type Err = ParseKindError;

    /// Accepts the type name (exact) or the code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ErrorKind::ALL
            .into_iter()
            .find(|k| k.type_name() == s || k.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_names_are_unique() {
        for (i, a) in ErrorKind::ALL.iter().enumerate() {
            for b in &ErrorKind::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
                assert_ne!(a.type_name(), b.type_name());
            }
        }
    }

    #[test]
    fn parses_type_name_and_code() {
        assert_eq!(
            "NoVectorStoresFoundError".parse::<ErrorKind>(),
            Ok(ErrorKind::NoVectorStoresFound)
        );
        assert_eq!(
            "ingestion_pipeline".parse::<ErrorKind>(),
            Ok(ErrorKind::IngestionPipeline)
        );
        assert_eq!(
            "Timeout".parse::<ErrorKind>(),
            Err(ParseKindError("Timeout".into()))
        );
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&ErrorKind::AgentRunMethodParameter).unwrap();
        assert_eq!(json, "\"AGENT_RUN_METHOD_PARAMETER\"");

        let back: ErrorKind = serde_json::from_str("\"INGESTION_PIPELINE\"").unwrap();
        assert_eq!(back, ErrorKind::IngestionPipeline);
    }

    #[test]
    fn display_is_type_name() {
        assert_eq!(
            ErrorKind::IngestionPipeline.to_string(),
            "IngestionPipelineError"
        );
    }
}
