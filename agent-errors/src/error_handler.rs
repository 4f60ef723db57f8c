//! Unified error handling for agent runs, vector-store discovery and ingestion.
//!
//! Each failure condition is its own type so raise sites can return exactly the
//! error they mean. All three share the [`Describe`] capability and fold into the
//! single top-level [`AgentError`] via `From`, which backs the crate-wide
//! [`Result<T>`] alias.
//!
//! Messages are kept verbatim: `Display` prints the message, or nothing when the
//! error was constructed without one.

use thiserror::Error;

use crate::kind::ErrorKind;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for code that raises any of this crate's errors.
pub type Result<T> = std::result::Result<T, AgentError>;

/* ------------------------------------------------------------------------- */
/* Shared capability                                                         */
/* ------------------------------------------------------------------------- */

/// A failure that can say what kind it is and what message it carries.
pub trait Describe: std::error::Error + Send + Sync + 'static {
    /// Kind of this failure.
    fn kind(&self) -> ErrorKind;

    /// Message supplied at construction, if any.
    fn message(&self) -> Option<&str>;

    /// Static meaning of the kind (not the message).
    fn kind_description(&self) -> &'static str {
        self.kind().description()
    }
}

/* ------------------------------------------------------------------------- */
/* Agent run parameters                                                      */
/* ------------------------------------------------------------------------- */

/// Raised when the parameters provided to an agent run method are invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or_default())]
pub struct AgentRunMethodParameterError {
    message: Option<String>,
}

impl AgentRunMethodParameterError {
    /// Error without a message.
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Error carrying `message` unchanged.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Message supplied at construction, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/* ------------------------------------------------------------------------- */
/* Vector-store discovery                                                    */
/* ------------------------------------------------------------------------- */

/// Raised when no vector stores are found in the system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or_default())]
pub struct NoVectorStoresFoundError {
    message: Option<String>,
}

impl NoVectorStoresFoundError {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/* ------------------------------------------------------------------------- */
/* Ingestion pipeline                                                        */
/* ------------------------------------------------------------------------- */

/// Raised when all ingestion pipelines fail.
///
/// A partial failure is not an error at this level; only the case where no
/// attempt succeeded is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or_default())]
pub struct IngestionPipelineError {
    message: Option<String>,
}

impl IngestionPipelineError {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/* ------------------------------------------------------------------------- */
/* Describe + string conversions                                             */
/* ------------------------------------------------------------------------- */

impl Describe for AgentRunMethodParameterError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::AgentRunMethodParameter
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Describe for NoVectorStoresFoundError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoVectorStoresFound
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Describe for IngestionPipelineError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::IngestionPipeline
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<String> for AgentRunMethodParameterError {
    fn from(message: String) -> Self {
        Self::with_message(message)
    }
}

impl From<&str> for AgentRunMethodParameterError {
    fn from(message: &str) -> Self {
        Self::with_message(message)
    }
}

impl From<String> for NoVectorStoresFoundError {
    fn from(message: String) -> Self {
        Self::with_message(message)
    }
}

impl From<&str> for NoVectorStoresFoundError {
    fn from(message: &str) -> Self {
        Self::with_message(message)
    }
}

impl From<String> for IngestionPipelineError {
    fn from(message: String) -> Self {
        Self::with_message(message)
    }
}

impl From<&str> for IngestionPipelineError {
    fn from(message: &str) -> Self {
        Self::with_message(message)
    }
}

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error wrapping every kind this crate defines.
///
/// Handlers that accept "any of these" take `AgentError` and branch with
/// [`AgentError::kind`] or a `match`; raise sites can still return the narrow
/// type and let `?` convert.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// Invalid parameters for an agent run method.
    #[error(transparent)]
    AgentRunMethodParameter(#[from] AgentRunMethodParameterError),

    /// Vector-store discovery found nothing.
    #[error(transparent)]
    NoVectorStoresFound(#[from] NoVectorStoresFoundError),

    /// No ingestion pipeline attempt succeeded.
    #[error(transparent)]
    IngestionPipeline(#[from] IngestionPipelineError),
}

impl AgentError {
    /// Kind of the wrapped error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AgentError::AgentRunMethodParameter(_) => ErrorKind::AgentRunMethodParameter,
            AgentError::NoVectorStoresFound(_) => ErrorKind::NoVectorStoresFound,
            AgentError::IngestionPipeline(_) => ErrorKind::IngestionPipeline,
        }
    }

    /// Message of the wrapped error, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            AgentError::AgentRunMethodParameter(e) => e.message(),
            AgentError::NoVectorStoresFound(e) => e.message(),
            AgentError::IngestionPipeline(e) => e.message(),
        }
    }

    /// `true` if this error is of `kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }

    /// Builds the error for `kind` with an optional message.
    pub fn from_kind(kind: ErrorKind, message: Option<String>) -> Self {
        match (kind, message) {
            (ErrorKind::AgentRunMethodParameter, Some(m)) => {
                AgentRunMethodParameterError::with_message(m).into()
            }
            (ErrorKind::AgentRunMethodParameter, None) => AgentRunMethodParameterError::new().into(),
            (ErrorKind::NoVectorStoresFound, Some(m)) => {
                NoVectorStoresFoundError::with_message(m).into()
            }
            (ErrorKind::NoVectorStoresFound, None) => NoVectorStoresFoundError::new().into(),
            (ErrorKind::IngestionPipeline, Some(m)) => IngestionPipelineError::with_message(m).into(),
            (ErrorKind::IngestionPipeline, None) => IngestionPipelineError::new().into(),
        }
    }
}

impl Describe for AgentError {
    fn kind(&self) -> ErrorKind {
        AgentError::kind(self)
    }

    fn message(&self) -> Option<&str> {
        AgentError::message(self)
    }
}
