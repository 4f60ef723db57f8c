//! Shared error kinds for the agent runner, vector-store discovery and the
//! ingestion pipeline.
//!
//! The crate only names failure conditions; the systems that raise them live
//! elsewhere. It provides:
//! - three independent error types sharing the [`Describe`] capability
//! - the [`AgentError`] umbrella and its [`Result`] alias
//! - [`ErrorKind`] codes and a JSON [`ErrorReport`] body
//! - raise-site helpers in [`guards`] and `tracing` hooks in [`telemetry`]

mod error_handler;
mod kind;
mod report;

pub mod guards;
pub mod telemetry;

pub use error_handler::{
    AgentError, AgentRunMethodParameterError, Describe, IngestionPipelineError,
    NoVectorStoresFoundError, Result,
};
pub use kind::{ErrorKind, ParseKindError};
pub use report::ErrorReport;
