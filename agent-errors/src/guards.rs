//! Raise-site helpers.
//!
//! Each helper checks one condition and, when it fails, builds the matching
//! error, logs it through [`telemetry::record`] and returns it as [`Result`].

use std::fmt::Display;

use tracing::debug;

use crate::error_handler::{
    AgentRunMethodParameterError, IngestionPipelineError, NoVectorStoresFoundError, Result,
};
use crate::telemetry;

/// Unwraps a required agent-run parameter.
///
/// # Errors
/// Returns [`AgentRunMethodParameterError`] with
/// `"missing required field: <name>"` when `value` is `None`.
pub fn require_param<T>(name: &str, value: Option<T>) -> Result<T> {
    match value {
        Some(v) => Ok(v),
        None => {
            let err =
                AgentRunMethodParameterError::with_message(format!("missing required field: {name}"));
            telemetry::record(&err);
            Err(err.into())
        }
    }
}

/// Rejects an empty or whitespace-only agent-run parameter.
///
/// # Errors
/// Returns [`AgentRunMethodParameterError`] with
/// `"field must not be empty: <name>"`.
pub fn require_non_empty(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        let err =
            AgentRunMethodParameterError::with_message(format!("field must not be empty: {name}"));
        telemetry::record(&err);
        return Err(err.into());
    }
    Ok(())
}

/// Passes discovered vector stores through, failing when there are none.
///
/// # Errors
/// Returns [`NoVectorStoresFoundError`] (no message) when `stores` is empty.
pub fn ensure_vector_stores<T>(stores: Vec<T>) -> Result<Vec<T>> {
    if stores.is_empty() {
        let err = NoVectorStoresFoundError::new();
        telemetry::record(&err);
        return Err(err.into());
    }
    Ok(stores)
}

/// Collects successful ingestion attempts; fails only if none succeeded.
///
/// Failed attempts are dropped (their text is logged at `debug`). Zero
/// attempts count as "all failed".
///
/// # Errors
/// Returns [`IngestionPipelineError`] with `"<failed>/<total> pipelines failed"`.
pub fn ensure_any_pipeline_succeeded<T, E>(attempts: Vec<std::result::Result<T, E>>) -> Result<Vec<T>>
where
    E: Display,
{
    let total = attempts.len();
    let mut ok = Vec::with_capacity(total);

    for (idx, attempt) in attempts.into_iter().enumerate() {
        match attempt {
            Ok(v) => ok.push(v),
            Err(e) => debug!(attempt = idx, "ingestion pipeline failed: {e}"),
        }
    }

    if ok.is_empty() {
        let err = IngestionPipelineError::with_message(format!("{total}/{total} pipelines failed"));
        telemetry::record(&err);
        return Err(err.into());
    }
    Ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ErrorKind;

    #[test]
    fn missing_param_names_the_field() {
        let err = require_param::<String>("query", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AgentRunMethodParameter);
        assert_eq!(err.message(), Some("missing required field: query"));

        assert_eq!(require_param("top_k", Some(5)).unwrap(), 5);
    }

    #[test]
    fn blank_param_is_rejected() {
        let err = require_non_empty("session_id", "  \t").unwrap_err();
        assert_eq!(err.message(), Some("field must not be empty: session_id"));
        assert!(require_non_empty("session_id", "abc").is_ok());
    }

    #[test]
    fn empty_store_list_has_no_message() {
        let err = ensure_vector_stores(Vec::<&str>::new()).unwrap_err();
        assert!(err.is(ErrorKind::NoVectorStoresFound));
        assert_eq!(err.message(), None);

        assert_eq!(ensure_vector_stores(vec!["vs_1"]).unwrap(), vec!["vs_1"]);
    }

    #[test]
    fn all_pipelines_failing_is_an_error() {
        let attempts: Vec<std::result::Result<u32, &str>> =
            vec![Err("timeout"), Err("bad chunk"), Err("embed down")];
        let err = ensure_any_pipeline_succeeded(attempts).unwrap_err();
        assert!(err.is(ErrorKind::IngestionPipeline));
        assert_eq!(err.message(), Some("3/3 pipelines failed"));
    }

    #[test]
    fn partial_failure_keeps_successes_in_order() {
        let attempts: Vec<std::result::Result<u32, &str>> = vec![Ok(1), Err("x"), Ok(3)];
        assert_eq!(ensure_any_pipeline_succeeded(attempts).unwrap(), vec![1, 3]);
    }

    #[test]
    fn zero_attempts_counts_as_failure() {
        let err = ensure_any_pipeline_succeeded(Vec::<std::result::Result<(), String>>::new())
            .unwrap_err();
        assert_eq!(err.message(), Some("0/0 pipelines failed"));
    }
}
