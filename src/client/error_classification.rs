//! Error classification logic

use crate::error::ApiError;
use crate::error_code::ApiErrorKind;
use crate::types::ResponseParameters;

/// Turns a failure envelope into an [`ApiError`].
///
/// Implementations must be pure and deterministic: the same input always yields the
/// same kind. Closures with the matching signature implement this trait.
pub trait ErrorClassifier: Send + Sync {
    fn classify(
        &self,
        error_code: i64,
        description: &str,
        parameters: Option<&ResponseParameters>,
    ) -> ApiError;
}

/// Maps the error code through [`ApiErrorKind::from_error_code`] and keeps the
/// description and parameters verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorClassifier;

impl ErrorClassifier for DefaultErrorClassifier {
    fn classify(
        &self,
        error_code: i64,
        description: &str,
        parameters: Option<&ResponseParameters>,
    ) -> ApiError {
        let retry_after = parameters.and_then(|p| p.retry_after);
        ApiError::new(
            ApiErrorKind::from_error_code(error_code, retry_after),
            error_code,
            description,
            parameters.cloned(),
        )
    }
}

impl<F> ErrorClassifier for F
where
    F: Fn(i64, &str, Option<&ResponseParameters>) -> ApiError + Send + Sync,
{
    fn classify(
        &self,
        error_code: i64,
        description: &str,
        parameters: Option<&ResponseParameters>,
    ) -> ApiError {
        self(error_code, description, parameters)
    }
}
