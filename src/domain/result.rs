//! Result type alias for the quickstart

use super::errors::QuickstartError;

/// Result type alias using `QuickstartError` as the error type
///
/// # Examples
///
/// ```
/// use cosmos_quickstart::domain::result::Result;
/// use cosmos_quickstart::domain::errors::QuickstartError;
///
/// fn failing_function() -> Result<()> {
///     Err(QuickstartError::Validation("Invalid input".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, QuickstartError>;
