//! Error conversion helpers for parameter store calls
//!
//! Provides an extension trait for cleaner error handling with query context.

use crate::application::{ApplicationError, ApplicationResult};
use crate::infrastructure::StoreError;

/// Extension trait for converting store results to `ApplicationResult` with context.
pub trait StoreResultExt<T> {
    /// Add the queried hierarchy path to a store error.
    ///
    /// # Example
    /// ```ignore
    /// store.fetch_page(&query, None)
    ///     .with_query_context("get parameters by path", query.path.as_str())?;
    /// ```
    fn with_query_context(self, action: &str, path: &str) -> ApplicationResult<T>;
}

impl<T> StoreResultExt<T> for Result<T, StoreError> {
    fn with_query_context(self, action: &str, path: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path),
            source: Box::new(e),
        })
    }
}
