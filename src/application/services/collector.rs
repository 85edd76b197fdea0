//! Path collector service
//!
//! Drains the paginated parameter store response into one ordered list.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationResult, StoreResultExt};
use crate::domain::ParameterRecord;
use crate::infrastructure::traits::{ParameterQuery, ParameterStore};

/// Service collecting all parameters below a hierarchy path.
pub struct PathCollector {
    store: Arc<dyn ParameterStore>,
}

impl PathCollector {
    /// Create a new collector reading from `store`.
    pub fn new(store: Arc<dyn ParameterStore>) -> Self {
        Self { store }
    }

    /// Fetch every page for `query` and return the records in page order.
    ///
    /// A failure on any page aborts the collection; no partial result is returned.
    #[instrument(level = "debug", skip(self), fields(path = %query.path))]
    pub fn collect(&self, query: &ParameterQuery) -> ApplicationResult<Vec<ParameterRecord>> {
        let mut records = Vec::new();
        let mut next_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .store
                .fetch_page(query, next_token.as_deref())
                .with_query_context("get parameters by path", query.path.as_str())?;
            pages += 1;
            debug!("page {}: {} parameters", pages, page.records.len());
            records.extend(page.records);

            match page.next_token {
                Some(token) if next_token.as_deref() == Some(token.as_str()) => {
                    warn!("parameter store returned the same page token twice, stopping");
                    break;
                }
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        debug!("collected {} parameters in {} pages", records.len(), pages);
        Ok(records)
    }

    /// Parameter names only, in page order.
    pub fn collect_names(&self, query: &ParameterQuery) -> ApplicationResult<Vec<String>> {
        Ok(self
            .collect(query)?
            .into_iter()
            .map(|record| record.name)
            .collect())
    }
}
