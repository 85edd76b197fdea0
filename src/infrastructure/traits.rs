//! I/O boundary traits for testability
//!
//! The parameter store is abstracted behind a trait so services can be
//! tested with in-memory implementations.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::Client;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, instrument};

use crate::domain::{HierarchyPath, ParameterRecord};
use crate::infrastructure::{InfraError, InfraResult, StoreError};

/// A query for all parameters below a hierarchy path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterQuery {
    /// Query root, e.g. `/Servers/Prod`
    pub path: HierarchyPath,
    /// Include all descendant levels, not just direct children
    pub recursive: bool,
    /// Values are never displayed, so this is false for all queries built here
    pub with_decryption: bool,
    /// Maximum records per page (`MaxResults`), None for the service default
    pub page_size: Option<i32>,
}

impl ParameterQuery {
    pub fn new(path: HierarchyPath, recursive: bool) -> Self {
        Self {
            path,
            recursive,
            with_decryption: false,
            page_size: None,
        }
    }

    pub fn with_page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }
}

/// One page of a paginated response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterPage {
    pub records: Vec<ParameterRecord>,
    /// Token for the next page, None on the last page
    pub next_token: Option<String>,
}

/// Hierarchical parameter store abstraction.
pub trait ParameterStore: Send + Sync {
    /// Fetch one page of parameters for `query`, continuing at `next_token`.
    fn fetch_page(
        &self,
        query: &ParameterQuery,
        next_token: Option<&str>,
    ) -> Result<ParameterPage, StoreError>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// AWS Systems Manager Parameter Store.
///
/// The SDK is async; requests are driven on a private current-thread
/// runtime so there is never more than one request in flight.
pub struct SsmParameterStore {
    client: Client,
    runtime: Runtime,
}

impl SsmParameterStore {
    /// Resolve credentials and region, then create the client.
    ///
    /// `region` and `profile` override the SDK default provider chain when set.
    #[instrument(level = "debug")]
    pub fn new(region: Option<&str>, profile: Option<&str>) -> InfraResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(InfraError::Runtime)?;

        let sdk_config = runtime.block_on(load_sdk_config(
            region.map(str::to_string),
            profile.map(str::to_string),
        ));
        debug!("resolved region: {:?}", sdk_config.region());

        Ok(Self {
            client: Client::new(&sdk_config),
            runtime,
        })
    }
}

async fn load_sdk_config(region: Option<String>, profile: Option<String>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region));
    }
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    loader.load().await
}

impl ParameterStore for SsmParameterStore {
    #[instrument(level = "trace", skip(self))]
    fn fetch_page(
        &self,
        query: &ParameterQuery,
        next_token: Option<&str>,
    ) -> Result<ParameterPage, StoreError> {
        let request = self
            .client
            .get_parameters_by_path()
            .path(query.path.as_str())
            .recursive(query.recursive)
            .with_decryption(query.with_decryption)
            .set_max_results(query.page_size)
            .set_next_token(next_token.map(str::to_string));

        let output =
            self.runtime
                .block_on(request.send())
                .map_err(|e| StoreError::Service {
                    operation: "GetParametersByPath".to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                })?;

        let records = output
            .parameters()
            .iter()
            .map(|p| {
                let name = p.name().ok_or_else(|| {
                    StoreError::MalformedResponse("parameter without name".to_string())
                })?;
                let kind = p.r#type().map(|t| t.as_str()).unwrap_or("Unknown");
                Ok(ParameterRecord::new(name, kind, p.version()))
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(ParameterPage {
            records,
            next_token: output.next_token().map(str::to_string),
        })
    }
}
