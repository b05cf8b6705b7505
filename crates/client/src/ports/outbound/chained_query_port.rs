//! Chained Query Port - Outbound port for the two form query endpoints
//!
//! The experience form refreshes its dependent selectors from a pair of
//! server queries. This port abstracts that transport so the controllers and
//! services never depend on a concrete HTTP client.

use sheetwright_shared::{LoadExamplesRequest, LoadValuesRequest, RequestError, ResponseResult};

/// Port for the load-examples and load-values query endpoints
///
/// Intentionally object-safe so callers can hold an
/// `Arc<dyn ChainedQueryPort>` without naming infrastructure types.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ChainedQueryPort: Send + Sync {
    /// Fetch the example options for a category
    async fn load_examples(
        &self,
        request: LoadExamplesRequest,
    ) -> Result<ResponseResult, RequestError>;

    /// Fetch the rating values for a selected example
    async fn load_values(
        &self,
        request: LoadValuesRequest,
    ) -> Result<ResponseResult, RequestError>;
}
