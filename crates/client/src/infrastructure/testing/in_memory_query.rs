//! In-memory query backend
//!
//! Serves canned example and value lists behind the query port, and records
//! every request so tests can assert on call patterns (including "no call at
//! all" for terminal categories).

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::ports::outbound::ChainedQueryPort;
use sheetwright_shared::{
    ExampleOptionData, LoadExamplesRequest, LoadExamplesResponse, LoadValuesRequest,
    LoadValuesResponse, RequestError, ResponseResult,
};

/// Canned backend for the chained-select queries
#[derive(Debug, Default)]
pub struct InMemoryChainedQuery {
    examples: BTreeMap<String, Vec<ExampleOptionData>>,
    values: BTreeMap<String, Vec<String>>,
    requests: Mutex<Vec<String>>,
}

impl InMemoryChainedQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `examples` for the given category tag.
    pub fn with_examples(
        mut self,
        category: impl Into<String>,
        examples: Vec<ExampleOptionData>,
    ) -> Self {
        self.examples.insert(category.into(), examples);
        self
    }

    /// Serve `values` for the given example id.
    pub fn with_values(mut self, example_id: impl Into<String>, values: Vec<&str>) -> Self {
        self.values.insert(
            example_id.into(),
            values.into_iter().map(str::to_string).collect(),
        );
        self
    }

    /// Every request seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|log| log.clone()).unwrap_or_default()
    }

    fn record(&self, line: String) {
        if let Ok(mut log) = self.requests.lock() {
            log.push(line);
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ChainedQueryPort for InMemoryChainedQuery {
    async fn load_examples(
        &self,
        request: LoadExamplesRequest,
    ) -> Result<ResponseResult, RequestError> {
        self.record(format!("examples:{}", request.category));
        let examples = self.examples.get(&request.category).cloned().unwrap_or_default();
        Ok(ResponseResult::success(LoadExamplesResponse { examples }))
    }

    async fn load_values(
        &self,
        request: LoadValuesRequest,
    ) -> Result<ResponseResult, RequestError> {
        self.record(format!("values:{}", request.example_id));
        let values = self.values.get(&request.example_id).cloned().unwrap_or_default();
        Ok(ResponseResult::success(LoadValuesResponse { values }))
    }
}
