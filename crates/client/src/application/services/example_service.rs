//! Example Service - Application service for the chained-select queries
//!
//! Typed wrappers over the query port: issues the wire request, parses the
//! response envelope, and converts payloads into domain option entries.

use std::sync::Arc;

use crate::application::{ParseResponse, ServiceError};
use crate::ports::outbound::ChainedQueryPort;
use sheetwright_domain::{OptionEntry, SpendCategory, SubjectId};
use sheetwright_shared::{
    LoadExamplesRequest, LoadExamplesResponse, LoadValuesRequest, LoadValuesResponse,
};

/// Service for loading dependent dropdown contents
#[derive(Clone)]
pub struct ExampleService {
    queries: Arc<dyn ChainedQueryPort>,
}

impl ExampleService {
    /// Create a new ExampleService over the given query port
    pub fn new(queries: Arc<dyn ChainedQueryPort>) -> Self {
        Self { queries }
    }

    /// Load the example options for a category.
    ///
    /// Entries keep whatever metadata the server attached (poolable flags
    /// and the like), in response order.
    pub async fn load_examples(
        &self,
        category: SpendCategory,
        subject: &SubjectId,
    ) -> Result<Vec<OptionEntry>, ServiceError> {
        let result = self
            .queries
            .load_examples(LoadExamplesRequest::new(category, subject))
            .await?;

        let response: LoadExamplesResponse = result.parse()?;
        Ok(response.examples.into_iter().map(OptionEntry::from).collect())
    }

    /// Load the rating values for a selected example.
    ///
    /// The endpoint returns bare scalars; each becomes an entry whose label
    /// equals its value.
    pub async fn load_values(
        &self,
        example_id: &str,
        subject: &SubjectId,
    ) -> Result<Vec<OptionEntry>, ServiceError> {
        let result = self
            .queries
            .load_values(LoadValuesRequest::new(example_id, subject))
            .await?;

        let response: LoadValuesResponse = result.parse()?;
        Ok(response.values.into_iter().map(OptionEntry::scalar).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockChainedQueryPort;
    use sheetwright_shared::{ErrorCode, ExampleOptionData, ResponseResult};
    use std::collections::BTreeMap;

    fn subject() -> SubjectId {
        SubjectId::from("char_9")
    }

    #[tokio::test]
    async fn test_load_examples_converts_entries_in_order() {
        let mut port = MockChainedQueryPort::new();
        port.expect_load_examples()
            .withf(|request| request.category == "Background" && request.subject_id == "char_9")
            .return_once(|_| {
                Ok(ResponseResult::success(LoadExamplesResponse {
                    examples: vec![
                        ExampleOptionData {
                            value: "bg_1".to_string(),
                            label: "Allies".to_string(),
                            metadata: BTreeMap::new(),
                        },
                        ExampleOptionData {
                            value: "bg_2".to_string(),
                            label: "Library".to_string(),
                            metadata: BTreeMap::from([(
                                "poolable".to_string(),
                                "false".to_string(),
                            )]),
                        },
                    ],
                }))
            });

        let service = ExampleService::new(Arc::new(port));
        let entries = service
            .load_examples(SpendCategory::Background, &subject())
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, "bg_1");
        assert!(entries[0].poolable());
        assert!(!entries[1].poolable());
    }

    #[tokio::test]
    async fn test_load_values_maps_scalars() {
        let mut port = MockChainedQueryPort::new();
        port.expect_load_values()
            .withf(|request| request.example_id == "mf_4")
            .return_once(|_| {
                Ok(ResponseResult::success(LoadValuesResponse {
                    values: vec!["-2".to_string(), "2".to_string()],
                }))
            });

        let service = ExampleService::new(Arc::new(port));
        let entries = service.load_values("mf_4", &subject()).await.unwrap();

        assert_eq!(entries[0].value, "-2");
        assert_eq!(entries[0].label, "-2");
        assert_eq!(entries[1].value, "2");
    }

    #[tokio::test]
    async fn test_server_error_surfaces_as_service_error() {
        let mut port = MockChainedQueryPort::new();
        port.expect_load_examples()
            .return_once(|_| Ok(ResponseResult::error(ErrorCode::NotFound, "gone")));

        let service = ExampleService::new(Arc::new(port));
        let err = service
            .load_examples(SpendCategory::Ability, &subject())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
