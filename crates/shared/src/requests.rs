//! Request payloads for the chained-select query endpoints

use serde::{Deserialize, Serialize};

use sheetwright_domain::{SpendCategory, SubjectId};

/// Query for the options of the example selector under a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadExamplesRequest {
    /// Wire tag of the selected category
    pub category: String,
    /// Character/object the form pertains to
    pub subject_id: String,
}

impl LoadExamplesRequest {
    pub fn new(category: SpendCategory, subject: &SubjectId) -> Self {
        Self {
            category: category.as_str().to_string(),
            subject_id: subject.as_str().to_string(),
        }
    }
}

/// Query for the rating values available for a selected example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadValuesRequest {
    /// Value of the selected example option
    pub example_id: String,
    /// Character/object the form pertains to
    pub subject_id: String,
}

impl LoadValuesRequest {
    pub fn new(example_id: impl Into<String>, subject: &SubjectId) -> Self {
        Self {
            example_id: example_id.into(),
            subject_id: subject.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_request_uses_wire_tags() {
        let request = LoadExamplesRequest::new(SpendCategory::PathRating, &"char_9".into());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["category"], "Path Rating");
        assert_eq!(json["subjectId"], "char_9");
    }

    #[test]
    fn test_values_request_is_camel_case() {
        let request = LoadValuesRequest::new("mf_4", &"char_9".into());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["exampleId"], "mf_4");
        assert_eq!(json["subjectId"], "char_9");
    }
}
