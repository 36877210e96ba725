use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validity verdict for one side of a comparison.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SchemaStatus {
    pub valid: bool,
    /// Parse/validation errors in the order the service reported them.
    /// Present only when `valid` is false.
    pub errors: Option<Vec<String>>,
}

/// Structured verdict for a two-document comparison, shared by the pasted-text
/// and uploaded-file endpoints.
///
/// `differences` is only meaningful when both sides are valid and
/// `are_identical` is false; consumers must not interpret it otherwise.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ComparisonResult {
    pub are_identical: bool,
    pub schema1_name: String,
    pub schema2_name: String,
    pub schema1: SchemaStatus,
    pub schema2: SchemaStatus,
    /// Field-level deltas, arbitrarily nested.
    pub differences: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_deserializes_with_nested_differences() {
        let result: ComparisonResult = serde_json::from_str(
            r#"{
                "are_identical": false,
                "schema1_name": "a.yaml",
                "schema2_name": "b.yaml",
                "schema1": {"valid": true, "errors": null},
                "schema2": {"valid": true, "errors": null},
                "differences": {"server": {"port": {"schema1": 80, "schema2": 8080}}}
            }"#,
        )
        .unwrap();
        assert!(!result.are_identical);
        assert!(result.schema1.valid && result.schema2.valid);
        let diff = result.differences.unwrap();
        assert_eq!(diff["server"]["port"]["schema2"], 8080);
    }

    #[test]
    fn invalid_side_keeps_error_order() {
        let status: SchemaStatus = serde_json::from_str(
            r#"{"valid": false, "errors": ["line 2: bad indent", "line 7: unknown key"]}"#,
        )
        .unwrap();
        assert!(!status.valid);
        assert_eq!(
            status.errors.unwrap(),
            vec!["line 2: bad indent", "line 7: unknown key"]
        );
    }
}
