use serde::{Deserialize, Serialize};

/// Verdict returned by the YAML validation endpoint.
///
/// `message` is present when the document is valid, `error` when it is not;
/// the two are mutually exclusive by construction of the service contract.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_verdict_carries_message() {
        let verdict: ValidationResult =
            serde_json::from_str(r#"{"is_valid": true, "message": "YAML is valid."}"#).unwrap();
        assert!(verdict.is_valid);
        assert_eq!(verdict.message.as_deref(), Some("YAML is valid."));
        assert!(verdict.error.is_none());
    }

    #[test]
    fn invalid_verdict_carries_error() {
        let verdict: ValidationResult =
            serde_json::from_str(r#"{"is_valid": false, "error": "YAML Parsing Error: ..."}"#)
                .unwrap();
        assert!(!verdict.is_valid);
        assert!(verdict.message.is_none());
        assert_eq!(verdict.error.as_deref(), Some("YAML Parsing Error: ..."));
    }
}
