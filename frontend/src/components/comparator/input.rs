//! Comparison input construction.
//!
//! `CompareInput` is built only when its invariant already holds: text mode
//! requires two non-blank bodies, file mode exactly two selected files. A
//! failed constructor is a local failure and never reaches the network.

use web_sys::File;

use common::requests::CompareRequest;

pub const DEFAULT_NAME_1: &str = "Schema 1";
pub const DEFAULT_NAME_2: &str = "Schema 2";

#[derive(Debug)]
pub enum CompareInput {
    Texts(CompareRequest),
    Files(File, File),
}

impl CompareInput {
    /// Text mode: both pasted bodies must be non-empty after trimming. Blank
    /// names fall back to the default labels.
    pub fn from_texts(
        content1: &str,
        content2: &str,
        name1: &str,
        name2: &str,
    ) -> Result<Self, String> {
        if content1.trim().is_empty() || content2.trim().is_empty() {
            return Err("Both schema contents are required".to_string());
        }
        Ok(CompareInput::Texts(CompareRequest {
            schema1_content: content1.to_string(),
            schema2_content: content2.to_string(),
            schema1_name: name_or(name1, DEFAULT_NAME_1),
            schema2_name: name_or(name2, DEFAULT_NAME_2),
        }))
    }

    /// File mode: the selection must hold exactly two files. Display names
    /// derive from the filenames on the service side.
    pub fn from_files(files: Vec<File>) -> Result<Self, String> {
        match <[File; 2]>::try_from(files) {
            Ok([first, second]) => Ok(CompareInput::Files(first, second)),
            Err(files) => Err(format!(
                "Please select exactly 2 files to compare (got {})",
                files.len()
            )),
        }
    }
}

fn name_or(name: &str, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_on_either_side_is_rejected() {
        assert!(CompareInput::from_texts("", "b: 1", "", "").is_err());
        assert!(CompareInput::from_texts("a: 1", "", "", "").is_err());
        // Whitespace-only counts as blank.
        assert!(CompareInput::from_texts("a: 1", "   \n", "", "").is_err());
    }

    #[test]
    fn blank_names_fall_back_to_defaults() {
        let input = CompareInput::from_texts("a: 1", "b: 2", "", "  ").unwrap();
        match input {
            CompareInput::Texts(request) => {
                assert_eq!(request.schema1_name, DEFAULT_NAME_1);
                assert_eq!(request.schema2_name, DEFAULT_NAME_2);
                assert_eq!(request.schema1_content, "a: 1");
                assert_eq!(request.schema2_content, "b: 2");
            }
            CompareInput::Files(..) => panic!("expected text mode"),
        }
    }

    #[test]
    fn provided_names_are_kept() {
        let input = CompareInput::from_texts("a: 1", "b: 2", "prod", " staging ").unwrap();
        match input {
            CompareInput::Texts(request) => {
                assert_eq!(request.schema1_name, "prod");
                assert_eq!(request.schema2_name, "staging");
            }
            CompareInput::Files(..) => panic!("expected text mode"),
        }
    }

    #[test]
    fn empty_selection_reports_the_count() {
        let err = CompareInput::from_files(vec![]).unwrap_err();
        assert!(err.contains("exactly 2"), "{err}");
        assert!(err.contains("got 0"), "{err}");
    }
}
