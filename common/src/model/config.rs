use serde::{Deserialize, Serialize};

/// A configuration record as stored by the remote service.
///
/// The store assigns `id` when a record is created and keeps `hobbies` in
/// list form. Clients submit hobbies as comma-separated free text (see
/// `requests::ConfigInput`); the store splits on `,`, so list elements may
/// come back with leading whitespace. `hobbies_display` re-derives the
/// joined string shown in input controls.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ConfigRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: String,
    pub is_active: Option<bool>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
}

impl ConfigRecord {
    /// Joined display form of `hobbies`. Elements are trimmed before joining
    /// so that a record created from `"a, b"` renders back as `"a, b"`.
    pub fn hobbies_display(&self) -> String {
        self.hobbies
            .iter()
            .map(|hobby| hobby.trim())
            .filter(|hobby| !hobby.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hobbies: Vec<&str>) -> ConfigRecord {
        ConfigRecord {
            id: 1,
            name: "Jane Doe".to_string(),
            age: 30,
            email: "jane@example.com".to_string(),
            is_active: Some(true),
            hobbies: hobbies.into_iter().map(String::from).collect(),
            street: None,
            city: None,
            zip_code: None,
        }
    }

    #[test]
    fn hobbies_display_trims_split_elements() {
        // "a, b" submitted as free text comes back as ["a", " b"].
        assert_eq!(record(vec!["a", " b"]).hobbies_display(), "a, b");
    }

    #[test]
    fn hobbies_display_skips_empty_elements() {
        assert_eq!(record(vec!["a", ""]).hobbies_display(), "a");
        assert_eq!(record(vec![]).hobbies_display(), "");
    }

    #[test]
    fn record_deserializes_from_store_shape() {
        let record: ConfigRecord = serde_json::from_str(
            r#"{
                "id": 5,
                "name": "Jane Doe",
                "age": 30,
                "email": "jane@example.com",
                "is_active": null,
                "hobbies": ["reading", " chess"],
                "street": null,
                "city": null,
                "zip_code": null
            }"#,
        )
        .unwrap();
        assert_eq!(record.id, 5);
        assert_eq!(record.hobbies_display(), "reading, chess");
    }
}
