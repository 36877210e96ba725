use serde::{Deserialize, Serialize};

/// JSON body of the create/update configuration endpoints.
///
/// `hobbies` travels as comma-separated free text; the store splits it into
/// list form before persisting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConfigInput {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub is_active: Option<bool>,
    pub hobbies: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
}

/// JSON body of the pasted-text comparison endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompareRequest {
    pub schema1_content: String,
    pub schema2_content: String,
    pub schema1_name: String,
    pub schema2_name: String,
}
