use common::model::config::ConfigRecord;

use crate::remote::OpError;

/// Identifies one text input control of the configuration form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Age,
    Email,
    Hobbies,
    Street,
    City,
    ZipCode,
}

pub enum Msg {
    Edit(Field, String),
    ToggleActive(bool),
    EditId(String),
    Create,
    Fetch,
    Update,
    Delete,
    CreateFinished(Result<ConfigRecord, OpError>),
    FetchFinished(Result<ConfigRecord, OpError>),
    UpdateFinished(Result<ConfigRecord, OpError>),
    DeleteFinished(Result<String, OpError>),
}
