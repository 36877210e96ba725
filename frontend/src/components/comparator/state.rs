//! State container for the schema comparison component.

use yew::prelude::*;

use common::model::comparison::ComparisonResult;

use crate::remote::RemoteOp;

pub struct ComparatorComponent {
    /// Pasted text-mode sources and their optional display names.
    pub content1: String,
    pub content2: String,
    pub name1: String,
    pub name2: String,

    /// Reference to the multi-file input for file mode.
    pub file_input_ref: NodeRef,

    /// Outcome slot shared by both entry modes; they are mutually exclusive
    /// per invocation and render identically.
    pub op: RemoteOp<ComparisonResult>,
}

impl ComparatorComponent {
    pub fn new() -> Self {
        Self {
            content1: String::new(),
            content2: String::new(),
            name1: String::new(),
            name2: String::new(),
            file_input_ref: NodeRef::default(),
            op: RemoteOp::Idle,
        }
    }
}
