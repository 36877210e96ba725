//! State container for the configuration lifecycle component.

use std::collections::BTreeMap;

use common::model::config::ConfigRecord;

use crate::remote::RemoteOp;

use super::form::ConfigForm;

/// Which surface the component renders.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ConfigMode {
    /// The Add tab: empty form plus a create action.
    Create,
    /// The View/Update/Delete tab: id lookup plus editing of the inspected
    /// record.
    Manage,
}

pub struct ConfigComponent {
    /// Current form field contents, as typed.
    pub form: ConfigForm,

    /// Field violations from the last validation pass. Empty means the form
    /// is submittable.
    pub errors: BTreeMap<&'static str, String>,

    /// Raw id input on the manage surface. Any non-empty value is attempted;
    /// the store is authoritative on whether it parses.
    pub id_input: String,

    /// The currently inspected record, if any. `None` is the `Empty` state of
    /// the record-view session, `Some` the `Displayed` state.
    pub record: Option<ConfigRecord>,

    /// Per-operation outcome slots. At most one is non-idle at a time because
    /// every operation clears the others before starting.
    pub create_op: RemoteOp<ConfigRecord>,
    pub fetch_op: RemoteOp<()>,
    pub update_op: RemoteOp<()>,
    pub delete_op: RemoteOp<String>,
}

impl ConfigComponent {
    pub fn new() -> Self {
        Self {
            form: ConfigForm::default(),
            errors: BTreeMap::new(),
            id_input: String::new(),
            record: None,
            create_op: RemoteOp::Idle,
            fetch_op: RemoteOp::Idle,
            update_op: RemoteOp::Idle,
            delete_op: RemoteOp::Idle,
        }
    }

    /// True while any operation has a request outstanding. Submit controls
    /// are disabled for the duration; nothing is queued or cancelled.
    pub fn busy(&self) -> bool {
        self.create_op.is_pending()
            || self.fetch_op.is_pending()
            || self.update_op.is_pending()
            || self.delete_op.is_pending()
    }

    /// Clears every operation outcome ahead of starting a new one.
    pub fn clear_outcomes(&mut self) {
        self.create_op = RemoteOp::Idle;
        self.fetch_op = RemoteOp::Idle;
        self.update_op = RemoteOp::Idle;
        self.delete_op = RemoteOp::Idle;
    }
}
