use yew::prelude::*;

use super::state::ConfigMode;

/// Properties for the configuration lifecycle component, selecting which
/// surface it renders.
#[derive(Properties, PartialEq, Clone)]
pub struct ConfigProps {
    pub mode: ConfigMode,
}
