//! Configuration lifecycle component: create, fetch, update, and delete
//! records held by the remote store, with field validation ahead of every
//! submission.
//!
//! The component is instantiated once per tab: `ConfigMode::Create` renders
//! the add form, `ConfigMode::Manage` renders the id lookup plus the
//! update/delete surface for the currently inspected record.

use yew::prelude::*;

mod form;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{Field, Msg};
pub use props::ConfigProps;
pub use state::{ConfigComponent, ConfigMode};

impl Component for ConfigComponent {
    type Message = Msg;
    type Properties = ConfigProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ConfigComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
