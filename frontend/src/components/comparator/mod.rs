//! Schema comparison component: submits two YAML sources, pasted as text or
//! uploaded as files, and renders the structured difference verdict.
//!
//! The two entry modes are mutually exclusive per invocation and share the
//! same result shape and rendering.

use yew::prelude::*;

mod input;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ComparatorComponent;

impl Component for ComparatorComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ComparatorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
