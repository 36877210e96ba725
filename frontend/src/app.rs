use yew::{classes, html, Component, Context, Html};

use crate::components::comparator::ComparatorComponent;
use crate::components::config::{ConfigComponent, ConfigMode};
use crate::components::validator::ValidatorComponent;

/// Top-level tabs. Switching is purely presentational; each tab's component
/// owns its own operation state.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Add,
    Manage,
    Validate,
    Compare,
}

pub enum Msg {
    SetTab(Tab),
}

pub struct App {
    active_tab: Tab,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active_tab: Tab::Add,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                if self.active_tab != tab {
                    self.active_tab = tab;
                    return true;
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-container">
                <header>
                    <h1>{"Configuration Management System"}</h1>
                </header>
                { self.build_tab_bar(ctx) }
                // Every pane stays mounted so a record-view session survives
                // tab switches; only the active one is shown.
                { self.tab_pane(Tab::Add, html! { <ConfigComponent mode={ConfigMode::Create} /> }) }
                { self.tab_pane(Tab::Manage, html! { <ConfigComponent mode={ConfigMode::Manage} /> }) }
                { self.tab_pane(Tab::Validate, html! { <ValidatorComponent /> }) }
                { self.tab_pane(Tab::Compare, html! { <ComparatorComponent /> }) }
            </div>
        }
    }
}

impl App {
    fn build_tab_bar(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="tab-bar">
                { self.tab_button(ctx, Tab::Add, "Add Configuration") }
                { self.tab_button(ctx, Tab::Manage, "View/Update/Delete") }
                { self.tab_button(ctx, Tab::Validate, "Validate YAML") }
                { self.tab_button(ctx, Tab::Compare, "Compare Schemas") }
            </div>
        }
    }

    fn tab_pane(&self, tab: Tab, content: Html) -> Html {
        let style = if self.active_tab == tab {
            ""
        } else {
            "display: none;"
        };
        html! {
            <div class="tab-pane" style={style}>
                { content }
            </div>
        }
    }

    fn tab_button(&self, ctx: &Context<Self>, tab: Tab, label: &str) -> Html {
        let active = self.active_tab == tab;
        html! {
            <button
                class={classes!("tab-btn", if active { "active" } else { "" })}
                onclick={ctx.link().callback(move |_| Msg::SetTab(tab))}
            >
                {label.to_string()}
            </button>
        }
    }
}
