//! View rendering for the configuration lifecycle component.
//!
//! Both surfaces share the form markup: the Add tab pairs it with a create
//! action, the Manage tab shows it only once a record is displayed, pre-filled
//! from the store's response.

use web_sys::{Event, HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::remote::RemoteOp;

use super::messages::{Field, Msg};
use super::state::{ConfigComponent, ConfigMode};

pub fn view(component: &ConfigComponent, ctx: &Context<ConfigComponent>) -> Html {
    match ctx.props().mode {
        ConfigMode::Create => view_create(component, ctx),
        ConfigMode::Manage => view_manage(component, ctx),
    }
}

fn view_create(component: &ConfigComponent, ctx: &Context<ConfigComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="form-section">
            <h2>{"Add New Configuration"}</h2>
            { build_messages(component) }
            { build_loading(component) }
            { build_form(component, link) }
            <button
                disabled={component.busy() || !component.errors.is_empty()}
                onclick={link.callback(|_| Msg::Create)}
            >
                {"Add Configuration"}
            </button>
        </div>
    }
}

fn view_manage(component: &ConfigComponent, ctx: &Context<ConfigComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="form-section">
            <h2>{"Manage Configuration"}</h2>
            { build_messages(component) }
            { build_loading(component) }
            <div class="id-section">
                <input
                    type="number"
                    placeholder="Enter Configuration ID"
                    value={component.id_input.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::EditId(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <button disabled={component.busy()} onclick={link.callback(|_| Msg::Fetch)}>
                    {"Fetch"}
                </button>
            </div>
            {
                if component.record.is_some() {
                    html! {
                        <div class="config-details">
                            <h3>{"Configuration Details"}</h3>
                            { build_form(component, link) }
                            <div class="button-group">
                                <button
                                    disabled={component.busy() || !component.errors.is_empty()}
                                    onclick={link.callback(|_| Msg::Update)}
                                >
                                    {"Update Configuration"}
                                </button>
                                <button
                                    class="delete-button"
                                    disabled={component.busy()}
                                    onclick={link.callback(|_| Msg::Delete)}
                                >
                                    {"Delete Configuration"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Renders the outcome of the last completed operation. At most one slot is
/// non-idle because every operation clears the others before starting.
fn build_messages(component: &ConfigComponent) -> Html {
    let mut items: Vec<Html> = Vec::new();

    if let RemoteOp::Done(record) = &component.create_op {
        items.push(html! {
            <div class="message success">
                { format!("Configuration added successfully with ID: {}", record.id) }
            </div>
        });
    }
    if let RemoteOp::Done(()) = &component.update_op {
        items.push(html! {
            <div class="message success">{"Configuration updated successfully"}</div>
        });
    }
    if let RemoteOp::Done(message) = &component.delete_op {
        items.push(html! { <div class="message success">{message.clone()}</div> });
    }

    for err in [
        component.create_op.failure(),
        component.fetch_op.failure(),
        component.update_op.failure(),
        component.delete_op.failure(),
    ]
    .into_iter()
    .flatten()
    {
        items.push(html! { <div class={err.class()}>{err.display()}</div> });
    }

    items.into_iter().collect::<Html>()
}

fn build_loading(component: &ConfigComponent) -> Html {
    if component.busy() {
        html! { <div class="loading">{"Loading..."}</div> }
    } else {
        html! {}
    }
}

fn build_form(component: &ConfigComponent, link: &Scope<ConfigComponent>) -> Html {
    html! {
        <>
            { text_field(link, "Name *", Field::Name, &component.form.name, "text",
                component.errors.get("name")) }
            { text_field(link, "Age *", Field::Age, &component.form.age, "number",
                component.errors.get("age")) }
            { text_field(link, "Email *", Field::Email, &component.form.email, "email",
                component.errors.get("email")) }
            <div class="form-group checkbox">
                <label>
                    <input
                        type="checkbox"
                        checked={component.form.is_active}
                        onchange={link.callback(|e: Event| {
                            Msg::ToggleActive(e.target_unchecked_into::<HtmlInputElement>().checked())
                        })}
                    />
                    {"Active"}
                </label>
            </div>
            { text_field(link, "Hobbies (comma-separated)", Field::Hobbies,
                &component.form.hobbies, "text", None) }
            <h3>{"Address (Optional)"}</h3>
            { text_field(link, "Street", Field::Street, &component.form.street, "text", None) }
            { text_field(link, "City", Field::City, &component.form.city, "text",
                component.errors.get("city")) }
            { text_field(link, "ZIP Code", Field::ZipCode, &component.form.zip_code, "text", None) }
        </>
    }
}

fn text_field(
    link: &Scope<ConfigComponent>,
    label: &str,
    field: Field,
    value: &str,
    input_type: &'static str,
    error: Option<&String>,
) -> Html {
    html! {
        <div class="form-group">
            <label>{label.to_string()}</label>
            <input
                type={input_type}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::Edit(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            {
                match error {
                    Some(message) => html! { <div class="error">{message.clone()}</div> },
                    None => html! {},
                }
            }
        </div>
    }
}
