//! View rendering for the schema comparison component.
//!
//! The result pane is shared by both entry modes: an identical/different
//! badge, per-source validity with itemized errors, and the difference tree
//! rendered recursively so nested structure is never flattened or truncated.

use serde_json::Value;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::comparison::{ComparisonResult, SchemaStatus};

use crate::remote::RemoteOp;

use super::messages::Msg;
use super::state::ComparatorComponent;

pub fn view(component: &ComparatorComponent, ctx: &Context<ComparatorComponent>) -> Html {
    let link = ctx.link();
    let busy = component.op.is_pending();
    html! {
        <div class="form-section">
            <h2>{"Compare Schemas"}</h2>
            <div class="compare-texts">
                { schema_input(link, "Schema 1", &component.name1, &component.content1,
                    Msg::EditName1, Msg::EditContent1) }
                { schema_input(link, "Schema 2", &component.name2, &component.content2,
                    Msg::EditName2, Msg::EditContent2) }
                <button disabled={busy} onclick={link.callback(|_| Msg::CompareTexts)}>
                    {"Compare Texts"}
                </button>
            </div>
            <div class="compare-files">
                <input
                    type="file"
                    accept=".yaml,.yml"
                    multiple=true
                    ref={component.file_input_ref.clone()}
                />
                <button disabled={busy} onclick={link.callback(|_| Msg::CompareFiles)}>
                    {"Compare Files"}
                </button>
                <p class="note">{"Select exactly two YAML files to compare"}</p>
            </div>
            <button class="clear-button" disabled={busy} onclick={link.callback(|_| Msg::Clear)}>
                {"Clear"}
            </button>
            { build_result(component) }
        </div>
    }
}

fn schema_input(
    link: &Scope<ComparatorComponent>,
    label: &str,
    name_value: &str,
    content_value: &str,
    name_msg: fn(String) -> Msg,
    content_msg: fn(String) -> Msg,
) -> Html {
    html! {
        <div class="schema-input">
            <label>{label.to_string()}</label>
            <input
                type="text"
                placeholder="Display name (optional)"
                value={name_value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    name_msg(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <textarea
                placeholder="Paste YAML content here"
                value={content_value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    content_msg(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        </div>
    }
}

fn build_result(component: &ComparatorComponent) -> Html {
    match &component.op {
        RemoteOp::Idle => html! {},
        RemoteOp::Pending => html! { <div class="loading">{"Loading..."}</div> },
        RemoteOp::Failed(err) => html! { <div class={err.class()}>{err.display()}</div> },
        RemoteOp::Done(result) => render_result(result),
    }
}

fn render_result(result: &ComparisonResult) -> Html {
    let both_valid = result.schema1.valid && result.schema2.valid;
    html! {
        <div class="comparison-result">
            <h3>{"Comparison Result"}</h3>
            <div class={classes!("badge", if result.are_identical { "identical" } else { "different" })}>
                { if result.are_identical { "Schemas are identical" } else { "Schemas differ" } }
            </div>
            { source_status(&result.schema1_name, &result.schema1) }
            { source_status(&result.schema2_name, &result.schema2) }
            {
                // The difference tree is only meaningful when both sides are
                // valid and actually differ.
                match &result.differences {
                    Some(differences) if both_valid && !result.are_identical => html! {
                        <div class="differences">
                            <h4>{"Differences"}</h4>
                            { render_value(differences) }
                        </div>
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}

fn source_status(name: &str, status: &SchemaStatus) -> Html {
    html! {
        <div class={classes!("source-status", if status.valid { "valid" } else { "invalid" })}>
            <strong>{name.to_string()}</strong>
            {
                if status.valid {
                    html! { <span>{": valid"}</span> }
                } else {
                    html! {
                        <>
                            <span>{": invalid"}</span>
                            <ul class="error-list">
                                { for status.errors.iter().flatten().map(|error| html! {
                                    <li>{error.clone()}</li>
                                }) }
                            </ul>
                        </>
                    }
                }
            }
        </div>
    }
}

/// Renders the difference tree losslessly: objects and arrays recurse,
/// scalars print as-is.
fn render_value(value: &Value) -> Html {
    match value {
        Value::Object(map) => html! {
            <ul>
                { for map.iter().map(|(key, child)| html! {
                    <li>
                        <span class="diff-key">{format!("{}: ", key)}</span>
                        { render_value(child) }
                    </li>
                }) }
            </ul>
        },
        Value::Array(items) => html! {
            <ul>
                { for items.iter().map(|item| html! { <li>{ render_value(item) }</li> }) }
            </ul>
        },
        Value::String(text) => html! { <span class="diff-value">{text.clone()}</span> },
        other => html! { <span class="diff-value">{other.to_string()}</span> },
    }
}
