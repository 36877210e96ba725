//! YAML validation tab: uploads a document and renders the service verdict.
//!
//! The client does no YAML parsing of its own; its only job is transport and
//! verdict display. A change event with no file selected is a no-op, not an
//! error. Transport failures render distinctly from an invalid-document
//! verdict.

use gloo_net::http::Request;
use web_sys::{Event, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::validation::ValidationResult;

use crate::remote::{api_url, multipart, rejection, transport, OpError, RemoteOp};

pub enum Msg {
    FileSelected(web_sys::File),
    Finished(Result<ValidationResult, OpError>),
}

pub struct ValidatorComponent {
    result: RemoteOp<ValidationResult>,
}

impl Component for ValidatorComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            result: RemoteOp::Idle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(file) => {
                self.result = RemoteOp::Pending;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = submit(file).await;
                    link.send_message(Msg::Finished(result));
                });
                true
            }
            Msg::Finished(result) => {
                self.result = match result {
                    Ok(verdict) => RemoteOp::Done(verdict),
                    Err(err) => RemoteOp::Failed(err),
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="form-section">
                <h2>{"Validate YAML File"}</h2>
                <div class="file-upload">
                    <input
                        type="file"
                        accept=".yaml,.yml"
                        disabled={self.result.is_pending()}
                        onchange={link.batch_callback(|e: Event| {
                            // No selection is a no-op.
                            e.target_unchecked_into::<HtmlInputElement>()
                                .files()
                                .and_then(|files| files.get(0))
                                .map(Msg::FileSelected)
                        })}
                    />
                    <p class="note">{"Upload a YAML file to validate against the schema"}</p>
                </div>
                { self.build_result() }
            </div>
        }
    }
}

impl ValidatorComponent {
    fn build_result(&self) -> Html {
        match &self.result {
            RemoteOp::Idle => html! {},
            RemoteOp::Pending => html! { <div class="loading">{"Loading..."}</div> },
            RemoteOp::Done(verdict) => {
                let class = if verdict.is_valid {
                    "validation-result valid"
                } else {
                    "validation-result invalid"
                };
                let text = if verdict.is_valid {
                    verdict
                        .message
                        .clone()
                        .unwrap_or_else(|| "YAML is valid.".to_string())
                } else {
                    verdict
                        .error
                        .clone()
                        .unwrap_or_else(|| "YAML is invalid.".to_string())
                };
                html! {
                    <div class={class}>
                        <h3>{"Validation Result"}</h3>
                        <p>{text}</p>
                    </div>
                }
            }
            RemoteOp::Failed(err) => html! { <div class={err.class()}>{err.display()}</div> },
        }
    }
}

async fn submit(file: web_sys::File) -> Result<ValidationResult, OpError> {
    let form = multipart(vec![("file", file)])?;
    let response = Request::post(&api_url("/validate"))
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if response.status() == 200 {
        response.json::<ValidationResult>().await.map_err(transport)
    } else {
        Err(rejection(response, "Failed to validate file").await)
    }
}
