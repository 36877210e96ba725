//! Update logic for the configuration lifecycle component.
//!
//! Every operation clears the previous outcomes, flips its own slot to
//! `Pending`, and finishes via a `*Finished` message carrying either the
//! store's payload or a classified failure. Preconditions (field rules,
//! missing id, delete confirmation) fail locally and never issue a request.

use gloo_net::http::Request;
use serde::Deserialize;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::config::ConfigRecord;
use common::requests::ConfigInput;

use crate::remote::{api_url, rejection, transport, OpError, RemoteOp};

use super::form::{self, ConfigForm};
use super::messages::{Field, Msg};
use super::state::ConfigComponent;

/// Success body of the delete endpoint.
#[derive(Deserialize)]
struct DeleteAck {
    message: Option<String>,
}

pub fn update(component: &mut ConfigComponent, ctx: &Context<ConfigComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Edit(field, value) => {
            match field {
                Field::Name => component.form.name = value,
                Field::Age => component.form.age = value,
                Field::Email => component.form.email = value,
                Field::Hobbies => component.form.hobbies = value,
                Field::Street => component.form.street = value,
                Field::City => component.form.city = value,
                Field::ZipCode => component.form.zip_code = value,
            }
            component.errors = form::validate(&component.form);
            true
        }
        Msg::ToggleActive(active) => {
            component.form.is_active = active;
            true
        }
        Msg::EditId(value) => {
            component.id_input = value;
            true
        }
        Msg::Create => {
            component.clear_outcomes();
            component.errors = form::validate(&component.form);
            if !component.errors.is_empty() {
                return true;
            }
            component.create_op = RemoteOp::Pending;

            let payload = component.form.to_input();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = create_config(payload).await;
                link.send_message(Msg::CreateFinished(result));
            });
            true
        }
        Msg::CreateFinished(result) => {
            component.create_op = match result {
                Ok(record) => {
                    component.form = ConfigForm::default();
                    component.errors.clear();
                    RemoteOp::Done(record)
                }
                Err(err) => RemoteOp::Failed(err),
            };
            true
        }
        Msg::Fetch => {
            component.clear_outcomes();
            let id = component.id_input.trim().to_string();
            if id.is_empty() {
                component.fetch_op = RemoteOp::Failed(missing_id());
                return true;
            }
            component.fetch_op = RemoteOp::Pending;

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = fetch_config(&id).await;
                link.send_message(Msg::FetchFinished(result));
            });
            true
        }
        Msg::FetchFinished(result) => {
            match result {
                Ok(record) => {
                    component.form = ConfigForm::from_record(&record);
                    component.errors.clear();
                    component.record = Some(record);
                    component.fetch_op = RemoteOp::Done(());
                }
                Err(err) => {
                    // A failed fetch leaves no stale record on display.
                    component.record = None;
                    component.fetch_op = RemoteOp::Failed(err);
                }
            }
            true
        }
        Msg::Update => {
            component.clear_outcomes();
            let id = component.id_input.trim().to_string();
            if id.is_empty() {
                component.update_op = RemoteOp::Failed(missing_id());
                return true;
            }
            component.errors = form::validate(&component.form);
            if !component.errors.is_empty() {
                return true;
            }
            component.update_op = RemoteOp::Pending;

            let payload = component.form.to_input();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = update_config(&id, payload).await;
                link.send_message(Msg::UpdateFinished(result));
            });
            true
        }
        Msg::UpdateFinished(result) => {
            match result {
                Ok(record) => {
                    component.form = ConfigForm::from_record(&record);
                    component.record = Some(record);
                    component.update_op = RemoteOp::Done(());
                }
                Err(err) => {
                    // The displayed record stays as-is on a failed update.
                    component.update_op = RemoteOp::Failed(err);
                }
            }
            true
        }
        Msg::Delete => {
            let id = component.id_input.trim().to_string();
            if id.is_empty() {
                component.clear_outcomes();
                component.delete_op = RemoteOp::Failed(missing_id());
                return true;
            }
            // Declining the prompt leaves everything untouched, including any
            // previously displayed outcome.
            if !confirm_delete() {
                return false;
            }
            component.clear_outcomes();
            component.delete_op = RemoteOp::Pending;

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = delete_config(&id).await;
                link.send_message(Msg::DeleteFinished(result));
            });
            true
        }
        Msg::DeleteFinished(result) => {
            match result {
                Ok(message) => {
                    component.record = None;
                    component.id_input.clear();
                    component.form = ConfigForm::default();
                    component.errors.clear();
                    component.delete_op = RemoteOp::Done(message);
                }
                Err(err) => {
                    component.delete_op = RemoteOp::Failed(err);
                }
            }
            true
        }
    }
}

async fn create_config(payload: ConfigInput) -> Result<ConfigRecord, OpError> {
    let response = Request::post(&api_url("/configs/"))
        .json(&payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if response.status() == 200 {
        response.json::<ConfigRecord>().await.map_err(transport)
    } else {
        Err(rejection(response, "Failed to add configuration").await)
    }
}

async fn fetch_config(id: &str) -> Result<ConfigRecord, OpError> {
    let response = Request::get(&api_url(&format!("/configs/{}", id)))
        .send()
        .await
        .map_err(transport)?;
    if response.status() == 200 {
        response.json::<ConfigRecord>().await.map_err(transport)
    } else {
        Err(rejection(response, "Configuration not found").await)
    }
}

async fn update_config(id: &str, payload: ConfigInput) -> Result<ConfigRecord, OpError> {
    let response = Request::put(&api_url(&format!("/configs/{}", id)))
        .json(&payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if response.status() == 200 {
        response.json::<ConfigRecord>().await.map_err(transport)
    } else {
        Err(rejection(response, "Failed to update configuration").await)
    }
}

async fn delete_config(id: &str) -> Result<String, OpError> {
    let response = Request::delete(&api_url(&format!("/configs/{}", id)))
        .send()
        .await
        .map_err(transport)?;
    if response.status() == 200 {
        let ack = response.json::<DeleteAck>().await.map_err(transport)?;
        Ok(ack
            .message
            .unwrap_or_else(|| "Configuration deleted successfully".to_string()))
    } else {
        Err(rejection(response, "Failed to delete configuration").await)
    }
}

fn missing_id() -> OpError {
    OpError::Local("Please enter a configuration ID".to_string())
}

/// Irreversible action gate. Declining the prompt issues no request.
fn confirm_delete() -> bool {
    web_sys::window()
        .map(|window| {
            window
                .confirm_with_message("Are you sure you want to delete this configuration?")
                .unwrap_or(false)
        })
        .unwrap_or(false)
}
