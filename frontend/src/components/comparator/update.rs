//! Update logic for the schema comparison component.
//!
//! Both entry modes funnel through `start`: a constructor failure becomes a
//! local failure with no network call, a constructed input is submitted and
//! finishes via `Msg::Finished`. `Clear` is a pure local reset.

use gloo_net::http::Request;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::comparison::ComparisonResult;

use crate::remote::{api_url, multipart, rejection, transport, OpError, RemoteOp};

use super::input::CompareInput;
use super::messages::Msg;
use super::state::ComparatorComponent;

pub fn update(
    component: &mut ComparatorComponent,
    ctx: &Context<ComparatorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::EditContent1(value) => {
            component.content1 = value;
            true
        }
        Msg::EditContent2(value) => {
            component.content2 = value;
            true
        }
        Msg::EditName1(value) => {
            component.name1 = value;
            true
        }
        Msg::EditName2(value) => {
            component.name2 = value;
            true
        }
        Msg::CompareTexts => {
            let input = CompareInput::from_texts(
                &component.content1,
                &component.content2,
                &component.name1,
                &component.name2,
            );
            start(component, ctx, input)
        }
        Msg::CompareFiles => {
            let files = component
                .file_input_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                .unwrap_or_default();
            start(component, ctx, CompareInput::from_files(files))
        }
        Msg::Finished(result) => {
            component.op = match result {
                Ok(outcome) => RemoteOp::Done(outcome),
                Err(err) => RemoteOp::Failed(err),
            };
            true
        }
        Msg::Clear => {
            component.content1.clear();
            component.content2.clear();
            component.name1.clear();
            component.name2.clear();
            component.op = RemoteOp::Idle;
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            true
        }
    }
}

fn start(
    component: &mut ComparatorComponent,
    ctx: &Context<ComparatorComponent>,
    input: Result<CompareInput, String>,
) -> bool {
    component.op = match input {
        Err(message) => RemoteOp::Failed(OpError::Local(message)),
        Ok(input) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = submit(input).await;
                link.send_message(Msg::Finished(result));
            });
            RemoteOp::Pending
        }
    };
    true
}

async fn submit(input: CompareInput) -> Result<ComparisonResult, OpError> {
    let response = match input {
        CompareInput::Texts(request) => Request::post(&api_url("/compare-schemas"))
            .json(&request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?,
        CompareInput::Files(first, second) => {
            let form = multipart(vec![("file1", first), ("file2", second)])?;
            Request::post(&api_url("/compare-schema-files"))
                .body(form)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?
        }
    };
    if response.status() == 200 {
        response.json::<ComparisonResult>().await.map_err(transport)
    } else {
        Err(rejection(response, "Failed to compare schemas").await)
    }
}
