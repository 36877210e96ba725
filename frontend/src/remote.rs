//! Per-operation request state and shared transport helpers.
//!
//! Every network operation owns a `RemoteOp` slot instead of sharing
//! loading/message flags, so a completed operation can never be misattributed
//! to another operation's outcome. Components derive their busy state from
//! these slots and disable submit controls while a request is outstanding;
//! nothing is queued, cancelled, or retried.

use gloo_console::error;
use gloo_net::http::Response;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// Lifecycle of one remote operation.
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteOp<T> {
    /// Not yet invoked, or reset ahead of a new attempt.
    Idle,
    /// Request outstanding.
    Pending,
    Done(T),
    Failed(OpError),
}

impl<T> RemoteOp<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RemoteOp::Pending)
    }

    pub fn failure(&self) -> Option<&OpError> {
        match self {
            RemoteOp::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// The three failure kinds, each rendered distinctly.
#[derive(Clone, Debug, PartialEq)]
pub enum OpError {
    /// A precondition failed before any network call was issued.
    Local(String),
    /// The service answered with a non-success status; the reason is its
    /// `detail` string, surfaced verbatim.
    Rejected(String),
    /// The request never completed or the response was not decodable.
    Transport(String),
}

impl OpError {
    /// User-facing text. Transport failures carry the `Error:` prefix so they
    /// are never mistaken for a service verdict.
    pub fn display(&self) -> String {
        match self {
            OpError::Local(msg) | OpError::Rejected(msg) => msg.clone(),
            OpError::Transport(msg) => format!("Error: {}", msg),
        }
    }

    /// CSS class for the message slot.
    pub fn class(&self) -> &'static str {
        match self {
            OpError::Local(_) => "message error local",
            OpError::Rejected(_) => "message error",
            OpError::Transport(_) => "message error transport",
        }
    }
}

/// Failure body shared by all configuration-store endpoints.
#[derive(Deserialize)]
struct Detail {
    detail: String,
}

/// Extracts the service's rejection reason from a non-success response,
/// falling back to `fallback` when the body carries none.
pub async fn rejection(response: Response, fallback: &str) -> OpError {
    match response.json::<Detail>().await {
        Ok(body) if !body.detail.trim().is_empty() => OpError::Rejected(body.detail),
        _ => OpError::Rejected(fallback.to_string()),
    }
}

/// Wraps a transport-level failure, logging it to the console.
pub fn transport(err: gloo_net::Error) -> OpError {
    error!("request failed:", err.to_string());
    OpError::Transport(err.to_string())
}

/// Builds a multipart body from named file parts.
pub fn multipart(parts: Vec<(&str, web_sys::File)>) -> Result<FormData, OpError> {
    let form = FormData::new()
        .map_err(|_| OpError::Transport("could not build form data".to_string()))?;
    for (field, file) in parts {
        form.append_with_blob_and_filename(field, &file, &file.name())
            .map_err(|_| OpError::Transport("could not attach file".to_string()))?;
    }
    Ok(form)
}

/// Resolves the collaborator's base address. Deployments may inject an
/// `API_BASE_URL` global on `window`; otherwise requests stay same-origin.
pub fn api_url(path: &str) -> String {
    let base = web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("API_BASE_URL")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_render_with_error_prefix() {
        let err = OpError::Transport("network unreachable".to_string());
        assert_eq!(err.display(), "Error: network unreachable");
    }

    #[test]
    fn rejections_and_local_failures_render_verbatim() {
        assert_eq!(
            OpError::Rejected("Config not found".to_string()).display(),
            "Config not found"
        );
        assert_eq!(
            OpError::Local("Please enter a configuration ID".to_string()).display(),
            "Please enter a configuration ID"
        );
    }

    #[test]
    fn failure_kinds_style_distinctly() {
        let classes = [
            OpError::Local(String::new()).class(),
            OpError::Rejected(String::new()).class(),
            OpError::Transport(String::new()).class(),
        ];
        assert_eq!(
            classes.iter().collect::<std::collections::HashSet<_>>().len(),
            3
        );
    }

    #[test]
    fn pending_slot_reports_busy() {
        assert!(RemoteOp::<()>::Pending.is_pending());
        assert!(!RemoteOp::<()>::Idle.is_pending());
        assert!(RemoteOp::<()>::Failed(OpError::Local(String::new()))
            .failure()
            .is_some());
    }
}
