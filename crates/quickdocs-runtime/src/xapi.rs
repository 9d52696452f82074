//! xAPI WebSocket JSON-RPC client.

#![allow(missing_docs)]

use std::collections::VecDeque;
use std::net::TcpStream;

use base64::Engine as _;
use quickdocs_panel::{HostConfig, WebViewRequest, WidgetEvent};
use serde_json::{json, Value};
use smol_str::SmolStr;
use tungstenite::client::IntoClientRequest;
use tungstenite::http::{header::AUTHORIZATION, HeaderValue};
use tungstenite::stream::MaybeTlsStream;
use tungstenite::{Message, WebSocket};

use crate::error::HostError;
use crate::host::PanelHost;

const PANEL_SAVE: &str = "xCommand/UserInterface/Extensions/Panel/Save";
const PANEL_REMOVE: &str = "xCommand/UserInterface/Extensions/Panel/Remove";
const WEBVIEW_DISPLAY: &str = "xCommand/UserInterface/WebView/Display";
const MACRO_DEACTIVATE: &str = "xCommand/Macros/Macro/Deactivate";
const MACRO_RUNTIME_RESTART: &str = "xCommand/Macros/Runtime/Restart";
const FEEDBACK_SUBSCRIBE: &str = "xFeedback/Subscribe";
const FEEDBACK_EVENT_PREFIX: &str = "xFeedback/Event";
const WIDGET_ACTION_QUERY: [&str; 5] = ["Event", "UserInterface", "Extensions", "Widget", "Action"];
const WIDGET_ACTION_POINTER: &str = "/params/Event/UserInterface/Extensions/Widget/Action";

type XapiSocket = WebSocket<MaybeTlsStream<TcpStream>>;

/// Blocking xAPI session. Responses are matched by request id; widget events that
/// arrive while a response is pending are queued in arrival order.
pub struct XapiClient {
    socket: XapiSocket,
    next_id: u64,
    pending: VecDeque<WidgetEvent>,
    closed: bool,
}

impl XapiClient {
    pub fn connect(config: &HostConfig) -> Result<Self, HostError> {
        let connect_err = |message: String| HostError::Connect {
            endpoint: config.endpoint.clone(),
            message: message.into(),
        };
        let mut request = config
            .endpoint
            .as_str()
            .into_client_request()
            .map_err(|err| connect_err(err.to_string()))?;
        let credentials = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", config.username, config.password));
        let header = HeaderValue::from_str(&format!("Basic {credentials}"))
            .map_err(|err| connect_err(err.to_string()))?;
        request.headers_mut().insert(AUTHORIZATION, header);

        let (socket, _response) =
            tungstenite::connect(request).map_err(|err| connect_err(err.to_string()))?;
        tracing::info!(endpoint = %config.endpoint, "connected to xapi");
        Ok(Self {
            socket,
            next_id: 1,
            pending: VecDeque::new(),
            closed: false,
        })
    }

    /// Sends one JSON-RPC request and waits for its response.
    pub fn call(&mut self, method: &str, params: Value) -> Result<Value, HostError> {
        let id = self.next_id;
        self.next_id += 1;
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        tracing::debug!(method, id, "xapi request");
        self.socket
            .send(Message::text(request.to_string()))
            .map_err(|err| HostError::Protocol(format!("send {method}: {err}").into()))?;

        loop {
            let Some(frame) = self.read_frame()? else {
                return Err(HostError::Closed);
            };
            if frame.get("id").and_then(Value::as_u64) == Some(id) {
                return response_result(method, frame);
            }
            self.accept_notification(&frame);
        }
    }

    fn read_frame(&mut self) -> Result<Option<Value>, HostError> {
        if self.closed {
            return Ok(None);
        }
        loop {
            match self.socket.read() {
                Ok(Message::Text(text)) => {
                    return serde_json::from_str(text.as_str())
                        .map(Some)
                        .map_err(|err| HostError::Protocol(format!("invalid json: {err}").into()));
                }
                Ok(Message::Close(_)) => {
                    self.closed = true;
                    return Ok(None);
                }
                Ok(_) => {}
                Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                    self.closed = true;
                    return Ok(None);
                }
                Err(err) => return Err(HostError::Protocol(SmolStr::new(err.to_string()))),
            }
        }
    }

    fn accept_notification(&mut self, frame: &Value) {
        let method = frame.get("method").and_then(Value::as_str).unwrap_or_default();
        if !method.starts_with(FEEDBACK_EVENT_PREFIX) {
            tracing::debug!(method, "ignoring xapi notification");
            return;
        }
        if let Some(event) = widget_event_from_feedback(frame) {
            self.pending.push_back(event);
        }
    }

    fn command(&mut self, method: &str, params: Value) -> Result<(), HostError> {
        self.call(method, params).map(|_| ())
    }
}

impl PanelHost for XapiClient {
    fn save_panel(&mut self, panel_id: &str, markup: &str) -> Result<(), HostError> {
        self.command(PANEL_SAVE, json!({ "PanelId": panel_id, "body": markup }))
    }

    fn remove_panel(&mut self, panel_id: &str) -> Result<(), HostError> {
        self.command(PANEL_REMOVE, json!({ "PanelId": panel_id }))
    }

    fn display_web_view(&mut self, request: &WebViewRequest) -> Result<(), HostError> {
        self.command(
            WEBVIEW_DISPLAY,
            json!({
                "Title": request.title,
                "Url": request.url,
                "Target": request.target,
                "Mode": request.mode,
            }),
        )
    }

    fn deactivate_automation(&mut self, name: &str) -> Result<(), HostError> {
        self.command(MACRO_DEACTIVATE, json!({ "Name": name }))
    }

    fn restart_automation_runtime(&mut self) -> Result<(), HostError> {
        self.command(MACRO_RUNTIME_RESTART, json!({}))
    }

    fn subscribe_widget_events(&mut self) -> Result<(), HostError> {
        self.command(
            FEEDBACK_SUBSCRIBE,
            json!({ "Query": WIDGET_ACTION_QUERY, "NotifyCurrentValue": false }),
        )
    }

    fn next_widget_event(&mut self) -> Result<Option<WidgetEvent>, HostError> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }
            let Some(frame) = self.read_frame()? else {
                return Ok(None);
            };
            self.accept_notification(&frame);
        }
    }
}

fn response_result(method: &str, mut frame: Value) -> Result<Value, HostError> {
    if let Some(error) = frame.get("error") {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| error.to_string(), str::to_string);
        return Err(HostError::Rejected {
            method: SmolStr::new(method),
            message: message.into(),
        });
    }
    Ok(frame.get_mut("result").map(Value::take).unwrap_or(Value::Null))
}

/// Extracts `{Type, WidgetId}` from an `xFeedback/Event` notification.
#[must_use]
pub fn widget_event_from_feedback(frame: &Value) -> Option<WidgetEvent> {
    let action = frame.pointer(WIDGET_ACTION_POINTER)?;
    let widget_id = action.get("WidgetId")?.as_str()?;
    let kind = action.get("Type")?.as_str()?;
    Some(WidgetEvent::new(kind, widget_id))
}
