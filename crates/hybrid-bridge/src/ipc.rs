//! Wire protocol between the hosted page and the shell.
//!
//! - **JS -> Rust**: `window.ipc.postMessage(JSON.stringify(envelope))`,
//!   delivered to the surface's IPC handler. [`IpcEnvelope`] is the only
//!   accepted shape.
//! - **Rust -> JS**: scripts evaluated in the page that call into the
//!   `window.hybrid` object installed by [`init_script`].

use std::sync::{Arc, Mutex};

use hybrid_common::{BridgeError, DialogId};
use serde::{Deserialize, Serialize};

use crate::dialog::{DialogAction, DialogRequest};

/// A message from the page, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IpcEnvelope {
    /// A channel message.
    Message {
        channel: String,
        #[serde(default)]
        payload: serde_json::Value,
    },
    /// The page wants a native dialog. `ticket` keys the page's pending promise.
    Dialog {
        ticket: String,
        dialog: DialogRequest,
    },
    /// The user answered a presented dialog.
    DialogReply {
        id: DialogId,
        action: ReplyAction,
        #[serde(default)]
        text: Option<String>,
    },
}

impl IpcEnvelope {
    /// Parse an envelope from a raw IPC body.
    pub fn from_json(raw: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(raw).map_err(|e| BridgeError::Ipc(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyAction {
    Acknowledge,
    Accept,
    Reject,
    Submit,
    Cancel,
}

impl ReplyAction {
    pub fn into_action(self, text: Option<String>) -> DialogAction {
        match self {
            Self::Acknowledge => DialogAction::Acknowledge,
            Self::Accept => DialogAction::Accept,
            Self::Reject => DialogAction::Reject,
            Self::Submit => DialogAction::Submit(text.unwrap_or_default()),
            Self::Cancel => DialogAction::Cancel,
        }
    }
}

/// Scripts waiting to be evaluated in the page.
///
/// Continuations and presenters push here; the event loop flushes the queue
/// onto the surface, so a resolved call reaches the page as a later event
/// rather than inside the callback that resolved it.
#[derive(Debug, Clone, Default)]
pub struct Outbox(Arc<Mutex<Vec<String>>>);

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, script: String) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(script);
        }
    }

    pub fn drain(&self) -> Vec<String> {
        match self.0.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

fn js_value(value: &serde_json::Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Resolve the page promise keyed by `ticket`.
pub fn js_resolve(ticket: &str, value: &serde_json::Value) -> String {
    format!(
        "window.hybrid && window.hybrid._resolve({}, {});",
        js_string(ticket),
        js_value(value)
    )
}

/// Deliver a reply on `channel` to handlers registered with `window.hybrid.on`.
pub fn js_dispatch(channel: &str, payload: &serde_json::Value) -> String {
    format!(
        "window.hybrid && window.hybrid._dispatch({}, {});",
        js_string(channel),
        js_value(payload)
    )
}

pub fn js_show_dialog(id: &DialogId, request: &DialogRequest) -> String {
    let shown = serde_json::json!({ "id": id, "dialog": request });
    format!("window.hybrid && window.hybrid._showDialog({});", js_value(&shown))
}

pub fn js_hide_dialog(id: &DialogId) -> String {
    format!(
        "window.hybrid && window.hybrid._hideDialog({});",
        js_string(id.as_str())
    )
}

/// Replace the current document with a minimal error page.
pub fn js_error_page(title: &str, detail: &str) -> String {
    format!(
        r#"(function() {{
    document.documentElement.innerHTML = '<head><meta name="viewport" content="width=device-width"></head><body style="font:15px -apple-system,sans-serif;padding:24px"><h3></h3><p></p></body>';
    document.querySelector('h3').textContent = {};
    document.querySelector('p').textContent = {};
}})();"#,
        js_string(title),
        js_string(detail)
    )
}

/// Options for the initialization script.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptOptions {
    pub ignore_viewport_scale_limits: bool,
}

/// Build the script injected into every document before page scripts run.
pub fn init_script(options: ScriptOptions) -> String {
    let mut script = String::from(BRIDGE_SCRIPT);
    if options.ignore_viewport_scale_limits {
        script.push_str(VIEWPORT_SCRIPT);
    }
    script
}

const BRIDGE_SCRIPT: &str = r#"
(function() {
    if (window.hybrid) { return; }
    var tickets = 0;
    // Tickets are unique per document so a late answer meant for a previous
    // document can never settle a call in this one.
    var nonce = (function() {
        if (window.crypto && window.crypto.getRandomValues) {
            var bytes = new Uint32Array(2);
            window.crypto.getRandomValues(bytes);
            return bytes[0].toString(36) + bytes[1].toString(36);
        }
        return Math.random().toString(36).slice(2) + Date.now().toString(36);
    })();
    var waiting = {};
    var handlers = {};

    function post(envelope) {
        window.ipc.postMessage(JSON.stringify(envelope));
    }

    function ask(dialog) {
        return new Promise(function(resolve) {
            var ticket = nonce + '-' + (++tickets);
            waiting[ticket] = resolve;
            post({ kind: 'dialog', ticket: ticket, dialog: dialog });
        });
    }

    window.hybrid = {
        post: function(channel, payload) {
            post({
                kind: 'message',
                channel: String(channel),
                payload: payload === undefined ? null : payload
            });
        },
        messageHandlers: new Proxy({}, {
            get: function(_, name) {
                return {
                    postMessage: function(body) { window.hybrid.post(name, body); }
                };
            }
        }),
        on: function(channel, callback) {
            handlers[channel] = callback;
        },
        alert: function(message) {
            return ask({ type: 'alert', message: String(message) });
        },
        confirm: function(message) {
            return ask({ type: 'confirm', message: String(message) });
        },
        prompt: function(message, defaultText) {
            return ask({
                type: 'prompt',
                message: String(message),
                default_text: defaultText == null ? null : String(defaultText)
            });
        },
        _dispatch: function(channel, payload) {
            var handler = handlers[channel];
            if (handler) { handler(payload); }
        },
        _resolve: function(ticket, value) {
            var resolve = waiting[ticket];
            if (resolve) {
                delete waiting[ticket];
                resolve(value);
            }
        },
        _reply: function(id, action, text) {
            post({ kind: 'dialog_reply', id: id, action: action, text: text == null ? null : text });
        },
        _showDialog: function(shown) {
            var d = shown.dialog;
            var overlay = document.createElement('div');
            overlay.id = 'hybrid-dialog-' + shown.id;
            overlay.setAttribute('style', 'position:fixed;inset:0;z-index:2147483647;display:flex;' +
                'align-items:center;justify-content:center;background:rgba(0,0,0,0.4)');
            var box = document.createElement('div');
            box.setAttribute('style', 'background:#fff;color:#000;min-width:240px;max-width:80%;' +
                'padding:16px;border-radius:12px;font:15px -apple-system,sans-serif');
            var text = document.createElement('p');
            text.textContent = d.message;
            box.appendChild(text);
            var input = null;
            if (d.type === 'prompt') {
                input = document.createElement('input');
                input.value = d.default_text || '';
                input.setAttribute('style', 'width:100%;box-sizing:border-box;margin-bottom:12px');
                box.appendChild(input);
            }
            function button(label, action) {
                var b = document.createElement('button');
                b.textContent = label;
                b.setAttribute('style', 'margin-left:8px');
                b.onclick = function() {
                    overlay.remove();
                    window.hybrid._reply(shown.id, action, input ? input.value : null);
                };
                box.appendChild(b);
            }
            if (d.type === 'confirm') {
                button('Cancel', 'reject');
                button('OK', 'accept');
            } else if (d.type === 'prompt') {
                button('Cancel', 'cancel');
                button('OK', 'submit');
            } else {
                button('OK', 'acknowledge');
            }
            overlay.appendChild(box);
            (document.body || document.documentElement).appendChild(overlay);
            if (input) { input.focus(); }
        },
        _hideDialog: function(id) {
            var el = document.getElementById('hybrid-dialog-' + id);
            if (el) { el.remove(); }
        }
    };
})();
"#;

const VIEWPORT_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function() {
    var limits = /^(maximum-scale|minimum-scale|user-scalable)\s*=/;
    document.querySelectorAll('meta[name=viewport]').forEach(function(meta) {
        var parts = (meta.getAttribute('content') || '').split(',')
            .map(function(p) { return p.trim(); })
            .filter(function(p) { return p && !limits.test(p); });
        meta.setAttribute('content', parts.join(', '));
    });
});
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_channel_message() {
        let env = IpcEnvelope::from_json(r#"{"kind":"message","channel":"log","payload":"hello"}"#)
            .unwrap();
        assert_eq!(
            env,
            IpcEnvelope::Message {
                channel: "log".into(),
                payload: serde_json::json!("hello"),
            }
        );
    }

    #[test]
    fn missing_payload_is_null() {
        let env = IpcEnvelope::from_json(r#"{"kind":"message","channel":"ping"}"#).unwrap();
        assert!(matches!(env, IpcEnvelope::Message { payload: serde_json::Value::Null, .. }));
    }

    #[test]
    fn parses_dialog_request() {
        let env = IpcEnvelope::from_json(
            r#"{"kind":"dialog","ticket":"t1","dialog":{"type":"prompt","message":"Name?","default_text":"guest"}}"#,
        )
        .unwrap();
        match env {
            IpcEnvelope::Dialog { ticket, dialog } => {
                assert_eq!(ticket, "t1");
                assert_eq!(
                    dialog,
                    DialogRequest::Prompt {
                        message: "Name?".into(),
                        default_text: Some("guest".into()),
                    }
                );
            }
            other => panic!("unexpected envelope {other:?}"),
        }
    }

    #[test]
    fn parses_dialog_reply_with_text() {
        let env = IpcEnvelope::from_json(
            r#"{"kind":"dialog_reply","id":"abc","action":"submit","text":"Ada"}"#,
        )
        .unwrap();
        match env {
            IpcEnvelope::DialogReply { id, action, text } => {
                assert_eq!(id.as_str(), "abc");
                assert_eq!(action.into_action(text), DialogAction::Submit("Ada".into()));
            }
            other => panic!("unexpected envelope {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_kind_and_garbage() {
        assert!(matches!(
            IpcEnvelope::from_json(r#"{"kind":"eval","code":"1"}"#),
            Err(BridgeError::Ipc(_))
        ));
        assert!(IpcEnvelope::from_json("not json").is_err());
    }

    #[test]
    fn submit_without_text_is_empty_submit() {
        assert_eq!(
            ReplyAction::Submit.into_action(None),
            DialogAction::Submit(String::new())
        );
    }

    #[test]
    fn scripts_escape_strings() {
        let js = js_resolve("t\"1", &serde_json::json!("</script>"));
        assert_eq!(
            js,
            r#"window.hybrid && window.hybrid._resolve("t\"1", "</script>");"#
        );
        let js = js_dispatch("ping", &serde_json::json!("pong"));
        assert!(js.contains(r#"_dispatch("ping", "pong")"#));
    }

    #[test]
    fn error_page_sets_text_not_markup() {
        let js = js_error_page("Can't load", "<b>offline</b>");
        assert!(js.contains(r#"textContent = "<b>offline</b>""#));
    }

    #[test]
    fn init_script_includes_viewport_override_only_when_asked() {
        let plain = init_script(ScriptOptions::default());
        assert!(plain.contains("window.hybrid = {"));
        assert!(!plain.contains("user-scalable"));

        let zoomable = init_script(ScriptOptions {
            ignore_viewport_scale_limits: true,
        });
        assert!(zoomable.contains("user-scalable"));
    }

    #[test]
    fn page_tickets_carry_a_per_document_nonce() {
        let script = init_script(ScriptOptions::default());
        assert!(script.contains("getRandomValues"));
        assert!(script.contains("var ticket = nonce + '-' + (++tickets);"));
        assert!(!script.contains("'t' + (++tickets)"));
    }

    #[test]
    fn outbox_drains_in_order() {
        let outbox = Outbox::new();
        outbox.push("a".into());
        outbox.clone().push("b".into());
        assert_eq!(outbox.len(), 2);
        assert_eq!(outbox.drain(), vec!["a", "b"]);
        assert!(outbox.is_empty());
    }
}
