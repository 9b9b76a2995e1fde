use std::process::Stdio;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use log::{debug, warn};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::process::{ChildStdin, Command};
use tokio::sync::{oneshot, Mutex};
use tower_lsp::async_trait;
use tower_lsp::lsp_types::Position;

use crate::bridge::{BridgeError, ExpressionIntelligence, RemoteCompletions};

/// JSON-RPC client for a `typescript-language-server --stdio` child process.
/// Messages use the standard `Content-Length` framing; responses are routed
/// back to callers through a pending map keyed by request id.
pub struct TsServerCapability {
    writer: Mutex<ChildStdin>,
    pending: Arc<DashMap<i64, oneshot::Sender<Value>>>,
    next_id: AtomicI64,
}

impl TsServerCapability {
    pub async fn spawn() -> Result<Arc<Self>, BridgeError> {
        let mut child = Command::new("typescript-language-server")
            .arg("--stdio")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let stdin = child.stdin.take().ok_or(BridgeError::ServiceGone)?;
        let stdout = child.stdout.take().ok_or(BridgeError::ServiceGone)?;

        let pending: Arc<DashMap<i64, oneshot::Sender<Value>>> = Arc::new(DashMap::new());
        let reader_pending = pending.clone();
        tokio::spawn(async move {
            let mut reader = BufReader::new(stdout);
            loop {
                match read_message(&mut reader).await {
                    Ok(Some(message)) => {
                        let Some(id) = message.get("id").and_then(Value::as_i64) else {
                            continue;
                        };
                        if let Some((_, tx)) = reader_pending.remove(&id) {
                            let _ = tx.send(message);
                        }
                    }
                    Ok(None) => break,
                    Err(err) => {
                        warn!("expression service stream error: {err}");
                        break;
                    }
                }
            }
            debug!("expression service stream closed");
            reader_pending.clear();
        });

        let capability = Arc::new(Self {
            writer: Mutex::new(stdin),
            pending,
            next_id: AtomicI64::new(1),
        });

        capability
            .request(
                "initialize",
                json!({
                    "processId": std::process::id(),
                    "rootUri": null,
                    "capabilities": {},
                }),
            )
            .await?;
        capability.notify("initialized", json!({})).await?;

        Ok(capability)
    }

    async fn send(&self, payload: &Value) -> Result<(), BridgeError> {
        let body = serde_json::to_string(payload)?;
        let framed = format!("Content-Length: {}\r\n\r\n{}", body.len(), body);
        let mut writer = self.writer.lock().await;
        writer.write_all(framed.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, BridgeError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = oneshot::channel();
        self.pending.insert(id, tx);

        let payload = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        if let Err(err) = self.send(&payload).await {
            self.pending.remove(&id);
            return Err(err);
        }

        let mut response = rx.await.map_err(|_| BridgeError::ServiceGone)?;
        Ok(response
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }

    async fn notify(&self, method: &str, params: Value) -> Result<(), BridgeError> {
        self.send(&json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
        }))
        .await
    }
}

async fn read_message<R>(reader: &mut BufReader<R>) -> Result<Option<Value>, BridgeError>
where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut content_length: Option<usize> = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Content-Length:") {
            content_length = value.trim().parse().ok();
        }
    }

    let Some(length) = content_length else {
        return Ok(None);
    };
    let mut body = vec![0u8; length];
    reader.read_exact(&mut body).await?;
    Ok(Some(serde_json::from_slice(&body)?))
}

#[async_trait]
impl ExpressionIntelligence for TsServerCapability {
    async fn open_document(&self, uri: &str, version: i32, text: &str) -> Result<(), BridgeError> {
        self.notify(
            "textDocument/didOpen",
            json!({
                "textDocument": {
                    "uri": uri,
                    "languageId": "javascript",
                    "version": version,
                    "text": text,
                }
            }),
        )
        .await
    }

    async fn change_document(
        &self,
        uri: &str,
        version: i32,
        text: &str,
    ) -> Result<(), BridgeError> {
        self.notify(
            "textDocument/didChange",
            json!({
                "textDocument": { "uri": uri, "version": version },
                "contentChanges": [{ "text": text }],
            }),
        )
        .await
    }

    async fn complete(
        &self,
        uri: &str,
        position: Position,
    ) -> Result<RemoteCompletions, BridgeError> {
        let result = self
            .request(
                "textDocument/completion",
                json!({
                    "textDocument": { "uri": uri },
                    "position": { "line": position.line, "character": position.character },
                }),
            )
            .await?;
        if result.is_null() {
            return Ok(RemoteCompletions::Items(Vec::new()));
        }
        Ok(serde_json::from_value(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_framed_messages() {
        let body = r#"{"jsonrpc":"2.0","id":7,"result":[]}"#;
        let wire = format!("Content-Length: {}\r\n\r\n{}", body.len(), body);
        let mut reader = BufReader::new(wire.as_bytes());
        let message = read_message(&mut reader).await.unwrap().unwrap();
        assert_eq!(message["id"], 7);
        assert!(read_message(&mut reader).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn tolerates_extra_headers() {
        let body = r#"{"jsonrpc":"2.0","method":"x"}"#;
        let wire = format!(
            "Content-Type: application/vscode-jsonrpc\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        let mut reader = BufReader::new(wire.as_bytes());
        let message = read_message(&mut reader).await.unwrap().unwrap();
        assert_eq!(message["method"], "x");
    }
}
