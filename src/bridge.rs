use std::sync::Arc;

use dashmap::DashMap;
use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tower_lsp::async_trait;
use tower_lsp::lsp_types::{CompletionItem, CompletionList, Position};

use crate::expression::Binding;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("expression service transport failed: {0}")]
    Transport(#[from] std::io::Error),
    #[error("expression service payload was malformed: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("expression service is gone")]
    ServiceGone,
}

/// Remote completion payloads arrive either as a bare item array or as a
/// paginated list wrapper; both translate to the same item shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RemoteCompletions {
    Items(Vec<CompletionItem>),
    List(CompletionList),
}

impl RemoteCompletions {
    pub fn into_items(self) -> Vec<CompletionItem> {
        match self {
            RemoteCompletions::Items(items) => items,
            RemoteCompletions::List(list) => list.items,
        }
    }
}

/// Narrow view of the remote expression-intelligence capability. The bridge
/// only ever opens a document, pushes full-text versions, and asks for
/// completions; transport and process lifecycle live behind this trait.
#[async_trait]
pub trait ExpressionIntelligence: Send + Sync {
    async fn open_document(&self, uri: &str, version: i32, text: &str) -> Result<(), BridgeError>;
    async fn change_document(&self, uri: &str, version: i32, text: &str)
        -> Result<(), BridgeError>;
    async fn complete(&self, uri: &str, position: Position)
        -> Result<RemoteCompletions, BridgeError>;
}

#[derive(Debug)]
struct SessionState {
    virtual_uri: String,
    version: i32,
    opened: bool,
}

/// Per-host-document synchronization of the virtual expression document.
///
/// One session exists per host document, created lazily and updated in place.
/// The mutex serializes version bumps so the remote side observes a strict
/// version sequence; responses are matched against the latest pushed version
/// and discarded when stale.
pub struct ExpressionBridge {
    capability: Arc<dyn ExpressionIntelligence>,
    sessions: DashMap<String, Arc<Mutex<SessionState>>>,
}

impl ExpressionBridge {
    pub fn new(capability: Arc<dyn ExpressionIntelligence>) -> Self {
        Self {
            capability,
            sessions: DashMap::new(),
        }
    }

    /// Builds the synthetic destructuring preamble for line 0 of the virtual
    /// document. Names come from the flattened chain bindings (innermost
    /// first, first occurrence wins, as destructuring patterns cannot repeat
    /// a name); the right-hand side is the innermost expression, or an
    /// `Object.assign` merge applying outermost to innermost for deeper
    /// chains.
    pub fn preamble(bindings: &[Binding], chain: &[&str]) -> String {
        if bindings.is_empty() || chain.is_empty() {
            return String::new();
        }
        let mut names: Vec<&str> = Vec::new();
        for binding in bindings {
            if !names.contains(&binding.name.as_str()) {
                names.push(&binding.name);
            }
        }
        let object = if chain.len() == 1 {
            chain[0].to_string()
        } else {
            let merged = chain.iter().rev().cloned().collect::<Vec<_>>().join(", ");
            format!("Object.assign({{}}, {merged})")
        };
        format!("const {{ {} }} = {};", names.join(", "), object)
    }

    /// Pushes the current scope and live snippet, then requests completions
    /// at the end of the snippet line. Returns `None` on any degradation:
    /// transport failure, malformed payload, or a response superseded by a
    /// newer push.
    pub async fn complete(
        &self,
        host_uri: &str,
        chain: &[&str],
        bindings: &[Binding],
        snippet: &str,
    ) -> Option<Vec<CompletionItem>> {
        let session = self
            .sessions
            .entry(host_uri.to_string())
            .or_insert_with(|| {
                Arc::new(Mutex::new(SessionState {
                    virtual_uri: format!("inmemory://model/{host_uri}.alpine.js"),
                    version: 0,
                    opened: false,
                }))
            })
            .clone();

        let (virtual_uri, pushed) = {
            let mut state = session.lock().await;
            if !state.opened {
                state.version = 1;
                if let Err(err) = self
                    .capability
                    .open_document(&state.virtual_uri, state.version, "")
                    .await
                {
                    warn!("failed to open virtual expression document: {err}");
                    return None;
                }
                state.opened = true;
            }

            state.version += 1;
            let text = format!("{}\n{}", Self::preamble(bindings, chain), snippet);
            if let Err(err) = self
                .capability
                .change_document(&state.virtual_uri, state.version, &text)
                .await
            {
                warn!("failed to sync virtual expression document: {err}");
                return None;
            }
            (state.virtual_uri.clone(), state.version)
        };

        let position = Position::new(1, snippet.len() as u32);
        let result = self.capability.complete(&virtual_uri, position).await;

        let state = session.lock().await;
        if state.version != pushed {
            debug!("discarding stale expression completions for version {pushed}");
            return None;
        }
        match result {
            Ok(remote) => Some(remote.into_items()),
            Err(err) => {
                warn!("expression completion request failed: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::extract_bindings;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct RecordingCapability {
        opens: std::sync::Mutex<Vec<(String, i32)>>,
        changes: std::sync::Mutex<Vec<(String, i32, String)>>,
        completes: AtomicUsize,
        block_first: Option<Arc<Notify>>,
    }

    #[async_trait]
    impl ExpressionIntelligence for RecordingCapability {
        async fn open_document(
            &self,
            uri: &str,
            version: i32,
            _text: &str,
        ) -> Result<(), BridgeError> {
            self.opens.lock().unwrap().push((uri.to_string(), version));
            Ok(())
        }

        async fn change_document(
            &self,
            uri: &str,
            version: i32,
            text: &str,
        ) -> Result<(), BridgeError> {
            self.changes
                .lock()
                .unwrap()
                .push((uri.to_string(), version, text.to_string()));
            Ok(())
        }

        async fn complete(
            &self,
            _uri: &str,
            _position: Position,
        ) -> Result<RemoteCompletions, BridgeError> {
            let call = self.completes.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                if let Some(notify) = &self.block_first {
                    notify.notified().await;
                }
            }
            Ok(RemoteCompletions::Items(vec![CompletionItem::new_simple(
                "remote".into(),
                "from tsserver".into(),
            )]))
        }
    }

    #[test]
    fn preamble_destructures_the_single_expression() {
        let bindings = extract_bindings("{ count: 0 }");
        assert_eq!(
            ExpressionBridge::preamble(&bindings, &["{ count: 0 }"]),
            "const { count } = { count: 0 };"
        );
    }

    #[test]
    fn preamble_merges_chains_outermost_first_and_dedupes_names() {
        let inner = extract_bindings("{ y: 2, x: 9 }");
        let outer = extract_bindings("{ x: 1 }");
        let bindings: Vec<_> = inner.into_iter().chain(outer).collect();
        assert_eq!(
            ExpressionBridge::preamble(&bindings, &["{ y: 2, x: 9 }", "{ x: 1 }"]),
            "const { y, x } = Object.assign({}, { x: 1 }, { y: 2, x: 9 });"
        );
    }

    #[test]
    fn preamble_is_empty_without_bindings() {
        assert_eq!(ExpressionBridge::preamble(&[], &[]), "");
    }

    #[tokio::test]
    async fn versions_advance_monotonically_per_document() {
        let capability = Arc::new(RecordingCapability::default());
        let bridge = ExpressionBridge::new(capability.clone());
        let bindings = extract_bindings("{ count: 0 }");

        bridge
            .complete("file:///a.html", &["{ count: 0 }"], &bindings, "cou")
            .await
            .unwrap();
        bridge
            .complete("file:///a.html", &["{ count: 0 }"], &bindings, "coun")
            .await
            .unwrap();

        let opens = capability.opens.lock().unwrap();
        assert_eq!(
            *opens,
            vec![("inmemory://model/file:///a.html.alpine.js".to_string(), 1)]
        );
        let changes = capability.changes.lock().unwrap();
        let versions: Vec<i32> = changes.iter().map(|(_, v, _)| *v).collect();
        assert_eq!(versions, vec![2, 3]);
        assert_eq!(changes[0].2, "const { count } = { count: 0 };\ncou");
    }

    #[tokio::test]
    async fn stale_responses_are_discarded() {
        let notify = Arc::new(Notify::new());
        let capability = Arc::new(RecordingCapability {
            block_first: Some(notify.clone()),
            ..Default::default()
        });
        let bridge = Arc::new(ExpressionBridge::new(capability.clone()));
        let bindings = extract_bindings("{ count: 0 }");

        let first = {
            let bridge = bridge.clone();
            let bindings = bindings.clone();
            tokio::spawn(async move {
                bridge
                    .complete("file:///a.html", &["{ count: 0 }"], &bindings, "c")
                    .await
            })
        };
        // Let the first request push its version and park in the remote call.
        while capability.completes.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        let second = bridge
            .complete("file:///a.html", &["{ count: 0 }"], &bindings, "co")
            .await;
        assert!(second.is_some());

        notify.notify_one();
        assert!(first.await.unwrap().is_none());
    }
}
