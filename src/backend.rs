use dashmap::DashMap;
use log::debug;
use ropey::Rope;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CompletionOptions, CompletionParams, CompletionResponse, DidChangeTextDocumentParams,
    DidCloseTextDocumentParams, DidOpenTextDocumentParams, InitializeParams, InitializeResult,
    InitializedParams, ServerCapabilities, TextDocumentSyncCapability, TextDocumentSyncKind,
};
use tower_lsp::{Client, LanguageServer};

use crate::bridge::ExpressionBridge;
use crate::completion::resolve_completions;

pub struct Backend {
    pub client: Client,
    pub document_map: DashMap<String, Rope>,
    pub bridge: Option<ExpressionBridge>,
}

impl Backend {
    pub fn new(client: Client, bridge: Option<ExpressionBridge>) -> Self {
        Self {
            client,
            document_map: DashMap::new(),
            bridge,
        }
    }

    fn on_change(&self, uri: String, text: &str) {
        debug!("document changed: {uri}");
        self.document_map.insert(uri, Rope::from_str(text));
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            server_info: None,
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    trigger_characters: Some(vec![
                        ".".to_string(),
                        "@".to_string(),
                        ":".to_string(),
                        "$".to_string(),
                    ]),
                    ..Default::default()
                }),
                ..ServerCapabilities::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        debug!("initialized!");
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.on_change(
            params.text_document.uri.to_string(),
            &params.text_document.text,
        );
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        if let Some(change) = params.content_changes.into_iter().next() {
            self.on_change(params.text_document.uri.to_string(), &change.text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.document_map.remove(params.text_document.uri.as_str());
        debug!("document closed: {}", params.text_document.uri);
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri.to_string();
        let position = params.text_document_position.position;

        let Some(rope) = self.document_map.get(&uri) else {
            return Ok(None);
        };
        let text = rope.to_string();
        drop(rope);

        let items = resolve_completions(&uri, &text, position, self.bridge.as_ref()).await;
        Ok(Some(CompletionResponse::Array(items)))
    }
}
