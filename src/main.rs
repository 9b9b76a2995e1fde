use log::warn;
use tower_lsp::{LspService, Server};

use alpine_language_server::backend::Backend;
use alpine_language_server::bridge::ExpressionBridge;
use alpine_language_server::tsserver::TsServerCapability;

#[tokio::main]
async fn main() {
    env_logger::init();

    // Expression-level completions come from an external TypeScript language
    // server. Running without it just means catalog and x-data completions.
    let bridge = match TsServerCapability::spawn().await {
        Ok(capability) => Some(ExpressionBridge::new(capability)),
        Err(err) => {
            warn!("typescript-language-server unavailable, expression completions disabled: {err}");
            None
        }
    };

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::build(|client| Backend::new(client, bridge)).finish();
    Server::new(stdin, stdout, socket).serve(service).await;
}
