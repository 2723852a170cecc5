use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::ast::{Quicklist, Tag, TAGS_ORDER};
use crate::parser::{build_quicklist, extract_blocks};

// workspace/executeCommand entry point for applying a quicklist selection.
// Arguments: [document uri, selected index]; a negative index means the
// picker was cancelled.
pub const GOTO_COMMAND: &str = "docblocks.goto";

#[derive(Debug)]
pub struct Backend {
    pub client: Client,
    pub documents: Arc<RwLock<HashMap<Url, String>>>,
}

// Symbol List Builder
pub fn build_document_symbols(uri: &Url, quicklist: &Quicklist) -> Vec<SymbolInformation> {
    quicklist
        .blocks
        .iter()
        .map(|block| {
            // The most specific tag present decides the symbol kind.
            let kind = TAGS_ORDER
                .iter()
                .rev()
                .copied()
                .find(|tag| block.tags.contains_key(tag))
                .map(|tag| match tag {
                    Tag::Package => SymbolKind::PACKAGE,
                    Tag::Module => SymbolKind::MODULE,
                    Tag::Submodule => SymbolKind::NAMESPACE,
                    Tag::Function => SymbolKind::FUNCTION,
                    Tag::Class => SymbolKind::CLASS,
                    Tag::Method => SymbolKind::METHOD,
                })
                .unwrap_or(SymbolKind::OBJECT);

            #[allow(deprecated)]
            SymbolInformation {
                name: block.path_string.clone(),
                kind,
                tags: None,
                deprecated: None,
                location: Location {
                    uri: uri.clone(),
                    range: block.region,
                },
                container_name: None,
            }
        })
        .collect()
}

fn format_quicklist_summary(quicklist: &Quicklist) -> String {
    let mut output = String::new();
    output.push_str("=== Docblock Index ===\n");
    for block in &quicklist.blocks {
        let start = block.region.start;
        output.push_str(&format!(
            "{} (id {}, depth {}, line {})\n",
            block.path_string,
            block.id,
            block.depth,
            start.line + 1
        ));
    }
    output.push_str("======================\n");
    output
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Backend {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    // Indexing Document
    pub async fn index_document(&self, uri: Url, text: String) {
        self.documents.write().await.insert(uri, text.clone());

        // Extraction is total: malformed comments just yield fewer blocks.
        let quicklist = build_quicklist(extract_blocks(&text));
        let summary = format_quicklist_summary(&quicklist);
        self.client
            .log_message(
                MessageType::INFO,
                format!("Indexed {} docblocks:\n{}", quicklist.blocks.len(), summary),
            )
            .await;
    }

    async fn quicklist_for(&self, uri: &Url) -> Option<Quicklist> {
        let docs = self.documents.read().await;
        let text = docs.get(uri)?;
        Some(build_quicklist(extract_blocks(text)))
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),

                document_symbol_provider: Some(OneOf::Left(true)),

                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: vec![GOTO_COMMAND.to_string()],
                    work_done_progress_options: Default::default(),
                }),

                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "Docblock LSP initialized!")
            .await;
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let text = params.text_document.text;

        self.index_document(uri, text).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        if let Some(change) = params.content_changes.into_iter().next() {
            self.index_document(uri, change.text).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.write().await.remove(&params.text_document.uri);
        self.client
            .publish_diagnostics(params.text_document.uri, vec![], Some(1))
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;
        let quicklist = match self.quicklist_for(&uri).await {
            Some(q) => q,
            None => return Ok(None),
        };

        let symbols = build_document_symbols(&uri, &quicklist);
        Ok(Some(DocumentSymbolResponse::Flat(symbols)))
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        if params.command != GOTO_COMMAND {
            return Ok(None);
        }

        let mut args = params.arguments.into_iter();
        let uri = args
            .next()
            .and_then(|value| serde_json::from_value::<Url>(value).ok());
        let index = args.next().and_then(|value| value.as_i64());

        let (uri, index) = match (uri, index) {
            (Some(uri), Some(index)) => (uri, index),
            _ => return Ok(None),
        };

        let quicklist = match self.quicklist_for(&uri).await {
            Some(q) => q,
            None => return Ok(None),
        };

        // The cancellation sentinel (any negative index) becomes None and
        // falls through as a no-op; so does an out-of-range index.
        let choice = usize::try_from(index).ok();
        if let Some(region) = quicklist.select(choice) {
            let _ = self
                .client
                .show_document(ShowDocumentParams {
                    uri,
                    external: Some(false),
                    take_focus: Some(true),
                    selection: Some(region),
                })
                .await;
        }

        Ok(None)
    }
}
