/// Completion provider abstraction
///
/// The outbound AI call is the one external dependency of the search flow, so
/// it lives behind a trait: the binary wires up the Anthropic implementation,
/// tests substitute stubs. Providers own their own HTTP client, credential
/// and model selection.
use crate::error::AppResult;

pub mod anthropic;

/// Trait for AI completion providers
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one instruction prompt and await the final reply.
    ///
    /// The provider may internally let the model take multiple turns (e.g.
    /// web-search tool use); callers see a single request/response exchange.
    /// Returns the concatenation of all text segments of the final reply,
    /// with tool-invocation segments dropped.
    async fn complete(&self, prompt: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
