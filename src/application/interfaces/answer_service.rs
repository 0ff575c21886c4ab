use async_trait::async_trait;

use crate::domain::QueryResult;

/// Sends a user's question to an answer endpoint.
///
/// Implementors perform at most one outbound exchange per call and never
/// fail: transport problems are folded into [`QueryResult::ServerError`]
/// and non-200 responses into [`QueryResult::UnexpectedStatus`].
/// Implementations hold no per-call state, so concurrent calls are
/// independent of each other.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Forward `query` exactly as given (no trimming, empty strings included).
    async fn fetch_answer(&self, query: &str) -> QueryResult;
}
