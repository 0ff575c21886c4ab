use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::application::AnswerService;
use crate::domain::QueryResult;

/// Offline [`AnswerService`].
///
/// By default every query is answered with `{"answer": "You asked: ..."}`.
/// A scripted service returns the same result for every query instead.
/// Received queries are recorded for inspection.
pub struct MockAnswerService {
    scripted: Option<QueryResult>,
    received: Mutex<Vec<String>>,
}

impl MockAnswerService {
    pub fn new() -> Self {
        Self {
            scripted: None,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn scripted(result: QueryResult) -> Self {
        Self {
            scripted: Some(result),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for MockAnswerService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerService for MockAnswerService {
    async fn fetch_answer(&self, query: &str) -> QueryResult {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(query.to_string());

        match &self.scripted {
            Some(result) => result.clone(),
            None => QueryResult::success(json!({ "answer": format!("You asked: {query}") })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_query_by_default() {
        let service = MockAnswerService::new();
        let result = service.fetch_answer("hello").await;
        assert_eq!(result.display_text(), "You asked: hello");
    }

    #[tokio::test]
    async fn records_queries_verbatim() {
        let service = MockAnswerService::new();
        service.fetch_answer("").await;
        service.fetch_answer(" padded ").await;
        assert_eq!(service.received(), vec!["".to_string(), " padded ".to_string()]);
    }

    #[tokio::test]
    async fn keeps_recording_after_a_panic_while_locked() {
        let service = MockAnswerService::new();
        service.fetch_answer("before").await;

        let poisoned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = service.received.lock().unwrap();
            panic!("panic while holding the lock");
        }));
        assert!(poisoned.is_err());
        assert!(service.received.is_poisoned());

        service.fetch_answer("after").await;
        assert_eq!(service.received(), vec!["before".to_string(), "after".to_string()]);
    }
}
