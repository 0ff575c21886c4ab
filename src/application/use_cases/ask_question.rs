use std::sync::Arc;

use tracing::debug;

use crate::application::AnswerService;
use crate::domain::QueryResult;

pub struct AskQuestionUseCase {
    answer_service: Arc<dyn AnswerService>,
}

impl AskQuestionUseCase {
    pub fn new(answer_service: Arc<dyn AnswerService>) -> Self {
        Self { answer_service }
    }

    pub async fn execute(&self, query: &str) -> QueryResult {
        let result = self.answer_service.fetch_answer(query).await;
        debug!("Query answered with code {}", result.code());
        result
    }
}
