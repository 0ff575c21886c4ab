use std::sync::Arc;

use crate::application::AnswerService;
use crate::domain::{ChatMessage, QueryResult, Transcript};

/// One conversation in the chat box.
///
/// Each `send` appends the user's message, asks the answer service once and
/// appends the rendered reply. Outcomes without an answer get a readable
/// fallback so the chat box always has something to show.
pub struct ChatSessionUseCase {
    answer_service: Arc<dyn AnswerService>,
    transcript: Transcript,
}

impl ChatSessionUseCase {
    pub fn new(answer_service: Arc<dyn AnswerService>) -> Self {
        Self {
            answer_service,
            transcript: Transcript::new(),
        }
    }

    pub async fn send(&mut self, input: &str) -> (ChatMessage, QueryResult) {
        self.transcript.push(ChatMessage::user(input));

        let result = self.answer_service.fetch_answer(input).await;
        let reply = ChatMessage::assistant(result.display_text());
        self.transcript.push(reply.clone());

        (reply, result)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}
