use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{AnswerService, AskQuestionUseCase, ChatSessionUseCase};
use crate::connector::{HttpAnswerClient, MockAnswerService};
use crate::domain::EndpointConfig;

/// Label reported as the endpoint when the offline mock is in use.
pub const MOCK_ENDPOINT_LABEL: &str = "mock";

#[derive(Debug, Clone, Default)]
pub struct ContainerConfig {
    /// Overrides `CHATBOX_QUERY_URL`.
    pub endpoint: Option<String>,
    /// Overrides `CHATBOX_TIMEOUT_SECS`.
    pub timeout_secs: Option<u64>,
    /// Answer from canned responses instead of the network.
    pub mock: bool,
}

pub struct Container {
    answer_service: Arc<dyn AnswerService>,
    endpoint: String,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        if config.mock {
            debug!("Using mock answer service");
            return Ok(Self::with_service(
                Arc::new(MockAnswerService::new()),
                MOCK_ENDPOINT_LABEL,
            ));
        }

        let endpoint = EndpointConfig::resolve(config.endpoint.as_deref(), config.timeout_secs)?;
        debug!(
            "Using query endpoint {} (timeout: {:?})",
            endpoint.url(),
            endpoint.timeout()
        );
        let client = HttpAnswerClient::new(&endpoint)?;

        Ok(Self::with_service(Arc::new(client), endpoint.url()))
    }

    pub fn with_service(answer_service: Arc<dyn AnswerService>, endpoint: impl Into<String>) -> Self {
        Self {
            answer_service,
            endpoint: endpoint.into(),
        }
    }

    pub fn ask_use_case(&self) -> AskQuestionUseCase {
        AskQuestionUseCase::new(Arc::clone(&self.answer_service))
    }

    pub fn chat_session(&self) -> ChatSessionUseCase {
        ChatSessionUseCase::new(Arc::clone(&self.answer_service))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
