pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AnswerService, AskQuestionUseCase, ChatSessionUseCase};

pub use cli::Commands;

pub use connector::api::{Container, ContainerConfig, Router};
pub use connector::{HttpAnswerClient, MockAnswerService};

pub use domain::{
    AnswerPayload, ChatMessage, DomainError, EndpointConfig, QueryResult, Role, Transcript,
    DEFAULT_QUERY_URL, INTERNAL_ERROR_MESSAGE,
};
