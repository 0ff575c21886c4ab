mod http_answer_client;
mod mock_answer_service;

pub use http_answer_client::*;
pub use mock_answer_service::*;
