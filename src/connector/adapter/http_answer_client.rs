use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::application::AnswerService;
use crate::domain::{AnswerPayload, DomainError, EndpointConfig, QueryResult};

/// Request payload accepted by the query endpoint.
#[derive(serde::Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Error)]
enum ExchangeError {
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body")]
    Malformed(#[from] serde_json::Error),
}

/// [`AnswerService`] that POSTs `{"query": ...}` to the configured endpoint.
///
/// One request per call, no retries. A 200 response becomes
/// [`QueryResult::Success`] with the body untouched; any other status becomes
/// [`QueryResult::UnexpectedStatus`]. Transport failures (refused connection,
/// DNS, timeout, a JSON response that does not parse) are logged once at
/// ERROR level and reported as [`QueryResult::ServerError`].
///
/// No timeout is set unless [`EndpointConfig::with_timeout`] was used.
pub struct HttpAnswerClient {
    client: reqwest::Client,
    url: String,
}

impl HttpAnswerClient {
    pub fn new(config: &EndpointConfig) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DomainError::internal(format!("HttpAnswerClient: failed to build client: {e}")))?;

        Ok(Self {
            client,
            url: config.url().to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn exchange(&self, query: &str) -> Result<QueryResult, ExchangeError> {
        let response = self
            .client
            .post(&self.url)
            .json(&QueryRequest { query })
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await?;

        if status == StatusCode::OK {
            let body = AnswerPayload::from_body(content_type.as_deref(), &bytes)?;
            return Ok(QueryResult::success(body));
        }

        // Error pages often claim JSON without being JSON; keep them as text.
        let body = AnswerPayload::from_body(content_type.as_deref(), &bytes)
            .unwrap_or_else(|_| AnswerPayload::text(String::from_utf8_lossy(&bytes)));
        Ok(QueryResult::unexpected_status(status.as_u16(), body))
    }
}

#[async_trait]
impl AnswerService for HttpAnswerClient {
    async fn fetch_answer(&self, query: &str) -> QueryResult {
        match self.exchange(query).await {
            Ok(result) if result.is_success() => {
                debug!("HttpAnswerClient: answer received from {}", self.url);
                result
            }
            Ok(result) => {
                warn!(
                    "HttpAnswerClient: endpoint {} returned unexpected status {}",
                    self.url,
                    result.code()
                );
                result
            }
            Err(e) => {
                // `{:#}` keeps the whole source chain (e.g. "Connection refused").
                let e = anyhow::Error::from(e);
                error!("HttpAnswerClient: query to {} failed: {e:#}", self.url);
                QueryResult::internal_error()
            }
        }
    }
}
