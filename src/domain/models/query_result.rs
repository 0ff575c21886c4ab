use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::AnswerPayload;

/// Message returned to the chat box whenever the exchange itself fails.
pub const INTERNAL_ERROR_MESSAGE: &str = "Sorry, internal server error";

pub const STATUS_OK: u16 = 200;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Normalized outcome of one query round-trip.
///
/// Every call produces exactly one of these; there is no "no result" case.
/// Serializes as `{"code": <status>, "message": <payload>}`.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// The endpoint answered with status 200.
    Success { body: AnswerPayload },
    /// The exchange failed before a usable response arrived.
    ServerError { message: String },
    /// The endpoint answered, but with a status other than 200.
    UnexpectedStatus { code: u16, body: AnswerPayload },
}

impl QueryResult {
    pub fn success(body: impl Into<AnswerPayload>) -> Self {
        Self::Success { body: body.into() }
    }

    pub fn internal_error() -> Self {
        Self::ServerError {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn unexpected_status(code: u16, body: impl Into<AnswerPayload>) -> Self {
        Self::UnexpectedStatus {
            code,
            body: body.into(),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::Success { .. } => STATUS_OK,
            Self::ServerError { .. } => STATUS_INTERNAL_ERROR,
            Self::UnexpectedStatus { code, .. } => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn body(&self) -> Option<&AnswerPayload> {
        match self {
            Self::Success { body } | Self::UnexpectedStatus { body, .. } => Some(body),
            Self::ServerError { .. } => None,
        }
    }

    /// Text the chat box shows for this outcome.
    pub fn display_text(&self) -> String {
        match self {
            Self::Success { body } => body.display_text(),
            Self::ServerError { message } => message.clone(),
            Self::UnexpectedStatus { code, .. } => {
                format!("Sorry, no answer was returned (status {code})")
            }
        }
    }
}

impl Serialize for QueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("QueryResult", 2)?;
        state.serialize_field("code", &self.code())?;
        match self {
            Self::Success { body } | Self::UnexpectedStatus { body, .. } => {
                state.serialize_field("message", body)?
            }
            Self::ServerError { message } => state.serialize_field("message", message)?,
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_with_code_200() {
        let result = QueryResult::success("hi there");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"code": 200, "message": "hi there"})
        );
    }

    #[test]
    fn internal_error_has_fixed_message() {
        let result = QueryResult::internal_error();
        assert_eq!(result.code(), 500);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"code": 500, "message": "Sorry, internal server error"})
        );
    }

    #[test]
    fn unexpected_status_keeps_its_code() {
        let result = QueryResult::unexpected_status(404, AnswerPayload::text("Not Found"));
        assert_eq!(result.code(), 404);
        assert!(!result.is_success());
        assert_eq!(result.display_text(), "Sorry, no answer was returned (status 404)");
    }

    #[test]
    fn success_display_uses_answer_field() {
        let result = QueryResult::success(json!({"answer": "Paris"}));
        assert_eq!(result.display_text(), "Paris");
        assert!(result.body().is_some());
    }
}
