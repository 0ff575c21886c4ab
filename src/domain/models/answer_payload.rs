use serde::Serialize;
use serde_json::Value;

/// Body of a response from the answer endpoint, passed through unexamined.
///
/// JSON bodies are kept as JSON; anything else is kept as text. Serializes
/// to the bare value so a `QueryResult` renders as `{"code", "message"}`
/// with the body as-is in `message`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnswerPayload {
    Json(Value),
    Text(String),
}

impl AnswerPayload {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn json(value: Value) -> Self {
        Self::Json(value)
    }

    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Build a payload from a raw body, parsing it as JSON only when the
    /// response declares a JSON content type.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.is_empty() {
            return Ok(Self::empty());
        }

        let declares_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false);

        if declares_json {
            serde_json::from_slice(body).map(Self::Json)
        } else {
            Ok(Self::Text(String::from_utf8_lossy(body).into_owned()))
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Json(Value::Null) => true,
            Self::Json(_) => false,
        }
    }

    /// Text to show in the chat box.
    ///
    /// The query server answers `{"answer": ...}` on success and
    /// `{"error": ..., "message": ...}` when it fails internally; those
    /// fields are preferred over the raw JSON.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Json(Value::String(text)) => text.clone(),
            Self::Json(Value::Object(map)) => {
                for key in ["answer", "message"] {
                    if let Some(Value::String(text)) = map.get(key) {
                        return text.clone();
                    }
                }
                pretty(&Value::Object(map.clone()))
            }
            Self::Json(other) => pretty(other),
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

impl From<&str> for AnswerPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AnswerPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for AnswerPayload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}
