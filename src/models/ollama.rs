use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaChatMessage>,
    pub stream: bool,
}

impl OllamaChatRequest {
    #[must_use]
    pub fn user_message(message: &str, model: &str, stream: bool) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![OllamaChatMessage {
                role: "user".to_string(),
                content: message.to_string(),
            }],
            stream,
        }
    }
}
