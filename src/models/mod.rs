pub mod api;
pub mod dashboard;
pub mod ollama;
