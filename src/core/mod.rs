pub mod annotate;
pub mod api_key;
pub mod app;
pub mod config;
pub mod llm;
pub mod message;
pub mod paths;
pub mod prompts;
pub mod render;
pub mod settings;
