pub mod app;
pub mod cli;
pub mod config;
pub mod intent;
pub mod llm;
pub mod normalize;
pub mod paths;
pub mod prompts;
pub mod quiz;
pub mod session;
pub mod settings;
pub mod subject;
pub mod todo;
