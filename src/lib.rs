pub mod client;
pub mod config;
pub mod conversion;
pub mod handlers;
pub mod llm;
pub mod routes;
pub mod state;
