pub mod message;
pub mod insights;
pub mod api;
pub mod event;
pub mod config;
pub mod error;


pub use error::AgentError;
pub type Result<T> = std::result::Result<T, AgentError>;
