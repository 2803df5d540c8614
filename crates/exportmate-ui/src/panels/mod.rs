pub mod chat;
pub mod insights;
