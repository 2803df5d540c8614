pub mod ports;
pub mod event_bus;
pub mod insights;
pub mod fallback;
pub mod handler;
pub mod controller;
