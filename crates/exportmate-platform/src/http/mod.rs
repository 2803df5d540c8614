pub mod wire;

#[cfg(target_arch = "wasm32")]
pub mod agent_client;

#[cfg(target_arch = "wasm32")]
pub use agent_client::HttpAgentTransport;
