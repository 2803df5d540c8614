//! Adapters behind the `exportmate-core` ports.
//!
//! `llm` talks to the completion provider from the native server;
//! `http` posts the widget's history to `/api/agent` from the browser
//! (its wire helpers build everywhere).

#[cfg(not(target_arch = "wasm32"))]
pub mod llm;

pub mod http;

#[cfg(test)]
mod tests;
