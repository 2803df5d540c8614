//! Hand-off between spawned request futures and the chat widget.
//!
//! A future posts `RequestStarted` / `ReplyReceived` as it runs; the UI
//! drains the queue once per frame. Single-threaded: the browser has one.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use exportmate_types::{api::AgentResponse, event::AgentEvent, Result};

/// Clones share one queue.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<AgentEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_started(&self, request_id: u64) {
        self.push(AgentEvent::RequestStarted { request_id });
    }

    pub fn reply_received(&self, request_id: u64, reply: Result<AgentResponse>) {
        self.push(AgentEvent::ReplyReceived { request_id, reply });
    }

    /// Everything posted since the last drain, oldest first.
    pub fn drain(&self) -> Vec<AgentEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    fn push(&self, event: AgentEvent) {
        self.queue.borrow_mut().push_back(event);
    }
}
