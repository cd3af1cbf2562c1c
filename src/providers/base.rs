use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use super::types::message::Message;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: Option<i32>,
    pub output_tokens: Option<i32>,
    pub total_tokens: Option<i32>,
}

impl Usage {
    pub fn new(
        input_tokens: Option<i32>,
        output_tokens: Option<i32>,
        total_tokens: Option<i32>,
    ) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}

fn add_tokens(lhs: Option<i32>, rhs: Option<i32>) -> Option<i32> {
    match (lhs, rhs) {
        (Some(a), Some(b)) => Some(a + b),
        (a, b) => a.or(b),
    }
}

impl AddAssign for Usage {
    fn add_assign(&mut self, other: Self) {
        self.input_tokens = add_tokens(self.input_tokens, other.input_tokens);
        self.output_tokens = add_tokens(self.output_tokens, other.output_tokens);
        self.total_tokens = add_tokens(self.total_tokens, other.total_tokens);
    }
}

/// Base trait for chat-completion providers
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send the whole conversation and return the assistant's reply.
    ///
    /// The first message is expected to be the system prompt; providers send
    /// the messages as given and do not prepend anything.
    async fn complete(&self, messages: &[Message]) -> Result<(Message, Usage)>;
}
