use anyhow::Result;
use tracing::{debug, info, warn};

use crate::conversation::Conversation;
use crate::errors::AgentError;
use crate::prompt::system_prompt;
use crate::providers::base::{Provider, Usage};
use crate::providers::types::message::Message;
use crate::render;
use crate::step::Step;
use crate::tools::ToolRegistry;

/// Agent drives the think/act/observe loop between a provider and its tools
pub struct Agent {
    provider: Box<dyn Provider>,
    tools: ToolRegistry,
    max_turns: Option<usize>,
    echo: bool,
}

impl Agent {
    /// Create a new Agent with the specified provider and tools
    pub fn new(provider: Box<dyn Provider>, tools: ToolRegistry) -> Self {
        Self {
            provider,
            tools,
            max_turns: None,
            echo: true,
        }
    }

    /// Give up after this many model calls without a final answer
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Don't print steps to the console
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Seed a conversation with the system prompt and the user's query
    pub fn start(&self, query: &str) -> Conversation {
        let mut conversation = Conversation::new(system_prompt(&self.tools));
        conversation.push(Message::user(query));
        conversation
    }

    /// Ask a fresh question and return the final answer with the full history
    pub async fn reply(&self, query: &str) -> Result<(String, Conversation)> {
        let mut conversation = self.start(query);
        let answer = self.run(&mut conversation).await?;
        Ok((answer, conversation))
    }

    /// Poll the model one step at a time until it produces an output step.
    ///
    /// Every reply is appended before it is parsed, and every action is
    /// answered with an observe message before the next model call.
    pub async fn run(&self, conversation: &mut Conversation) -> Result<String> {
        let mut turns = 0;
        let mut total_usage = Usage::default();

        loop {
            if let Some(max_turns) = self.max_turns {
                if turns >= max_turns {
                    return Err(AgentError::TurnLimitExceeded(max_turns).into());
                }
            }
            turns += 1;

            let (reply, usage) = self.provider.complete(conversation.messages()).await?;
            debug!(turn = turns, ?usage, "model replied");
            total_usage += usage;

            let step = Step::parse(reply.text());
            conversation.push(reply);
            let step = step?;

            if self.echo {
                render::print_step(&step);
            }

            match step {
                Step::Think { .. } => {}
                Step::Action { tool, input, .. } => {
                    let result = self.tools.call(&tool, &input).await?;
                    debug!(tool = %tool, bytes = result.len(), "tool finished");
                    conversation.push(Message::assistant(Step::observe(result).to_json()));
                }
                Step::Observe { .. } => {
                    warn!(turn = turns, "model emitted an observe step, continuing");
                }
                Step::Output { content } => {
                    info!(turns, usage = ?total_usage, "agent finished");
                    return Ok(content);
                }
            }
        }
    }
}
