use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool execution failed: {0}")]
    ExecutionError(String),

    #[error("Command not allowed: {0}")]
    CommandDenied(String),

    #[error("Model response is not a valid step: {content}")]
    MalformedStep {
        content: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No final answer after {0} model turns")]
    TurnLimitExceeded(usize),
}

pub type AgentResult<T> = Result<T, AgentError>;
