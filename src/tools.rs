pub mod shell;
pub mod weather;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::errors::{AgentError, AgentResult};

pub use shell::{CommandPolicy, ShellTool};
pub use weather::WeatherTool;

/// A host-side function the model can ask for by name.
///
/// Tools take a single string input and produce a single string output.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model uses in the `tool` field of an action step
    fn name(&self) -> &str;

    /// Call signature and short description, listed in the system prompt
    fn description(&self) -> String;

    async fn call(&self, input: &str) -> AgentResult<String>;
}

/// The set of tools an agent may dispatch to. Built once, then read-only.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `getWeatherInfo` and an unrestricted `executeCommand`
    pub fn with_defaults() -> Self {
        Self::with_command_policy(CommandPolicy::default())
    }

    pub fn with_command_policy(policy: CommandPolicy) -> Self {
        Self {
            tools: vec![
                Box::new(WeatherTool),
                Box::new(ShellTool::new(policy)),
            ],
        }
    }

    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<()> {
        if self.get(tool.name()).is_some() {
            return Err(anyhow!("Duplicate tool name: {}", tool.name()));
        }
        self.tools.push(tool);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(|v| &**v)
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.tools.iter().map(|tool| tool.description()).collect()
    }

    /// Dispatch a call to the named tool
    pub async fn call(&self, name: &str, input: &str) -> AgentResult<String> {
        let tool = self
            .get(name)
            .ok_or_else(|| AgentError::ToolNotFound(name.to_string()))?;
        debug!(tool = name, input, "calling tool");
        tool.call(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> String {
            "echo(text: string): string".to_string()
        }

        async fn call(&self, input: &str) -> AgentResult<String> {
            Ok(input.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let registry = ToolRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["getWeatherInfo", "executeCommand"]);
        assert!(registry.get("getWeatherInfo").is_some());
        assert!(registry.get("getweatherinfo").is_none());
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool)).unwrap();
        let err = registry.register(Box::new(EchoTool)).unwrap_err();
        assert!(err.to_string().contains("Duplicate tool name"));
        assert_eq!(registry.names(), vec!["echo"]);
    }

    #[tokio::test]
    async fn test_call_dispatches_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool)).unwrap();

        assert_eq!(registry.call("echo", "ping").await.unwrap(), "ping");
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let registry = ToolRegistry::with_defaults();
        match registry.call("rm_rf", "/").await {
            Err(AgentError::ToolNotFound(name)) => assert_eq!(name, "rm_rf"),
            other => panic!("expected ToolNotFound, got {other:?}"),
        }
    }
}
