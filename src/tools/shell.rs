use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use super::Tool;
use crate::errors::{AgentError, AgentResult};

const SHELL_METACHARACTERS: &[char] = &[';', '|', '&', '$', '`', '<', '>', '(', ')', '\n'];

/// Which commands `executeCommand` may run.
///
/// An empty allow-list permits everything. Otherwise the first word of the
/// command must be listed and the command may not chain or redirect through
/// shell metacharacters.
#[derive(Debug, Clone, Default)]
pub struct CommandPolicy {
    allowed: Vec<String>,
}

impl CommandPolicy {
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn allow_list<I, S>(programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: programs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_permissive(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn check(&self, command: &str) -> AgentResult<()> {
        if self.is_permissive() {
            return Ok(());
        }

        if command.contains(SHELL_METACHARACTERS) {
            return Err(AgentError::CommandDenied(command.to_string()));
        }

        let program = command.split_whitespace().next().unwrap_or_default();
        if self.allowed.iter().any(|allowed| allowed == program) {
            Ok(())
        } else {
            Err(AgentError::CommandDenied(command.to_string()))
        }
    }
}

/// Runs a command through the host shell and reports both output streams.
pub struct ShellTool {
    policy: CommandPolicy,
}

impl ShellTool {
    pub fn new(policy: CommandPolicy) -> Self {
        Self { policy }
    }
}

fn shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

pub async fn execute_command(command: &str) -> AgentResult<String> {
    let output = shell_command(command)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| AgentError::ExecutionError(format!("Failed to spawn '{}': {}", command, e)))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        return Err(AgentError::ExecutionError(format!(
            "Command failed: {} ({})\n{}",
            command, output.status, stderr
        )));
    }

    Ok(format!("stdout: {}\nstderr: {}", stdout, stderr))
}

#[async_trait]
impl Tool for ShellTool {
    fn name(&self) -> &str {
        "executeCommand"
    }

    fn description(&self) -> String {
        let mut description = "executeCommand(command: string): string Executes the given \
            command on the user's device and returns the stdout and stderr"
            .to_string();
        if !self.policy.is_permissive() {
            description.push_str(&format!(
                ". Only these programs are allowed: {}",
                self.policy.allowed.join(", ")
            ));
        }
        description
    }

    async fn call(&self, input: &str) -> AgentResult<String> {
        if let Err(e) = self.policy.check(input) {
            warn!(command = input, "command rejected by policy");
            return Err(e);
        }
        debug!(command = input, "executing command");
        execute_command(input).await
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_captures_stdout() {
        let result = execute_command("echo hello").await.unwrap();
        assert!(result.contains("stdout: hello\n"));
        assert!(result.ends_with("stderr: "));
    }

    #[tokio::test]
    async fn test_captures_stderr() {
        let result = execute_command("echo oops 1>&2").await.unwrap();
        assert_eq!(result, "stdout: \nstderr: oops\n");
    }

    #[tokio::test]
    async fn test_failing_command_is_an_error() {
        match execute_command("echo broken 1>&2; exit 3").await {
            Err(AgentError::ExecutionError(message)) => {
                assert!(message.starts_with("Command failed"));
                assert!(message.contains("broken"));
            }
            other => panic!("expected ExecutionError, got {other:?}"),
        }
    }

    #[test]
    fn test_policy_permissive_allows_anything() {
        let policy = CommandPolicy::permissive();
        assert!(policy.check("cat package.json | grep name").is_ok());
    }

    #[test]
    fn test_policy_allow_list() {
        let policy = CommandPolicy::allow_list(["cat", "ls"]);
        assert!(policy.check("cat package.json").is_ok());
        assert!(policy.check("ls -la").is_ok());
        assert!(matches!(
            policy.check("rm -rf /"),
            Err(AgentError::CommandDenied(_))
        ));
        assert!(matches!(
            policy.check("cat package.json; rm -rf /"),
            Err(AgentError::CommandDenied(_))
        ));
        assert!(matches!(policy.check(""), Err(AgentError::CommandDenied(_))));
    }

    #[tokio::test]
    async fn test_denied_command_is_not_run() {
        let tool = ShellTool::new(CommandPolicy::allow_list(["echo"]));
        assert!(tool.call("echo fine").await.is_ok());
        assert!(matches!(
            tool.call("touch should_not_exist").await,
            Err(AgentError::CommandDenied(_))
        ));
        assert!(tool.description().contains("Only these programs are allowed: echo"));
    }
}
