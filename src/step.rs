use serde::{Deserialize, Serialize};

use crate::errors::{AgentError, AgentResult};

/// One unit of model output in the think/act/observe protocol.
///
/// On the wire this is a flat JSON object tagged by `step`, e.g.
/// `{"step": "action", "content": "...", "tool": "getWeatherInfo", "input": "Paris"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "lowercase")]
pub enum Step {
    Think {
        #[serde(default)]
        content: String,
    },
    Action {
        #[serde(default)]
        content: String,
        tool: String,
        input: String,
    },
    Observe {
        #[serde(default)]
        content: String,
    },
    Output {
        #[serde(default)]
        content: String,
    },
}

impl Step {
    /// Parse the assistant's reply. Anything that is not exactly one step object fails.
    pub fn parse(content: &str) -> AgentResult<Self> {
        serde_json::from_str(content).map_err(|source| AgentError::MalformedStep {
            content: content.to_string(),
            source,
        })
    }

    pub fn observe<S: Into<String>>(content: S) -> Self {
        Step::Observe {
            content: content.into(),
        }
    }

    pub fn to_json(&self) -> String {
        // Only string fields, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}
