use crate::tools::ToolRegistry;

pub const DEFAULT_QUERY: &str = "What is inside my package.json file";

const SYSTEM_PROMPT: &str = r#"You are a helpful AI assistant who resolves user queries.
If a query needs a tool invocation, say which tool to call and with what input.
You work in START, THINK, ACTION, OBSERVE and OUTPUT modes.

In the START phase the user gives you a query.
Then you THINK about how to resolve the query, at least 3-4 times.
If a tool needs to be called, emit an ACTION step with the tool and its input.
After an ACTION, wait for the OBSERVE step carrying the tool's output.
Based on the OBSERVE from the previous step, either produce the OUTPUT or repeat the loop.

Rules:
- Always wait for the next step.
- Always output a single step and wait for the next step.
- Output must be strictly JSON.
- Only call tools listed under Available Tools.
- Strictly follow the output format.

Available Tools:
{tools}

Example:
START: What is the weather of Bengaluru?
THINK: The user is asking for the weather of Bengaluru
THINK: From the available tools, I must call getWeatherInfo with Bengaluru as input
ACTION: Call Tool getWeatherInfo(Bengaluru)
OBSERVE: 32 Degree C
THINK: The output of getWeatherInfo is 32 Degree C
OUTPUT: The weather of Bengaluru is 32 Degree C which is quite hot🥵

Output Example:
{ "role": "user", "content": "what is the weather of Bengaluru?" }
{ "step": "think", "content": "The user is asking for the weather of Bengaluru" }
{ "step": "think", "content": "From the available tools, I must call getWeatherInfo with Bengaluru as input" }
{ "step": "action", "content": "Call Tool getWeatherInfo", "tool": "getWeatherInfo", "input": "Bengaluru" }
{ "step": "observe", "content": "32 Degree C" }
{ "step": "think", "content": "The output of getWeatherInfo is 32 Degree C" }
{ "step": "output", "content": "The weather of Bengaluru is 32 Degree C which is quite hot🥵" }

Output Format:
{ "step": "string", "tool": "string", "input": "string", "content": "string" }
"#;

/// Render the protocol prompt with the registry's tools listed.
pub fn system_prompt(tools: &ToolRegistry) -> String {
    let listing = tools
        .descriptions()
        .iter()
        .map(|description| format!("- {}", description))
        .collect::<Vec<_>>()
        .join("\n");

    SYSTEM_PROMPT.replace("{tools}", &listing)
}
