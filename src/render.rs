use bat::PrettyPrinter;
use console::style;
use tracing::warn;

use crate::step::Step;

pub const THINK_MARKER: &str = "🧠";
pub const TOOL_MARKER: &str = "🔨";
pub const ANSWER_MARKER: &str = "🤖";

pub fn think_line(content: &str) -> String {
    format!("{}: {}", THINK_MARKER, style(content).dim())
}

pub fn tool_call_line(tool: &str, input: &str) -> String {
    format!(
        "{}: Tool call {}: {}",
        TOOL_MARKER,
        style(tool).cyan().bold(),
        input
    )
}

pub fn answer_line(content: &str) -> String {
    format!("{}: {}", ANSWER_MARKER, content)
}

/// Print the console lines for a step as the loop handles it.
pub fn print_step(step: &Step) {
    match step {
        Step::Think { content } => println!("{}", think_line(content)),
        Step::Action {
            content,
            tool,
            input,
        } => {
            println!("{}", tool_call_line(tool, input));
            println!("{}", answer_line(content));
        }
        Step::Observe { content } => println!("{}", style(content).dim()),
        Step::Output { content } => {
            println!("{}:", ANSWER_MARKER);
            render_markdown(content);
        }
    }
}

fn render_markdown(content: &str) {
    let printed = PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language("markdown")
        .print();

    if let Err(e) = printed {
        warn!(error = %e, "markdown rendering failed, printing plain text");
        println!("{}", content);
    }
}
