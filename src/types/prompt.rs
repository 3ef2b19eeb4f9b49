/// Instruction preamble placed before the topic.
const PREAMBLE: &str = "You are a creative assistant. \
Brainstorm 5 unique and interesting ideas related to the following topic: ";

/// Trailing list-start token. Ending the prompt on "1." nudges the model
/// into continuing a numbered list.
pub const LIST_START: &str = "Ideas:\n1.";

/// Build the brainstorming prompt for `topic`.
///
/// The topic is interpolated verbatim. Nothing is escaped, so instructions
/// embedded in the topic reach the model unchanged.
pub fn build_prompt(topic: &str) -> String {
    format!("{PREAMBLE}{topic}\n\n{LIST_START}")
}
