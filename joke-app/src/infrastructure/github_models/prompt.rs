use super::types::Message;

pub const SYSTEM_PROMPT: &str = "You explain jokes clearly for beginners in 2–3 sentences. Identify the wordplay or reference and why it’s funny.";

/// The joke is passed through as-is.
pub fn build_explain_messages(joke: &str) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(joke)]
}
