use jarvis::errors::AgentResult;
use jarvis::models::message::Message;

/// Shown in place of a reply whenever the agent fails, whatever the cause
pub const APOLOGY: &str = "Sorry, I encountered an error processing your request.";

/// The transcript of a chat plus the flag guarding the one in-flight request
#[derive(Debug, Default)]
pub struct ChatState {
    messages: Vec<Message>,
    busy: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Accept a submission, returning the text to send to the agent.
    ///
    /// Blank input and submissions made while a request is outstanding are
    /// dropped and leave the transcript untouched.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.busy {
            return None;
        }

        self.messages.push(Message::user(text));
        self.busy = true;
        Some(text.to_string())
    }

    /// Record the outcome of the outstanding request and release the busy flag
    pub fn finish(&mut self, result: AgentResult<String>) -> &Message {
        let content = result.unwrap_or_else(|_| APOLOGY.to_string());
        self.messages.push(Message::assistant(content));
        self.busy = false;
        &self.messages[self.messages.len() - 1]
    }
}
