use jarvis::models::message::Message;

use crate::agents::agent::Agent;
use crate::prompt::{InputType, Prompt};

pub mod state;

use state::ChatState;

pub struct Session<'a> {
    agent: Box<dyn Agent + 'a>,
    prompt: Box<dyn Prompt + 'a>,
    state: ChatState,
}

impl<'a> Session<'a> {
    pub fn new(agent: Box<dyn Agent + 'a>, prompt: Box<dyn Prompt + 'a>) -> Self {
        Session {
            agent,
            prompt,
            state: ChatState::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.state.messages()
    }

    pub async fn start(&mut self) -> anyhow::Result<()> {
        self.prompt.jarvis_ready();

        loop {
            let input = self.prompt.get_input()?;
            match input.input_type {
                InputType::Message => {
                    if let Some(content) = &input.content {
                        self.submit(content).await;
                    }
                }
                InputType::Exit => break,
                InputType::AskAgain => continue,
            }
        }

        self.prompt.close();
        Ok(())
    }

    pub async fn headless_start(&mut self, initial_message: &str) -> anyhow::Result<()> {
        self.submit(initial_message).await;
        self.prompt.close();
        Ok(())
    }

    /// Run one turn, returning the assistant message it produced.
    ///
    /// Nothing happens for blank input or while another turn is in flight.
    pub async fn submit(&mut self, input: &str) -> Option<Message> {
        let text = self.state.begin(input)?;

        self.prompt.show_busy();
        let result = self.agent.process_user_input(&text).await;
        self.prompt.hide_busy();

        let reply = self.state.finish(result).clone();
        self.prompt.render(&reply);
        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::mock_agent::MockAgent;
    use crate::prompt::Input;
    use anyhow::Result;
    use jarvis::errors::ProcessingError;
    use jarvis::models::role::Role;
    use state::APOLOGY;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct MockPrompt {
        inputs: VecDeque<Input>,
        rendered: Vec<Message>,
        busy_events: Vec<bool>,
        closed: std::cell::Cell<bool>,
    }

    impl MockPrompt {
        fn with_inputs(inputs: Vec<Input>) -> Self {
            Self {
                inputs: inputs.into(),
                ..Default::default()
            }
        }
    }

    impl Prompt for MockPrompt {
        fn render(&mut self, message: &Message) {
            self.rendered.push(message.clone());
        }

        fn get_input(&mut self) -> Result<Input> {
            Ok(self.inputs.pop_front().unwrap_or(Input {
                input_type: InputType::Exit,
                content: None,
            }))
        }

        fn show_busy(&mut self) {
            self.busy_events.push(true);
        }

        fn hide_busy(&mut self) {
            self.busy_events.push(false);
        }

        fn close(&self) {
            self.closed.set(true);
        }

        fn jarvis_ready(&self) {}

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    fn message(text: &str) -> Input {
        Input {
            input_type: InputType::Message,
            content: Some(text.to_string()),
        }
    }

    fn mock_prompt<'a>(session: &'a Session<'_>) -> &'a MockPrompt {
        session.prompt.as_any().downcast_ref::<MockPrompt>().unwrap()
    }

    #[tokio::test]
    async fn test_submit_success() {
        let agent = MockAgent::new(vec![Ok("4".to_string())]);
        let mut session = Session::new(Box::new(agent), Box::new(MockPrompt::default()));

        let reply = session.submit("What's 2+2?").await.unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "4");

        let prompt = mock_prompt(&session);
        assert_eq!(prompt.busy_events, vec![true, false]);
        assert_eq!(prompt.rendered.len(), 1);
        assert_eq!(session.messages().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_failure_renders_apology() {
        let agent = MockAgent::new(vec![Err(ProcessingError)]);
        let mut session = Session::new(Box::new(agent), Box::new(MockPrompt::default()));

        let reply = session.submit("List my files").await.unwrap();
        assert_eq!(reply.content, APOLOGY);
        assert_eq!(mock_prompt(&session).rendered[0].content, APOLOGY);
        assert_eq!(session.messages()[0].content, "List my files");
    }

    #[tokio::test]
    async fn test_blank_submit_does_nothing() {
        let agent = MockAgent::new(vec![]);
        let mut session = Session::new(Box::new(agent), Box::new(MockPrompt::default()));

        assert!(session.submit("   ").await.is_none());
        assert!(session.messages().is_empty());
        assert!(mock_prompt(&session).busy_events.is_empty());
    }

    #[tokio::test]
    async fn test_start_runs_until_exit() -> Result<()> {
        let agent = MockAgent::new(vec![Ok("4".to_string()), Err(ProcessingError)]);
        let prompt = MockPrompt::with_inputs(vec![
            message("What's 2+2?"),
            Input {
                input_type: InputType::AskAgain,
                content: None,
            },
            message("List my files"),
            Input {
                input_type: InputType::Exit,
                content: None,
            },
            message("never sent"),
        ]);
        let mut session = Session::new(Box::new(agent), Box::new(prompt));

        session.start().await?;

        let transcript: Vec<&str> = session
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(transcript, vec!["What's 2+2?", "4", "List my files", APOLOGY]);
        assert!(mock_prompt(&session).closed.get());
        Ok(())
    }

    #[tokio::test]
    async fn test_headless_start() -> Result<()> {
        let agent = MockAgent::new(vec![Ok("file1.txt, file2.txt".to_string())]);
        let mut session = Session::new(Box::new(agent), Box::new(MockPrompt::default()));

        session.headless_start("List my files").await?;

        assert_eq!(session.messages()[1].content, "file1.txt, file2.txt");
        assert!(mock_prompt(&session).closed.get());
        Ok(())
    }

    #[tokio::test]
    async fn test_agent_receives_trimmed_text() {
        let agent = std::sync::Arc::new(MockAgent::new(vec![Ok("hi".to_string())]));
        let mut session = Session::new(
            Box::new(SharedAgent(agent.clone())),
            Box::new(MockPrompt::default()),
        );

        session.submit("  hello  ").await;
        assert_eq!(agent.inputs(), vec!["hello".to_string()]);
    }

    struct SharedAgent(std::sync::Arc<MockAgent>);

    #[async_trait::async_trait]
    impl Agent for SharedAgent {
        async fn process_user_input(&self, input: &str) -> jarvis::errors::AgentResult<String> {
            self.0.process_user_input(input).await
        }
    }
}
