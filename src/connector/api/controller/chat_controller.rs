use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use super::super::Container;

const PROMPT: &str = "you> ";
const HELP: &str = "\
Commands:
  /help     show this message
  /history  print the conversation so far
  /clear    forget the conversation
  /exit     leave (also /quit or Ctrl-D)";

/// Line-oriented chat box.
///
/// Reads one question per line, prints the reply and keeps the transcript in
/// memory. Blank lines are ignored.
pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut session = self.container.chat_session();
        let mut lines = input.lines();

        output
            .write_all(
                format!(
                    "Connected to {}. Type /help for commands.\n",
                    self.container.endpoint()
                )
                .as_bytes(),
            )
            .await?;

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                output.write_all(b"\n").await?;
                break;
            };

            match line.trim() {
                "" => continue,
                "/exit" | "/quit" => break,
                "/help" => {
                    output.write_all(format!("{HELP}\n").as_bytes()).await?;
                }
                "/history" => {
                    if session.transcript().is_empty() {
                        output.write_all(b"(no messages yet)\n").await?;
                    }
                    for message in session.transcript().messages() {
                        output
                            .write_all(format!("{}\n", message.display_line()).as_bytes())
                            .await?;
                    }
                }
                "/clear" => {
                    session.clear();
                    output.write_all(b"(conversation cleared)\n").await?;
                }
                _ => {
                    let (reply, result) = session.send(&line).await;
                    debug!("Chat reply with code {}", result.code());
                    output
                        .write_all(format!("{}\n", reply.display_line()).as_bytes())
                        .await?;
                }
            }
        }

        output.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::connector::MockAnswerService;

    async fn run_chat(service: Arc<MockAnswerService>, input: &str) -> String {
        let container = Container::with_service(service, "mock");
        let mut output = Vec::new();
        ChatController::new(&container)
            .run(input.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn answers_each_line_until_exit() {
        let service = Arc::new(MockAnswerService::new());
        let output = run_chat(service.clone(), "hello\n\n  \nbye\n/exit\nignored\n").await;

        assert!(output.contains("bot> You asked: hello"));
        assert!(output.contains("bot> You asked: bye"));
        assert_eq!(service.received(), vec!["hello".to_string(), "bye".to_string()]);
    }

    #[tokio::test]
    async fn question_is_sent_untrimmed() {
        let service = Arc::new(MockAnswerService::new());
        run_chat(service.clone(), "  spaced out  \n").await;
        assert_eq!(service.received(), vec!["  spaced out  ".to_string()]);
    }

    #[tokio::test]
    async fn history_lists_both_sides() {
        let service = Arc::new(MockAnswerService::new());
        let output = run_chat(service, "/history\nhello\n/history\n").await;

        assert!(output.contains("(no messages yet)"));
        assert!(output.contains("you> hello\nbot> You asked: hello"));
    }

    #[tokio::test]
    async fn clear_forgets_conversation() {
        let service = Arc::new(MockAnswerService::new());
        let output = run_chat(service, "hello\n/clear\n/history\n/quit\n").await;

        assert!(output.contains("(conversation cleared)"));
        assert!(output.ends_with("(no messages yet)\nyou> "));
    }
}
