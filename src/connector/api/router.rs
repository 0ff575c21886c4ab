use anyhow::Result;
use tokio::io::BufReader;

use crate::Commands;

use super::container::Container;
use super::controller::{AskController, ChatController};

pub struct Router<'a> {
    ask_controller: AskController<'a>,
    chat_controller: ChatController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            ask_controller: AskController::new(container),
            chat_controller: ChatController::new(container),
        }
    }

    /// Run a command and return what should be printed afterwards.
    /// Interactive chat writes to stdout itself and returns an empty string.
    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { query, json } => self.ask_controller.ask(query, json).await,
            Commands::Chat => {
                let stdin = BufReader::new(tokio::io::stdin());
                let mut stdout = tokio::io::stdout();
                self.chat_controller.run(stdin, &mut stdout).await?;
                Ok(String::new())
            }
        }
    }
}
