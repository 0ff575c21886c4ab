use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a single question and print the answer
    Ask {
        query: String,

        /// Print the raw {"code", "message"} result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive chat session (type /help for commands)
    Chat,
}
