use clap::Subcommand;

mod terminal;

pub use terminal::run_terminal_chat;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the chat HTTP API (GET /user-profile, POST /chat)
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Chat with the gift assistant in the terminal
    Chat {
        /// Talk to a running `giftchat serve` (e.g. http://127.0.0.1:3000) instead of
        /// relaying in-process
        #[arg(long)]
        server: Option<String>,
    },

    /// Print the system prompt the next message would be sent with
    Prompt,

    /// Print the stored user profile
    Profile,
}
