mod chat_session;
mod complete_chat;
mod load_profile;

pub use chat_session::*;
pub use complete_chat::*;
pub use load_profile::*;
