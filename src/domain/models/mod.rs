mod conversation;
mod locale;
mod profile;
mod turn;

pub use conversation::*;
pub use locale::*;
pub use profile::*;
pub use turn::*;
