// Exported functions
pub use self::general::{action_edited_message, action_forward_message, action_start};
pub use self::language::{action_language, action_select_language};

// Submodules
mod general;
mod language;
mod utils;
