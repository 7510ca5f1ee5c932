// bot/mod.rs

// Exported functions
pub use self::commands::{build_command_lists, setup, teardown};
pub use self::dispatcher::run_dispatcher;
pub use self::languages::resolve_language;

// Exported structs and types
pub use self::commands::{CommandLists, CommandsClient, RegistrarError};
pub use self::dispatcher::{AdminChat, BotError, Command, HandlerResult, State, UserDialogue};
pub use self::languages::{LanguageError, Languages, BUILTIN_LANGUAGES, DEFAULT_LANGUAGE};
pub use self::texts::{MessageKey, TextError, TextStore};

// Declare submodules
mod commands;
mod dispatcher;
mod handler;
mod languages;
pub mod texts;
