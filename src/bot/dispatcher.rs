use std::sync::Arc;

use teloxide::{
    dispatching::{
        dialogue,
        dialogue::{InMemStorage, InMemStorageError},
    },
    prelude::*,
    utils::command::BotCommands,
    RequestError,
};

use super::handler::{
    action_edited_message, action_forward_message, action_language, action_select_language,
    action_start,
};
use super::texts::{TextError, TextStore};

/* Dispatcher wires incoming updates to the handlers.
 * Only private chats with users are served. The admin chat receives forwarded
 * messages but is never answered as a user.
 * The dialogue state remembers the language a user picked on the keyboard.
 */

/* Types */
pub type UserDialogue = Dialogue<State, InMemStorage<State>>;
pub type HandlerResult = Result<(), BotError>;

#[derive(thiserror::Error, Debug)]
pub enum BotError {
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Text error: {0}")]
    TextError(TextError),
    #[error("Request error: {0}")]
    RequestError(RequestError),
}

impl From<RequestError> for BotError {
    fn from(request_error: RequestError) -> BotError {
        BotError::RequestError(request_error)
    }
}

impl From<InMemStorageError> for BotError {
    fn from(storage_error: InMemStorageError) -> BotError {
        BotError::StorageError(storage_error.to_string())
    }
}

impl From<TextError> for BotError {
    fn from(text_error: TextError) -> BotError {
        BotError::TextError(text_error)
    }
}

// Chat of the administrator, receives every user message.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdminChat(pub ChatId);

#[derive(Clone, Debug, Default, PartialEq)]
pub enum State {
    #[default]
    Start,
    Chosen {
        language: String,
    },
}

// Parsing only. Menu descriptions are localized by the command registrar.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    Start,
    Language,
}

/* Main Dispatch function */
pub async fn run_dispatcher(bot: Bot, texts: TextStore, admin_chat_id: i64) {
    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(dptree::case![Command::Start].endpoint(action_start))
        .branch(dptree::case![Command::Language].endpoint(action_language));

    let message_handler = Update::filter_message()
        .filter(|msg: Message, admin: AdminChat| msg.chat.is_private() && msg.chat.id != admin.0)
        .branch(command_handler)
        .branch(dptree::endpoint(action_forward_message));

    let edited_message_handler = Update::filter_edited_message()
        .filter(|msg: Message, admin: AdminChat| msg.chat.is_private() && msg.chat.id != admin.0)
        .endpoint(action_edited_message);

    let callback_query_handler = Update::filter_callback_query().endpoint(action_select_language);

    let schema = dialogue::enter::<Update, InMemStorage<State>, State, _>()
        .branch(message_handler)
        .branch(edited_message_handler)
        .branch(callback_query_handler);

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![
            InMemStorage::<State>::new(),
            Arc::new(texts),
            AdminChat(ChatId(admin_chat_id))
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

// Tests
#[cfg(test)]
mod tests {
    use teloxide::utils::command::BotCommands;

    use super::Command;

    #[test]
    fn test_parse_commands() {
        assert!(matches!(
            Command::parse("/start", "helpdesk_bot"),
            Ok(Command::Start)
        ));
        assert!(matches!(
            Command::parse("/language@helpdesk_bot", "helpdesk_bot"),
            Ok(Command::Language)
        ));
        assert!(Command::parse("/newsletter", "helpdesk_bot").is_err());
    }
}
