use std::sync::Arc;

use teloxide::{
    payloads::{EditMessageTextSetters, SendMessageSetters},
    prelude::*,
    types::ParseMode,
};

use crate::bot::{
    dispatcher::{HandlerResult, State, UserDialogue},
    texts::{MessageKey, TextStore},
};

use super::utils::{current_language, language_keyboard};

/* Language command.
 * Shows the language keyboard again.
 */
pub async fn action_language(
    bot: Bot,
    dialogue: UserDialogue,
    msg: Message,
    texts: Arc<TextStore>,
) -> HandlerResult {
    let language = current_language(&dialogue, msg.from(), &texts).await?;

    bot.send_message(msg.chat.id, texts.get(&language, MessageKey::ChangeLanguage)?)
        .parse_mode(ParseMode::Html)
        .reply_markup(language_keyboard(&texts))
        .await?;
    Ok(())
}

/* Language keyboard.
 * Bot receives a callback query carrying the chosen language code.
 * The choice is kept in the dialogue and the keyboard message turns into the main menu.
 */
pub async fn action_select_language(
    bot: Bot,
    dialogue: UserDialogue,
    query: CallbackQuery,
    texts: Arc<TextStore>,
) -> HandlerResult {
    if let Some(button) = &query.data {
        bot.answer_callback_query(query.id.clone()).await?;

        if !texts.languages().is_supported(button) {
            log::error!(
                "Select Language - Invalid button for user {}: {}",
                query.from.id.0,
                button
            );
            return Ok(());
        }

        dialogue
            .update(State::Chosen {
                language: button.clone(),
            })
            .await?;

        if let Some(Message { id, chat, .. }) = query.message {
            bot.edit_message_text(chat.id, id, texts.get(button, MessageKey::MainMenu)?)
                .parse_mode(ParseMode::Html)
                .await?;
        }
    }
    Ok(())
}
