use std::sync::Arc;

use teloxide::{payloads::SendMessageSetters, prelude::*, types::ParseMode};

use crate::bot::{
    dispatcher::{AdminChat, HandlerResult, UserDialogue},
    texts::{MessageKey, TextStore},
};

use super::utils::{current_language, display_name, language_keyboard, send_html};

/* Private chat handlers for users.
 * No user records are kept, so a returning user cannot be told apart from a new one
 * and the admin only ever receives the started notice, never restarted or stopped.
 */

/* Start command.
 * Greets the user with the language keyboard, or straight with the main menu
 * when only one language is supported. The admin is told that a user started the bot.
 */
pub async fn action_start(
    bot: Bot,
    dialogue: UserDialogue,
    msg: Message,
    texts: Arc<TextStore>,
    admin: AdminChat,
) -> HandlerResult {
    let language = current_language(&dialogue, msg.from(), &texts).await?;
    let full_name = display_name(msg.from());

    if texts.languages().is_multilingual() {
        let greeting = texts.render(
            &language,
            MessageKey::SelectLanguage,
            &[("full_name", full_name.as_str())],
        )?;
        bot.send_message(msg.chat.id, greeting)
            .parse_mode(ParseMode::Html)
            .reply_markup(language_keyboard(&texts))
            .await?;
    } else {
        send_html(
            &bot,
            msg.chat.id,
            texts.get(&language, MessageKey::MainMenu)?.to_string(),
        )
        .await?;
    }

    let default_language = texts.languages().default_code();
    let notice = texts.render(
        default_language,
        MessageKey::UserStartedBot,
        &[("name", full_name.as_str())],
    )?;
    if let Err(err) = send_html(&bot, admin.0, notice).await {
        log::warn!("Start notice for chat {} not delivered to admin: {}", msg.chat.id.0, err);
    }

    Ok(())
}

/* Any other private message.
 * Forwards it to the admin chat and confirms to the user whether that worked.
 */
pub async fn action_forward_message(
    bot: Bot,
    dialogue: UserDialogue,
    msg: Message,
    texts: Arc<TextStore>,
    admin: AdminChat,
) -> HandlerResult {
    let language = current_language(&dialogue, msg.from(), &texts).await?;

    let key = match bot.forward_message(admin.0, msg.chat.id, msg.id).await {
        Ok(_) => MessageKey::MessageSent,
        Err(err) => {
            log::error!("Message {} from chat {} not forwarded: {}", msg.id, msg.chat.id.0, err);
            MessageKey::MessageNotSent
        }
    };

    bot.send_message(msg.chat.id, texts.get(&language, key)?)
        .parse_mode(ParseMode::Html)
        .reply_to_message_id(msg.id)
        .await?;
    Ok(())
}

/* Edited private message.
 * Edits are not propagated, the user is asked to send a new message instead.
 */
pub async fn action_edited_message(
    bot: Bot,
    dialogue: UserDialogue,
    msg: Message,
    texts: Arc<TextStore>,
) -> HandlerResult {
    let language = current_language(&dialogue, msg.from(), &texts).await?;

    bot.send_message(msg.chat.id, texts.get(&language, MessageKey::MessageEdited)?)
        .parse_mode(ParseMode::Html)
        .reply_to_message_id(msg.id)
        .await?;
    Ok(())
}
