use teloxide::{
    payloads::SendMessageSetters,
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode, User},
};

use crate::bot::{
    dispatcher::{HandlerResult, State, UserDialogue},
    texts::TextStore,
};

/* Common utilites for handlers. */

// Make a keyboard, button menu. Options are (label, callback data) pairs.
pub fn make_keyboard(options: Vec<(&str, &str)>, columns: Option<usize>) -> InlineKeyboardMarkup {
    let mut keyboard: Vec<Vec<InlineKeyboardButton>> = Vec::new();
    if let Some(col) = columns {
        for chunk in options.chunks(col.max(1)) {
            let mut row: Vec<InlineKeyboardButton> = Vec::new();
            for (label, data) in chunk {
                row.push(InlineKeyboardButton::callback(
                    label.to_string(),
                    data.to_string(),
                ));
            }
            keyboard.push(row);
        }
    } else {
        for (label, data) in options {
            keyboard.push(vec![InlineKeyboardButton::callback(label, data)]);
        }
    }

    InlineKeyboardMarkup::new(keyboard)
}

// Keyboard listing every supported language, two per row.
pub fn language_keyboard(texts: &TextStore) -> InlineKeyboardMarkup {
    let options: Vec<(&str, &str)> = texts
        .languages()
        .entries()
        .map(|(code, label)| (label, code))
        .collect();
    make_keyboard(options, Some(2))
}

/* Picks the language to answer a user in.
 * A language chosen on the keyboard wins over the one reported by the user's app.
 * Either is resolved against the supported set.
 */
pub fn user_language(state: Option<&State>, app_language: Option<&str>, texts: &TextStore) -> String {
    let requested = match state {
        Some(State::Chosen { language }) => language.as_str(),
        _ => app_language.unwrap_or_default(),
    };
    texts.language(requested).to_string()
}

pub async fn current_language(
    dialogue: &UserDialogue,
    user: Option<&User>,
    texts: &TextStore,
) -> Result<String, crate::bot::BotError> {
    let state = dialogue.get().await?;
    let app_language = user.and_then(|user| user.language_code.as_deref());
    Ok(user_language(state.as_ref(), app_language, texts))
}

// Display name of a user, safe to embed in an HTML template.
pub fn display_name(user: Option<&User>) -> String {
    match user {
        Some(user) => teloxide::utils::html::escape(&user.full_name()),
        None => String::new(),
    }
}

// Sends an HTML formatted message to a chat.
pub async fn send_html(bot: &Bot, chat_id: ChatId, text: String) -> HandlerResult {
    bot.send_message(chat_id, text)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{language_keyboard, make_keyboard, user_language};
    use crate::bot::{dispatcher::State, languages::Languages, texts::TextStore};

    #[test]
    fn test_make_keyboard_columns() {
        let keyboard = make_keyboard(vec![("A", "a"), ("B", "b"), ("C", "c")], Some(2));
        let rows: Vec<usize> = keyboard.inline_keyboard.iter().map(|row| row.len()).collect();
        assert_eq!(rows, vec![2, 1]);

        let keyboard = make_keyboard(vec![("A", "a"), ("B", "b")], None);
        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert_eq!(keyboard.inline_keyboard[1][0].text, "B");
    }

    #[test]
    fn test_language_keyboard() {
        let texts = TextStore::new(Languages::builtin());
        let keyboard = language_keyboard(&texts);
        let labels: Vec<&str> = keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .map(|button| button.text.as_str())
            .collect();
        assert_eq!(labels, vec!["🇬🇧 English", "🇪🇸 Español", "🇮🇳 हिन्दी"]);
    }

    #[test]
    fn test_user_language() {
        let texts = TextStore::new(Languages::from_codes(&["en", "es"]).unwrap());
        let chosen = State::Chosen {
            language: "es".to_string(),
        };

        assert_eq!(user_language(Some(&chosen), Some("en"), &texts), "es");
        assert_eq!(user_language(Some(&State::Start), Some("es"), &texts), "es");
        assert_eq!(user_language(None, Some("hi"), &texts), "en");
        assert_eq!(user_language(None, None, &texts), "en");
    }
}
