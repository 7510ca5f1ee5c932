use std::fmt;

use thiserror::Error;

use super::languages::Languages;

// Exported functions
pub use self::format::{placeholders, render};

// Exported structs and types
pub use self::catalogue::{Catalogue, CATALOGUE};

// Submodules
mod catalogue;
mod format;

/* Texts is the bot's localized message store.
 * It resolves a requested language code to a supported one, falling back to the
 * default language, and looks up the template for a message key.
 * A key missing for a supported language fails loudly. It is never answered
 * with another language's copy.
 */

#[derive(Error, Debug, PartialEq)]
pub enum TextError {
    #[error("Message {key} is not available in language {language}")]
    MissingKey { language: String, key: MessageKey },
    #[error("No value given for placeholder {0}")]
    MissingArgument(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    SelectLanguage,
    ChangeLanguage,
    MainMenu,
    MessageSent,
    MessageEdited,
    UserStartedBot,
    UserRestartedBot,
    UserStoppedBot,
    UserBlocked,
    UserUnblocked,
    BlockedByUser,
    UserInformation,
    MessageNotSent,
    MessageSentToUser,
    SilentModeEnabled,
    SilentModeDisabled,
}

impl MessageKey {
    pub const ALL: [MessageKey; 16] = [
        MessageKey::SelectLanguage,
        MessageKey::ChangeLanguage,
        MessageKey::MainMenu,
        MessageKey::MessageSent,
        MessageKey::MessageEdited,
        MessageKey::UserStartedBot,
        MessageKey::UserRestartedBot,
        MessageKey::UserStoppedBot,
        MessageKey::UserBlocked,
        MessageKey::UserUnblocked,
        MessageKey::BlockedByUser,
        MessageKey::UserInformation,
        MessageKey::MessageNotSent,
        MessageKey::MessageSentToUser,
        MessageKey::SilentModeEnabled,
        MessageKey::SilentModeDisabled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::SelectLanguage => "select_language",
            MessageKey::ChangeLanguage => "change_language",
            MessageKey::MainMenu => "main_menu",
            MessageKey::MessageSent => "message_sent",
            MessageKey::MessageEdited => "message_edited",
            MessageKey::UserStartedBot => "user_started_bot",
            MessageKey::UserRestartedBot => "user_restarted_bot",
            MessageKey::UserStoppedBot => "user_stopped_bot",
            MessageKey::UserBlocked => "user_blocked",
            MessageKey::UserUnblocked => "user_unblocked",
            MessageKey::BlockedByUser => "blocked_by_user",
            MessageKey::UserInformation => "user_information",
            MessageKey::MessageNotSent => "message_not_sent",
            MessageKey::MessageSentToUser => "message_sent_to_user",
            MessageKey::SilentModeEnabled => "silent_mode_enabled",
            MessageKey::SilentModeDisabled => "silent_mode_disabled",
        }
    }

    // Placeholders the template for this key is allowed to use.
    pub fn placeholders(&self) -> &'static [&'static str] {
        match self {
            MessageKey::SelectLanguage => &["full_name"],
            MessageKey::UserStartedBot
            | MessageKey::UserRestartedBot
            | MessageKey::UserStoppedBot => &["name"],
            MessageKey::UserInformation => &[
                "id",
                "full_name",
                "state",
                "username",
                "is_banned",
                "created_at",
            ],
            _ => &[],
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct TextStore {
    languages: Languages,
    catalogue: Catalogue,
}

impl TextStore {
    pub fn new(languages: Languages) -> TextStore {
        TextStore::with_catalogue(languages, CATALOGUE)
    }

    pub fn with_catalogue(languages: Languages, catalogue: Catalogue) -> TextStore {
        TextStore {
            languages,
            catalogue,
        }
    }

    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    // Supported language for a request, the default if unsupported.
    pub fn language<'a>(&'a self, requested: &'a str) -> &'a str {
        self.languages.resolve(requested)
    }

    /* Retrieves the template for a key in the requested language.
     * Unsupported languages resolve to the default language.
     */
    pub fn get(&self, language_code: &str, key: MessageKey) -> Result<&'static str, TextError> {
        let language = self.language(language_code);
        self.catalogue
            .iter()
            .find(|(code, _)| *code == language)
            .and_then(|(_, texts)| texts.iter().find(|(name, _)| *name == key.as_str()))
            .map(|(_, template)| *template)
            .ok_or_else(|| TextError::MissingKey {
                language: language.to_string(),
                key,
            })
    }

    // Retrieves a template and fills in its placeholders.
    pub fn render(
        &self,
        language_code: &str,
        key: MessageKey,
        args: &[(&str, &str)],
    ) -> Result<String, TextError> {
        render(self.get(language_code, key)?, args)
    }

    // Every (language, key) pair of the supported set with no template.
    pub fn missing_keys(&self) -> Vec<(String, MessageKey)> {
        let mut missing = Vec::new();
        for (code, _) in self.languages.entries() {
            for key in MessageKey::ALL {
                if self.get(code, key).is_err() {
                    missing.push((code.to_string(), key));
                }
            }
        }
        missing
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::{placeholders, Catalogue, MessageKey, TextError, TextStore};
    use crate::bot::languages::Languages;

    fn store() -> TextStore {
        TextStore::new(Languages::builtin())
    }

    #[test]
    fn test_unsupported_language_falls_back() {
        let texts = store();
        assert_eq!(
            texts.get("xx", MessageKey::MessageSent),
            texts.get("en", MessageKey::MessageSent)
        );
        for key in MessageKey::ALL {
            assert_eq!(texts.get("zz", key), texts.get("en", key));
        }
    }

    #[test]
    fn test_supported_language_is_used() {
        let texts = store();
        assert_eq!(
            texts.get("es", MessageKey::MessageSent),
            Ok("<b>Mensaje enviado!</b> Espere una respuesta.")
        );
    }

    #[test]
    fn test_language_outside_configured_subset_falls_back() {
        let texts = TextStore::new(Languages::from_codes(&["en"]).unwrap());
        assert_eq!(
            texts.get("es", MessageKey::MainMenu),
            texts.get("en", MessageKey::MainMenu)
        );
        assert_eq!(texts.language("hi"), "en");
    }

    #[test]
    fn test_templates_use_declared_placeholders() {
        let texts = store();
        for (code, _) in texts.languages().entries() {
            for key in MessageKey::ALL {
                let template = texts.get(code, key).unwrap();
                assert!(!template.is_empty(), "{code}/{key} is empty");

                let mut found = placeholders(template);
                found.sort();
                let mut declared = key.placeholders().to_vec();
                declared.sort();
                assert_eq!(found, declared, "{code}/{key} placeholders differ");
            }
        }
    }

    #[test]
    fn test_catalogue_is_complete() {
        assert!(store().missing_keys().is_empty());
    }

    #[test]
    fn test_missing_key_fails_loudly() {
        const EN: &[(&str, &str)] = &[("message_sent", "Sent"), ("main_menu", "Menu")];
        const ES: &[(&str, &str)] = &[("message_sent", "Enviado")];
        const PARTIAL: Catalogue = &[("en", EN), ("es", ES)];
        let languages = Languages::from_codes(&["en", "es"]).unwrap();
        let texts = TextStore::with_catalogue(languages, PARTIAL);

        assert_eq!(texts.get("es", MessageKey::MessageSent), Ok("Enviado"));
        assert_eq!(
            texts.get("es", MessageKey::MainMenu),
            Err(TextError::MissingKey {
                language: "es".to_string(),
                key: MessageKey::MainMenu,
            })
        );
        assert_eq!(texts.missing_keys().len(), 14 + 15);
    }

    #[test]
    fn test_render() {
        let texts = store();
        assert_eq!(
            texts.render("en", MessageKey::UserStoppedBot, &[("name", "Bob")]),
            Ok("<b>User Bob stopped the bot!</b>".to_string())
        );
        assert_eq!(
            texts.render("xx", MessageKey::SelectLanguage, &[]),
            Err(TextError::MissingArgument("full_name".to_string()))
        );
    }
}
