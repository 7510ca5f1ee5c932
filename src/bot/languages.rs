use thiserror::Error;

/* Languages holds the set of languages the bot can talk in.
 * Each entry maps a language code to the label shown on the language keyboard.
 * The default language is "en" when present, otherwise the first declared entry.
 * Both the text store and the command registrar are built from the same set.
 */

pub const DEFAULT_LANGUAGE: &str = "en";

// Every language the bot ships text for. Deployments pick a subset of these.
pub const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("en", "🇬🇧 English"),
    ("es", "🇪🇸 Español"),
    ("hi", "🇮🇳 हिन्दी"),
];

#[derive(Error, Debug, PartialEq)]
pub enum LanguageError {
    #[error("At least one language must be supported")]
    Empty,
    #[error("Language {0} is declared more than once")]
    Duplicate(String),
    #[error("Language {0} is not available")]
    Unknown(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Languages {
    entries: Vec<(String, String)>,
    default: usize,
}

/* Resolves a requested language code against a supported set.
 * Returns the requested code if supported, the default otherwise. Never fails.
 */
pub fn resolve_language<'a, I>(requested: &'a str, supported: I, default: &'a str) -> &'a str
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    if supported
        .into_iter()
        .any(|code| code.as_ref() == requested)
    {
        requested
    } else {
        default
    }
}

impl Languages {
    pub fn new(entries: Vec<(String, String)>) -> Result<Languages, LanguageError> {
        if entries.is_empty() {
            return Err(LanguageError::Empty);
        }

        for (index, (code, _)) in entries.iter().enumerate() {
            if entries[..index].iter().any(|(other, _)| other == code) {
                return Err(LanguageError::Duplicate(code.clone()));
            }
        }

        let default = entries
            .iter()
            .position(|(code, _)| code == DEFAULT_LANGUAGE)
            .unwrap_or(0);

        Ok(Languages { entries, default })
    }

    // All built-in languages, in declaration order.
    pub fn builtin() -> Languages {
        Languages {
            entries: BUILTIN_LANGUAGES
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string()))
                .collect(),
            default: 0,
        }
    }

    /* Selects a subset of the built-in languages by code.
     * Order follows the given codes. Repeated codes are ignored after the first.
     */
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Languages, LanguageError> {
        let mut entries: Vec<(String, String)> = Vec::new();
        for code in codes {
            let code = code.as_ref().trim().to_lowercase();
            if code.is_empty() || entries.iter().any(|(existing, _)| *existing == code) {
                continue;
            }

            match BUILTIN_LANGUAGES.iter().find(|(builtin, _)| *builtin == code) {
                Some((_, label)) => entries.push((code, label.to_string())),
                None => return Err(LanguageError::Unknown(code)),
            }
        }

        Languages::new(entries)
    }

    pub fn default_code(&self) -> &str {
        &self.entries[self.default].0
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.entries.iter().any(|(supported, _)| supported == code)
    }

    pub fn label(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(supported, _)| supported == code)
            .map(|(_, label)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_multilingual(&self) -> bool {
        self.entries.len() > 1
    }

    // (code, label) pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, label)| (code.as_str(), label.as_str()))
    }

    // Codes with the default first, then the rest in declaration order.
    pub fn ordered(&self) -> Vec<&str> {
        let mut codes = vec![self.default_code()];
        codes.extend(
            self.entries
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != self.default)
                .map(|(_, (code, _))| code.as_str()),
        );
        codes
    }

    pub fn resolve<'a>(&'a self, requested: &'a str) -> &'a str {
        resolve_language(
            requested,
            self.entries.iter().map(|(code, _)| code),
            self.default_code(),
        )
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::{resolve_language, LanguageError, Languages};

    fn entries(codes: &[&str]) -> Vec<(String, String)> {
        codes
            .iter()
            .map(|code| (code.to_string(), code.to_uppercase()))
            .collect()
    }

    #[test]
    fn test_resolve_language() {
        assert_eq!(resolve_language("es", ["en", "es"], "en"), "es");
        assert_eq!(resolve_language("xx", ["en", "es"], "en"), "en");
        assert_eq!(resolve_language("", ["en"], "en"), "en");
    }

    #[test]
    fn test_default_prefers_english() {
        let languages = Languages::new(entries(&["es", "en", "hi"])).unwrap();
        assert_eq!(languages.default_code(), "en");
        assert_eq!(languages.ordered(), vec!["en", "es", "hi"]);
    }

    #[test]
    fn test_default_falls_back_to_first() {
        let languages = Languages::new(entries(&["es", "hi"])).unwrap();
        assert_eq!(languages.default_code(), "es");
        assert_eq!(languages.resolve("fr"), "es");
        assert_eq!(languages.resolve("hi"), "hi");
    }

    #[test]
    fn test_invalid_sets() {
        assert_eq!(Languages::new(vec![]), Err(LanguageError::Empty));
        assert_eq!(
            Languages::new(entries(&["en", "es", "en"])),
            Err(LanguageError::Duplicate("en".to_string()))
        );
    }

    #[test]
    fn test_from_codes() {
        let languages = Languages::from_codes(&["es", " EN ", "es"]).unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages.default_code(), "en");
        assert_eq!(languages.label("es"), Some("🇪🇸 Español"));
        assert!(languages.is_multilingual());

        assert_eq!(
            Languages::from_codes(&["en", "fr"]),
            Err(LanguageError::Unknown("fr".to_string()))
        );
        assert_eq!(Languages::from_codes(&[""]), Err(LanguageError::Empty));
    }

    #[test]
    fn test_builtin() {
        let languages = Languages::builtin();
        assert_eq!(languages.len(), 3);
        assert_eq!(languages.default_code(), "en");
        assert!(languages.is_supported("hi"));
        assert!(!languages.is_supported("fr"));
    }
}
