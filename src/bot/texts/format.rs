use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::TextError;

/* Placeholder handling for message templates.
 * A placeholder is a lowercase name in braces, e.g. {full_name}.
 */

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid"))
}

// Distinct placeholder names of a template, in order of first appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for captures in placeholder_regex().captures_iter(template) {
        if let Some(name) = captures.get(1) {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }
    }
    names
}

/* Fills every placeholder of a template with its named argument.
 * Arguments that the template does not use are ignored.
 * A placeholder without an argument is an error.
 */
pub fn render(template: &str, args: &[(&str, &str)]) -> Result<String, TextError> {
    if let Some(name) = placeholders(template)
        .into_iter()
        .find(|name| !args.iter().any(|(arg, _)| arg == name))
    {
        return Err(TextError::MissingArgument(name.to_string()));
    }

    let rendered = placeholder_regex().replace_all(template, |captures: &Captures| {
        args.iter()
            .find(|(arg, _)| *arg == &captures[1])
            .map(|(_, value)| value.to_string())
            .unwrap_or_default()
    });

    Ok(rendered.into_owned())
}

#[cfg(test)]
mod tests {
    use super::{placeholders, render};
    use crate::bot::texts::TextError;

    #[test]
    fn test_placeholders() {
        assert_eq!(
            placeholders("{id} and {full_name}, again {id}"),
            vec!["id", "full_name"]
        );
        assert!(placeholders("<b>Message sent!</b>").is_empty());
    }

    #[test]
    fn test_render() {
        let rendered = render(
            "<b>User {name} started the bot!</b>",
            &[("name", "Alice"), ("unused", "x")],
        );
        assert_eq!(rendered, Ok("<b>User Alice started the bot!</b>".to_string()));
    }

    #[test]
    fn test_render_missing_argument() {
        assert_eq!(
            render("{id}: {full_name}", &[("id", "42")]),
            Err(TextError::MissingArgument("full_name".to_string()))
        );
    }
}
