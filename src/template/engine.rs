//! Placeholder substitution engine.
//!
//! # Syntax
//!
//! - `{{NAME}}` - Substitutes the value of variable `NAME`
//! - `{{ NAME }}` - Whitespace inside the braces is ignored
//! - Single braces are literal text, so YAML flow mappings like
//!   `{ address: 0.0.0.0 }` and `{}` pass through untouched
//!
//! Names must start with an ASCII letter or `_` and continue with ASCII
//! letters, digits, or `_`. Lookups are case-sensitive.
//!
//! # Error Handling
//!
//! By default undefined variables are an error rather than silently rendering
//! as empty strings. [`MissingPolicy::Empty`] opts into the lenient behavior.

use std::collections::HashMap;
use std::fmt;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// What to do when a placeholder has no value in the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Fail with [`TemplateError::UndefinedVariable`] (default).
    #[default]
    Fail,
    /// Render the placeholder as an empty string.
    Empty,
}

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the opening `{{`.
        position: usize,
    },
    /// A `{{` was found without a matching `}}`.
    UnclosedPlaceholder {
        /// Byte offset of the unmatched `{{`.
        position: usize,
    },
    /// A placeholder with no name (e.g., `{{}}`).
    EmptyPlaceholder {
        /// Byte offset of the empty placeholder.
        position: usize,
    },
    /// A placeholder whose name contains characters outside `[A-Za-z0-9_]`.
    InvalidName {
        /// The offending name, trimmed.
        name: String,
        /// Byte offset of the opening `{{`.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnclosedPlaceholder { position } => {
                write!(f, "unclosed '{{{{' at position {} in template", position)
            }
            TemplateError::EmptyPlaceholder { position } => {
                write!(
                    f,
                    "empty placeholder '{{{{}}}}' at position {} in template",
                    position
                )
            }
            TemplateError::InvalidName { name, position } => {
                write!(
                    f,
                    "invalid placeholder name '{}' at position {} in template",
                    name, position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Placeholder { name: &'a str, position: usize },
}

fn tokenize(template: &str) -> Result<Vec<Token<'_>>, TemplateError> {
    let mut tokens = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find(OPEN) {
        if start > 0 {
            tokens.push(Token::Literal(&rest[..start]));
        }

        let position = offset + start;
        let body = &rest[start + OPEN.len()..];
        let end = body
            .find(CLOSE)
            .ok_or(TemplateError::UnclosedPlaceholder { position })?;

        let name = body[..end].trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyPlaceholder { position });
        }
        if !is_valid_name(name) {
            return Err(TemplateError::InvalidName {
                name: name.to_string(),
                position,
            });
        }
        tokens.push(Token::Placeholder { name, position });

        let consumed = start + OPEN.len() + end + CLOSE.len();
        rest = &rest[consumed..];
        offset += consumed;
    }

    if !rest.is_empty() {
        tokens.push(Token::Literal(rest));
    }

    Ok(tokens)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Render a template string by substituting `{{NAME}}` placeholders.
///
/// Literal text is copied through unchanged. Variables in `variables` that
/// the template never references are ignored.
///
/// # Errors
///
/// Returns a [`TemplateError`] when the template is malformed, or when a
/// placeholder is undefined and `policy` is [`MissingPolicy::Fail`].
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
    policy: MissingPolicy,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    for token in tokenize(template)? {
        match token {
            Token::Literal(text) => result.push_str(text),
            Token::Placeholder { name, position } => match variables.get(name) {
                Some(value) => result.push_str(value),
                None => match policy {
                    MissingPolicy::Fail => {
                        return Err(TemplateError::UndefinedVariable {
                            name: name.to_string(),
                            position,
                        });
                    }
                    MissingPolicy::Empty => {}
                },
            },
        }
    }

    Ok(result)
}

/// List the distinct placeholder names in a template, in order of first use.
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut names: Vec<String> = Vec::new();
    for token in tokenize(template)? {
        if let Token::Placeholder { name, .. } = token
            && !names.iter().any(|n| n == name)
        {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
