//! Pattern rules.

use regex::Regex;

use crate::error::FormatError;

/// A compiled pattern paired with an optional custom failure message.
#[derive(Debug, Clone)]
pub struct RegexDefinition {
    pattern: Regex,
    message: Option<String>,
}

impl RegexDefinition {
    /// Compile `pattern` into a rule.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: &str, message: Option<String>) -> Result<Self, FormatError> {
        let compiled = Regex::new(pattern).map_err(|source| FormatError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: compiled,
            message,
        })
    }

    /// Whether the pattern matches anywhere in `subject`.
    #[must_use]
    pub fn is_match(&self, subject: &str) -> bool {
        self.pattern.is_match(subject)
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The custom message, or `default` applied to the pattern text.
    #[must_use]
    pub fn message_or_else(&self, default: impl FnOnce(&str) -> String) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => default(self.pattern()),
        }
    }
}
