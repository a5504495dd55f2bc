//! Proper-name rule.

use super::delegate_string_rule;
use crate::error::{ConfigError, RuleError};
use crate::traits::ValidationRule;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| super::builtin_regex(r"^\p{L}[\p{L} \t\n\x0B\f\r'-]*\p{L}$|^\p{L}$"))
}

/// Validates a person's or business's proper name.
///
/// Letters (accented included), single spaces, hyphens and apostrophes are
/// allowed. The name must start and end with a letter, must not contain
/// digits, doubled separators (`"  "`, `--`, `''`) or leading/trailing
/// whitespace, and its length in characters must lie within the bounds.
///
/// Only the empty string counts as absent; a blank name is invalid.
///
/// ## Example
///
/// ```rust
/// use delivery_validate::rules::NameRule;
/// use delivery_validate::ValidationRule;
///
/// let rule = NameRule::default();
/// assert!(rule.validate("Maria D'Ávila").is_ok());
/// assert!(rule.validate("João--Pedro").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NameRule {
    pub min_length: usize,
    pub max_length: usize,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Default for NameRule {
    fn default() -> Self {
        Self {
            min_length: 2,
            max_length: 100,
            message: None,
        }
    }
}

impl NameRule {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        if self.min_length > self.max_length {
            return Err(ConfigError::InvertedBounds {
                rule: "name",
                min: self.min_length.to_string(),
                max: self.max_length.to_string(),
            });
        }
        Ok(())
    }

    fn fail(&self, reason: &'static str) -> RuleError {
        super::reject(
            "name",
            self.message.as_ref(),
            || "Nome deve conter apenas letras, acentos, hífens e apostrofes".to_string(),
            reason,
        )
        .param("min", self.min_length)
        .param("max", self.max_length)
    }
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '\''
}

impl ValidationRule<str> for NameRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        if value.is_empty() {
            return Ok(());
        }

        if value != super::trim_ascii_blanks(value) {
            return Err(self.fail("untrimmed"));
        }

        let len = value.chars().count();
        if len < self.min_length || len > self.max_length {
            return Err(self.fail("bad_length"));
        }

        if value.contains("  ") || value.contains("--") || value.contains("''") {
            return Err(self.fail("doubled_separator"));
        }

        if value.starts_with(is_separator) || value.ends_with(is_separator) {
            return Err(self.fail("separator_at_edge"));
        }

        if value.chars().any(|c| c.is_ascii_digit()) {
            return Err(self.fail("contains_digit"));
        }

        if !name_regex().is_match(value) {
            return Err(self.fail("bad_characters"));
        }

        if value
            .split_whitespace()
            .any(|word| word.chars().all(is_separator))
        {
            return Err(self.fail("empty_word"));
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "name"
    }
}

delegate_string_rule!(NameRule, "name");
