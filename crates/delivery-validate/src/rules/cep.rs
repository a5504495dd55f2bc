//! Postal code (CEP) rule.

use super::delegate_string_rule;
use crate::error::RuleError;
use crate::traits::ValidationRule;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn cep_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| super::builtin_regex(r"^[0-9]{5}-?[0-9]{3}$"))
}

/// Validates a CEP written as `00000-000` or `00000000`.
///
/// The value is not trimmed; surrounding whitespace makes it invalid.
/// Empty and blank values are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CepRule {
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CepRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ValidationRule<str> for CepRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        if value.trim().is_empty() || cep_regex().is_match(value) {
            return Ok(());
        }

        Err(super::reject(
            "cep",
            self.message.as_ref(),
            || "CEP deve ter o formato 00000-000 ou 00000000".to_string(),
            "bad_format",
        ))
    }

    fn rule_name(&self) -> &'static str {
        "cep"
    }
}

delegate_string_rule!(CepRule, "cep");
