//! Brazilian state (UF) rule.

use super::delegate_string_rule;
use crate::error::RuleError;
use crate::tables;
use crate::traits::ValidationRule;
use serde::{Deserialize, Serialize};

/// Validates a two-letter state code (`SP`, `RJ`, `DF`, ...).
///
/// Case and surrounding whitespace are ignored. Blank values are treated as
/// absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateRule {
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StateRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn fail(&self, reason: &'static str) -> RuleError {
        super::reject(
            "state",
            self.message.as_ref(),
            || "Estado deve ser um código UF válido do Brasil".to_string(),
            reason,
        )
    }
}

impl ValidationRule<str> for StateRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        let code = super::trim_ascii_blanks(value);
        if code.is_empty() {
            return Ok(());
        }

        let code = code.to_uppercase();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(self.fail("bad_format"));
        }

        if !tables::state_codes().contains(code.as_str()) {
            return Err(self.fail("unknown_state"));
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "state"
    }
}

delegate_string_rule!(StateRule, "state");
