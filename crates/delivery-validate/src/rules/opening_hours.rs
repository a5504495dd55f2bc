//! Opening-hours rule.

use super::delegate_string_rule;
use crate::error::RuleError;
use crate::traits::ValidationRule;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn hours_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        super::builtin_regex(
            r"^([01][0-9]|2[0-3]):([0-5][0-9])-([01][0-9]|2[0-3]):([0-5][0-9])$",
        )
    })
}

/// Validates an opening-hours range written as `HH:MM-HH:MM` (24h clock).
///
/// The closing time must be strictly after the opening time on the same
/// day, so ranges crossing midnight (`22:00-02:00`) are rejected. Blank
/// values are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpeningHoursRule {
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OpeningHoursRule {
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
            "opening_hours",
            self.message.as_ref(),
            || "Horário de funcionamento deve estar no formato HH:MM-HH:MM".to_string(),
            reason,
        )
    }
}

/// Minutes since midnight for the hour/minute capture pair at `at`.
fn minutes(caps: &Captures<'_>, at: usize) -> Option<u32> {
    let hours: u32 = caps.get(at)?.as_str().parse().ok()?;
    let mins: u32 = caps.get(at + 1)?.as_str().parse().ok()?;
    Some(hours * 60 + mins)
}

impl ValidationRule<str> for OpeningHoursRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        if value.trim().is_empty() {
            return Ok(());
        }

        let Some(caps) = hours_regex().captures(value) else {
            return Err(self.fail("bad_format"));
        };

        match (minutes(&caps, 1), minutes(&caps, 3)) {
            (Some(open), Some(close)) if close > open => Ok(()),
            (Some(_), Some(_)) => Err(self.fail("not_increasing")),
            _ => Err(self.fail("bad_format")),
        }
    }

    fn rule_name(&self) -> &'static str {
        "opening_hours"
    }
}

delegate_string_rule!(OpeningHoursRule, "opening_hours");
