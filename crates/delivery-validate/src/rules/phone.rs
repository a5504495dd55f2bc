//! Brazilian phone number rule.

use super::delegate_string_rule;
use crate::error::RuleError;
use crate::tables;
use crate::traits::ValidationRule;
use regex::RegexSet;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Accepted layouts: formatted mobile, formatted landline, bare mobile,
/// bare landline, and international `+55`.
const PHONE_PATTERNS: &[&str] = &[
    r"^\([0-9]{2}\)[ \t\n\x0B\f\r]?9[0-9]{4}-[0-9]{4}$",
    r"^\([0-9]{2}\)[ \t\n\x0B\f\r]?[2-5][0-9]{3}-[0-9]{4}$",
    r"^[0-9]{2}9[0-9]{8}$",
    r"^[0-9]{2}[2-5][0-9]{7}$",
    r"^\+55[0-9]{2}9?[0-9]{8}$",
];

fn phone_patterns() -> &'static RegexSet {
    static SET: OnceLock<RegexSet> = OnceLock::new();
    SET.get_or_init(|| {
        RegexSet::new(PHONE_PATTERNS).expect("built-in validation pattern must compile")
    })
}

/// Validates a Brazilian phone number.
///
/// The trimmed value must match one of the accepted layouts and its area
/// code (DDD) must be a real one. For `+55` numbers the country code is
/// skipped before reading the DDD. Blank values are treated as absent.
///
/// ## Example
///
/// ```rust
/// use delivery_validate::rules::PhoneRule;
/// use delivery_validate::ValidationRule;
///
/// let rule = PhoneRule::new();
/// assert!(rule.validate("(11) 99999-9999").is_ok());
/// assert!(rule.validate("+5521987654321").is_ok());
/// assert!(rule.validate("(00) 99999-9999").is_err()); // no such DDD
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneRule {
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PhoneRule {
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
            "phone",
            self.message.as_ref(),
            || "Telefone deve ter um formato válido brasileiro".to_string(),
            reason,
        )
    }
}

/// The two-digit area code of an already format-checked number.
fn area_code(phone: &str) -> Option<String> {
    let digits = phone.strip_prefix("+55").unwrap_or(phone);
    let code: String = digits
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(2)
        .collect();
    (code.len() == 2).then_some(code)
}

impl ValidationRule<str> for PhoneRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        let phone = super::trim_ascii_blanks(value);
        if phone.is_empty() {
            return Ok(());
        }

        if !phone_patterns().is_match(phone) {
            return Err(self.fail("bad_format"));
        }

        match area_code(phone) {
            Some(ddd) if tables::area_codes().contains(ddd.as_str()) => Ok(()),
            Some(ddd) => Err(self.fail("unknown_area_code").param("ddd", ddd)),
            None => Err(self.fail("bad_format")),
        }
    }

    fn rule_name(&self) -> &'static str {
        "phone"
    }
}

delegate_string_rule!(PhoneRule, "phone");
