//! Generic presence, length, range and pattern rules.
//!
//! These back the presence, size, bound and pattern constraints of the
//! request payloads. The domain rules live in their own modules.

use super::delegate_string_rule;
use crate::error::{ConfigError, RuleError};
use crate::traits::ValidationRule;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// String length validation rule.
///
/// Length is counted in characters, not bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LengthRule {
    /// Minimum length (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    /// Maximum length (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LengthRule {
    /// Create a length rule with min and max bounds.
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            message: None,
        }
    }

    /// Create a length rule with only a minimum.
    pub fn min(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
            message: None,
        }
    }

    /// Create a length rule with only a maximum.
    pub fn max(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(ConfigError::InvertedBounds {
                rule: "length",
                min: min.to_string(),
                max: max.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl ValidationRule<str> for LengthRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        let len = value.chars().count();

        if let Some(min) = self.min {
            if len < min {
                return Err(super::reject(
                    "length",
                    self.message.as_ref(),
                    || format!("Deve ter no mínimo {min} caracteres"),
                    "too_short",
                )
                .param("min", min)
                .param("max", self.max)
                .param("actual", len));
            }
        }

        if let Some(max) = self.max {
            if len > max {
                return Err(super::reject(
                    "length",
                    self.message.as_ref(),
                    || format!("Não pode ter mais de {max} caracteres"),
                    "too_long",
                )
                .param("min", self.min)
                .param("max", max)
                .param("actual", len));
            }
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "length"
    }
}

delegate_string_rule!(LengthRule, "length");

/// Numeric range validation rule.
///
/// Works for any ordered, displayable number: integers for quantities and
/// ids, `Decimal` for fees and prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeRule<T> {
    /// Minimum value (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<T>,
    /// Maximum value (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<T>,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> RangeRule<T> {
    /// Create a range rule with min and max bounds.
    pub fn new(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            message: None,
        }
    }

    /// Create a range rule with only a minimum.
    pub fn min(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
            message: None,
        }
    }

    /// Create a range rule with only a maximum.
    pub fn max(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: PartialOrd + std::fmt::Display> RangeRule<T> {
    pub fn check(&self) -> Result<(), ConfigError> {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) if min > max => Err(ConfigError::InvertedBounds {
                rule: "range",
                min: min.to_string(),
                max: max.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl<T> ValidationRule<T> for RangeRule<T>
where
    T: PartialOrd + std::fmt::Display + Copy + Send + Sync + std::fmt::Debug + Serialize,
{
    fn validate(&self, value: &T) -> Result<(), RuleError> {
        if let Some(ref min) = self.min {
            if value < min {
                return Err(super::reject(
                    "range",
                    self.message.as_ref(),
                    || format!("Valor deve ser no mínimo {min}"),
                    "below_min",
                )
                .param("min", *min)
                .param("max", self.max)
                .param("actual", *value));
            }
        }

        if let Some(ref max) = self.max {
            if value > max {
                return Err(super::reject(
                    "range",
                    self.message.as_ref(),
                    || format!("Valor deve ser no máximo {max}"),
                    "above_max",
                )
                .param("min", self.min)
                .param("max", *max)
                .param("actual", *value));
            }
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "range"
    }
}

/// Regex pattern validation rule.
///
/// The pattern must match the whole value; anchor it with `^...$`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegexRule {
    /// The regex pattern
    pub pattern: String,
    /// Compiled regex, `None` when the pattern does not compile
    #[serde(skip)]
    compiled: OnceLock<Option<Regex>>,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PartialEq for RegexRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.message == other.message
    }
}

impl RegexRule {
    /// Create a new regex rule.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            compiled: OnceLock::new(),
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        Regex::new(&self.pattern)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidPattern {
                pattern: self.pattern.clone(),
                reason: e.to_string(),
            })
    }

    fn regex(&self) -> Option<&Regex> {
        self.compiled
            .get_or_init(|| Regex::new(&self.pattern).ok())
            .as_ref()
    }
}

impl ValidationRule<str> for RegexRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        let Some(regex) = self.regex() else {
            return Err(RuleError::new(
                "regex",
                format!("Padrão de validação inválido: {}", self.pattern),
            ));
        };

        if regex.is_match(value) {
            Ok(())
        } else {
            Err(super::reject(
                "regex",
                self.message.as_ref(),
                || "Formato inválido".to_string(),
                "pattern_mismatch",
            )
            .param("pattern", self.pattern.clone()))
        }
    }

    fn rule_name(&self) -> &'static str {
        "regex"
    }
}

delegate_string_rule!(RegexRule, "regex");

/// Required (present and non-blank) validation rule.
///
/// The only rule that rejects absent values; every other rule leaves
/// presence to this one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RequiredRule {
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RequiredRule {
    /// Create a new required rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a required rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    fn missing(&self) -> RuleError {
        super::reject(
            "required",
            self.message.as_ref(),
            || "Campo obrigatório".to_string(),
            "missing",
        )
    }
}

impl ValidationRule<str> for RequiredRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        if !value.trim().is_empty() {
            Ok(())
        } else {
            Err(self.missing())
        }
    }

    fn rule_name(&self) -> &'static str {
        "required"
    }

    fn check_optional(&self, value: Option<&str>) -> Result<(), RuleError> {
        match value {
            Some(v) => self.validate(v),
            None => Err(self.missing()),
        }
    }
}

delegate_string_rule!(RequiredRule, "required");

impl<T> ValidationRule<Option<T>> for RequiredRule
where
    T: std::fmt::Debug + Send + Sync,
{
    fn validate(&self, value: &Option<T>) -> Result<(), RuleError> {
        if value.is_some() {
            Ok(())
        } else {
            Err(self.missing())
        }
    }

    fn rule_name(&self) -> &'static str {
        "required"
    }
}
