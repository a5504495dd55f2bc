//! Category vocabulary rule.

use super::delegate_string_rule;
use crate::error::RuleError;
use crate::tables;
use crate::traits::ValidationRule;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which vocabulary a category is checked against.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Restaurant,
    Product,
    /// Either vocabulary
    #[default]
    General,
}

impl CategoryKind {
    fn table(self) -> &'static HashSet<&'static str> {
        match self {
            CategoryKind::Restaurant => tables::restaurant_categories(),
            CategoryKind::Product => tables::product_categories(),
            CategoryKind::General => tables::all_categories(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKind::Restaurant => "restaurant",
            CategoryKind::Product => "product",
            CategoryKind::General => "general",
        }
    }
}

/// Validates a category name against the restaurant or product vocabulary.
///
/// Matching is case-insensitive and tolerant of extra whitespace: the value
/// is normalized with [`title_case`] before lookup, so `"  fast   FOOD "`
/// matches `"Fast Food"`. Blank values are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CategoryRule {
    pub kind: CategoryKind,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CategoryRule {
    pub fn new(kind: CategoryKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    pub fn restaurant() -> Self {
        Self::new(CategoryKind::Restaurant)
    }

    pub fn product() -> Self {
        Self::new(CategoryKind::Product)
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Lowercase the value, then uppercase the first letter of every
/// whitespace-separated word. Words are re-joined with single spaces.
pub fn title_case(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl ValidationRule<str> for CategoryRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        if value.trim().is_empty() {
            return Ok(());
        }

        let normalized = title_case(value);
        if self.kind.table().contains(normalized.as_str()) {
            return Ok(());
        }

        Err(super::reject(
            "category",
            self.message.as_ref(),
            || "Categoria deve ser uma categoria válida".to_string(),
            "unknown_category",
        )
        .param("kind", self.kind.as_str())
        .param("normalized", normalized))
    }

    fn rule_name(&self) -> &'static str {
        "category"
    }
}

delegate_string_rule!(CategoryRule, "category");
