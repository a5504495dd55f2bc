//! Monetary value rule.

use crate::error::{ConfigError, RuleError};
use crate::traits::ValidationRule;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

const CENTS_SCALE: u32 = 2;

/// Validates a price in reais.
///
/// Bounds are configured in cents (minor units) and compared against the
/// amount in reais. An amount is valid when it is non-negative, inside
/// `[min, max]` and carries at most two decimal places. Both the declared
/// scale and the half-up rounded value are checked, so `10.000` is
/// rejected even though it is numerically `10.00`.
///
/// ## Example
///
/// ```rust
/// use delivery_validate::rules::PriceRule;
/// use delivery_validate::ValidationRule;
/// use rust_decimal::Decimal;
///
/// let rule = PriceRule::default(); // R$ 0,01 ..= R$ 999.999,99
/// assert!(rule.is_valid(Some(&Decimal::new(1099, 2))));  // 10.99
/// assert!(!rule.is_valid(Some(&Decimal::new(10005, 3)))); // 10.005
/// assert!(rule.is_valid(None));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PriceRule {
    /// Minimum price in cents (inclusive)
    pub min_cents: i64,
    /// Maximum price in cents (inclusive)
    pub max_cents: i64,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Default for PriceRule {
    fn default() -> Self {
        Self {
            min_cents: 1,
            max_cents: 99_999_999,
            message: None,
        }
    }
}

impl PriceRule {
    pub fn new(min_cents: i64, max_cents: i64) -> Self {
        Self {
            min_cents,
            max_cents,
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Lower bound in reais.
    pub fn min(&self) -> Decimal {
        Decimal::new(self.min_cents, CENTS_SCALE)
    }

    /// Upper bound in reais.
    pub fn max(&self) -> Decimal {
        Decimal::new(self.max_cents, CENTS_SCALE)
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        if self.min_cents > self.max_cents {
            return Err(ConfigError::InvertedBounds {
                rule: "price",
                min: self.min().to_string(),
                max: self.max().to_string(),
            });
        }
        Ok(())
    }

    fn fail(&self, reason: &'static str) -> RuleError {
        let (min, max) = (self.min(), self.max());
        super::reject(
            "price",
            self.message.as_ref(),
            || {
                format!(
                    "Preço deve ser positivo, mínimo R$ {} e máximo R$ {}",
                    format_brl(min),
                    format_brl(max)
                )
            },
            reason,
        )
        .param("min", min.to_string())
        .param("max", max.to_string())
    }
}

impl ValidationRule<Decimal> for PriceRule {
    fn validate(&self, value: &Decimal) -> Result<(), RuleError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(self.fail("negative"));
        }

        if *value < self.min() || *value > self.max() {
            return Err(self.fail("out_of_range"));
        }

        if value.scale() > CENTS_SCALE {
            return Err(self.fail("too_many_decimals"));
        }

        let rounded =
            value.round_dp_with_strategy(CENTS_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded != *value {
            return Err(self.fail("sub_cent_fraction"));
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "price"
    }
}

/// Render an amount the Brazilian way: `999.999,99`.
fn format_brl(amount: Decimal) -> String {
    let fixed = amount.round_dp(CENTS_SCALE);
    let text = format!("{:.2}", fixed.abs());
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if fixed.is_sign_negative() && !fixed.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{cents}")
}
