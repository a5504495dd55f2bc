//! Rating (score) rule.

use crate::error::{ConfigError, RuleError};
use crate::traits::ValidationRule;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

const RATING_SCALE: u32 = 1;

/// Validates a rating on a bounded scale with a fixed step.
///
/// With the defaults the accepted values are `1.0, 1.5, ..., 5.0`. A value
/// must lie in `[min, max]`, have at most one decimal place, and sit on the
/// grid `min + k * increment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RatingRule {
    pub min: Decimal,
    pub max: Decimal,
    pub increment: Decimal,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Default for RatingRule {
    fn default() -> Self {
        Self {
            min: Decimal::new(10, 1),
            max: Decimal::new(50, 1),
            increment: Decimal::new(5, 1),
            message: None,
        }
    }
}

impl RatingRule {
    pub fn new(min: Decimal, max: Decimal, increment: Decimal) -> Self {
        Self {
            min,
            max,
            increment,
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedBounds {
                rule: "rating",
                min: self.min.to_string(),
                max: self.max.to_string(),
            });
        }
        if self.increment <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveStep {
                rule: "rating",
                param: "increment",
                value: self.increment.to_string(),
            });
        }
        Ok(())
    }

    fn fail(&self, reason: &'static str) -> RuleError {
        super::reject(
            "rating",
            self.message.as_ref(),
            || {
                format!(
                    "Avaliação deve estar entre {} e {} com incrementos de {}",
                    self.min, self.max, self.increment
                )
            },
            reason,
        )
        .param("min", self.min.to_string())
        .param("max", self.max.to_string())
        .param("increment", self.increment.to_string())
    }

    /// Domain plausibility hook, applied after the numeric checks.
    ///
    /// Every on-grid rating is currently plausible.
    fn is_plausible_rating(&self, _rating: Decimal) -> bool {
        true
    }
}

impl ValidationRule<Decimal> for RatingRule {
    fn validate(&self, value: &Decimal) -> Result<(), RuleError> {
        if *value < self.min || *value > self.max {
            return Err(self.fail("out_of_range"));
        }

        if value.scale() > RATING_SCALE {
            return Err(self.fail("too_many_decimals"));
        }

        let rounded =
            value.round_dp_with_strategy(RATING_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded != *value {
            return Err(self.fail("too_many_decimals"));
        }

        // A zero increment leaves no grid to sit on; an offset wider than
        // Decimal can hold is off the grid too.
        let on_grid = rounded
            .checked_sub(self.min)
            .and_then(|offset| offset.checked_rem(self.increment))
            .is_some_and(|rem| rem.is_zero());
        if !on_grid {
            return Err(self.fail("off_increment"));
        }

        if !self.is_plausible_rating(rounded) {
            return Err(self.fail("implausible"));
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "rating"
    }
}
